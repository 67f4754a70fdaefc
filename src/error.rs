//! Error types for ndpack

use std::error::Error as StdError;
use std::fmt;
use std::io;

/// Ndpack-specific error type
#[derive(Debug)]
pub enum Error {
    /// Protocol version outside the supported set {2, 3}
    UnsupportedProtocol(u8),
    /// Opcode byte that is unknown or not valid at this position
    InvalidOpcode(u8),
    /// Dtype descriptor that does not parse to a known element type
    UnknownDtype(String),
    /// Invalid UTF-8 in a string record
    InvalidUtf8,
    /// Back-reference to an object index the stream never produced
    UnknownBackref(u32),
    /// Stream ended before a record's declared byte count was available
    Truncated { expected: usize, got: usize },
    /// Array buffer length disagrees with its dtype and shape
    SizeMismatch { expected: u64, actual: u64 },
    /// Bytes values cannot be encoded under protocol 2
    BytesUnsupported(u8),
    /// I/O failure from the underlying sink or source
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedProtocol(v) => {
                write!(f, "unsupported protocol version: {} (supported: 2 and 3)", v)
            }
            Error::InvalidOpcode(op) => write!(f, "invalid opcode: 0x{:02X}", op),
            Error::UnknownDtype(s) => write!(f, "unknown dtype descriptor: {:?}", s),
            Error::InvalidUtf8 => write!(f, "invalid UTF-8 in string"),
            Error::UnknownBackref(idx) => {
                write!(f, "back-reference to unknown object index {}", idx)
            }
            Error::Truncated { expected, got } => {
                write!(
                    f,
                    "stream truncated: expected {} bytes, got {}",
                    expected, got
                )
            }
            Error::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "array data size mismatch: expected {} bytes, got {}",
                    expected, actual
                )
            }
            Error::BytesUnsupported(v) => {
                write!(
                    f,
                    "bytes values require protocol 3, writer configured for protocol {}",
                    v
                )
            }
            Error::Io(e) => write!(f, "{}", e),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
