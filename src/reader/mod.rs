//! Streaming decoder for value graphs
//!
//! The reader works against any sequential byte source. Every read
//! accumulates until the exact requested count, so a frame embedded in a
//! pipe, a compressed stream, or a longer byte sequence consumes only its
//! own bytes.

mod array;
mod value;

use std::io::{self, Read};
use std::rc::Rc;

use crate::error::Error;
use crate::types::{Opcode, Value, protocol_supported};

/// Streaming decoder, one frame per `load` call
pub struct Reader<R: Read> {
    source: R,
    memo: Vec<Rc<Value>>,
}

impl<R: Read> Reader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            memo: Vec::new(),
        }
    }

    /// Decode one frame: `Proto <version>`, one value, `Stop`
    pub fn load(&mut self) -> Result<Rc<Value>, Error> {
        self.memo.clear();
        let op = self.read_u8()?;
        if op != Opcode::Proto as u8 {
            return Err(Error::InvalidOpcode(op));
        }
        let version = self.read_u8()?;
        if !protocol_supported(version) {
            return Err(Error::UnsupportedProtocol(version));
        }
        let value = self.read_value()?;
        let stop = self.read_u8()?;
        if stop != Opcode::Stop as u8 {
            return Err(Error::InvalidOpcode(stop));
        }
        Ok(value)
    }

    /// Consume the reader, returning the source
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Append a freshly decoded object to the memo table, preserving read
    /// order so back-reference indexes resolve
    pub(crate) fn memoize(&mut self, value: Rc<Value>) -> Rc<Value> {
        self.memo.push(value.clone());
        value
    }

    pub(crate) fn backref(&self, idx: u32) -> Result<Rc<Value>, Error> {
        self.memo
            .get(idx as usize)
            .cloned()
            .ok_or(Error::UnknownBackref(idx))
    }

    /// Read exactly `buf.len()` bytes, accumulating partial reads. A source
    /// that ends early is truncation; a zero-length request trivially
    /// succeeds.
    pub(crate) fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.source.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(Error::Truncated {
                        expected: buf.len(),
                        got: filled,
                    });
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            }
        }
        Ok(())
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, Error> {
        let mut buf = [0u8; 1];
        self.read_exact_into(&mut buf)?;
        Ok(buf[0])
    }

    pub(crate) fn read_u32_le(&mut self) -> Result<u32, Error> {
        let mut buf = [0u8; 4];
        self.read_exact_into(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    pub(crate) fn read_u32_ne(&mut self) -> Result<u32, Error> {
        let mut buf = [0u8; 4];
        self.read_exact_into(&mut buf)?;
        Ok(u32::from_ne_bytes(buf))
    }

    pub(crate) fn read_i64_le(&mut self) -> Result<i64, Error> {
        let mut buf = [0u8; 8];
        self.read_exact_into(&mut buf)?;
        Ok(i64::from_le_bytes(buf))
    }

    pub(crate) fn read_f64_le(&mut self) -> Result<f64, Error> {
        let mut buf = [0u8; 8];
        self.read_exact_into(&mut buf)?;
        Ok(f64::from_le_bytes(buf))
    }

    pub(crate) fn read_vec(&mut self, len: usize) -> Result<Vec<u8>, Error> {
        let mut buf = vec![0u8; len];
        self.read_exact_into(&mut buf)?;
        Ok(buf)
    }
}

/// Decode one frame from bytes; trailing bytes are left untouched
pub fn from_bytes(bytes: &[u8]) -> Result<Rc<Value>, Error> {
    Reader::new(bytes).load()
}
