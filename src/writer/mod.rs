//! Serialization of value graphs

mod array;
mod sink;
mod value;

pub use sink::Sink;

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Error;
use crate::types::{DEFAULT_PROTOCOL, Opcode, Value, protocol_supported};

/// Probe state for the sink's direct-transfer capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BulkState {
    Untested,
    Supported,
    Unsupported,
}

/// Streaming encoder for value graphs
///
/// One frame per `dump` call: `Proto <version>`, the root value, `Stop`.
/// Objects reachable through several `Rc` handles are written once and
/// referenced by memo index afterwards.
pub struct Writer<W: Sink> {
    sink: W,
    protocol: u8,
    memo: HashMap<usize, u32>,
    bulk: BulkState,
}

impl<W: Sink> Writer<W> {
    /// Create a writer for one of the two supported protocol versions (2, 3)
    pub fn new(sink: W, protocol: u8) -> Result<Self, Error> {
        if !protocol_supported(protocol) {
            return Err(Error::UnsupportedProtocol(protocol));
        }
        Ok(Self {
            sink,
            protocol,
            memo: HashMap::new(),
            bulk: BulkState::Untested,
        })
    }

    /// Write one complete frame for the graph rooted at `value`
    ///
    /// The memo table resets per frame so each frame is self-contained; the
    /// bulk-capability state does not, it belongs to the writer's lifetime.
    pub fn dump(&mut self, value: &Rc<Value>) -> Result<(), Error> {
        self.memo.clear();
        self.sink.write_all(&[Opcode::Proto as u8, self.protocol])?;
        self.write_value(value)?;
        self.sink.write_all(&[Opcode::Stop as u8])?;
        Ok(())
    }

    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    /// Consume the writer, returning the sink
    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Encode a graph to bytes with the default protocol
pub fn to_bytes(value: &Rc<Value>) -> Result<Vec<u8>, Error> {
    let mut writer = Writer::new(Vec::new(), DEFAULT_PROTOCOL)?;
    writer.dump(value)?;
    Ok(writer.into_inner())
}
