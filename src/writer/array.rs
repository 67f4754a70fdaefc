//! Array record encoding

use super::{BulkState, Sink, Writer};
use crate::error::Error;
use crate::types::{NdArray, Opcode};

impl<W: Sink> Writer<W> {
    /// Write an array record: opcode, dtype descriptor, rank, shape, payload
    ///
    /// Rank and shape are native-order u32; the payload is the raw row-major
    /// element bytes, its length fully determined by the metadata.
    pub(crate) fn write_array(&mut self, arr: &NdArray) -> Result<(), Error> {
        let expected = arr.expected_size();
        if arr.data.len() as u64 != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: arr.data.len() as u64,
            });
        }

        self.sink.write_all(&[Opcode::Array as u8])?;
        let descr = arr.dtype.to_string();
        self.sink.write_all(&[descr.len() as u8])?;
        self.sink.write_all(descr.as_bytes())?;
        self.sink.write_all(&(arr.shape.len() as u32).to_ne_bytes())?;
        for dim in &arr.shape {
            self.sink.write_all(&dim.to_ne_bytes())?;
        }
        self.write_payload(&arr.data)
    }

    /// Payload write strategy: probe the sink's direct-transfer path once.
    /// After one failed probe the writer stays on the sequential path for the
    /// rest of its lifetime instead of re-probing per array.
    fn write_payload(&mut self, data: &[u8]) -> Result<(), Error> {
        match self.bulk {
            BulkState::Unsupported => self.sink.write_all(data)?,
            _ => {
                if self.sink.write_bulk(data)? {
                    self.bulk = BulkState::Supported;
                } else {
                    tracing::debug!("sink has no bulk transfer path, using sequential writes");
                    self.bulk = BulkState::Unsupported;
                    self.sink.write_all(data)?;
                }
            }
        }
        Ok(())
    }
}
