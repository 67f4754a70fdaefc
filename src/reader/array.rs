//! Array record decoding

use std::io::Read;

use super::Reader;
use crate::error::Error;
use crate::types::{DType, NdArray};

impl<R: Read> Reader<R> {
    /// Decode an array record after its opcode has been consumed
    ///
    /// The payload length is computed from the metadata and trusted: exactly
    /// `elem_count * itemsize` bytes are read, never more, so the bytes that
    /// follow the record stay untouched even on pipe-like sources. The byte
    /// region already is the row-major element buffer; restoring the shape
    /// moves no data.
    pub(crate) fn read_array(&mut self) -> Result<NdArray, Error> {
        let descr_len = self.read_u8()? as usize;
        let descr_buf = self.read_vec(descr_len)?;
        let descr = std::str::from_utf8(&descr_buf).map_err(|_| Error::InvalidUtf8)?;
        let dtype =
            DType::parse(descr).ok_or_else(|| Error::UnknownDtype(descr.to_string()))?;

        let rank = self.read_u32_ne()? as usize;
        let mut shape = Vec::new();
        for _ in 0..rank {
            shape.push(self.read_u32_ne()?);
        }

        let count: u64 = shape.iter().map(|&d| d as u64).product();
        let byte_len = count * dtype.itemsize() as u64;
        let data = self.read_vec(byte_len as usize)?;

        Ok(NdArray::new(dtype, shape, data))
    }
}
