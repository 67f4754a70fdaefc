//! Byte sinks for the writer

use std::fs::File;
use std::io::{self, BufWriter, Cursor, Write};

/// A byte sink the writer encodes into
///
/// `write_bulk` is the optional direct-transfer capability: move the whole
/// buffer to the underlying handle in one call, or report that no such path
/// exists by returning `Ok(false)`. The writer probes it at most once per
/// instance and falls back permanently to sequential `write_all` afterwards.
pub trait Sink: Write {
    fn write_bulk(&mut self, buf: &[u8]) -> io::Result<bool> {
        let _ = buf;
        Ok(false)
    }
}

impl Sink for File {
    fn write_bulk(&mut self, buf: &[u8]) -> io::Result<bool> {
        self.write_all(buf)?;
        Ok(true)
    }
}

impl Sink for Vec<u8> {}

impl<T> Sink for Cursor<T> where Cursor<T>: Write {}

// A buffered sink has no direct path: payload bytes must flow through the
// buffer to stay ordered behind the metadata already queued there.
impl<W: Write> Sink for BufWriter<W> {}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_bulk(&mut self, buf: &[u8]) -> io::Result<bool> {
        (**self).write_bulk(buf)
    }
}
