//! One-shot helpers for writing and reading archives on disk
//!
//! Plain files get the writer's bulk payload path; gzip and bzip2 streams
//! exercise the sequential fallback. Each helper runs exactly one frame.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use std::rc::Rc;

use bzip2::Compression as BzCompression;
use bzip2::read::BzDecoder;
use bzip2::write::BzEncoder;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::error::Error;
use crate::reader::Reader;
use crate::types::{DEFAULT_PROTOCOL, Value};
use crate::writer::{Sink, Writer};

// Compression encoders have no direct transfer path: payload bytes must run
// through the compressor like everything else.
impl<W: Write> Sink for GzEncoder<W> {}
impl<W: Write> Sink for BzEncoder<W> {}

/// Write a graph to a plain file
pub fn dump(value: &Rc<Value>, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "writing archive");
    let file = File::create(path)?;
    let mut writer = Writer::new(file, DEFAULT_PROTOCOL)?;
    writer.dump(value)
}

/// Read a graph from a plain file
pub fn load(path: impl AsRef<Path>) -> Result<Rc<Value>, Error> {
    let file = File::open(path.as_ref())?;
    Reader::new(BufReader::new(file)).load()
}

/// Write a graph to a gzip-compressed file
pub fn dump_gzip(value: &Rc<Value>, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "writing gzip archive");
    let file = File::create(path)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut writer = Writer::new(encoder, DEFAULT_PROTOCOL)?;
    writer.dump(value)?;
    writer.into_inner().finish()?;
    Ok(())
}

/// Read a graph from a gzip-compressed file
pub fn load_gzip(path: impl AsRef<Path>) -> Result<Rc<Value>, Error> {
    let file = File::open(path.as_ref())?;
    Reader::new(GzDecoder::new(BufReader::new(file))).load()
}

/// Write a graph to a bzip2-compressed file
pub fn dump_bzip2(value: &Rc<Value>, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "writing bzip2 archive");
    let file = File::create(path)?;
    let encoder = BzEncoder::new(file, BzCompression::default());
    let mut writer = Writer::new(encoder, DEFAULT_PROTOCOL)?;
    writer.dump(value)?;
    writer.into_inner().finish()?;
    Ok(())
}

/// Read a graph from a bzip2-compressed file
pub fn load_bzip2(path: impl AsRef<Path>) -> Result<Rc<Value>, Error> {
    let file = File::open(path.as_ref())?;
    Reader::new(BzDecoder::new(BufReader::new(file))).load()
}
