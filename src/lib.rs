//! ndpack - Binary object-graph serialization with compact dense-array records
//!
//! A self-delimiting opcode stream for recursive object graphs (scalars,
//! strings, lists, dicts) with shared-node preservation, plus one dedicated
//! record kind that stores a dense numeric array as dtype + shape + raw
//! element bytes instead of a nested structure of per-element nodes.
//!
//! # Features
//!
//! - Nodes aliased through several `Rc` handles encode once; later
//!   occurrences become back-references and decode back to shared nodes
//! - Dense arrays travel as a single compact binary record
//! - Streaming decode that consumes exactly its own bytes, so it works over
//!   pipes, compressed streams, and multi-frame sources
//! - Plain, gzip, and bzip2 file helpers
//!
//! # Example
//!
//! ```rust
//! use ndpack::{DType, NdArray, Value, reader, writer};
//! use std::rc::Rc;
//!
//! let point = Rc::new(Value::Array(NdArray::new(
//!     DType::parse("<f4").unwrap(),
//!     vec![3],
//!     vec![0u8; 12],
//! )));
//! let graph = Rc::new(Value::Dict(vec![
//!     ("origin".into(), point.clone()),
//!     ("target".into(), point),
//! ]));
//!
//! let bytes = writer::to_bytes(&graph).unwrap();
//! let back = reader::from_bytes(&bytes).unwrap();
//! assert_eq!(graph, back);
//! ```

pub mod error;
pub mod reader;
pub mod store;
pub mod types;
pub mod writer;

#[cfg(feature = "ndarray")]
pub mod ndarray_ext;

// Re-export common types at crate root
pub use error::Error;
pub use reader::{Reader, from_bytes};
pub use store::{dump, dump_bzip2, dump_gzip, load, load_bzip2, load_gzip};
pub use types::{DEFAULT_PROTOCOL, DType, Kind, NdArray, Opcode, Order, Value};
pub use writer::{Sink, Writer, to_bytes};

#[cfg(feature = "ndarray")]
pub use ndarray_ext::{ConvertError, Element};
