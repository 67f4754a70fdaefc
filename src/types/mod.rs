//! Core types for the ndpack format

mod array;
mod dtype;
mod opcode;
mod value;

pub use array::NdArray;
pub use dtype::{DType, Kind, Order};
pub use opcode::{DEFAULT_PROTOCOL, Opcode, protocol_supported};
pub use value::Value;
