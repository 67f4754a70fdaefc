//! ndarray integration for ndpack arrays
//!
//! Conversions between `NdArray` (dtype + shape + raw bytes) and ndarray's
//! dynamic-dimension arrays.
//!
//! Enable with the `ndarray` feature flag.

use crate::types::{DType, Kind, NdArray, Order};
use ndarray::{ArrayD, IxDyn};

/// Error type for ndarray conversions
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Dtype mismatch between the descriptor and the requested element type
    DtypeMismatch { expected: DType, actual: DType },
    /// Shape doesn't match data length
    ShapeMismatch { shape: Vec<u32>, data_len: usize },
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::DtypeMismatch { expected, actual } => {
                write!(f, "dtype mismatch: expected {}, got {}", expected, actual)
            }
            ConvertError::ShapeMismatch { shape, data_len } => {
                write!(f, "shape {:?} doesn't match data length {}", shape, data_len)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// Trait for primitive types storable in an `NdArray`
///
/// The chunk decoders require exactly `SIZE` bytes.
pub trait Element: Copy + 'static {
    const KIND: Kind;
    const SIZE: u32;

    /// Descriptor for this element type in host byte order
    fn dtype() -> DType {
        DType::new(Self::KIND, Self::SIZE, Order::native())
    }

    fn from_le(chunk: &[u8]) -> Self;
    fn from_be(chunk: &[u8]) -> Self;
    fn extend_ne(self, out: &mut Vec<u8>);
}

impl Element for u8 {
    const KIND: Kind = Kind::Uint;
    const SIZE: u32 = 1;

    fn from_le(chunk: &[u8]) -> Self {
        chunk[0]
    }
    fn from_be(chunk: &[u8]) -> Self {
        chunk[0]
    }
    fn extend_ne(self, out: &mut Vec<u8>) {
        out.push(self);
    }
}

impl Element for i8 {
    const KIND: Kind = Kind::Int;
    const SIZE: u32 = 1;

    fn from_le(chunk: &[u8]) -> Self {
        chunk[0] as i8
    }
    fn from_be(chunk: &[u8]) -> Self {
        chunk[0] as i8
    }
    fn extend_ne(self, out: &mut Vec<u8>) {
        out.push(self as u8);
    }
}

impl Element for u16 {
    const KIND: Kind = Kind::Uint;
    const SIZE: u32 = 2;

    fn from_le(chunk: &[u8]) -> Self {
        u16::from_le_bytes(chunk.try_into().unwrap())
    }
    fn from_be(chunk: &[u8]) -> Self {
        u16::from_be_bytes(chunk.try_into().unwrap())
    }
    fn extend_ne(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_ne_bytes());
    }
}

impl Element for i16 {
    const KIND: Kind = Kind::Int;
    const SIZE: u32 = 2;

    fn from_le(chunk: &[u8]) -> Self {
        i16::from_le_bytes(chunk.try_into().unwrap())
    }
    fn from_be(chunk: &[u8]) -> Self {
        i16::from_be_bytes(chunk.try_into().unwrap())
    }
    fn extend_ne(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_ne_bytes());
    }
}

impl Element for u32 {
    const KIND: Kind = Kind::Uint;
    const SIZE: u32 = 4;

    fn from_le(chunk: &[u8]) -> Self {
        u32::from_le_bytes(chunk.try_into().unwrap())
    }
    fn from_be(chunk: &[u8]) -> Self {
        u32::from_be_bytes(chunk.try_into().unwrap())
    }
    fn extend_ne(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_ne_bytes());
    }
}

impl Element for i32 {
    const KIND: Kind = Kind::Int;
    const SIZE: u32 = 4;

    fn from_le(chunk: &[u8]) -> Self {
        i32::from_le_bytes(chunk.try_into().unwrap())
    }
    fn from_be(chunk: &[u8]) -> Self {
        i32::from_be_bytes(chunk.try_into().unwrap())
    }
    fn extend_ne(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_ne_bytes());
    }
}

impl Element for u64 {
    const KIND: Kind = Kind::Uint;
    const SIZE: u32 = 8;

    fn from_le(chunk: &[u8]) -> Self {
        u64::from_le_bytes(chunk.try_into().unwrap())
    }
    fn from_be(chunk: &[u8]) -> Self {
        u64::from_be_bytes(chunk.try_into().unwrap())
    }
    fn extend_ne(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_ne_bytes());
    }
}

impl Element for i64 {
    const KIND: Kind = Kind::Int;
    const SIZE: u32 = 8;

    fn from_le(chunk: &[u8]) -> Self {
        i64::from_le_bytes(chunk.try_into().unwrap())
    }
    fn from_be(chunk: &[u8]) -> Self {
        i64::from_be_bytes(chunk.try_into().unwrap())
    }
    fn extend_ne(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_ne_bytes());
    }
}

impl Element for f32 {
    const KIND: Kind = Kind::Float;
    const SIZE: u32 = 4;

    fn from_le(chunk: &[u8]) -> Self {
        f32::from_le_bytes(chunk.try_into().unwrap())
    }
    fn from_be(chunk: &[u8]) -> Self {
        f32::from_be_bytes(chunk.try_into().unwrap())
    }
    fn extend_ne(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_ne_bytes());
    }
}

impl Element for f64 {
    const KIND: Kind = Kind::Float;
    const SIZE: u32 = 8;

    fn from_le(chunk: &[u8]) -> Self {
        f64::from_le_bytes(chunk.try_into().unwrap())
    }
    fn from_be(chunk: &[u8]) -> Self {
        f64::from_be_bytes(chunk.try_into().unwrap())
    }
    fn extend_ne(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_ne_bytes());
    }
}

// =============================================================================
// From ndarray to ndpack
// =============================================================================

impl NdArray {
    /// Create an `NdArray` from an ndarray array
    ///
    /// Contiguous input is reinterpreted without copying. Non-contiguous
    /// input (strided slices, reversed axes, transposed views) is first
    /// materialized into a fresh row-major buffer — the slow path, costing
    /// one extra full-buffer copy.
    pub fn from_ndarray<T: Element>(arr: ArrayD<T>) -> Self {
        let arr = if arr.is_standard_layout() {
            arr
        } else {
            arr.as_standard_layout().into_owned()
        };

        let shape: Vec<u32> = arr.shape().iter().map(|&d| d as u32).collect();
        let (vec, offset) = arr.into_raw_vec_and_offset();

        let data = match offset {
            Some(0) | None => {
                let byte_len = vec.len() * std::mem::size_of::<T>();
                let cap = vec.capacity() * std::mem::size_of::<T>();
                let ptr = vec.as_ptr();

                std::mem::forget(vec);

                // SAFETY:
                // - vec is forgotten so we own the allocation
                // - offset 0 (or an empty array) means ptr is the allocation
                //   start
                // - byte_len/cap are correctly rescaled for u8
                // - T is a primitive (Element) with a plain byte repr
                unsafe { Vec::from_raw_parts(ptr as *mut u8, byte_len, cap) }
            }
            _ => {
                let mut data = Vec::with_capacity(vec.len() * std::mem::size_of::<T>());
                for v in vec {
                    v.extend_ne(&mut data);
                }
                data
            }
        };

        NdArray::new(T::dtype(), shape, data)
    }

    /// Convert to an ndarray array, honoring the descriptor's byte order
    pub fn to_ndarray<T: Element>(&self) -> Result<ArrayD<T>, ConvertError> {
        if self.dtype.kind != T::KIND || self.dtype.size != T::SIZE {
            return Err(ConvertError::DtypeMismatch {
                expected: T::dtype(),
                actual: self.dtype,
            });
        }

        let shape: Vec<usize> = self.shape.iter().map(|&d| d as usize).collect();
        let itemsize = self.dtype.itemsize();
        let expected_len = shape.iter().product::<usize>() * itemsize;

        if self.data.len() != expected_len {
            return Err(ConvertError::ShapeMismatch {
                shape: self.shape.clone(),
                data_len: self.data.len(),
            });
        }

        let elements: Vec<T> = match self.dtype.order {
            Order::Little => self.data.chunks_exact(itemsize).map(T::from_le).collect(),
            Order::Big => self.data.chunks_exact(itemsize).map(T::from_be).collect(),
        };

        ArrayD::from_shape_vec(IxDyn(&shape), elements).map_err(|_| ConvertError::ShapeMismatch {
            shape: self.shape.clone(),
            data_len: self.data.len(),
        })
    }
}
