//! Dense array values

use super::DType;

/// Dense array: dtype, shape, and row-major element bytes
///
/// The buffer is always contiguous; shape is purely logical metadata, so
/// restoring a shape after decoding moves no data.
#[derive(Debug, Clone, PartialEq)]
pub struct NdArray {
    pub dtype: DType,
    pub shape: Vec<u32>,
    pub data: Vec<u8>,
}

impl NdArray {
    pub fn new(dtype: DType, shape: Vec<u32>, data: Vec<u8>) -> Self {
        Self { dtype, shape, data }
    }

    /// Number of dimensions
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements (1 for rank 0, 0 if any dimension is 0)
    pub fn elem_count(&self) -> u64 {
        self.shape.iter().map(|&d| d as u64).product()
    }

    /// Expected data size in bytes
    pub fn expected_size(&self) -> u64 {
        self.elem_count() * self.dtype.itemsize() as u64
    }
}
