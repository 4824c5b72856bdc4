//! The fixed-length tensor type and its accessor surface.

use crate::error::TensorError;

/// A fixed-length, mutable, one-dimensional array of `f32`.
///
/// The buffer is allocated once in [`Tensor::new`] and its length never
/// changes for the lifetime of the value. Elements start zeroed. All
/// element access is bounds-checked against `[0, len)`; a rejected access
/// leaves the tensor unchanged.
///
/// `Tensor` is a plain owned value with no interior mutability. It is
/// `Send + Sync`, but concurrent mutation of a shared instance requires
/// external synchronization (one exclusive lock per instance, or
/// single-owner-thread access).
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor {
    data: Box<[f32]>,
}

impl Tensor {
    /// Allocate a tensor of `len` elements, all zero.
    ///
    /// Allocation is fallible: if the buffer cannot be reserved (the byte
    /// size overflows `isize::MAX`, or the allocator reports exhaustion),
    /// returns [`TensorError::AllocationFailed`] and no partial object.
    pub fn new(len: usize) -> Result<Self, TensorError> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| TensorError::AllocationFailed { requested: len })?;
        data.resize(len, 0.0);
        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Number of elements. Fixed at construction.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the tensor has zero elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read the element at `index`.
    pub fn get(&self, index: usize) -> Result<f32, TensorError> {
        self.data
            .get(index)
            .copied()
            .ok_or(TensorError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    /// Overwrite the element at `index`. No other state changes.
    pub fn set(&mut self, index: usize, value: f32) -> Result<(), TensorError> {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(TensorError::IndexOutOfBounds { index, len }),
        }
    }

    /// Borrow the contents as a slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}
