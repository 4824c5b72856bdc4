//! TensorError -> Python exception mapping.
//!
//! Bounds failures surface as `IndexError` (the original C module raised
//! `TypeError` for these, which was a misclassification) and allocation
//! failures as `MemoryError`. Argument-kind failures (`TypeError`) are
//! raised directly at the extraction sites in the class module.

use pyo3::exceptions::{PyIndexError, PyMemoryError};
use pyo3::PyErr;
use tensor1d::TensorError;

/// Convert a core error into the matching Python exception.
pub(crate) fn to_py_err(err: TensorError) -> PyErr {
    match err {
        TensorError::AllocationFailed { .. } => PyMemoryError::new_err(message(err)),
        TensorError::IndexOutOfBounds { .. } => PyIndexError::new_err(message(err)),
    }
}

/// Exception message for a core error. The core's `Display` text already
/// carries the context (index, length, requested count), so reuse it.
fn message(err: TensorError) -> String {
    err.to_string()
}
