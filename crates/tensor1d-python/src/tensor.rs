//! PyTensor: the `tensor` Python class wrapping [`tensor1d::Tensor`].

use pyo3::exceptions::{PyIndexError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyFloat, PyInt};

use tensor1d::Tensor;

use crate::error::to_py_err;

/// A fixed-length, mutable array of single-precision floats.
///
/// Construct with an element count; read and write elements by integer
/// subscript. The length is fixed for the object's lifetime and elements
/// start at zero.
#[pyclass(name = "tensor")]
#[derive(Debug)]
pub(crate) struct PyTensor {
    inner: Tensor,
}

#[pymethods]
impl PyTensor {
    /// Create a tensor of `length` zeroed elements.
    ///
    /// Raises `ValueError` for a negative length and `MemoryError` if the
    /// buffer cannot be allocated.
    #[new]
    fn new(length: i64) -> PyResult<Self> {
        if length < 0 {
            return Err(PyValueError::new_err(format!(
                "tensor length must be non-negative, got {length}"
            )));
        }
        let inner = Tensor::new(length as usize).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Element count. Fixed at construction.
    #[getter]
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __getitem__(&self, key: &Bound<'_, PyAny>) -> PyResult<f32> {
        let index = coerce_index(key, self.inner.len())?;
        self.inner.get(index).map_err(to_py_err)
    }

    fn __setitem__(&mut self, key: &Bound<'_, PyAny>, value: &Bound<'_, PyAny>) -> PyResult<()> {
        let index = coerce_index(key, self.inner.len())?;
        let value = coerce_value(value)?;
        self.inner.set(index, value).map_err(to_py_err)
    }

    /// Render the contents as `array([v0,v1,...])` with six-decimal
    /// fixed notation.
    fn render(&self) -> String {
        self.inner.render()
    }

    fn __str__(&self) -> String {
        self.inner.render()
    }

    fn __repr__(&self) -> String {
        format!("tensor({})", self.inner.len())
    }
}

/// Extract a subscript as a buffer index.
///
/// Non-integer subscripts raise `TypeError`. Negative indices, and
/// integers too large for `i64`, cannot address any slot and raise
/// `IndexError` directly; in-range non-negative values are bounds-checked
/// by the core afterwards.
fn coerce_index(key: &Bound<'_, PyAny>, len: usize) -> PyResult<usize> {
    let Ok(int) = key.downcast::<PyInt>() else {
        return Err(PyTypeError::new_err("tensor indices must be integers"));
    };
    match int.extract::<i64>() {
        Ok(i) if i >= 0 => Ok(i as usize),
        _ => Err(PyIndexError::new_err(format!(
            "index {int} out of bounds for tensor of length {len}"
        ))),
    }
}

/// Extract an element value, coercing `int` to `f32` as the original
/// module does. Anything that is neither `float` nor `int` raises
/// `TypeError`.
fn coerce_value(value: &Bound<'_, PyAny>) -> PyResult<f32> {
    if let Ok(f) = value.downcast::<PyFloat>() {
        return Ok(f.value() as f32);
    }
    if value.downcast::<PyInt>().is_ok() {
        return Ok(value.extract::<f64>()? as f32);
    }
    Err(PyTypeError::new_err("tensor values must be float or int"))
}
