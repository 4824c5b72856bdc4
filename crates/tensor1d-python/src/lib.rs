//! Python bindings for the `tensor1d` fixed-length float array.
//!
//! This crate wraps [`tensor1d::Tensor`] as a native Python class. The
//! extension module is named `_tensor1d`; the class it exports is
//! `tensor`, matching the original extension module's spelling:
//!
//! ```python
//! from _tensor1d import tensor
//!
//! t = tensor(3)
//! t[0] = 1
//! t[1] = 2.5
//! print(t)        # array([1.000000,2.500000,0.000000])
//! assert len(t) == 3
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use pyo3::prelude::*;

mod error;
mod tensor;

/// The native `_tensor1d` extension module.
#[pymodule]
fn _tensor1d(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<tensor::PyTensor>()?;
    Ok(())
}
