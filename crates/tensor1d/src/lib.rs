//! A fixed-length, mutable, one-dimensional array of `f32`.
//!
//! This is the core value type behind the `tensor` Python extension class.
//! It owns a contiguous buffer sized once at construction and exposes
//! bounds-checked element access, a length query, and a text rendering of
//! its contents. There is no resizing, no arithmetic, and no view/slicing
//! surface.
//!
//! ```rust
//! use tensor1d::Tensor;
//!
//! let mut t = Tensor::new(3).unwrap();
//! t.set(1, 2.5).unwrap();
//! assert_eq!(t.get(1), Ok(2.5));
//! assert_eq!(t.len(), 3);
//! assert_eq!(t.render(), "array([0.000000,2.500000,0.000000])");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod render;
mod tensor;

pub use error::TensorError;
pub use tensor::Tensor;
