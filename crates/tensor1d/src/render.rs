//! Text rendering of tensor contents.
//!
//! The rendering is `array([v0,v1,...,vn-1])` with each element in
//! six-decimal fixed notation, the convention the original extension
//! module established with `%f`. The separator is written between
//! elements rather than stripped off the tail afterwards, so the
//! zero-length case needs no special handling.

use std::fmt;

use crate::tensor::Tensor;

impl Tensor {
    /// Render the contents as `array([...])`.
    ///
    /// Purely a read; O(len).
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("array([")?;
        for (i, v) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{v:.6}")?;
        }
        f.write_str("])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_renders_as_bare_brackets() {
        let t = Tensor::new(0).unwrap();
        assert_eq!(t.render(), "array([])");
    }

    #[test]
    fn six_decimal_fixed_notation() {
        let mut t = Tensor::new(3).unwrap();
        t.set(0, 1.0).unwrap();
        t.set(1, 2.5).unwrap();
        t.set(2, -3.0).unwrap();
        assert_eq!(t.render(), "array([1.000000,2.500000,-3.000000])");
    }

    #[test]
    fn single_element_has_no_separator() {
        let mut t = Tensor::new(1).unwrap();
        t.set(0, 0.125).unwrap();
        assert_eq!(t.render(), "array([0.125000])");
    }

    #[test]
    fn display_and_render_agree() {
        let mut t = Tensor::new(2).unwrap();
        t.set(1, 7.75).unwrap();
        assert_eq!(format!("{t}"), t.render());
    }
}
