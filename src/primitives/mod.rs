//! Core compute primitives (Matrix).
//!
//! The matrix type provides the foundation for the expression pipeline
//! and the text codec's in-memory side.

mod matrix;

pub use matrix::Matrix;

/// Element type for all arithmetic operations.
///
/// Switching this alias rebuilds the whole crate for another float width;
/// nothing outside this line assumes a particular precision.
pub type Scalar = f64;
