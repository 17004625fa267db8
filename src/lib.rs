//! Matriz: dense matrix arithmetic with plain-text persistence.
//!
//! Matriz owns a single row-major [`Matrix`] primitive, the arithmetic
//! needed to evaluate `A × B + C − Dᵀ` over matrices read from disk, and
//! the text codec those files use.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])
//!     .expect("data length matches rows * cols");
//! let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0])
//!     .expect("data length matches rows * cols");
//!
//! let product = a.matmul(&b).expect("2x2 * 2x2 is well-defined");
//! assert!((product.get(0, 0) - 19.0).abs() < 1e-12);
//!
//! let det = a.determinant().expect("matrix is square");
//! assert!((det - (-2.0)).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Matrix type, arithmetic, transpose, determinant
//! - [`codec`]: Text format encode/decode and the file boundary
//! - [`pipeline`]: Configuration-driven evaluation of the expression
//! - [`error`]: Crate-wide error type and Result alias

pub mod codec;
pub mod error;
pub mod pipeline;
pub mod prelude;
pub mod primitives;

pub use error::{MatrizError, Result};
pub use primitives::{Matrix, Scalar};
