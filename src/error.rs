//! Error types for matriz operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for matriz operations.
///
/// Validation happens at the top of every operation; once it passes, the
/// operation completes fully, so each variant describes a precondition
/// failure rather than a partial result.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "2x2".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// A matrix cannot be allocated with a zero row or column count.
    InvalidDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Element-wise operands or the destination disagree in shape.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Multiplication operands cannot be chained (left cols != right rows),
    /// or the destination does not have the product shape.
    IncompatibleShapes {
        /// Left operand dimensions description
        left: String,
        /// Right operand dimensions description
        right: String,
    },

    /// The determinant is only defined for square matrices.
    NotSquare {
        /// Row count found
        rows: usize,
        /// Column count found
        cols: usize,
    },

    /// An operand or destination is the empty sentinel.
    EmptyMatrix,

    /// The textual header is missing, non-numeric, or names a zero dimension.
    InvalidHeader {
        /// Error description
        message: String,
    },

    /// An element token could not be parsed as a number.
    InvalidElement {
        /// Zero-based element index in row-major order
        index: usize,
        /// The offending token
        token: String,
    },

    /// The element count disagrees with the stated dimensions.
    TruncatedData {
        /// Elements required by the dimensions
        expected: usize,
        /// Elements actually present
        actual: usize,
    },

    /// Config deserialization error.
    Serialization(String),

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::InvalidDimensions { rows, cols } => {
                write!(f, "invalid dimensions: {rows}x{cols}, both must be positive")
            }
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            MatrizError::IncompatibleShapes { left, right } => {
                write!(f, "incompatible shapes for multiplication: {left} x {right}")
            }
            MatrizError::NotSquare { rows, cols } => {
                write!(
                    f,
                    "matrix is {rows}x{cols}, determinant requires a square matrix"
                )
            }
            MatrizError::EmptyMatrix => write!(f, "operation on an empty matrix"),
            MatrizError::InvalidHeader { message } => {
                write!(f, "invalid matrix header: {message}")
            }
            MatrizError::InvalidElement { index, token } => {
                write!(f, "invalid element at index {index}: {token:?}")
            }
            MatrizError::TruncatedData { expected, actual } => {
                write!(f, "truncated data: expected {expected} elements, got {actual}")
            }
            MatrizError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            MatrizError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for MatrizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatrizError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MatrizError {
    fn from(err: std::io::Error) -> Self {
        MatrizError::Io(err)
    }
}

impl From<serde_json::Error> for MatrizError {
    fn from(err: serde_json::Error) -> Self {
        MatrizError::Serialization(err.to_string())
    }
}

impl MatrizError {
    /// Create a dimension mismatch error from two shapes
    #[must_use]
    pub fn dimension_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Create an incompatible shapes error from two shapes
    #[must_use]
    pub fn incompatible_shapes(left: (usize, usize), right: (usize, usize)) -> Self {
        Self::IncompatibleShapes {
            left: format!("{}x{}", left.0, left.1),
            right: format!("{}x{}", right.0, right.1),
        }
    }

    /// Create an invalid header error with a description
    #[must_use]
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;
