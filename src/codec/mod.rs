//! Plain-text matrix serialization.
//!
//! Wire format:
//!
//! ```text
//! <rows> <cols>
//! <r0c0> <r0c1> ...
//! ...
//! ```
//!
//! The header holds two positive integers; elements follow in row-major
//! order and accept any parseable floating format on decode. Encode writes
//! every element with two decimal digits and a trailing space, so a
//! save/load round trip is lossy beyond that precision (within 0.005 per
//! element).
//!
//! The codec works on flat row-major buffers and knows nothing about
//! [`Matrix`](crate::primitives::Matrix); the engine marshals between the
//! two representations.

use crate::error::{MatrizError, Result};
use crate::primitives::Scalar;
use std::fs;
use std::path::Path;

/// Decodes a textual matrix into `(rows, cols, flat row-major buffer)`.
///
/// Parsing is strict: the first malformed token (bad header, non-numeric
/// element, short element count) aborts the whole decode and no partial
/// buffer is returned. Trailing content past the last needed element is
/// ignored.
///
/// # Errors
///
/// Returns an error if the header is missing, non-numeric, or names a zero
/// dimension, if an element fails to parse, or if elements run out early.
///
/// # Examples
///
/// ```
/// use matriz::codec;
///
/// let (rows, cols, data) = codec::decode("2 2\n1.0 2.0\n3.0 4.0\n")
///     .expect("text is a well-formed 2x2 matrix");
/// assert_eq!((rows, cols), (2, 2));
/// assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0]);
/// ```
pub fn decode(text: &str) -> Result<(usize, usize, Vec<Scalar>)> {
    let mut tokens = text.split_whitespace();
    let rows = parse_dimension(tokens.next(), "rows")?;
    let cols = parse_dimension(tokens.next(), "cols")?;

    let expected = rows * cols;
    let mut data = Vec::with_capacity(expected);
    for index in 0..expected {
        let token = tokens.next().ok_or(MatrizError::TruncatedData {
            expected,
            actual: index,
        })?;
        let value = token
            .parse::<Scalar>()
            .map_err(|_| MatrizError::InvalidElement {
                index,
                token: token.to_string(),
            })?;
        data.push(value);
    }

    Ok((rows, cols, data))
}

/// Encodes a flat row-major buffer as text.
///
/// Output is the header line followed by one line per row, each element
/// formatted with two decimal digits and a trailing space.
///
/// # Errors
///
/// Returns an error if a dimension is zero or the buffer length disagrees
/// with `rows * cols`.
pub fn encode(rows: usize, cols: usize, data: &[Scalar]) -> Result<String> {
    if rows == 0 || cols == 0 {
        return Err(MatrizError::InvalidDimensions { rows, cols });
    }
    if data.len() != rows * cols {
        return Err(MatrizError::TruncatedData {
            expected: rows * cols,
            actual: data.len(),
        });
    }

    let mut out = format!("{rows} {cols}\n");
    for row in 0..rows {
        for col in 0..cols {
            out.push_str(&format!("{:.2} ", data[row * cols + col]));
        }
        out.push('\n');
    }
    Ok(out)
}

/// Reads and decodes a matrix file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content fails to
/// decode.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<(usize, usize, Vec<Scalar>)> {
    let text = fs::read_to_string(path)?;
    decode(&text)
}

/// Encodes a matrix and writes it to a file.
///
/// # Errors
///
/// Returns an error if the buffer disagrees with the dimensions or the
/// file cannot be written.
pub fn write_matrix<P: AsRef<Path>>(path: P, rows: usize, cols: usize, data: &[Scalar]) -> Result<()> {
    let text = encode(rows, cols, data)?;
    fs::write(path, text)?;
    Ok(())
}

fn parse_dimension(token: Option<&str>, what: &str) -> Result<usize> {
    let token = token.ok_or_else(|| MatrizError::invalid_header(format!("missing {what} count")))?;
    let value = token.parse::<usize>().map_err(|_| {
        MatrizError::invalid_header(format!("{what} count {token:?} is not an integer"))
    })?;
    if value == 0 {
        return Err(MatrizError::invalid_header(format!(
            "{what} count must be positive"
        )));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
