//! Matrix type for 2D numeric data.

use super::Scalar;
use crate::codec;
use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A 2D matrix of floating-point values (row-major storage).
///
/// A value is either valid (`rows > 0`, `cols > 0`, exactly `rows * cols`
/// elements) or the empty sentinel returned by [`Matrix::empty`]; no other
/// state is observable. Storage is exclusively owned and every producing
/// operation allocates fresh storage.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
///     .expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or data length doesn't
    /// match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimensions { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(MatrizError::TruncatedData {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the empty sentinel: zero dimensions, no storage.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Returns true for the empty sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Drops the owned storage and resets the value to the empty sentinel.
    ///
    /// Safe to call on an already-released value; a released matrix
    /// compares equal to [`Matrix::empty`].
    pub fn release(&mut self) {
        self.data = Vec::new();
        self.rows = 0;
        self.cols = 0;
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns the underlying data as a row-major slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Matrix<Scalar> {
    /// Creates a zero-filled matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        })
    }

    /// Adds `rhs` element-wise, writing into a caller-allocated `out`.
    ///
    /// Nothing is written unless all three shapes agree.
    ///
    /// # Errors
    ///
    /// Returns an error if any operand is empty or shapes disagree.
    pub fn add_into(&self, rhs: &Self, out: &mut Self) -> Result<()> {
        self.check_elementwise(rhs, out)?;
        for (dst, (a, b)) in out.data.iter_mut().zip(self.data.iter().zip(rhs.data.iter())) {
            *dst = a + b;
        }
        Ok(())
    }

    /// Subtracts `rhs` element-wise, writing into a caller-allocated `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if any operand is empty or shapes disagree.
    pub fn sub_into(&self, rhs: &Self, out: &mut Self) -> Result<()> {
        self.check_elementwise(rhs, out)?;
        for (dst, (a, b)) in out.data.iter_mut().zip(self.data.iter().zip(rhs.data.iter())) {
            *dst = a - b;
        }
        Ok(())
    }

    /// Matrix product, writing into a caller-allocated `out` of shape
    /// `self.rows x rhs.cols`.
    ///
    /// The inner accumulation runs in ascending-k order with native
    /// addition; the summation order is part of the numeric contract.
    /// Nothing is written unless validation passes.
    ///
    /// # Errors
    ///
    /// Returns an error if any operand is empty, `self.cols != rhs.rows`,
    /// or `out` does not have the product shape.
    pub fn mul_into(&self, rhs: &Self, out: &mut Self) -> Result<()> {
        if self.is_empty() || rhs.is_empty() || out.is_empty() {
            return Err(MatrizError::EmptyMatrix);
        }
        if self.cols != rhs.rows {
            return Err(MatrizError::incompatible_shapes(self.shape(), rhs.shape()));
        }
        if out.shape() != (self.rows, rhs.cols) {
            return Err(MatrizError::incompatible_shapes(
                (self.rows, rhs.cols),
                out.shape(),
            ));
        }

        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * rhs.get(k, j);
                }
                out.set(i, j, sum);
            }
        }
        Ok(())
    }

    /// Adds another matrix element-wise into a fresh result.
    ///
    /// # Errors
    ///
    /// Returns an error if an operand is empty or dimensions don't match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        let mut out = Self::zeros(self.rows, self.cols)?;
        self.add_into(other, &mut out)?;
        Ok(out)
    }

    /// Subtracts another matrix element-wise into a fresh result.
    ///
    /// # Errors
    ///
    /// Returns an error if an operand is empty or dimensions don't match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        let mut out = Self::zeros(self.rows, self.cols)?;
        self.sub_into(other, &mut out)?;
        Ok(out)
    }

    /// Matrix-matrix multiplication into a fresh result.
    ///
    /// # Errors
    ///
    /// Returns an error if an operand is empty or `self.cols != other.rows`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.is_empty() || other.is_empty() {
            return Err(MatrizError::EmptyMatrix);
        }
        if self.cols != other.rows {
            return Err(MatrizError::incompatible_shapes(self.shape(), other.shape()));
        }
        let mut out = Self::zeros(self.rows, other.cols)?;
        self.mul_into(other, &mut out)?;
        Ok(out)
    }

    /// Transposes the matrix into a fresh `cols x rows` result.
    ///
    /// # Errors
    ///
    /// Returns an error on the empty sentinel.
    pub fn transpose(&self) -> Result<Self> {
        if self.is_empty() {
            return Err(MatrizError::EmptyMatrix);
        }
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Ok(Self {
            data,
            rows: self.cols,
            cols: self.rows,
        })
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// Cost grows factorially with the dimension; intended for small
    /// matrices only. The expansion order (ascending column, alternating
    /// sign) fixes the rounding behavior on inexact inputs.
    ///
    /// # Errors
    ///
    /// Returns an error on the empty sentinel or a non-square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::primitives::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])
    ///     .expect("data length matches rows * cols");
    /// let det = m.determinant().expect("matrix is square");
    /// assert!((det - (-2.0)).abs() < 1e-12);
    /// ```
    pub fn determinant(&self) -> Result<Scalar> {
        if self.is_empty() {
            return Err(MatrizError::EmptyMatrix);
        }
        if self.rows != self.cols {
            return Err(MatrizError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.det_cofactor())
    }

    fn det_cofactor(&self) -> Scalar {
        let n = self.rows;
        if n == 1 {
            return self.data[0];
        }
        if n == 2 {
            return self.data[0] * self.data[3] - self.data[1] * self.data[2];
        }

        let mut det = 0.0;
        for col in 0..n {
            let minor = self.first_row_minor(col);
            let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
            det += sign * self.get(0, col) * minor.det_cofactor();
        }
        det
    }

    /// Minor formed by deleting row 0 and the given column.
    fn first_row_minor(&self, col: usize) -> Self {
        let n = self.rows;
        let mut data = Vec::with_capacity((n - 1) * (n - 1));
        for row in 1..n {
            for k in 0..n {
                if k != col {
                    data.push(self.data[row * self.cols + k]);
                }
            }
        }
        Self {
            data,
            rows: n - 1,
            cols: n - 1,
        }
    }

    /// Loads a matrix from a text file in the codec's format.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let (rows, cols, data) = codec::read_matrix(path)?;
        Self::from_vec(rows, cols, data)
    }

    /// Saves the matrix to a text file in the codec's format.
    ///
    /// Element values are written with two decimal digits, so persistence
    /// is lossy beyond that precision.
    ///
    /// # Errors
    ///
    /// Returns an error on the empty sentinel or if the file cannot be
    /// written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if self.is_empty() {
            return Err(MatrizError::EmptyMatrix);
        }
        codec::write_matrix(path, self.rows, self.cols, &self.data)
    }

    fn check_same_shape(&self, rhs: &Self) -> Result<()> {
        if self.is_empty() || rhs.is_empty() {
            return Err(MatrizError::EmptyMatrix);
        }
        if self.shape() != rhs.shape() {
            return Err(MatrizError::dimension_mismatch(self.shape(), rhs.shape()));
        }
        Ok(())
    }

    fn check_elementwise(&self, rhs: &Self, out: &Self) -> Result<()> {
        if self.is_empty() || rhs.is_empty() || out.is_empty() {
            return Err(MatrizError::EmptyMatrix);
        }
        if self.shape() != rhs.shape() {
            return Err(MatrizError::dimension_mismatch(self.shape(), rhs.shape()));
        }
        if out.shape() != self.shape() {
            return Err(MatrizError::dimension_mismatch(self.shape(), out.shape()));
        }
        Ok(())
    }
}

impl fmt::Display for Matrix<Scalar> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Matrix (empty)");
        }
        writeln!(f, "Matrix {}x{}:", self.rows, self.cols)?;
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{:.2} ", self.get(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod contract;
