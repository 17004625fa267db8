//! File-driven evaluation of the expression `A × B + C − Dᵀ`.
//!
//! The engine and codec never pick file paths; callers describe one run
//! with a [`PipelineConfig`] and hand it to [`evaluate`]. Failures
//! propagate as error values; exit-code policy stays with the caller.

use crate::error::Result;
use crate::primitives::{Matrix, Scalar};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File layout for one evaluation: four input matrices and one output.
///
/// # Examples
///
/// ```
/// use matriz::pipeline::PipelineConfig;
///
/// let config = PipelineConfig::new()
///     .with_matrix_a("data/a.txt")
///     .with_output("data/out.txt");
/// assert_eq!(config.matrix_a.to_str(), Some("data/a.txt"));
/// assert_eq!(config.matrix_b.to_str(), Some("input_matrices/matrix_b.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Left factor of the product.
    pub matrix_a: PathBuf,
    /// Right factor of the product.
    pub matrix_b: PathBuf,
    /// Addend applied to the product.
    pub matrix_c: PathBuf,
    /// Matrix whose transpose is subtracted.
    pub matrix_d: PathBuf,
    /// Where the result is written.
    pub output: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            matrix_a: PathBuf::from("input_matrices/matrix_a.txt"),
            matrix_b: PathBuf::from("input_matrices/matrix_b.txt"),
            matrix_c: PathBuf::from("input_matrices/matrix_c.txt"),
            matrix_d: PathBuf::from("input_matrices/matrix_d.txt"),
            output: PathBuf::from("input_matrices/result.txt"),
        }
    }
}

impl PipelineConfig {
    /// Create a configuration with the default file layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path of the left product factor.
    #[must_use]
    pub fn with_matrix_a(mut self, path: impl Into<PathBuf>) -> Self {
        self.matrix_a = path.into();
        self
    }

    /// Set the path of the right product factor.
    #[must_use]
    pub fn with_matrix_b(mut self, path: impl Into<PathBuf>) -> Self {
        self.matrix_b = path.into();
        self
    }

    /// Set the path of the addend matrix.
    #[must_use]
    pub fn with_matrix_c(mut self, path: impl Into<PathBuf>) -> Self {
        self.matrix_c = path.into();
        self
    }

    /// Set the path of the matrix whose transpose is subtracted.
    #[must_use]
    pub fn with_matrix_d(mut self, path: impl Into<PathBuf>) -> Self {
        self.matrix_d = path.into();
        self
    }

    /// Set the output path.
    #[must_use]
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON
    /// for this structure.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }
}

/// Evaluates `A × B + C − Dᵀ` over the files named by `config`.
///
/// Loads the four inputs, runs the arithmetic, writes the result to
/// `config.output`, and returns it. The first failing step aborts the
/// run and nothing is written to the output path.
///
/// # Errors
///
/// Returns an error if any input fails to load, any arithmetic step gets
/// incompatible shapes, or the result cannot be saved.
pub fn evaluate(config: &PipelineConfig) -> Result<Matrix<Scalar>> {
    let a = Matrix::load(&config.matrix_a)?;
    let b = Matrix::load(&config.matrix_b)?;
    let c = Matrix::load(&config.matrix_c)?;
    let d = Matrix::load(&config.matrix_d)?;

    let product = a.matmul(&b)?;
    let sum = product.add(&c)?;
    let result = sum.sub(&d.transpose()?)?;

    result.save(&config.output)?;
    Ok(result)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
