//! Math error types

use std::fmt;

/// Error type for matrix operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// The matrix is singular (determinant below tolerance) and cannot be inverted
    SingularTransform {
        /// The determinant that failed the tolerance check
        det: f64,
    },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::SingularTransform { det } => {
                write!(f, "singular transform: determinant {} is below tolerance", det)
            }
        }
    }
}

impl std::error::Error for MathError {}
