//! Shape construction error types

use std::fmt;

use quadmarch_math::MathError;

/// Error type for quadric conjugation and shape assembly
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeError {
    /// The placement could not be inverted; surfaces cannot be produced.
    /// Propagated unchanged from matrix inversion.
    Singular(MathError),
    /// The numeric primitive tag does not name a supported kind
    InvalidPrimitiveKind(i32),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Singular(err) => write!(f, "degenerate placement: {}", err),
            ShapeError::InvalidPrimitiveKind(tag) => {
                write!(f, "invalid primitive kind tag: {}", tag)
            }
        }
    }
}

impl std::error::Error for ShapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShapeError::Singular(err) => Some(err),
            ShapeError::InvalidPrimitiveKind(_) => None,
        }
    }
}

impl From<MathError> for ShapeError {
    fn from(err: MathError) -> Self {
        ShapeError::Singular(err)
    }
}
