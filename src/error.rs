use core::fmt;

use thiserror::Error;

pub type RotationResult<T> = Result<T, RotationError>;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RotationError {
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(#[from] Mismatch),

    #[error("plane vectors are not orthogonal: |n1 . n2| = {dot:e} (tolerance {tolerance:e})")]
    NonOrthogonal { dot: f64, tolerance: f64 },

    /// Only produced when plane vectors are normalized or orthonormalized.
    #[error("{which} has no usable direction and cannot span the rotation plane")]
    Degenerate { which: PlaneVector },
}

/// Which lengths disagreed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Mismatch {
    #[error("n1 has {n1} components but n2 has {n2}")]
    PlaneVectors { n1: usize, n2: usize },

    #[error("the rotation plane lives in {plane} dimensions but the operand has {vec}")]
    Operand { plane: usize, vec: usize },

    #[error("a rotation plane needs at least 2 dimensions, got {dim}")]
    TooFewDimensions { dim: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneVector {
    N1,
    N2,
}

impl fmt::Display for PlaneVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaneVector::N1 => f.write_str("n1"),
            PlaneVector::N2 => f.write_str("n2"),
        }
    }
}

impl RotationError {
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, RotationError::DimensionMismatch(_))
    }

    pub fn is_non_orthogonal(&self) -> bool {
        matches!(self, RotationError::NonOrthogonal { .. })
    }
}
