/// Largest |n1 . n2| accepted for a rotation plane by default.
pub const ORTHOGONALITY_TOLERANCE: f64 = 1e-4;

/// What happens to n1 and n2 before they are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Use the plane vectors verbatim. The caller guarantees unit length.
    #[default]
    AsGiven,

    /// Scale both plane vectors to unit length first. The orthogonality
    /// check then applies to the scaled pair.
    Unit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationConfig {
    pub orthogonality_tolerance: f64,

    pub normalization: Normalization,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            orthogonality_tolerance: ORTHOGONALITY_TOLERANCE,
            normalization: Normalization::AsGiven,
        }
    }
}

impl RotationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single precision inputs promoted to f64 typically need a wider tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.orthogonality_tolerance = tolerance;
        self
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn normalized(self) -> Self {
        self.with_normalization(Normalization::Unit)
    }
}
