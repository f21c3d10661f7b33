use nalgebra::{Dim, Matrix, RawStorage};
use num_traits::Float;

pub fn norm_squared<R: Dim, C: Dim, S: RawStorage<f64, R, C>>(
    matrix: &Matrix<f64, R, C, S>,
) -> f64 {
    matrix.iter().fold(0f64, |sum, e| sum + e * e)
}

pub fn norm<R: Dim, C: Dim, S: RawStorage<f64, R, C>>(matrix: &Matrix<f64, R, C, S>) -> f64 {
    Float::sqrt(norm_squared(matrix))
}

/// Sum of the absolute values of all entries.
pub fn abs_sum<R: Dim, C: Dim, S: RawStorage<f64, R, C>>(matrix: &Matrix<f64, R, C, S>) -> f64 {
    matrix.iter().fold(0f64, |sum, e| sum + Float::abs(*e))
}

pub fn is_small<R: Dim, C: Dim, S: RawStorage<f64, R, C>>(
    matrix: &Matrix<f64, R, C, S>,
    tolerance: f64,
) -> bool {
    abs_sum(matrix) < tolerance
}
