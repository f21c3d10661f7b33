use core::f64::consts::PI;

use nalgebra::{Dim, Matrix, Storage, Vector};
use num_traits::Float;
use tracing::debug;

use crate::error::{Mismatch, RotationResult};
use crate::plane::check_dims;
use crate::types::Matrix2;

/// Angle in (-pi, pi] of a 2x2 rotation block.
pub fn log(rotation: &Matrix2) -> f64 {
    let theta = Float::atan2(rotation[(1, 0)], rotation[(0, 0)]);
    // atan2(-0., -1.) is -pi
    if theta == -PI {
        PI
    } else {
        theta
    }
}

pub fn exp(theta: f64) -> Matrix2 {
    let (sin, cos) = Float::sin_cos(theta);
    #[rustfmt::skip]
    let rot = Matrix2::new(
        cos, -sin,
        sin, cos,
    );
    rot
}

fn bilinear<D, S1, SM, S2>(
    a: &Vector<f64, D, S1>,
    matrix: &Matrix<f64, D, D, SM>,
    b: &Vector<f64, D, S2>,
) -> f64
where
    D: Dim,
    S1: Storage<f64, D>,
    SM: Storage<f64, D, D>,
    S2: Storage<f64, D>,
{
    let mut res = 0f64;
    for j in 0..matrix.ncols() {
        res += matrix.column(j).dot(a) * b[j];
    }
    res
}

/// Restriction of `matrix` to the plane basis: entry (i, j) is ni^T M nj.
///
/// For M = rotation_matrix(theta, n1, n2) this is `exp(theta)`. Fails when
/// `matrix` is not square in the dimension of n1 and n2.
pub fn plane_block<D, SM, S1, S2>(
    matrix: &Matrix<f64, D, D, SM>,
    n1: &Vector<f64, D, S1>,
    n2: &Vector<f64, D, S2>,
) -> RotationResult<Matrix2>
where
    D: Dim,
    SM: Storage<f64, D, D>,
    S1: Storage<f64, D>,
    S2: Storage<f64, D>,
{
    check_dims(n1, n2)?;
    let dim = n1.nrows();
    if matrix.shape() != (dim, dim) {
        debug!(dim, shape = ?matrix.shape(), "matrix does not act on the plane's space");
        let found = if matrix.nrows() != dim {
            matrix.nrows()
        } else {
            matrix.ncols()
        };
        return Err(Mismatch::Operand {
            plane: dim,
            vec: found,
        }
        .into());
    }

    #[rustfmt::skip]
    let block = Matrix2::new(
        bilinear(n1, matrix, n1), bilinear(n1, matrix, n2),
        bilinear(n2, matrix, n1), bilinear(n2, matrix, n2),
    );
    Ok(block)
}
