use nalgebra::allocator::Allocator;
use nalgebra::{DefaultAllocator, Dim, OMatrix, OVector, Storage, Vector};
use num_traits::Float;

use crate::config::{Normalization, RotationConfig};
use crate::error::{PlaneVector, RotationResult};
use crate::plane::{check_dims, check_operand, check_orthogonal, unit};

/// M = I + (n2 n1^T - n1 n2^T) sin + (n1 n1^T + n2 n2^T) (cos - 1)
pub(crate) fn matrix_in_plane<D, S1, S2>(
    sin: f64,
    cos: f64,
    n1: &Vector<f64, D, S1>,
    n2: &Vector<f64, D, S2>,
) -> OMatrix<f64, D, D>
where
    D: Dim,
    S1: Storage<f64, D>,
    S2: Storage<f64, D>,
    DefaultAllocator: Allocator<f64, D, D>,
{
    let (dim, _) = n1.shape_generic();
    OMatrix::<f64, D, D>::from_fn_generic(dim, dim, |i, j| {
        let identity = if i == j { 1. } else { 0. };
        let skew = n2[i] * n1[j] - n1[i] * n2[j];
        let symmetric = n1[i] * n1[j] + n2[i] * n2[j];
        identity + skew * sin + symmetric * (cos - 1.)
    })
}

/// v' = v + (n2 c1 - n1 c2) sin + (n1 c1 + n2 c2) (cos - 1), with ck = nk . v
pub(crate) fn rotate_in_plane<D, S1, S2, S3>(
    sin: f64,
    cos: f64,
    n1: &Vector<f64, D, S1>,
    n2: &Vector<f64, D, S2>,
    vec: &Vector<f64, D, S3>,
) -> OVector<f64, D>
where
    D: Dim,
    S1: Storage<f64, D>,
    S2: Storage<f64, D>,
    S3: Storage<f64, D>,
    DefaultAllocator: Allocator<f64, D>,
{
    let c1 = n1.dot(vec);
    let c2 = n2.dot(vec);

    let mut rotated = vec.clone_owned();
    rotated.axpy(c1 * (cos - 1.) - c2 * sin, n1, 1.);
    rotated.axpy(c1 * sin + c2 * (cos - 1.), n2, 1.);
    rotated
}

/// Rotation by `theta` radians in the plane spanned by the orthonormal pair (n1, n2).
///
/// Rotating n1 by a positive angle turns it towards n2. Vectors orthogonal
/// to both n1 and n2 are fixed.
///
/// ```
/// use ndrot::{rotation_matrix, Vector3};
///
/// let m = rotation_matrix(std::f64::consts::FRAC_PI_2, &Vector3::x(), &Vector3::y()).unwrap();
/// assert!((m * Vector3::x() - Vector3::y()).norm() < 1e-15);
/// ```
pub fn rotation_matrix<D, S1, S2>(
    theta: f64,
    n1: &Vector<f64, D, S1>,
    n2: &Vector<f64, D, S2>,
) -> RotationResult<OMatrix<f64, D, D>>
where
    D: Dim,
    S1: Storage<f64, D>,
    S2: Storage<f64, D>,
    DefaultAllocator: Allocator<f64, D, D> + Allocator<f64, D>,
{
    rotation_matrix_with(theta, n1, n2, &RotationConfig::default())
}

pub fn rotation_matrix_with<D, S1, S2>(
    theta: f64,
    n1: &Vector<f64, D, S1>,
    n2: &Vector<f64, D, S2>,
    config: &RotationConfig,
) -> RotationResult<OMatrix<f64, D, D>>
where
    D: Dim,
    S1: Storage<f64, D>,
    S2: Storage<f64, D>,
    DefaultAllocator: Allocator<f64, D, D> + Allocator<f64, D>,
{
    check_dims(n1, n2)?;
    let (sin, cos) = Float::sin_cos(theta);
    match config.normalization {
        Normalization::AsGiven => {
            check_orthogonal(n1, n2, config.orthogonality_tolerance)?;
            Ok(matrix_in_plane(sin, cos, n1, n2))
        }
        Normalization::Unit => {
            let n1 = unit(n1, PlaneVector::N1)?;
            let n2 = unit(n2, PlaneVector::N2)?;
            check_orthogonal(&n1, &n2, config.orthogonality_tolerance)?;
            Ok(matrix_in_plane(sin, cos, &n1, &n2))
        }
    }
}

/// Rotates `vec` by `theta` radians in the plane spanned by (n1, n2)
/// without building the rotation matrix.
///
/// The result equals `rotation_matrix(theta, n1, n2)? * vec` up to rounding,
/// at O(N) cost.
pub fn rotate_vector<D, S1, S2, S3>(
    theta: f64,
    n1: &Vector<f64, D, S1>,
    n2: &Vector<f64, D, S2>,
    vec: &Vector<f64, D, S3>,
) -> RotationResult<OVector<f64, D>>
where
    D: Dim,
    S1: Storage<f64, D>,
    S2: Storage<f64, D>,
    S3: Storage<f64, D>,
    DefaultAllocator: Allocator<f64, D>,
{
    rotate_vector_with(theta, n1, n2, vec, &RotationConfig::default())
}

pub fn rotate_vector_with<D, S1, S2, S3>(
    theta: f64,
    n1: &Vector<f64, D, S1>,
    n2: &Vector<f64, D, S2>,
    vec: &Vector<f64, D, S3>,
    config: &RotationConfig,
) -> RotationResult<OVector<f64, D>>
where
    D: Dim,
    S1: Storage<f64, D>,
    S2: Storage<f64, D>,
    S3: Storage<f64, D>,
    DefaultAllocator: Allocator<f64, D>,
{
    check_dims(n1, n2)?;
    check_operand(n1.nrows(), vec)?;
    let (sin, cos) = Float::sin_cos(theta);
    match config.normalization {
        Normalization::AsGiven => {
            check_orthogonal(n1, n2, config.orthogonality_tolerance)?;
            Ok(rotate_in_plane(sin, cos, n1, n2, vec))
        }
        Normalization::Unit => {
            let n1 = unit(n1, PlaneVector::N1)?;
            let n2 = unit(n2, PlaneVector::N2)?;
            check_orthogonal(&n1, &n2, config.orthogonality_tolerance)?;
            Ok(rotate_in_plane(sin, cos, &n1, &n2, vec))
        }
    }
}
