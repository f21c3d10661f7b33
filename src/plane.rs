//! Preconditions and basis construction for rotation planes.

use nalgebra::allocator::Allocator;
use nalgebra::{DefaultAllocator, Dim, OVector, Storage, Vector};
use num_traits::Float;
use tracing::debug;

use crate::error::{Mismatch, PlaneVector, RotationError, RotationResult};
use crate::norm::{norm, norm_squared};

/// Relative size below which the part of `b` orthogonal to `a` counts as zero.
const PARALLEL_TOLERANCE: f64 = 1e-10;

/// Checks that n1 and n2 have the same length and that the length can hold a plane.
pub fn check_dims<D, S1, S2>(
    n1: &Vector<f64, D, S1>,
    n2: &Vector<f64, D, S2>,
) -> RotationResult<()>
where
    D: Dim,
    S1: Storage<f64, D>,
    S2: Storage<f64, D>,
{
    if n1.nrows() != n2.nrows() {
        debug!(n1 = n1.nrows(), n2 = n2.nrows(), "plane vectors differ in length");
        return Err(Mismatch::PlaneVectors {
            n1: n1.nrows(),
            n2: n2.nrows(),
        }
        .into());
    }
    if n1.nrows() < 2 {
        debug!(dim = n1.nrows(), "no room for a rotation plane");
        return Err(Mismatch::TooFewDimensions { dim: n1.nrows() }.into());
    }
    Ok(())
}

/// Rejects |n1 . n2| >= tolerance. A NaN dot product is rejected too.
pub fn check_orthogonal<D, S1, S2>(
    n1: &Vector<f64, D, S1>,
    n2: &Vector<f64, D, S2>,
    tolerance: f64,
) -> RotationResult<()>
where
    D: Dim,
    S1: Storage<f64, D>,
    S2: Storage<f64, D>,
{
    let dot = n1.dot(n2);
    if !(Float::abs(dot) < tolerance) {
        debug!(dot, tolerance, "plane vectors are not orthogonal");
        return Err(RotationError::NonOrthogonal { dot, tolerance });
    }
    Ok(())
}

pub fn check_plane<D, S1, S2>(
    n1: &Vector<f64, D, S1>,
    n2: &Vector<f64, D, S2>,
    tolerance: f64,
) -> RotationResult<()>
where
    D: Dim,
    S1: Storage<f64, D>,
    S2: Storage<f64, D>,
{
    check_dims(n1, n2)?;
    check_orthogonal(n1, n2, tolerance)
}

pub fn check_operand<D, S>(plane: usize, vec: &Vector<f64, D, S>) -> RotationResult<()>
where
    D: Dim,
    S: Storage<f64, D>,
{
    if vec.nrows() != plane {
        debug!(plane, vec = vec.nrows(), "operand does not live in the plane's space");
        return Err(Mismatch::Operand {
            plane,
            vec: vec.nrows(),
        }
        .into());
    }
    Ok(())
}

/// Scalar projections (n1 . vec, n2 . vec) of `vec` onto the plane basis.
pub fn project<D, S1, S2, S3>(
    n1: &Vector<f64, D, S1>,
    n2: &Vector<f64, D, S2>,
    vec: &Vector<f64, D, S3>,
) -> RotationResult<(f64, f64)>
where
    D: Dim,
    S1: Storage<f64, D>,
    S2: Storage<f64, D>,
    S3: Storage<f64, D>,
{
    check_dims(n1, n2)?;
    check_operand(n1.nrows(), vec)?;
    Ok((n1.dot(vec), n2.dot(vec)))
}

/// `v` scaled to unit length.
pub fn unit<D, S>(v: &Vector<f64, D, S>, which: PlaneVector) -> RotationResult<OVector<f64, D>>
where
    D: Dim,
    S: Storage<f64, D>,
    DefaultAllocator: Allocator<f64, D>,
{
    // divide by the largest entry first so the squares cannot overflow
    let scale = v.amax();
    if !(scale > 0.) || !scale.is_finite() {
        debug!(%which, scale, "cannot normalize plane vector");
        return Err(RotationError::Degenerate { which });
    }
    let scaled = v / scale;
    let length = Float::sqrt(norm_squared(&scaled));
    if !length.is_finite() {
        debug!(%which, length, "cannot normalize plane vector");
        return Err(RotationError::Degenerate { which });
    }
    Ok(scaled / length)
}

/// Orthonormal basis (n1, n2) of the plane spanned by `a` and `b`.
///
/// n1 points along `a`. n2 is the part of `b` orthogonal to `a`, so the pair
/// keeps the orientation of (a, b): rotating by a positive angle turns `a`
/// towards `b`. Parallel inputs have no such part and fail as degenerate.
pub fn orthonormal_plane<D, S1, S2>(
    a: &Vector<f64, D, S1>,
    b: &Vector<f64, D, S2>,
) -> RotationResult<(OVector<f64, D>, OVector<f64, D>)>
where
    D: Dim,
    S1: Storage<f64, D>,
    S2: Storage<f64, D>,
    DefaultAllocator: Allocator<f64, D>,
{
    check_dims(a, b)?;
    let n1 = unit(a, PlaneVector::N1)?;

    let mut rest = b.clone_owned();
    rest.axpy(-n1.dot(b), &n1, 1.);

    if norm(&rest) <= PARALLEL_TOLERANCE * norm(b) {
        debug!("plane vectors are parallel");
        return Err(RotationError::Degenerate {
            which: PlaneVector::N2,
        });
    }
    let n2 = unit(&rest, PlaneVector::N2)?;
    Ok((n1, n2))
}
