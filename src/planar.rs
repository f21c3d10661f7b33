use alloc::vec::Vec;

use nalgebra::allocator::Allocator;
use nalgebra::{DefaultAllocator, Dim, Dyn, Matrix, OMatrix, OVector, Storage, Vector};
use num_traits::Float;
use tracing::trace;

use crate::config::{Normalization, RotationConfig};
use crate::error::{PlaneVector, RotationResult};
use crate::plane::{check_dims, check_operand, check_orthogonal, unit};
use crate::rotation::{matrix_in_plane, rotate_in_plane};
use crate::so2;

/// A rotation by a fixed angle in a fixed plane.
///
/// The plane is validated once on construction, and sin/cos of the angle
/// are kept, so applying the rotation to many vectors costs O(N) each.
#[derive(Debug, Clone)]
pub struct PlanarRotation<D: Dim = Dyn>
where
    DefaultAllocator: Allocator<f64, D>,
{
    theta: f64,
    sin: f64,
    cos: f64,
    n1: OVector<f64, D>,
    n2: OVector<f64, D>,
}

impl<D: Dim> PlanarRotation<D>
where
    DefaultAllocator: Allocator<f64, D>,
{
    pub fn new<S1, S2>(
        theta: f64,
        n1: &Vector<f64, D, S1>,
        n2: &Vector<f64, D, S2>,
    ) -> RotationResult<Self>
    where
        S1: Storage<f64, D>,
        S2: Storage<f64, D>,
    {
        Self::with_config(theta, n1, n2, &RotationConfig::default())
    }

    pub fn with_config<S1, S2>(
        theta: f64,
        n1: &Vector<f64, D, S1>,
        n2: &Vector<f64, D, S2>,
        config: &RotationConfig,
    ) -> RotationResult<Self>
    where
        S1: Storage<f64, D>,
        S2: Storage<f64, D>,
    {
        check_dims(n1, n2)?;
        let (n1, n2) = match config.normalization {
            Normalization::AsGiven => (n1.clone_owned(), n2.clone_owned()),
            Normalization::Unit => (unit(n1, PlaneVector::N1)?, unit(n2, PlaneVector::N2)?),
        };
        check_orthogonal(&n1, &n2, config.orthogonality_tolerance)?;

        trace!(theta, dim = n1.nrows(), "planar rotation");
        let (sin, cos) = Float::sin_cos(theta);
        Ok(PlanarRotation {
            theta,
            sin,
            cos,
            n1,
            n2,
        })
    }

    pub fn angle(&self) -> f64 {
        self.theta
    }

    pub fn n1(&self) -> &OVector<f64, D> {
        &self.n1
    }

    pub fn n2(&self) -> &OVector<f64, D> {
        &self.n2
    }

    pub fn dim(&self) -> usize {
        self.n1.nrows()
    }

    /// The same plane, rotated by `theta` instead.
    pub fn with_angle(&self, theta: f64) -> Self {
        let (sin, cos) = Float::sin_cos(theta);
        PlanarRotation {
            theta,
            sin,
            cos,
            n1: self.n1.clone(),
            n2: self.n2.clone(),
        }
    }

    pub fn inverse(&self) -> Self {
        PlanarRotation {
            theta: -self.theta,
            sin: -self.sin,
            cos: self.cos,
            n1: self.n1.clone(),
            n2: self.n2.clone(),
        }
    }

    pub fn matrix(&self) -> OMatrix<f64, D, D>
    where
        DefaultAllocator: Allocator<f64, D, D>,
    {
        matrix_in_plane(self.sin, self.cos, &self.n1, &self.n2)
    }

    pub fn apply<S>(&self, vec: &Vector<f64, D, S>) -> RotationResult<OVector<f64, D>>
    where
        S: Storage<f64, D>,
    {
        check_operand(self.dim(), vec)?;
        Ok(rotate_in_plane(self.sin, self.cos, &self.n1, &self.n2, vec))
    }

    /// Rotates every vector in `vecs`. Fails on the first one of the wrong length.
    pub fn apply_all<S>(&self, vecs: &[Vector<f64, D, S>]) -> RotationResult<Vec<OVector<f64, D>>>
    where
        S: Storage<f64, D>,
    {
        vecs.iter().map(|v| self.apply(v)).collect()
    }

    /// Angle in (-pi, pi] by which `matrix` turns this plane.
    ///
    /// Only the plane block of `matrix` is read, so for matrices that are
    /// not rotations in this plane the result is the angle of that block.
    pub fn angle_of<SM>(&self, matrix: &Matrix<f64, D, D, SM>) -> RotationResult<f64>
    where
        SM: Storage<f64, D, D>,
    {
        let block = so2::plane_block(matrix, &self.n1, &self.n2)?;
        Ok(so2::log(&block))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    use crate::error::{Mismatch, RotationError};
    use crate::norm::{is_small, norm};
    use crate::rotation::{rotate_vector, rotation_matrix};
    use crate::testing::{random_angle, random_orthonormal, random_vector, rng};
    use crate::types::{MatrixN, Vector, Vector3, VectorN};

    #[test]
    fn test_new() {
        let rot = PlanarRotation::new(0.5, &Vector3::x(), &Vector3::z()).unwrap();
        assert_eq!(rot.angle(), 0.5);
        assert_eq!(rot.dim(), 3);
        assert_eq!(rot.n1(), &Vector3::x());
        assert_eq!(rot.n2(), &Vector3::z());

        let Err(e) = PlanarRotation::new(0.5, &Vector3::x(), &Vector3::new(1., 1., 0.)) else {
            panic!("Should reject a non-orthogonal plane");
        };
        assert!(e.is_non_orthogonal());

        let n1 = VectorN::from_vec(vec![1., 0.]);
        let n2 = VectorN::from_vec(vec![0., 1., 0.]);
        assert_eq!(
            PlanarRotation::new(0.5, &n1, &n2).map(|r| r.dim()),
            Err(RotationError::DimensionMismatch(Mismatch::PlaneVectors { n1: 2, n2: 3 }))
        );
    }

    #[test]
    fn test_normalized() {
        let config = RotationConfig::new().normalized();
        let n1 = Vector3::new(0., 0., 5.);
        let n2 = Vector3::new(-2., 0., 0.);
        let rot = PlanarRotation::with_config(1., &n1, &n2, &config).unwrap();
        assert_eq!(rot.n1(), &Vector3::z());
        assert_eq!(rot.n2(), &-Vector3::x());
    }

    #[test]
    fn test_apply_matches_free_functions() {
        let mut rng = rng(20);
        for dim in [2, 3, 9, 30] {
            let basis = random_orthonormal(&mut rng, dim, 2);
            let theta = random_angle(&mut rng);
            let vec = random_vector(&mut rng, dim);

            let rot = PlanarRotation::new(theta, &basis[0], &basis[1]).unwrap();
            let expected = rotate_vector(theta, &basis[0], &basis[1], &vec).unwrap();
            assert_eq!(rot.apply(&vec).unwrap(), expected);

            let expected = rotation_matrix(theta, &basis[0], &basis[1]).unwrap();
            assert_eq!(rot.matrix(), expected);
        }
    }

    #[test]
    fn test_apply_all() {
        let mut rng = rng(21);
        let basis = random_orthonormal(&mut rng, 7, 2);
        let rot = PlanarRotation::new(1.1, &basis[0], &basis[1]).unwrap();
        let m = rot.matrix();

        let vecs = (0..16).map(|_| random_vector(&mut rng, 7)).collect::<Vec<_>>();
        let rotated = rot.apply_all(&vecs).unwrap();
        assert_eq!(rotated.len(), vecs.len());
        for (v, r) in vecs.iter().zip(rotated.iter()) {
            assert!(is_small(&(&m * v - r), 1e-4));
        }

        let mut vecs = vecs;
        vecs.push(VectorN::zeros(6));
        assert!(rot.apply_all(&vecs).unwrap_err().is_dimension_mismatch());
    }

    #[test]
    fn test_apply_rejects_wrong_length() {
        let n1 = VectorN::from_vec(vec![1., 0., 0.]);
        let n2 = VectorN::from_vec(vec![0., 1., 0.]);
        let rot = PlanarRotation::new(1., &n1, &n2).unwrap();
        assert_eq!(
            rot.apply(&VectorN::from_vec(vec![1., 2.])),
            Err(RotationError::DimensionMismatch(Mismatch::Operand { plane: 3, vec: 2 }))
        );
    }

    #[test]
    fn test_inverse() {
        let mut rng = rng(22);
        let basis = random_orthonormal(&mut rng, 10, 2);
        let rot = PlanarRotation::new(random_angle(&mut rng), &basis[0], &basis[1]).unwrap();
        let inv = rot.inverse();
        assert_eq!(inv.angle(), -rot.angle());

        let vec = random_vector(&mut rng, 10);
        let back = inv.apply(&rot.apply(&vec).unwrap()).unwrap();
        assert!(is_small(&(back - &vec), 1e-4));

        let identity = MatrixN::identity(10, 10);
        assert!(norm(&(inv.matrix() * rot.matrix() - identity)) < 1e-12);
        assert!(norm(&(inv.matrix() - rot.matrix().transpose())) < 1e-12);
    }

    #[test]
    fn test_with_angle() {
        let rot = PlanarRotation::new(FRAC_PI_3, &Vector3::x(), &Vector3::y()).unwrap();
        let twice = rot.with_angle(2. * FRAC_PI_3);
        assert_eq!(twice.n1(), rot.n1());

        let v = Vector3::new(0.3, -0.2, 0.9);
        let composed = rot.apply(&rot.apply(&v).unwrap()).unwrap();
        assert!(norm(&(composed - twice.apply(&v).unwrap())) < 1e-12);
    }

    #[test]
    fn test_angle_of() {
        let mut rng = rng(23);
        for _ in 0..10 {
            let basis = random_orthonormal(&mut rng, 6, 2);
            let theta = random_angle(&mut rng);
            let rot = PlanarRotation::new(theta, &basis[0], &basis[1]).unwrap();
            let angle = rot.angle_of(&rot.matrix()).unwrap();
            assert!((angle - theta).abs() < 1e-9);
        }

        let rot = PlanarRotation::new(FRAC_PI_2 + 2. * PI, &Vector3::x(), &Vector3::y()).unwrap();
        let angle = rot.angle_of(&rot.matrix()).unwrap();
        assert!((angle - FRAC_PI_2).abs() < 1e-12);

        let n1 = VectorN::from_vec(vec![1., 0.]);
        let n2 = VectorN::from_vec(vec![0., 1.]);
        let rot = PlanarRotation::new(0.4, &n1, &n2).unwrap();
        assert_eq!(
            rot.angle_of(&MatrixN::identity(3, 3)),
            Err(RotationError::DimensionMismatch(Mismatch::Operand { plane: 2, vec: 3 }))
        );
    }

    #[test]
    fn test_static_dimension() {
        let n1 = Vector::<4>::new(0., 1., 0., 0.);
        let n2 = Vector::<4>::new(0., 0., 0., 1.);
        let rot = PlanarRotation::new(FRAC_PI_2, &n1, &n2).unwrap();
        let rotated = rot.apply(&Vector::<4>::new(5., 1., 7., 0.)).unwrap();
        assert!(norm(&(rotated - Vector::<4>::new(5., 0., 7., 1.))) < 1e-15);
    }
}
