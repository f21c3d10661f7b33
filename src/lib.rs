//! Rotations in a 2D plane embedded in N-dimensional Euclidean space.
//!
//! A plane is given by an orthonormal pair (n1, n2). [`rotation_matrix`]
//! builds the N x N matrix of the rotation by an angle in that plane and
//! [`rotate_vector`] applies the same rotation to a vector in O(N) without
//! forming the matrix. [`PlanarRotation`] keeps a validated plane and angle
//! around for repeated use.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

mod config;
mod error;
pub mod norm;
pub mod plane;
mod planar;
mod rotation;
pub mod so2;
mod types;

#[cfg(test)]
mod testing;

#[cfg(doc)]
pub mod doc {
    pub mod derivation;
}

pub use config::{Normalization, RotationConfig, ORTHOGONALITY_TOLERANCE};
pub use error::{Mismatch, PlaneVector, RotationError, RotationResult};
pub use planar::PlanarRotation;
pub use rotation::{rotate_vector, rotate_vector_with, rotation_matrix, rotation_matrix_with};
pub use types::{Matrix2, Matrix3, MatrixN, MatrixNxN, Vector, Vector2, Vector3, VectorN};
