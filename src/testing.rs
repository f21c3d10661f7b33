use core::f64::consts::PI;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{MatrixN, VectorN};

pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn random_angle(rng: &mut ChaCha8Rng) -> f64 {
    2. * PI * (rng.gen::<f64>() - 0.5)
}

pub fn random_vector(rng: &mut ChaCha8Rng, dim: usize) -> VectorN {
    VectorN::from_fn(dim, |_, _| rng.gen::<f64>() - 0.5)
}

/// `count` orthonormal vectors of length `dim`, from the QR decomposition of a random matrix.
pub fn random_orthonormal(rng: &mut ChaCha8Rng, dim: usize, count: usize) -> Vec<VectorN> {
    let q = MatrixN::from_fn(dim, count, |_, _| rng.gen::<f64>() - 0.5).qr().q();
    q.column_iter().map(|c| c.into_owned()).collect()
}
