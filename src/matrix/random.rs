//! Seeded random matrices.
//!
//! Elements are uniform on [-1, 1), drawn one per cell in row-major order
//! from a [`StdRng`] seeded with the seed's bit pattern. The same seed
//! always gives the same matrix for a given `rand` major version, but
//! there is no bit-for-bit agreement with generators in other languages.

use rand::distributions::Standard;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Matrix;

/// Deterministic N×N matrix with elements in [-1, 1).
///
/// ```
/// use matbench::random_matrix;
///
/// let a = random_matrix(4, 42);
/// let b = random_matrix(4, 42);
/// assert_eq!(a, b);
/// ```
pub fn random_matrix(n: usize, seed: i64) -> Matrix {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    Matrix::from_fn(n, |_, _| {
        let u: f64 = rng.sample(Standard);
        (u - 0.5) * 2.0
    })
}
