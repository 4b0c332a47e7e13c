//! Correctness oracle for non-reference algorithms.
//!
//! A blocked result is recomputed with the naive kernel and the two are
//! compared by the Frobenius norm of their difference. The tolerance grows
//! linearly with N to absorb rounding growth; exceeding it means a tiling
//! bug and is reported as [`Error::VerificationFailed`].

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::matrix::naive_ikj::naive;

/// Largest N for which the runner cross-checks blocked results.
pub const VERIFY_MAX_SIZE: usize = 128;

/// Allowed Frobenius error per unit of dimension.
pub const TOLERANCE_PER_DIM: f64 = 1e-6;

/// Frobenius norm of `c - d`: sqrt of the sum of squared differences.
///
/// ```
/// use matbench::{Matrix, frobenius_diff};
///
/// let c = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let d = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 0.0]]).unwrap();
/// assert_eq!(frobenius_diff(&c, &d).unwrap(), 4.0);
/// ```
pub fn frobenius_diff(c: &Matrix, d: &Matrix) -> Result<f64> {
    c.check_same_dim(d)?;
    let sum: f64 = c
        .as_slice()
        .iter()
        .zip(d.as_slice())
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum();
    Ok(sum.sqrt())
}

/// Maximum acceptable Frobenius error for an N×N product.
pub fn tolerance(n: usize) -> f64 {
    TOLERANCE_PER_DIM * n as f64
}

/// Recompute A * B naively and compare against `result`.
///
/// Returns the measured error when it is within [`tolerance`].
pub fn verify_against_naive(a: &Matrix, b: &Matrix, result: &Matrix) -> Result<f64> {
    let reference = naive(a, b)?;
    let error = frobenius_diff(result, &reference)?;
    let n = a.dim();
    let tolerance = tolerance(n);
    if error.is_nan() || error > tolerance {
        return Err(Error::VerificationFailed {
            n,
            error,
            tolerance,
        });
    }
    Ok(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocked::blocked;
    use crate::matrix::random::random_matrix;

    #[test]
    fn test_diff_of_equal_is_zero() {
        let m = random_matrix(8, 11);
        assert_eq!(frobenius_diff(&m, &m.clone()).unwrap(), 0.0);
    }

    #[test]
    fn test_diff_3_4_5() {
        let c = Matrix::from_rows(vec![vec![3.0, 0.0], vec![0.0, 4.0]]).unwrap();
        let d = Matrix::zeros(2);
        assert_eq!(frobenius_diff(&c, &d).unwrap(), 5.0);
        assert_eq!(frobenius_diff(&d, &c).unwrap(), 5.0);
    }

    #[test]
    fn test_diff_mismatch() {
        assert!(frobenius_diff(&Matrix::zeros(2), &Matrix::zeros(3)).is_err());
    }

    #[test]
    fn test_diff_empty() {
        assert_eq!(
            frobenius_diff(&Matrix::zeros(0), &Matrix::zeros(0)).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_tolerance_scales_with_n() {
        assert_eq!(tolerance(0), 0.0);
        assert!((tolerance(8) - 8e-6).abs() < 1e-18);
        assert!((tolerance(128) - 1.28e-4).abs() < 1e-15);
    }

    #[test]
    fn test_blocked_passes() {
        let a = random_matrix(16, 1);
        let b = random_matrix(16, 2);
        let c = blocked(&a, &b, 5).unwrap();
        assert_eq!(verify_against_naive(&a, &b, &c).unwrap(), 0.0);
    }

    #[test]
    fn test_corrupted_result_fails() {
        let a = random_matrix(4, 1);
        let b = random_matrix(4, 2);
        let mut data = naive(&a, &b).unwrap().into_vec();
        data[15] += 0.5;
        let bad = Matrix::from_vec(4, data).unwrap();

        match verify_against_naive(&a, &b, &bad) {
            Err(Error::VerificationFailed {
                n,
                error,
                tolerance,
            }) => {
                assert_eq!(n, 4);
                assert!((error - 0.5).abs() < 1e-12);
                assert_eq!(tolerance, 4e-6);
            }
            other => panic!("expected verification failure, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_fails() {
        let a = Matrix::identity(2);
        let bad = Matrix::from_vec(2, vec![f64::NAN, 0.0, 0.0, 1.0]).unwrap();
        assert!(verify_against_naive(&a, &a, &bad).is_err());
    }
}
