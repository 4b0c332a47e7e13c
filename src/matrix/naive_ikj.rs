use super::Matrix;
use crate::error::Result;

/// Cache-friendly matrix multiplication using i-k-j loop order.
///
/// By swapping the j and k loops of the textbook i-j-k product, the
/// innermost loop walks a row of B and a row of C sequentially (stride 1)
/// instead of striding down a column of B.
///
/// Every cell of C accumulates `k = 0..n` in ascending order. The blocked
/// kernel keeps that order, which is why the two agree exactly.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into (C += A * B)
/// * `n` - Dimension of all three matrices
pub fn matmul_naive_ikj(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(b.len(), n * n, "B: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(c.len(), n * n, "C: expected {}x{}={} elements", n, n, n * n);

    for i in 0..n {
        let c_row = &mut c[i * n..(i + 1) * n];
        for p in 0..n {
            let a_ip = a[i * n + p];
            let b_row = &b[p * n..(p + 1) * n];
            for j in 0..n {
                c_row[j] += a_ip * b_row[j];
            }
        }
    }
}

/// C = A * B with the i-k-j kernel.
///
/// Returns [`Error::DimensionMismatch`](crate::Error::DimensionMismatch)
/// without computing anything when A and B differ in size.
pub fn naive(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    a.check_same_dim(b)?;
    let n = a.dim();
    let mut c = vec![0.0; n * n];
    matmul_naive_ikj(a.as_slice(), b.as_slice(), &mut c, n);
    Matrix::from_vec(n, c)
}
