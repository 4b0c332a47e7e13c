//! Square-tile blocked GEMM.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Block edge used when the caller has no preference.
pub const DEFAULT_BLOCK: usize = 64;

/// Cache-blocked matrix multiplication with `block`×`block` tiles.
///
/// The i, k and j ranges are cut into consecutive tiles of width `block`.
/// The last tile on each axis is clipped to `n`, so `block` does not have
/// to divide `n`, and a block of `n` or more is a single tile (the naive
/// access pattern). Tile origins run ii, then kk, then jj; inside a tile
/// the loops are i-k-j, same as [`matmul_naive_ikj`].
///
/// For a given cell (i, j) the kk tiles are visited in ascending order
/// and each tile walks its k range ascending, so the cell sees
/// `k = 0..n` in exactly the naive order. The result is bit-identical to
/// the naive kernel, not just close.
///
/// # Arguments
///
/// * `a`, `b` - Input matrices (n × n), row-major
/// * `c` - Output matrix (n × n), row-major, accumulated into (C += A * B)
/// * `n` - Dimension of all three matrices
/// * `block` - Tile edge, must be at least 1
///
/// [`matmul_naive_ikj`]: crate::matrix::naive_ikj::matmul_naive_ikj
pub fn matmul_blocked_tiled(a: &[f64], b: &[f64], c: &mut [f64], n: usize, block: usize) {
    assert!(block >= 1, "block size must be at least 1");
    assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(b.len(), n * n, "B: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(c.len(), n * n, "C: expected {}x{}={} elements", n, n, n * n);

    for ii in (0..n).step_by(block) {
        let i_max = (ii + block).min(n);
        for kk in (0..n).step_by(block) {
            let k_max = (kk + block).min(n);
            for jj in (0..n).step_by(block) {
                let j_max = (jj + block).min(n);

                for i in ii..i_max {
                    // Only the jj..j_max strip of row i is touched by this tile
                    let c_strip = &mut c[i * n + jj..i * n + j_max];
                    for p in kk..k_max {
                        let a_ip = a[i * n + p];
                        let b_strip = &b[p * n + jj..p * n + j_max];
                        for (c_ij, &b_pj) in c_strip.iter_mut().zip(b_strip) {
                            *c_ij += a_ip * b_pj;
                        }
                    }
                }
            }
        }
    }
}

/// C = A * B with the tiled kernel.
///
/// Rejects mismatched dimensions and `block == 0` before computing
/// anything.
pub fn blocked(a: &Matrix, b: &Matrix, block: usize) -> Result<Matrix> {
    a.check_same_dim(b)?;
    if block == 0 {
        return Err(Error::InvalidBlockSize(0));
    }
    let n = a.dim();
    let mut c = vec![0.0; n * n];
    matmul_blocked_tiled(a.as_slice(), b.as_slice(), &mut c, n, block);
    Matrix::from_vec(n, c)
}
