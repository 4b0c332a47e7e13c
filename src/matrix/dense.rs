use std::ops::Index;

use crate::error::{Error, Result};

/// Square, dense N×N matrix of `f64`, stored row-major in one buffer.
///
/// The dimension is fixed at construction. There is no public mutable
/// access: once a constructor or a multiplier hands a `Matrix` back, its
/// contents never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// N×N matrix of zeros.
    pub fn zeros(n: usize) -> Self {
        Matrix {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// N×N identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Matrix { n, data }
    }

    /// Wrap a row-major buffer of `n * n` elements.
    pub fn from_vec(n: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != n * n {
            return Err(Error::Shape(format!(
                "expected {}x{}={} elements, got {}",
                n,
                n,
                n * n,
                data.len()
            )));
        }
        Ok(Matrix { n, data })
    }

    /// Build from nested rows. Every row must have exactly as many
    /// elements as there are rows.
    ///
    /// ```
    /// use matbench::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
    /// assert_eq!(m.dim(), 2);
    /// assert_eq!(m[(1, 0)], 7.0);
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(Error::Shape(format!(
                    "row {} has {} elements, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            data.extend(row);
        }
        Ok(Matrix { n, data })
    }

    /// Build from a row-major generator `f(i, j)`, called in row-major order.
    pub(crate) fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Matrix { n, data }
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.n && j < self.n {
            Some(self.data[i * self.n + j])
        } else {
            None
        }
    }

    /// Row `i` as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= dim()`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Error unless `other` has the same dimension.
    pub(crate) fn check_same_dim(&self, other: &Matrix) -> Result<()> {
        if self.n != other.n {
            return Err(Error::DimensionMismatch {
                left: self.n,
                right: other.n,
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.n && j < self.n,
            "index ({}, {}) out of bounds for {}x{} matrix",
            i,
            j,
            self.n,
            self.n
        );
        &self.data[i * self.n + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_layout() {
        let m = Matrix::identity(3);
        assert_eq!(
            m.as_slice(),
            &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_from_rows_is_row_major() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.row(0), &[1.0, 2.0]);
        assert_eq!(m.row(1), &[3.0, 4.0]);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m.get(1, 0), Some(3.0));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, Error::Shape(_)));
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        assert!(Matrix::from_rows(rows).is_err());
    }

    #[test]
    fn test_from_vec_length_check() {
        assert!(Matrix::from_vec(2, vec![0.0; 4]).is_ok());
        assert!(Matrix::from_vec(2, vec![0.0; 5]).is_err());
    }

    #[test]
    fn test_empty_matrix() {
        let m = Matrix::zeros(0);
        assert_eq!(m.dim(), 0);
        assert!(m.as_slice().is_empty());
        assert_eq!(Matrix::from_rows(vec![]).unwrap(), m);
    }

    #[test]
    fn test_check_same_dim() {
        let a = Matrix::zeros(3);
        let b = Matrix::zeros(4);
        assert!(a.check_same_dim(&a.clone()).is_ok());
        assert!(matches!(
            a.check_same_dim(&b),
            Err(Error::DimensionMismatch { left: 3, right: 4 })
        ));
    }
}
