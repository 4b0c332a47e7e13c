//! Naive vs cache-blocked matrix multiplication, measured.
//!
//! The question this crate answers is how much loop tiling alone buys
//! for a plain scalar f64 GEMM. There are two kernels over the same
//! `Matrix` type, a seeded input generator so runs are reproducible, and
//! a Frobenius-norm check so a fast blocked result is never a wrong one.
//!
//! ## Usage
//!
//! ```
//! use matbench::{blocked, frobenius_diff, naive, random_matrix};
//!
//! let a = random_matrix(64, 1);
//! let b = random_matrix(64, 2);
//!
//! let c_naive = naive(&a, &b).unwrap();
//! let c_blocked = blocked(&a, &b, 16).unwrap();
//!
//! assert!(frobenius_diff(&c_naive, &c_blocked).unwrap() <= 1e-6 * 64.0);
//! ```
//!
//! Whole benchmark sessions, the way the `matbench` binary runs them:
//!
//! ```
//! use matbench::{Algorithm, BenchConfig, run_session};
//!
//! let config = BenchConfig {
//!     size: 32,
//!     algorithm: Algorithm::Blocked,
//!     block: 8,
//!     runs: 2,
//!     ..BenchConfig::default()
//! };
//! let session = run_session(&config).unwrap();
//! assert_eq!(session.samples_ms.len(), 2);
//! ```
//!
//! ## What's inside
//!
//! - i-k-j naive kernel (stride-1 inner loop)
//! - square-tile blocked kernel with clipped edge tiles
//! - seeded uniform [-1, 1) input matrices
//! - sequential timing runner with mean / stdev / best / GFLOP/s
//! - CSV results table compatible with the other language ports

pub mod blocked;
pub mod error;
pub mod matrix;
pub mod report;
pub mod runner;
pub mod verify;

pub use blocked::{blocked, matmul_blocked_tiled};
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use matrix::naive_ikj::{matmul_naive_ikj, naive};
pub use matrix::random::random_matrix;
pub use runner::{Algorithm, BenchConfig, Session, Summary, run_session};
pub use verify::{frobenius_diff, tolerance, verify_against_naive};
