//! Cache-blocked GEMM implementations.
//!
//! These break the multiplication into square tiles so that the pieces
//! of A, B and C touched by the inner loops stay in L1/L2 cache while
//! they are reused.
//!
//! Available implementations:
//! - `tiled`: scalar i-k-j inner loops over `block`×`block` tiles

pub mod tiled;

pub use tiled::{DEFAULT_BLOCK, blocked, matmul_blocked_tiled};
