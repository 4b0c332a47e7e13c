//! Dense square matrices and the reference multiplication.
//!
//! [`Matrix`] is the value type every algorithm consumes and produces.
//! The naive i-k-j product here is the correctness baseline the blocked
//! implementation is checked against.

pub mod dense;
pub mod naive_ikj;
pub mod random;

pub use dense::Matrix;
