//! Benchmark orchestration.
//!
//! Turns a [`BenchConfig`] into a sequence of timed runs and a
//! [`Summary`]. Nothing here is parallel: the wall-clock time of each
//! multiplication call is the measurement.

pub mod config;
pub mod session;
pub mod stats;

pub use config::{Algorithm, BenchConfig};
pub use session::{RunSample, Session, run_once, run_session, should_verify};
pub use stats::{Summary, gflops};
