//! Timed benchmark runs.
//!
//! Each run builds fresh inputs, times exactly one multiplication and,
//! for small blocked runs, checks the result against the naive kernel
//! outside the timed region. Runs are strictly sequential.

use std::time::Instant;

use tracing::{debug, info};

use super::config::{Algorithm, BenchConfig};
use super::stats::Summary;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::matrix::random::random_matrix;
use crate::verify::{VERIFY_MAX_SIZE, verify_against_naive};

/// Outcome of one timed multiplication.
#[derive(Debug, Clone)]
pub struct RunSample {
    pub elapsed_ms: f64,
    /// Frobenius error vs naive, when the run was verified.
    pub verified_error: Option<f64>,
    pub result: Matrix,
}

/// All samples of a session plus their summary.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: BenchConfig,
    pub samples_ms: Vec<f64>,
    pub summary: Summary,
}

/// Whether a result of this size and algorithm gets cross-checked.
pub fn should_verify(size: usize, algorithm: Algorithm) -> bool {
    algorithm == Algorithm::Blocked && size <= VERIFY_MAX_SIZE
}

/// Execute run number `run` (0-based) of a session.
///
/// A is seeded with `seed + run` and B with `seed + run + 1`.
pub fn run_once(config: &BenchConfig, run: usize) -> Result<RunSample> {
    let seed = config.seed.wrapping_add(run as i64);
    let a = random_matrix(config.size, seed);
    let b = random_matrix(config.size, seed.wrapping_add(1));

    let start = Instant::now();
    let result = config.algorithm.multiply(&a, &b, config.block)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let verified_error = if should_verify(config.size, config.algorithm) {
        Some(verify_against_naive(&a, &b, &result)?)
    } else {
        None
    };

    debug!(
        run,
        elapsed_ms,
        error = ?verified_error,
        "{} N={} finished",
        config.algorithm,
        config.size
    );

    Ok(RunSample {
        elapsed_ms,
        verified_error,
        result,
    })
}

/// Run the whole session, stopping at the first failure.
pub fn run_session(config: &BenchConfig) -> Result<Session> {
    info!(
        algo = %config.algorithm,
        n = config.size,
        runs = config.runs,
        block = config.block,
        seed = config.seed,
        "starting session"
    );

    let mut samples_ms = Vec::with_capacity(config.runs);
    for run in 0..config.runs {
        let sample = run_once(config, run)?;
        samples_ms.push(sample.elapsed_ms);
    }

    let summary = Summary::from_samples(&samples_ms, config.size);
    info!(
        mean_ms = summary.mean_ms,
        best_ms = summary.best_ms,
        gflops = summary.gflops,
        "session complete"
    );

    Ok(Session {
        config: config.clone(),
        samples_ms,
        summary,
    })
}
