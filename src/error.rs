use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a benchmark session or a results tool.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration: `--algo` is neither `naive` nor `blocked`.
    #[error("unknown algorithm '{0}' (expected 'naive' or 'blocked')")]
    UnknownAlgorithm(String),
    /// Configuration: negative size, or N×N f64 too large to address.
    #[error("invalid matrix size {0} (must be non-negative and addressable as N×N f64)")]
    InvalidSize(i64),
    /// Configuration or precondition: block edge below 1.
    #[error("block size must be at least 1, got {0}")]
    InvalidBlockSize(i64),
    /// Configuration: fewer than one timed run.
    #[error("run count must be at least 1, got {0}")]
    InvalidRuns(i64),
    /// Precondition: operands of different dimension.
    #[error("matmul dimension mismatch: [{left}x{left}] @ [{right}x{right}]")]
    DimensionMismatch { left: usize, right: usize },
    /// Precondition: input data does not form an N×N matrix.
    #[error("not a square matrix: {0}")]
    Shape(String),
    /// Correctness: blocked result differs from naive beyond tolerance.
    #[error("large error vs naive for N={n}: {error:e} exceeds tolerance {tolerance:e}")]
    VerificationFailed { n: usize, error: f64, tolerance: f64 },
    /// Persistence: filesystem failure, not retried.
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Persistence: results file missing a column or holding a bad value.
    #[error("{path}: malformed results file: {reason}")]
    MalformedResults { path: PathBuf, reason: String },
    /// Persistence: `merge` called without inputs.
    #[error("no input files given")]
    NoInputs,
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
