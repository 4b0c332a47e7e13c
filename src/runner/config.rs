use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::blocked::{DEFAULT_BLOCK, blocked};
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::matrix::naive_ikj::naive;

pub const DEFAULT_SIZE: usize = 256;
pub const DEFAULT_RUNS: usize = 5;
pub const DEFAULT_SEED: i64 = 42;
pub const DEFAULT_OUTPUT: &str = "data/outputs/results_rust.csv";

/// Which multiplication kernel a session measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Naive,
    Blocked,
}

impl Algorithm {
    /// Run this algorithm on `a` and `b`. `block` is ignored by `Naive`.
    pub fn multiply(self, a: &Matrix, b: &Matrix, block: usize) -> Result<Matrix> {
        match self {
            Algorithm::Naive => naive(a, b),
            Algorithm::Blocked => blocked(a, b, block),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Blocked => "blocked",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "naive" => Ok(Algorithm::Naive),
            "blocked" => Ok(Algorithm::Blocked),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// A validated benchmark session.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub size: usize,
    pub algorithm: Algorithm,
    pub block: usize,
    pub runs: usize,
    pub seed: i64,
    pub output: PathBuf,
}

impl BenchConfig {
    /// Validate raw command-line values.
    ///
    /// Every check happens here, before any matrix is allocated.
    pub fn from_raw(
        size: i64,
        algorithm: &str,
        block: i64,
        runs: i64,
        seed: i64,
        output: impl Into<PathBuf>,
    ) -> Result<Self> {
        let algorithm = algorithm.parse::<Algorithm>()?;
        let size = match usize::try_from(size) {
            Ok(n) if fits_in_memory(n) => n,
            _ => return Err(Error::InvalidSize(size)),
        };
        let block = match usize::try_from(block) {
            Ok(b) if b >= 1 => b,
            _ => return Err(Error::InvalidBlockSize(block)),
        };
        let runs = match usize::try_from(runs) {
            Ok(r) if r >= 1 => r,
            _ => return Err(Error::InvalidRuns(runs)),
        };
        Ok(BenchConfig {
            size,
            algorithm,
            block,
            runs,
            seed,
            output: output.into(),
        })
    }
}

/// Whether an N×N f64 buffer has a representable byte size.
fn fits_in_memory(n: usize) -> bool {
    n.checked_mul(n)
        .and_then(|elems| elems.checked_mul(size_of::<f64>()))
        .is_some_and(|bytes| bytes <= isize::MAX as usize)
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            size: DEFAULT_SIZE,
            algorithm: Algorithm::Naive,
            block: DEFAULT_BLOCK,
            runs: DEFAULT_RUNS,
            seed: DEFAULT_SEED,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_round_trip() {
        for algo in [Algorithm::Naive, Algorithm::Blocked] {
            assert_eq!(algo.to_string().parse::<Algorithm>().unwrap(), algo);
        }
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = "numpy".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, Error::UnknownAlgorithm(ref s) if s == "numpy"));
        // Case matters
        assert!("Naive".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_from_raw_ok() {
        let cfg = BenchConfig::from_raw(64, "blocked", 16, 3, -5, "out.csv").unwrap();
        assert_eq!(cfg.size, 64);
        assert_eq!(cfg.algorithm, Algorithm::Blocked);
        assert_eq!(cfg.block, 16);
        assert_eq!(cfg.runs, 3);
        assert_eq!(cfg.seed, -5);
        assert_eq!(cfg.output, PathBuf::from("out.csv"));
    }

    #[test]
    fn test_from_raw_rejects() {
        assert!(matches!(
            BenchConfig::from_raw(-1, "naive", 64, 5, 42, "o.csv"),
            Err(Error::InvalidSize(-1))
        ));
        assert!(matches!(
            BenchConfig::from_raw(8, "naive", 0, 5, 42, "o.csv"),
            Err(Error::InvalidBlockSize(0))
        ));
        assert!(matches!(
            BenchConfig::from_raw(8, "naive", 64, 0, 42, "o.csv"),
            Err(Error::InvalidRuns(0))
        ));
        assert!(matches!(
            BenchConfig::from_raw(8, "strassen", 64, 5, 42, "o.csv"),
            Err(Error::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_from_raw_rejects_overflowing_size() {
        assert!(matches!(
            BenchConfig::from_raw(5_000_000_000, "naive", 64, 1, 42, "o.csv"),
            Err(Error::InvalidSize(5_000_000_000))
        ));
        assert!(matches!(
            BenchConfig::from_raw(i64::MAX, "blocked", 64, 1, 42, "o.csv"),
            Err(Error::InvalidSize(i64::MAX))
        ));
        assert!(BenchConfig::from_raw(4096, "naive", 64, 1, 42, "o.csv").is_ok());
    }

    #[test]
    fn test_zero_size_is_valid() {
        assert_eq!(
            BenchConfig::from_raw(0, "naive", 64, 1, 42, "o.csv")
                .unwrap()
                .size,
            0
        );
    }

    #[test]
    fn test_defaults() {
        let cfg = BenchConfig::default();
        assert_eq!(cfg.size, 256);
        assert_eq!(cfg.algorithm, Algorithm::Naive);
        assert_eq!(cfg.block, 64);
        assert_eq!(cfg.runs, 5);
        assert_eq!(cfg.seed, 42);
    }
}
