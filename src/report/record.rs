use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use tracing::info;

use crate::error::{Error, Result};
use crate::runner::{Algorithm, Session};

/// Column names shared with the results files of the other language ports.
pub const CSV_HEADER: &str =
    "timestamp,lang,algo,n,runs,block,mean_ms,stdev_ms,best_ms,est_GFLOP_s";

pub const LANGUAGE_TAG: &str = "rust";

/// One row of the results table.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub timestamp: String,
    pub lang: &'static str,
    pub algorithm: Algorithm,
    pub n: usize,
    pub runs: usize,
    pub block: usize,
    pub mean_ms: f64,
    pub stdev_ms: f64,
    pub best_ms: f64,
    pub gflops: f64,
}

impl ResultRecord {
    /// Record a finished session, stamped with the current UTC time.
    pub fn from_session(session: &Session) -> Self {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        Self::with_timestamp(session, timestamp)
    }

    pub fn with_timestamp(session: &Session, timestamp: String) -> Self {
        let config = &session.config;
        let summary = &session.summary;
        ResultRecord {
            timestamp,
            lang: LANGUAGE_TAG,
            algorithm: config.algorithm,
            n: config.size,
            runs: config.runs,
            block: config.block,
            mean_ms: summary.mean_ms,
            stdev_ms: summary.stdev_ms,
            best_ms: summary.best_ms,
            gflops: summary.gflops,
        }
    }

    /// The CSV line for this record, without a trailing newline.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{:.3},{:.3},{:.3},{:.3}",
            self.timestamp,
            self.lang,
            self.algorithm,
            self.n,
            self.runs,
            self.block,
            self.mean_ms,
            self.stdev_ms,
            self.best_ms,
            self.gflops
        )
    }

    /// Human-readable one-line summary for the console.
    pub fn console_line(&self) -> String {
        format!(
            "[{}] {} N={} runs={} block={} -> mean={:.2} ms (σ={:.2}), best={:.2} ms, ~{:.2} GFLOP/s",
            self.lang,
            self.algorithm,
            self.n,
            self.runs,
            self.block,
            self.mean_ms,
            self.stdev_ms,
            self.best_ms,
            self.gflops
        )
    }
}

/// Append `record` to the CSV at `path`.
///
/// Parent directories are created as needed. The header is written only
/// when the file does not exist yet.
pub fn append_record(path: &Path, record: &ResultRecord) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let exists = path.exists();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    let mut out = String::new();
    if !exists {
        out.push_str(CSV_HEADER);
        out.push('\n');
    }
    out.push_str(&record.to_csv_row());
    out.push('\n');
    file.write_all(out.as_bytes()).map_err(|e| Error::io(path, e))?;

    info!(path = %path.display(), new_file = !exists, "appended result");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{BenchConfig, Summary};

    fn session() -> Session {
        Session {
            config: BenchConfig {
                size: 128,
                algorithm: Algorithm::Blocked,
                block: 32,
                runs: 3,
                ..BenchConfig::default()
            },
            samples_ms: vec![1.0, 2.0, 3.0],
            summary: Summary {
                mean_ms: 2.0,
                stdev_ms: 0.81649658,
                best_ms: 1.0,
                gflops: 2.097152,
            },
        }
    }

    #[test]
    fn test_csv_row() {
        let rec = ResultRecord::with_timestamp(&session(), "2024-01-01T00:00:00.000Z".into());
        assert_eq!(
            rec.to_csv_row(),
            "2024-01-01T00:00:00.000Z,rust,blocked,128,3,32,2.000,0.816,1.000,2.097"
        );
    }

    #[test]
    fn test_console_line() {
        let rec = ResultRecord::with_timestamp(&session(), "t".into());
        assert_eq!(
            rec.console_line(),
            "[rust] blocked N=128 runs=3 block=32 -> mean=2.00 ms (σ=0.82), best=1.00 ms, ~2.10 GFLOP/s"
        );
    }

    #[test]
    fn test_header_has_ten_columns() {
        assert_eq!(CSV_HEADER.split(',').count(), 10);
        let rec = ResultRecord::with_timestamp(&session(), "t".into());
        assert_eq!(rec.to_csv_row().split(',').count(), 10);
    }

    #[test]
    fn test_timestamp_is_utc_rfc3339() {
        let rec = ResultRecord::from_session(&session());
        assert!(rec.timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&rec.timestamp).is_ok());
    }
}
