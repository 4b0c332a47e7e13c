//! Benchmark runner for the naive and blocked matmul kernels.
//!
//! # Commands
//!
//! - `run` - Time one algorithm and append the result to a CSV table
//! - `merge` - Combine several results files into one
//! - `table` - Render a results file as a LaTeX table

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use matbench::blocked::DEFAULT_BLOCK;
use matbench::report::{ResultRecord, append_record, latex_table, merge_results};
use matbench::runner::config::{DEFAULT_OUTPUT, DEFAULT_RUNS, DEFAULT_SEED, DEFAULT_SIZE};
use matbench::{BenchConfig, Error, Result, run_session};

/// Dense matrix multiplication benchmark (naive vs blocked)
#[derive(Parser)]
#[command(name = "matbench")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time repeated N×N multiplications and append a results row
    ///
    /// Examples:
    ///   matbench run --size 512 --algo blocked --block 64
    ///   matbench run --size 128 --runs 10 --out data/outputs/small.csv
    Run {
        /// Matrix size N (N×N)
        #[arg(long, default_value_t = DEFAULT_SIZE as i64, allow_negative_numbers = true)]
        size: i64,

        /// Algorithm: naive or blocked
        #[arg(long, default_value = "naive")]
        algo: String,

        /// Tile edge for the blocked algorithm
        #[arg(long, default_value_t = DEFAULT_BLOCK as i64, allow_negative_numbers = true)]
        block: i64,

        /// Number of timed runs
        #[arg(long, default_value_t = DEFAULT_RUNS as i64, allow_negative_numbers = true)]
        runs: i64,

        /// Base seed; run r uses seed+r for A and seed+r+1 for B
        #[arg(long, default_value_t = DEFAULT_SEED, allow_negative_numbers = true)]
        seed: i64,

        /// Results CSV (created with a header if missing)
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        out: PathBuf,
    },
    /// Merge results files into a single CSV
    ///
    /// Example:
    ///   matbench merge data/all.csv data/outputs/*.csv
    Merge {
        /// Output CSV (overwritten)
        #[arg(value_name = "OUT")]
        output: PathBuf,

        /// Input results files
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Render a results file as a LaTeX table
    Table {
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            // Printed unconditionally: the log filter may drop the line above
            eprintln!("error: {}", e);
            ExitCode::from(exit_status(&e))
        }
    }
}

/// 2 for a failed correctness check, 1 for everything else.
fn exit_status(e: &Error) -> u8 {
    match e {
        Error::VerificationFailed { .. } => 2,
        _ => 1,
    }
}

fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            size,
            algo,
            block,
            runs,
            seed,
            out,
        } => {
            let config = BenchConfig::from_raw(size, &algo, block, runs, seed, out)?;
            let session = run_session(&config)?;
            let record = ResultRecord::from_session(&session);
            append_record(&config.output, &record)?;
            println!("{}", record.console_line());
        }
        Commands::Merge { output, inputs } => {
            let rows = merge_results(&output, &inputs)?;
            println!(
                "Wrote {} with {} rows from {} files.",
                output.display(),
                rows,
                inputs.len()
            );
        }
        Commands::Table { input, output } => {
            let rows = latex_table(&input, &output)?;
            println!("Wrote {} ({} rows).", output.display(), rows);
        }
    }
    Ok(())
}
