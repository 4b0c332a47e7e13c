//! Persisting and presenting benchmark results.
//!
//! Results go to an append-only CSV table whose schema matches the
//! sibling C++, Java and Python tools, so files from all of them can be
//! merged and rendered together.

pub mod record;
pub mod table;

pub use record::{CSV_HEADER, LANGUAGE_TAG, ResultRecord, append_record};
pub use table::{ResultsTable, latex_table, merge_results};
