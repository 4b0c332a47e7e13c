//! Post-processing of results files: merging and LaTeX export.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};

/// Header and data rows of a results file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultsTable {
    /// Read a comma-separated results file. Blank lines are skipped.
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let mut lines = text.lines().filter(|l| !l.trim().is_empty());
        let header = lines
            .next()
            .map(split_row)
            .ok_or_else(|| Error::MalformedResults {
                path: path.to_path_buf(),
                reason: "missing header row".to_string(),
            })?;
        let rows = lines.map(split_row).collect();
        Ok(ResultsTable { header, rows })
    }

    fn column(&self, name: &str, path: &Path) -> Result<usize> {
        self.header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::MalformedResults {
                path: path.to_path_buf(),
                reason: format!("missing column '{}'", name),
            })
    }
}

fn split_row(line: &str) -> Vec<String> {
    line.split(',').map(|f| f.trim().to_string()).collect()
}

/// Concatenate the data rows of `inputs` into a fresh file at `output`.
///
/// The header comes from the first input. Returns the number of data
/// rows written.
pub fn merge_results(output: &Path, inputs: &[PathBuf]) -> Result<usize> {
    if inputs.is_empty() {
        return Err(Error::NoInputs);
    }

    let mut header: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for input in inputs {
        let table = ResultsTable::read(input)?;
        header.get_or_insert(table.header);
        rows.extend(table.rows);
    }

    let mut out = String::new();
    for row in header.iter().chain(rows.iter()) {
        out.push_str(&row.join(","));
        out.push('\n');
    }
    write_creating_dirs(output, &out)?;

    info!(
        path = %output.display(),
        rows = rows.len(),
        files = inputs.len(),
        "merged results"
    );
    Ok(rows.len())
}

/// Render a results file as a booktabs LaTeX table.
///
/// Rows are sorted by `(n, lang, algo)`. Returns the number of rows.
pub fn latex_table(input: &Path, output: &Path) -> Result<usize> {
    let table = ResultsTable::read(input)?;
    let col = |name: &str| table.column(name, input);
    let (lang, algo, n, runs, block) = (
        col("lang")?,
        col("algo")?,
        col("n")?,
        col("runs")?,
        col("block")?,
    );
    let (mean, best, gflops) = (col("mean_ms")?, col("best_ms")?, col("est_GFLOP_s")?);

    let field = |row: &[String], idx: usize| row.get(idx).cloned().unwrap_or_default();

    let mut keyed = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let size: usize = field(row, n)
            .parse()
            .map_err(|_| Error::MalformedResults {
                path: input.to_path_buf(),
                reason: format!("bad matrix size '{}'", field(row, n)),
            })?;
        keyed.push(((size, field(row, lang), field(row, algo)), row));
    }
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut lines = vec![
        r"\begin{table}[h]".to_string(),
        r"\centering".to_string(),
        r"\begin{tabular}{l l r r r r r r}".to_string(),
        r"\toprule".to_string(),
        r"Lang & Algo & $N$ & Runs & Block & Mean [ms] & Best [ms] & GFLOP/s \\".to_string(),
        r"\midrule".to_string(),
    ];
    for ((size, lang_tag, algo_tag), row) in &keyed {
        lines.push(format!(
            r"{} & {} & {} & {} & {} & {} & {} & {} \\",
            lang_tag,
            algo_tag,
            size,
            field(row, runs),
            field(row, block),
            fixed(&field(row, mean), 1),
            fixed(&field(row, best), 1),
            fixed(&field(row, gflops), 2)
        ));
    }
    lines.extend([
        r"\bottomrule".to_string(),
        r"\end{tabular}".to_string(),
        r"\caption{Matrix multiplication benchmark results (mean over runs).}".to_string(),
        r"\label{tab:results}".to_string(),
        r"\end{table}".to_string(),
    ]);

    write_creating_dirs(output, &lines.join("\n"))?;
    info!(path = %output.display(), rows = keyed.len(), "wrote LaTeX table");
    Ok(keyed.len())
}

/// Reformat a numeric cell to `digits` decimals; non-numbers pass through.
fn fixed(cell: &str, digits: usize) -> String {
    match cell.parse::<f64>() {
        Ok(v) => format!("{:.*}", digits, v),
        Err(_) => cell.to_string(),
    }
}

fn write_creating_dirs(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| Error::io(path, e))
}
