//! CSV export of derived tables, currency columns formatted for display

use log::debug;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::engine::Totals;
use crate::error::ExportError;
use crate::format::format_inr;
use crate::records::Record;
use crate::workbook::Evaluation;

/// File stem of the totals summary written next to the tables
pub const SUMMARY_TABLE: &str = "summary";

/// Write one table as CSV: header row, then one display row per record
pub fn write_table<R: Record, W: Write>(writer: W, rows: &[R]) -> Result<(), csv::Error> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(R::headers())?;
    for row in rows {
        csv.write_record(row.display_row())?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the headline totals as a two-column CSV
pub fn write_totals<W: Write>(writer: W, totals: &Totals) -> Result<(), csv::Error> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Metric", "Amount (₹)"])?;
    for (label, amount) in totals_lines(totals) {
        csv.write_record([label, format_inr(amount).as_str()])?;
    }
    csv.flush()?;
    Ok(())
}

/// Labelled headline figures in display order
pub fn totals_lines(totals: &Totals) -> [(&'static str, f64); 3] {
    [
        ("Total Income", totals.total_income),
        ("Total Expenses", totals.total_expenses),
        ("Net Balance", totals.net_balance),
    ]
}

/// Export every derived table plus the totals into `dir`.
///
/// Returns the paths written, tables first.
pub fn export_evaluation(evaluation: &Evaluation, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let tables = &evaluation.tables;
    let mut written = Vec::new();
    written.push(export_file(dir, &tables.income)?);
    written.push(export_file(dir, &tables.expenses)?);
    written.push(export_file(dir, &tables.distribution)?);
    written.push(export_file(dir, &tables.projection)?);

    let path = csv_path(dir, SUMMARY_TABLE);
    let file = create(&path)?;
    write_totals(file, &evaluation.totals).map_err(|source| ExportError::Csv {
        path: path.clone(),
        source,
    })?;
    written.push(path);

    debug!("Exported {} files to {}", written.len(), dir.display());
    Ok(written)
}

fn export_file<R: Record>(dir: &Path, rows: &[R]) -> Result<PathBuf, ExportError> {
    let path = csv_path(dir, R::TABLE);
    let file = create(&path)?;
    write_table(file, rows).map_err(|source| ExportError::Csv {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn csv_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.csv", name))
}

fn create(path: &Path) -> Result<File, ExportError> {
    File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
