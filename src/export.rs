//! CSV export of sweep data.
//!
//! One row per priced point: `variable,option,x,price`. Gaps are not written.

use crate::sweep::{SensitivityReport, SweepSeries, SweepVariable};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct CsvRow {
    variable: SweepVariable,
    option: &'static str,
    x: f64,
    price: f64,
}

/// Writes every sweep point of `report` as CSV to `writer`.
pub fn write_csv_to<W: Write>(report: &SensitivityReport, writer: W) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut rows = 0;

    for sweep in report.sweeps() {
        for (option, series) in [("call", &sweep.call), ("put", &sweep.put)] {
            rows += write_series(&mut wtr, sweep.variable, option, series)?;
        }
    }

    wtr.flush().context("failed to flush CSV output")?;
    Ok(rows)
}

/// Writes every sweep point of `report` to the CSV file at `path`.
pub fn write_csv(report: &SensitivityReport, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let rows = write_csv_to(report, file)?;
    tracing::info!(path = %path.display(), rows, "sweep data written");
    Ok(rows)
}

fn write_series<W: Write>(
    wtr: &mut csv::Writer<W>,
    variable: SweepVariable,
    option: &'static str,
    series: &SweepSeries,
) -> Result<usize> {
    for p in series.iter() {
        wtr.serialize(CsvRow {
            variable,
            option,
            x: p.x,
            price: p.y,
        })
        .with_context(|| format!("failed to write {variable} {option} row"))?;
    }
    Ok(series.len())
}
