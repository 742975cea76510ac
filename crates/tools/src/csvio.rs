//! CSV reading and writing for (time, channel) series data

use anyhow::{bail, Context, Result};
use ndarray::Array2;
use passband_core::series::SeriesData;
use std::io::Write;
use std::path::Path;

/// A series together with its channel names
#[derive(Debug, Clone)]
pub struct CsvSeries {
    pub channels: Vec<String>,
    pub data: SeriesData,
}

/// Read a CSV file into a (time, channel) series.
///
/// With `has_header` the first row carries the channel names; otherwise
/// names are generated as `ch0`, `ch1`, ...
pub fn read_series(path: &Path, has_header: bool) -> Result<CsvSeries> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut channels: Vec<String> = if has_header {
        reader.headers()?.iter().map(|h| h.to_string()).collect()
    } else {
        Vec::new()
    };

    let mut values: Vec<f64> = Vec::new();
    let mut n_channels = channels.len();
    let mut n_rows = 0usize;
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if n_channels == 0 {
            n_channels = record.len();
        }
        if record.len() != n_channels {
            bail!(
                "Row {} has {} fields, expected {}",
                row + 1,
                record.len(),
                n_channels
            );
        }
        for (col, field) in record.iter().enumerate() {
            let value: f64 = field.trim().parse().with_context(|| {
                format!("Row {}, column {}: not a number: {:?}", row + 1, col + 1, field)
            })?;
            values.push(value);
        }
        n_rows += 1;
    }
    if n_rows == 0 {
        bail!("No data rows in {}", path.display());
    }

    if channels.is_empty() {
        channels = (0..n_channels).map(|i| format!("ch{}", i)).collect();
    }

    let data = Array2::from_shape_vec((n_rows, n_channels), values)
        .context("Failed to assemble data array")?;
    Ok(CsvSeries {
        channels,
        data: SeriesData::Series(data),
    })
}

/// Write a series as CSV to the given writer
pub fn write_series<W: Write>(writer: W, series: &CsvSeries, with_header: bool) -> Result<()> {
    let data = series
        .data
        .as_series()
        .context("Only (time, channel) series can be written as CSV")?;

    let mut writer = csv::Writer::from_writer(writer);
    if with_header {
        writer.write_record(&series.channels)?;
    }
    for row in data.rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a series as CSV to a file path
pub fn write_series_to_path(path: &Path, series: &CsvSeries, with_header: bool) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_series(file, series, with_header)
}
