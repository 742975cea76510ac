//! End-to-end CSV filtering

use crate::config::FilterConfig;
use crate::csvio::{self, CsvSeries};
use anyhow::{Context, Result};
use passband_core::transform::SeriesTransform;
use passband_filters::frequency::FrequencyFilter;
use tracing::info;

/// Read the input, filter it, and write the result
pub fn run(config: &FilterConfig) -> Result<()> {
    let series = csvio::read_series(&config.input, !config.no_header)?;
    info!(
        channels = series.channels.len(),
        timepoints = series.data.n_timepoints(),
        "loaded input"
    );

    let options = config.backend_options()?;
    let filter =
        FrequencyFilter::with_options(config.sfreq, config.l_freq, config.h_freq, options)
            .context("Failed to construct filter")?;
    let filtered = filter
        .transform(&series.data)
        .context("Filtering failed")?;

    let result = CsvSeries {
        channels: series.channels,
        data: filtered,
    };
    match &config.output {
        Some(path) => csvio::write_series_to_path(path, &result, !config.no_header)?,
        None => csvio::write_series(std::io::stdout().lock(), &result, !config.no_header)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csvio::read_series;
    use std::io::Write as _;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_filter_csv_end_to_end() {
        let mut input = NamedTempFile::new().unwrap();
        writeln!(input, "left,right").unwrap();
        for i in 0..128 {
            let t = i as f64 / 100.0;
            writeln!(input, "{},{}", (t * 7.0).sin(), (t * 3.0).cos()).unwrap();
        }
        input.flush().unwrap();

        let output = NamedTempFile::new().unwrap();
        let config = FilterConfig {
            input: input.path().to_path_buf(),
            output: Some(output.path().to_path_buf()),
            sfreq: 100.0,
            l_freq: None,
            h_freq: Some(10.0),
            options: vec!["order=2".to_string()],
            no_header: false,
            verbose: false,
        };

        run(&config).unwrap();

        let filtered = read_series(output.path(), true).unwrap();
        assert_eq!(filtered.channels, vec!["left", "right"]);
        assert_eq!(filtered.data.shape(), &[128, 2]);
    }

    #[test]
    fn test_missing_input_fails() {
        let config = FilterConfig {
            input: PathBuf::from("does-not-exist.csv"),
            output: None,
            sfreq: 100.0,
            l_freq: None,
            h_freq: Some(10.0),
            options: Vec::new(),
            no_header: false,
            verbose: false,
        };
        assert!(run(&config).is_err());
    }
}
