//! Configuration for the passband CLI

use anyhow::{Context, Result};
use clap::Parser;
use passband_filters::backend::{FilterOptions, OptValue};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Filter run configuration
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "passband")]
#[command(about = "Band-pass, low-pass, and high-pass filtering of CSV time series")]
pub struct FilterConfig {
    /// Input CSV file, one column per channel, one row per time step
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output CSV file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sampling frequency in Hz
    #[arg(long)]
    pub sfreq: f64,

    /// Lower cutoff in Hz (high-pass edge)
    #[arg(long)]
    pub l_freq: Option<f64>,

    /// Upper cutoff in Hz (low-pass edge)
    #[arg(long)]
    pub h_freq: Option<f64>,

    /// Extra backend options as KEY=VALUE pairs (e.g. order=2, zero_phase=false)
    #[arg(long = "option", value_name = "KEY=VALUE")]
    pub options: Vec<String>,

    /// Treat the first CSV row as data instead of channel names
    #[arg(long)]
    pub no_header: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl FilterConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Self = toml::from_str(&content)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file(&self, path: &PathBuf) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    /// Parse the KEY=VALUE option pairs into backend options
    pub fn backend_options(&self) -> Result<FilterOptions> {
        let mut options = FilterOptions::new();
        for pair in &self.options {
            let (key, value) = pair
                .split_once('=')
                .with_context(|| format!("Invalid option `{}`, expected KEY=VALUE", pair))?;
            options.insert(key.trim().to_string(), parse_value(value.trim()));
        }
        Ok(options)
    }
}

/// Guess the most specific option type a raw string can carry
fn parse_value(raw: &str) -> OptValue {
    if let Ok(value) = raw.parse::<bool>() {
        return OptValue::Bool(value);
    }
    if let Ok(value) = raw.parse::<i64>() {
        return OptValue::Int(value);
    }
    if let Ok(value) = raw.parse::<f64>() {
        return OptValue::Float(value);
    }
    OptValue::Str(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample_config() -> FilterConfig {
        FilterConfig {
            input: PathBuf::from("eeg.csv"),
            output: None,
            sfreq: 250.0,
            l_freq: Some(1.0),
            h_freq: Some(40.0),
            options: vec!["order=2".to_string()],
            no_header: false,
            verbose: false,
        }
    }

    #[test]
    fn test_config_serialization() {
        let config = sample_config();

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();

        config.save_to_file(&path).unwrap();
        let loaded = FilterConfig::from_file(&path).unwrap();

        assert_eq!(config.input, loaded.input);
        assert_eq!(config.sfreq, loaded.sfreq);
        assert_eq!(config.l_freq, loaded.l_freq);
        assert_eq!(config.options, loaded.options);
    }

    #[test]
    fn test_backend_options_parsing() {
        let mut config = sample_config();
        config.options = vec![
            "order=6".to_string(),
            "zero_phase=false".to_string(),
            "method=iir".to_string(),
        ];

        let options = config.backend_options().unwrap();
        assert_eq!(options["order"], OptValue::Int(6));
        assert_eq!(options["zero_phase"], OptValue::Bool(false));
        assert_eq!(options["method"], OptValue::Str("iir".to_string()));
    }

    #[test]
    fn test_malformed_option_rejected() {
        let mut config = sample_config();
        config.options = vec!["order".to_string()];
        assert!(config.backend_options().is_err());
    }

    #[test]
    fn test_value_type_guessing() {
        assert_eq!(parse_value("true"), OptValue::Bool(true));
        assert_eq!(parse_value("4"), OptValue::Int(4));
        assert_eq!(parse_value("0.5"), OptValue::Float(0.5));
        assert_eq!(parse_value("iir"), OptValue::Str("iir".to_string()));
    }
}
