//! Passband - frequency filtering for CSV time series

use anyhow::Result;
use clap::Parser;
use passband_tools::FilterConfig;

fn main() -> Result<()> {
    let config = FilterConfig::parse();

    // Initialize logging
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    passband_tools::run(&config)
}
