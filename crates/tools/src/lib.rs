//! Passband Tools library

pub mod config;
pub mod csvio;
pub mod run;

pub use config::FilterConfig;
pub use csvio::{read_series, write_series, CsvSeries};
pub use run::run;
