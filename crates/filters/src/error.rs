//! Error types for Passband Filters

use thiserror::Error;

/// Filter error types
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("No filter backend available; enable the `sci` feature or inject one")]
    BackendUnavailable,

    #[error("Cutoff frequencies must be positive: l_freq={l}, h_freq={h}")]
    NonPositiveCutoff { l: f64, h: f64 },

    #[error("Low cutoff {l} Hz must not exceed high cutoff {h} Hz")]
    InvertedBand { l: f64, h: f64 },

    #[error("Cutoff {freq} Hz is out of range for sampling rate {sfreq} Hz")]
    CutoffOutOfRange { freq: f64, sfreq: f64 },

    #[error("Unsupported band: {msg}")]
    UnsupportedBand { msg: String },

    #[error("Unknown filter option: {key}")]
    UnknownOption { key: String },

    #[error("Invalid value for filter option `{key}`: {msg}")]
    InvalidOption { key: String, msg: String },

    #[error("Filter design failed: {msg}")]
    DesignFailed { msg: String },

    #[error("Core error: {0}")]
    Core(#[from] passband_core::CoreError),
}

/// Result type for Passband Filters operations
pub type Result<T> = std::result::Result<T, FilterError>;
