//! Error types for Passband Core

use thiserror::Error;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid sample rate: {rate}")]
    InvalidSampleRate { rate: f64 },

    #[error("Parameter `{name}` must be a finite number, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },
}

/// Result type for Passband Core operations
pub type Result<T> = std::result::Result<T, CoreError>;
