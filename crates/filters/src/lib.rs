//! Passband Filters - frequency-domain filtering transformers
//!
//! This crate provides the band-pass/low-pass/high-pass transformer for
//! series data and the narrow backend capability it delegates all filter
//! design and application to.

pub mod backend;
pub mod frequency;
pub mod error;

#[cfg(feature = "sci")]
pub mod sci;

pub use error::{FilterError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        backend::{default_backend, FilterBackend, FilterOptions, OptValue},
        frequency::FrequencyFilter,
        error::{FilterError, Result},
    };
    #[cfg(feature = "sci")]
    pub use crate::sci::SciBackend;
}
