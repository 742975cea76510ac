//! Passband Core - series containers and transformer interface
//!
//! This crate provides the shape-tagged time-series containers and the
//! uniform transformer trait shared by all Passband transformers.

pub mod series;
pub mod transform;
pub mod error;

pub use error::{CoreError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        series::{Layout, SeriesData},
        transform::{SeriesTransform, TransformTags},
        error::{CoreError, Result},
    };
}
