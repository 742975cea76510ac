//! Signal filter backend capability
//!
//! The frequency transformers in this crate implement no filter design or
//! application of their own. Everything past parameter validation and axis
//! normalization is delegated to a [`FilterBackend`].

use crate::error::Result;
use ndarray::{ArrayD, ArrayViewD};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A single named option value forwarded to the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl OptValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            OptValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptValue::Str(v) => Some(v),
            _ => None,
        }
    }
}

/// Named options passed through to the backend unchanged.
///
/// Which keys are meaningful is entirely up to the backend; an
/// implementation rejects keys it does not understand.
pub type FilterOptions = BTreeMap<String, OptValue>;

/// Narrow capability for digital filtering of sampled data.
///
/// `data` is an n-dimensional view whose last axis is time; frequencies are
/// in Hz. Band selection follows the cutoff pair: both set is band-pass,
/// only `h_freq` low-pass, only `l_freq` high-pass. Implementations must
/// leave the input untouched and return a freshly allocated array of the
/// same shape.
pub trait FilterBackend: Send + Sync {
    /// Backend name for diagnostics
    fn name(&self) -> &'static str;

    /// Filter `data` along its last axis
    fn filter_data(
        &self,
        data: ArrayViewD<'_, f64>,
        sfreq: f64,
        l_freq: Option<f64>,
        h_freq: Option<f64>,
        options: &FilterOptions,
    ) -> Result<ArrayD<f64>>;
}

/// The backend used when a transformer is constructed without an explicit
/// one. Fails when no backend is compiled in.
pub fn default_backend() -> Result<Arc<dyn FilterBackend>> {
    #[cfg(feature = "sci")]
    {
        Ok(Arc::new(crate::sci::SciBackend::new()))
    }
    #[cfg(not(feature = "sci"))]
    {
        Err(crate::error::FilterError::BackendUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "sci")]
    #[test]
    fn test_default_backend_is_sci() {
        assert_eq!(default_backend().unwrap().name(), "sci-rs");
    }

    #[cfg(not(feature = "sci"))]
    #[test]
    fn test_default_backend_unavailable() {
        assert!(matches!(
            default_backend(),
            Err(crate::error::FilterError::BackendUnavailable)
        ));
    }

    #[test]
    fn test_opt_value_accessors() {
        assert_eq!(OptValue::Bool(true).as_bool(), Some(true));
        assert_eq!(OptValue::Int(4).as_int(), Some(4));
        assert_eq!(OptValue::Str("iir".into()).as_str(), Some("iir"));
        assert_eq!(OptValue::Float(1.5).as_int(), None);
    }
}
