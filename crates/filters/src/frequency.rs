//! Frequency-domain filtering transformer
//!
//! A thin adapter that exposes a [`FilterBackend`] through the uniform
//! transformer interface: it validates the band parameters up front,
//! normalizes the axis convention so that time sits on the last axis, and
//! forwards everything else verbatim.

use crate::backend::{default_backend, FilterBackend, FilterOptions};
use crate::error::{FilterError, Result};
use ndarray::{Ix2, Ix3};
use passband_core::series::{Layout, SeriesData};
use passband_core::transform::{SeriesTransform, TransformTags};
use passband_core::CoreError;
use std::sync::Arc;
use tracing::debug;

/// Band-pass, low-pass, and high-pass filtering of series data.
///
/// Both cutoffs set selects a band-pass; only `h_freq` low-passes the data,
/// only `l_freq` high-passes it. All filter design and application is owned
/// by the backend; this type carries no learned state and fitting is a
/// no-op.
pub struct FrequencyFilter {
    sfreq: f64,
    l_freq: Option<f64>,
    h_freq: Option<f64>,
    options: FilterOptions,
    backend: Arc<dyn FilterBackend>,
}

impl FrequencyFilter {
    /// Create a filter using the default backend
    pub fn new(sfreq: f64, l_freq: Option<f64>, h_freq: Option<f64>) -> Result<Self> {
        Self::with_backend(sfreq, l_freq, h_freq, FilterOptions::new(), default_backend()?)
    }

    /// Create a filter with extra options for the default backend
    pub fn with_options(
        sfreq: f64,
        l_freq: Option<f64>,
        h_freq: Option<f64>,
        options: FilterOptions,
    ) -> Result<Self> {
        Self::with_backend(sfreq, l_freq, h_freq, options, default_backend()?)
    }

    /// Create a filter delegating to the given backend
    pub fn with_backend(
        sfreq: f64,
        l_freq: Option<f64>,
        h_freq: Option<f64>,
        options: FilterOptions,
        backend: Arc<dyn FilterBackend>,
    ) -> Result<Self> {
        validate_band(sfreq, l_freq, h_freq)?;
        Ok(Self {
            sfreq,
            l_freq,
            h_freq,
            options,
            backend,
        })
    }

    /// Sampling frequency in Hz
    pub fn sfreq(&self) -> f64 {
        self.sfreq
    }

    /// Lower cutoff in Hz, if any
    pub fn l_freq(&self) -> Option<f64> {
        self.l_freq
    }

    /// Upper cutoff in Hz, if any
    pub fn h_freq(&self) -> Option<f64> {
        self.h_freq
    }

    /// Options forwarded to the backend
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Name of the backend this filter delegates to
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }
}

/// Eager parameter validation; invalid combinations never construct.
///
/// The cutoff pair is only cross-checked when both edges are present; a
/// lone edge is range-checked against the sampling rate by the backend at
/// transform time.
fn validate_band(sfreq: f64, l_freq: Option<f64>, h_freq: Option<f64>) -> Result<()> {
    if !sfreq.is_finite() {
        return Err(CoreError::NonFiniteParameter {
            name: "sfreq",
            value: sfreq,
        }
        .into());
    }
    if sfreq <= 0.0 {
        return Err(CoreError::InvalidSampleRate { rate: sfreq }.into());
    }
    for (name, freq) in [("l_freq", l_freq), ("h_freq", h_freq)] {
        if let Some(value) = freq {
            if !value.is_finite() {
                return Err(CoreError::NonFiniteParameter { name, value }.into());
            }
        }
    }
    if let (Some(l), Some(h)) = (l_freq, h_freq) {
        if l <= 0.0 || h <= 0.0 {
            return Err(FilterError::NonPositiveCutoff { l, h });
        }
        if l > h {
            return Err(FilterError::InvertedBand { l, h });
        }
    }
    Ok(())
}

impl SeriesTransform for FrequencyFilter {
    type Error = FilterError;

    fn transform(&self, x: &SeriesData) -> Result<SeriesData> {
        debug!(
            layout = ?x.layout(),
            shape = ?x.shape(),
            l_freq = ?self.l_freq,
            h_freq = ?self.h_freq,
            backend = self.backend.name(),
            "applying frequency filter"
        );
        match x {
            SeriesData::Series(data) => {
                // Callers hand us (time, channel); the backend wants time last.
                let filtered = self.backend.filter_data(
                    data.t().into_dyn(),
                    self.sfreq,
                    self.l_freq,
                    self.h_freq,
                    &self.options,
                )?;
                let ndim = filtered.ndim();
                let filtered = filtered.into_dimensionality::<Ix2>().map_err(|_| {
                    CoreError::ShapeMismatch {
                        expected: "a 2-dimensional filtered array".into(),
                        actual: format!("{} dimensions", ndim),
                    }
                })?;
                Ok(SeriesData::Series(filtered.reversed_axes()))
            }
            SeriesData::Panel(data) => {
                // Panels are already (instance, channel, time).
                let filtered = self.backend.filter_data(
                    data.view().into_dyn(),
                    self.sfreq,
                    self.l_freq,
                    self.h_freq,
                    &self.options,
                )?;
                let ndim = filtered.ndim();
                let filtered = filtered.into_dimensionality::<Ix3>().map_err(|_| {
                    CoreError::ShapeMismatch {
                        expected: "a 3-dimensional filtered array".into(),
                        actual: format!("{} dimensions", ndim),
                    }
                })?;
                Ok(SeriesData::Panel(filtered))
            }
        }
    }

    fn tags(&self) -> TransformTags {
        TransformTags {
            accepts: &[Layout::Series, Layout::Panel],
            instancewise: true,
            fit_is_empty: true,
            requires_backend: Some("sci-rs"),
        }
    }
}
