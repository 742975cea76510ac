//! Filter backend backed by the `sci-rs` signal crate
//!
//! Designs a Butterworth filter in second-order sections and applies it
//! along the time axis of the input, forward-backward by default. All of
//! the numerical work happens inside `sci-rs`.

use crate::backend::{FilterBackend, FilterOptions};
use crate::error::{FilterError, Result};
use ndarray::{ArrayD, ArrayView1, ArrayViewD, Axis, Zip};
use sci_rs::signal::filter::design::{
    butter_dyn, DigitalFilter, FilterBandType, FilterOutputType, Sos, SosFormatFilter,
};
use sci_rs::signal::filter::{sosfilt_dyn, sosfiltfilt_dyn};
use tracing::debug;

const DEFAULT_ORDER: usize = 4;

/// Backend delegating filter design and application to `sci-rs`
#[derive(Debug, Clone, Default)]
pub struct SciBackend;

impl SciBackend {
    pub fn new() -> Self {
        Self
    }
}

/// Options understood by [`SciBackend`]
struct SciOptions {
    order: usize,
    zero_phase: bool,
}

fn parse_options(options: &FilterOptions) -> Result<SciOptions> {
    let mut parsed = SciOptions {
        order: DEFAULT_ORDER,
        zero_phase: true,
    };
    for (key, value) in options {
        match key.as_str() {
            "order" => {
                let order = value.as_int().filter(|v| *v >= 1).ok_or_else(|| {
                    FilterError::InvalidOption {
                        key: key.clone(),
                        msg: format!("expected a positive integer, got {:?}", value),
                    }
                })?;
                parsed.order = order as usize;
            }
            "zero_phase" => {
                parsed.zero_phase =
                    value.as_bool().ok_or_else(|| FilterError::InvalidOption {
                        key: key.clone(),
                        msg: format!("expected a boolean, got {:?}", value),
                    })?;
            }
            "method" => match value.as_str() {
                Some("iir") => {}
                _ => {
                    return Err(FilterError::InvalidOption {
                        key: key.clone(),
                        msg: format!("this backend only supports \"iir\", got {:?}", value),
                    })
                }
            },
            _ => return Err(FilterError::UnknownOption { key: key.clone() }),
        }
    }
    Ok(parsed)
}

/// Map the cutoff pair onto a band type and its edge list, range-checking
/// every edge against the Nyquist frequency.
fn band_edges(
    sfreq: f64,
    l_freq: Option<f64>,
    h_freq: Option<f64>,
) -> Result<(FilterBandType, Vec<f64>)> {
    let (btype, edges) = match (l_freq, h_freq) {
        (Some(l), Some(h)) => (FilterBandType::Bandpass, vec![l, h]),
        (Some(l), None) => (FilterBandType::Highpass, vec![l]),
        (None, Some(h)) => (FilterBandType::Lowpass, vec![h]),
        (None, None) => {
            return Err(FilterError::UnsupportedBand {
                msg: "at least one of l_freq and h_freq must be set".into(),
            })
        }
    };
    let nyquist = sfreq / 2.0;
    for &edge in &edges {
        if !(edge > 0.0 && edge < nyquist) {
            return Err(FilterError::CutoffOutOfRange { freq: edge, sfreq });
        }
    }
    if edges.len() == 2 && edges[0] >= edges[1] {
        return Err(FilterError::UnsupportedBand {
            msg: format!(
                "band edges must be strictly increasing, got {} and {} Hz",
                edges[0], edges[1]
            ),
        });
    }
    Ok((btype, edges))
}

fn design(sfreq: f64, l_freq: Option<f64>, h_freq: Option<f64>, order: usize) -> Result<Vec<Sos<f64>>> {
    let (btype, edges) = band_edges(sfreq, l_freq, h_freq)?;
    let filter = butter_dyn(
        order,
        edges,
        Some(btype),
        Some(false),
        Some(FilterOutputType::Sos),
        Some(sfreq),
    );
    match filter {
        DigitalFilter::Sos(SosFormatFilter { sos }) => Ok(sos),
        _ => Err(FilterError::DesignFailed {
            msg: "expected a second-order-sections design".into(),
        }),
    }
}

impl FilterBackend for SciBackend {
    fn name(&self) -> &'static str {
        "sci-rs"
    }

    fn filter_data(
        &self,
        data: ArrayViewD<'_, f64>,
        sfreq: f64,
        l_freq: Option<f64>,
        h_freq: Option<f64>,
        options: &FilterOptions,
    ) -> Result<ArrayD<f64>> {
        if data.ndim() == 0 {
            return Err(passband_core::CoreError::ShapeMismatch {
                expected: "an array with a time axis".into(),
                actual: "a 0-dimensional array".into(),
            }
            .into());
        }
        let opts = parse_options(options)?;
        let sos = design(sfreq, l_freq, h_freq, opts.order)?;
        debug!(
            sections = sos.len(),
            order = opts.order,
            zero_phase = opts.zero_phase,
            "designed Butterworth filter"
        );

        let time_axis = Axis(data.ndim() - 1);
        let mut out = ArrayD::zeros(data.raw_dim());
        Zip::from(out.lanes_mut(time_axis))
            .and(data.lanes(time_axis))
            .for_each(|mut filtered, lane| {
                let y = if opts.zero_phase {
                    sosfiltfilt_dyn(lane.iter(), &sos)
                } else {
                    // sosfilt carries per-section state; give each lane a
                    // fresh copy.
                    let mut sections = sos.clone();
                    sosfilt_dyn(lane.iter(), &mut sections)
                };
                filtered.assign(&ArrayView1::from(&y[..]));
            });
        Ok(out)
    }
}
