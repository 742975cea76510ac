//! Shape-tagged containers for time-series data

use ndarray::{Array1, Array2, Array3, Axis};
use serde::{Deserialize, Serialize};

/// Shape kind of a series container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// A single multi-channel recording, stored as (time, channel)
    Series,
    /// A collection of recordings, stored as (instance, channel, time)
    Panel,
}

/// A time-series container tagged with its axis convention.
///
/// `Series` holds one (possibly multi-channel) recording in the time-major
/// layout callers work in. `Panel` holds a batch of recordings with time on
/// the last axis. Resolving the layout once at this boundary keeps axis
/// bookkeeping out of the transformers themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesData {
    Series(Array2<f64>),
    Panel(Array3<f64>),
}

impl SeriesData {
    /// Build a single-channel series from raw samples
    pub fn from_channel(samples: Vec<f64>) -> Self {
        SeriesData::Series(Array1::from(samples).insert_axis(Axis(1)))
    }

    /// Shape kind of this container
    pub fn layout(&self) -> Layout {
        match self {
            SeriesData::Series(_) => Layout::Series,
            SeriesData::Panel(_) => Layout::Panel,
        }
    }

    /// Number of independent recordings (1 for a series)
    pub fn n_instances(&self) -> usize {
        match self {
            SeriesData::Series(_) => 1,
            SeriesData::Panel(data) => data.shape()[0],
        }
    }

    /// Number of channels per recording
    pub fn n_channels(&self) -> usize {
        match self {
            SeriesData::Series(data) => data.ncols(),
            SeriesData::Panel(data) => data.shape()[1],
        }
    }

    /// Number of observations along the time axis
    pub fn n_timepoints(&self) -> usize {
        match self {
            SeriesData::Series(data) => data.nrows(),
            SeriesData::Panel(data) => data.shape()[2],
        }
    }

    /// Raw array shape
    pub fn shape(&self) -> &[usize] {
        match self {
            SeriesData::Series(data) => data.shape(),
            SeriesData::Panel(data) => data.shape(),
        }
    }

    /// The underlying (time, channel) array, if this is a series
    pub fn as_series(&self) -> Option<&Array2<f64>> {
        match self {
            SeriesData::Series(data) => Some(data),
            SeriesData::Panel(_) => None,
        }
    }

    /// The underlying (instance, channel, time) array, if this is a panel
    pub fn as_panel(&self) -> Option<&Array3<f64>> {
        match self {
            SeriesData::Series(_) => None,
            SeriesData::Panel(data) => Some(data),
        }
    }
}

impl From<Array2<f64>> for SeriesData {
    fn from(data: Array2<f64>) -> Self {
        SeriesData::Series(data)
    }
}

impl From<Array3<f64>> for SeriesData {
    fn from(data: Array3<f64>) -> Self {
        SeriesData::Panel(data)
    }
}
