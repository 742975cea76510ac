//! Uniform transformer interface for series data

use crate::series::{Layout, SeriesData};
use serde::Serialize;

/// Declarative capability tags for a transformer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformTags {
    /// Layouts the transformer accepts
    pub accepts: &'static [Layout],
    /// Whether each instance is transformed independently of the others
    pub instancewise: bool,
    /// Whether fit is a no-op that callers may skip
    pub fit_is_empty: bool,
    /// External backend capability required at transform time, if any
    pub requires_backend: Option<&'static str>,
}

impl Default for TransformTags {
    fn default() -> Self {
        Self {
            accepts: &[Layout::Series],
            instancewise: true,
            fit_is_empty: true,
            requires_backend: None,
        }
    }
}

/// Series-to-series transformer interface.
///
/// Transformers return a new container with the same layout as the input;
/// the caller's buffer is never mutated.
pub trait SeriesTransform {
    /// Error type produced by this transformer
    type Error: std::error::Error;

    /// Fit the transformer to the data. Stateless transformers keep the
    /// default no-op.
    fn fit(&mut self, x: &SeriesData) -> Result<(), Self::Error> {
        let _ = x;
        Ok(())
    }

    /// Return a transformed copy of the input
    fn transform(&self, x: &SeriesData) -> Result<SeriesData, Self::Error>;

    /// Fit to the data, then transform it
    fn fit_transform(&mut self, x: &SeriesData) -> Result<SeriesData, Self::Error> {
        self.fit(x)?;
        self.transform(x)
    }

    /// Capability tags describing this transformer
    fn tags(&self) -> TransformTags {
        TransformTags::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use ndarray::Array2;

    /// Adds a constant offset to every observation
    struct Offset(f64);

    impl SeriesTransform for Offset {
        type Error = CoreError;

        fn transform(&self, x: &SeriesData) -> Result<SeriesData, CoreError> {
            match x {
                SeriesData::Series(data) => Ok(SeriesData::Series(data + self.0)),
                SeriesData::Panel(data) => Ok(SeriesData::Panel(data + self.0)),
            }
        }
    }

    #[test]
    fn test_default_tags() {
        let tags = Offset(1.0).tags();
        assert_eq!(tags.accepts, &[Layout::Series]);
        assert!(tags.instancewise);
        assert!(tags.fit_is_empty);
        assert!(tags.requires_backend.is_none());
    }

    #[test]
    fn test_fit_is_noop() {
        let x = SeriesData::Series(Array2::from_elem((10, 2), 1.0));
        let mut t = Offset(2.0);
        let unfitted = t.transform(&x).unwrap();
        let fitted = t.fit_transform(&x).unwrap();
        assert_eq!(unfitted, fitted);
    }

    #[test]
    fn test_transform_offsets_values() {
        let x = SeriesData::Series(Array2::zeros((4, 1)));
        let out = Offset(3.5).transform(&x).unwrap();
        assert_eq!(out.as_series().unwrap()[[2, 0]], 3.5);
    }
}
