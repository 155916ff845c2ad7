//! Observed ranges of the bake parameters.
//!
//! The agent draws Temp and Time uniformly within the range seen in the reference
//! data, so both ranges are checked once here rather than on every draw.

use bakeoff_engine::Feature;
use bakeoff_stats::descriptive::DescriptiveStats;
use serde::Serialize;

use crate::{DataError, dataset::ReferenceDataset};

/// Closed interval `[min, max]` with finite ends and `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureRange {
    pub min: f64,
    pub max: f64,
}

impl FeatureRange {
    /// Validates a range for `feature`.
    ///
    /// A single-point range (`min == max`) is allowed.
    pub fn new(feature: Feature, min: f64, max: f64) -> Result<Self, DataError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(DataError::DegenerateBounds { feature, min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Sampling ranges for the two bake parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    #[serde(rename = "Temp")]
    temp: FeatureRange,
    #[serde(rename = "Time")]
    time: FeatureRange,
}

impl Bounds {
    #[must_use]
    pub const fn new(temp: FeatureRange, time: FeatureRange) -> Self {
        Self { temp, time }
    }

    /// Takes the observed min/max of Temp and Time.
    pub fn from_dataset(dataset: &ReferenceDataset) -> Result<Self, DataError> {
        let range = |feature: Feature| {
            let stats = DescriptiveStats::new(dataset.column(feature)).ok_or(DataError::Empty)?;
            FeatureRange::new(feature, stats.min, stats.max)
        };
        Ok(Self::new(range(Feature::Temp)?, range(Feature::Time)?))
    }

    #[must_use]
    pub const fn temp(&self) -> &FeatureRange {
        &self.temp
    }

    #[must_use]
    pub const fn time(&self) -> &FeatureRange {
        &self.time
    }

    /// Returns the range of `feature`, or `None` for ingredient features.
    #[must_use]
    pub const fn get(&self, feature: Feature) -> Option<&FeatureRange> {
        match feature {
            Feature::Temp => Some(&self.temp),
            Feature::Time => Some(&self.time),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use bakeoff_engine::FeatureVector;

    use super::*;

    #[test]
    fn test_from_dataset_takes_observed_extremes() {
        let dataset = ReferenceDataset::from_rows(vec![
            FeatureVector::from_parts([0.2; 5], 350.0, 28.0),
            FeatureVector::from_parts([0.2; 5], 325.0, 35.0),
            FeatureVector::from_parts([0.2; 5], 400.0, 18.0),
        ])
        .unwrap();
        let bounds = Bounds::from_dataset(&dataset).unwrap();
        assert_eq!(
            *bounds.temp(),
            FeatureRange {
                min: 325.0,
                max: 400.0
            }
        );
        assert_eq!(
            bounds.get(Feature::Time),
            Some(&FeatureRange {
                min: 18.0,
                max: 35.0
            })
        );
        assert_eq!(bounds.get(Feature::Sugar), None);
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let err = FeatureRange::new(Feature::Temp, 400.0, 300.0).unwrap_err();
        assert!(matches!(
            err,
            DataError::DegenerateBounds {
                feature: Feature::Temp,
                ..
            }
        ));
        assert_eq!(err.to_string(), "invalid Temp range: min 400, max 300");
    }

    #[test]
    fn test_non_finite_range_is_rejected() {
        assert!(FeatureRange::new(Feature::Time, f64::NEG_INFINITY, 30.0).is_err());
        assert!(FeatureRange::new(Feature::Time, 20.0, f64::NAN).is_err());
    }

    #[test]
    fn test_single_point_range_is_inclusive() {
        let range = FeatureRange::new(Feature::Time, 25.0, 25.0).unwrap();
        assert!(range.contains(25.0));
        assert!(!range.contains(25.000_001));
    }

    #[test]
    fn test_serializes_with_column_names() {
        let bounds = Bounds::new(
            FeatureRange::new(Feature::Temp, 325.0, 375.0).unwrap(),
            FeatureRange::new(Feature::Time, 20.0, 30.0).unwrap(),
        );
        let json = serde_json::to_value(bounds).unwrap();
        assert_eq!(json["Temp"]["min"], 325.0);
        assert_eq!(json["Time"]["max"], 30.0);
    }
}
