//! Per-feature reference statistics.
//!
//! A [`StatsProfile`] holds the mean and sample standard deviation of every tracked
//! feature. The reward function divides by the standard deviation, so a feature whose
//! reference values never vary needs an explicit [`ZeroVariancePolicy`].

use bakeoff_engine::Feature;
use bakeoff_stats::descriptive::DescriptiveStats;
use serde::{Serialize, Serializer, ser::SerializeMap as _};

use crate::{DataError, dataset::ReferenceDataset};

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum DomainError {
    #[display("{feature} has zero variance in the reference data")]
    ZeroVariance { feature: Feature },
    #[display("{feature} has invalid statistics (mean {mean}, std {std_dev})")]
    InvalidStats {
        feature: Feature,
        mean: f64,
        std_dev: f64,
    },
}

/// How a zero-variance feature is handled.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::FromStr, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ZeroVariancePolicy {
    /// Refuse to build the profile.
    #[default]
    Reject,
    /// Keep the feature but never penalize deviations from its mean.
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureStats {
    pub mean: f64,
    pub std_dev: f64,
}

/// Immutable mean/std pair for each of the seven features.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsProfile {
    stats: [FeatureStats; Feature::LEN],
    policy: ZeroVariancePolicy,
}

impl StatsProfile {
    /// Builds a profile from known statistics, indexed in canonical feature order.
    ///
    /// # Example
    ///
    /// ```
    /// use bakeoff_analysis::profile::{FeatureStats, StatsProfile, ZeroVariancePolicy};
    /// use bakeoff_engine::Feature;
    ///
    /// let stats = std::array::from_fn(|i| FeatureStats { mean: i as f64, std_dev: 1.0 });
    /// let profile = StatsProfile::new(stats, ZeroVariancePolicy::Reject).unwrap();
    /// assert_eq!(profile.get(Feature::Time).mean, 6.0);
    /// ```
    pub fn new(
        stats: [FeatureStats; Feature::LEN],
        policy: ZeroVariancePolicy,
    ) -> Result<Self, DomainError> {
        for feature in Feature::ALL {
            let FeatureStats { mean, std_dev } = stats[feature.index()];
            if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
                return Err(DomainError::InvalidStats {
                    feature,
                    mean,
                    std_dev,
                });
            }
            if std_dev == 0.0 && policy == ZeroVariancePolicy::Reject {
                return Err(DomainError::ZeroVariance { feature });
            }
        }
        Ok(Self { stats, policy })
    }

    /// Computes the mean and sample standard deviation of each feature column.
    pub fn from_dataset(
        dataset: &ReferenceDataset,
        policy: ZeroVariancePolicy,
    ) -> Result<Self, DataError> {
        if dataset.len() < 2 {
            return Err(DataError::InsufficientRows {
                rows: dataset.len(),
            });
        }

        let mut stats = [FeatureStats {
            mean: 0.0,
            std_dev: 0.0,
        }; Feature::LEN];
        for feature in Feature::ALL {
            let column = DescriptiveStats::new(dataset.column(feature)).ok_or(DataError::Empty)?;
            stats[feature.index()] = FeatureStats {
                mean: column.mean,
                std_dev: column.std_dev,
            };
        }
        Ok(Self::new(stats, policy)?)
    }

    #[must_use]
    pub fn get(&self, feature: Feature) -> FeatureStats {
        self.stats[feature.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, FeatureStats)> + '_ {
        Feature::ALL.into_iter().zip(self.stats.iter().copied())
    }

    #[must_use]
    pub fn policy(&self) -> ZeroVariancePolicy {
        self.policy
    }
}

impl Serialize for StatsProfile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Feature::LEN))?;
        for (feature, stats) in self.iter() {
            map.serialize_entry(feature.name(), &stats)?;
        }
        map.end()
    }
}
