use std::path::Path;

use serde::Serialize;

use crate::{
    DataError,
    bounds::Bounds,
    dataset::ReferenceDataset,
    profile::{StatsProfile, ZeroVariancePolicy},
};

/// Everything the game derives from the reference dataset.
///
/// Built once at startup and never mutated. The reward function and the agent borrow
/// the parts they need from it, so all rounds see the same statistics.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceConfig {
    rows: usize,
    zero_variance_policy: ZeroVariancePolicy,
    profile: StatsProfile,
    bounds: Bounds,
}

impl ReferenceConfig {
    pub fn from_dataset(
        dataset: &ReferenceDataset,
        policy: ZeroVariancePolicy,
    ) -> Result<Self, DataError> {
        Ok(Self {
            rows: dataset.len(),
            zero_variance_policy: policy,
            profile: StatsProfile::from_dataset(dataset, policy)?,
            bounds: Bounds::from_dataset(dataset)?,
        })
    }

    /// Loads a dataset file and derives the configuration from it.
    pub fn open<P>(path: P, policy: ZeroVariancePolicy) -> Result<Self, DataError>
    where
        P: AsRef<Path>,
    {
        let dataset = ReferenceDataset::open(path)?;
        Self::from_dataset(&dataset, policy)
    }

    /// Number of dataset rows the statistics were computed from.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn profile(&self) -> &StatsProfile {
        &self.profile
    }

    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}
