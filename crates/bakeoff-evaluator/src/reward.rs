//! Reward: negative mean squared z-score against the reference profile.
//!
//! ```text
//! score = -(1/7) · Σ ((valueᵢ - meanᵢ) / stdᵢ)²
//! ```
//!
//! Each feature is normalized by its own standard deviation before averaging, so
//! ingredient ratios (around 0..1) and bake parameters (hundreds of degrees, tens of
//! minutes) weigh equally. The score is never positive and reaches `0.0` only when
//! every feature sits exactly on its reference mean.
//!
//! Under [`ZeroVariancePolicy::Ignore`](bakeoff_analysis::profile::ZeroVariancePolicy)
//! a zero-std feature contributes nothing but still counts toward the divisor of 7.

use std::fmt;

use bakeoff_analysis::profile::{FeatureStats, StatsProfile};
use bakeoff_engine::{Feature, FeatureVector, Score};

/// Assigns a score to a candidate feature vector (higher is better).
pub trait ProposalEvaluator: fmt::Debug + Send + Sync {
    fn evaluate(&self, vector: &FeatureVector) -> Score;
}

/// Scores `vector` against `profile`.
///
/// # Example
///
/// ```
/// use bakeoff_analysis::profile::{FeatureStats, StatsProfile, ZeroVariancePolicy};
/// use bakeoff_engine::FeatureVector;
/// use bakeoff_evaluator::reward::reward;
///
/// let means = [0.2, 0.2, 0.2, 0.2, 0.2, 350.0, 20.0];
/// let stds = [0.05, 0.05, 0.05, 0.05, 0.05, 10.0, 2.0];
/// let stats = std::array::from_fn(|i| FeatureStats { mean: means[i], std_dev: stds[i] });
/// let profile = StatsProfile::new(stats, ZeroVariancePolicy::Reject).unwrap();
///
/// let on_mean = FeatureVector::from_array(means);
/// assert_eq!(reward(&on_mean, &profile).value(), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn reward(vector: &FeatureVector, profile: &StatsProfile) -> Score {
    let total = profile
        .iter()
        .map(|(feature, FeatureStats { mean, std_dev })| {
            if std_dev == 0.0 {
                0.0
            } else {
                ((vector[feature] - mean) / std_dev).powi(2)
            }
        })
        .sum::<f64>();
    Score::new(-(total / Feature::LEN as f64))
}

/// [`reward`] bound to a borrowed profile.
#[derive(Debug, Clone, Copy)]
pub struct RewardFunction<'a> {
    profile: &'a StatsProfile,
}

impl<'a> RewardFunction<'a> {
    #[must_use]
    pub const fn new(profile: &'a StatsProfile) -> Self {
        Self { profile }
    }

    #[must_use]
    pub const fn profile(&self) -> &'a StatsProfile {
        self.profile
    }
}

impl ProposalEvaluator for RewardFunction<'_> {
    #[inline]
    fn evaluate(&self, vector: &FeatureVector) -> Score {
        reward(vector, self.profile)
    }
}
