use std::fmt;

use serde::{Deserialize, Serialize};

/// Score at or above which a proposal wins the round.
pub const WIN_THRESHOLD: Score = Score::new(-0.05);

/// Reward assigned to a proposal.
///
/// More negative is worse; `0.0` is a perfect match to the reference means.
///
/// `Display` prints four decimal places unless the formatter requests another precision.
///
/// ```
/// use bakeoff_engine::Score;
///
/// let score = Score::new(-0.04);
/// assert_eq!(score.to_string(), "-0.0400");
/// assert_eq!(format!("{score:.2}"), "-0.04");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns `true` if this score reaches `threshold` (inclusive).
    #[must_use]
    pub fn is_win(self, threshold: Self) -> bool {
        self.0 >= threshold.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        write!(f, "{:.*}", precision, self.0)
    }
}
