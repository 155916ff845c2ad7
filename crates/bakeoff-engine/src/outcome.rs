use std::fmt;

use serde::Serialize;

use crate::{FeatureVector, Score};

/// Result of a single round.
///
/// The agent only plays when the human misses the threshold, so the agent fields are
/// absent from [`Outcome::HumanWins`].
#[derive(Debug, Clone, PartialEq, Serialize, derive_more::IsVariant)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    HumanWins {
        human_score: Score,
    },
    AgentWins {
        human_score: Score,
        agent_score: Score,
        agent_proposal: FeatureVector,
    },
    NoWinner {
        human_score: Score,
        agent_score: Score,
        agent_proposal: FeatureVector,
    },
}

/// The side that won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Human,
    Agent,
}

impl Outcome {
    /// Decides the round from the human score.
    ///
    /// `agent_turn` is called at most once, and only when `human_score` is below
    /// `threshold`. It returns the agent's proposal and its score.
    ///
    /// # Example
    ///
    /// ```
    /// use bakeoff_engine::{FeatureVector, Outcome, Score, WIN_THRESHOLD};
    ///
    /// let outcome = Outcome::decide(Score::new(-0.05), WIN_THRESHOLD, || unreachable!());
    /// assert!(outcome.is_human_wins());
    /// ```
    pub fn decide<F>(human_score: Score, threshold: Score, agent_turn: F) -> Self
    where
        F: FnOnce() -> (FeatureVector, Score),
    {
        if human_score.is_win(threshold) {
            return Self::HumanWins { human_score };
        }

        let (agent_proposal, agent_score) = agent_turn();
        if agent_score.is_win(threshold) {
            Self::AgentWins {
                human_score,
                agent_score,
                agent_proposal,
            }
        } else {
            Self::NoWinner {
                human_score,
                agent_score,
                agent_proposal,
            }
        }
    }

    #[must_use]
    pub fn human_score(&self) -> Score {
        match self {
            Self::HumanWins { human_score }
            | Self::AgentWins { human_score, .. }
            | Self::NoWinner { human_score, .. } => *human_score,
        }
    }

    #[must_use]
    pub fn agent_score(&self) -> Option<Score> {
        match self {
            Self::HumanWins { .. } => None,
            Self::AgentWins { agent_score, .. } | Self::NoWinner { agent_score, .. } => {
                Some(*agent_score)
            }
        }
    }

    #[must_use]
    pub fn agent_proposal(&self) -> Option<&FeatureVector> {
        match self {
            Self::HumanWins { .. } => None,
            Self::AgentWins { agent_proposal, .. } | Self::NoWinner { agent_proposal, .. } => {
                Some(agent_proposal)
            }
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        match self {
            Self::HumanWins { .. } => Some(Winner::Human),
            Self::AgentWins { .. } => Some(Winner::Agent),
            Self::NoWinner { .. } => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HumanWins { human_score } => write!(f, "You win! Your score: {human_score}"),
            Self::AgentWins { agent_score, .. } => write!(f, "AI wins! Its score: {agent_score}"),
            Self::NoWinner {
                human_score,
                agent_score,
                ..
            } => write!(
                f,
                "Keep trying! Your score: {human_score}, AI score: {agent_score}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::WIN_THRESHOLD;

    fn agent_vector() -> FeatureVector {
        FeatureVector::from_parts([0.1, 0.2, 0.3, 0.2, 0.2], 340.0, 18.0)
    }

    #[test]
    fn test_human_on_threshold_wins_without_agent_turn() {
        let called = Cell::new(false);
        let outcome = Outcome::decide(Score::new(-0.05), WIN_THRESHOLD, || {
            called.set(true);
            (agent_vector(), Score::new(0.0))
        });
        assert!(!called.get());
        assert_eq!(
            outcome,
            Outcome::HumanWins {
                human_score: Score::new(-0.05)
            }
        );
        assert_eq!(outcome.winner(), Some(Winner::Human));
        assert_eq!(outcome.agent_score(), None);
        assert_eq!(outcome.to_string(), "You win! Your score: -0.0500");
    }

    #[test]
    fn test_agent_wins_when_human_misses() {
        let outcome = Outcome::decide(Score::new(-0.06), WIN_THRESHOLD, || {
            (agent_vector(), Score::new(-0.04))
        });
        assert!(outcome.is_agent_wins());
        assert_eq!(outcome.agent_score(), Some(Score::new(-0.04)));
        assert_eq!(outcome.agent_proposal(), Some(&agent_vector()));
        assert_eq!(outcome.to_string(), "AI wins! Its score: -0.0400");
    }

    #[test]
    fn test_no_winner_reports_both_scores() {
        let outcome = Outcome::decide(Score::new(-0.2), WIN_THRESHOLD, || {
            (agent_vector(), Score::new(-0.3))
        });
        assert!(outcome.is_no_winner());
        assert_eq!(outcome.winner(), None);
        assert_eq!(outcome.human_score(), Score::new(-0.2));
        assert_eq!(
            outcome.to_string(),
            "Keep trying! Your score: -0.2000, AI score: -0.3000"
        );
    }

    #[test]
    fn test_serializes_with_result_tag() {
        let outcome = Outcome::HumanWins {
            human_score: Score::new(-0.01),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["result"], "human_wins");
        assert_eq!(json["human_score"], -0.01);
    }
}
