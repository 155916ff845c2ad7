//! Round evaluation: one human proposal, at most one agent turn.
//!
//! The flow is a straight line with a single branch, not a loop:
//!
//! 1. Score the human proposal
//! 2. If it reaches the threshold, the human wins and the agent never plays
//! 3. Otherwise draw one agent proposal, score it, and compare it to the threshold

use bakeoff_engine::{Outcome, Proposal, ProposalAgent, Score, WIN_THRESHOLD};
use rand::RngCore;

use crate::reward::ProposalEvaluator;

#[derive(Debug, Clone, Copy)]
pub struct RoundEvaluator<'a> {
    evaluator: &'a dyn ProposalEvaluator,
    agent: &'a dyn ProposalAgent,
    threshold: Score,
}

impl<'a> RoundEvaluator<'a> {
    /// Creates a round evaluator using [`WIN_THRESHOLD`].
    #[must_use]
    pub fn new(evaluator: &'a dyn ProposalEvaluator, agent: &'a dyn ProposalAgent) -> Self {
        Self {
            evaluator,
            agent,
            threshold: WIN_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_threshold(self, threshold: Score) -> Self {
        Self { threshold, ..self }
    }

    #[must_use]
    pub fn threshold(&self) -> Score {
        self.threshold
    }

    /// Plays a single round. `rng` is only used if the agent takes its turn.
    pub fn play(&self, human: &Proposal, rng: &mut dyn RngCore) -> Outcome {
        let human_score = self.evaluator.evaluate(human.vector());
        Outcome::decide(human_score, self.threshold, || {
            let agent_proposal = self.agent.propose(rng);
            let agent_score = self.evaluator.evaluate(&agent_proposal);
            (agent_proposal, agent_score)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use bakeoff_analysis::profile::{FeatureStats, StatsProfile, ZeroVariancePolicy};
    use bakeoff_engine::{Feature, FeatureVector};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::reward::RewardFunction;

    const MEANS: [f64; Feature::LEN] = [0.2, 0.2, 0.2, 0.2, 0.2, 350.0, 20.0];

    #[derive(Debug)]
    struct FixedAgent {
        proposal: FeatureVector,
        calls: AtomicUsize,
    }

    impl FixedAgent {
        fn new(proposal: FeatureVector) -> Self {
            Self {
                proposal,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::Relaxed)
        }
    }

    impl ProposalAgent for FixedAgent {
        fn propose(&self, _rng: &mut dyn RngCore) -> FeatureVector {
            self.calls.fetch_add(1, Ordering::Relaxed);
            self.proposal
        }
    }

    fn profile() -> StatsProfile {
        let stds = [0.05, 0.05, 0.05, 0.05, 0.05, 10.0, 2.0];
        let stats = std::array::from_fn(|i| FeatureStats {
            mean: MEANS[i],
            std_dev: stds[i],
        });
        StatsProfile::new(stats, ZeroVariancePolicy::Reject).unwrap()
    }

    fn proposal(vector: FeatureVector) -> Proposal {
        Proposal::new(vector).unwrap()
    }

    #[test]
    fn test_human_win_skips_agent() {
        let profile = profile();
        let evaluator = RewardFunction::new(&profile);
        let agent = FixedAgent::new(FeatureVector::from_array(MEANS));
        let round = RoundEvaluator::new(&evaluator, &agent);

        let human = proposal(FeatureVector::from_array(MEANS));
        let outcome = round.play(&human, &mut Pcg32::seed_from_u64(0));

        assert!(outcome.is_human_wins());
        assert_eq!(agent.calls(), 0);
    }

    #[test]
    fn test_agent_plays_once_and_wins() {
        let profile = profile();
        let evaluator = RewardFunction::new(&profile);
        let agent = FixedAgent::new(FeatureVector::from_array(MEANS).with(Feature::Time, 20.5));
        let round = RoundEvaluator::new(&evaluator, &agent);

        // Two std off on Temp: -4/7.
        let human = proposal(FeatureVector::from_array(MEANS).with(Feature::Temp, 370.0));
        let outcome = round.play(&human, &mut Pcg32::seed_from_u64(0));

        assert!(outcome.is_agent_wins());
        assert_eq!(agent.calls(), 1);
        // A quarter std off on Time: -(1/16)/7.
        let agent_score = outcome.agent_score().unwrap().value();
        assert!((agent_score + 1.0 / 112.0).abs() < 1e-12);
    }

    #[test]
    fn test_neither_wins() {
        let profile = profile();
        let evaluator = RewardFunction::new(&profile);
        let agent = FixedAgent::new(FeatureVector::from_array(MEANS).with(Feature::Temp, 320.0));
        let round = RoundEvaluator::new(&evaluator, &agent);

        let human = proposal(FeatureVector::from_array(MEANS).with(Feature::Time, 26.0));
        let outcome = round.play(&human, &mut Pcg32::seed_from_u64(0));

        assert!(outcome.is_no_winner());
        assert_eq!(agent.calls(), 1);
        assert!((outcome.human_score().value() + 9.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_custom_threshold() {
        let profile = profile();
        let evaluator = RewardFunction::new(&profile);
        let agent = FixedAgent::new(FeatureVector::from_array(MEANS));
        let round = RoundEvaluator::new(&evaluator, &agent).with_threshold(Score::new(-1.0));
        assert_eq!(round.threshold(), Score::new(-1.0));

        // One std off on six features: about -6/7, a loss at the default threshold.
        let human = proposal(FeatureVector::from_parts(
            [0.25, 0.15, 0.25, 0.15, 0.2],
            360.0,
            22.0,
        ));
        let outcome = round.play(&human, &mut Pcg32::seed_from_u64(0));
        assert!(outcome.is_human_wins());
        assert!(!outcome.human_score().is_win(WIN_THRESHOLD));
        assert_eq!(agent.calls(), 0);
    }
}
