//! Scoring of proposals and evaluation of whole rounds.
//!
//! Two levels, mirroring how a round is played:
//!
//! 1. **Proposal Evaluation** ([`reward`]) - Scores a single feature vector against the
//!    reference [`StatsProfile`](bakeoff_analysis::profile::StatsProfile).
//! 2. **Round Evaluation** ([`round_evaluator`]) - Scores the human, lets the agent
//!    play if the human missed the threshold, and decides the [`Outcome`](bakeoff_engine::Outcome).
//!
//! ```text
//! Round Evaluation (who won?)
//!     ↓ uses
//! Proposal Evaluation (how close is this vector to the reference?)
//! ```

pub mod reward;
pub mod round_evaluator;
