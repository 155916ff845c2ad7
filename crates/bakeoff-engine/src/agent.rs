use std::fmt;

use rand::RngCore;

use crate::FeatureVector;

/// Produces candidate feature vectors for the agent's turn.
///
/// The random source is supplied per call rather than owned by the agent, so a single
/// agent can be shared across threads and each call draws from a generator that no
/// other call mutates. Pass a seeded generator for reproducible proposals.
pub trait ProposalAgent: fmt::Debug + Send + Sync {
    /// Draws one candidate. Calls are independent of each other.
    fn propose(&self, rng: &mut dyn RngCore) -> FeatureVector;
}
