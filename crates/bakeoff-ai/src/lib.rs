//! The stochastic opponent of the bake-off game.
//!
//! The agent does not learn or search. Each turn it draws one random recipe that is
//! guaranteed to be well-formed:
//!
//! - **Composition** ([`composition`]) - The five ingredient ratios come from a
//!   symmetric Dirichlet distribution, so they lie on the simplex by construction.
//! - **Bake parameters** ([`sampling_agent`]) - Temp and Time are uniform over the
//!   ranges observed in the reference data.
//! - **Seeds** ([`seed`]) - A 128-bit seed makes a sequence of turns reproducible.
//!
//! # Example
//!
//! ```
//! use bakeoff_ai::{sampling_agent::SamplingAgent, seed::AgentSeed};
//! use bakeoff_analysis::bounds::{Bounds, FeatureRange};
//! use bakeoff_engine::Feature;
//!
//! let bounds = Bounds::new(
//!     FeatureRange::new(Feature::Temp, 325.0, 375.0).unwrap(),
//!     FeatureRange::new(Feature::Time, 20.0, 30.0).unwrap(),
//! );
//! let agent = SamplingAgent::new(&bounds);
//!
//! let seed: AgentSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
//! let proposal = agent.act_with(&mut seed.rng());
//! assert!((proposal.ingredient_sum() - 1.0).abs() < 1e-9);
//! assert!(bounds.temp().contains(proposal[Feature::Temp]));
//! ```

pub mod composition;
pub mod sampling_agent;
pub mod seed;
