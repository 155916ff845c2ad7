//! Core domain types for the brownie bake-off game.
//!
//! A round pits a human proposal against a stochastic agent. Both proposals are
//! [`FeatureVector`]s over the seven tracked recipe [`Feature`]s, scored elsewhere
//! against reference statistics. This crate defines the shared vocabulary:
//!
//! - [`feature`] - The seven features and the fixed-order vector over them
//! - [`score`] - The scalar reward and the win threshold
//! - [`proposal`] - Boundary validation of human input
//! - [`outcome`] - The three-way decision of a single round
//! - [`agent`] - The seam through which any proposal-generating agent plugs in

pub use self::{
    agent::ProposalAgent,
    feature::{Feature, FeatureVector},
    outcome::{Outcome, Winner},
    proposal::{INGREDIENT_SUM_TOLERANCE, Proposal, ValidationError},
    score::{Score, WIN_THRESHOLD},
};

pub mod agent;
pub mod feature;
pub mod outcome;
pub mod proposal;
pub mod score;
