use std::io::{self, Write};

use anyhow::Context;
use bakeoff_ai::{sampling_agent::SamplingAgent, seed::AgentSeed};
use bakeoff_engine::{Feature, FeatureVector, Outcome, Proposal, Score};
use bakeoff_evaluator::{reward::RewardFunction, round_evaluator::RoundEvaluator};
use serde::Serialize;

use super::{ReferenceArg, RoundArg};
use crate::util;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    reference: ReferenceArg,
    #[clap(flatten)]
    round: RoundArg,
    /// Sugar ratio
    #[arg(long, allow_hyphen_values = true)]
    sugar: Option<String>,
    /// Butter ratio
    #[arg(long, allow_hyphen_values = true)]
    butter: Option<String>,
    /// Chocolate ratio
    #[arg(long, allow_hyphen_values = true)]
    chocolate: Option<String>,
    /// Flour ratio
    #[arg(long, allow_hyphen_values = true)]
    flour: Option<String>,
    /// Eggs ratio
    #[arg(long, allow_hyphen_values = true)]
    eggs: Option<String>,
    /// Baking temperature
    #[arg(long, allow_hyphen_values = true)]
    temp: Option<String>,
    /// Baking time
    #[arg(long, allow_hyphen_values = true)]
    time: Option<String>,
    /// Print the round as JSON instead of a message
    #[arg(long)]
    json: bool,
}

impl PlayArg {
    fn field(&self, feature: Feature) -> Option<&str> {
        let value = match feature {
            Feature::Sugar => &self.sugar,
            Feature::Butter => &self.butter,
            Feature::Chocolate => &self.chocolate,
            Feature::Flour => &self.flour,
            Feature::Eggs => &self.eggs,
            Feature::Temp => &self.temp,
            Feature::Time => &self.time,
        };
        value.as_deref()
    }
}

#[derive(Debug, Serialize)]
struct RoundReport<'a> {
    seed: AgentSeed,
    threshold: Score,
    proposal: &'a FeatureVector,
    outcome: &'a Outcome,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let proposal = Proposal::from_form(|feature| arg.field(feature)).inspect_err(|e| {
        tracing::warn!(error = %e, "proposal rejected");
    })?;

    let config = arg.reference.load()?;
    let reward = RewardFunction::new(config.profile());
    let agent = SamplingAgent::new(config.bounds());
    let evaluator = RoundEvaluator::new(&reward, &agent).with_threshold(arg.round.threshold());

    let seed = arg.round.seed();
    let outcome = evaluator.play(&proposal, &mut seed.rng());
    tracing::debug!(winner = ?outcome.winner(), human_score = %outcome.human_score(), "round finished");

    if arg.json {
        let report = RoundReport {
            seed,
            threshold: evaluator.threshold(),
            proposal: proposal.vector(),
            outcome: &outcome,
        };
        util::save_json(&report, None)?;
    } else {
        let mut stdout = io::stdout().lock();
        print_outcome(&mut stdout, &outcome).context("Failed to write to stdout")?;
    }
    Ok(())
}

/// Writes the round message, followed by the agent's proposal when it played.
pub(crate) fn print_outcome<W>(writer: &mut W, outcome: &Outcome) -> io::Result<()>
where
    W: Write,
{
    writeln!(writer, "{outcome}")?;
    if let Some(proposal) = outcome.agent_proposal() {
        writeln!(writer, "AI proposal:")?;
        for (feature, value) in proposal.iter() {
            writeln!(writer, "  {feature:>9}: {value:.4}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup_matches_flags() {
        let arg = PlayArg {
            sugar: Some("0.2".to_owned()),
            temp: Some(" 350 ".to_owned()),
            ..PlayArg::default()
        };
        assert_eq!(arg.field(Feature::Sugar), Some("0.2"));
        assert_eq!(arg.field(Feature::Temp), Some(" 350 "));
        assert_eq!(arg.field(Feature::Eggs), None);
    }

    #[test]
    fn test_print_human_win_has_no_agent_section() {
        let outcome = Outcome::HumanWins {
            human_score: Score::new(-0.01),
        };
        let mut out = Vec::new();
        print_outcome(&mut out, &outcome).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "You win! Your score: -0.0100\n");
    }

    #[test]
    fn test_print_agent_proposal() {
        let outcome = Outcome::AgentWins {
            human_score: Score::new(-2.0),
            agent_score: Score::new(-0.03),
            agent_proposal: FeatureVector::from_parts([0.2; 5], 350.0, 30.0),
        };
        let mut out = Vec::new();
        print_outcome(&mut out, &outcome).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("AI wins! Its score: -0.0300\nAI proposal:\n"));
        assert!(text.contains("      Temp: 350.0000\n"));
        assert_eq!(text.lines().count(), 2 + Feature::LEN);
    }
}
