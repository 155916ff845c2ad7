use std::{
    fmt,
    io::{self, BufRead, Write},
};

use anyhow::Context;
use bakeoff_ai::sampling_agent::SamplingAgent;
use bakeoff_engine::{Feature, Outcome, Proposal, Winner};
use bakeoff_evaluator::{reward::RewardFunction, round_evaluator::RoundEvaluator};
use rand::RngCore;

use super::{ReferenceArg, RoundArg, play};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct InteractiveArg {
    #[clap(flatten)]
    reference: ReferenceArg,
    #[clap(flatten)]
    round: RoundArg,
}

pub(crate) fn run(arg: &InteractiveArg) -> anyhow::Result<()> {
    let config = arg.reference.load()?;
    let reward = RewardFunction::new(config.profile());
    let agent = SamplingAgent::new(config.bounds());
    let evaluator = RoundEvaluator::new(&reward, &agent).with_threshold(arg.round.threshold());
    let mut rng = arg.round.seed().rng();

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let tally = play_session(&evaluator, &mut rng, &mut input, &mut output)
        .context("Failed to run interactive session")?;

    tracing::info!(
        rounds = tally.rounds,
        human_wins = tally.human_wins,
        agent_wins = tally.agent_wins,
        rejected = tally.rejected,
        "session finished"
    );
    Ok(())
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    rounds: usize,
    human_wins: usize,
    agent_wins: usize,
    rejected: usize,
}

impl Tally {
    fn record(&mut self, outcome: &Outcome) {
        self.rounds += 1;
        match outcome.winner() {
            Some(Winner::Human) => self.human_wins += 1,
            Some(Winner::Agent) => self.agent_wins += 1,
            None => {}
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rounds played: {}, you won: {}, AI won: {}, rejected proposals: {}",
            self.rounds, self.human_wins, self.agent_wins, self.rejected
        )
    }
}

/// Plays independent rounds until the input ends or the player types `q`.
fn play_session<R, W>(
    evaluator: &RoundEvaluator<'_>,
    rng: &mut dyn RngCore,
    input: &mut R,
    output: &mut W,
) -> io::Result<Tally>
where
    R: BufRead,
    W: Write,
{
    let mut tally = Tally::default();
    writeln!(
        output,
        "Propose ingredient ratios (summing to 1), a baking temperature and a baking time. Type 'q' to quit."
    )?;

    loop {
        writeln!(output)?;
        let Some(fields) = read_fields(input, output)? else {
            break;
        };
        match Proposal::from_form(|feature| fields[feature.index()].as_deref()) {
            Ok(proposal) => {
                let outcome = evaluator.play(&proposal, rng);
                play::print_outcome(output, &outcome)?;
                tally.record(&outcome);
            }
            Err(e) => {
                tracing::warn!(error = %e, "proposal rejected");
                writeln!(output, "Error: {e}")?;
                tally.rejected += 1;
            }
        }
    }

    writeln!(output)?;
    writeln!(output, "{tally}")?;
    Ok(tally)
}

/// Prompts for every feature in turn. Returns `None` when the player quits.
///
/// An empty answer is treated as a missing field.
fn read_fields<R, W>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<[Option<String>; Feature::LEN]>>
where
    R: BufRead,
    W: Write,
{
    let mut fields: [Option<String>; Feature::LEN] = Default::default();
    let mut line = String::new();
    for feature in Feature::ALL {
        write!(output, "{feature:>9}: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim();
        if answer.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        fields[feature.index()] = (!answer.is_empty()).then(|| answer.to_owned());
    }
    Ok(Some(fields))
}
