use std::path::PathBuf;

use anyhow::Context;
use bakeoff_ai::seed::AgentSeed;
use bakeoff_analysis::{profile::ZeroVariancePolicy, reference::ReferenceConfig};
use bakeoff_engine::{Score, WIN_THRESHOLD};
use clap::{Parser, Subcommand};
use rand::Rng as _;

use self::{
    interactive::InteractiveArg, play::PlayArg, profile::ProfileArg, sample::SampleArg,
};

mod interactive;
mod play;
mod profile;
mod sample;

const DEFAULT_DATASET: &str = "brownies.csv";

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play one round with the proposal given on the command line
    Play(#[clap(flatten)] PlayArg),
    /// Play rounds interactively, reading proposals from stdin
    Interactive(#[clap(flatten)] InteractiveArg),
    /// Print reference statistics and agent bounds as JSON
    Profile(#[clap(flatten)] ProfileArg),
    /// Draw agent proposals and summarize their scores
    Sample(#[clap(flatten)] SampleArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args
        .mode
        .unwrap_or(Mode::Interactive(InteractiveArg::default()))
    {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Interactive(arg) => interactive::run(&arg)?,
        Mode::Profile(arg) => profile::run(&arg)?,
        Mode::Sample(arg) => sample::run(&arg)?,
    }
    Ok(())
}

/// Where the reference statistics come from.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReferenceArg {
    /// Reference dataset of past trials (CSV, or JSON with a .json extension)
    #[arg(long, default_value = DEFAULT_DATASET)]
    dataset: PathBuf,
    /// How to treat a feature whose reference values never vary (reject or ignore)
    #[arg(long, default_value = "reject")]
    zero_variance: ZeroVariancePolicy,
}

impl Default for ReferenceArg {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET),
            zero_variance: ZeroVariancePolicy::default(),
        }
    }
}

impl ReferenceArg {
    pub(crate) fn load(&self) -> anyhow::Result<ReferenceConfig> {
        let config = ReferenceConfig::open(&self.dataset, self.zero_variance).with_context(|| {
            format!(
                "Failed to load reference dataset: {}",
                self.dataset.display()
            )
        })?;
        tracing::info!(
            dataset = %self.dataset.display(),
            rows = config.rows(),
            zero_variance = %self.zero_variance,
            "reference statistics loaded"
        );
        Ok(config)
    }
}

/// Settings shared by every command that lets the agent play.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RoundArg {
    /// Score at or above which a proposal wins
    #[arg(long, default_value_t = WIN_THRESHOLD.value(), allow_negative_numbers = true)]
    threshold: f64,
    /// Seed for the agent's random draws (32 hex characters); random if omitted
    #[arg(long)]
    seed: Option<AgentSeed>,
}

impl Default for RoundArg {
    fn default() -> Self {
        Self {
            threshold: WIN_THRESHOLD.value(),
            seed: None,
        }
    }
}

impl RoundArg {
    pub(crate) fn threshold(&self) -> Score {
        Score::new(self.threshold)
    }

    pub(crate) fn seed(&self) -> AgentSeed {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        tracing::debug!(%seed, "agent seed");
        seed
    }
}
