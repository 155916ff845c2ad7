use std::path::PathBuf;

use bakeoff_ai::{sampling_agent::SamplingAgent, seed::AgentSeed};
use bakeoff_analysis::reference::ReferenceConfig;
use bakeoff_engine::{FeatureVector, Score};
use bakeoff_evaluator::reward::{ProposalEvaluator as _, RewardFunction};
use bakeoff_stats::descriptive::DescriptiveStats;
use rand::Rng;
use serde::Serialize;

use super::{ReferenceArg, RoundArg};
use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SampleArg {
    #[clap(flatten)]
    reference: ReferenceArg,
    #[clap(flatten)]
    round: RoundArg,
    /// Number of agent proposals to draw
    #[arg(long, default_value_t = 10)]
    count: usize,
    /// Output JSON file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SampleReport {
    seed: AgentSeed,
    threshold: Score,
    count: usize,
    wins: usize,
    win_rate: f64,
    summary: Option<ScoreSummary>,
    draws: Vec<Draw>,
}

#[derive(Debug, Serialize)]
struct ScoreSummary {
    min: f64,
    max: f64,
    mean: f64,
    median: f64,
    std_dev: f64,
}

impl From<DescriptiveStats> for ScoreSummary {
    fn from(stats: DescriptiveStats) -> Self {
        Self {
            min: stats.min,
            max: stats.max,
            mean: stats.mean,
            median: stats.median,
            std_dev: stats.std_dev,
        }
    }
}

#[derive(Debug, Serialize)]
struct Draw {
    proposal: FeatureVector,
    score: Score,
    wins: bool,
}

pub(crate) fn run(arg: &SampleArg) -> anyhow::Result<()> {
    let config = arg.reference.load()?;
    let seed = arg.round.seed();
    let report = sample(
        &config,
        arg.count,
        arg.round.threshold(),
        seed,
        &mut seed.rng(),
    );
    tracing::info!(
        count = report.count,
        wins = report.wins,
        win_rate = report.win_rate,
        "sampling finished"
    );
    util::save_json(&report, arg.output.as_deref())
}

fn sample<R>(
    config: &ReferenceConfig,
    count: usize,
    threshold: Score,
    seed: AgentSeed,
    rng: &mut R,
) -> SampleReport
where
    R: Rng + ?Sized,
{
    let reward = RewardFunction::new(config.profile());
    let agent = SamplingAgent::new(config.bounds());

    let draws = (0..count)
        .map(|_| {
            let proposal = agent.act_with(rng);
            let score = reward.evaluate(&proposal);
            Draw {
                proposal,
                score,
                wins: score.is_win(threshold),
            }
        })
        .collect::<Vec<_>>();

    let wins = draws.iter().filter(|draw| draw.wins).count();
    #[expect(clippy::cast_precision_loss)]
    let win_rate = if count == 0 {
        0.0
    } else {
        wins as f64 / count as f64
    };
    let summary = DescriptiveStats::new(draws.iter().map(|draw| draw.score.value()))
        .map(ScoreSummary::from);

    SampleReport {
        seed,
        threshold,
        count,
        wins,
        win_rate,
        summary,
        draws,
    }
}

#[cfg(test)]
mod tests {
    use bakeoff_analysis::{dataset::ReferenceDataset, profile::ZeroVariancePolicy};
    use bakeoff_engine::{Feature, WIN_THRESHOLD};

    use super::*;

    const CSV: &str = "\
Sugar,Butter,Chocolate,Flour,Eggs,Temp,Time
0.30,0.20,0.20,0.20,0.10,325,20
0.20,0.30,0.20,0.20,0.10,350,25
0.20,0.20,0.30,0.10,0.20,375,30
0.25,0.25,0.20,0.15,0.15,340,28
";

    fn config() -> ReferenceConfig {
        let dataset = ReferenceDataset::from_csv_str(CSV).unwrap();
        ReferenceConfig::from_dataset(&dataset, ZeroVariancePolicy::Reject).unwrap()
    }

    #[test]
    fn test_report_is_consistent() {
        let config = config();
        let seed = AgentSeed::from_bytes([3; 16]);
        let report = sample(&config, 200, WIN_THRESHOLD, seed, &mut seed.rng());

        assert_eq!(report.count, 200);
        assert_eq!(report.draws.len(), 200);
        assert_eq!(
            report.wins,
            report.draws.iter().filter(|d| d.score.is_win(WIN_THRESHOLD)).count()
        );
        assert!((0.0..=1.0).contains(&report.win_rate));

        let summary = report.summary.unwrap();
        assert!(summary.max <= 0.0);
        assert!(summary.min <= summary.median && summary.median <= summary.max);
        for draw in &report.draws {
            let temp = draw.proposal[Feature::Temp];
            assert!(config.bounds().temp().contains(temp));
        }
    }

    #[test]
    fn test_same_seed_same_report() {
        let config = config();
        let seed = AgentSeed::from_bytes([9; 16]);
        let a = sample(&config, 20, WIN_THRESHOLD, seed, &mut seed.rng());
        let b = sample(&config, 20, WIN_THRESHOLD, seed, &mut seed.rng());
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_zero_count_has_no_summary() {
        let config = config();
        let seed = AgentSeed::from_bytes([0; 16]);
        let report = sample(&config, 0, WIN_THRESHOLD, seed, &mut seed.rng());
        assert_eq!(report.wins, 0);
        assert!(report.summary.is_none());
        assert!(report.draws.is_empty());
    }

    #[test]
    fn test_zero_threshold_is_unreachable_for_random_draws() {
        let config = config();
        let seed = AgentSeed::from_bytes([5; 16]);
        let report = sample(&config, 50, Score::new(0.0), seed, &mut seed.rng());
        assert_eq!(report.wins, 0);
    }
}
