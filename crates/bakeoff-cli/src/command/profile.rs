use std::path::PathBuf;

use super::ReferenceArg;
use crate::util;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ProfileArg {
    #[clap(flatten)]
    reference: ReferenceArg,
    /// Output JSON file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ProfileArg) -> anyhow::Result<()> {
    let config = arg.reference.load()?;
    for (feature, stats) in config.profile().iter() {
        tracing::debug!(%feature, mean = stats.mean, std_dev = stats.std_dev, "feature statistics");
    }
    util::save_json(&config, arg.output.as_deref())
}
