use std::path::PathBuf;

use sensorga_engine::GaConfig;

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ConfigArg {
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ConfigArg) -> anyhow::Result<()> {
    util::save_json(&GaConfig::default(), arg.output.as_deref())
}
