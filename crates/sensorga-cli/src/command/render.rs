use std::{io, path::PathBuf};

use crate::{report, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RenderArg {
    /// Path to a run file written by `train --output`
    run_file: PathBuf,
}

pub(crate) fn run(arg: &RenderArg) -> anyhow::Result<()> {
    let RenderArg { run_file } = arg;
    let record = util::read_run_file(run_file)?;
    report::write_report(&mut io::stdout().lock(), &record)?;
    Ok(())
}
