use std::{io, path::PathBuf};

use crossterm::event;

use self::screen::RunViewerScreen;
use crate::util;

mod screen;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ViewArg {
    /// Path to a run file written by `train --output`
    run_file: PathBuf,
}

pub(crate) fn run(arg: &ViewArg) -> anyhow::Result<()> {
    let ViewArg { run_file } = arg;

    tracing::info!(path = %run_file.display(), "loading run");
    let record = util::read_run_file(run_file)?;

    let mut screen = RunViewerScreen::new(run_file.clone(), record);
    ratatui::run(|terminal| -> io::Result<()> {
        while !screen.should_exit() {
            terminal.draw(|frame| screen.draw(frame))?;
            screen.handle_event(&event::read()?);
        }
        Ok(())
    })?;

    Ok(())
}
