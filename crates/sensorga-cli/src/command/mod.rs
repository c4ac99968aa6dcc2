use clap::{Parser, Subcommand};
use tracing::Level;

use self::{config::ConfigArg, render::RenderArg, train::TrainArg, view::ViewArg};

mod config;
mod render;
mod train;
mod view;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log per-generation statistics
    #[arg(short, long, global = true)]
    verbose: bool,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Evolve a sensor placement with the genetic algorithm
    Train(#[clap(flatten)] TrainArg),
    /// Print the report of a saved run
    Render(#[clap(flatten)] RenderArg),
    /// Browse a saved run in the terminal UI
    View(#[clap(flatten)] ViewArg),
    /// Write the default configuration as JSON
    Config(#[clap(flatten)] ConfigArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.verbose);
    match args.mode.unwrap_or(Mode::Train(TrainArg::default())) {
        Mode::Train(arg) => train::run(&arg)?,
        Mode::Render(arg) => render::run(&arg)?,
        Mode::View(arg) => view::run(&arg)?,
        Mode::Config(arg) => config::run(&arg)?,
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
