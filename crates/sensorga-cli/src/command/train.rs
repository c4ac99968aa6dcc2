use std::{io, path::PathBuf};

use anyhow::Context as _;
use rand::Rng as _;
use sensorga_engine::GaConfig;
use sensorga_training::{GaSeed, driver};

use crate::{report, schema::RunRecord, util};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct TrainArg {
    /// JSON configuration file (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Grid width
    #[arg(long)]
    width: Option<usize>,
    /// Grid height
    #[arg(long)]
    height: Option<usize>,
    /// Number of sensors to place
    #[arg(long)]
    sensors: Option<usize>,
    /// Coverage radius in cells
    #[arg(long)]
    radius: Option<usize>,
    /// Cost weight per sensor
    #[arg(long)]
    alpha: Option<f64>,
    /// Individuals per generation
    #[arg(long)]
    population: Option<usize>,
    /// Number of generations
    #[arg(long)]
    generations: Option<usize>,
    /// Probability of crossover
    #[arg(long)]
    crossover_rate: Option<f64>,
    /// Per-sensor probability of mutation
    #[arg(long)]
    mutation_rate: Option<f64>,
    /// Tournament size for selection
    #[arg(long)]
    tournament_size: Option<usize>,
    /// Random seed (hex); a fresh one is drawn when omitted
    #[arg(long)]
    seed: Option<GaSeed>,
    /// Save the run as JSON to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

impl TrainArg {
    fn build_config(&self) -> anyhow::Result<GaConfig> {
        let mut config = match &self.config {
            Some(path) => util::read_json_file::<GaConfig, _>("config", path)?,
            None => GaConfig::default(),
        };

        let overrides = [
            (self.width, &mut config.width),
            (self.height, &mut config.height),
            (self.sensors, &mut config.num_sensors),
            (self.radius, &mut config.radius),
            (self.population, &mut config.population_size),
            (self.generations, &mut config.generations),
            (self.tournament_size, &mut config.tournament_size),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
        let overrides = [
            (self.alpha, &mut config.alpha),
            (self.crossover_rate, &mut config.crossover_rate),
            (self.mutation_rate, &mut config.mutation_rate),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

pub(crate) fn run(arg: &TrainArg) -> anyhow::Result<()> {
    let config = arg.build_config()?;
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());

    tracing::info!(
        width = config.width,
        height = config.height,
        sensors = config.num_sensors,
        population = config.population_size,
        generations = config.generations,
        %seed,
        "starting run"
    );

    let mut rng = seed.rng();
    let outcome = driver::run(&config, &mut rng)?;
    let record = RunRecord::new(seed, config, outcome);

    tracing::info!(best_fitness = record.best.fitness, "run completed");

    report::write_report(&mut io::stdout().lock(), &record)?;

    if let Some(path) = &arg.output {
        util::save_json(&record, Some(path.as_path()))?;
        tracing::info!(path = %path.display(), "run saved");
    }

    Ok(())
}
