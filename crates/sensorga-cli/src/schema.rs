use chrono::{DateTime, Utc};
use sensorga_engine::{GaConfig, Point};
use sensorga_training::{GaSeed, RunOutcome};
use serde::{Deserialize, Serialize};

/// A finished run as stored on disk by `sensorga train --output`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunRecord {
    pub trained_at: DateTime<Utc>,
    pub seed: GaSeed,
    pub config: GaConfig,
    pub best: BestPlacement,
    pub fitness_history: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BestPlacement {
    pub fitness: f64,
    pub sensors: Vec<Point>,
}

impl RunRecord {
    pub fn new(seed: GaSeed, config: GaConfig, outcome: RunOutcome) -> Self {
        let best = BestPlacement {
            fitness: outcome.best_fitness(),
            sensors: outcome.best.points().to_vec(),
        };
        Self {
            trained_at: Utc::now(),
            seed,
            config,
            best,
            fitness_history: outcome.fitness_history,
        }
    }
}
