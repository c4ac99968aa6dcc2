use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Parameters of one optimization run.
///
/// Problem parameters describe the building and the sensors; GA parameters
/// control the search. A config is immutable for the duration of a run and
/// must pass [`GaConfig::validate`] before the first generation.
///
/// Fields missing from a JSON document fall back to [`GaConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GaConfig {
    /// Grid width (x axis), in cells.
    pub width: usize,
    /// Grid height (y axis), in cells.
    pub height: usize,
    /// Number of sensors in every individual.
    pub num_sensors: usize,
    /// Coverage radius of a sensor, in cells.
    pub radius: usize,
    /// Cost weight per sensor (0 ignores cost).
    pub alpha: f64,
    /// Individuals per generation.
    pub population_size: usize,
    /// Number of generations to evolve.
    pub generations: usize,
    /// Probability that a pair of parents is recombined.
    pub crossover_rate: f64,
    /// Per-sensor probability of being moved to a random cell.
    pub mutation_rate: f64,
    /// Individuals sampled per tournament.
    pub tournament_size: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 10,
            num_sensors: 8,
            radius: 3,
            alpha: 5.0,
            population_size: 40,
            generations: 50,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            tournament_size: 3,
        }
    }
}

impl GaConfig {
    /// Checks every parameter, reporting the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let counts = [
            ("width", self.width),
            ("height", self.height),
            ("num_sensors", self.num_sensors),
            ("radius", self.radius),
            ("population_size", self.population_size),
            ("generations", self.generations),
            ("tournament_size", self.tournament_size),
        ];
        if let Some((field, _)) = counts.into_iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::NonPositive { field });
        }

        if self.num_sensors < 2 {
            return Err(ConfigError::TooFewSensors {
                num_sensors: self.num_sensors,
            });
        }

        if self.tournament_size > self.population_size {
            return Err(ConfigError::TournamentTooLarge {
                tournament_size: self.tournament_size,
                population_size: self.population_size,
            });
        }

        for (field, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RateOutOfRange { field, value });
            }
        }

        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(ConfigError::InvalidAlpha { alpha: self.alpha });
        }

        Ok(())
    }

    /// Number of cells in the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}
