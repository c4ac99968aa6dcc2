//! Problem model for sensor placement: configuration, grid coverage, fitness
//! scoring and the coverage map renderer.
//!
//! Nothing in this crate draws random numbers. The genetic algorithm that
//! searches over placements lives in `sensorga-training`.
//!
//! # Example
//!
//! ```
//! use sensorga_engine::{CoverageFitness, GaConfig, Point};
//!
//! let config = GaConfig::default();
//! let fitness = CoverageFitness::from_config(&config);
//!
//! // An unclipped disk of radius 3 covers 37 cells, minus 5.0 for one sensor.
//! let score = fitness.evaluate(&[Point::new(5, 5)]);
//! assert_eq!(score, 32.0);
//! ```

pub use self::{
    config::GaConfig,
    fitness::CoverageFitness,
    geometry::{CoverageGrid, Point, coverage},
    render::{CoverageMap, MapCell},
};

pub mod config;
pub mod fitness;
pub mod geometry;
pub mod render;

/// Reasons a [`GaConfig`] is rejected before a run starts.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("`{field}` must be positive")]
    NonPositive { field: &'static str },
    #[display("`num_sensors` must be at least 2 for one-point crossover, got {num_sensors}")]
    TooFewSensors { num_sensors: usize },
    #[display(
        "`tournament_size` ({tournament_size}) must not exceed `population_size` ({population_size})"
    )]
    TournamentTooLarge {
        tournament_size: usize,
        population_size: usize,
    },
    #[display("`{field}` must be a probability in [0, 1], got {value}")]
    RateOutOfRange { field: &'static str, value: f64 },
    #[display("`alpha` must be finite and non-negative, got {alpha}")]
    InvalidAlpha { alpha: f64 },
}
