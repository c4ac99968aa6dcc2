//! Genetic algorithm that evolves sensor placements.
//!
//! # How a Run Works
//!
//! 1. **Population** - `population_size` individuals, each a list of
//!    `num_sensors` uniformly random grid cells
//! 2. **Evaluation** - Every individual is scored by
//!    [`CoverageFitness`](sensorga_engine::CoverageFitness) (in parallel)
//! 3. **Tracking** - The best individual ever seen is copied aside and its
//!    fitness appended to the history
//! 4. **Selection** - Parents are chosen by tournament selection
//! 5. **Reproduction** - One-point crossover and per-sensor reset mutation
//!    produce the next generation
//! 6. **Repeat** - Exactly `generations` times, no early exit
//!
//! # Architecture
//!
//! ```text
//! driver::run
//!     ↓ owns
//! genetic::Population ──evaluated by──▶ CoverageFitness (sensorga-engine)
//!     ↓ evolved by
//! genetic::PopulationEvolver
//!     ↓ uses
//! placement (random / crossover / mutate)
//! ```
//!
//! # Randomness
//!
//! All random draws go through a single caller-supplied `R: Rng` source.
//! [`GaSeed`] builds a seeded [`Pcg32`](rand_pcg::Pcg32) so a run can be
//! reproduced exactly. Fitness evaluation draws nothing, so running it on
//! several threads does not affect reproducibility.
//!
//! # Example
//!
//! ```
//! use sensorga_engine::GaConfig;
//! use sensorga_training::{GaSeed, driver};
//!
//! let config = GaConfig {
//!     generations: 5,
//!     ..GaConfig::default()
//! };
//! let mut rng = GaSeed::from_u128(7).rng();
//! let outcome = driver::run(&config, &mut rng).unwrap();
//!
//! assert_eq!(outcome.fitness_history.len(), 5);
//! assert!(outcome.fitness_history.is_sorted());
//! ```

pub use self::{
    driver::{GenerationReport, RunOutcome},
    genetic::{Individual, Population, PopulationEvolver},
    seed::GaSeed,
    stats::FitnessStats,
};

use sensorga_engine::ConfigError;

pub mod driver;
pub mod genetic;
pub mod placement;
pub mod seed;
pub mod stats;

/// Errors raised by the genetic algorithm.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GaError {
    /// The configuration was rejected before the first generation.
    #[display("invalid configuration: {_0}")]
    #[from]
    Config(ConfigError),
    /// An individual was compared before being evaluated.
    ///
    /// This indicates a bug in the caller: every individual must be evaluated
    /// before selection or best tracking looks at it.
    #[display("fitness not computed")]
    FitnessNotComputed,
}
