//! The generational loop.
//!
//! [`run`] validates the configuration, builds a random population and then,
//! for each of exactly `generations` generations:
//!
//! 1. evaluates every individual (parallel, with a barrier before step 2),
//! 2. finds the generation's best individual (first maximum wins ties),
//! 3. replaces the best-overall copy only if the generation's best is
//!    *strictly* better,
//! 4. appends the best-overall fitness to the history,
//! 5. breeds the next population, except after the final generation.
//!
//! Because of the strict comparison in step 3 the history never decreases.

use rand::Rng;
use sensorga_engine::{CoverageFitness, GaConfig};

use crate::{
    GaError,
    genetic::{Individual, Population, PopulationEvolver},
    stats::FitnessStats,
};

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Deep copy of the fittest individual seen in any generation.
    ///
    /// Always evaluated.
    pub best: Individual,
    /// Best-so-far fitness after each generation, one entry per generation.
    pub fitness_history: Vec<f64>,
}

impl RunOutcome {
    /// Fitness of [`Self::best`].
    #[must_use]
    pub fn best_fitness(&self) -> f64 {
        self.best.fitness().unwrap_or(f64::NEG_INFINITY)
    }
}

/// Snapshot handed to the observer after each generation is evaluated.
#[derive(Debug)]
pub struct GenerationReport<'a> {
    pub generation: usize,
    /// The evaluated population of this generation.
    pub population: &'a Population,
    /// Fitness of this generation's best individual.
    pub generation_best: f64,
    /// Best-overall fitness after this generation.
    pub best_overall: f64,
    /// Whether this generation replaced the best-overall individual.
    pub improved: bool,
    pub stats: FitnessStats,
}

/// Runs the genetic algorithm with `config`, drawing all randomness from
/// `rng`.
///
/// # Errors
///
/// Returns [`GaError::Config`] if the configuration is invalid; nothing is
/// evaluated in that case.
pub fn run<R>(config: &GaConfig, rng: &mut R) -> Result<RunOutcome, GaError>
where
    R: Rng + ?Sized,
{
    run_with_observer(config, rng, |_| {})
}

/// Like [`run`], calling `observer` once per generation after evaluation and
/// best tracking.
pub fn run_with_observer<R, F>(
    config: &GaConfig,
    rng: &mut R,
    mut observer: F,
) -> Result<RunOutcome, GaError>
where
    R: Rng + ?Sized,
    F: FnMut(&GenerationReport<'_>),
{
    config.validate()?;

    let fitness = CoverageFitness::from_config(config);
    let evolver = PopulationEvolver::from_config(config);

    let mut population = Population::random(config, rng);
    let mut best_overall: Option<Individual> = None;
    let mut fitness_history = Vec::with_capacity(config.generations);

    for generation in 0..config.generations {
        population.evaluate_fitness(&fitness);

        let generation_best = population.best_individual()?;
        let generation_best_fitness = generation_best.evaluated_fitness()?;
        let previous_best = best_overall
            .as_ref()
            .map(Individual::evaluated_fitness)
            .transpose()?;
        let improved = previous_best.is_none_or(|best| generation_best_fitness > best);
        if improved {
            best_overall = Some(generation_best.clone());
        }
        let best_overall_fitness =
            previous_best.map_or(generation_best_fitness, |best| best.max(generation_best_fitness));
        fitness_history.push(best_overall_fitness);

        let stats = population
            .compute_fitness_stats()?
            .ok_or(GaError::FitnessNotComputed)?;
        tracing::info!("Generation {generation}: best fitness = {best_overall_fitness}");
        tracing::debug!(
            generation,
            min = stats.min,
            max = stats.max,
            mean = stats.mean,
            std_dev = stats.std_dev,
            improved,
            "fitness stats"
        );

        observer(&GenerationReport {
            generation,
            population: &population,
            generation_best: generation_best_fitness,
            best_overall: best_overall_fitness,
            improved,
            stats,
        });

        if generation + 1 < config.generations {
            population = evolver.evolve(&population, rng)?;
        }
    }

    let best = best_overall.ok_or(GaError::FitnessNotComputed)?;
    Ok(RunOutcome {
        best,
        fitness_history,
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;
    use sensorga_engine::ConfigError;

    use super::*;

    fn small_config() -> GaConfig {
        GaConfig {
            population_size: 12,
            generations: 15,
            ..GaConfig::default()
        }
    }

    #[test]
    fn test_history_has_one_entry_per_generation() {
        let config = small_config();
        let mut rng = Pcg32::seed_from_u64(100);
        let outcome = run(&config, &mut rng).unwrap();
        assert_eq!(outcome.fitness_history.len(), config.generations);
        assert!(outcome.fitness_history.is_sorted());
        assert_eq!(outcome.best.points().len(), config.num_sensors);
    }

    #[test]
    fn test_invalid_config_fails_before_running() {
        let config = GaConfig {
            population_size: 1,
            tournament_size: 2,
            ..GaConfig::default()
        };
        let mut rng = Pcg32::seed_from_u64(101);
        let mut calls = 0;
        let result = run_with_observer(&config, &mut rng, |_| calls += 1);
        assert_eq!(
            result,
            Err(GaError::Config(ConfigError::TournamentTooLarge {
                tournament_size: 2,
                population_size: 1,
            }))
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_best_matches_brute_force_tracker() {
        let config = small_config();
        let mut rng = Pcg32::seed_from_u64(102);
        let mut seen_max = f64::NEG_INFINITY;
        let mut generations = Vec::new();
        let outcome = run_with_observer(&config, &mut rng, |report| {
            for ind in report.population.individuals() {
                seen_max = seen_max.max(ind.fitness().unwrap());
            }
            assert!((report.best_overall - seen_max).abs() < f64::EPSILON);
            assert!(report.generation_best <= report.best_overall);
            generations.push(report.generation);
        })
        .unwrap();

        let history_max = outcome
            .fitness_history
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        assert!((outcome.best_fitness() - history_max).abs() < f64::EPSILON);
        assert!((outcome.best_fitness() - seen_max).abs() < f64::EPSILON);
        assert_eq!(generations, (0..config.generations).collect::<Vec<_>>());

        // The stored copy still scores what it claims.
        let fitness = CoverageFitness::from_config(&config);
        let rescored = fitness.evaluate(outcome.best.points());
        assert!((outcome.best_fitness() - rescored).abs() < f64::EPSILON);
    }

    #[test]
    fn test_same_seed_reproduces_run() {
        let config = small_config();
        let a = run(&config, &mut Pcg32::seed_from_u64(103)).unwrap();
        let b = run(&config, &mut Pcg32::seed_from_u64(103)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_without_variation_history_is_flat() {
        let config = GaConfig {
            crossover_rate: 0.0,
            mutation_rate: 0.0,
            ..small_config()
        };
        let mut rng = Pcg32::seed_from_u64(104);
        let outcome = run(&config, &mut rng).unwrap();
        let first = outcome.fitness_history[0];
        assert!(
            outcome
                .fitness_history
                .iter()
                .all(|f| (f - first).abs() < f64::EPSILON),
            "history should plateau at generation 0: {:?}",
            outcome.fitness_history
        );
    }

    #[test]
    fn test_single_generation() {
        let config = GaConfig {
            generations: 1,
            ..small_config()
        };
        let mut rng = Pcg32::seed_from_u64(105);
        let outcome = run(&config, &mut rng).unwrap();
        assert_eq!(outcome.fitness_history.len(), 1);
        assert!((outcome.fitness_history[0] - outcome.best_fitness()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_improved_flag_matches_strict_increase() {
        let config = small_config();
        let mut rng = Pcg32::seed_from_u64(106);
        let mut previous: Option<f64> = None;
        run_with_observer(&config, &mut rng, |report| {
            let expected = previous.is_none_or(|p| report.generation_best > p);
            assert_eq!(report.improved, expected);
            previous = Some(report.best_overall);
        })
        .unwrap();
    }
}
