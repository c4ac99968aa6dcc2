//! Individuals, populations and the generational evolution step.
//!
//! # Genetic Operators
//!
//! ## Tournament Selection
//!
//! Draw `tournament_size` members uniformly *with replacement* and keep the
//! fittest. Ties go to the member drawn first, so a seeded run always picks
//! the same parent.
//!
//! ## One-Point Crossover
//!
//! With probability `crossover_rate`, cut both parents at the same interior
//! index and swap tails; otherwise copy them. See
//! [`placement::crossover`](crate::placement::crossover).
//!
//! ## Reset Mutation
//!
//! Each sensor is independently moved to a fresh uniform cell with
//! probability `mutation_rate`.
//!
//! # Parallelization
//!
//! [`Population::evaluate_fitness`] splits the population into one chunk per
//! available core and scores the chunks on scoped threads. Each thread writes
//! only the fitness of its own individuals, and the call returns only after
//! every thread has finished.

use std::{num::NonZeroUsize, thread};

use rand::Rng;
use sensorga_engine::{CoverageFitness, GaConfig, Point};

use crate::{GaError, placement, stats::FitnessStats};

/// A candidate sensor placement and its cached fitness.
///
/// Fitness is `None` until [`Individual::evaluate`] runs, and is reset to
/// `None` by every operation that changes the points.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    points: Vec<Point>,
    fitness: Option<f64>,
}

impl Individual {
    /// Creates an unevaluated individual.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            fitness: None,
        }
    }

    /// Creates an unevaluated individual with `num_sensors` uniform positions.
    pub fn random<R>(rng: &mut R, config: &GaConfig) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::new(placement::random(
            rng,
            config.width,
            config.height,
            config.num_sensors,
        ))
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Cached fitness, if evaluated.
    #[must_use]
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Cached fitness, or [`GaError::FitnessNotComputed`].
    pub fn evaluated_fitness(&self) -> Result<f64, GaError> {
        self.fitness.ok_or(GaError::FitnessNotComputed)
    }

    /// Scores the individual and caches the result.
    pub fn evaluate(&mut self, fitness: &CoverageFitness) -> f64 {
        let value = fitness.evaluate(&self.points);
        self.fitness = Some(value);
        value
    }

    /// Produces two unevaluated children by one-point crossover.
    pub fn crossover<R>(p1: &Self, p2: &Self, rate: f64, rng: &mut R) -> (Self, Self)
    where
        R: Rng + ?Sized,
    {
        let (c1, c2) = placement::crossover(&p1.points, &p2.points, rate, rng);
        (Self::new(c1), Self::new(c2))
    }

    /// Applies reset mutation in place and invalidates the cached fitness.
    pub fn mutate<R>(&mut self, rate: f64, width: usize, height: usize, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        placement::mutate(&mut self.points, rate, width, height, rng);
        self.fitness = None;
    }
}

/// The individuals of one generation, in creation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    #[must_use]
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Creates `population_size` random individuals.
    pub fn random<R>(config: &GaConfig, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let individuals = (0..config.population_size)
            .map(|_| Individual::random(rng, config))
            .collect();
        Self { individuals }
    }

    #[must_use]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Evaluates every individual, using one scoped thread per chunk.
    ///
    /// Order of individuals is preserved.
    pub fn evaluate_fitness(&mut self, fitness: &CoverageFitness) {
        let workers = thread::available_parallelism().map_or(1, NonZeroUsize::get);
        let chunk_size = self.individuals.len().div_ceil(workers).max(1);
        thread::scope(|s| {
            for chunk in self.individuals.chunks_mut(chunk_size) {
                s.spawn(move || {
                    for ind in chunk {
                        ind.evaluate(fitness);
                    }
                });
            }
        });
    }

    /// Returns the fittest individual; ties go to the earliest one.
    ///
    /// Fails if any individual has not been evaluated.
    pub fn best_individual(&self) -> Result<&Individual, GaError> {
        first_max(self.individuals.iter())
    }

    /// Summary of the evaluated fitness values, `None` if the population is
    /// empty.
    pub fn compute_fitness_stats(&self) -> Result<Option<FitnessStats>, GaError> {
        let values = self
            .individuals
            .iter()
            .map(Individual::evaluated_fitness)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FitnessStats::new(values))
    }
}

/// Controls how one generation is turned into the next.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationEvolver {
    /// Individuals sampled per tournament
    pub tournament_size: usize,
    /// Probability of recombining a pair of parents
    pub crossover_rate: f64,
    /// Per-sensor probability of a reset
    pub mutation_rate: f64,
    /// Grid width for mutated positions
    pub width: usize,
    /// Grid height for mutated positions
    pub height: usize,
}

impl PopulationEvolver {
    #[must_use]
    pub fn from_config(config: &GaConfig) -> Self {
        Self {
            tournament_size: config.tournament_size,
            crossover_rate: config.crossover_rate,
            mutation_rate: config.mutation_rate,
            width: config.width,
            height: config.height,
        }
    }

    /// Builds the next generation, of the same size as `population`.
    ///
    /// Pairs of parents are chosen by tournament, recombined and both children
    /// mutated. When the target size is odd, the second child of the final
    /// pair is dropped. Offspring are unevaluated.
    ///
    /// Fails if `population` contains unevaluated individuals.
    pub fn evolve<R>(&self, population: &Population, rng: &mut R) -> Result<Population, GaError>
    where
        R: Rng + ?Sized,
    {
        let target = population.len();
        let mut next_individuals = Vec::with_capacity(target);

        while next_individuals.len() < target {
            let p1 = tournament_select(&population.individuals, self.tournament_size, rng)?;
            let p2 = tournament_select(&population.individuals, self.tournament_size, rng)?;

            let (mut c1, mut c2) = Individual::crossover(p1, p2, self.crossover_rate, rng);
            c1.mutate(self.mutation_rate, self.width, self.height, rng);
            c2.mutate(self.mutation_rate, self.width, self.height, rng);

            next_individuals.push(c1);
            if next_individuals.len() < target {
                next_individuals.push(c2);
            }
        }

        Ok(Population::new(next_individuals))
    }
}

/// Selects an individual using tournament selection.
///
/// Draws `tournament_size` indices uniformly with replacement and returns the
/// fittest sampled individual, preferring the earliest draw on ties.
///
/// # Panics
///
/// Panics if `population` is empty or `tournament_size` is zero.
pub fn tournament_select<'a, R>(
    population: &'a [Individual],
    tournament_size: usize,
    rng: &mut R,
) -> Result<&'a Individual, GaError>
where
    R: Rng + ?Sized,
{
    assert!(tournament_size > 0);
    assert!(!population.is_empty());
    first_max((0..tournament_size).map(|_| &population[rng.random_range(0..population.len())]))
}

/// `Iterator::max_by` keeps the *last* maximum; selection needs the first.
fn first_max<'a, I>(individuals: I) -> Result<&'a Individual, GaError>
where
    I: IntoIterator<Item = &'a Individual>,
{
    let mut best: Option<(&Individual, f64)> = None;
    for ind in individuals {
        let fitness = ind.evaluated_fitness()?;
        if best.is_none_or(|(_, best_fitness)| fitness > best_fitness) {
            best = Some((ind, fitness));
        }
    }
    best.map(|(ind, _)| ind).ok_or(GaError::FitnessNotComputed)
}
