//! Operations on sensor position lists used by the genetic algorithm.
//!
//! - **Initialization**: [`random`] samples uniform positions
//! - **Crossover**: [`crossover`] applies one-point crossover with a given
//!   probability; [`split_at_point`] is its deterministic core
//! - **Mutation**: [`mutate`] resets positions to fresh uniform cells
//!
//! These functions work on plain `Point` slices. [`Individual`] wraps them
//! and takes care of invalidating cached fitness.
//!
//! [`Individual`]: crate::genetic::Individual

use rand::Rng;
use sensorga_engine::Point;

/// Samples one cell uniformly from `[0, width) × [0, height)`.
pub fn random_point<R>(rng: &mut R, width: usize, height: usize) -> Point
where
    R: Rng + ?Sized,
{
    let x = rng.random_range(0..width);
    let y = rng.random_range(0..height);
    Point::new(x, y)
}

/// Samples `count` independent uniform cells.
pub fn random<R>(rng: &mut R, width: usize, height: usize, count: usize) -> Vec<Point>
where
    R: Rng + ?Sized,
{
    (0..count).map(|_| random_point(rng, width, height)).collect()
}

/// Exchanges the tails of two parents at `point`.
///
/// Returns `(p1[..point] ++ p2[point..], p2[..point] ++ p1[point..])`.
///
/// # Panics
///
/// Panics if the parents have different lengths or `point` exceeds it.
#[must_use]
pub fn split_at_point(p1: &[Point], p2: &[Point], point: usize) -> (Vec<Point>, Vec<Point>) {
    assert_eq!(p1.len(), p2.len());
    assert!(point <= p1.len());
    let (head1, tail1) = p1.split_at(point);
    let (head2, tail2) = p2.split_at(point);
    ([head1, tail2].concat(), [head2, tail1].concat())
}

/// One-point crossover applied with probability `rate`.
///
/// When recombination is skipped the children are copies of the parents.
/// Otherwise the split point is drawn uniformly from `1..=len - 1`, so each
/// child receives a non-empty head from one parent and a non-empty tail from
/// the other.
///
/// Parents shorter than two points cannot be split and are copied.
///
/// # Panics
///
/// Panics if the parents have different lengths or `rate` is not in `[0, 1]`.
pub fn crossover<R>(p1: &[Point], p2: &[Point], rate: f64, rng: &mut R) -> (Vec<Point>, Vec<Point>)
where
    R: Rng + ?Sized,
{
    assert_eq!(p1.len(), p2.len());
    if !rng.random_bool(rate) || p1.len() < 2 {
        return (p1.to_vec(), p2.to_vec());
    }
    let point = rng.random_range(1..p1.len());
    split_at_point(p1, p2, point)
}

/// Moves each position, with probability `rate`, to a fresh uniform cell.
///
/// The new cell does not depend on the old one; untouched positions are
/// left as they are.
///
/// # Panics
///
/// Panics if `rate` is not in `[0, 1]`.
pub fn mutate<R>(points: &mut [Point], rate: f64, width: usize, height: usize, rng: &mut R)
where
    R: Rng + ?Sized,
{
    for point in points {
        if rng.random_bool(rate) {
            *point = random_point(rng, width, height);
        }
    }
}
