//! Grid coverage of a set of sensor positions.
//!
//! A cell `(x, y)` is covered when it lies inside the closed disk of radius
//! `radius` around at least one sensor. Distances are compared squared, in
//! integer arithmetic, so no floating point is involved.

use serde::{Deserialize, Serialize};

/// A cell position on the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance between two cells, saturating at
    /// `usize::MAX`.
    #[must_use]
    pub const fn distance_squared(self, other: Self) -> usize {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }

    /// Returns `true` if the point lies inside a `width × height` grid.
    #[must_use]
    pub const fn is_within(self, width: usize, height: usize) -> bool {
        self.x < width && self.y < height
    }
}

/// Boolean coverage matrix, stored row-major with `y` ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl CoverageGrid {
    /// Creates a grid with every cell uncovered.
    #[must_use]
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns whether `(x, y)` is covered. Cells outside the grid are not.
    #[must_use]
    pub fn is_covered(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    /// Number of covered cells.
    #[must_use]
    pub fn covered_count(&self) -> usize {
        self.cells.iter().filter(|covered| **covered).count()
    }

    /// Iterates over rows from `y = 0` upwards.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // `max(1)` keeps `chunks_exact` from panicking on a zero-width grid.
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Marks every cell within `radius` of `center` as covered.
    ///
    /// Only the disk's bounding box is visited, clipped to the grid. The
    /// center may lie outside the grid.
    pub fn cover_disk(&mut self, center: Point, radius: usize) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        // A radius whose square saturates reaches every cell of the grid.
        let radius_squared = radius.saturating_mul(radius);
        let x_range = center.x.saturating_sub(radius)
            ..=center.x.saturating_add(radius).min(self.width - 1);
        let y_range = center.y.saturating_sub(radius)
            ..=center.y.saturating_add(radius).min(self.height - 1);
        for y in y_range {
            for x in x_range.clone() {
                if Point::new(x, y).distance_squared(center) <= radius_squared {
                    self.cells[y * self.width + x] = true;
                }
            }
        }
    }
}

/// Computes which cells of a `width × height` grid fall within `radius` of
/// any of `points`.
///
/// Cost is `O(|points| · radius²)`; this runs once per fitness evaluation.
#[must_use]
pub fn coverage(points: &[Point], radius: usize, width: usize, height: usize) -> CoverageGrid {
    let mut grid = CoverageGrid::empty(width, height);
    for &point in points {
        grid.cover_disk(point, radius);
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: usize = 20;
    const HEIGHT: usize = 10;

    /// Independent full-scan count used as ground truth.
    fn brute_force_count(points: &[Point], radius: usize, width: usize, height: usize) -> usize {
        let mut count = 0;
        for y in 0..height {
            for x in 0..width {
                let covered = points.iter().any(|p| {
                    #[expect(clippy::cast_possible_wrap)]
                    let (dx, dy) = (x as isize - p.x as isize, y as isize - p.y as isize);
                    #[expect(clippy::cast_possible_wrap)]
                    let r = radius as isize;
                    dx * dx + dy * dy <= r * r
                });
                if covered {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_single_unclipped_sensor_covers_37_cells() {
        let points = [Point::new(5, 5)];
        let grid = coverage(&points, 3, WIDTH, HEIGHT);
        assert_eq!(grid.covered_count(), 37);
        assert_eq!(
            grid.covered_count(),
            brute_force_count(&points, 3, WIDTH, HEIGHT)
        );
    }

    #[test]
    fn test_disk_boundary_is_closed() {
        let grid = coverage(&[Point::new(5, 5)], 3, WIDTH, HEIGHT);
        assert!(grid.is_covered(8, 5), "distance exactly 3 is covered");
        assert!(grid.is_covered(5, 2));
        assert!(!grid.is_covered(8, 6), "distance² = 10 exceeds 9");
        assert!(!grid.is_covered(7, 8), "distance² = 13 exceeds 9");
    }

    #[test]
    fn test_corner_sensor_is_clipped() {
        let points = [Point::new(0, 0)];
        let grid = coverage(&points, 3, WIDTH, HEIGHT);
        assert_eq!(grid.covered_count(), 11);
        assert_eq!(
            grid.covered_count(),
            brute_force_count(&points, 3, WIDTH, HEIGHT)
        );

        let points = [Point::new(WIDTH - 1, HEIGHT - 1)];
        let grid = coverage(&points, 3, WIDTH, HEIGHT);
        assert_eq!(
            grid.covered_count(),
            brute_force_count(&points, 3, WIDTH, HEIGHT)
        );
    }

    #[test]
    fn test_overlapping_sensors_count_once() {
        let points = [Point::new(5, 5), Point::new(5, 5), Point::new(6, 5)];
        let grid = coverage(&points, 3, WIDTH, HEIGHT);
        assert_eq!(
            grid.covered_count(),
            brute_force_count(&points, 3, WIDTH, HEIGHT)
        );
        assert!(grid.covered_count() < 3 * 37);
    }

    #[test]
    fn test_matches_brute_force_for_scattered_points() {
        let points = [
            Point::new(0, 9),
            Point::new(19, 0),
            Point::new(10, 4),
            Point::new(3, 7),
            Point::new(15, 8),
        ];
        for radius in 0..8 {
            let grid = coverage(&points, radius, WIDTH, HEIGHT);
            assert_eq!(
                grid.covered_count(),
                brute_force_count(&points, radius, WIDTH, HEIGHT),
                "radius {radius}",
            );
        }
    }

    #[test]
    fn test_radius_growth_never_loses_cells() {
        let points = [Point::new(2, 2), Point::new(17, 6)];
        let mut previous = 0;
        for radius in 0..=25 {
            let count = coverage(&points, radius, WIDTH, HEIGHT).covered_count();
            assert!(count >= previous, "radius {radius}: {count} < {previous}");
            previous = count;
        }
        assert_eq!(previous, WIDTH * HEIGHT);
    }

    #[test]
    fn test_rows_layout() {
        let grid = coverage(&[Point::new(0, 0)], 0, 3, 2);
        let rows: Vec<&[bool]> = grid.rows().collect();
        assert_eq!(rows, vec![&[true, false, false][..], &[false, false, false][..]]);
    }

    #[test]
    fn test_out_of_bounds_query() {
        let grid = coverage(&[Point::new(0, 0)], 30, WIDTH, HEIGHT);
        assert_eq!(grid.covered_count(), WIDTH * HEIGHT);
        assert!(!grid.is_covered(WIDTH, 0));
        assert!(!grid.is_covered(0, HEIGHT));
    }

    #[test]
    fn test_huge_radius_covers_whole_grid() {
        let grid = coverage(&[Point::new(5, 5)], 1 << 32, WIDTH, HEIGHT);
        assert_eq!(grid.covered_count(), WIDTH * HEIGHT);
        let grid = coverage(&[Point::new(0, 0)], usize::MAX, WIDTH, HEIGHT);
        assert_eq!(grid.covered_count(), WIDTH * HEIGHT);
    }

    #[test]
    fn test_far_center_does_not_overflow() {
        let far = [Point::new(usize::MAX, 0), Point::new(0, usize::MAX)];
        assert_eq!(coverage(&far, 3, WIDTH, HEIGHT).covered_count(), 0);
        assert_eq!(coverage(&far, 1 << 32, WIDTH, HEIGHT).covered_count(), 0);
    }

    #[test]
    fn test_distance_saturates() {
        let far = Point::new(usize::MAX, usize::MAX);
        assert_eq!(Point::new(0, 0).distance_squared(far), usize::MAX);
    }

    #[test]
    fn test_point_helpers() {
        assert_eq!(Point::new(1, 2).to_string(), "(1, 2)");
        assert_eq!(Point::new(1, 2).distance_squared(Point::new(4, 6)), 25);
        assert!(Point::new(19, 9).is_within(WIDTH, HEIGHT));
        assert!(!Point::new(20, 9).is_within(WIDTH, HEIGHT));
    }
}
