use crate::{
    GaConfig,
    geometry::{self, CoverageGrid, Point},
};

/// Scores a sensor placement as `covered cells - alpha * sensor count`.
///
/// The cost term uses the number of points actually given, not
/// `GaConfig::num_sensors`, so placements of any length are scored
/// consistently. Scoring is deterministic and may be negative when the cost
/// outweighs the coverage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageFitness {
    width: usize,
    height: usize,
    radius: usize,
    alpha: f64,
}

impl CoverageFitness {
    #[must_use]
    pub const fn new(width: usize, height: usize, radius: usize, alpha: f64) -> Self {
        Self {
            width,
            height,
            radius,
            alpha,
        }
    }

    #[must_use]
    pub const fn from_config(config: &GaConfig) -> Self {
        Self::new(config.width, config.height, config.radius, config.alpha)
    }

    /// Coverage grid for `points` under this evaluator's geometry.
    #[must_use]
    pub fn coverage(&self, points: &[Point]) -> CoverageGrid {
        geometry::coverage(points, self.radius, self.width, self.height)
    }

    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn evaluate(&self, points: &[Point]) -> f64 {
        let covered = self.coverage(points).covered_count();
        covered as f64 - self.alpha * points.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_fitness() -> CoverageFitness {
        CoverageFitness::from_config(&GaConfig::default())
    }

    #[test]
    fn test_huge_radius_score() {
        let config = GaConfig {
            radius: 1 << 32,
            ..GaConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
        let score = CoverageFitness::from_config(&config).evaluate(&[Point::new(5, 5)]);
        assert!((score - (200.0 - 5.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_sensor_score() {
        let score = default_fitness().evaluate(&[Point::new(5, 5)]);
        assert!((score - (37.0 - 5.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cost_uses_point_count() {
        let fitness = default_fitness();
        // A duplicated sensor adds cost but no coverage.
        let one = fitness.evaluate(&[Point::new(5, 5)]);
        let two = fitness.evaluate(&[Point::new(5, 5), Point::new(5, 5)]);
        assert!((one - two - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_can_be_negative() {
        let fitness = CoverageFitness::new(4, 4, 1, 100.0);
        assert!(fitness.evaluate(&[Point::new(0, 0), Point::new(3, 3)]) < 0.0);
    }

    #[test]
    fn test_zero_alpha_is_pure_coverage() {
        let fitness = CoverageFitness::new(20, 10, 3, 0.0);
        let points = [Point::new(5, 5), Point::new(14, 5)];
        #[expect(clippy::cast_precision_loss)]
        let covered = fitness.coverage(&points).covered_count() as f64;
        assert!((fitness.evaluate(&points) - covered).abs() < f64::EPSILON);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let fitness = default_fitness();
        let points = [Point::new(1, 8), Point::new(12, 3), Point::new(19, 9)];
        assert_eq!(
            fitness.evaluate(&points).to_bits(),
            fitness.evaluate(&points).to_bits()
        );
    }
}
