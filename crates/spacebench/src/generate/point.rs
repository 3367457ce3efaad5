//! Uniform random points, optionally without coinciding positions.
use std::collections::HashSet;

use rand::Rng as RngCore;

use crate::config::{Family, PointOptions};
use crate::error::{Error, Result};
use crate::generate::{random_in_scene, shape_count, usable_scene, ShapeGenerator};
use crate::shape::format::{format_coordinate, DEFAULT_PRECISION};
use crate::shape::Shape;

/// Draws allowed per requested point when uniqueness is enforced.
pub const UNIQUE_RESAMPLE_FACTOR: usize = 32;

/// Uniform i.i.d. points over the scene.
#[derive(Debug, Clone)]
pub struct PointGenerator {
    /// Number of points to generate.
    pub count: usize,
    /// Reject and redraw points that land on an already used position.
    pub unique: bool,
    /// Output decimals; two points coincide when they print the same.
    pub precision: usize,
}

impl PointGenerator {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            unique: false,
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn from_options(options: &PointOptions) -> Self {
        Self::new(shape_count(options.count)).with_unique(options.unique)
    }

    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    fn position_key(&self, x: f64, y: f64) -> (String, String) {
        (
            format_coordinate(x, self.precision),
            format_coordinate(y, self.precision),
        )
    }
}

impl ShapeGenerator for PointGenerator {
    fn family(&self) -> Family {
        Family::Points
    }

    fn generate(&self, scene_length: f64, rng: &mut dyn RngCore) -> Result<Vec<Shape>> {
        if self.count == 0 || !usable_scene(scene_length) {
            return Ok(Vec::new());
        }

        let mut out = Vec::with_capacity(self.count);
        if !self.unique {
            for _ in 0..self.count {
                out.push(Shape::point(random_in_scene(rng, scene_length)));
            }
            return Ok(out);
        }

        let budget = self.count.saturating_mul(UNIQUE_RESAMPLE_FACTOR);
        let mut seen: HashSet<(String, String)> = HashSet::with_capacity(self.count);
        let mut attempts = 0usize;
        while out.len() < self.count {
            if attempts == budget {
                return Err(Error::ResampleBudgetExhausted {
                    family: Family::Points,
                    requested: self.count,
                    produced: out.len(),
                    attempts,
                });
            }
            attempts += 1;

            let p = random_in_scene(rng, scene_length);
            if seen.insert(self.position_key(p.x, p.y)) {
                out.push(Shape::point(p));
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::shape::format::{FormatOptions, RecordFormatter};
    use crate::shape::ShapeKind;

    #[test]
    fn count_and_bounds_are_respected() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = PointGenerator::new(500).generate(8.0, &mut rng).unwrap();
        assert_eq!(points.len(), 500);
        for p in &points {
            assert_eq!(p.kind, ShapeKind::Point);
            assert_eq!(p.vertices.len(), 1);
            assert!(p.is_within_scene(8.0));
        }
    }

    #[test]
    fn determinism_for_same_seed() {
        let generator = PointGenerator::new(32);
        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        let mut rng_c = StdRng::seed_from_u64(456);
        let pa = generator.generate(10.0, &mut rng_a).unwrap();
        let pb = generator.generate(10.0, &mut rng_b).unwrap();
        let pc = generator.generate(10.0, &mut rng_c).unwrap();
        assert_eq!(pa, pb);
        assert_ne!(pa, pc);
    }

    #[test]
    fn unique_points_have_distinct_positions() {
        let generator = PointGenerator::new(2_000).with_unique(true);
        let mut rng = StdRng::seed_from_u64(9);
        let points = generator.generate(3.0, &mut rng).unwrap();
        assert_eq!(points.len(), 2_000);
        let keys: HashSet<_> = points
            .iter()
            .map(|p| generator.position_key(p.vertices[0].x, p.vertices[0].y))
            .collect();
        assert_eq!(keys.len(), points.len());
    }

    #[test]
    fn unique_points_fill_a_coarse_grid_up_to_its_capacity() {
        // Whole units leave a 4x4 grid of printed positions in [0, 3.5).
        let generator = PointGenerator::new(16).with_unique(true).with_precision(0);
        let mut rng = StdRng::seed_from_u64(17);
        let points = generator.generate(3.5, &mut rng).unwrap();
        assert_eq!(points.len(), 16);
    }

    #[test]
    fn unique_points_stay_distinct_at_two_decimals() {
        let generator = PointGenerator::new(5_000).with_unique(true).with_precision(2);
        let mut rng = StdRng::seed_from_u64(1);
        let points = generator.generate(10.0, &mut rng).unwrap();
        let formatter = RecordFormatter::new(FormatOptions::default().with_precision(2));
        let lines: HashSet<String> = points.iter().map(|p| formatter.format(p)).collect();
        assert_eq!(lines.len(), 5_000);
    }

    #[test]
    fn exhausted_budget_is_reported_instead_of_looping() {
        // Only a 2x2 grid of printed positions exists at six decimals.
        let generator = PointGenerator::new(50).with_unique(true);
        let mut rng = StdRng::seed_from_u64(3);
        let err = generator.generate(2.0e-6, &mut rng).unwrap_err();
        match err {
            Error::ResampleBudgetExhausted {
                family,
                requested,
                produced,
                attempts,
            } => {
                assert_eq!(family, Family::Points);
                assert_eq!(requested, 50);
                assert!(produced <= 4);
                assert_eq!(attempts, 50 * UNIQUE_RESAMPLE_FACTOR);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
