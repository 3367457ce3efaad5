//! Axis-aligned squares with a bounded side length.
use glam::DVec2;
use rand::Rng as RngCore;
use tracing::warn;

use crate::config::{Family, SquareOptions};
use crate::error::Result;
use crate::generate::{clamp_to_scene, next_down, rand01, shape_count, usable_scene, ShapeGenerator};
use crate::shape::{Shape, ShapeKind};

/// Squares whose side is drawn uniformly from `(0, max_side_length]`.
#[derive(Debug, Clone)]
pub struct SquareGenerator {
    pub count: usize,
    pub max_side_length: f64,
}

impl SquareGenerator {
    pub fn new(count: usize, max_side_length: f64) -> Self {
        Self {
            count,
            max_side_length,
        }
    }

    pub fn from_options(options: &SquareOptions) -> Self {
        Self::new(shape_count(options.count), options.max_side_length)
    }
}

impl ShapeGenerator for SquareGenerator {
    fn family(&self) -> Family {
        Family::Squares
    }

    fn generate(&self, scene_length: f64, rng: &mut dyn RngCore) -> Result<Vec<Shape>> {
        if self.count == 0 || !usable_scene(scene_length) {
            return Ok(Vec::new());
        }

        let mut max_side = self.max_side_length;
        if !(max_side > 0.0 && max_side < scene_length) {
            warn!(
                "Square side length {} is outside (0, {}); clamping.",
                max_side, scene_length
            );
            max_side = max_side.clamp(0.0, next_down(scene_length));
        }

        let mut out = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            // 1 - u lies in (0, 1], so the side is never zero for a positive bound.
            let side = max_side * (1.0 - rand01(rng));
            let slack = scene_length - side;
            let origin = DVec2::new(rand01(rng) * slack, rand01(rng) * slack);

            let corners = [
                origin,
                origin + DVec2::new(side, 0.0),
                origin + DVec2::new(side, side),
                origin + DVec2::new(0.0, side),
            ];
            out.push(Shape::new(
                ShapeKind::Square,
                corners
                    .into_iter()
                    .map(|c| clamp_to_scene(c, scene_length))
                    .collect(),
            ));
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn squares_stay_inside_scene_with_bounded_side() {
        let mut rng = StdRng::seed_from_u64(7);
        let squares = SquareGenerator::new(200, 10.0).generate(50.0, &mut rng).unwrap();
        assert_eq!(squares.len(), 200);
        for s in &squares {
            assert_eq!(s.vertices.len(), 4);
            assert!(s.is_within_scene(50.0));
            let (lo, hi) = s.bounds().unwrap();
            let extent = hi - lo;
            assert!(extent.x > 0.0 && extent.x <= 10.0);
            assert!((extent.x - extent.y).abs() < 1e-9);
        }
    }

    #[test]
    fn corners_run_counter_clockwise_from_lower_left() {
        let mut rng = StdRng::seed_from_u64(70);
        let s = &SquareGenerator::new(1, 5.0).generate(100.0, &mut rng).unwrap()[0];
        let [a, b, c, d] = [s.vertices[0], s.vertices[1], s.vertices[2], s.vertices[3]];
        assert_eq!(a.y, b.y);
        assert_eq!(b.x, c.x);
        assert_eq!(c.y, d.y);
        assert_eq!(d.x, a.x);
        assert!(b.x > a.x && d.y > a.y);
    }

    #[test]
    fn oversized_side_is_clamped_into_scene() {
        let mut rng = StdRng::seed_from_u64(8);
        let squares = SquareGenerator::new(20, 80.0).generate(20.0, &mut rng).unwrap();
        assert!(squares.iter().all(|s| s.is_within_scene(20.0)));
    }
}
