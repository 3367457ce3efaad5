//! Quick-star polygons: rings of radially jittered vertices around a random centre.
//!
//! Output of this generator is consumed by existing tooling, so the algorithm is
//! kept as is:
//! - the centre is drawn from `[1, scene_length + 1)` on each axis, so shapes are
//!   not clamped to the scene;
//! - vertex `i` sits at accumulated angle `a = i * 2π / vertex_count`, but the
//!   trigonometric argument is `a·π`, not `a`;
//! - each vertex gets its own radius drawn from `[0, star_radius)`.
use std::f64::consts::{PI, TAU};

use glam::DVec2;
use rand::Rng as RngCore;

use crate::config::{Family, QuickStarPolygonOptions};
use crate::error::Result;
use crate::generate::{rand01, shape_count, usable_scene, ShapeGenerator};
use crate::shape::{Shape, ShapeKind};

#[derive(Debug, Clone)]
pub struct QuickStarPolygonGenerator {
    pub count: usize,
    pub vertex_count: usize,
    pub star_radius: f64,
}

impl QuickStarPolygonGenerator {
    pub fn new(count: usize, vertex_count: usize, star_radius: f64) -> Self {
        Self {
            count,
            vertex_count,
            star_radius,
        }
    }

    pub fn from_options(options: &QuickStarPolygonOptions) -> Self {
        Self::new(
            shape_count(options.count),
            shape_count(options.vertex_count),
            options.star_radius,
        )
    }

    /// Draws a polygon centre in `[1, scene_length + 1)^2`.
    pub fn random_center(scene_length: f64, rng: &mut dyn RngCore) -> DVec2 {
        let x = rand01(rng) * scene_length + 1.0;
        let y = rand01(rng) * scene_length + 1.0;
        DVec2::new(x, y)
    }

    /// Builds one polygon around `center`.
    pub fn star_around(&self, center: DVec2, rng: &mut dyn RngCore) -> Shape {
        let mut vertices = Vec::with_capacity(self.vertex_count);
        if self.vertex_count > 0 {
            let gap = TAU / self.vertex_count as f64;
            let mut angle = 0.0_f64;
            for _ in 0..self.vertex_count {
                let r = rand01(rng) * self.star_radius;
                let (sin, cos) = (angle * PI).sin_cos();
                vertices.push(DVec2::new(center.x + r * cos, center.y + r * sin));
                angle += gap;
            }
        }
        Shape::new(ShapeKind::QuickStarPolygon, vertices)
    }
}

impl ShapeGenerator for QuickStarPolygonGenerator {
    fn family(&self) -> Family {
        Family::QuickStarPolygons
    }

    fn generate(&self, scene_length: f64, rng: &mut dyn RngCore) -> Result<Vec<Shape>> {
        if self.count == 0 || !usable_scene(scene_length) {
            return Ok(Vec::new());
        }

        let mut out = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let center = Self::random_center(scene_length, rng);
            out.push(self.star_around(center, rng));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    /// Replays the random stream to recover the centre of every polygon.
    fn replay_centers(generator: &QuickStarPolygonGenerator, scene: f64, seed: u64) -> Vec<DVec2> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..generator.count)
            .map(|_| {
                let c = QuickStarPolygonGenerator::random_center(scene, &mut rng);
                for _ in 0..generator.vertex_count {
                    rand01(&mut rng);
                }
                c
            })
            .collect()
    }

    #[test]
    fn seeded_run_matches_reference_geometry() {
        let generator = QuickStarPolygonGenerator::new(25, 4, 10.0);
        let mut rng = StdRng::seed_from_u64(2017);
        let polygons = generator.generate(100.0, &mut rng).unwrap();
        let centers = replay_centers(&generator, 100.0, 2017);

        assert_eq!(polygons.len(), 25);
        for (polygon, center) in polygons.iter().zip(&centers) {
            assert_eq!(polygon.kind, ShapeKind::QuickStarPolygon);
            assert_eq!(polygon.vertices.len(), 4);
            assert!((1.0..101.0).contains(&center.x));
            assert!((1.0..101.0).contains(&center.y));
            for v in &polygon.vertices {
                assert!(v.distance(*center) <= 10.0 + 1e-9);
            }
        }
    }

    #[test]
    fn vertices_follow_pi_scaled_angles() {
        let generator = QuickStarPolygonGenerator::new(1, 4, 10.0);
        let center = DVec2::new(50.0, 50.0);

        let mut rng = StdRng::seed_from_u64(5);
        let shape = generator.star_around(center, &mut rng);

        let mut radii = StdRng::seed_from_u64(5);
        let gap = TAU / 4.0;
        for (i, v) in shape.vertices.iter().enumerate() {
            let r = rand01(&mut radii) * 10.0;
            let a = gap * i as f64;
            let expected = DVec2::new(center.x + r * (a * PI).cos(), center.y + r * (a * PI).sin());
            assert!(v.distance(expected) < 1e-9);
        }
    }

    #[test]
    fn zero_vertices_give_empty_rings() {
        let generator = QuickStarPolygonGenerator::new(3, 0, 10.0);
        let mut rng = StdRng::seed_from_u64(6);
        let polygons = generator.generate(100.0, &mut rng).unwrap();
        assert_eq!(polygons.len(), 3);
        assert!(polygons.iter().all(|p| p.vertices.is_empty()));
    }
}
