//! Random walks with bounded step length.
use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng as RngCore;
use tracing::warn;

use crate::config::{Family, RandomWalkOptions};
use crate::error::Result;
use crate::generate::{
    clamp_to_scene, next_down, rand01, random_in_scene, shape_count, usable_scene, ShapeGenerator,
};
use crate::shape::{Shape, ShapeKind};

/// Walks of `steps` steps from a random start. Each step picks a uniform direction
/// and a length in `(0, max_step_length]`; a step leaving the scene is reflected
/// back off the border it crossed.
#[derive(Debug, Clone)]
pub struct RandomWalkGenerator {
    pub count: usize,
    pub max_step_length: f64,
    pub steps: usize,
}

impl RandomWalkGenerator {
    pub fn new(count: usize, max_step_length: f64, steps: usize) -> Self {
        Self {
            count,
            max_step_length,
            steps,
        }
    }

    pub fn from_options(options: &RandomWalkOptions) -> Self {
        Self::new(
            shape_count(options.count),
            options.max_step_length,
            shape_count(options.steps),
        )
    }
}

#[inline]
fn reflect(v: f64, scene_length: f64) -> f64 {
    if v < 0.0 {
        -v
    } else if v >= scene_length {
        2.0 * scene_length - v
    } else {
        v
    }
}

impl ShapeGenerator for RandomWalkGenerator {
    fn family(&self) -> Family {
        Family::RandomWalks
    }

    fn generate(&self, scene_length: f64, rng: &mut dyn RngCore) -> Result<Vec<Shape>> {
        if self.count == 0 || !usable_scene(scene_length) {
            return Ok(Vec::new());
        }

        let mut max_step = self.max_step_length;
        if !(max_step > 0.0 && max_step < scene_length) {
            warn!(
                "Random walk step length {} is outside (0, {}); clamping.",
                max_step, scene_length
            );
            max_step = max_step.clamp(0.0, next_down(scene_length));
        }

        let mut out = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let mut vertices = Vec::with_capacity(self.steps + 1);
            let mut current = random_in_scene(rng, scene_length);
            vertices.push(current);

            for _ in 0..self.steps {
                let direction = DVec2::from_angle(rand01(rng) * TAU);
                let length = max_step * (1.0 - rand01(rng));
                let next = current + direction * length;
                current = clamp_to_scene(
                    DVec2::new(reflect(next.x, scene_length), reflect(next.y, scene_length)),
                    scene_length,
                );
                vertices.push(current);
            }

            out.push(Shape::new(ShapeKind::RandomWalk, vertices));
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
    fn walks_have_one_vertex_per_step_plus_start() {
        let mut rng = StdRng::seed_from_u64(51);
        let walks = RandomWalkGenerator::new(20, 3.0, 15)
            .generate(50.0, &mut rng)
            .unwrap();
        assert_eq!(walks.len(), 20);
        assert!(walks.iter().all(|w| w.vertices.len() == 16));
    }

    #[test]
    fn steps_are_bounded_and_stay_in_scene() {
        let mut rng = StdRng::seed_from_u64(52);
        // Long steps in a small scene force frequent reflections.
        let walks = RandomWalkGenerator::new(50, 9.0, 40)
            .generate(10.0, &mut rng)
            .unwrap();
        for w in &walks {
            assert!(w.is_within_scene(10.0));
            for pair in w.vertices.windows(2) {
                assert!(pair[0].distance(pair[1]) <= 9.0 + 1e-9);
            }
        }
    }

    #[test]
    fn reflection_mirrors_across_borders() {
        assert_eq!(reflect(-2.0, 10.0), 2.0);
        assert_eq!(reflect(12.0, 10.0), 8.0);
        assert_eq!(reflect(10.0, 10.0), 10.0);
        assert_eq!(reflect(4.0, 10.0), 4.0);
    }
}
