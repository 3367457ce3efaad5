//! Fractal lines built by recursive midpoint displacement.
use glam::DVec2;
use rand::Rng as RngCore;
use tracing::warn;

use crate::config::validate::MAX_RECURSION_DEPTH;
use crate::config::{Family, MidpointDisplacementOptions};
use crate::error::Result;
use crate::generate::{clamp_to_scene, rand_range, random_in_scene, shape_count, usable_scene, ShapeGenerator};
use crate::shape::{Shape, ShapeKind};

/// Lines between two random endpoints, refined `recursion_depth` times. Each
/// refinement inserts the midpoint of every segment, pushed along the segment
/// normal by a uniform offset in `[-bound, bound]`; the bound is multiplied by
/// `displacement_bound_reduction` after each level. A line has
/// `2^recursion_depth + 1` vertices.
#[derive(Debug, Clone)]
pub struct MidpointDisplacementGenerator {
    pub count: usize,
    pub recursion_depth: u32,
    pub displacement_bound: f64,
    pub displacement_bound_reduction: f64,
}

impl MidpointDisplacementGenerator {
    pub fn new(
        count: usize,
        recursion_depth: u32,
        displacement_bound: f64,
        displacement_bound_reduction: f64,
    ) -> Self {
        Self {
            count,
            recursion_depth,
            displacement_bound,
            displacement_bound_reduction,
        }
    }

    pub fn from_options(options: &MidpointDisplacementOptions) -> Self {
        Self::new(
            shape_count(options.count),
            options.recursion_depth.max(0) as u32,
            options.displacement_bound,
            options.displacement_bound_reduction,
        )
    }

    fn depth(&self) -> u32 {
        let cap = MAX_RECURSION_DEPTH as u32;
        if self.recursion_depth > cap {
            warn!(
                "Midpoint displacement depth {} exceeds {}; capping.",
                self.recursion_depth, cap
            );
        }
        self.recursion_depth.min(cap)
    }
}

impl ShapeGenerator for MidpointDisplacementGenerator {
    fn family(&self) -> Family {
        Family::MidpointDisplacements
    }

    fn generate(&self, scene_length: f64, rng: &mut dyn RngCore) -> Result<Vec<Shape>> {
        if self.count == 0 || !usable_scene(scene_length) {
            return Ok(Vec::new());
        }

        let depth = self.depth();
        let initial_bound = if self.displacement_bound.is_finite() {
            self.displacement_bound.abs()
        } else {
            0.0
        };
        let reduction = if self.displacement_bound_reduction.is_finite() {
            self.displacement_bound_reduction
        } else {
            0.0
        };

        let mut out = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let mut vertices = vec![
                random_in_scene(rng, scene_length),
                random_in_scene(rng, scene_length),
            ];
            let mut bound = initial_bound;

            for _ in 0..depth {
                let mut refined = Vec::with_capacity(vertices.len() * 2 - 1);
                for pair in vertices.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    let normal = (b - a).perp().normalize_or_zero();
                    let offset = rand_range(rng, -bound, bound);
                    refined.push(a);
                    refined.push(clamp_to_scene((a + b) * 0.5 + normal * offset, scene_length));
                }
                if let Some(&last) = vertices.last() {
                    refined.push(last);
                }
                vertices = refined;
                bound *= reduction;
            }

            out.push(Shape::new(ShapeKind::MidpointDisplacement, vertices));
        }

        Ok(out)
    }
}
