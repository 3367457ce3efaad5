//! Triangles confined to a bounding box of fixed height and width.
use glam::DVec2;
use rand::Rng as RngCore;
use tracing::warn;

use crate::config::{Family, TriangleOptions};
use crate::error::Result;
use crate::generate::{clamp_to_scene, next_down, rand01, shape_count, usable_scene, ShapeGenerator};
use crate::shape::{Shape, ShapeKind};

/// Triangles with three vertices drawn uniformly inside a randomly placed
/// `bbox_width x bbox_height` box.
#[derive(Debug, Clone)]
pub struct TriangleGenerator {
    pub count: usize,
    pub bbox_height: f64,
    pub bbox_width: f64,
}

impl TriangleGenerator {
    pub fn new(count: usize, bbox_width: f64, bbox_height: f64) -> Self {
        Self {
            count,
            bbox_height,
            bbox_width,
        }
    }

    pub fn from_options(options: &TriangleOptions) -> Self {
        Self::new(
            shape_count(options.count),
            options.bbox_width,
            options.bbox_height,
        )
    }
}

impl ShapeGenerator for TriangleGenerator {
    fn family(&self) -> Family {
        Family::Triangles
    }

    fn generate(&self, scene_length: f64, rng: &mut dyn RngCore) -> Result<Vec<Shape>> {
        if self.count == 0 || !usable_scene(scene_length) {
            return Ok(Vec::new());
        }

        let limit = next_down(scene_length);
        let size = DVec2::new(self.bbox_width, self.bbox_height);
        if !(size.x > 0.0 && size.x < scene_length && size.y > 0.0 && size.y < scene_length) {
            warn!(
                "Triangle box {}x{} does not fit the scene of length {}; clamping.",
                size.x, size.y, scene_length
            );
        }
        let size = size.clamp(DVec2::ZERO, DVec2::splat(limit));
        let slack = DVec2::splat(scene_length) - size;

        let mut out = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let origin = DVec2::new(rand01(rng) * slack.x, rand01(rng) * slack.y);
            let mut vertices = Vec::with_capacity(3);
            for _ in 0..3 {
                let offset = DVec2::new(rand01(rng) * size.x, rand01(rng) * size.y);
                vertices.push(clamp_to_scene(origin + offset, scene_length));
            }
            out.push(Shape::new(ShapeKind::Triangle, vertices));
        }

        Ok(out)
    }
}
