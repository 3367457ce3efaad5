//! Simple polygons with a random vertex count inside a square bounding box.
use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng as RngCore;
use tracing::warn;

use crate::config::{Family, PolygonOptions};
use crate::error::Result;
use crate::generate::{
    clamp_to_scene, next_down, rand01, rand_int_inclusive, shape_count, usable_scene,
    ShapeGenerator,
};
use crate::shape::{Shape, ShapeKind};

/// Star-shaped polygons: vertices sit at sorted random angles around the centre of
/// a `bbox_length x bbox_length` box, each at a random distance no larger than half
/// the box side. Sorting the angles keeps the ring free of self-intersections.
#[derive(Debug, Clone)]
pub struct PolygonGenerator {
    pub count: usize,
    pub min_vertex_count: i32,
    pub max_vertex_count: i32,
    pub bbox_length: f64,
}

impl PolygonGenerator {
    pub fn new(count: usize, min_vertex_count: i32, max_vertex_count: i32, bbox_length: f64) -> Self {
        Self {
            count,
            min_vertex_count,
            max_vertex_count,
            bbox_length,
        }
    }

    pub fn from_options(options: &PolygonOptions) -> Self {
        Self::new(
            shape_count(options.count),
            options.min_vertex_count,
            options.max_vertex_count,
            f64::from(options.bbox_length),
        )
    }
}

impl ShapeGenerator for PolygonGenerator {
    fn family(&self) -> Family {
        Family::Polygons
    }

    fn generate(&self, scene_length: f64, rng: &mut dyn RngCore) -> Result<Vec<Shape>> {
        if self.count == 0 || !usable_scene(scene_length) {
            return Ok(Vec::new());
        }

        let mut side = self.bbox_length;
        if !(side > 0.0 && side < scene_length) {
            warn!(
                "Polygon box length {} is outside (0, {}); clamping.",
                side, scene_length
            );
            side = side.clamp(0.0, next_down(scene_length));
        }
        let half = side * 0.5;
        let slack = scene_length - side;
        let min_vertices = self.min_vertex_count.max(3);
        let max_vertices = self.max_vertex_count.max(min_vertices);

        let mut out = Vec::with_capacity(self.count);
        let mut angles: Vec<f64> = Vec::new();
        for _ in 0..self.count {
            let n = rand_int_inclusive(rng, min_vertices, max_vertices) as usize;
            let center = DVec2::new(rand01(rng) * slack + half, rand01(rng) * slack + half);

            angles.clear();
            angles.extend((0..n).map(|_| rand01(rng) * TAU));
            angles.sort_by(f64::total_cmp);

            let vertices = angles
                .iter()
                .map(|&theta| {
                    let r = half * (1.0 - rand01(rng));
                    clamp_to_scene(center + DVec2::from_angle(theta) * r, scene_length)
                })
                .collect();
            out.push(Shape::new(ShapeKind::Polygon, vertices));
        }

        Ok(out)
    }
}
