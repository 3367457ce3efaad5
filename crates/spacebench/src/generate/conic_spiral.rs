//! Conic spirals: curves whose radius grows linearly while the angle advances by
//! a random gap per segment.
use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng as RngCore;
use tracing::warn;

use crate::config::{ConicSpiralOptions, Family};
use crate::error::Result;
use crate::generate::{
    clamp_to_scene, rand01, rand_range, shape_count, usable_scene, ShapeGenerator,
};
use crate::shape::{Shape, ShapeKind};

/// Upper bound on segments per spiral when the increment is not validated.
pub const MAX_SEGMENTS: usize = 10_000;

/// Spirals sampled at `round(segment_inc) + 1` points. The radius runs from
/// `radius` to `max_radius`; the angle starts at a random heading and advances by
/// a gap drawn from `[angle_gap_lower, angle_gap_upper]` degrees per segment.
#[derive(Debug, Clone)]
pub struct ConicSpiralGenerator {
    pub count: usize,
    pub max_radius: f64,
    pub segment_inc: f64,
    pub radius: f64,
    pub angle_gap_lower: f64,
    pub angle_gap_upper: f64,
}

impl ConicSpiralGenerator {
    pub fn from_options(options: &ConicSpiralOptions) -> Self {
        Self {
            count: shape_count(options.count),
            max_radius: options.max_radius,
            segment_inc: options.segment_inc,
            radius: options.radius,
            angle_gap_lower: options.angle_gap_lower,
            angle_gap_upper: options.angle_gap_upper,
        }
    }

    fn segments(&self) -> usize {
        if !self.segment_inc.is_finite() || self.segment_inc < 1.0 {
            return 1;
        }
        let segments = self.segment_inc.round() as usize;
        if segments > MAX_SEGMENTS {
            warn!(
                "Conic spiral segment increment {} exceeds {}; capping.",
                self.segment_inc, MAX_SEGMENTS
            );
        }
        segments.min(MAX_SEGMENTS)
    }
}

impl ShapeGenerator for ConicSpiralGenerator {
    fn family(&self) -> Family {
        Family::ConicSpirals
    }

    fn generate(&self, scene_length: f64, rng: &mut dyn RngCore) -> Result<Vec<Shape>> {
        if self.count == 0 || !usable_scene(scene_length) {
            return Ok(Vec::new());
        }

        let segments = self.segments();
        let max_radius = self.max_radius.max(0.0);
        let base_radius = self.radius.clamp(0.0, max_radius);
        let (gap_lo, gap_hi) = if self.angle_gap_lower <= self.angle_gap_upper {
            (self.angle_gap_lower, self.angle_gap_upper)
        } else {
            (self.angle_gap_upper, self.angle_gap_lower)
        };
        // Keep the full spiral inside the scene when it can fit; otherwise centre it
        // and let clamping trim the outer turns.
        let margin = max_radius.min(scene_length * 0.5);

        let mut out = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let center = DVec2::new(
                rand_range(rng, margin, scene_length - margin),
                rand_range(rng, margin, scene_length - margin),
            );
            let mut theta = rand01(rng) * TAU;

            let mut vertices = Vec::with_capacity(segments + 1);
            for i in 0..=segments {
                let t = i as f64 / segments as f64;
                let r = base_radius + (max_radius - base_radius) * t;
                vertices.push(clamp_to_scene(
                    center + DVec2::from_angle(theta) * r,
                    scene_length,
                ));
                theta += rand_range(rng, gap_lo, gap_hi).to_radians();
            }

            out.push(Shape::new(ShapeKind::ConicSpiral, vertices));
        }

        Ok(out)
    }
}
