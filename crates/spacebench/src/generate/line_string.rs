//! Open paths with a random number of segments.
use rand::Rng as RngCore;

use crate::config::{Family, LineStringOptions};
use crate::error::Result;
use crate::generate::{rand_int_inclusive, random_in_scene, shape_count, usable_scene, ShapeGenerator};
use crate::shape::{Shape, ShapeKind};

/// Line strings of `segments + 1` vertices drawn uniformly over the scene, where
/// the segment count is uniform in `[min_segment_count, max_segment_count]`.
#[derive(Debug, Clone)]
pub struct LineStringGenerator {
    pub count: usize,
    pub min_segment_count: i32,
    pub max_segment_count: i32,
}

impl LineStringGenerator {
    pub fn new(count: usize, min_segment_count: i32, max_segment_count: i32) -> Self {
        Self {
            count,
            min_segment_count,
            max_segment_count,
        }
    }

    pub fn from_options(options: &LineStringOptions) -> Self {
        Self::new(
            shape_count(options.count),
            options.min_segment_count,
            options.max_segment_count,
        )
    }
}

impl ShapeGenerator for LineStringGenerator {
    fn family(&self) -> Family {
        Family::LineStrings
    }

    fn generate(&self, scene_length: f64, rng: &mut dyn RngCore) -> Result<Vec<Shape>> {
        if self.count == 0 || !usable_scene(scene_length) {
            return Ok(Vec::new());
        }

        let min_segments = self.min_segment_count.max(1);
        let max_segments = self.max_segment_count.max(min_segments);

        let mut out = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let segments = rand_int_inclusive(rng, min_segments, max_segments) as usize;
            let vertices = (0..=segments)
                .map(|_| random_in_scene(rng, scene_length))
                .collect();
            out.push(Shape::new(ShapeKind::LineString, vertices));
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
    fn segment_counts_fall_in_range() {
        let mut rng = StdRng::seed_from_u64(41);
        let lines = LineStringGenerator::new(300, 2, 5)
            .generate(25.0, &mut rng)
            .unwrap();
        assert_eq!(lines.len(), 300);
        for l in &lines {
            let segments = l.vertices.len() - 1;
            assert!((2..=5).contains(&segments));
            assert!(l.is_within_scene(25.0));
        }
    }

    #[test]
    fn single_segment_lines_have_two_vertices() {
        let mut rng = StdRng::seed_from_u64(42);
        let lines = LineStringGenerator::new(10, 1, 1)
            .generate(25.0, &mut rng)
            .unwrap();
        assert!(lines.iter().all(|l| l.vertices.len() == 2));
    }
}
