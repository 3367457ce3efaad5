//! Randomized shape generators, one per [`Family`].
//!
//! Every generator draws from the random source it is handed and nothing else, so a
//! seeded source gives a reproducible sequence of shapes. Generators do not write
//! anything; formatting and output belong to [`crate::shape::format`] and
//! [`crate::run`].
use glam::DVec2;
use rand::Rng as RngCore;

use crate::config::{Configuration, Family};
use crate::error::Result;
use crate::shape::format::FormatOptions;
use crate::shape::Shape;

pub mod conic_spiral;
pub mod line_string;
pub mod midpoint_displacement;
pub mod point;
pub mod polygon;
pub mod quick_star;
pub mod random_walk;
pub mod square;
pub mod triangle;

pub use conic_spiral::ConicSpiralGenerator;
pub use line_string::LineStringGenerator;
pub use midpoint_displacement::MidpointDisplacementGenerator;
pub use point::PointGenerator;
pub use polygon::PolygonGenerator;
pub use quick_star::QuickStarPolygonGenerator;
pub use random_walk::RandomWalkGenerator;
pub use square::SquareGenerator;
pub use triangle::TriangleGenerator;

/// Trait for shape generation inside a square scene.
pub trait ShapeGenerator: Send + Sync {
    /// Family this generator produces shapes for.
    fn family(&self) -> Family;

    /// Generates the configured number of shapes in `[0, scene_length)^2`.
    ///
    /// A non-positive or non-finite `scene_length` yields no shapes.
    fn generate(&self, scene_length: f64, rng: &mut dyn RngCore) -> Result<Vec<Shape>>;
}

/// Builds the generator for `family` from its slice of `cfg`, for output in the
/// default format.
pub fn generator_for(cfg: &Configuration, family: Family) -> Box<dyn ShapeGenerator> {
    generator_with_format(cfg, family, &FormatOptions::default())
}

/// Builds the generator for `family` for records written with `format`. Unique
/// points are told the output precision so they stay distinct once printed.
pub fn generator_with_format(
    cfg: &Configuration,
    family: Family,
    format: &FormatOptions,
) -> Box<dyn ShapeGenerator> {
    match family {
        Family::Points => Box::new(
            PointGenerator::from_options(&cfg.points).with_precision(format.precision),
        ),
        Family::Squares => Box::new(SquareGenerator::from_options(&cfg.squares)),
        Family::Triangles => Box::new(TriangleGenerator::from_options(&cfg.triangles)),
        Family::Polygons => Box::new(PolygonGenerator::from_options(&cfg.polygons)),
        Family::LineStrings => Box::new(LineStringGenerator::from_options(&cfg.line_strings)),
        Family::RandomWalks => Box::new(RandomWalkGenerator::from_options(&cfg.random_walks)),
        Family::ConicSpirals => Box::new(ConicSpiralGenerator::from_options(&cfg.conic_spirals)),
        Family::MidpointDisplacements => Box::new(MidpointDisplacementGenerator::from_options(
            &cfg.midpoint_displacements,
        )),
        Family::QuickStarPolygons => Box::new(QuickStarPolygonGenerator::from_options(
            &cfg.quick_star_polygons,
        )),
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    // 53 random mantissa bits.
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Generate a random float in `[lo, hi)`; returns `lo` when the range is empty.
#[inline]
pub(crate) fn rand_range(rng: &mut dyn RngCore, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return lo;
    }
    lo + rand01(rng) * (hi - lo)
}

/// Generate a random integer in `[lo, hi]`, uniformly. Bounds may be given in any order.
#[inline]
pub(crate) fn rand_int_inclusive(rng: &mut dyn RngCore, lo: i32, hi: i32) -> i32 {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let span = (i64::from(hi) - i64::from(lo) + 1) as f64;
    let offset = (rand01(rng) * span) as i64;
    (i64::from(lo) + offset).min(i64::from(hi)) as i32
}

/// Compute the next smaller representable float value.
///
/// Returns a value that is strictly less than the input, used to keep coordinates
/// strictly inside the scene's upper edges.
#[inline]
pub(crate) fn next_down(val: f64) -> f64 {
    if val.is_nan() {
        return f64::NAN;
    }

    if val == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }

    if val == f64::INFINITY {
        return f64::MAX;
    }

    if val == 0.0 {
        return -f64::MIN_POSITIVE;
    }

    let bits = val.to_bits();
    if val > 0.0 {
        f64::from_bits(bits.saturating_sub(1))
    } else {
        f64::from_bits(bits.saturating_add(1))
    }
}

/// Clamp `p` into `[0, scene_length)` on both axes.
#[inline]
pub(crate) fn clamp_to_scene(p: DVec2, scene_length: f64) -> DVec2 {
    let max = next_down(scene_length).max(0.0);
    DVec2::new(p.x.clamp(0.0, max), p.y.clamp(0.0, max))
}

/// Uniform random position in the scene.
#[inline]
pub(crate) fn random_in_scene(rng: &mut dyn RngCore, scene_length: f64) -> DVec2 {
    let x = rand01(rng) * scene_length;
    let y = rand01(rng) * scene_length;
    clamp_to_scene(DVec2::new(x, y), scene_length)
}

#[inline]
pub(crate) fn usable_scene(scene_length: f64) -> bool {
    scene_length.is_finite() && scene_length > 0.0
}

/// Converts a configured count into a shape count; negative counts produce nothing.
#[inline]
pub(crate) fn shape_count(count: i32) -> usize {
    count.max(0) as usize
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn rand01_stays_in_half_open_unit_interval() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..10_000 {
            let u = rand01(&mut rng);
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn rand_int_inclusive_hits_both_ends() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 4];
        for _ in 0..2_000 {
            let v = rand_int_inclusive(&mut rng, 3, 6);
            assert!((3..=6).contains(&v));
            seen[(v - 3) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
        assert_eq!(rand_int_inclusive(&mut rng, 4, 4), 4);
        assert!((2..=5).contains(&rand_int_inclusive(&mut rng, 5, 2)));
    }

    #[test]
    fn next_down_handles_edge_cases() {
        assert!(next_down(1.0) < 1.0);
        assert!(next_down(100.0) < 100.0);
        assert_eq!(next_down(0.0), -f64::MIN_POSITIVE);
        assert!(next_down(-1.0) < -1.0);
        assert_eq!(next_down(f64::INFINITY), f64::MAX);
        assert_eq!(next_down(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(next_down(f64::NAN).is_nan());
    }

    #[test]
    fn clamp_keeps_points_strictly_below_scene_edge() {
        let p = clamp_to_scene(DVec2::new(10.0, -3.0), 10.0);
        assert!(p.x < 10.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn generator_for_reports_requested_family() {
        let cfg = Configuration::default();
        for family in Family::ALL {
            assert_eq!(generator_for(&cfg, family).family(), family);
        }
    }

    #[test]
    fn every_family_produces_count_shapes_inside_scene_for_defaults() {
        let cfg = Configuration::default();
        let mut rng = StdRng::seed_from_u64(2025);
        for family in Family::ALL {
            let shapes = generator_for(&cfg, family)
                .generate(cfg.scene_length, &mut rng)
                .unwrap();
            assert_eq!(shapes.len(), cfg.count(family) as usize, "{family}");
            if family != Family::QuickStarPolygons {
                assert!(
                    shapes.iter().all(|s| s.is_within_scene(cfg.scene_length)),
                    "{family} left the scene"
                );
            }
        }
    }

    #[test]
    fn unusable_scene_yields_nothing() {
        let cfg = Configuration::default();
        let mut rng = StdRng::seed_from_u64(1);
        for family in Family::ALL {
            let generator = generator_for(&cfg, family);
            assert!(generator.generate(0.0, &mut rng).unwrap().is_empty());
            assert!(generator.generate(f64::NAN, &mut rng).unwrap().is_empty());
        }
    }
}
