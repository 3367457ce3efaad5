//! Per-family validation of a [`Configuration`].
//!
//! Families are checked in a fixed order and only when enabled. Within a family the
//! first failing rule wins, and no later family is looked at once one has failed.
//! The messages are shown to users as-is.
use crate::config::{Configuration, Family};
use crate::error::ValidationError;

/// Largest recursion depth accepted by strict validation for midpoint displacements.
pub const MAX_RECURSION_DEPTH: i32 = 16;

/// Rule set applied by [`validate_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// The established rules, including the quick-star count check that stands in
    /// for a radius check, and no rules for midpoint displacements.
    #[default]
    Legacy,
    /// Legacy rules with the quick-star radius check corrected and the unchecked
    /// parameters covered.
    Strict,
}

/// Validates `cfg` with [`ValidationMode::Legacy`] rules.
pub fn validate(cfg: &Configuration) -> Result<(), ValidationError> {
    validate_with(cfg, ValidationMode::Legacy)
}

/// Validates `cfg`, returning the first failing rule.
pub fn validate_with(cfg: &Configuration, mode: ValidationMode) -> Result<(), ValidationError> {
    if mode == ValidationMode::Strict && !(cfg.scene_length.is_finite() && cfg.scene_length > 0.0)
    {
        return Err(ValidationError::scene("Scene length has to be > 0"));
    }

    for family in Family::ALL {
        if !cfg.is_enabled(family) {
            continue;
        }
        if let Some(message) = first_failure(cfg, family, mode) {
            return Err(ValidationError::new(family, message));
        }
    }
    Ok(())
}

fn first_failure(cfg: &Configuration, family: Family, mode: ValidationMode) -> Option<&'static str> {
    let scene = cfg.scene_length;
    let outside_scene = |v: f64| v <= 0.0 || v >= scene;

    match family {
        Family::Points => {
            let p = &cfg.points;
            check(p.count <= 0, "Points file must contain at least 1 element")
        }
        Family::Squares => {
            let s = &cfg.squares;
            check(s.count <= 0, "Squares file must contain at least 1 element").or(check(
                outside_scene(s.max_side_length),
                "Maximum square length has to be < scene length, and > 0",
            ))
        }
        Family::Triangles => {
            let t = &cfg.triangles;
            check(t.count <= 0, "Triangles file must contain at least 1 element")
                .or(check(
                    outside_scene(t.bbox_height),
                    "Maximum triangle height has to be < scene length, and > 0.",
                ))
                .or(check(
                    outside_scene(t.bbox_width),
                    "Maximum triangle width has to be < scene length, and > 0.",
                ))
        }
        Family::Polygons => {
            let p = &cfg.polygons;
            check(p.count <= 0, "Polygon file must contain at least 1 element")
                .or(check(
                    p.max_vertex_count < 3,
                    "Polygons must have at least 3 verticies.",
                ))
                .or(check(
                    p.min_vertex_count < 3,
                    "Polygons must have at least 3 verticies.",
                ))
                .or(check(
                    p.min_vertex_count > p.max_vertex_count,
                    "The Minimum Vertex Count should not be more than the Maximum.",
                ))
                .or(check(
                    outside_scene(f64::from(p.bbox_length)),
                    "Maximum polygon width has to be < scene length, and > 0.",
                ))
        }
        Family::LineStrings => {
            let l = &cfg.line_strings;
            check(l.count <= 0, "Line string file must contain at least 1 element")
                .or(check(
                    l.max_segment_count < 1,
                    "LineStrings must have at least 1 segments.",
                ))
                .or(check(
                    l.min_segment_count < 1,
                    "LineStrings must have at least 1 segments.",
                ))
                .or(check(
                    l.max_segment_count < l.min_segment_count,
                    "The Minimum Segment Count must not be more than the Maximum.",
                ))
        }
        Family::RandomWalks => {
            let w = &cfg.random_walks;
            check(w.count <= 0, "Random Walk file must contain at least 1 element")
                .or(check(
                    outside_scene(w.max_step_length),
                    "Maximum step length has to be < scene length, and > 0",
                ))
                .or(check(
                    w.steps <= 2 || f64::from(w.steps) >= scene,
                    "The number of steps has to be < scene length, and > 2",
                ))
        }
        Family::ConicSpirals => {
            let c = &cfg.conic_spirals;
            let legacy = check(c.count <= 0, "Conic Spiral file must contain at least 1 element")
                .or(check(
                    outside_scene(c.max_radius),
                    "Maximum radius length has to be < scene length, and > 0",
                ))
                .or(check(
                    c.segment_inc < 10.0 || c.segment_inc > 50.0,
                    "Segment increment has to be > 10 and < 50",
                ))
                .or(check(
                    c.radius < 0.0 || c.radius > c.max_radius,
                    "Radius has to be > 0 and < Maximum radius length",
                ));
            match mode {
                ValidationMode::Legacy => legacy,
                ValidationMode::Strict => legacy.or(check(
                    c.angle_gap_lower > c.angle_gap_upper,
                    "The lower angle gap must not be more than the upper.",
                )),
            }
        }
        Family::MidpointDisplacements => match mode {
            ValidationMode::Legacy => None,
            ValidationMode::Strict => {
                let m = &cfg.midpoint_displacements;
                check(
                    m.count <= 0,
                    "Midpoint Displacement file must contain at least 1 element",
                )
                .or(check(
                    m.recursion_depth < 0 || m.recursion_depth > MAX_RECURSION_DEPTH,
                    "Recursion depth has to be >= 0 and <= 16",
                ))
                .or(check(
                    outside_scene(m.displacement_bound),
                    "Displacement bound has to be < scene length, and > 0",
                ))
                .or(check(
                    m.displacement_bound_reduction <= 0.0 || m.displacement_bound_reduction > 1.0,
                    "Displacement bound reduction has to be > 0 and <= 1",
                ))
            }
        },
        Family::QuickStarPolygons => {
            let q = &cfg.quick_star_polygons;
            let count = check(
                q.count <= 0,
                "Quick-Star Polygon file must contain at least 1 element",
            );
            match mode {
                // The second rule re-checks the polygon count against the scene length.
                ValidationMode::Legacy => count.or(check(
                    q.count <= 0 || f64::from(q.count) >= scene,
                    "Maximum radius length has to be < scene length, and > 0",
                )),
                ValidationMode::Strict => count
                    .or(check(
                        q.vertex_count <= 0,
                        "Quick-Star Polygons must have at least 1 vertex",
                    ))
                    .or(check(
                        outside_scene(q.star_radius),
                        "Star radius has to be < scene length, and > 0",
                    )),
            }
        }
    }
}

#[inline]
fn check(failed: bool, message: &'static str) -> Option<&'static str> {
    failed.then_some(message)
}
