//! Generated shape records.
//!
//! A [`Shape`] is one generated instance: a [`ShapeKind`] tag plus its ordered
//! vertices. How the vertices are read depends on the kind (a single point, the
//! corners of a ring, or the vertices of an open path).
use glam::DVec2;

use crate::config::Family;

pub mod format;

/// Tag carried by every generated record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Square,
    Triangle,
    Polygon,
    LineString,
    RandomWalk,
    ConicSpiral,
    MidpointDisplacement,
    QuickStarPolygon,
}

impl ShapeKind {
    /// Kind produced by the generator of `family`.
    pub fn for_family(family: Family) -> Self {
        match family {
            Family::Points => ShapeKind::Point,
            Family::Squares => ShapeKind::Square,
            Family::Triangles => ShapeKind::Triangle,
            Family::Polygons => ShapeKind::Polygon,
            Family::LineStrings => ShapeKind::LineString,
            Family::RandomWalks => ShapeKind::RandomWalk,
            Family::ConicSpirals => ShapeKind::ConicSpiral,
            Family::MidpointDisplacements => ShapeKind::MidpointDisplacement,
            Family::QuickStarPolygons => ShapeKind::QuickStarPolygon,
        }
    }
}

/// One generated shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub vertices: Vec<DVec2>,
}

impl Shape {
    pub fn new(kind: ShapeKind, vertices: Vec<DVec2>) -> Self {
        Self { kind, vertices }
    }

    pub fn point(p: DVec2) -> Self {
        Self::new(ShapeKind::Point, vec![p])
    }

    /// Axis-aligned min/max corners, or `None` for a shape without vertices.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }

    /// Whether every vertex lies in `[0, scene_length)` on both axes.
    pub fn is_within_scene(&self, scene_length: f64) -> bool {
        self.vertices
            .iter()
            .all(|v| v.x >= 0.0 && v.x < scene_length && v.y >= 0.0 && v.y < scene_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_all_vertices() {
        let shape = Shape::new(
            ShapeKind::Triangle,
            vec![
                DVec2::new(1.0, 5.0),
                DVec2::new(4.0, 2.0),
                DVec2::new(3.0, 7.0),
            ],
        );
        assert_eq!(
            shape.bounds(),
            Some((DVec2::new(1.0, 2.0), DVec2::new(4.0, 7.0)))
        );
        assert!(Shape::new(ShapeKind::LineString, Vec::new()).bounds().is_none());
    }

    #[test]
    fn scene_containment_is_half_open() {
        assert!(Shape::point(DVec2::new(0.0, 9.999)).is_within_scene(10.0));
        assert!(!Shape::point(DVec2::new(10.0, 0.0)).is_within_scene(10.0));
        assert!(!Shape::point(DVec2::new(-0.1, 0.0)).is_within_scene(10.0));
    }

    #[test]
    fn kinds_map_from_families() {
        assert_eq!(
            ShapeKind::for_family(Family::QuickStarPolygons),
            ShapeKind::QuickStarPolygon
        );
    }
}
