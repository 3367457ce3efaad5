//! Run configuration for the generation engine.
//!
//! A [`Configuration`] holds the scene settings plus one options group per shape
//! [`Family`]. It is created with defaults, optionally overwritten from an options
//! file (see [`options`]), checked once by [`validate`], and then read by the
//! generators without further mutation.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod options;
pub mod validate;

/// One of the nine shape categories the engine can generate.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    Points,
    Squares,
    Triangles,
    Polygons,
    LineStrings,
    RandomWalks,
    ConicSpirals,
    MidpointDisplacements,
    QuickStarPolygons,
}

impl Family {
    /// All families in run order.
    pub const ALL: [Family; 9] = [
        Family::Points,
        Family::Squares,
        Family::Triangles,
        Family::Polygons,
        Family::LineStrings,
        Family::RandomWalks,
        Family::ConicSpirals,
        Family::MidpointDisplacements,
        Family::QuickStarPolygons,
    ];

    /// File name component used for `<prefix><stem>.txt`.
    pub fn file_stem(self) -> &'static str {
        match self {
            Family::Points => "Points",
            Family::Squares => "Squares",
            Family::Triangles => "Triangles",
            Family::Polygons => "Polygons",
            Family::LineStrings => "LineStrings",
            Family::RandomWalks => "RandomWalks",
            Family::ConicSpirals => "ConicSpirals",
            Family::MidpointDisplacements => "MidpointDisplacements",
            Family::QuickStarPolygons => "Quick-StarPolygons",
        }
    }

    /// Lowercase plural name used in log lines and messages.
    pub fn name(self) -> &'static str {
        match self {
            Family::Points => "points",
            Family::Squares => "squares",
            Family::Triangles => "triangles",
            Family::Polygons => "polygons",
            Family::LineStrings => "line strings",
            Family::RandomWalks => "random walks",
            Family::ConicSpirals => "conic spirals",
            Family::MidpointDisplacements => "midpoint displacements",
            Family::QuickStarPolygons => "quick-star polygons",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct PointOptions {
    pub enabled: bool,
    pub count: i32,
    /// Reject coinciding points and resample them.
    pub unique: bool,
}

impl Default for PointOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 100,
            unique: false,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SquareOptions {
    pub enabled: bool,
    pub count: i32,
    pub max_side_length: f64,
}

impl Default for SquareOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 100,
            max_side_length: 10.0,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleOptions {
    pub enabled: bool,
    pub count: i32,
    pub bbox_height: f64,
    pub bbox_width: f64,
}

impl Default for TriangleOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 100,
            bbox_height: 10.0,
            bbox_width: 10.0,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonOptions {
    pub enabled: bool,
    pub count: i32,
    pub max_vertex_count: i32,
    pub min_vertex_count: i32,
    /// Side of the square box each polygon must fit in.
    pub bbox_length: i32,
}

impl Default for PolygonOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 100,
            max_vertex_count: 10,
            min_vertex_count: 3,
            bbox_length: 10,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct LineStringOptions {
    pub enabled: bool,
    pub count: i32,
    pub max_segment_count: i32,
    pub min_segment_count: i32,
}

impl Default for LineStringOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 100,
            max_segment_count: 10,
            min_segment_count: 1,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct RandomWalkOptions {
    pub enabled: bool,
    pub count: i32,
    pub max_step_length: f64,
    pub steps: i32,
}

impl Default for RandomWalkOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 100,
            max_step_length: 10.0,
            steps: 50,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ConicSpiralOptions {
    pub enabled: bool,
    pub count: i32,
    pub max_radius: f64,
    /// Number of segments sampled along each spiral.
    pub segment_inc: f64,
    /// Radius the spiral starts at.
    pub radius: f64,
    /// Angle advance per segment, in degrees.
    pub angle_gap_lower: f64,
    pub angle_gap_upper: f64,
}

impl Default for ConicSpiralOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 100,
            max_radius: 50.0,
            segment_inc: 20.0,
            radius: 1.0,
            angle_gap_lower: 10.0,
            angle_gap_upper: 30.0,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct MidpointDisplacementOptions {
    pub enabled: bool,
    pub count: i32,
    pub recursion_depth: i32,
    pub displacement_bound: f64,
    /// Factor applied to the displacement bound after each recursion level.
    pub displacement_bound_reduction: f64,
}

impl Default for MidpointDisplacementOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 100,
            recursion_depth: 5,
            displacement_bound: 10.0,
            displacement_bound_reduction: 0.5,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct QuickStarPolygonOptions {
    pub enabled: bool,
    pub count: i32,
    pub vertex_count: i32,
    pub star_radius: f64,
}

impl Default for QuickStarPolygonOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 10,
            vertex_count: 4,
            star_radius: 100.0,
        }
    }
}

/// Complete settings for one generation run.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Configuration {
    /// Side of the square scene `[0, scene_length) x [0, scene_length)`.
    pub scene_length: f64,
    /// Prepended to every data file name.
    pub filename_prefix: String,
    pub points: PointOptions,
    pub squares: SquareOptions,
    pub triangles: TriangleOptions,
    pub polygons: PolygonOptions,
    pub line_strings: LineStringOptions,
    pub random_walks: RandomWalkOptions,
    pub conic_spirals: ConicSpiralOptions,
    pub midpoint_displacements: MidpointDisplacementOptions,
    pub quick_star_polygons: QuickStarPolygonOptions,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            scene_length: 1000.0,
            filename_prefix: String::new(),
            points: PointOptions::default(),
            squares: SquareOptions::default(),
            triangles: TriangleOptions::default(),
            polygons: PolygonOptions::default(),
            line_strings: LineStringOptions::default(),
            random_walks: RandomWalkOptions::default(),
            conic_spirals: ConicSpiralOptions::default(),
            midpoint_displacements: MidpointDisplacementOptions::default(),
            quick_star_polygons: QuickStarPolygonOptions::default(),
        }
    }
}

impl Configuration {
    /// Creates a default configuration with the given scene length.
    pub fn new(scene_length: f64) -> Self {
        Self {
            scene_length,
            ..Default::default()
        }
    }

    /// Sets the data file prefix.
    pub fn with_filename_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.filename_prefix = prefix.into();
        self
    }

    /// Disables every family; combine with [`Configuration::with_enabled`] to pick a few.
    pub fn with_all_disabled(mut self) -> Self {
        for family in Family::ALL {
            self.set_enabled(family, false);
        }
        self
    }

    /// Enables or disables a single family.
    pub fn with_enabled(mut self, family: Family, enabled: bool) -> Self {
        self.set_enabled(family, enabled);
        self
    }

    pub fn is_enabled(&self, family: Family) -> bool {
        match family {
            Family::Points => self.points.enabled,
            Family::Squares => self.squares.enabled,
            Family::Triangles => self.triangles.enabled,
            Family::Polygons => self.polygons.enabled,
            Family::LineStrings => self.line_strings.enabled,
            Family::RandomWalks => self.random_walks.enabled,
            Family::ConicSpirals => self.conic_spirals.enabled,
            Family::MidpointDisplacements => self.midpoint_displacements.enabled,
            Family::QuickStarPolygons => self.quick_star_polygons.enabled,
        }
    }

    pub fn set_enabled(&mut self, family: Family, enabled: bool) {
        let flag = match family {
            Family::Points => &mut self.points.enabled,
            Family::Squares => &mut self.squares.enabled,
            Family::Triangles => &mut self.triangles.enabled,
            Family::Polygons => &mut self.polygons.enabled,
            Family::LineStrings => &mut self.line_strings.enabled,
            Family::RandomWalks => &mut self.random_walks.enabled,
            Family::ConicSpirals => &mut self.conic_spirals.enabled,
            Family::MidpointDisplacements => &mut self.midpoint_displacements.enabled,
            Family::QuickStarPolygons => &mut self.quick_star_polygons.enabled,
        };
        *flag = enabled;
    }

    /// Number of shapes requested for a family.
    pub fn count(&self, family: Family) -> i32 {
        match family {
            Family::Points => self.points.count,
            Family::Squares => self.squares.count,
            Family::Triangles => self.triangles.count,
            Family::Polygons => self.polygons.count,
            Family::LineStrings => self.line_strings.count,
            Family::RandomWalks => self.random_walks.count,
            Family::ConicSpirals => self.conic_spirals.count,
            Family::MidpointDisplacements => self.midpoint_displacements.count,
            Family::QuickStarPolygons => self.quick_star_polygons.count,
        }
    }

    /// Enabled families in run order.
    pub fn enabled_families(&self) -> Vec<Family> {
        Family::ALL
            .into_iter()
            .filter(|f| self.is_enabled(*f))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_quick_star_form_values() {
        let cfg = Configuration::default();
        assert!(cfg.quick_star_polygons.enabled);
        assert_eq!(cfg.quick_star_polygons.count, 10);
        assert_eq!(cfg.quick_star_polygons.vertex_count, 4);
        assert_eq!(cfg.quick_star_polygons.star_radius, 100.0);
    }

    #[test]
    fn builder_toggles_individual_families() {
        let cfg = Configuration::new(50.0)
            .with_all_disabled()
            .with_enabled(Family::Squares, true);
        assert_eq!(cfg.scene_length, 50.0);
        assert_eq!(cfg.enabled_families(), vec![Family::Squares]);
        assert!(!cfg.is_enabled(Family::Points));
    }

    #[test]
    fn count_reads_the_matching_group() {
        let mut cfg = Configuration::default();
        cfg.line_strings.count = 7;
        cfg.midpoint_displacements.count = 3;
        assert_eq!(cfg.count(Family::LineStrings), 7);
        assert_eq!(cfg.count(Family::MidpointDisplacements), 3);
    }

    #[test]
    fn family_names_are_stable() {
        assert_eq!(Family::QuickStarPolygons.file_stem(), "Quick-StarPolygons");
        assert_eq!(Family::LineStrings.to_string(), "line strings");
        assert_eq!(Family::ALL.len(), 9);
        assert_eq!(Family::ALL[0], Family::Points);
        assert_eq!(Family::ALL[8], Family::QuickStarPolygons);
    }
}
