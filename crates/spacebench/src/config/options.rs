//! Options file codec.
//!
//! An options file holds one `key,value` pair per line. Keys come from a fixed
//! table and match case-insensitively; unknown keys are skipped. Decoding applies
//! onto a copy of a base configuration and only hands it back when every line
//! parsed, so a bad file never leaves a half-updated configuration behind.
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::config::Configuration;
use crate::error::{Error, Result};

#[derive(Clone, Copy)]
enum Slot {
    Float {
        get: fn(&Configuration) -> f64,
        set: fn(&mut Configuration, f64),
    },
    Int {
        get: fn(&Configuration) -> i32,
        set: fn(&mut Configuration, i32),
    },
    Bool {
        get: fn(&Configuration) -> bool,
        set: fn(&mut Configuration, bool),
    },
    Text {
        get: fn(&Configuration) -> String,
        set: fn(&mut Configuration, String),
    },
}

struct OptionKey {
    key: &'static str,
    /// Additional spellings accepted on read.
    aliases: &'static [&'static str],
    slot: Slot,
}

impl OptionKey {
    fn matches(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(key))
    }
}

macro_rules! slot {
    (Text, $($field:ident).+) => {
        Slot::Text {
            get: |c| c.$($field).+.clone(),
            set: |c, v| c.$($field).+ = v,
        }
    };
    ($kind:ident, $($field:ident).+) => {
        Slot::$kind {
            get: |c| c.$($field).+,
            set: |c, v| c.$($field).+ = v,
        }
    };
}

macro_rules! key {
    ($key:literal, $kind:ident, $($field:ident).+) => {
        OptionKey { key: $key, aliases: &[], slot: slot!($kind, $($field).+) }
    };
    ($key:literal | $($alias:literal)|+, $kind:ident, $($field:ident).+) => {
        OptionKey { key: $key, aliases: &[$($alias),+], slot: slot!($kind, $($field).+) }
    };
}

/// Every persisted option, in write order.
const OPTION_TABLE: &[OptionKey] = &[
    key!("SceneLength", Float, scene_length),
    key!("FilenamePrefix", Text, filename_prefix),
    key!("GeneratePointsFlag", Bool, points.enabled),
    key!("NumberOfPoints", Int, points.count),
    key!("UniquePointsFlag", Bool, points.unique),
    key!("GenerateSquaresFlag", Bool, squares.enabled),
    key!("NumberOfSquares", Int, squares.count),
    key!("MaximumSquareSideLength", Float, squares.max_side_length),
    key!("GenerateTrianglesFlag", Bool, triangles.enabled),
    key!("NumberOfTriangles", Int, triangles.count),
    key!("TriangleBBoxHeight", Float, triangles.bbox_height),
    key!("TriangleBBoxWidth", Float, triangles.bbox_width),
    key!("GeneratePolygonsFlag", Bool, polygons.enabled),
    key!("NumberOfPolygons", Int, polygons.count),
    key!("PolygonMaxVertexCount", Int, polygons.max_vertex_count),
    key!("PolygonBBoxLength", Int, polygons.bbox_length),
    key!("PolygonMinVertexCount", Int, polygons.min_vertex_count),
    key!("GenerateLineStringsFlag", Bool, line_strings.enabled),
    key!("NumberOfLineStrings", Int, line_strings.count),
    key!("LineStringMaxSegmentCount", Int, line_strings.max_segment_count),
    key!("LineStringMinSegmentCount", Int, line_strings.min_segment_count),
    key!("GenerateRandomWalkFlag", Bool, random_walks.enabled),
    key!("NumberOfRandomWalks", Int, random_walks.count),
    key!("MaximumStepLength", Float, random_walks.max_step_length),
    key!("NumberOfSteps", Int, random_walks.steps),
    key!("GenerateConicSpiralFlag", Bool, conic_spirals.enabled),
    key!("NumberOfConicSpirals", Int, conic_spirals.count),
    key!("MaximumRadiusLength", Float, conic_spirals.max_radius),
    key!("SegmentInc", Float, conic_spirals.segment_inc),
    key!("BaseRadius", Float, conic_spirals.radius),
    key!("AngleGapLower", Float, conic_spirals.angle_gap_lower),
    key!("AngleGapUpper", Float, conic_spirals.angle_gap_upper),
    key!(
        "midpointDisplacementFlag" | "GenerateMidPointDisplacemntFlag",
        Bool,
        midpoint_displacements.enabled
    ),
    key!(
        "NumberOfMidpointDisplacements" | "NumberOfMidPointDisplacemnts",
        Int,
        midpoint_displacements.count
    ),
    key!("RecursionDepth", Int, midpoint_displacements.recursion_depth),
    key!("DisplacementBound", Float, midpoint_displacements.displacement_bound),
    key!(
        "DisplacementBoundReduction",
        Float,
        midpoint_displacements.displacement_bound_reduction
    ),
    key!("theGenerateQSPolygonsFlag", Bool, quick_star_polygons.enabled),
    key!("theNumberOfQSPolygons", Int, quick_star_polygons.count),
    key!("theNumberOfQSVertices", Int, quick_star_polygons.vertex_count),
    key!("theStarRadius", Float, quick_star_polygons.star_radius),
];

/// Renders every option in the fixed key order, one `key,value` line each.
pub fn encode(cfg: &Configuration) -> String {
    let mut out = String::with_capacity(OPTION_TABLE.len() * 32);
    for entry in OPTION_TABLE {
        // Writing into a String cannot fail.
        let _ = match entry.slot {
            // Debug keeps a trailing ".0" on integral values and round-trips exactly.
            Slot::Float { get, .. } => writeln!(out, "{},{:?}", entry.key, get(cfg)),
            Slot::Int { get, .. } => writeln!(out, "{},{}", entry.key, get(cfg)),
            Slot::Bool { get, .. } => writeln!(out, "{},{}", entry.key, get(cfg)),
            Slot::Text { get, .. } => writeln!(out, "{},{}", entry.key, get(cfg)),
        };
    }
    out
}

/// Decodes an options text on top of the default configuration.
pub fn decode(text: &str) -> Result<Configuration> {
    decode_onto(&Configuration::default(), text)
}

/// Decodes an options text on top of `base`. `base` is left untouched on error.
pub fn decode_onto(base: &Configuration, text: &str) -> Result<Configuration> {
    let mut cfg = base.clone();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once(',') else {
            return Err(Error::MalformedOptionsLine {
                line: line_no,
                content: line.to_owned(),
            });
        };
        let key = key.trim();

        let Some(entry) = OPTION_TABLE.iter().find(|e| e.matches(key)) else {
            debug!("Ignoring unknown option '{}' on line {}.", key, line_no);
            continue;
        };

        match entry.slot {
            Slot::Float { set, .. } => set(&mut cfg, parse_number(line_no, key, value)?),
            Slot::Int { set, .. } => set(&mut cfg, parse_number(line_no, key, value)?),
            Slot::Bool { set, .. } => set(&mut cfg, value.trim().eq_ignore_ascii_case("true")),
            Slot::Text { set, .. } => set(&mut cfg, value.to_owned()),
        }
    }

    Ok(cfg)
}

fn parse_number<T: FromStr>(line: usize, key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| Error::InvalidOptionValue {
            line,
            key: key.to_owned(),
            value: value.to_owned(),
        })
}

/// Reads an options file on top of the default configuration.
pub fn load_options(path: impl AsRef<Path>) -> Result<Configuration> {
    load_options_onto(&Configuration::default(), path)
}

/// Reads an options file on top of `base`.
pub fn load_options_onto(base: &Configuration, path: impl AsRef<Path>) -> Result<Configuration> {
    let path = path.as_ref();
    debug!("Loading options from '{}'.", path.display());
    let text = fs::read_to_string(path)?;
    decode_onto(base, &text)
}

/// Writes `cfg` as an options file, replacing any existing file.
pub fn save_options(cfg: &Configuration, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    debug!("Saving options to '{}'.", path.display());
    fs::write(path, encode(cfg))?;
    Ok(())
}
