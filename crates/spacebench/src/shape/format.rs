//! Text notation for generated records: `<TAG> (x1 y1, x2 y2, ..., xn yn)`.
//!
//! Coordinates are cut, not rounded, to the configured number of decimals, so a
//! value below the scene length never prints as the scene length itself.
use std::io;

use crate::shape::{Shape, ShapeKind};

/// Which tag quick-star polygon lines carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TagStyle {
    /// Quick-star polygons are written with the `CONIC-SPIRAL` tag, as existing
    /// consumers of these files expect.
    #[default]
    Legacy,
    /// Every kind gets its own tag.
    PerFamily,
}

/// Decimals written per coordinate unless configured otherwise.
pub const DEFAULT_PRECISION: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    /// Digits after the decimal point.
    pub precision: usize,
    pub tag_style: TagStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            tag_style: TagStyle::Legacy,
        }
    }
}

impl FormatOptions {
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_tag_style(mut self, tag_style: TagStyle) -> Self {
        self.tag_style = tag_style;
        self
    }
}

/// Renders shapes one per line.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecordFormatter {
    pub options: FormatOptions,
}

impl RecordFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn tag(&self, kind: ShapeKind) -> &'static str {
        match kind {
            ShapeKind::Point => "POINT",
            ShapeKind::Square => "SQUARE",
            ShapeKind::Triangle => "TRIANGLE",
            ShapeKind::Polygon => "POLYGON",
            ShapeKind::LineString => "LINESTRING",
            ShapeKind::RandomWalk => "RANDOM-WALK",
            ShapeKind::ConicSpiral => "CONIC-SPIRAL",
            ShapeKind::MidpointDisplacement => "MIDPOINT-DISPLACEMENT",
            ShapeKind::QuickStarPolygon => match self.options.tag_style {
                TagStyle::Legacy => "CONIC-SPIRAL",
                TagStyle::PerFamily => "QUICK-STAR-POLYGON",
            },
        }
    }

    /// Formats `shape` as a single line, including the trailing newline.
    pub fn format(&self, shape: &Shape) -> String {
        let precision = self.options.precision;
        let mut line = String::with_capacity(16 + shape.vertices.len() * (2 * precision + 10));
        line.push_str(self.tag(shape.kind));
        line.push_str(" (");
        for (i, v) in shape.vertices.iter().enumerate() {
            if i > 0 {
                line.push_str(", ");
            }
            push_coordinate(&mut line, v.x, precision);
            line.push(' ');
            push_coordinate(&mut line, v.y, precision);
        }
        line.push_str(")\n");
        line
    }

    /// Writes the formatted line for `shape` to `out`.
    pub fn write_record<W: io::Write + ?Sized>(&self, out: &mut W, shape: &Shape) -> io::Result<()> {
        out.write_all(self.format(shape).as_bytes())
    }
}

/// Formats `value` with exactly `precision` decimals, truncated toward zero.
pub fn format_coordinate(value: f64, precision: usize) -> String {
    let mut out = String::new();
    push_coordinate(&mut out, value, precision);
    out
}

fn push_coordinate(out: &mut String, value: f64, precision: usize) {
    if !value.is_finite() {
        out.push_str(&value.to_string());
        return;
    }

    // Display prints the shortest decimal that reads back as `value` and never
    // switches to exponent notation. That decimal lies strictly between the
    // neighbouring floats, so cutting digits off it cannot cross a bound `value`
    // is below.
    let repr = value.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let frac: String = frac_part
        .chars()
        .chain(std::iter::repeat('0'))
        .take(precision)
        .collect();

    let digits = int_part.trim_start_matches('-');
    let is_zero = digits.bytes().all(|b| b == b'0') && frac.bytes().all(|b| b == b'0');
    out.push_str(if is_zero { digits } else { int_part });
    if precision > 0 {
        out.push('.');
        out.push_str(&frac);
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;

    #[test]
    fn formats_tag_and_fixed_precision_coordinates() {
        let shape = Shape::new(
            ShapeKind::Square,
            vec![
                DVec2::new(1.0, 2.0),
                DVec2::new(3.5, 2.0),
                DVec2::new(3.5, 4.5),
                DVec2::new(1.0, 4.5),
            ],
        );
        assert_eq!(
            RecordFormatter::default().format(&shape),
            "SQUARE (1.000000 2.000000, 3.500000 2.000000, 3.500000 4.500000, 1.000000 4.500000)\n"
        );
    }

    #[test]
    fn quick_star_tag_depends_on_style() {
        let shape = Shape::new(ShapeKind::QuickStarPolygon, vec![DVec2::new(0.25, 0.75)]);
        let legacy = RecordFormatter::default();
        let per_family =
            RecordFormatter::new(FormatOptions::default().with_tag_style(TagStyle::PerFamily));
        assert_eq!(legacy.format(&shape), "CONIC-SPIRAL (0.250000 0.750000)\n");
        assert_eq!(
            per_family.format(&shape),
            "QUICK-STAR-POLYGON (0.250000 0.750000)\n"
        );
    }

    #[test]
    fn precision_is_configurable() {
        let formatter = RecordFormatter::new(FormatOptions::default().with_precision(2));
        let line = formatter.format(&Shape::point(DVec2::new(1.0 / 3.0, 2.0)));
        assert_eq!(line, "POINT (0.33 2.00)\n");
    }

    #[test]
    fn coordinates_just_below_a_bound_do_not_print_as_the_bound() {
        let below = f64::from_bits(50.0_f64.to_bits() - 1);
        assert_eq!(format_coordinate(below, 6), "49.999999");
        assert_eq!(format_coordinate(below, 0), "49");
        assert_eq!(format_coordinate(0.999_999_9, 6), "0.999999");
        assert_eq!(format_coordinate(2.0 / 3.0, 3), "0.666");
    }

    #[test]
    fn coordinate_formatting_pads_and_keeps_sign() {
        assert_eq!(format_coordinate(12.5, 3), "12.500");
        assert_eq!(format_coordinate(-1.25, 1), "-1.2");
        assert_eq!(format_coordinate(-1.0e-9, 6), "0.000000");
        assert_eq!(format_coordinate(1.0e-7, 6), "0.000000");
        assert_eq!(format_coordinate(1.0e21, 1), "1000000000000000000000.0");
    }

    #[test]
    fn write_record_appends_lines() {
        let formatter = RecordFormatter::default();
        let mut out = Vec::new();
        formatter
            .write_record(&mut out, &Shape::point(DVec2::new(1.0, 1.0)))
            .unwrap();
        formatter
            .write_record(&mut out, &Shape::new(ShapeKind::LineString, Vec::new()))
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "POINT (1.000000 1.000000)\nLINESTRING ()\n"
        );
    }
}
