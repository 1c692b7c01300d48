//! Record codec for body lines
//!
//! One body per line, whitespace-delimited:
//!
//! ```text
//! Star   <radius> <color> <mass> <x> <y> <Vx> <Vy>
//! Planet <radius> <color> <mass> <x> <y> <Vx> <Vy>
//! ```
//!
//! The tag is matched case-insensitively. The radius is read as a real
//! number but written back as an integer, so it survives a round trip only
//! up to truncation. All other numbers are written in plain decimal notation
//! with enough digits to read back the exact same `f64`.

use crate::body::{Body, BodyKind};
use crate::error::ParseError;
use cgmath::Vector2;

/// Number of fields in a body record, tag included
pub const RECORD_FIELDS: usize = 8;

const FIELD_NAMES: [&str; RECORD_FIELDS] =
    ["tag", "radius", "color", "mass", "x", "y", "vx", "vy"];

impl BodyKind {
    /// Maps a record tag to a body kind, ignoring case
    pub fn from_tag(tag: &str) -> Option<BodyKind> {
        match tag.to_lowercase().as_str() {
            "star" => Some(BodyKind::Star),
            "planet" => Some(BodyKind::Planet),
            _ => None,
        }
    }
}

/// Parses one record line into a body of the expected kind
///
/// # Arguments
/// * `line` - Record line; surrounding whitespace is ignored
/// * `expected` - Kind the line's tag must name
///
/// # Returns
/// The parsed body, or a [`ParseError`] describing the first problem found.
/// Fields after the eighth are ignored.
pub fn parse_line(line: &str, expected: BodyKind) -> Result<Body, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < RECORD_FIELDS {
        return Err(ParseError::Format {
            expected: RECORD_FIELDS,
            found: fields.len(),
        });
    }

    if BodyKind::from_tag(fields[0]) != Some(expected) {
        return Err(ParseError::KindMismatch {
            expected,
            found: fields[0].to_string(),
        });
    }

    let number = |index: usize| parse_real(fields[index], FIELD_NAMES[index]);

    let render_radius = number(1)?;
    let color = fields[2];
    let mass = number(3)?;
    let position = Vector2::new(number(4)?, number(5)?);
    let velocity = Vector2::new(number(6)?, number(7)?);

    Ok(Body::new(
        expected,
        render_radius,
        color,
        mass,
        position,
        velocity,
    ))
}

/// Renders a body as a record line (without trailing newline)
pub fn format_line(body: &Body) -> String {
    format!(
        "{} {} {} {} {} {} {} {}",
        body.kind().tag(),
        body.render_radius.trunc(),
        body.color,
        body.mass,
        body.position.x,
        body.position.y,
        body.velocity.x,
        body.velocity.y,
    )
}

/// Reads a single real-valued field, naming it in the error
pub(crate) fn parse_real(value: &str, field: &'static str) -> Result<f64, ParseError> {
    value.parse::<f64>().map_err(|_| ParseError::Numeric {
        field,
        value: value.to_string(),
    })
}
