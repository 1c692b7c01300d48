//! Celestial bodies as described by initial-condition files
//!
//! A [`Body`] carries everything a record line holds: its kind, a render
//! radius used only for drawing, a colour token, mass, and 2D position and
//! velocity. The kind is fixed at construction; the physical state is open
//! for an external integrator to advance.

use cgmath::{InnerSpace, Vector2};
use std::fmt;

/// Kind of celestial body
///
/// Stars act as reference bodies for distance statistics; planets are the
/// sampled bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Star,
    Planet,
}

impl BodyKind {
    /// Lower-case record tag written at the start of every line
    pub fn tag(self) -> &'static str {
        match self {
            BodyKind::Star => "star",
            BodyKind::Planet => "planet",
        }
    }

    /// Whether bodies of this kind serve as the origin for distances
    pub fn is_reference(self) -> bool {
        matches!(self, BodyKind::Star)
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A star or planet in the simulated system
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    kind: BodyKind,
    /// Drawing radius in pixels, not a physical size
    pub render_radius: f64,
    /// Upper-case colour token
    pub color: String,
    pub mass: f64,
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
}

impl Body {
    /// Creates a body of the given kind
    ///
    /// The colour is normalised to upper case so that bodies built in code
    /// compare equal to bodies read from a file.
    pub fn new(
        kind: BodyKind,
        render_radius: f64,
        color: impl Into<String>,
        mass: f64,
        position: Vector2<f64>,
        velocity: Vector2<f64>,
    ) -> Self {
        Self {
            kind,
            render_radius,
            color: color.into().to_uppercase(),
            mass,
            position,
            velocity,
        }
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    pub fn is_reference(&self) -> bool {
        self.kind.is_reference()
    }

    /// Magnitude of the velocity vector
    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Euclidean distance between the two bodies' positions
    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }
}
