//! Kinematic statistics sampled during a simulation run
//!
//! Every sampled body (anything that is not a star) contributes one
//! [`Sample`] per recording call: its speed, its distance to the reference
//! body, and the simulation time. Samples are appended to a plain-text
//! [`StatisticsArtifact`], one `speed distance time` line each.
//!
//! ## Reference body
//!
//! Which star distances are measured from is an explicit
//! [`ReferencePolicy`] rather than an accident of iteration order. A body
//! set without any star cannot produce distances and is rejected with
//! [`OrreryError::MissingReference`]; no placeholder value is ever written.
//!
//! ## Writing
//!
//! - [`record_sample`] opens the artifact, appends, and closes it again on
//!   every call. Fine for occasional sampling.
//! - [`StatisticsRun`] resets the artifact once and keeps a buffered handle
//!   open for the whole run. Use it when sampling every step.

pub mod artifact;
pub mod recorder;

pub use artifact::StatisticsArtifact;
pub use recorder::{StatisticsRecorder, StatisticsRun};

use crate::body::Body;
use crate::codec::parse_real;
use crate::error::{OrreryError, ParseError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of fields in a statistics line
pub const SAMPLE_FIELDS: usize = 3;

/// One kinematic observation of a sampled body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub speed: f64,
    /// Distance to the reference body
    pub distance: f64,
    /// Simulation time the sample was taken at
    pub time: f64,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.speed, self.distance, self.time)
    }
}

/// Parses a `speed distance time` line
///
/// The line must hold exactly three real numbers. Blank and comment lines
/// are the caller's concern.
pub fn parse_statistics_line(line: &str) -> std::result::Result<Sample, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != SAMPLE_FIELDS {
        return Err(ParseError::Format {
            expected: SAMPLE_FIELDS,
            found: fields.len(),
        });
    }

    Ok(Sample {
        speed: parse_real(fields[0], "speed")?,
        distance: parse_real(fields[1], "distance")?,
        time: parse_real(fields[2], "time")?,
    })
}

/// How the reference body for distance statistics is chosen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReferencePolicy {
    /// Exactly one star must be present
    #[default]
    SingleStar,
    /// The last star in collection order wins when several are present
    LastStar,
    /// The body at this index is the reference, whatever its kind
    Index(usize),
}

impl ReferencePolicy {
    /// Resolves the reference body's index within `bodies`
    pub fn resolve(self, bodies: &[Body]) -> Result<usize> {
        match self {
            ReferencePolicy::SingleStar => {
                let mut stars = bodies
                    .iter()
                    .enumerate()
                    .filter(|(_, body)| body.is_reference());
                let first = stars.next().map(|(index, _)| index);
                let extra = stars.count();
                match (first, extra) {
                    (None, _) => Err(OrreryError::MissingReference),
                    (Some(index), 0) => Ok(index),
                    (Some(_), extra) => Err(OrreryError::AmbiguousReference(extra + 1)),
                }
            }
            ReferencePolicy::LastStar => bodies
                .iter()
                .rposition(|body| body.is_reference())
                .ok_or(OrreryError::MissingReference),
            ReferencePolicy::Index(index) if index < bodies.len() => Ok(index),
            ReferencePolicy::Index(index) => Err(OrreryError::ReferenceOutOfRange {
                index,
                len: bodies.len(),
            }),
        }
    }
}

impl FromStr for ReferencePolicy {
    type Err = String;

    /// Accepts `single`, `last`, or a body index
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(ReferencePolicy::SingleStar),
            "last" => Ok(ReferencePolicy::LastStar),
            other => other.parse::<usize>().map(ReferencePolicy::Index).map_err(|_| {
                format!("unknown reference policy `{s}` (expected single, last or a body index)")
            }),
        }
    }
}

/// Computes one sample per non-star body
///
/// # Arguments
/// * `bodies` - Current body set
/// * `time` - Simulation time stamped on every sample
/// * `policy` - Reference body selection
///
/// # Returns
/// Samples in collection order. A body set with nothing to sample yields an
/// empty vector without consulting the policy.
pub fn compute_samples(bodies: &[Body], time: f64, policy: ReferencePolicy) -> Result<Vec<Sample>> {
    if !bodies.iter().any(|body| !body.is_reference()) {
        return Ok(Vec::new());
    }

    let reference_index = policy.resolve(bodies)?;
    let reference = &bodies[reference_index];

    let samples = bodies
        .iter()
        .enumerate()
        .filter(|(index, body)| *index != reference_index && !body.is_reference())
        .map(|(_, body)| Sample {
            speed: body.speed(),
            distance: body.distance_to(reference),
            time,
        })
        .collect();

    Ok(samples)
}

/// Computes samples and appends them to the artifact in one call
///
/// Opens the artifact in append mode (creating it if absent) and closes it
/// before returning.
///
/// # Returns
/// Number of samples appended
pub fn record_sample(
    artifact: &StatisticsArtifact,
    bodies: &[Body],
    time: f64,
    policy: ReferencePolicy,
) -> Result<usize> {
    let samples = compute_samples(bodies, time, policy)?;
    artifact.append(&samples)?;
    Ok(samples.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyKind;
    use cgmath::Vector2;

    fn body(kind: BodyKind, x: f64, y: f64, vx: f64, vy: f64) -> Body {
        Body::new(kind, 1.0, "white", 1.0, Vector2::new(x, y), Vector2::new(vx, vy))
    }

    #[test]
    fn test_one_sample_per_planet() {
        let bodies = vec![
            body(BodyKind::Planet, 3.0, 4.0, 0.0, 0.0),
            body(BodyKind::Star, 0.0, 0.0, 0.0, 0.0),
            body(BodyKind::Planet, 0.0, -2.0, 6.0, 8.0),
        ];

        let samples = compute_samples(&bodies, 2.5, ReferencePolicy::SingleStar).unwrap();
        assert_eq!(samples.len(), bodies.len() - 1);
        assert_eq!(
            samples[0],
            Sample {
                speed: 0.0,
                distance: 5.0,
                time: 2.5
            }
        );
        assert_eq!(
            samples[1],
            Sample {
                speed: 10.0,
                distance: 2.0,
                time: 2.5
            }
        );
    }

    #[test]
    fn test_missing_star_fails_fast() {
        let bodies = vec![body(BodyKind::Planet, 1.0, 0.0, 0.0, 0.0)];
        for policy in [ReferencePolicy::SingleStar, ReferencePolicy::LastStar] {
            let err = compute_samples(&bodies, 0.0, policy).unwrap_err();
            assert!(matches!(err, OrreryError::MissingReference));
        }
    }

    #[test]
    fn test_nothing_to_sample_is_not_an_error() {
        assert!(compute_samples(&[], 0.0, ReferencePolicy::SingleStar)
            .unwrap()
            .is_empty());
        let stars = vec![
            body(BodyKind::Star, 0.0, 0.0, 0.0, 0.0),
            body(BodyKind::Star, 1.0, 0.0, 0.0, 0.0),
        ];
        assert!(compute_samples(&stars, 0.0, ReferencePolicy::SingleStar)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_several_stars_need_an_explicit_policy() {
        let bodies = vec![
            body(BodyKind::Star, 0.0, 0.0, 0.0, 0.0),
            body(BodyKind::Star, 10.0, 0.0, 0.0, 0.0),
            body(BodyKind::Planet, 7.0, 0.0, 0.0, 0.0),
        ];

        let err = compute_samples(&bodies, 0.0, ReferencePolicy::SingleStar).unwrap_err();
        assert!(matches!(err, OrreryError::AmbiguousReference(2)));

        let last = compute_samples(&bodies, 0.0, ReferencePolicy::LastStar).unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].distance, 3.0);

        let first = compute_samples(&bodies, 0.0, ReferencePolicy::Index(0)).unwrap();
        assert_eq!(first[0].distance, 7.0);
    }

    #[test]
    fn test_explicit_reference_is_not_sampled() {
        let bodies = vec![
            body(BodyKind::Planet, 0.0, 0.0, 1.0, 0.0),
            body(BodyKind::Planet, 0.0, 4.0, 0.0, 0.0),
        ];
        let samples = compute_samples(&bodies, 1.0, ReferencePolicy::Index(0)).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].distance, 4.0);

        let err = compute_samples(&bodies, 1.0, ReferencePolicy::Index(5)).unwrap_err();
        assert!(matches!(
            err,
            OrreryError::ReferenceOutOfRange { index: 5, len: 2 }
        ));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("single".parse::<ReferencePolicy>(), Ok(ReferencePolicy::SingleStar));
        assert_eq!("LAST".parse::<ReferencePolicy>(), Ok(ReferencePolicy::LastStar));
        assert_eq!("3".parse::<ReferencePolicy>(), Ok(ReferencePolicy::Index(3)));
        assert!("nearest".parse::<ReferencePolicy>().is_err());
    }

    #[test]
    fn test_statistics_line_round_trip() {
        let sample = Sample {
            speed: 29783.5,
            distance: 1.496e11,
            time: 86400.0,
        };
        assert_eq!(parse_statistics_line(&sample.to_string()).unwrap(), sample);
    }

    #[test]
    fn test_statistics_line_needs_three_reals() {
        assert_eq!(
            parse_statistics_line("1.0 2.0").unwrap_err(),
            ParseError::Format {
                expected: 3,
                found: 2
            }
        );
        assert!(parse_statistics_line("1 2 3 4").unwrap_err().is_format());
        assert!(matches!(
            parse_statistics_line("1 far 3").unwrap_err(),
            ParseError::Numeric {
                field: "distance",
                ..
            }
        ));
    }
}
