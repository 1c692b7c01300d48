//! Body collection loading and saving
//!
//! Reads initial-condition files line by line, skipping blank lines and
//! `#` comments, and dispatches every other line to the record codec by its
//! leading tag. Two policies are offered:
//!
//! - [`load`] stops at the first malformed star or planet line
//! - [`load_lenient`] keeps going and returns a [`LoadReport`] listing every
//!   problem next to the bodies that did parse
//!
//! Lines with an unrecognised tag never abort a load; they are logged and
//! reported as diagnostics.

use crate::body::{Body, BodyKind};
use crate::codec::{format_line, parse_line};
use crate::error::{OrreryError, ParseError, Result};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Whether a line carries no record (blank or `#` comment)
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// A problem found on one line of a body file
#[derive(Debug, Clone, PartialEq)]
pub struct LineDiagnostic {
    /// 1-based line number
    pub line: usize,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    /// Leading tag is neither `star` nor `planet`; the line was ignored
    UnknownKind { tag: String },
    /// A star or planet line failed to parse
    Parse(ParseError),
}

/// Outcome of a lenient load
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Successfully parsed bodies in file order
    pub bodies: Vec<Body>,
    /// Per-line problems in file order
    pub diagnostics: Vec<LineDiagnostic>,
}

impl LoadReport {
    /// True when every non-comment line produced a body
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of star or planet lines that failed to parse
    pub fn parse_failures(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.kind, DiagnosticKind::Parse(_)))
            .count()
    }

    /// Applies the strict policy after the fact
    ///
    /// Unknown tags are tolerated; the first parse failure becomes an error.
    pub fn into_strict(self) -> Result<Vec<Body>> {
        for diagnostic in self.diagnostics {
            if let DiagnosticKind::Parse(source) = diagnostic.kind {
                return Err(OrreryError::Parse {
                    line: diagnostic.line,
                    source,
                });
            }
        }
        Ok(self.bodies)
    }
}

enum LineRecord {
    Body(Body),
    Unknown(String),
}

fn read_record(line: &str) -> Option<std::result::Result<LineRecord, ParseError>> {
    if is_skippable(line) {
        return None;
    }

    // Non-skippable lines always have at least one token.
    let tag = line.split_whitespace().next().unwrap_or_default();
    let record = match BodyKind::from_tag(tag) {
        Some(kind) => parse_line(line, kind).map(LineRecord::Body),
        None => Ok(LineRecord::Unknown(tag.to_string())),
    };
    Some(record)
}

/// Reads bodies from any buffered source, collecting diagnostics
pub fn read_report<R: BufRead>(reader: R) -> Result<LoadReport> {
    let mut report = LoadReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;

        match read_record(&line) {
            None => continue,
            Some(Ok(LineRecord::Body(body))) => {
                debug!("line {}: parsed {}", number, body.kind());
                report.bodies.push(body);
            }
            Some(Ok(LineRecord::Unknown(tag))) => {
                warn!("line {}: unknown space object `{}`", number, tag);
                report.diagnostics.push(LineDiagnostic {
                    line: number,
                    kind: DiagnosticKind::UnknownKind { tag },
                });
            }
            Some(Err(source)) => {
                warn!("line {}: {}", number, source);
                report.diagnostics.push(LineDiagnostic {
                    line: number,
                    kind: DiagnosticKind::Parse(source),
                });
            }
        }
    }

    Ok(report)
}

/// Reads bodies from any buffered source, stopping at the first bad record
pub fn read_bodies<R: BufRead>(reader: R) -> Result<Vec<Body>> {
    let mut bodies = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;

        match read_record(&line) {
            None => continue,
            Some(Ok(LineRecord::Body(body))) => bodies.push(body),
            Some(Ok(LineRecord::Unknown(tag))) => {
                warn!("line {}: unknown space object `{}`", number, tag);
            }
            Some(Err(source)) => {
                return Err(OrreryError::Parse {
                    line: number,
                    source,
                })
            }
        }
    }

    Ok(bodies)
}

/// Loads a body file, aborting on the first malformed star or planet line
///
/// # Arguments
/// * `path` - Initial-condition file to read
///
/// # Returns
/// Bodies in file order, or the first IO or line-numbered parse error
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Body>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let bodies = read_bodies(BufReader::new(file))?;
    info!("Loaded {} bodies from {}", bodies.len(), path.display());
    Ok(bodies)
}

/// Loads a body file, keeping every body that parses
///
/// Only IO failures are returned as errors; line problems end up in
/// [`LoadReport::diagnostics`].
pub fn load_lenient(path: impl AsRef<Path>) -> Result<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let report = read_report(BufReader::new(file))?;
    info!(
        "Loaded {} bodies from {} ({} diagnostics)",
        report.bodies.len(),
        path.display(),
        report.diagnostics.len()
    );
    Ok(report)
}

/// Writes one record line per body in collection order
pub fn write_bodies<W: Write>(writer: &mut W, bodies: &[Body]) -> Result<()> {
    for body in bodies {
        writeln!(writer, "{}", format_line(body))?;
    }
    Ok(())
}

/// Saves bodies to `path`, replacing any existing content
pub fn save(path: impl AsRef<Path>, bodies: &[Body]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_bodies(&mut writer, bodies)?;
    writer.flush()?;
    info!("Saved {} bodies to {}", bodies.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SOLAR: &str = "\
# Sun and two planets
Star 30 yellow 1.98892E30 0 0 0 0

Planet 5 blue 5.974E24 149.60E9 0 0 29.783E3
   # indented comment
planet 3 red 6.419E23 228E9 0 0 24.1E3
";

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        assert!(is_skippable(""));
        assert!(is_skippable("   \t"));
        assert!(is_skippable("# comment"));
        assert!(is_skippable("   # comment"));
        assert!(!is_skippable("Star 1 red 1 0 0 0 0"));

        let bodies = read_bodies(Cursor::new("\n# only comments\n\n")).unwrap();
        assert!(bodies.is_empty());
    }

    #[test]
    fn test_bodies_keep_file_order() {
        let bodies = read_bodies(Cursor::new(SOLAR)).unwrap();
        let kinds: Vec<BodyKind> = bodies.iter().map(|b| b.kind()).collect();
        assert_eq!(kinds, vec![BodyKind::Star, BodyKind::Planet, BodyKind::Planet]);
        assert_eq!(bodies[1].color, "BLUE");
        assert_eq!(bodies[2].color, "RED");
    }

    #[test]
    fn test_unknown_tag_does_not_abort() {
        let input = "Comet 1 white 1 0 0 0 0\nStar 10 red 1000 0 0 0 0\n";
        let bodies = read_bodies(Cursor::new(input)).unwrap();
        assert_eq!(bodies.len(), 1);

        let report = read_report(Cursor::new(input)).unwrap();
        assert_eq!(report.bodies.len(), 1);
        assert_eq!(
            report.diagnostics,
            vec![LineDiagnostic {
                line: 1,
                kind: DiagnosticKind::UnknownKind {
                    tag: "Comet".to_string()
                },
            }]
        );
        assert_eq!(report.parse_failures(), 0);
    }

    #[test]
    fn test_strict_load_aborts_on_numeric_error() {
        let input = "Planet 5 blue 10 3 4 0 0\nStar 10 red notanumber 0 0 0 0\n";
        let err = read_bodies(Cursor::new(input)).unwrap_err();
        match err {
            OrreryError::Parse { line, source } => {
                assert_eq!(line, 2);
                assert!(source.is_numeric());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_lenient_load_keeps_good_lines() {
        let input = "Star 10 red 1000 0 0 0 0\nPlanet 5 blue\nPlanet 5 blue 10 3 4 0 0\n";
        let report = read_report(Cursor::new(input)).unwrap();
        assert_eq!(report.bodies.len(), 2);
        assert_eq!(report.parse_failures(), 1);
        assert!(!report.is_clean());
        assert_eq!(report.diagnostics[0].line, 2);

        let err = report.into_strict().unwrap_err();
        assert!(err.parse_error().unwrap().is_format());
    }

    #[test]
    fn test_save_overwrites_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("system.txt");
        std::fs::write(&path, "stale content that must disappear\n").unwrap();

        let bodies = read_bodies(Cursor::new(SOLAR)).unwrap();
        save(&path, &bodies).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("star 30 YELLOW "));

        let reloaded = load(&path).unwrap();
        assert_eq!(reloaded, bodies);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, OrreryError::Io(_)));
    }
}
