//! Error types for body files, statistics artifacts and the plot viewer

use crate::body::BodyKind;
use thiserror::Error;

/// Result type for orrery operations
pub type Result<T> = std::result::Result<T, OrreryError>;

/// Failure to turn a single text line into a typed record
///
/// Produced by the record codec and by the statistics line parser. It carries
/// no line number; callers that iterate over files wrap it in
/// [`OrreryError::Parse`] or [`OrreryError::Statistics`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Wrong number of whitespace-delimited fields
    #[error("expected {expected} fields, found {found}")]
    Format { expected: usize, found: usize },

    /// Leading tag names a different body kind than the one requested
    #[error("record tag `{found}` does not match expected kind `{expected}`")]
    KindMismatch { expected: BodyKind, found: String },

    /// A numeric field could not be read as a real number
    #[error("field `{field}` is not a number: `{value}`")]
    Numeric { field: &'static str, value: String },
}

impl ParseError {
    /// True for field-count and tag errors
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. } | Self::KindMismatch { .. })
    }

    /// True when a numeric field failed to parse
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric { .. })
    }
}

/// Errors that can occur while loading, recording or rendering
#[derive(Error, Debug)]
pub enum OrreryError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("statistics line {line}: {source}")]
    Statistics {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("no reference body (star) in the body set")]
    MissingReference,

    #[error("expected exactly one reference body, found {0}")]
    AmbiguousReference(usize),

    #[error("reference index {index} is out of range for {len} bodies")]
    ReferenceOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Viewer error: {0}")]
    Viewer(String),
}

impl OrreryError {
    /// The underlying line-level parse failure, if any
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse { source, .. } | Self::Statistics { source, .. } => Some(source),
            _ => None,
        }
    }
}
