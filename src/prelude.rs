//! # Orrery Prelude
//!
//! Commonly used types and functions in one import.
//!
//! ```no_run
//! use orrery::prelude::*;
//!
//! fn main() -> orrery::Result<()> {
//!     let bodies = load("solar_system.txt")?;
//!     let artifact = StatisticsArtifact::new(DEFAULT_ARTIFACT_NAME);
//!     artifact.reset()?;
//!     record_sample(&artifact, &bodies, 0.0, ReferencePolicy::SingleStar)?;
//!     render(&artifact, &mut PlotViewer::default())
//! }
//! ```

// Bodies and their file format
pub use crate::body::{Body, BodyKind};
pub use crate::codec::{format_line, parse_line};
pub use crate::loader::{load, load_lenient, save, LoadReport};

// Statistics
pub use crate::statistics::{
    compute_samples, record_sample, ReferencePolicy, Sample, StatisticsArtifact,
    StatisticsRecorder, StatisticsRun,
};

// Driving and display
pub use crate::app::PlotViewer;
pub use crate::config::{RunConfig, ViewerConfig, DEFAULT_ARTIFACT_NAME};
pub use crate::simulation::{Integrator, SimulationDriver};
pub use crate::visualization::{render, PlotSurface, StatisticsPlots};

pub use crate::error::{OrreryError, Result};
