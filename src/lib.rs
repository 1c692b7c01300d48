// src/lib.rs
//! Orrery
//!
//! State files and kinematic statistics for small star/planet N-body
//! simulations: reading and writing initial-condition files, sampling
//! speed and distance-to-star over a run, and plotting the samples.
//!
//! Data flows one way:
//!
//! ```text
//! body file -> loader -> bodies -> (integrator) -> statistics -> artifact -> plots
//! ```

pub mod app;
pub mod body;
pub mod codec;
pub mod config;
pub mod error;
pub mod gfx;
pub mod loader;
pub mod prelude;
pub mod simulation;
pub mod statistics;
pub mod ui;
pub mod visualization;

// Re-export main types for convenience
pub use app::PlotViewer;
pub use body::{Body, BodyKind};
pub use error::{OrreryError, ParseError, Result};
pub use statistics::{ReferencePolicy, Sample, StatisticsArtifact};
