//! # Visualization Module
//!
//! Turns a statistics artifact into four line plots and hands them to a
//! display surface.
//!
//! ## Key Components
//!
//! - [`StatisticsPlots`] - The 2×2 panel grid built from samples
//! - [`PlotSurface`] - Display target that owns the show/close lifecycle
//! - [`render`] - Read, compose and display in one call
//!
//! ## Usage
//!
//! ```no_run
//! use orrery::app::PlotViewer;
//! use orrery::config::ViewerConfig;
//! use orrery::statistics::StatisticsArtifact;
//!
//! let artifact = StatisticsArtifact::new("statistic_of_the_last_launch.txt");
//! let mut viewer = PlotViewer::new(ViewerConfig::default());
//! orrery::visualization::render(&artifact, &mut viewer).unwrap();
//! ```

pub mod plots;
pub mod traits;

// Re-export main types
pub use plots::{Axis, PlotBounds, PlotPanel, StatisticsPlots};
pub use traits::PlotSurface;

use crate::error::Result;
use crate::statistics::StatisticsArtifact;
use log::info;

/// Reads every sample in the artifact and composes the panel grid
pub fn compose(artifact: &StatisticsArtifact) -> Result<StatisticsPlots> {
    let samples = artifact.read_samples()?;
    Ok(StatisticsPlots::from_samples(&samples))
}

/// Reads the artifact, composes the four panels, and shows them
///
/// Blocks for as long as `surface` keeps its display open.
///
/// # Arguments
/// * `artifact` - Statistics to plot
/// * `surface` - Display target
///
/// # Returns
/// The first IO or line-numbered statistics error, or any surface failure
pub fn render<S: PlotSurface + ?Sized>(artifact: &StatisticsArtifact, surface: &mut S) -> Result<()> {
    let plots = compose(artifact)?;
    info!(
        "Rendering {} samples from {}",
        plots.sample_count,
        artifact.path().display()
    );
    surface.show(&plots)
}
