//! # Plot Surface Trait
//!
//! Anything that can display the composed statistics panels. The windowed
//! [`PlotViewer`](crate::app::PlotViewer) is the standard implementation;
//! tests and batch tools provide their own.

use super::plots::StatisticsPlots;
use crate::error::Result;

/// Display target for statistics plots
///
/// ## Lifecycle
///
/// [`show`](PlotSurface::show) owns the whole display: it presents the
/// panels and returns only once the surface has been dismissed. Interactive
/// implementations therefore block the calling thread.
///
/// ## Examples
///
/// ```no_run
/// use orrery::visualization::{PlotSurface, StatisticsPlots};
///
/// struct Stdout;
///
/// impl PlotSurface for Stdout {
///     fn show(&mut self, plots: &StatisticsPlots) -> orrery::Result<()> {
///         for panel in &plots.panels {
///             println!("{}: {} points", panel.title, panel.points.len());
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait PlotSurface {
    /// Present the panels and wait until the surface is closed
    fn show(&mut self, plots: &StatisticsPlots) -> Result<()>;
}
