//! Configuration for simulation runs and the statistics viewer
//!
//! Both configs follow the same pattern: sensible defaults via [`Default`]
//! plus fluent `with_*` setters.
//!
//! ```no_run
//! use orrery::config::{RunConfig, ViewerConfig};
//!
//! let run = RunConfig::default().with_time_step(3600.0).with_steps(8760);
//! let viewer = ViewerConfig::default()
//!     .with_size(1600, 900)
//!     .with_time_vs_time(false);
//! ```

use crate::statistics::ReferencePolicy;

/// File name used for statistics when no path is given
pub const DEFAULT_ARTIFACT_NAME: &str = "statistic_of_the_last_launch.txt";

/// Environment variable consulted by the CLI for the statistics path
pub const ARTIFACT_ENV_VAR: &str = "ORRERY_STATS";

/// Settings for a driven simulation run
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Simulation time advanced per integrator step
    pub time_step: f64,
    /// Number of integrator steps
    pub steps: usize,
    /// Record statistics every this many steps (0 disables recording)
    pub sample_every: usize,
    pub reference: ReferencePolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0,
            steps: 1000,
            sample_every: 1,
            reference: ReferencePolicy::SingleStar,
        }
    }
}

impl RunConfig {
    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_sample_every(mut self, sample_every: usize) -> Self {
        self.sample_every = sample_every;
        self
    }

    pub fn with_reference(mut self, reference: ReferencePolicy) -> Self {
        self.reference = reference;
        self
    }
}

/// Settings for the interactive plot window
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub font_size: f32,
    /// Draw the time-vs-time diagonal in the fourth grid cell
    pub show_time_vs_time: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Statistics of the last launch".to_string(),
            width: 1200,
            height: 800,
            font_size: 18.0,
            show_time_vs_time: true,
        }
    }
}

impl ViewerConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_time_vs_time(mut self, show: bool) -> Self {
        self.show_time_vs_time = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_defaults_keep_all_panels() {
        let config = ViewerConfig::default();
        assert_eq!(config.title, "Statistics of the last launch");
        assert_eq!((config.width, config.height), (1200, 800));
        assert!(config.show_time_vs_time);

        let config = config.with_time_vs_time(false).with_size(640, 480);
        assert!(!config.show_time_vs_time);
        assert_eq!((config.width, config.height), (640, 480));
    }

    #[test]
    fn test_run_builder() {
        let run = RunConfig::default()
            .with_time_step(0.5)
            .with_sample_every(0)
            .with_reference(ReferencePolicy::LastStar);
        assert_eq!(run.time_step, 0.5);
        assert_eq!(run.sample_every, 0);
        assert_eq!(run.steps, 1000);
        assert_eq!(run.reference, ReferencePolicy::LastStar);
    }
}
