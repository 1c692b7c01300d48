//! Simulation driver
//!
//! Runs an [`Integrator`] over a body set with a fixed time step and
//! records statistics as it goes. The driver owns the artifact lifecycle
//! for the run: stale samples are removed before the first step and the
//! file is flushed and closed when the run ends, including on error.

use super::traits::Integrator;
use crate::body::Body;
use crate::config::RunConfig;
use crate::error::Result;
use crate::statistics::{StatisticsArtifact, StatisticsRun};
use log::info;

/// What a completed run produced
#[derive(Debug)]
pub struct RunSummary {
    pub steps: usize,
    pub samples: usize,
    pub final_time: f64,
    pub artifact: StatisticsArtifact,
}

/// Steps an integrator and samples statistics on a fixed cadence
pub struct SimulationDriver<I: Integrator> {
    integrator: I,
    bodies: Vec<Body>,
    config: RunConfig,
    time: f64,
    steps_taken: usize,
}

impl<I: Integrator> SimulationDriver<I> {
    /// Create a driver starting at simulation time zero
    pub fn new(integrator: I, bodies: Vec<Body>, config: RunConfig) -> Self {
        Self {
            integrator,
            bodies,
            config,
            time: 0.0,
            steps_taken: 0,
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Simulation time elapsed so far
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Hand the body set back, e.g. to save the final state
    pub fn into_bodies(self) -> Vec<Body> {
        self.bodies
    }

    /// Advance one fixed time step without recording
    pub fn step(&mut self) {
        self.integrator.step(&mut self.bodies, self.config.time_step);
        self.time += self.config.time_step;
        self.steps_taken += 1;
    }

    fn should_sample(&self) -> bool {
        self.config.sample_every > 0 && self.steps_taken % self.config.sample_every == 0
    }

    /// Run the configured number of steps, recording into `artifact`
    ///
    /// The artifact is reset before the first step. Samples are taken after
    /// every `sample_every`-th step, stamped with the elapsed time.
    ///
    /// # Returns
    /// Summary of the run, or the first recording error
    pub fn run(&mut self, artifact: StatisticsArtifact) -> Result<RunSummary> {
        info!(
            "Running {} for {} steps of {}",
            self.integrator.name(),
            self.config.steps,
            self.config.time_step
        );

        let mut run = StatisticsRun::start(artifact, self.config.reference)?;
        for _ in 0..self.config.steps {
            self.step();
            if self.should_sample() {
                run.record(&self.bodies, self.time)?;
            }
        }

        let samples = run.samples_written();
        let artifact = run.finish()?;
        Ok(RunSummary {
            steps: self.config.steps,
            samples,
            final_time: self.time,
            artifact,
        })
    }
}
