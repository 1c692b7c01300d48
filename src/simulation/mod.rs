// src/simulation/mod.rs
//! Simulation driving
//!
//! Orrery does not integrate equations of motion. An external
//! [`Integrator`] moves the bodies; the [`SimulationDriver`] calls it with a
//! fixed time step and records statistics on a fixed cadence, resetting the
//! artifact once before the first step.

pub mod manager;
pub mod traits;

pub use manager::{RunSummary, SimulationDriver};
pub use traits::Integrator;
