//! Integrator interface for simulation drivers
//!
//! Orrery does not move bodies itself. Whatever advances positions and
//! velocities implements [`Integrator`] and is plugged into a
//! [`SimulationDriver`](super::manager::SimulationDriver).

use crate::body::Body;

/// Advances a body set through simulation time
pub trait Integrator {
    /// Advance all bodies by `dt` units of simulation time
    ///
    /// # Arguments
    /// * `bodies` - Body set to update in place; kinds must not change
    /// * `dt` - Time step
    fn step(&mut self, bodies: &mut [Body], dt: f64);

    /// Integrator name for log output
    fn name(&self) -> &str {
        "integrator"
    }
}
