//! High-level runtime engine settings.
//!
//! Holds the selected algorithm and the timestep / total-time quantities
//! that drive a bulk computation.

use crate::configuration::config::Algorithm;
use crate::simulation::error::SimError;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::velocity_verlet;
use crate::simulation::states::Snapshot;
use crate::simulation::units::{Scalar, Time};

#[derive(Debug, Clone)]
pub struct Engine {
    pub algorithm: Algorithm,
    pub timestep: Scalar<Time>,
    pub total_time: Scalar<Time>,
}

impl Engine {
    /// Number of steps a bulk computation covers:
    /// round(total_time / timestep), both in base-unit years.
    pub fn total_steps(&self) -> usize {
        let steps = (self.total_time.base_value() / self.timestep.base_value()).round();
        if steps.is_finite() && steps > 0.0 {
            steps as usize
        } else {
            0
        }
    }

    /// Advance a snapshot by one timestep with the selected algorithm.
    ///
    /// Every selector variant currently runs velocity Verlet; the
    /// Runge-Kutta options are accepted but not separately implemented.
    pub fn step(&self, snapshot: &Snapshot, forces: &AccelSet) -> Result<Snapshot, SimError> {
        match self.algorithm {
            Algorithm::VelocityVerlet | Algorithm::RungeKutta4 | Algorithm::AdaptiveRk45 => {
                velocity_verlet(snapshot, forces, self.timestep.base_value())
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::VelocityVerlet,
            // 0.1 days per step over 0.15 years, the original defaults.
            timestep: Scalar::new(0.1, 2),
            total_time: Scalar::new(0.15, 0),
        }
    }
}
