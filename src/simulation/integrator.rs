//! Fixed-step velocity-Verlet time integrator.
//!
//! Kick-drift-kick: a half-step velocity kick, a full-step position drift
//! using the half-updated velocities, a force re-evaluation at the new
//! positions, and a second half kick. Symplectic, time-reversible to
//! numerical precision, second-order accurate in `dt`.

use crate::simulation::error::SimError;
use crate::simulation::forces::AccelSet;
use crate::simulation::states::Snapshot;
use crate::simulation::units::NVec3;

/// Advance `snapshot` by one step of `dt` base-unit years and return the
/// new state. The input is untouched; each body's display unit selections
/// are preserved in the result. `dt == 0` returns the input unchanged.
/// `dt` may be negative, which steps the system backward.
pub fn velocity_verlet(
    snapshot: &Snapshot,
    forces: &AccelSet,
    dt: f64,
) -> Result<Snapshot, SimError> {
    let mut next = snapshot.clone();
    if dt == 0.0 {
        return Ok(next);
    }

    let n = next.bodies.len();
    let half_dt = 0.5 * dt;

    // Integration math happens in base units; remember what the user had
    // selected so the result reads back in the same units.
    let selections = next.set_base_units();

    // a_n at the current positions.
    let mut a_old = vec![NVec3::zeros(); n];
    forces.accumulate_accels(&next, &mut a_old)?;

    // Kick: v_n+1/2 = v_n + (dt/2) a_n
    for (body, a) in next.bodies.iter_mut().zip(a_old.iter()) {
        body.velocity.value += half_dt * *a;
    }

    // Drift: x_n+1 = x_n + dt v_n+1/2
    for body in next.bodies.iter_mut() {
        body.position.value += dt * body.velocity.value;
    }

    // a_n+1 at the new positions.
    let mut a_new = vec![NVec3::zeros(); n];
    forces.accumulate_accels(&next, &mut a_new)?;

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) a_n+1
    for (body, a) in next.bodies.iter_mut().zip(a_new.iter()) {
        body.velocity.value += half_dt * *a;
    }

    // Axial spin accumulates without wraparound; renderers fold it mod 360.
    for body in next.bodies.iter_mut() {
        let period = body.rotation_period.base_value();
        if period == 0.0 {
            return Err(SimError::ZeroRotationPeriod {
                body: body.name.clone(),
            });
        }
        body.rotation_degrees += dt * 360.0 / period;
    }

    next.restore_units(&selections);
    Ok(next)
}
