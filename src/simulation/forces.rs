//! Force / acceleration contributors for the N-body engine.
//!
//! Defines the acceleration trait plus the direct-sum Newtonian gravity
//! term. Contributions from every registered term are summed into a single
//! acceleration vector per body.
//!
//! Everything here works in base units (gigameters, kilograms, years);
//! callers convert quantities before evaluating and convert back afterward.

use crate::simulation::error::SimError;
use crate::simulation::states::Snapshot;
use crate::simulation::units::NVec3;

/// Collection of acceleration terms. Each term implements [`Acceleration`]
/// and their contributions are summed into `out[i]` per body.
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl std::fmt::Debug for AccelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccelSet")
            .field("terms", &self.terms.len())
            .finish()
    }
}

impl AccelSet {
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term.
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `snapshot`.
    /// `out[i]` is set to the sum of contributions from all terms,
    /// in gigameters per year².
    pub fn accumulate_accels(
        &self,
        snapshot: &Snapshot,
        out: &mut [NVec3],
    ) -> Result<(), SimError> {
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(snapshot, out)?;
        }
        Ok(())
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// An acceleration source operating on a base-unit [`Snapshot`].
/// Implementations add their contribution into `out[i]` for each body.
pub trait Acceleration {
    fn acceleration(&self, snapshot: &Snapshot, out: &mut [NVec3]) -> Result<(), SimError>;
}

/// Direct-sum Newtonian gravity, O(n²) over all pairs.
///
/// No softening: scenario sizes are small (tens of bodies) and smoothing
/// would change the physics. A pair at zero separation is reported as
/// [`SimError::CoincidentBodies`] instead of dividing by zero.
pub struct NewtonianGravity {
    pub g: f64,
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, snapshot: &Snapshot, out: &mut [NVec3]) -> Result<(), SimError> {
        let n = snapshot.bodies.len();

        // Each unordered pair (i, j) with i < j contributes equal and
        // opposite accelerations, scaled by the other body's mass.
        for i in 0..n {
            let bi = &snapshot.bodies[i];
            let xi = bi.position.value;
            let mi = bi.mass.value;

            for j in (i + 1)..n {
                let bj = &snapshot.bodies[j];
                let xj = bj.position.value;
                let mj = bj.mass.value;

                // Displacement from i to j; i is pulled along +r, j along -r.
                let r = xj - xi;
                let r2 = r.dot(&r);
                if r2 == 0.0 {
                    return Err(SimError::CoincidentBodies {
                        first: bi.name.clone(),
                        second: bj.name.clone(),
                    });
                }

                let inv_r = r2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;
                let coef = self.g * inv_r3;

                out[i] += coef * mj * r;
                out[j] -= coef * mi * r;
            }
        }

        Ok(())
    }
}
