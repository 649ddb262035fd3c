//! Core state types for the N-body engine.
//!
//! A [`Body`] is the per-object physical state, every numeric attribute
//! carried as a unit-tagged quantity. A [`Snapshot`] is the whole system at
//! one instant; body order inside a snapshot is the stable body index shared
//! across the entire timeline.

use crate::simulation::units::{Angle, Distance, Mass, Scalar, Time, Vector, Velocity};

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub mass: Scalar<Mass>,
    pub position: Vector<Distance>,
    pub velocity: Vector<Velocity>,
    pub radius: Scalar<Distance>,
    pub rotation_period: Scalar<Time>,
    pub axial_tilt: Scalar<Angle>,
    /// Accumulated axial spin. Grows without wraparound; consumers take it
    /// mod 360 when rendering.
    pub rotation_degrees: f64,
    /// Names of bodies grouped under this one in display hierarchies.
    /// A name reference only; gravity stays all-pairs regardless.
    pub satellites: Vec<String>,
}

impl Body {
    /// Current speed in the velocity's display unit.
    pub fn speed(&self) -> f64 {
        self.velocity.value.norm()
    }

    /// Spin angle folded into [0, 360).
    pub fn spin_degrees(&self) -> f64 {
        self.rotation_degrees.rem_euclid(360.0)
    }
}

/// The display units a body's editable attributes were in before being
/// forced to base units, so they can be restored afterward.
#[derive(Debug, Clone, Copy)]
pub struct UnitSelection {
    pub mass: usize,
    pub position: usize,
    pub velocity: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub bodies: Vec<Body>,
}

impl Snapshot {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Force every body's mass/position/velocity to base units, returning
    /// the per-body display selections that were in effect.
    pub fn set_base_units(&mut self) -> Vec<UnitSelection> {
        self.bodies
            .iter_mut()
            .map(|body| {
                let selection = UnitSelection {
                    mass: body.mass.unit,
                    position: body.position.unit,
                    velocity: body.velocity.unit,
                };
                body.mass.set_base_units();
                body.position.set_base_units();
                body.velocity.set_base_units();
                selection
            })
            .collect()
    }

    /// Restore display selections previously captured by
    /// [`Snapshot::set_base_units`].
    pub fn restore_units(&mut self, selections: &[UnitSelection]) {
        if self.bodies.len() != selections.len() {
            return;
        }
        for (body, selection) in self.bodies.iter_mut().zip(selections) {
            body.mass.convert_to_units(selection.mass);
            body.position.convert_to_units(selection.position);
            body.velocity.convert_to_units(selection.velocity);
        }
    }
}
