//! Unit-aware physical quantities.
//!
//! Every quantity kind (mass, distance, velocity, time, angle) has one
//! canonical base unit used in all force/integration math (kilograms,
//! gigameters, gigameters per year, years, degrees) plus an ordered table
//! of display units with a multiplicative factor *to* the base unit.
//! A quantity stores its value in the unit named by its index; conversion
//! rewrites value and index together so they never disagree.

use std::marker::PhantomData;

use nalgebra::Vector3;

pub type NVec3 = Vector3<f64>;

pub const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 3600.0;
pub const HOURS_PER_YEAR: f64 = 365.0 * 24.0;

/// Gravitational constant in base units (Gm³ kg⁻¹ yr⁻²), from the SI value
/// 6.67408e-11 m³ kg⁻¹ s⁻².
pub const G: f64 = 6.67408e-11 * (SECONDS_PER_YEAR * SECONDS_PER_YEAR) / 1.0e27;

/// One display unit: its menu label and its factor to the kind's base unit,
/// so `base = value * to_base`.
#[derive(Debug)]
pub struct Unit {
    pub label: &'static str,
    pub to_base: f64,
}

/// A quantity kind and its unit table. Index 0 is always the base unit.
pub trait UnitKind {
    const NAME: &'static str;
    const UNITS: &'static [Unit];

    /// Resolve a display label to its index in the unit table.
    fn unit_index(label: &str) -> Option<usize> {
        Self::UNITS.iter().position(|u| u.label == label)
    }

    fn base_label() -> &'static str {
        Self::UNITS[0].label
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distance;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Velocity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Angle;

impl UnitKind for Mass {
    const NAME: &'static str = "mass";
    const UNITS: &'static [Unit] = &[
        Unit { label: "Kg", to_base: 1.0 },
        Unit { label: "Lbs", to_base: 0.453592 },
        Unit { label: "Earth Mass", to_base: 5.972e24 },
        Unit { label: "Solar Mass", to_base: 1.989e30 },
    ];
}

impl UnitKind for Distance {
    const NAME: &'static str = "distance";
    const UNITS: &'static [Unit] = &[
        Unit { label: "Gigameters", to_base: 1.0 },
        Unit { label: "M", to_base: 1.0e-9 },
        Unit { label: "Km", to_base: 1.0e-6 },
        Unit { label: "Mi", to_base: 1.60934e-6 },
        Unit { label: "AU", to_base: 149.598 },
        Unit { label: "Light Seconds", to_base: 0.299792 },
        Unit { label: "Light Minutes", to_base: 17.9875 },
        Unit { label: "Light Years", to_base: 9.461e6 },
    ];
}

impl UnitKind for Velocity {
    const NAME: &'static str = "velocity";
    const UNITS: &'static [Unit] = &[
        Unit { label: "Gm/Year", to_base: 1.0 },
        Unit { label: "M/s", to_base: SECONDS_PER_YEAR * 1.0e-9 },
        Unit { label: "Km/s", to_base: SECONDS_PER_YEAR * 1.0e-6 },
        Unit { label: "Km/Hr", to_base: HOURS_PER_YEAR * 1.0e-6 },
        Unit { label: "Mi/Hr", to_base: HOURS_PER_YEAR * 1.60934e-6 },
        Unit { label: "c", to_base: 299_792_458.0 * SECONDS_PER_YEAR * 1.0e-9 },
    ];
}

impl UnitKind for Time {
    const NAME: &'static str = "time";
    const UNITS: &'static [Unit] = &[
        Unit { label: "Years", to_base: 1.0 },
        Unit { label: "Months", to_base: 1.0 / 12.0 },
        Unit { label: "Days", to_base: 1.0 / 365.0 },
        Unit { label: "Hours", to_base: 1.0 / HOURS_PER_YEAR },
        Unit { label: "Minutes", to_base: 1.0 / (HOURS_PER_YEAR * 60.0) },
    ];
}

impl UnitKind for Angle {
    const NAME: &'static str = "angle";
    const UNITS: &'static [Unit] = &[
        Unit { label: "Degrees", to_base: 1.0 },
        Unit { label: "Radians", to_base: 180.0 / std::f64::consts::PI },
    ];
}

/// A scalar value tagged with its current display unit.
///
/// Unit indices come from the kind's fixed table; an out-of-range index is a
/// programmer error and panics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar<K: UnitKind> {
    pub value: f64,
    pub unit: usize,
    kind: PhantomData<K>,
}

impl<K: UnitKind> Scalar<K> {
    pub fn new(value: f64, unit: usize) -> Self {
        assert!(
            unit < K::UNITS.len(),
            "{} unit index {} out of range",
            K::NAME,
            unit
        );
        Self {
            value,
            unit,
            kind: PhantomData,
        }
    }

    /// A quantity already expressed in the kind's base unit.
    pub fn base(value: f64) -> Self {
        Self::new(value, 0)
    }

    /// The value expressed in the base unit. Pure; does not touch `self`.
    pub fn base_value(&self) -> f64 {
        self.value * K::UNITS[self.unit].to_base
    }

    /// Rewrite the quantity in the base unit.
    pub fn set_base_units(&mut self) {
        self.value = self.base_value();
        self.unit = 0;
    }

    /// Rewrite the quantity in the target display unit.
    pub fn convert_to_units(&mut self, unit: usize) {
        assert!(
            unit < K::UNITS.len(),
            "{} unit index {} out of range",
            K::NAME,
            unit
        );
        self.set_base_units();
        self.value /= K::UNITS[unit].to_base;
        self.unit = unit;
    }

    pub fn unit_label(&self) -> &'static str {
        K::UNITS[self.unit].label
    }
}

/// A 3-component value whose components share one display unit.
/// Same conversion contract as [`Scalar`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<K: UnitKind> {
    pub value: NVec3,
    pub unit: usize,
    kind: PhantomData<K>,
}

impl<K: UnitKind> Vector<K> {
    pub fn new(value: NVec3, unit: usize) -> Self {
        assert!(
            unit < K::UNITS.len(),
            "{} unit index {} out of range",
            K::NAME,
            unit
        );
        Self {
            value,
            unit,
            kind: PhantomData,
        }
    }

    pub fn base(value: NVec3) -> Self {
        Self::new(value, 0)
    }

    pub fn base_value(&self) -> NVec3 {
        self.value * K::UNITS[self.unit].to_base
    }

    pub fn set_base_units(&mut self) {
        self.value = self.base_value();
        self.unit = 0;
    }

    pub fn convert_to_units(&mut self, unit: usize) {
        assert!(
            unit < K::UNITS.len(),
            "{} unit index {} out of range",
            K::NAME,
            unit
        );
        self.set_base_units();
        self.value /= K::UNITS[unit].to_base;
        self.unit = unit;
    }

    pub fn unit_label(&self) -> &'static str {
        K::UNITS[self.unit].label
    }
}
