//! Configuration types for loading and saving simulation scenarios.
//!
//! This module defines a thin, `serde`-round-trippable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]   – algorithm selection and timestep/total-time
//! - [`BodyConfig`]     – initial state for each body, each attribute as a
//!                        (value, unit-label) pair
//! - [`SettingsConfig`] – per-body presentation metadata the engine stores
//!                        but never interprets
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario file
//!
//! # YAML format
//! An example scenario matching these types:
//!
//! ```yaml
//! time: 0.0                 # elapsed simulation time, base-unit years
//!
//! engine:
//!   algorithm: "verlet"     # or "rk4" / "rk45" (accepted, run as verlet)
//!   timestep:   { value: 0.1,  unit: "Days" }
//!   total_time: { value: 1.0,  unit: "Years" }
//!
//! bodies:
//!   - name: "Sun"
//!     mass:     { value: 1.0, unit: "Solar Mass" }
//!     position: { value: [0.0, 0.0, 0.0], unit: "AU" }
//!     velocity: { value: [0.0, 0.0, 0.0], unit: "Gm/Year" }
//!     radius:   { value: 0.696, unit: "Gigameters" }
//!     rotation_period: { value: 25.4, unit: "Days" }
//!     axial_tilt:      { value: 7.25, unit: "Degrees" }
//!     satellites: ["Earth"]
//!     settings:
//!       show_history: false
//!       display_type: "Sphere"
//!       color: [1.0, 0.9, 0.2]
//!       texture: "sun"
//! ```
//!
//! Body order in the file defines the stable body index used throughout
//! the timeline. Saved files are always written in base units so a
//! scenario reloads identically whatever display units were selected.

use serde::{Deserialize, Serialize};

/// Which integrator the engine runs.
///
/// Only velocity Verlet is implemented; the Runge-Kutta variants are
/// accepted so existing scenario files keep loading, and they dispatch to
/// the same code path.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    #[serde(rename = "verlet")]
    VelocityVerlet,

    #[serde(rename = "rk4")]
    RungeKutta4,

    #[serde(rename = "rk45")]
    AdaptiveRk45,
}

/// A scalar attribute as written in a scenario file: a value plus the
/// display-unit label it is expressed in.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ScalarConfig {
    pub value: f64,
    pub unit: String,
}

/// A 3-component attribute sharing one display-unit label.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct VectorConfig {
    pub value: [f64; 3],
    pub unit: String,
}

/// Presentation metadata carried alongside each body. The engine round-trips
/// these fields unchanged; only hosts interpret them.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SettingsConfig {
    #[serde(default)]
    pub show_history: bool,
    #[serde(default = "default_display_type")]
    pub display_type: String,
    #[serde(default = "default_color")]
    pub color: [f32; 3],
    #[serde(default)]
    pub texture: Option<String>,
}

fn default_display_type() -> String {
    "Point".to_string()
}

fn default_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            show_history: false,
            display_type: default_display_type(),
            color: default_color(),
            texture: None,
        }
    }
}

/// Initial state for a single body.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub mass: ScalarConfig,
    pub position: VectorConfig,
    pub velocity: VectorConfig,
    pub radius: ScalarConfig,
    pub rotation_period: ScalarConfig,
    pub axial_tilt: ScalarConfig,
    /// Names of bodies shown under this one in display hierarchies.
    #[serde(default)]
    pub satellites: Vec<String>,
    #[serde(default)]
    pub settings: SettingsConfig,
}

/// Algorithm selection and the bulk-computation extent.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub algorithm: Algorithm,
    pub timestep: ScalarConfig,
    pub total_time: ScalarConfig,
}

/// Top-level scenario description.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    /// Elapsed simulation time at the saved state, in base-unit years.
    #[serde(default)]
    pub time: f64,
    pub engine: EngineConfig,
    pub bodies: Vec<BodyConfig>,
}
