pub mod benchmark;
pub mod configuration;
pub mod logger;
pub mod simulation;

pub use simulation::engine::Engine;
pub use simulation::error::SimError;
pub use simulation::focus::{focus_labels, focus_offset, PathCache};
pub use simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
pub use simulation::integrator::velocity_verlet;
pub use simulation::scenario::{ComputeProgress, Scenario};
pub use simulation::states::{Body, Snapshot, UnitSelection};
pub use simulation::timeline::Timeline;
pub use simulation::units::{
    Angle, Distance, Mass, NVec3, Scalar, Time, Unit, UnitKind, Vector, Velocity, G,
};

pub use configuration::config::{
    Algorithm, BodyConfig, EngineConfig, ScalarConfig, ScenarioConfig, SettingsConfig,
    VectorConfig,
};

pub use benchmark::benchmark::{bench_gravity, bench_verlet};
