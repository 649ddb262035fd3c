//! Build fully-initialized scenarios from configuration and expose the
//! operations hosts drive.
//!
//! A [`Scenario`] is the runtime bundle: engine settings, the active force
//! set, the timeline seeded with the loaded snapshot, per-body presentation
//! metadata, and the cached trajectories. Hosts (GUI or CLI) mutate it
//! through the operations here (algorithm/timestep edits, focus changes,
//! the cooperative bulk-compute loop) and read snapshots and paths back
//! for display.

use anyhow::{anyhow, Result};

use crate::configuration::config::{
    BodyConfig, EngineConfig, ScalarConfig, ScenarioConfig, SettingsConfig, VectorConfig,
};
use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::focus::PathCache;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::states::{Body, Snapshot};
use crate::simulation::timeline::Timeline;
use crate::simulation::units::{
    Angle, Distance, Mass, NVec3, Scalar, Time, UnitKind, Vector, Velocity, G,
};

/// Progress of a bulk computation after one cooperative step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeProgress {
    Running { completed: usize, total: usize },
    Done,
}

#[derive(Debug)]
pub struct Scenario {
    pub engine: Engine,
    pub forces: AccelSet,
    pub timeline: Timeline,
    /// Presentation metadata per body, order-aligned with the snapshot
    /// bodies. Stored and saved back untouched.
    pub settings: Vec<SettingsConfig>,
    pub paths: PathCache,
    /// Elapsed simulation time recorded in the loaded file, base years.
    pub time: f64,
}

fn scalar<K: UnitKind>(cfg: &ScalarConfig) -> Result<Scalar<K>> {
    let unit = K::unit_index(&cfg.unit)
        .ok_or_else(|| anyhow!("unknown {} unit '{}'", K::NAME, cfg.unit))?;
    Ok(Scalar::new(cfg.value, unit))
}

fn vector<K: UnitKind>(cfg: &VectorConfig) -> Result<Vector<K>> {
    let unit = K::unit_index(&cfg.unit)
        .ok_or_else(|| anyhow!("unknown {} unit '{}'", K::NAME, cfg.unit))?;
    let [x, y, z] = cfg.value;
    Ok(Vector::new(NVec3::new(x, y, z), unit))
}

fn base_scalar<K: UnitKind>(q: &Scalar<K>) -> ScalarConfig {
    ScalarConfig {
        value: q.base_value(),
        unit: K::base_label().to_string(),
    }
}

fn base_vector<K: UnitKind>(q: &Vector<K>) -> VectorConfig {
    let v = q.base_value();
    VectorConfig {
        value: [v.x, v.y, v.z],
        unit: K::base_label().to_string(),
    }
}

impl Scenario {
    /// Map a scenario description to the runtime bundle. Body order in the
    /// configuration defines the stable body index used throughout the
    /// timeline.
    pub fn build(cfg: ScenarioConfig) -> Result<Self> {
        let engine = Engine {
            algorithm: cfg.engine.algorithm,
            timestep: scalar::<Time>(&cfg.engine.timestep)?,
            total_time: scalar::<Time>(&cfg.engine.total_time)?,
        };

        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        let mut settings = Vec::with_capacity(cfg.bodies.len());
        for bc in &cfg.bodies {
            let mut radius = scalar::<Distance>(&bc.radius)?;
            // Loaders default a missing radius to 0; don't allow it through.
            if radius.base_value() <= 0.0 {
                log::warn!(
                    "body '{}' has non-positive radius, defaulting to 1 gigameter",
                    bc.name
                );
                radius = Scalar::base(1.0);
            }

            bodies.push(Body {
                name: bc.name.clone(),
                mass: scalar::<Mass>(&bc.mass)?,
                position: vector::<Distance>(&bc.position)?,
                velocity: vector::<Velocity>(&bc.velocity)?,
                radius,
                rotation_period: scalar::<Time>(&bc.rotation_period)?,
                axial_tilt: scalar::<Angle>(&bc.axial_tilt)?,
                rotation_degrees: 0.0,
                satellites: bc.satellites.clone(),
            });
            settings.push(bc.settings.clone());
        }

        let forces = AccelSet::new().with(NewtonianGravity { g: G });
        let timeline = Timeline::new(Snapshot::new(bodies));
        let mut paths = PathCache::new();
        paths.rebuild(&timeline);

        Ok(Self {
            engine,
            forces,
            timeline,
            settings,
            paths,
            time: cfg.time,
        })
    }

    pub fn current(&self) -> &Snapshot {
        self.timeline.current()
    }

    /// Simulation time at the cursor, base years.
    pub fn current_time(&self) -> f64 {
        self.engine.timestep.base_value() * self.timeline.cursor() as f64
    }

    pub fn set_algorithm(&mut self, algorithm: crate::configuration::config::Algorithm) {
        self.engine.algorithm = algorithm;
    }

    pub fn set_timestep(&mut self, timestep: Scalar<Time>) {
        self.engine.timestep = timestep;
    }

    pub fn set_total_time(&mut self, total_time: Scalar<Time>) {
        self.engine.total_time = total_time;
    }

    /// Re-base the displayed coordinates on a body (or the world origin for
    /// 0). Every historical offset changes with the focus, so the cached
    /// trajectories are rebuilt over the whole history.
    pub fn set_focus(&mut self, focus: usize) {
        self.timeline.set_focus(focus);
        self.paths.rebuild(&self.timeline);
    }

    /// Start a bulk computation from the cursor snapshot. The previous
    /// history is parked in the rollback slot until the run completes or
    /// is canceled.
    pub fn begin_compute(&mut self) {
        self.timeline.set_paused(true);
        self.timeline.begin_bulk_compute();
        self.paths.rebuild(&self.timeline);
    }

    /// Advance the bulk computation by one step. Hosts call this once per
    /// frame so they can draw progress and honor a cancel between steps.
    pub fn compute_step(&mut self) -> Result<ComputeProgress, SimError> {
        let total = self.engine.total_steps();
        if self.timeline.cursor() + 1 > total {
            self.timeline.finish_bulk_compute();
            return Ok(ComputeProgress::Done);
        }

        self.timeline.advance_one_step(&self.engine, &self.forces)?;
        let focus = self.timeline.focus();
        self.paths.extend(self.timeline.current(), focus);
        Ok(ComputeProgress::Running {
            completed: self.timeline.cursor(),
            total,
        })
    }

    /// Throw away everything computed since `begin_compute` and restore
    /// the previous history exactly.
    pub fn cancel_compute(&mut self) {
        self.timeline.cancel_bulk_compute();
        self.paths.rebuild(&self.timeline);
    }

    /// The current state as a configuration record. Every quantity is
    /// written in its base unit so the file reloads identically whatever
    /// display units are selected; presentation metadata passes through
    /// untouched.
    pub fn to_config(&self) -> ScenarioConfig {
        let snapshot = self.timeline.current();
        let bodies = snapshot
            .bodies
            .iter()
            .zip(&self.settings)
            .map(|(body, settings)| BodyConfig {
                name: body.name.clone(),
                mass: base_scalar(&body.mass),
                position: base_vector(&body.position),
                velocity: base_vector(&body.velocity),
                radius: base_scalar(&body.radius),
                rotation_period: base_scalar(&body.rotation_period),
                axial_tilt: base_scalar(&body.axial_tilt),
                satellites: body.satellites.clone(),
                settings: settings.clone(),
            })
            .collect();

        ScenarioConfig {
            time: self.current_time(),
            engine: EngineConfig {
                algorithm: self.engine.algorithm,
                timestep: base_scalar(&self.engine.timestep),
                total_time: base_scalar(&self.engine.total_time),
            },
            bodies,
        }
    }
}
