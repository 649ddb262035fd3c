//! Wall-clock benchmarks for the force evaluator and integrator.
//!
//! The direct sum is O(n²); these print per-call timings over growing N so
//! regressions show up without a profiler. Output is plain CSV-ish text.

use std::time::Instant;

use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::velocity_verlet;
use crate::simulation::states::{Body, Snapshot};
use crate::simulation::units::{NVec3, Scalar, Vector, G};

/// Deterministic n-body snapshot in base units; no rng needed.
fn make_snapshot(n: usize) -> Snapshot {
    let mut bodies = Vec::with_capacity(n);
    for i in 0..n {
        let i_f = i as f64;
        let position = NVec3::new(
            (i_f * 0.37).sin() * 500.0,
            (i_f * 0.13).cos() * 500.0,
            (i_f * 0.07).sin() * 500.0,
        );
        bodies.push(Body {
            name: format!("body-{}", i),
            mass: Scalar::base(5.972e24),
            position: Vector::base(position),
            velocity: Vector::base(NVec3::zeros()),
            radius: Scalar::base(1.0),
            rotation_period: Scalar::base(1.0),
            axial_tilt: Scalar::base(0.0),
            rotation_degrees: 0.0,
            satellites: Vec::new(),
        });
    }
    Snapshot::new(bodies)
}

/// Time a single acceleration evaluation for a range of system sizes.
pub fn bench_gravity() {
    let ns = [50, 100, 200, 400, 800, 1600];

    for n in ns {
        let snapshot = make_snapshot(n);
        let forces = AccelSet::new().with(NewtonianGravity { g: G });
        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        forces
            .accumulate_accels(&snapshot, &mut out)
            .expect("benchmark snapshot has no coincident bodies");

        let t0 = Instant::now();
        forces
            .accumulate_accels(&snapshot, &mut out)
            .expect("benchmark snapshot has no coincident bodies");
        let elapsed = t0.elapsed().as_secs_f64();

        println!("N = {:5}, gravity eval = {:.6} s", n, elapsed);
    }
}

/// Time full velocity-Verlet steps (two force evaluations each) for a
/// range of system sizes.
pub fn bench_verlet() {
    let ns = [50, 100, 200, 400, 800];
    let steps = 5;
    let dt = 0.001;

    for n in ns {
        let forces = AccelSet::new().with(NewtonianGravity { g: G });
        let mut snapshot = make_snapshot(n);

        // Warm up
        snapshot = velocity_verlet(&snapshot, &forces, dt)
            .expect("benchmark snapshot has no coincident bodies");

        let t0 = Instant::now();
        for _ in 0..steps {
            snapshot = velocity_verlet(&snapshot, &forces, dt)
                .expect("benchmark snapshot has no coincident bodies");
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {:5}, verlet step = {:.6} s", n, per_step);
    }
}
