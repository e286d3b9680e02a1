use std::time::Instant;

use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::integrator::symplectic_euler;
use crate::simulation::params::{self, Parameters};
use crate::simulation::states::{Body, NVec2, System};

/// Helper to build a manual System of size `n`
/// Deterministic positions, no rand needed
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new(
            (i_f * 0.37).sin() * 5.0 * params::AU,
            (i_f * 0.13).cos() * 5.0 * params::AU,
        );

        bodies.push(Body::new(x, NVec2::zeros(), 1.0e24, 4.0, [1.0, 1.0, 1.0]));
    }

    System {
        bodies,
        reference: Some(0),
        t: 0.0,
    }
}

fn make_params() -> Parameters {
    Parameters {
        dt: params::DAY,
        g: params::G,
        px_per_au: 200.0,
        trail_cap: Some(64), // keep memory flat while stepping in a loop
    }
}

/// Time the direct O(n^2) force pass alone for a range of system sizes
pub fn bench_gravity() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let sys = make_system(n);
        let p = make_params();

        let gravity = NewtonianGravity { g: p.g };
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        gravity.acceleration(0.0, &sys, &mut out).expect("force pass failed");

        let t0 = Instant::now();
        gravity.acceleration(0.0, &sys, &mut out).expect("force pass failed");
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {:8.6} s", dt_direct);
    }
}

/// Time the full integration step (forces + kick + drift + trail upkeep)
pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let steps = 3; // number of integrator steps per size (tune as needed)

    for n in ns {
        let mut sys = make_system(n);
        let p = make_params();

        let forces = AccelSet::new().with(NewtonianGravity { g: p.g });

        // Warm-up
        symplectic_euler(&mut sys, &forces, &p).expect("step failed");

        let t0 = Instant::now();
        for _ in 0..steps {
            symplectic_euler(&mut sys, &forces, &p).expect("step failed");
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {:8.6} s", per_step);
    }
}
