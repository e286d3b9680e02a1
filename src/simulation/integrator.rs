//! Fixed-step time integrator for the N-body system
//!
//! Provides a symplectic (semi-implicit) Euler step driven by
//! `AccelSet` and `Parameters`. One call advances the whole system
//! by exactly `params.dt` seconds of simulated time.

use anyhow::Result;

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance the system by one step using symplectic Euler.
///
/// All accelerations are evaluated against the start-of-step position
/// snapshot before any body moves, so the result does not depend on the
/// order bodies are stored in. `dist_to_reference` is recorded from the
/// same snapshot: it is the separation the force evaluation saw.
///
/// Errors from force accumulation (coincident bodies) abort the step
/// before any state is mutated.
pub fn symplectic_euler(sys: &mut System, forces: &AccelSet, params: &Parameters) -> Result<()> {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return Ok(());
    }

    let dt = params.dt; // time step dt

    // Allocate a vector of accelerations, one per body, initialized to zero.
    // accel[i] will hold a_n for body i at the current time t = sys.t
    let mut accel = vec![NVec2::zeros(); n];

    // Ask the force set to accumulate accelerations at time t_n into accel,
    // based on the current (not yet mutated) system state
    forces.accumulate_accels(sys.t, &*sys, &mut accel)?;

    // Record each body's separation from the reference body, measured on
    // the same snapshot the forces were computed from
    if let Some(r) = sys.reference {
        let anchor = sys.bodies[r].x;
        for (i, b) in sys.bodies.iter_mut().enumerate() {
            if i != r {
                b.dist_to_reference = (b.x - anchor).norm();
            }
        }
    }

    // Kick: v_n+1 = v_n + dt * a_n
    for (b, a) in sys.bodies.iter_mut().zip(accel.iter()) {
        b.v += dt * *a;
    }

    // Drift with the updated velocity: x_n+1 = x_n + dt * v_n+1
    // and log the new position in the body's trail
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;

        b.trail.push_back(b.x);
        if let Some(cap) = params.trail_cap {
            while b.trail.len() > cap {
                b.trail.pop_front();
            }
        }
    }

    // Increment the system time by one full step
    sys.t += dt;

    Ok(())
}
