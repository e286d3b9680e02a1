//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration and visualization systems.
//!
//! Construction is where preconditions are enforced: bad masses, coincident
//! bodies, malformed vectors, or a duplicated reference flag are
//! configuration errors and fail fast here, before the window opens.

use anyhow::{ensure, Result};
use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::{self, Parameters};
use crate::simulation::states::{Body, NVec2, System};

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the parameters, current system state, and the set of active
/// force laws (accelerations)
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig, filling in defaults
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt.unwrap_or(params::DAY),
            g: p_cfg.g.unwrap_or(params::G),
            px_per_au: p_cfg.px_per_au.unwrap_or(200.0),
            trail_cap: p_cfg.trail_cap,
        };

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors,
        // checking each body's invariants on the way
        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        let mut reference = None;

        for (i, bc) in cfg.bodies.iter().enumerate() {
            ensure!(
                bc.x.len() == 2 && bc.v.len() == 2,
                "body {i}: position and velocity must each have 2 components"
            );
            ensure!(bc.m > 0.0, "body {i}: mass must be strictly positive, got {}", bc.m);

            if bc.reference {
                ensure!(
                    reference.is_none(),
                    "body {i}: scenario already has a reference body (index {})",
                    reference.unwrap_or(0)
                );
                reference = Some(i);
            }

            bodies.push(Body::new(
                NVec2::new(bc.x[0], bc.x[1]),
                NVec2::new(bc.v[0], bc.v[1]),
                bc.m,
                bc.radius,
                bc.color,
            ));
        }

        // Coincident bodies make the force undefined from the first step
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                ensure!(
                    (bodies[j].x - bodies[i].x).norm_squared() > 0.0,
                    "bodies {i} and {j} start at the same position"
                );
            }
        }

        // Initial system state: bodies at t = 0
        let system = System {
            bodies,
            reference,
            t: 0.0,
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity { g: parameters.g });

        Ok(Self {
            parameters,
            system,
            forces,
        })
    }
}
