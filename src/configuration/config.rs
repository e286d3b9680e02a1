//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   dt: 86400.0             # timestep, seconds of simulated time per step
//!   G: 6.67428e-11          # gravitational constant
//!   px_per_au: 200.0        # screen scale: pixels per astronomical unit
//!   trail_cap: 2000         # optional bound on trail length
//!
//! bodies:
//!   - x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1.988892e30
//!     radius: 30.0
//!     color: [ 1.0, 1.0, 0.0 ]
//!     reference: true
//!   - x: [ -1.496e11, 0.0 ]
//!     v: [ 0.0, 29783.0 ]
//!     m: 5.9742e24
//!     radius: 16.0
//!     color: [ 0.0, 0.12, 0.98 ]
//! ```
//!
//! All `parameters` fields are optional and fall back to the defaults in
//! `simulation::params`. The engine maps this configuration into its
//! internal runtime scenario representation.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ParametersConfig {
    pub dt: Option<f64>,         // timestep, defaults to one simulated day
    #[serde(rename = "G")]
    pub g: Option<f64>,          // gravitational constant
    pub px_per_au: Option<f64>,  // pixels per AU on screen
    pub trail_cap: Option<usize>, // max trail points per body, omit for unbounded
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>,      // initial position [x, y] in meters
    pub v: Vec<f64>,      // initial velocity [vx, vy] in m/s
    pub m: f64,           // mass in kg, must be strictly positive
    pub radius: f64,      // draw radius in pixels
    pub color: [f32; 3],  // sRGB draw color, each channel in 0..=1
    #[serde(default)]
    pub reference: bool,  // distance-measurement anchor, at most one per scenario
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // list of bodies that define the initial state
}
