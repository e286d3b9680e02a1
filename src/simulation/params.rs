//! Physical constants and runtime parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration timestep `dt`,
//! - gravitational constant `g`,
//! - world-to-screen scale (`px_per_au`),
//! - optional trail cap for long runs

/// Astronomical unit in meters, the natural length scale for
/// initial conditions and screen mapping
pub const AU: f64 = 1.496e11;

/// Gravitational constant in N·m²/kg²
pub const G: f64 = 6.67428e-11;

/// One simulated day in seconds, the default timestep
pub const DAY: f64 = 86_400.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // fixed timestep, seconds of simulated time per step
    pub g: f64, // gravitational constant
    pub px_per_au: f64, // screen scale: pixels per astronomical unit
    pub trail_cap: Option<usize>, // max trail points per body, None = unbounded
}
