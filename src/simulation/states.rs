//! Core state types for the N-body simulation.
//!
//! Defines the body/system structs:
//! - `Body` holds one object's physical state plus its visual attributes
//! - `System` holds the ordered list of bodies and the current time `t`
//!
//! The body list is fixed for the lifetime of a run: bodies are created
//! once at scenario build time and never added or removed afterwards.

use std::collections::VecDeque;

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position, meters
    pub v: NVec2, // velocity, m/s
    pub m: f64, // mass, kg (strictly positive)
    pub radius: f64, // draw radius, pixels (visual only)
    pub color: [f32; 3], // sRGB draw color (visual only)
    pub dist_to_reference: f64, // separation from the reference body, meters
    pub trail: VecDeque<NVec2>, // past positions, oldest first
}

impl Body {
    pub fn new(x: NVec2, v: NVec2, m: f64, radius: f64, color: [f32; 3]) -> Self {
        Self {
            x,
            v,
            m,
            radius,
            color,
            dist_to_reference: 0.0,
            trail: VecDeque::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection of bodies
    pub reference: Option<usize>, // index of the distance-measurement anchor
    pub t: f64, // time, seconds
}
