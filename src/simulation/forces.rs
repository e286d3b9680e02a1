//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait and the direct pairwise
//! Newtonian gravity term

use anyhow::{ensure, Result};

use crate::simulation::states::{NVec2, System};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) -> Result<()> {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out)?;
        }
        Ok(())
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body.
/// The system is read-only: every term sees the same position snapshot,
/// so accelerations within one step cannot depend on update order.
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]) -> Result<()>;
}

/// Direct pairwise Newtonian gravity, no softening
///
/// Close encounters produce arbitrarily large forces; coincident bodies
/// have no defined force at all and abort the step with an error rather
/// than feeding NaN/Inf into the state.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) -> Result<()> {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return Ok(());
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            // bi: body i (left side of the pair)
            let bi = &sys.bodies[i];
            let xi = bi.x;      // position of body i
            let mi = bi.m;      // mass of body i

            for j in (i + 1)..n {
                // bj: body j (right side of the pair)
                let bj = &sys.bodies[j];
                let xj = bj.x;  // position of body j
                let mj = bj.m;  // mass of body j

                // r is the displacement vector from i to j
                // If r points from i to j, then i feels a pull along +r,
                // j feels a pull along -r
                let r = xj - xi;

                // Squared separation distance |r|^2
                let d2 = r.norm_squared();

                // Two bodies in the same spot have no defined force
                ensure!(
                    d2 > 0.0,
                    "bodies {i} and {j} are coincident at ({}, {})",
                    xi.x,
                    xi.y
                );

                // 1 / |r|
                let inv_r = d2.sqrt().recip();

                // 1 / |r|^3
                // (this is what appears in the Newtonian acceleration formula:
                //   a = G m r / |r|^3
                // which is F = G m_i m_j / |r|^2 along the unit vector r/|r|,
                // divided through by the mass of the body being accelerated)
                let inv_r3 = inv_r * inv_r * inv_r;

                // Combine G and the distance factor:
                // coef = G / |r|^3
                let coef = self.g * inv_r3;

                // Apply Newton's law:
                // a_i +=  G * m_j * r / |r|^3
                // a_j += -G * m_i * r / |r|^3
                // (equal and opposite)
                out[i] += coef * mj * r;
                out[j] -= coef * mi * r;
            }
        }
        Ok(())
    }
}
