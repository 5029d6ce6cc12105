//! Force contributors acting on a single particle
//!
//! Defines the `Force` trait, the `ForceSet` that sums terms, and the two
//! terms the simulation uses: uniform gravity and quadratic drag

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, Particle};

/// Collection of force terms (gravity, drag, etc.)
/// Each term implements [`Force`] and their contributions are summed
/// into one net force per particle
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl std::fmt::Debug for ForceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForceSet")
            .field("terms", &self.terms.len())
            .finish()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with(mut self, term: impl Force + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Gravity plus quadratic drag with the constants from `params`
    pub fn from_parameters(params: &Parameters) -> Self {
        Self::new()
            .with(Gravity { g: params.gravity })
            .with(QuadraticDrag { k: params.drag })
    }

    /// Net force on `p` from every term
    pub fn net_force(&self, p: &Particle) -> NVec3 {
        self.terms
            .iter()
            .fold(NVec3::zeros(), |acc, term| acc + term.force(p))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// A force source depending only on the particle's own state
pub trait Force {
    fn force(&self, p: &Particle) -> NVec3;
}

/// Uniform gravity along -y: `F = (0, -g * m, 0)`
pub struct Gravity {
    pub g: f64,
}

impl Force for Gravity {
    fn force(&self, p: &Particle) -> NVec3 {
        NVec3::new(0.0, -self.g * p.mass(), 0.0)
    }
}

/// Quadratic air resistance opposing motion:
/// `F = -k * speed^2 * radius^2 * v_hat`
pub struct QuadraticDrag {
    pub k: f64,
}

impl Force for QuadraticDrag {
    fn force(&self, p: &Particle) -> NVec3 {
        let speed = p.speed();
        // v_hat is undefined at rest
        if speed == 0.0 {
            return NVec3::zeros();
        }
        let r = p.radius();
        let v_hat = p.velocity() / speed;
        -self.k * speed * speed * r * r * v_hat
    }
}
