//! Runtime engine: the force set, container and collision policy a tick runs
//! against, built once from `Parameters`

use std::sync::OnceLock;

use super::collision::resolve_boundary;
use super::forces::ForceSet;
use super::integrator::semi_implicit_euler;
use super::params::{BoundingBox, CollisionPolicy, Parameters};
use super::states::{Contacts, Particle};

#[derive(Debug)]
pub struct Engine {
    pub forces: ForceSet, // gravity + drag
    pub bounds: BoundingBox, // static container
    pub collision: CollisionPolicy, // boundary response
}

impl Engine {
    pub fn from_parameters(params: &Parameters) -> Self {
        Self {
            forces: ForceSet::from_parameters(params),
            bounds: params.bounds,
            collision: params.collision,
        }
    }

    /// Shared engine with default `Parameters` (Earth gravity, standard drag,
    /// `[-10, 10]^3`, clamp response)
    pub fn standard() -> &'static Engine {
        static STANDARD: OnceLock<Engine> = OnceLock::new();
        STANDARD.get_or_init(|| Engine::from_parameters(&Parameters::default()))
    }

    /// One step for one particle: forces, integration, then boundary response
    pub fn advance(&self, p: &mut Particle, dt: f64) -> Contacts {
        let force = self.forces.net_force(p);
        semi_implicit_euler(p, force, dt);
        resolve_boundary(p, &self.bounds, self.collision)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::from_parameters(&Parameters::default())
    }
}
