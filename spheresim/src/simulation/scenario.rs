//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario`, containing:
//! - run settings (`RunConfig`)
//! - the runtime `Parameters`
//! - a `ParticleSystem` populated with the explicit and spawned particles
//!
//! The driver then steps `system` and reads its snapshots once per frame

use tracing::debug;

use crate::configuration::config::{RunConfig, ScenarioConfig};
use crate::error::{Result, SimError};
use crate::simulation::params::{BoundingBox, Parameters};
use crate::simulation::spawn::Spawner;
use crate::simulation::states::{NVec3, Particle};
use crate::simulation::system::ParticleSystem;

#[derive(Debug)]
pub struct Scenario {
    pub run: RunConfig,
    pub parameters: Parameters,
    pub system: ParticleSystem,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        if cfg.run.dt < 0.0 || !cfg.run.dt.is_finite() {
            return Err(SimError::invalid("run.dt", cfg.run.dt));
        }

        // Container: corners from BoundsConfig
        let bounds = BoundingBox::new(
            vec3("bounds.min", &cfg.bounds.min)?,
            vec3("bounds.max", &cfg.bounds.max)?,
        )?;

        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters {
            gravity: cfg.parameters.gravity,
            drag: cfg.parameters.drag,
            bounds,
            collision: cfg.parameters.collision.into(),
        };

        let mut system = ParticleSystem::with_parameters(&parameters);

        // Explicit particles: map `ParticleConfig` -> runtime `Particle`
        for pc in &cfg.particles {
            let particle = Particle::new(pc.radius, vec3("particle x", &pc.x)?, vec3("particle v", &pc.v)?)?;
            if !bounds.fits(particle.radius()) {
                return Err(SimError::invalid("radius (wider than bounds)", pc.radius));
            }
            system.add(particle);
        }

        // Random batch, after the explicit ones
        if let Some(spawn) = &cfg.spawn {
            if !bounds.fits(spawn.radius[1]) {
                return Err(SimError::invalid("spawn radius max (wider than bounds)", spawn.radius[1]));
            }
            let mut spawner = Spawner::new(
                spawn.seed,
                (spawn.radius[0], spawn.radius[1]),
                (spawn.speed[0], spawn.speed[1]),
            )?;
            for _ in 0..spawn.count {
                system.add_random(&mut spawner)?;
            }
        }

        debug!(particles = system.len(), dt = cfg.run.dt, steps = cfg.run.steps, "scenario built");

        Ok(Self {
            run: cfg.run,
            parameters,
            system,
        })
    }
}

fn vec3(what: &str, xs: &[f64]) -> Result<NVec3> {
    match xs {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(SimError::config(format!("{what}: expected 3 components, got {}", xs.len()))),
    }
}
