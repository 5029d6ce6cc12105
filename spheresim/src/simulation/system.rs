//! Owner of the particle collection
//!
//! `ParticleSystem` holds particles in insertion order and fans each step out
//! to them. Particles never read each other, so with the `parallel` feature
//! the fan-out runs on rayon's pool; the end of the parallel iterator is the
//! only synchronization point.

use tracing::debug;

use crate::error::Result;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::spawn::Spawner;
use crate::simulation::states::{Particle, Snapshot};

#[derive(Debug)]
pub struct ParticleSystem {
    particles: Vec<Particle>, // insertion order, no physical meaning
    engine: Engine, // forces + container shared by every particle
}

impl ParticleSystem {
    /// Empty system with default parameters
    pub fn new() -> Self {
        Self::with_engine(Engine::default())
    }

    pub fn with_parameters(params: &Parameters) -> Self {
        Self::with_engine(Engine::from_parameters(params))
    }

    pub fn with_engine(engine: Engine) -> Self {
        Self {
            particles: Vec::new(),
            engine,
        }
    }

    pub fn add(&mut self, particle: Particle) {
        self.particles.push(particle);
        debug!(count = self.particles.len(), "particle added");
    }

    /// Append a unit-radius particle at rest at the origin
    pub fn add_default(&mut self) {
        self.add(Particle::default());
    }

    /// Append a randomly sampled particle that fits inside this system's container
    pub fn add_random(&mut self, spawner: &mut Spawner) -> Result<()> {
        let particle = spawner.sample(&self.engine.bounds)?;
        self.add(particle);
        Ok(())
    }

    /// Drop every particle
    pub fn reset(&mut self) {
        debug!(dropped = self.particles.len(), "particle system reset");
        self.particles.clear();
    }

    /// Advance every particle by `dt`. Returns how many particles touched the
    /// container during this step.
    pub fn step(&mut self, dt: f64) -> usize {
        let engine = &self.engine;

        #[cfg(feature = "parallel")]
        let touched = {
            use rayon::prelude::*;
            self.particles
                .par_iter_mut()
                .map(|p| engine.advance(p, dt))
                .filter(|c| c.any())
                .count()
        };

        #[cfg(not(feature = "parallel"))]
        let touched = self
            .particles
            .iter_mut()
            .map(|p| engine.advance(p, dt))
            .filter(|c| c.any())
            .count();

        touched
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Render view of every particle, in insertion order
    pub fn snapshots(&self) -> Vec<Snapshot> {
        self.particles.iter().map(Particle::snapshot).collect()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new()
    }
}
