//! Random particle generation
//!
//! Radius and speed are drawn uniformly from configured ranges, the direction
//! of motion uniformly over the sphere, and the position uniformly over the
//! part of the container the particle's center may occupy. A seeded `StdRng`
//! keeps runs reproducible.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::error::{Result, SimError};
use crate::simulation::params::BoundingBox;
use crate::simulation::states::{NVec3, Particle};

/// Largest radius whose mass (0.5 r^2) stays within the color ramp's [0, 1]
pub const MAX_COLOR_RADIUS: f64 = std::f64::consts::SQRT_2;

pub const DEFAULT_RADIUS_RANGE: (f64, f64) = (0.2, 1.4);
pub const DEFAULT_SPEED_RANGE: (f64, f64) = (0.0, 5.0);

pub struct Spawner {
    rng: StdRng,
    radius: (f64, f64),
    speed: (f64, f64),
}

impl Spawner {
    pub fn new(seed: u64, radius: (f64, f64), speed: (f64, f64)) -> Result<Self> {
        if radius.0 <= 0.0 || !radius.0.is_finite() {
            return Err(SimError::invalid("spawn radius min", radius.0));
        }
        if radius.1 < radius.0 || !radius.1.is_finite() {
            return Err(SimError::invalid("spawn radius max", radius.1));
        }
        if speed.0 < 0.0 || !speed.0.is_finite() {
            return Err(SimError::invalid("spawn speed min", speed.0));
        }
        if speed.1 < speed.0 || !speed.1.is_finite() {
            return Err(SimError::invalid("spawn speed max", speed.1));
        }
        if radius.1 > MAX_COLOR_RADIUS {
            warn!(max = radius.1, "spawn radius above sqrt(2): heavy particles saturate the color ramp");
        }
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            radius,
            speed,
        })
    }

    /// Spawner with the default radius and speed ranges
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            radius: DEFAULT_RADIUS_RANGE,
            speed: DEFAULT_SPEED_RANGE,
        }
    }

    /// Sample a particle that starts fully inside `bounds`
    pub fn sample(&mut self, bounds: &BoundingBox) -> Result<Particle> {
        let radius = self.rng.gen_range(self.radius.0..=self.radius.1);
        let speed = self.rng.gen_range(self.speed.0..=self.speed.1);

        let (lo, hi) = bounds.inset(radius);
        let position = NVec3::from_fn(|axis, _| {
            if lo[axis] < hi[axis] {
                self.rng.gen_range(lo[axis]..hi[axis])
            } else {
                0.5 * (lo[axis] + hi[axis])
            }
        });

        Particle::new(radius, position, speed * self.direction())
    }

    /// Uniform unit vector (Archimedes: z uniform in [-1, 1], azimuth uniform)
    fn direction(&mut self) -> NVec3 {
        let z: f64 = self.rng.gen_range(-1.0..=1.0);
        let phi: f64 = self.rng.gen_range(0.0..TAU);
        let ring = (1.0 - z * z).max(0.0).sqrt();
        NVec3::new(ring * phi.cos(), ring * phi.sin(), z)
    }
}
