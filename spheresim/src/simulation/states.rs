//! Core state types for the sphere simulation
//!
//! - `Particle`: one sphere's physical state (radius, mass, color, position, velocity)
//! - `Rgb`: color derived from mass, on a 0..=255 scale
//! - `Contacts`: which axes were clamped against the container during a tick
//! - `Snapshot`: the read-only view a renderer consumes once per frame
//!
//! `mass`/`color` depend only on `radius`, and `speed` only on `velocity`. The
//! fields are private and the setters recompute dependents in one go, so the
//! cached values can never go stale.

use nalgebra::Vector3;

use crate::error::{Result, SimError};
use crate::simulation::engine::Engine;

pub type NVec3 = Vector3<f64>;

/// RGB color with each channel in `[0, 255]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Piecewise-linear mass -> color ramp: light particles are blue, mid-mass
    /// particles green, heavy particles red.
    ///
    /// Only meaningful for `mass` in `[0, 1]` (radius up to sqrt(2)); outside that
    /// range the channels saturate.
    pub fn from_mass(mass: f64) -> Self {
        let channel = |v: f64| (255.0 * v).clamp(0.0, 255.0);
        Self {
            r: channel(mass),
            g: channel(1.0 - (1.0 - 2.0 * mass).abs()),
            b: channel(1.0 - mass),
        }
    }

    /// Channels rescaled to `[0, 1]` for GPU consumption
    pub fn to_unit(self) -> [f32; 3] {
        [
            (self.r / 255.0) as f32,
            (self.g / 255.0) as f32,
            (self.b / 255.0) as f32,
        ]
    }
}

/// Per-axis record of boundary clamps during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts(pub [bool; 3]);

impl Contacts {
    pub fn any(&self) -> bool {
        self.0.iter().any(|&hit| hit)
    }

    pub fn axis(&self, axis: usize) -> bool {
        self.0[axis]
    }
}

/// What a renderer needs to place and color a sphere mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub radius: f64,
    pub position: NVec3,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    radius: f64, // sphere radius, > 0
    mass: f64, // 0.5 * radius^2
    color: Rgb, // from mass
    position: NVec3, // world-space center
    velocity: NVec3, // world-space velocity
    speed: f64, // |velocity|
}

impl Particle {
    /// Create a particle; fails if `radius` is not strictly positive
    pub fn new(radius: f64, position: NVec3, velocity: NVec3) -> Result<Self> {
        let mut particle = Self::default();
        particle.set_radius(radius)?;
        particle.set_position(position);
        particle.set_velocity(velocity);
        Ok(particle)
    }

    /// Reassign the radius, recomputing mass and color
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        if radius <= 0.0 || !radius.is_finite() {
            return Err(SimError::invalid("radius", radius));
        }
        self.radius = radius;
        self.mass = 0.5 * radius * radius;
        self.color = Rgb::from_mass(self.mass);
        Ok(())
    }

    /// Reassign the velocity, recomputing speed
    pub fn set_velocity(&mut self, velocity: NVec3) {
        self.velocity = velocity;
        self.speed = velocity.norm();
    }

    pub fn set_position(&mut self, position: NVec3) {
        self.position = position;
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn position(&self) -> NVec3 {
        self.position
    }

    pub fn velocity(&self) -> NVec3 {
        self.velocity
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.speed * self.speed
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            radius: self.radius,
            position: self.position,
            color: self.color,
        }
    }

    /// Advance by `dt` seconds under Earth gravity, standard drag and the
    /// default `[-10, 10]^3` container
    pub fn tick(&mut self, dt: f64) -> Contacts {
        Engine::standard().advance(self, dt)
    }

    /// Advance by `dt` seconds using the forces and container of `engine`
    pub fn tick_with(&mut self, dt: f64, engine: &Engine) -> Contacts {
        engine.advance(self, dt)
    }
}

impl Default for Particle {
    /// Unit-radius particle at rest at the origin
    fn default() -> Self {
        let radius = 1.0;
        let mass = 0.5 * radius * radius;
        Self {
            radius,
            mass,
            color: Rgb::from_mass(mass),
            position: NVec3::zeros(),
            velocity: NVec3::zeros(),
            speed: 0.0,
        }
    }
}
