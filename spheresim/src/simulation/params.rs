//! Physical constants and runtime parameters for the simulation
//!
//! `Parameters` holds:
//! - gravitational acceleration `gravity` and quadratic drag coefficient `drag`,
//! - the static axis-aligned container `bounds`,
//! - the collision response policy

use nalgebra::Vector3;

use crate::error::{Result, SimError};
use crate::simulation::states::NVec3;

/// Earth surface gravity (m/s^2)
pub const EARTH_GRAVITY: f64 = 9.81;

/// Quadratic drag coefficient `k` in `drag = -k * speed^2 * radius^2 * v_hat`
pub const DRAG_COEFFICIENT: f64 = 0.1;

/// Half-extent of the default container on every axis
pub const DEFAULT_HALF_EXTENT: f64 = 10.0;

/// Static axis-aligned box the particles live in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min: NVec3,
    max: NVec3,
}

impl BoundingBox {
    /// Build a box, requiring `min < max` on every axis
    pub fn new(min: NVec3, max: NVec3) -> Result<Self> {
        for axis in 0..3 {
            let extent = max[axis] - min[axis];
            if extent <= 0.0 || !extent.is_finite() {
                return Err(SimError::invalid("bounds extent", extent));
            }
        }
        Ok(Self { min, max })
    }

    /// Cube `[-half, half]^3`
    pub fn cube(half: f64) -> Result<Self> {
        Self::new(Vector3::repeat(-half), Vector3::repeat(half))
    }

    pub fn min(&self) -> NVec3 {
        self.min
    }

    pub fn max(&self) -> NVec3 {
        self.max
    }

    /// Range a sphere's center may occupy: `[min + radius, max - radius]`.
    ///
    /// Empty (`lo > hi`) on any axis where the sphere is wider than the box;
    /// such a sphere gets snapped onto a face every tick and can never satisfy
    /// the containment bound. Check with [`BoundingBox::fits`] before adding.
    pub fn inset(&self, radius: f64) -> (NVec3, NVec3) {
        (self.min.add_scalar(radius), self.max.add_scalar(-radius))
    }

    /// Whether a sphere of `radius` has room on every axis
    pub fn fits(&self, radius: f64) -> bool {
        let (lo, hi) = self.inset(radius);
        (0..3).all(|axis| lo[axis] <= hi[axis])
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min: Vector3::repeat(-DEFAULT_HALF_EXTENT),
            max: Vector3::repeat(DEFAULT_HALF_EXTENT),
        }
    }
}

/// How a particle that reached the inset boundary is put back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Snap the center onto the inset face and negate that velocity component
    #[default]
    Clamp,
    /// Reflect the overshoot back inside (as if the particle bounced at the
    /// contact instant), then negate that velocity component
    Mirror,
}

#[derive(Debug, Clone)]
pub struct Parameters {
    pub gravity: f64, // gravitational acceleration g
    pub drag: f64, // quadratic drag coefficient k
    pub bounds: BoundingBox, // static container
    pub collision: CollisionPolicy, // boundary response
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            gravity: EARTH_GRAVITY,
            drag: DRAG_COEFFICIENT,
            bounds: BoundingBox::default(),
            collision: CollisionPolicy::Clamp,
        }
    }
}
