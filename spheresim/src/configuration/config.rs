//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`RunConfig`]        – step size, number of steps, reporting cadence
//! - [`ParametersConfig`] – physical constants and collision policy
//! - [`BoundsConfig`]     – the static container
//! - [`SpawnConfig`]      – optional batch of randomly sampled particles
//! - [`ParticleConfig`]   – explicit initial state for individual particles
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Everything except `run` may be omitted and falls back to the defaults in
//! `simulation::params`.
//!
//! # YAML format
//!
//! ```yaml
//! run:
//!   dt: 0.016               # seconds per step
//!   steps: 600              # number of steps to run
//!   report_every: 60        # log a progress line every N steps
//!
//! parameters:
//!   gravity: 9.81           # m/s^2 along -y
//!   drag: 0.1               # quadratic drag coefficient k
//!   collision: "clamp"      # or "mirror"
//!
//! bounds:
//!   min: [ -10.0, -10.0, -10.0 ]
//!   max: [  10.0,  10.0,  10.0 ]
//!
//! spawn:
//!   count: 50
//!   seed: 42
//!   radius: [ 0.2, 1.4 ]
//!   speed: [ 0.0, 5.0 ]
//!
//! particles:
//!   - radius: 1.0
//!     x: [ 0.0, 5.0, 0.0 ]
//!     v: [ 0.0, 0.0, 0.0 ]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::simulation::params::{CollisionPolicy, DEFAULT_HALF_EXTENT, DRAG_COEFFICIENT, EARTH_GRAVITY};
use crate::simulation::spawn::{DEFAULT_RADIUS_RANGE, DEFAULT_SPEED_RANGE};

/// Boundary response selected in YAML
/// `collision: "clamp"` or `collision: "mirror"`
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionConfig {
    #[serde(rename = "clamp")] // snap onto the face and reflect velocity
    #[default]
    Clamp,

    #[serde(rename = "mirror")] // reflect the overshoot back inside and reflect velocity
    Mirror,
}

impl From<CollisionConfig> for CollisionPolicy {
    fn from(cfg: CollisionConfig) -> Self {
        match cfg {
            CollisionConfig::Clamp => CollisionPolicy::Clamp,
            CollisionConfig::Mirror => CollisionPolicy::Mirror,
        }
    }
}

/// How long and how finely to run the scenario
#[derive(Deserialize, Debug, Clone)]
pub struct RunConfig {
    pub dt: f64, // step size in seconds
    pub steps: u64, // number of steps
    #[serde(default = "default_report_every")]
    pub report_every: u64, // progress log cadence, 0 = final summary only
}

fn default_report_every() -> u64 {
    60
}

/// Physical constants
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_gravity")]
    pub gravity: f64, // gravitational acceleration along -y
    #[serde(default = "default_drag")]
    pub drag: f64, // quadratic drag coefficient
    #[serde(default)]
    pub collision: CollisionConfig, // boundary response
}

fn default_gravity() -> f64 {
    EARTH_GRAVITY
}

fn default_drag() -> f64 {
    DRAG_COEFFICIENT
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            gravity: EARTH_GRAVITY,
            drag: DRAG_COEFFICIENT,
            collision: CollisionConfig::default(),
        }
    }
}

/// Axis-aligned container corners
#[derive(Deserialize, Debug, Clone)]
pub struct BoundsConfig {
    pub min: Vec<f64>,
    pub max: Vec<f64>,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            min: vec![-DEFAULT_HALF_EXTENT; 3],
            max: vec![DEFAULT_HALF_EXTENT; 3],
        }
    }
}

/// Batch of randomly sampled particles
#[derive(Deserialize, Debug, Clone)]
pub struct SpawnConfig {
    pub count: usize, // number of particles to sample
    #[serde(default)]
    pub seed: u64, // rng seed so runs are reproducible
    #[serde(default = "default_radius_range")]
    pub radius: [f64; 2], // uniform radius range, keep <= sqrt(2) for the color ramp
    #[serde(default = "default_speed_range")]
    pub speed: [f64; 2], // uniform initial speed range
}

fn default_radius_range() -> [f64; 2] {
    [DEFAULT_RADIUS_RANGE.0, DEFAULT_RADIUS_RANGE.1]
}

fn default_speed_range() -> [f64; 2] {
    [DEFAULT_SPEED_RANGE.0, DEFAULT_SPEED_RANGE.1]
}

/// Initial state of one explicitly placed particle
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleConfig {
    pub radius: f64, // must be > 0
    pub x: Vec<f64>, // initial position
    #[serde(default = "zero_vec")]
    pub v: Vec<f64>, // initial velocity
}

fn zero_vec() -> Vec<f64> {
    vec![0.0; 3]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub run: RunConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub bounds: BoundsConfig,
    #[serde(default)]
    pub spawn: Option<SpawnConfig>,
    #[serde(default)]
    pub particles: Vec<ParticleConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
