pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{Result, SimError};

pub use simulation::states::{Particle, Rgb, Contacts, Snapshot, NVec3};
pub use simulation::params::{Parameters, BoundingBox, CollisionPolicy, EARTH_GRAVITY, DRAG_COEFFICIENT};
pub use simulation::forces::{Force, ForceSet, Gravity, QuadraticDrag};
pub use simulation::engine::Engine;
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::collision::resolve_boundary;
pub use simulation::spawn::Spawner;
pub use simulation::system::ParticleSystem;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, RunConfig, ParametersConfig, BoundsConfig, SpawnConfig, ParticleConfig, CollisionConfig};

pub use benchmark::benchmark::{bench_step, bench_throughput};
