//! Error types for the sphere simulation
//!
//! - **SimError**: every failure the library can surface
//! - **Result**: alias for `Result<T, SimError>`
//!
//! Numerical degeneracies (e.g. zero velocity when computing a drag direction)
//! are not errors; they are handled where they arise.

use thiserror::Error;

/// Result type alias for simulation operations
pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Error, Debug)]
pub enum SimError {
    /// A physical parameter was out of its valid range (e.g. radius <= 0)
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A scenario file was structurally valid YAML but semantically wrong
    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SimError {
    pub fn invalid(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
