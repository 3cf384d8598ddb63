//! Error type shared by emitter configuration, the registry and the particle system.
//!
//! Particle initialisation itself never fails; only the configuration-facing
//! paths return these.

use crate::particles::EmitterId;

#[derive(Debug, thiserror::Error)]
pub enum ParticleError {
    #[error("No emitter factory registered for type '{0}'")]
    UnknownEmitterType(String),

    #[error("Emitter '{emitter}' has no parameter named '{name}'")]
    UnknownParameter { emitter: String, name: String },

    #[error("Invalid value '{value}' for parameter '{name}'")]
    InvalidParameterValue { name: String, value: String },

    #[error("No emitter with id {0:?} in this particle system")]
    UnknownEmitter(EmitterId),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ParticleResult<T> = Result<T, ParticleError>;

impl ParticleError {
    pub(crate) fn invalid_value(name: &str, value: &str) -> Self {
        ParticleError::InvalidParameterValue {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
