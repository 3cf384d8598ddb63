pub mod particle;
pub mod math;
pub mod emitter;
pub mod area_emitter;
pub mod ring_emitter;
pub mod registry;
pub mod particle_system;
pub mod config;

pub use particle::Particle;
pub use emitter::ParticleEmitter;
pub use area_emitter::AreaEmitterConfig;
pub use ring_emitter::{RingEmitter, RingEmitterFactory};
pub use registry::{EmitterFactory, EmitterRegistry};
pub use particle_system::{EmitterId, ParticleSystem, ParticleUpdate};
pub use config::{EmitterConfig, ParticleSystemConfig};
