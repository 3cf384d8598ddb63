//! Ring shaped particle emission.
//!
//! A [`RingEmitter`] spawns particles inside an elliptical ring with an
//! optional hollow core and scatters their initial directions inside a cone.
//! Emitters are created by name through an [`EmitterRegistry`] and owned by a
//! [`ParticleSystem`], which can also be built from a TOML
//! [`ParticleSystemConfig`].
//!
//! ```
//! use ring_emitter::{EmitterRegistry, ParticleEmitter, ParticleSystem};
//!
//! let registry = EmitterRegistry::with_defaults();
//! let mut system = ParticleSystem::with_seed(1_000, 42);
//!
//! let ring = system.add_emitter(&registry, "Ring").unwrap();
//! let emitter = system.emitter_mut(ring).unwrap();
//! emitter.set_parameter("inner_width", "0.8").unwrap();
//! emitter.set_parameter("angle", "10").unwrap();
//!
//! assert_eq!(system.spawn(ring, 100).unwrap(), 100);
//! ```

pub mod error;
pub mod particles;

pub use error::{ParticleError, ParticleResult};
pub use particles::{
    AreaEmitterConfig, EmitterConfig, EmitterFactory, EmitterId, EmitterRegistry, Particle,
    ParticleEmitter, ParticleSystem, ParticleSystemConfig, ParticleUpdate, RingEmitter,
    RingEmitterFactory,
};
