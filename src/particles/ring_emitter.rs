//! Emitter that spawns particles inside a ring (a hollow tube).
//!
//! The ring is the ellipse spanned by the area emitter's width and height,
//! minus an inner hollow ellipse given as a fraction of the outer one per
//! axis. Depth extrudes the ring along the emission direction.
//!
//! The radial placement interpolates linearly between the inner and outer
//! fraction on each axis. This is not area-uniform (particles gather towards
//! the inside edge) and is kept that way because effects are authored
//! against this density.

use glam::Vec3;
use rand::RngCore;
use std::f32::consts::TAU;

use crate::error::{ParticleError, ParticleResult};
use crate::particles::emitter::parse_real;
use crate::particles::math;
use crate::particles::{AreaEmitterConfig, EmitterFactory, Particle, ParticleEmitter};

/// Ring shaped area emitter
#[derive(Debug, Clone, PartialEq)]
pub struct RingEmitter {
    area: AreaEmitterConfig,
    // Hollow fraction per axis, expected in [0, 1)
    inner_size_x: f32,
    inner_size_y: f32,
}

impl RingEmitter {
    pub const PARAMETERS: &'static [&'static str] = &["inner_width", "inner_height"];

    pub fn new() -> Self {
        Self::with_area(AreaEmitterConfig::new())
    }

    /// Ring with the given outer geometry and the default half-hollow core
    pub fn with_area(area: AreaEmitterConfig) -> Self {
        Self {
            area,
            inner_size_x: 0.5,
            inner_size_y: 0.5,
        }
    }

    /// Set both hollow fractions.
    ///
    /// 0 is a solid disc, 0.5 half hollow; values towards 1 give an ever
    /// thinner ring. Values are stored as given, including 1.0 and anything
    /// outside `[0, 1)`.
    pub fn set_inner_size(&mut self, x: f32, y: f32) {
        self.inner_size_x = x;
        self.inner_size_y = y;
    }

    /// Hollow fraction along the width axis
    pub fn set_inner_size_x(&mut self, x: f32) {
        self.inner_size_x = x;
    }

    /// Hollow fraction along the height axis
    pub fn set_inner_size_y(&mut self, y: f32) {
        self.inner_size_y = y;
    }

    pub fn inner_size_x(&self) -> f32 {
        self.inner_size_x
    }

    pub fn inner_size_y(&self) -> f32 {
        self.inner_size_y
    }

    /// Normalised local offset of a new particle; x and y lie in the ring,
    /// z in `[-1, 1)`.
    pub fn sample_local_offset<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let theta = math::unit_random(rng) * TAU;
        let (ring_y, ring_x) = theta.sin_cos();

        let a = self.inner_size_x + math::unit_random(rng) * (1.0 - self.inner_size_x);
        let b = self.inner_size_y + math::unit_random(rng) * (1.0 - self.inner_size_y);

        let z = math::symmetric_random(rng);

        Vec3::new(ring_x * a, ring_y * b, z)
    }
}

impl Default for RingEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleEmitter for RingEmitter {
    fn type_name(&self) -> &'static str {
        RingEmitterFactory::NAME
    }

    fn area(&self) -> &AreaEmitterConfig {
        &self.area
    }

    fn area_mut(&mut self) -> &mut AreaEmitterConfig {
        &mut self.area
    }

    fn init_particle(&self, particle: &mut Particle, rng: &mut dyn RngCore) {
        let local = self.sample_local_offset(rng);
        particle.position = self.area.local_to_world(local);

        self.area.init_emission_state(particle, rng);
    }

    fn parameter_names(&self) -> Vec<&'static str> {
        let mut names = AreaEmitterConfig::PARAMETERS.to_vec();
        names.extend_from_slice(Self::PARAMETERS);
        names
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> ParticleResult<()> {
        match name {
            "inner_width" => self.set_inner_size_x(parse_real(name, value)?),
            "inner_height" => self.set_inner_size_y(parse_real(name, value)?),
            _ => {
                if !self.area.set_parameter(name, value)? {
                    return Err(ParticleError::UnknownParameter {
                        emitter: self.type_name().to_string(),
                        name: name.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn get_parameter(&self, name: &str) -> Option<String> {
        match name {
            "inner_width" => Some(self.inner_size_x.to_string()),
            "inner_height" => Some(self.inner_size_y.to_string()),
            _ => self.area.get_parameter(name),
        }
    }
}

/// Creates [`RingEmitter`]s under the type name `"Ring"`
#[derive(Debug, Clone, Copy, Default)]
pub struct RingEmitterFactory;

impl RingEmitterFactory {
    pub const NAME: &'static str = "Ring";
}

impl EmitterFactory for RingEmitterFactory {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn create(&self) -> Box<dyn ParticleEmitter> {
        Box::new(RingEmitter::new())
    }
}
