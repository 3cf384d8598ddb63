use glam::{Vec3, Vec4};
use rand::RngCore;

use crate::error::{ParticleError, ParticleResult};
use crate::particles::{AreaEmitterConfig, Particle};

/// A shaped source of particles.
///
/// Implementors own an [`AreaEmitterConfig`] and add their own geometry on
/// top of it. The string parameter methods let a configuration loader set
/// any emitter without knowing its concrete type.
pub trait ParticleEmitter: std::fmt::Debug {
    /// Registry name of this emitter type
    fn type_name(&self) -> &'static str;

    /// Shared area emitter settings
    fn area(&self) -> &AreaEmitterConfig;

    /// Mutable access to the shared area emitter settings
    fn area_mut(&mut self) -> &mut AreaEmitterConfig;

    /// Write the initial state of one newly spawned particle.
    fn init_particle(&self, particle: &mut Particle, rng: &mut dyn RngCore);

    /// Names accepted by [`ParticleEmitter::set_parameter`]
    fn parameter_names(&self) -> Vec<&'static str> {
        AreaEmitterConfig::PARAMETERS.to_vec()
    }

    /// Set a parameter from its textual form
    fn set_parameter(&mut self, name: &str, value: &str) -> ParticleResult<()> {
        if self.area_mut().set_parameter(name, value)? {
            Ok(())
        } else {
            Err(ParticleError::UnknownParameter {
                emitter: self.type_name().to_string(),
                name: name.to_string(),
            })
        }
    }

    /// Current value of a parameter in its textual form
    fn get_parameter(&self, name: &str) -> Option<String> {
        self.area().get_parameter(name)
    }

    /// Particles per second requested by this emitter
    fn emission_rate(&self) -> f32 {
        self.area().emission_rate()
    }
}

/// Parse a single real value
pub(crate) fn parse_real(name: &str, value: &str) -> ParticleResult<f32> {
    match value.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParticleError::invalid_value(name, value)),
    }
}

fn parse_reals(name: &str, value: &str) -> ParticleResult<Vec<f32>> {
    value
        .split_whitespace()
        .map(|part| parse_real(name, part).map_err(|_| ParticleError::invalid_value(name, value)))
        .collect()
}

/// Parse three space separated reals
pub(crate) fn parse_vector3(name: &str, value: &str) -> ParticleResult<Vec3> {
    match parse_reals(name, value)?.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(ParticleError::invalid_value(name, value)),
    }
}

/// Parse an RGB or RGBA colour; alpha defaults to 1
pub(crate) fn parse_colour(name: &str, value: &str) -> ParticleResult<Vec4> {
    match parse_reals(name, value)?.as_slice() {
        [r, g, b] => Ok(Vec4::new(*r, *g, *b, 1.0)),
        [r, g, b, a] => Ok(Vec4::new(*r, *g, *b, *a)),
        _ => Err(ParticleError::invalid_value(name, value)),
    }
}

pub(crate) fn format_vector3(v: Vec3) -> String {
    format!("{} {} {}", v.x, v.y, v.z)
}

pub(crate) fn format_colour(c: Vec4) -> String {
    format!("{} {} {} {}", c.x, c.y, c.z, c.w)
}
