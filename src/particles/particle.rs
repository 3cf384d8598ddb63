use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Initial state of a spawned particle.
///
/// Emitters overwrite every field once per spawn. Aging, simulation and
/// destruction belong to whatever consumes the particles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Spawn position in the particle system's space
    pub position: Vec3,
    /// Unit direction of travel
    pub direction: Vec3,
    /// Initial velocity (`direction * speed`)
    pub velocity: Vec3,
    /// Colour (RGBA)
    pub colour: Vec4,
    /// Remaining lifetime (seconds)
    pub time_to_live: f32,
    /// Lifetime assigned at spawn
    pub total_time_to_live: f32,
}

impl Particle {
    /// Create a blank particle ready to be initialised by an emitter
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::Z,
            velocity: Vec3::ZERO,
            colour: Vec4::ONE,
            time_to_live: 0.0,
            total_time_to_live: 0.0,
        }
    }

    /// Initial speed
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_defaults() {
        let particle = Particle::default();

        assert_eq!(particle.position, Vec3::ZERO);
        assert_eq!(particle.direction, Vec3::Z);
        assert_eq!(particle.speed(), 0.0);
        assert_eq!(particle.colour, Vec4::ONE);
    }

    #[test]
    fn test_particle_serializes() {
        let mut particle = Particle::new();
        particle.position = Vec3::new(1.0, 2.0, 3.0);
        particle.time_to_live = 4.0;

        let text = toml::to_string(&particle).unwrap();
        let back: Particle = toml::from_str(&text).unwrap();
        assert_eq!(back, particle);
    }
}
