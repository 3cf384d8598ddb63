//! Settings shared by every area shaped emitter.
//!
//! An area emitter places particles inside a box of `width × height × depth`
//! oriented by its direction and up vectors. The scaled axes of that box
//! map a local offset in `[-1, 1]³` to a spawn position.

use glam::{Vec3, Vec4};
use rand::Rng;

use crate::error::{ParticleError, ParticleResult};
use crate::particles::emitter::{format_colour, format_vector3, parse_colour, parse_real, parse_vector3};
use crate::particles::math;
use crate::particles::Particle;

/// Outer geometry, transform and emission ranges of an area emitter
#[derive(Debug, Clone, PartialEq)]
pub struct AreaEmitterConfig {
    position: Vec3,
    direction: Vec3,
    up: Vec3,
    /// Scatter half-angle in radians
    angle: f32,
    width: f32,
    height: f32,
    depth: f32,
    min_speed: f32,
    max_speed: f32,
    min_time_to_live: f32,
    max_time_to_live: f32,
    colour_range_start: Vec4,
    colour_range_end: Vec4,
    emission_rate: f32,
}

impl AreaEmitterConfig {
    /// String parameter names understood by [`AreaEmitterConfig::set_parameter`]
    pub const PARAMETERS: &'static [&'static str] = &[
        "position",
        "direction",
        "up",
        "angle",
        "width",
        "height",
        "depth",
        "velocity",
        "velocity_min",
        "velocity_max",
        "time_to_live",
        "time_to_live_min",
        "time_to_live_max",
        "colour",
        "colour_range_start",
        "colour_range_end",
        "emission_rate",
    ];

    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::Z,
            up: Vec3::Y,
            angle: 0.0,
            width: 100.0,
            height: 100.0,
            depth: 100.0,
            min_speed: 1.0,
            max_speed: 1.0,
            min_time_to_live: 5.0,
            max_time_to_live: 5.0,
            colour_range_start: Vec4::ONE,
            colour_range_end: Vec4::ONE,
            emission_rate: 10.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Base emission direction (unit length)
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Set the base direction. The up vector is reset to a perpendicular.
    ///
    /// A zero vector is ignored.
    pub fn set_direction(&mut self, direction: Vec3) {
        match direction.try_normalize() {
            Some(dir) => {
                self.direction = dir;
                self.up = math::perpendicular(dir);
            }
            None => log::warn!("[AreaEmitterConfig] Ignoring zero-length direction"),
        }
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Set the up vector; it is made perpendicular to the direction.
    pub fn set_up(&mut self, up: Vec3) {
        let projected = up - self.direction * up.dot(self.direction);
        match projected.try_normalize() {
            Some(up) => self.up = up,
            None => log::warn!("[AreaEmitterConfig] Ignoring up vector parallel to direction"),
        }
    }

    /// Scatter half-angle in radians
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn set_angle(&mut self, radians: f32) {
        self.angle = radians;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    pub fn set_depth(&mut self, depth: f32) {
        self.depth = depth;
    }

    pub fn set_size(&mut self, width: f32, height: f32, depth: f32) {
        self.width = width;
        self.height = height;
        self.depth = depth;
    }

    pub fn min_speed(&self) -> f32 {
        self.min_speed
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Fixed initial speed
    pub fn set_speed(&mut self, speed: f32) {
        self.min_speed = speed;
        self.max_speed = speed;
    }

    pub fn set_speed_range(&mut self, min: f32, max: f32) {
        self.min_speed = min;
        self.max_speed = max;
    }

    pub fn min_time_to_live(&self) -> f32 {
        self.min_time_to_live
    }

    pub fn max_time_to_live(&self) -> f32 {
        self.max_time_to_live
    }

    pub fn set_time_to_live(&mut self, ttl: f32) {
        self.min_time_to_live = ttl;
        self.max_time_to_live = ttl;
    }

    pub fn set_time_to_live_range(&mut self, min: f32, max: f32) {
        self.min_time_to_live = min;
        self.max_time_to_live = max;
    }

    pub fn colour_range_start(&self) -> Vec4 {
        self.colour_range_start
    }

    pub fn colour_range_end(&self) -> Vec4 {
        self.colour_range_end
    }

    pub fn set_colour(&mut self, colour: Vec4) {
        self.colour_range_start = colour;
        self.colour_range_end = colour;
    }

    pub fn set_colour_range(&mut self, start: Vec4, end: Vec4) {
        self.colour_range_start = start;
        self.colour_range_end = end;
    }

    /// Particles per second
    pub fn emission_rate(&self) -> f32 {
        self.emission_rate
    }

    pub fn set_emission_rate(&mut self, rate: f32) {
        self.emission_rate = rate;
    }

    /// Local X axis scaled to half the width
    pub fn x_range(&self) -> Vec3 {
        self.up.cross(self.direction) * (self.width * 0.5)
    }

    /// Local Y axis (up) scaled to half the height
    pub fn y_range(&self) -> Vec3 {
        self.up * (self.height * 0.5)
    }

    /// Local Z axis (direction) scaled to half the depth
    pub fn z_range(&self) -> Vec3 {
        self.direction * (self.depth * 0.5)
    }

    /// Map a normalised local offset (each axis in `[-1, 1]`) to a position
    pub fn local_to_world(&self, local: Vec3) -> Vec3 {
        self.position + self.x_range() * local.x + self.y_range() * local.y + self.z_range() * local.z
    }

    /// Initial direction. No randomness is consumed when the angle is zero.
    pub fn gen_emission_direction<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        if self.angle != 0.0 {
            math::random_deviant(rng, self.direction, self.angle)
        } else {
            self.direction
        }
    }

    pub fn gen_emission_speed<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.min_speed != self.max_speed {
            math::range_random(rng, self.min_speed, self.max_speed)
        } else {
            self.min_speed
        }
    }

    pub fn gen_emission_time_to_live<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.min_time_to_live != self.max_time_to_live {
            math::range_random(rng, self.min_time_to_live, self.max_time_to_live)
        } else {
            self.min_time_to_live
        }
    }

    pub fn gen_emission_colour<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec4 {
        if self.colour_range_start == self.colour_range_end {
            return self.colour_range_start;
        }

        let start = self.colour_range_start;
        let end = self.colour_range_end;
        Vec4::new(
            math::range_random(rng, start.x, end.x),
            math::range_random(rng, start.y, end.y),
            math::range_random(rng, start.z, end.z),
            math::range_random(rng, start.w, end.w),
        )
    }

    /// Fill everything except the position
    pub fn init_emission_state<R: Rng + ?Sized>(&self, particle: &mut Particle, rng: &mut R) {
        let direction = self.gen_emission_direction(rng);
        let speed = self.gen_emission_speed(rng);

        particle.direction = direction;
        particle.velocity = direction * speed;
        particle.colour = self.gen_emission_colour(rng);
        particle.time_to_live = self.gen_emission_time_to_live(rng);
        particle.total_time_to_live = particle.time_to_live;
    }

    /// Set a parameter from text.
    ///
    /// Returns `Ok(false)` when the name is not an area emitter parameter so
    /// the owning emitter can report it under its own type name.
    pub fn set_parameter(&mut self, name: &str, value: &str) -> ParticleResult<bool> {
        match name {
            "position" => self.set_position(parse_vector3(name, value)?),
            "direction" => {
                let dir = parse_vector3(name, value)?;
                if dir.length_squared() == 0.0 {
                    return Err(ParticleError::invalid_value(name, value));
                }
                self.set_direction(dir);
            }
            "up" => {
                let up = parse_vector3(name, value)?;
                if up.length_squared() == 0.0 {
                    return Err(ParticleError::invalid_value(name, value));
                }
                self.set_up(up);
            }
            "angle" => self.set_angle(parse_real(name, value)?.to_radians()),
            "width" => self.set_width(parse_real(name, value)?),
            "height" => self.set_height(parse_real(name, value)?),
            "depth" => self.set_depth(parse_real(name, value)?),
            "velocity" => self.set_speed(parse_real(name, value)?),
            "velocity_min" => self.min_speed = parse_real(name, value)?,
            "velocity_max" => self.max_speed = parse_real(name, value)?,
            "time_to_live" => self.set_time_to_live(parse_real(name, value)?),
            "time_to_live_min" => self.min_time_to_live = parse_real(name, value)?,
            "time_to_live_max" => self.max_time_to_live = parse_real(name, value)?,
            "colour" => self.set_colour(parse_colour(name, value)?),
            "colour_range_start" => self.colour_range_start = parse_colour(name, value)?,
            "colour_range_end" => self.colour_range_end = parse_colour(name, value)?,
            "emission_rate" => self.set_emission_rate(parse_real(name, value)?),
            _ => return Ok(false),
        }

        log::debug!("[AreaEmitterConfig] {} = {}", name, value);
        Ok(true)
    }

    /// Current value of a parameter as text
    pub fn get_parameter(&self, name: &str) -> Option<String> {
        let value = match name {
            "position" => format_vector3(self.position),
            "direction" => format_vector3(self.direction),
            "up" => format_vector3(self.up),
            "angle" => self.angle.to_degrees().to_string(),
            "width" => self.width.to_string(),
            "height" => self.height.to_string(),
            "depth" => self.depth.to_string(),
            "velocity" | "velocity_min" => self.min_speed.to_string(),
            "velocity_max" => self.max_speed.to_string(),
            "time_to_live" | "time_to_live_min" => self.min_time_to_live.to_string(),
            "time_to_live_max" => self.max_time_to_live.to_string(),
            "colour" | "colour_range_start" => format_colour(self.colour_range_start),
            "colour_range_end" => format_colour(self.colour_range_end),
            "emission_rate" => self.emission_rate.to_string(),
            _ => return None,
        };
        Some(value)
    }
}

impl Default for AreaEmitterConfig {
    fn default() -> Self {
        Self::new()
    }
}
