//! Random sampling helpers used by the emitters.
//!
//! Every function takes the random source explicitly so that a seeded
//! generator reproduces a whole emission sequence.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Uniform value in `[0, 1)`.
#[inline]
pub fn unit_random<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f32>()
}

/// Uniform value in `[-1, 1)`.
#[inline]
pub fn symmetric_random<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f32>() * 2.0 - 1.0
}

/// Uniform value between `min` and `max`.
///
/// Unlike `Rng::gen_range` this accepts an empty or inverted range and
/// simply interpolates, so out-of-range configuration degrades instead of
/// panicking.
#[inline]
pub fn range_random<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.gen::<f32>()
}

/// Unit vector perpendicular to `v`.
pub fn perpendicular(v: Vec3) -> Vec3 {
    if v.x.abs() < 0.9 {
        v.cross(Vec3::X).normalize()
    } else {
        v.cross(Vec3::Y).normalize()
    }
}

/// Random unit vector inside the cone of half-angle `angle` around `direction`.
///
/// Directions are uniform over the solid angle of the cap. Angles of `PI` or
/// more cover the whole sphere. `direction` is expected to be normalised.
pub fn random_deviant<R: Rng + ?Sized>(rng: &mut R, direction: Vec3, angle: f32) -> Vec3 {
    let cos_max = angle.clamp(0.0, PI).cos();
    let cos_theta = 1.0 - rng.gen::<f32>() * (1.0 - cos_max);
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    let phi = rng.gen::<f32>() * TAU;

    let tangent = perpendicular(direction);
    let bitangent = direction.cross(tangent);

    let around = tangent * phi.cos() + bitangent * phi.sin();
    (around * sin_theta + direction * cos_theta).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scalar_ranges() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let u = unit_random(&mut rng);
            assert!((0.0..1.0).contains(&u));

            let s = symmetric_random(&mut rng);
            assert!((-1.0..1.0).contains(&s));

            let r = range_random(&mut rng, 2.0, 4.0);
            assert!((2.0..4.0).contains(&r));
        }
    }

    #[test]
    fn test_range_random_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(range_random(&mut rng, 3.0, 3.0), 3.0);

        // Inverted bounds interpolate instead of panicking
        let v = range_random(&mut rng, 4.0, 2.0);
        assert!(v <= 4.0 && v > 2.0);
    }

    #[test]
    fn test_perpendicular() {
        for v in [Vec3::X, Vec3::Y, Vec3::Z, Vec3::new(1.0, 1.0, 1.0).normalize()] {
            let p = perpendicular(v);
            assert!(p.dot(v).abs() < 1e-6);
            assert!((p.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_random_deviant_stays_in_cone() {
        let mut rng = StdRng::seed_from_u64(42);
        let direction = Vec3::new(0.0, 1.0, 1.0).normalize();
        let angle = 0.3;

        for _ in 0..1000 {
            let d = random_deviant(&mut rng, direction, angle);
            assert!((d.length() - 1.0).abs() < 1e-5);
            assert!(d.dot(direction).clamp(-1.0, 1.0).acos() <= angle + 1e-4);
        }
    }
}
