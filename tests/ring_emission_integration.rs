// End-to-end checks of ring emission through the public API: registry,
// particle system, configuration files and the sampling contract.

use std::io::Write;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use ring_emitter::{
    EmitterRegistry, Particle, ParticleEmitter, ParticleError, ParticleSystem, ParticleSystemConfig,
    RingEmitter,
};

#[test]
fn test_solid_ring_with_fixed_direction() {
    let registry = EmitterRegistry::with_defaults();
    let mut system = ParticleSystem::with_seed(1000, 2024);

    let id = system.add_emitter(&registry, "Ring").unwrap();
    {
        let emitter = system.emitter_mut(id).unwrap();
        emitter.set_parameter("width", "10").unwrap();
        emitter.set_parameter("height", "10").unwrap();
        emitter.set_parameter("depth", "0").unwrap();
        emitter.set_parameter("inner_width", "0").unwrap();
        emitter.set_parameter("inner_height", "0").unwrap();
        emitter.set_parameter("angle", "0").unwrap();
        emitter.set_parameter("direction", "0 1 0").unwrap();
    }

    assert_eq!(system.spawn(id, 1000).unwrap(), 1000);

    for particle in system.particles() {
        assert!(
            particle.position.length() <= 5.0 + 1e-4,
            "particle at {:?} outside radius 5",
            particle.position
        );
        assert_eq!(particle.direction, Vec3::new(0.0, 1.0, 0.0));
    }

    println!("✅ 1000 particles inside radius 5 with exact direction");
}

#[test]
fn test_thin_ring_never_hits_hollow_core() {
    let mut emitter = RingEmitter::new();
    emitter.area_mut().set_size(2.0, 2.0, 0.0);
    emitter.set_inner_size(0.9, 0.9);

    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..2000 {
        let mut particle = Particle::new();
        emitter.init_particle(&mut particle, &mut rng);

        // Outer half extent is 1, so positions are already normalised
        let radius = particle.position.truncate().length();
        assert!(radius >= 0.9 - 1e-4, "radius {} inside the hollow core", radius);
        assert!(radius <= 1.0 + 1e-4);
    }
}

#[test]
fn test_oriented_ring_lies_in_plane() {
    let mut emitter = RingEmitter::new();
    emitter.area_mut().set_position(Vec3::new(5.0, -2.0, 1.0));
    emitter.area_mut().set_direction(Vec3::new(1.0, 1.0, 0.0));
    emitter.area_mut().set_size(6.0, 6.0, 0.0);
    emitter.set_inner_size(0.5, 0.5);

    let normal = emitter.area().direction();
    let centre = emitter.area().position();
    let mut rng = StdRng::seed_from_u64(8);

    for _ in 0..1000 {
        let mut particle = Particle::new();
        emitter.init_particle(&mut particle, &mut rng);

        let offset = particle.position - centre;
        assert!(offset.dot(normal).abs() < 1e-4, "offset {:?} leaves the ring plane", offset);
        assert!(offset.length() <= 3.0 + 1e-4);
        assert!(offset.length() >= 1.5 - 1e-4);
    }
}

#[test]
fn test_depth_extrudes_along_direction() {
    let mut emitter = RingEmitter::new();
    emitter.area_mut().set_size(2.0, 2.0, 4.0);

    let mut rng = StdRng::seed_from_u64(9);
    let mut min_z = f32::MAX;
    let mut max_z = f32::MIN;
    for _ in 0..2000 {
        let mut particle = Particle::new();
        emitter.init_particle(&mut particle, &mut rng);
        min_z = min_z.min(particle.position.z);
        max_z = max_z.max(particle.position.z);
    }

    assert!(min_z >= -2.0 && max_z <= 2.0);
    assert!(min_z < -1.8 && max_z > 1.8, "depth range {} .. {}", min_z, max_z);
}

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
quota = 300
seed = 11

[[emitter]]
type = "Ring"
width = 4
height = 2
inner_width = 0.5
inner_height = 0.25
direction = [0, 0, -1]
angle = 45
velocity = 3
emission_rate = 120

[[emitter]]
type = "Ring"
position = "0 5 0"
emission_rate = 60
"#
    )
    .unwrap();

    let config = ParticleSystemConfig::load(file.path()).unwrap();
    let mut system = ParticleSystem::from_config(&config, &EmitterRegistry::with_defaults()).unwrap();
    assert_eq!(system.emitter_count(), 2);

    let update = system.update(std::time::Duration::from_secs(1));
    assert_eq!(update.spawned, 180);

    let base = Vec3::new(0.0, 0.0, -1.0);
    let cone = 45f32.to_radians();
    for particle in system.particles().iter().take(120) {
        assert!(particle.direction.dot(base).clamp(-1.0, 1.0).acos() <= cone + 1e-4);
        assert!((particle.speed() - 3.0).abs() < 1e-4);
    }
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = ParticleSystemConfig::load(dir.path().join("missing.toml"));
    assert!(matches!(result, Err(ParticleError::Io(_))));
}

#[test]
fn test_unknown_emitter_type_in_config() {
    let config = ParticleSystemConfig::from_toml_str("[[emitter]]\ntype = \"Box\"\n").unwrap();
    let result = ParticleSystem::from_config(&config, &EmitterRegistry::with_defaults());
    assert!(matches!(result, Err(ParticleError::UnknownEmitterType(ref name)) if name == "Box"));
}
