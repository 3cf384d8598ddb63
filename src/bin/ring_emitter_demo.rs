//! Spawn particles from a TOML particle system description and report where
//! they landed.
//!
//! Usage: `ring_emitter_demo [config.toml] [seconds]`

use anyhow::{Context, Result};
use glam::Vec3;
use std::time::Duration;

use ring_emitter::{EmitterRegistry, ParticleSystem, ParticleSystemConfig};

const DEFAULT_CONFIG: &str = r#"
quota = 5000
seed = 42

[[emitter]]
type = "Ring"
width = 10.0
height = 10.0
depth = 0.0
inner_width = 0.6
inner_height = 0.6
direction = [0.0, 1.0, 0.0]
angle = 20
velocity_min = 2.0
velocity_max = 4.0
emission_rate = 500
"#;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => ParticleSystemConfig::load(&path)
            .with_context(|| format!("Failed to load particle system config {}", path))?,
        None => ParticleSystemConfig::from_toml_str(DEFAULT_CONFIG)?,
    };
    let seconds: f32 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("Invalid duration '{}'", s))?,
        None => 2.0,
    };

    let registry = EmitterRegistry::with_defaults();
    let mut system = ParticleSystem::from_config(&config, &registry)?;

    // Fixed 60 Hz ticks
    let dt = Duration::from_secs_f64(1.0 / 60.0);
    let ticks = (seconds * 60.0).round() as u32;
    for _ in 0..ticks {
        let update = system.update(dt);
        log::debug!(
            "spawned {} (total {}, emitters {})",
            update.spawned,
            update.active_particles,
            update.active_emitters
        );
    }

    let particles = system.particles();
    if particles.is_empty() {
        log::warn!("No particles were spawned");
        return Ok(());
    }

    let count = particles.len() as f32;
    let centroid = particles.iter().map(|p| p.position).sum::<Vec3>() / count;
    let mean_direction = particles.iter().map(|p| p.direction).sum::<Vec3>() / count;
    let mean_speed = particles.iter().map(|p| p.speed()).sum::<f32>() / count;
    let (min_radius, max_radius) = particles
        .iter()
        .map(|p| (p.position - centroid).length())
        .fold((f32::MAX, 0.0f32), |(lo, hi), r| (lo.min(r), hi.max(r)));

    println!("Particles spawned: {} (quota {})", particles.len(), system.quota());
    println!("Centroid:          {:?}", centroid);
    println!("Distance range:    {:.3} .. {:.3}", min_radius, max_radius);
    println!("Mean direction:    {:?}", mean_direction.normalize_or_zero());
    println!("Mean speed:        {:.3}", mean_speed);

    Ok(())
}
