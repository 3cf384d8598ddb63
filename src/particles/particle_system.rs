use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::{ParticleError, ParticleResult};
use crate::particles::{EmitterRegistry, Particle, ParticleEmitter, ParticleSystemConfig};

/// Handle to an emitter owned by a [`ParticleSystem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmitterId(pub u64);

/// Particle system update result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleUpdate {
    pub spawned: usize,
    pub active_particles: usize,
    pub active_emitters: usize,
}

#[derive(Debug)]
struct EmitterSlot {
    emitter: Box<dyn ParticleEmitter>,
    /// Fractional particles carried over between updates
    spawn_accumulator: f32,
}

/// Owns a set of emitters and the particles they spawn
#[derive(Debug)]
pub struct ParticleSystem {
    /// Spawned particles
    particles: Vec<Particle>,
    /// Emitters, iterated in creation order so seeded runs repeat
    emitters: BTreeMap<EmitterId, EmitterSlot>,
    /// Maximum particles allowed
    quota: usize,
    /// Next ID for emitters
    next_id: u64,
    /// Random source shared by every emitter of this system
    rng: StdRng,
}

impl ParticleSystem {
    /// Create a particle system seeded from entropy
    pub fn new(quota: usize) -> Self {
        Self::with_rng(quota, StdRng::from_entropy())
    }

    /// Create a particle system with a reproducible random source
    pub fn with_seed(quota: usize, seed: u64) -> Self {
        Self::with_rng(quota, StdRng::seed_from_u64(seed))
    }

    fn with_rng(quota: usize, rng: StdRng) -> Self {
        Self {
            particles: Vec::with_capacity(quota.min(4096)),
            emitters: BTreeMap::new(),
            quota,
            next_id: 0,
            rng,
        }
    }

    /// Build a system and all its emitters from configuration.
    ///
    /// Fails on the first unknown emitter type or rejected parameter.
    pub fn from_config(config: &ParticleSystemConfig, registry: &EmitterRegistry) -> ParticleResult<Self> {
        let mut system = match config.seed {
            Some(seed) => Self::with_seed(config.quota, seed),
            None => Self::new(config.quota),
        };

        for emitter_config in &config.emitters {
            let mut emitter = registry.create(&emitter_config.emitter_type)?;
            for (name, value) in emitter_config.parameter_strings()? {
                emitter.set_parameter(&name, &value)?;
            }
            system.insert_emitter(emitter);
        }

        log::info!(
            "[ParticleSystem] Built from config: quota {}, {} emitter(s)",
            system.quota,
            system.emitters.len()
        );
        Ok(system)
    }

    /// Create an emitter through the registry and take ownership of it
    pub fn add_emitter(&mut self, registry: &EmitterRegistry, type_name: &str) -> ParticleResult<EmitterId> {
        let emitter = registry.create(type_name)?;
        Ok(self.insert_emitter(emitter))
    }

    /// Take ownership of an already constructed emitter
    pub fn insert_emitter(&mut self, emitter: Box<dyn ParticleEmitter>) -> EmitterId {
        let id = EmitterId(self.next_id);
        self.next_id += 1;

        log::debug!("[ParticleSystem] Added {} emitter {:?}", emitter.type_name(), id);
        self.emitters.insert(
            id,
            EmitterSlot {
                emitter,
                spawn_accumulator: 0.0,
            },
        );
        id
    }

    /// Remove an emitter
    pub fn remove_emitter(&mut self, id: EmitterId) -> Option<Box<dyn ParticleEmitter>> {
        self.emitters.remove(&id).map(|slot| slot.emitter)
    }

    /// Get emitter by ID
    pub fn emitter(&self, id: EmitterId) -> Option<&dyn ParticleEmitter> {
        self.emitters.get(&id).map(|slot| slot.emitter.as_ref())
    }

    /// Get mutable emitter by ID
    pub fn emitter_mut(&mut self, id: EmitterId) -> Option<&mut (dyn ParticleEmitter + 'static)> {
        self.emitters.get_mut(&id).map(|slot| slot.emitter.as_mut())
    }

    pub fn emitter_count(&self) -> usize {
        self.emitters.len()
    }

    /// Spawn up to `count` particles from one emitter, capped by the quota.
    ///
    /// Returns how many were spawned.
    pub fn spawn(&mut self, id: EmitterId, count: usize) -> ParticleResult<usize> {
        let slot = self.emitters.get(&id).ok_or(ParticleError::UnknownEmitter(id))?;
        Ok(Self::spawn_from(
            slot.emitter.as_ref(),
            count,
            self.quota,
            &mut self.particles,
            &mut self.rng,
        ))
    }

    /// Spawn particles from every emitter according to its emission rate
    pub fn update(&mut self, dt: Duration) -> ParticleUpdate {
        let dt_secs = dt.as_secs_f32();
        let mut spawned = 0;

        for slot in self.emitters.values_mut() {
            slot.spawn_accumulator += slot.emitter.emission_rate() * dt_secs;
            if slot.spawn_accumulator < 1.0 {
                continue;
            }

            let count = slot.spawn_accumulator as usize;
            slot.spawn_accumulator -= count as f32;

            spawned += Self::spawn_from(
                slot.emitter.as_ref(),
                count,
                self.quota,
                &mut self.particles,
                &mut self.rng,
            );
        }

        ParticleUpdate {
            spawned,
            active_particles: self.particles.len(),
            active_emitters: self.emitters.len(),
        }
    }

    fn spawn_from(
        emitter: &dyn ParticleEmitter,
        count: usize,
        quota: usize,
        particles: &mut Vec<Particle>,
        rng: &mut StdRng,
    ) -> usize {
        let available_space = quota.saturating_sub(particles.len());
        let to_spawn = count.min(available_space);
        if to_spawn < count {
            log::debug!(
                "[ParticleSystem] Quota of {} reached, dropping {} {} particle(s)",
                quota,
                count - to_spawn,
                emitter.type_name()
            );
        }

        particles.reserve(to_spawn);
        for _ in 0..to_spawn {
            let mut particle = Particle::new();
            emitter.init_particle(&mut particle, rng);
            particles.push(particle);
        }
        to_spawn
    }

    /// Spawned particles
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Get particle count
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn quota(&self) -> usize {
        self.quota
    }

    /// Drop every spawned particle, keeping the emitters
    pub fn clear_particles(&mut self) {
        self.particles.clear();
    }
}
