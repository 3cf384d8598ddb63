use std::collections::HashMap;

use crate::error::{ParticleError, ParticleResult};
use crate::particles::{ParticleEmitter, RingEmitterFactory};

/// Constructs emitters of one named type
pub trait EmitterFactory {
    /// Type name used in configuration, e.g. `"Ring"`
    fn name(&self) -> &'static str;

    /// Create a new emitter with default settings
    fn create(&self) -> Box<dyn ParticleEmitter>;
}

/// Maps emitter type names to their factories
pub struct EmitterRegistry {
    factories: HashMap<String, Box<dyn EmitterFactory>>,
}

impl EmitterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registry with every built-in emitter type
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(RingEmitterFactory);
        registry
    }

    /// Register a factory under its own name, replacing any previous one
    pub fn register<F: EmitterFactory + 'static>(&mut self, factory: F) {
        let name = factory.name();
        if self.factories.insert(name.to_string(), Box::new(factory)).is_some() {
            log::warn!("[EmitterRegistry] Replaced factory for emitter type '{}'", name);
        } else {
            log::debug!("[EmitterRegistry] Registered emitter type '{}'", name);
        }
    }

    /// Whether a type name is known
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered type names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Create an emitter by type name
    pub fn create(&self, name: &str) -> ParticleResult<Box<dyn ParticleEmitter>> {
        self.factories
            .get(name)
            .map(|factory| factory.create())
            .ok_or_else(|| ParticleError::UnknownEmitterType(name.to_string()))
    }
}

impl Default for EmitterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::RingEmitter;

    struct WideRingFactory;

    impl EmitterFactory for WideRingFactory {
        fn name(&self) -> &'static str {
            "Ring"
        }

        fn create(&self) -> Box<dyn ParticleEmitter> {
            let mut ring = RingEmitter::new();
            ring.area_mut().set_width(500.0);
            Box::new(ring)
        }
    }

    #[test]
    fn test_default_registry() {
        let registry = EmitterRegistry::with_defaults();

        assert!(registry.contains("Ring"));
        assert_eq!(registry.names(), vec!["Ring"]);

        let emitter = registry.create("Ring").unwrap();
        assert_eq!(emitter.type_name(), "Ring");
    }

    #[test]
    fn test_unknown_type() {
        let registry = EmitterRegistry::new();

        match registry.create("Ring") {
            Err(ParticleError::UnknownEmitterType(name)) => assert_eq!(name, "Ring"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = EmitterRegistry::with_defaults();
        registry.register(WideRingFactory);

        let emitter = registry.create("Ring").unwrap();
        assert_eq!(emitter.area().width(), 500.0);
        assert_eq!(registry.names().len(), 1);
    }
}
