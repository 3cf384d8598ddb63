//! TOML description of a particle system.
//!
//! ```toml
//! quota = 2000
//! seed = 42
//!
//! [[emitter]]
//! type = "Ring"
//! width = 10.0
//! height = 10.0
//! inner_width = 0.5
//! inner_height = 0.5
//! direction = [0.0, 1.0, 0.0]
//! angle = 15
//! emission_rate = 200
//! ```
//!
//! Every key other than `type` is handed to the emitter as a string
//! parameter. Arrays are joined with spaces, so `direction = [0, 1, 0]` and
//! `direction = "0 1 0"` are equivalent.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use toml::Value as TomlValue;

use crate::error::{ParticleError, ParticleResult};

fn default_quota() -> usize {
    10_000
}

/// Particle system settings and its emitters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleSystemConfig {
    /// Maximum number of live particles
    #[serde(default = "default_quota")]
    pub quota: usize,
    /// Seed for the system's random source; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default, rename = "emitter")]
    pub emitters: Vec<EmitterConfig>,
}

/// One emitter entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmitterConfig {
    /// Registry name of the emitter type
    #[serde(rename = "type")]
    pub emitter_type: String,
    #[serde(flatten)]
    pub parameters: BTreeMap<String, TomlValue>,
}

impl ParticleSystemConfig {
    /// Parse from TOML text
    pub fn from_toml_str(raw: &str) -> ParticleResult<Self> {
        toml::from_str(raw).map_err(|e| ParticleError::Config(e.to_string()))
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> ParticleResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;

        log::info!(
            "[ParticleSystemConfig] Loaded {} emitter(s) from {}",
            config.emitters.len(),
            path.display()
        );
        Ok(config)
    }

    /// Serialize back to TOML text
    pub fn to_toml_string(&self) -> ParticleResult<String> {
        toml::to_string(self).map_err(|e| ParticleError::Config(e.to_string()))
    }
}

impl Default for ParticleSystemConfig {
    fn default() -> Self {
        Self {
            quota: default_quota(),
            seed: None,
            emitters: Vec::new(),
        }
    }
}

impl EmitterConfig {
    pub fn new(emitter_type: impl Into<String>) -> Self {
        Self {
            emitter_type: emitter_type.into(),
            parameters: BTreeMap::new(),
        }
    }

    /// Add a parameter, builder style
    pub fn with(mut self, name: &str, value: impl Into<TomlValue>) -> Self {
        self.parameters.insert(name.to_string(), value.into());
        self
    }

    /// Parameters rendered into the emitter's textual form, sorted by name
    pub fn parameter_strings(&self) -> ParticleResult<Vec<(String, String)>> {
        self.parameters
            .iter()
            .map(|(name, value)| Ok((name.clone(), render_value(name, value)?)))
            .collect()
    }
}

fn render_scalar(name: &str, value: &TomlValue) -> ParticleResult<String> {
    match value {
        TomlValue::String(s) => Ok(s.clone()),
        TomlValue::Integer(i) => Ok(i.to_string()),
        TomlValue::Float(f) => Ok(f.to_string()),
        TomlValue::Boolean(b) => Ok(b.to_string()),
        other => Err(ParticleError::Config(format!(
            "parameter '{}' has unsupported value {}",
            name, other
        ))),
    }
}

fn render_value(name: &str, value: &TomlValue) -> ParticleResult<String> {
    match value {
        TomlValue::Array(items) => {
            let parts = items
                .iter()
                .map(|item| render_scalar(name, item))
                .collect::<ParticleResult<Vec<_>>>()?;
            Ok(parts.join(" "))
        }
        other => render_scalar(name, other),
    }
}
