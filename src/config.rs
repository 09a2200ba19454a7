//! Configuration system for network generation.
//!
//! Supports YAML configuration files with sensible defaults.

use crate::genetics::{GenerationRange, UniformSource};
use crate::neural::{Topology, WeightMode};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    pub generation: GenerationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Network shape configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Input arity followed by the neuron count of each layer
    pub topology: Vec<usize>,
    /// How explicit construction hands weights to neurons
    #[serde(default)]
    pub weight_mode: WeightMode,
}

/// Random generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Smallest generated value
    pub min: i32,
    /// Largest generated value
    pub max: i32,
    /// Seed for reproducibility (random if absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            topology: vec![2, 2, 3, 3, 2],
            weight_mode: WeightMode::Shared,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let range = GenerationRange::default();
        Self {
            min: range.min,
            max: range.max,
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level, used as the default logger filter
    pub fn level(&self) -> Result<log::LevelFilter, String> {
        self.log_level
            .parse()
            .map_err(|_| format!("unknown log_level {:?}", self.log_level))
    }
}

impl GenerationConfig {
    pub fn range(&self) -> GenerationRange {
        GenerationRange {
            min: self.min,
            max: self.max,
        }
    }

    /// Seeded source if a seed is configured, entropy-seeded otherwise
    pub fn source(&self) -> crate::Result<UniformSource> {
        match self.seed {
            Some(seed) => UniformSource::new(self.range(), seed),
            None => UniformSource::from_entropy(self.range()),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validated topology
    pub fn topology(&self) -> crate::Result<Topology> {
        Topology::new(self.network.topology.clone())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        self.topology().map_err(|e| e.to_string())?;
        self.generation.range().validate().map_err(|e| {
            format!(
                "generation range [{}, {}]: {}",
                self.generation.min, self.generation.max, e
            )
        })?;
        self.logging.level()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.topology().unwrap().counts(), &[2, 2, 3, 3, 2]);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.network.weight_mode = WeightMode::Independent;
        config.generation.seed = Some(7);

        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded: Config = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(loaded.network.topology, config.network.topology);
        assert_eq!(loaded.network.weight_mode, WeightMode::Independent);
        assert_eq!(loaded.generation.seed, Some(7));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();
        config.network.topology = vec![3, 0];
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.generation.max = 20;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.generation.min = 4;
        config.generation.max = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_minimal_yaml() {
        let yaml = "network:\n  topology: [3, 1, 2]\ngeneration:\n  min: -5\n  max: 5\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.network.weight_mode, WeightMode::Shared);
        assert_eq!(config.generation.seed, None);
        assert_eq!(config.logging.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level() {
        let yaml = "network:\n  topology: [2, 1]\ngeneration:\n  min: -1\n  max: 1\nlogging:\n  log_level: debug\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.logging.level().unwrap(), log::LevelFilter::Debug);
        assert!(config.validate().is_ok());

        let mut config = Config::default();
        config.logging.log_level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_seeded_source() {
        let mut config = Config::default();
        config.generation.seed = Some(99);
        let source = config.generation.source().unwrap();
        assert_eq!(source.seed(), 99);
    }
}
