//! Configuration types for compound generation
//!
//! The defaults reproduce the stock generator: a roll of 0..=100 where
//! anything above 50 picks a transition element, and one to three atoms of
//! the paired element.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[cfg(feature = "toml-config")]
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Tunables for [`crate::generator::CompoundGenerator`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Upper bound (inclusive) of the element-kind roll
    #[serde(default = "default_roll_max")]
    pub roll_max: u32,

    /// Rolls above this value pick a transition element
    #[serde(default = "default_transition_threshold")]
    pub transition_threshold: u32,

    /// Fewest atoms of the paired element
    #[serde(default = "default_pair_count_min")]
    pub pair_count_min: u32,

    /// Most atoms of the paired element
    #[serde(default = "default_pair_count_max")]
    pub pair_count_max: u32,
}

fn default_roll_max() -> u32 {
    100
}

fn default_transition_threshold() -> u32 {
    50
}

fn default_pair_count_min() -> u32 {
    1
}

fn default_pair_count_max() -> u32 {
    3
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            roll_max: default_roll_max(),
            transition_threshold: default_transition_threshold(),
            pair_count_min: default_pair_count_min(),
            pair_count_max: default_pair_count_max(),
        }
    }
}

impl GeneratorConfig {
    /// Check the ranges are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pair_count_min == 0 {
            return Err(ConfigError::Invalid(
                "pair_count_min must be at least 1".to_string(),
            ));
        }
        if self.pair_count_min > self.pair_count_max {
            return Err(ConfigError::Invalid(format!(
                "pair_count_min ({}) is greater than pair_count_max ({})",
                self.pair_count_min, self.pair_count_max
            )));
        }
        if self.transition_threshold > self.roll_max {
            return Err(ConfigError::Invalid(format!(
                "transition_threshold ({}) is greater than roll_max ({})",
                self.transition_threshold, self.roll_max
            )));
        }
        Ok(())
    }
}

/// Application configuration, usually read from a TOML file
///
/// ```toml
/// dataset = "elements.yaml"
///
/// [generator]
/// transition_threshold = 75
/// pair_count_max = 4
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Dataset file or directory; the bundled dataset is used when unset
    #[serde(default)]
    pub dataset: Option<PathBuf>,

    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[cfg(feature = "toml-config")]
impl AppConfig {
    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.generator.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// A relative `dataset` path is resolved against the file's directory.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)?;
        let mut config = Self::from_toml_str(&content)?;

        if let (Some(dataset), Some(dir)) = (config.dataset.as_ref(), path.parent()) {
            if dataset.is_relative() {
                config.dataset = Some(dir.join(dataset));
            }
        }

        Ok(config)
    }
}
