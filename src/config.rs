//! Column synthesis configuration.
//!
//! Configuration comes from an optional YAML file, overridden by command-line
//! flags (or their environment variables).
//!
//! ```yaml
//! num_strings: 1000
//! min_len: 4
//! len_mask: 63
//! seed: 1
//! workers: 4
//! ```

use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use stringwrite_generator::DEFAULT_SEED;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for one synthesis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnConfig {
    /// Number of strings to generate
    #[serde(default = "default_num_strings")]
    pub num_strings: usize,

    /// Minimum string length
    #[serde(default)]
    pub min_len: u32,

    /// Mask applied to each random byte before adding `min_len`
    #[serde(default = "default_len_mask")]
    pub len_mask: u32,

    /// Seed of the length generator (must be non-zero)
    #[serde(default = "default_seed")]
    pub seed: u8,

    /// Number of parallel chunks for value synthesis
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_num_strings() -> usize {
    20
}

fn default_len_mask() -> u32 {
    255
}

fn default_seed() -> u8 {
    DEFAULT_SEED
}

fn default_workers() -> usize {
    1
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            num_strings: default_num_strings(),
            min_len: 0,
            len_mask: default_len_mask(),
            seed: default_seed(),
            workers: default_workers(),
        }
    }
}

impl ColumnConfig {
    /// Parse a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reject values the generator cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seed == 0 {
            return Err(ConfigError::Invalid(
                "seed must be non-zero: an all-zero LFSR only ever produces zeros".to_string(),
            ));
        }
        if self.workers == 0 {
            return Err(ConfigError::Invalid("workers must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Command-line arguments for column synthesis.
///
/// Every flag is optional and overrides the corresponding value from
/// `--config` (or the built-in default).
#[derive(Args, Clone, Debug, Default)]
pub struct ColumnArgs {
    /// Path to a YAML config file
    #[arg(long, short = 'c', env = "STRINGWRITE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of strings to generate
    #[arg(long, env = "STRINGWRITE_NUM_STRINGS")]
    pub num_strings: Option<usize>,

    /// Minimum string length
    #[arg(long, env = "STRINGWRITE_MIN_LEN")]
    pub min_len: Option<u32>,

    /// Length mask (typically 2^k - 1)
    #[arg(long, env = "STRINGWRITE_LEN_MASK")]
    pub len_mask: Option<u32>,

    /// Seed of the length generator (same seed = same data)
    #[arg(long, env = "STRINGWRITE_SEED")]
    pub seed: Option<u8>,

    /// Number of parallel chunks for value synthesis
    #[arg(long, env = "STRINGWRITE_WORKERS")]
    pub workers: Option<usize>,
}

impl ColumnArgs {
    /// Build the effective configuration.
    pub fn resolve(&self) -> Result<ColumnConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ColumnConfig::from_file(path)?,
            None => ColumnConfig::default(),
        };

        if let Some(num_strings) = self.num_strings {
            config.num_strings = num_strings;
        }
        if let Some(min_len) = self.min_len {
            config.min_len = min_len;
        }
        if let Some(len_mask) = self.len_mask {
            config.len_mask = len_mask;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }

        config.validate()?;
        Ok(config)
    }
}
