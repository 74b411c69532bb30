//! Duet configuration system
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. Explicit config file (--config PATH)
//! 3. Project-level (./duet.toml)
//! 4. Default values
//! ```
//!
//! # Usage
//!
//! ```rust
//! use duet::util::config::DuetConfig;
//!
//! let config: DuetConfig = toml::from_str("[scheduler]\nqueue_capacity = 64").unwrap();
//! assert_eq!(config.scheduler.queue_capacity, 64);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::runtime::scheduler::SchedulerConfig;
use crate::util::logger::LogLevel;

/// Name of the project-level config file
pub const CONFIG_FILE_NAME: &str = "duet.toml";

/// Default bound of each task's message queue
pub const DEFAULT_QUEUE_CAPACITY: usize = 10_000;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DuetConfig {
    /// Scheduler settings
    #[serde(default)]
    pub scheduler: SchedulerSection,
    /// Log settings
    #[serde(default)]
    pub log: LogSection,
}

/// `[scheduler]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchedulerSection {
    /// Maximum number of pending messages per task queue
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
    /// Total instruction budget across both tasks; unbounded when absent
    #[serde(default)]
    pub max_steps: Option<u64>,
}

fn default_queue_capacity() -> usize {
    DEFAULT_QUEUE_CAPACITY
}

impl Default for SchedulerSection {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            max_steps: None,
        }
    }
}

/// `[log]` section
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LogSection {
    /// Log level
    #[serde(default)]
    pub level: LogLevel,
    /// Emit one trace event per executed instruction
    #[serde(default)]
    pub trace_execution: bool,
}

impl DuetConfig {
    /// Build the scheduler configuration from this config
    pub fn scheduler_config(&self) -> SchedulerConfig {
        SchedulerConfig {
            queue_capacity: self.scheduler.queue_capacity,
            max_steps: self.scheduler.max_steps,
            trace_execution: self.log.trace_execution,
        }
    }
}

/// Get the project config file path (./duet.toml)
pub fn get_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Load configuration from `path`
pub fn load_config_from(path: &Path) -> Result<DuetConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: DuetConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration
///
/// An explicit path must exist. Without one, `./duet.toml` is used when
/// present and defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<DuetConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    let path = get_config_path();
    if !path.exists() {
        return Ok(DuetConfig::default());
    }
    load_config_from(&path)
}

/// Save configuration to `path`
pub fn save_config(
    config: &DuetConfig,
    path: &Path,
) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl DuetConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.scheduler.queue_capacity == 0 {
            return Err(ConfigError::Invalid(
                "scheduler.queue_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
