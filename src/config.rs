use crate::errors::{ConfigError, ScriptHelperResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CHARS_PER_BLOCK: usize = 500;
pub const DEFAULT_WORDS_PER_BLOCK: usize = 100;
pub const DEFAULT_BLOCK_DURATION: f64 = 35.0;
pub const DEFAULT_BLOCK_INTERVAL: f64 = 30.0;
pub const DEFAULT_TOPIC_INTERVAL: f64 = 60.0;
pub const DEFAULT_TITLE_DURATION: f64 = 5.0;
pub const DEFAULT_ROWS_PER_FILE: usize = 20;
pub const DEFAULT_PLACEHOLDER_TITLE: &str = "(No title)";

/// Block segmentation and pacing parameters. Durations and intervals are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    pub chars_per_block: usize,
    pub words_per_block: usize,
    pub block_duration: f64,
    /// Padding after every block, subtitle clock only
    pub block_interval: f64,
    /// Padding added after the minute boundary between topics
    pub topic_interval: f64,
    pub title_duration: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            chars_per_block: DEFAULT_CHARS_PER_BLOCK,
            words_per_block: DEFAULT_WORDS_PER_BLOCK,
            block_duration: DEFAULT_BLOCK_DURATION,
            block_interval: DEFAULT_BLOCK_INTERVAL,
            topic_interval: DEFAULT_TOPIC_INTERVAL,
            title_duration: DEFAULT_TITLE_DURATION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub rows_per_file: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            rows_per_file: DEFAULT_ROWS_PER_FILE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Title used when a marker line carries no text
    pub placeholder_title: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            placeholder_title: DEFAULT_PLACEHOLDER_TITLE.to_string(),
        }
    }
}

/// Top-level configuration, usually read from a TOML file:
///
/// ```toml
/// [timing]
/// block_duration = 20.0
///
/// [export]
/// rows_per_file = 50
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub timing: TimingConfig,
    pub export: ExportConfig,
    pub parser: ParserConfig,
}

impl Config {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> ScriptHelperResult<Self> {
        let config: Config = toml::from_str(source)
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML configuration file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> ScriptHelperResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let source = fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timing.validate()?;
        if self.export.rows_per_file == 0 {
            return Err(ConfigError::new("export.rows_per_file must be at least 1"));
        }
        if self.parser.placeholder_title.trim().is_empty() {
            return Err(ConfigError::new("parser.placeholder_title must not be blank"));
        }
        Ok(())
    }
}

impl TimingConfig {
    /// Reject values that would stall segmentation or produce zero-length entries.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chars_per_block == 0 {
            return Err(ConfigError::new("timing.chars_per_block must be at least 1"));
        }
        if self.words_per_block == 0 {
            return Err(ConfigError::new("timing.words_per_block must be at least 1"));
        }
        check_positive("timing.block_duration", self.block_duration)?;
        check_positive("timing.title_duration", self.title_duration)?;
        check_non_negative("timing.block_interval", self.block_interval)?;
        check_non_negative("timing.topic_interval", self.topic_interval)?;
        Ok(())
    }
}

fn check_positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::new(format!(
            "{} must be a positive number of seconds, got {}",
            name, value
        )))
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::new(format!(
            "{} must not be negative, got {}",
            name, value
        )))
    }
}
