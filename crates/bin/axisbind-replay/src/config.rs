//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `axisbind.toml` in the working directory, or the file named by
//! `AXISBIND_CONFIG`. Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use std::time::Duration;

use axisbind_domain::axis::AxisName;
use serde::Deserialize;

/// Default config file name.
pub const DEFAULT_PATH: &str = "axisbind.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Playback settings.
    pub replay: ReplayConfig,
    /// Axis bindings to create.
    pub bindings: BindingsConfig,
    /// Samples fed to the virtual input service, in order.
    pub samples: SamplesConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Playback configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Interval between two samples, in milliseconds.
    pub tick_ms: u64,
}

/// One `[[bindings]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfig {
    /// Axis to bind to. Omitted means an unnamed binding.
    #[serde(default)]
    pub name: AxisName,
}

/// One `[[samples]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleConfig {
    /// Axis receiving the sample.
    pub axis: AxisName,
    /// Processed value.
    pub value: f32,
    /// Raw value; defaults to `value`.
    #[serde(default)]
    pub raw: Option<f32>,
}

impl SampleConfig {
    /// Raw value of the sample.
    #[must_use]
    pub fn raw(&self) -> f32 {
        self.raw.unwrap_or(self.value)
    }
}

/// `[[bindings]]` array; defaults to the two movement axes.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct BindingsConfig(pub Vec<BindingConfig>);

/// `[[samples]]` array; defaults to a short demo stroke.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct SamplesConfig(pub Vec<SampleConfig>);

impl Config {
    /// Load configuration from `AXISBIND_CONFIG` or `axisbind.toml` (if
    /// present) then apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("AXISBIND_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Read `path`, falling back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("AXISBIND_TICK_MS") {
            if let Ok(tick_ms) = val.parse() {
                self.replay.tick_ms = tick_ms;
            }
        }
        if let Ok(val) = std::env::var("AXISBIND_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    /// Check semantic constraints that TOML parsing cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the tick interval is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.replay.tick_ms == 0 {
            return Err(ConfigError::Validation(
                "replay.tick_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl ReplayConfig {
    /// Interval between two samples.
    #[must_use]
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "axisbind_replay=info,axisbind_app=info,axisbind_adapter_virtual=info"
                .to_string(),
        }
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self { tick_ms: 16 }
    }
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self(
            ["Horizontal", "Vertical"]
                .into_iter()
                .map(|name| BindingConfig { name: name.into() })
                .collect(),
        )
    }
}

impl Default for SamplesConfig {
    fn default() -> Self {
        let stroke = [
            ("Horizontal", 0.25, 0.3),
            ("Horizontal", 0.75, 0.8),
            ("Vertical", -0.5, -0.55),
            ("horizontal", 0.75, 0.8),
            ("Horizontal", 0.0, 0.05),
            ("Vertical", 0.0, 0.0),
        ];
        Self(
            stroke
                .into_iter()
                .map(|(axis, value, raw)| SampleConfig {
                    axis: axis.into(),
                    value,
                    raw: Some(raw),
                })
                .collect(),
        )
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
