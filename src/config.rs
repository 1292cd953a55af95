//! Configuration — playback and startup preferences loaded from ~/.melakarta/config.yaml.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::theory::Key;
use crate::tone::Waveform;

/// Frequency of C4, the pitch the tonic's octave is measured from.
pub const DEFAULT_REFERENCE_HZ: f64 = 261.63;

/// Errors reading or validating a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// User preferences. Every field is optional in the YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key preselected when the wizard starts.
    pub default_key: Key,
    /// Length of each note when playing arohanam/avarohanam.
    pub note_seconds: f64,
    /// Length of the tone played when a swara is pressed.
    pub preview_seconds: f64,
    /// Frequency of semitone 0 (C) in the tonic's octave.
    pub reference_hz: f64,
    /// Master output volume, 0.0–1.0.
    pub volume: f32,
    pub waveform: Waveform,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_key: Key::C,
            note_seconds: 0.45,
            preview_seconds: 0.45,
            reference_hz: DEFAULT_REFERENCE_HZ,
            volume: 0.8,
            waveform: Waveform::Sine,
        }
    }
}

/// Directory holding the config and the TUI log.
pub fn config_dir() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".melakarta");
    path
}

/// Default config path (~/.melakarta/config.yaml).
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.yaml")
}

impl Config {
    /// Load from the default path, falling back to defaults on any problem.
    pub fn load() -> Self {
        let path = default_config_path();
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), "ignoring config: {e}");
                Self::default()
            }
        }
    }

    /// Load from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate YAML text.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.volume = config.volume.clamp(0.0, 1.0);
        Ok(config)
    }

    /// Write to a file, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("note_seconds", self.note_seconds),
            ("preview_seconds", self.preview_seconds),
            ("reference_hz", self.reference_hz),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{field} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}
