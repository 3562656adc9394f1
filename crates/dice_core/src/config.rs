use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_TRACE_FILTER: &str = "warn";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Optional settings for the terminal and diagnostics. Game rules are fixed
/// and have no entry here.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct DiceConfig {
    #[serde(default)]
    pub input: InputSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl DiceConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }
}

/// How keypresses are read.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Raw keypresses on a terminal, whole lines otherwise.
    #[default]
    Auto,
    Raw,
    Line,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct InputSettings {
    #[serde(default)]
    pub mode: Option<InputMode>,
}

impl InputSettings {
    pub fn mode(&self) -> InputMode {
        self.mode.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TelemetrySettings {
    #[serde(default)]
    pub trace_filter: Option<String>,
}

impl TelemetrySettings {
    pub fn trace_filter(&self) -> &str {
        self.trace_filter.as_deref().unwrap_or(DEFAULT_TRACE_FILTER)
    }
}
