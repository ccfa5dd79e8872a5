use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use memento::DayCountMethod;
use serde::Deserialize;
use tracing::info;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG: &str = "memento.toml";

/// Top-level Memento configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MementoConfig {
    /// Year to show; defaults to the year of the reference instant.
    #[serde(default)]
    pub year: Option<i32>,

    /// How days passed in the current year are counted.
    #[serde(default)]
    pub day_count: DayCountMethod,

    /// Grid rendering settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Reflection settings.
    #[serde(default)]
    pub reflection: ReflectionConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default = "default_past")]
    pub past: String,
    #[serde(default = "default_today")]
    pub today: String,
    #[serde(default = "default_future")]
    pub future: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            past: default_past(),
            today: default_today(),
            future: default_future(),
        }
    }
}

fn default_columns() -> usize {
    31
}
fn default_past() -> String {
    "●".to_string()
}
fn default_today() -> String {
    "◉".to_string()
}
fn default_future() -> String {
    "○".to_string()
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReflectionConfig {
    /// Fixed reflection sentence; the built-in fallback is used when absent.
    #[serde(default)]
    pub text: Option<String>,
}

impl MementoConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).context("failed to parse TOML config")?;
        ensure!(
            config.display.columns > 0,
            "display.columns must be at least 1"
        );
        Ok(config)
    }

    /// Loads `path`, or `DEFAULT_CONFIG` if present, or the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG);
                if !fallback.exists() {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        info!(path = %path.display(), "loading config");
        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_toml(&toml_str)
    }
}
