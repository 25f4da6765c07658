use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::render::Markers;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "droneplot";

/// Word that ends an interactive session unless configured otherwise.
pub const DEFAULT_STOP_WORD: &str = "STOP";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markers: Option<Markers>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_word: Option<String>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    /// Load the config at `path`, or `None` when no file exists there.
    ///
    /// Any other read failure and any parse failure is an error.
    pub fn load_if_present(path: &Path) -> Result<Option<Self>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read config {}", path.display()));
            }
        };
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(Some(config))
    }

    pub fn load_or_default() -> Self {
        match Self::path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                warn!("using default config: {e:#}");
                Self::default()
            }
        }
    }

    /// Like [`Config::load_if_present`], but a broken config is reported and
    /// replaced by the defaults.
    pub fn load_or_default_from(path: &Path) -> Self {
        match Self::load_if_present(path) {
            Ok(Some(config)) => config,
            Ok(None) => {
                debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!("ignoring config, using defaults: {e:#}");
                Self::default()
            }
        }
    }

    /// Set one key in the config file at `path` and write it back.
    ///
    /// A config that cannot be read or parsed is left untouched.
    pub fn update_at(path: &Path, key: &str, value: &str) -> Result<Self> {
        let mut config = Self::load_if_present(path)?.unwrap_or_default();
        config.set(key, value)?;
        config
            .save_to(path)
            .with_context(|| format!("Failed to save config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# droneplot configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Markers with configured overrides applied.
    pub fn markers(&self) -> Markers {
        self.markers.clone().unwrap_or_default()
    }

    /// Whether output should be coloured. Defaults to on.
    pub fn color(&self) -> bool {
        self.display.as_ref().and_then(|d| d.color).unwrap_or(true)
    }

    pub fn stop_word(&self) -> &str {
        self.session
            .as_ref()
            .and_then(|s| s.stop_word.as_deref())
            .unwrap_or(DEFAULT_STOP_WORD)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "markers.empty" | "markers.start" | "markers.path" | "markers.end" => {
                let symbol = single_char(key, value)?;
                let markers = self.markers.get_or_insert_with(Markers::default);
                match key {
                    "markers.empty" => markers.empty = symbol,
                    "markers.start" => markers.start = symbol,
                    "markers.path" => markers.path = symbol,
                    _ => markers.end = symbol,
                }
            }
            "display.color" => {
                let color = match value {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    _ => anyhow::bail!("Invalid color setting: {value}. Must be 'true' or 'false'."),
                };
                self.display
                    .get_or_insert_with(DisplayConfig::default)
                    .color = Some(color);
            }
            "session.stop_word" => {
                let word = value.trim();
                if word.is_empty() {
                    anyhow::bail!("Invalid stop_word: must not be empty.");
                }
                self.session
                    .get_or_insert_with(SessionConfig::default)
                    .stop_word = Some(word.to_string());
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: markers.empty, markers.start, markers.path, markers.end, display.color, session.stop_word"
            ),
        }
        Ok(())
    }
}

fn single_char(key: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => anyhow::bail!("Invalid {key}: {value:?}. Must be a single character."),
    }
}
