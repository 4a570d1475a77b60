use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HcacError, Result};
use crate::session::{Pacing, DEFAULT_DELAY_MS};

const CONFIG_FILE: &str = "config.toml";

/// Default description width in history listings
pub const DEFAULT_DESCRIPTION_WIDTH: usize = 60;

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# hcac configuration file
# Location: ~/.hcac/config.toml

[shell]
# Delay before a result is shown, in milliseconds
# Default: 1000
delay_ms = 1000

# Number of recent categorizations to print after each result (0 = all)
# Default: 0
history_limit = 0

[display]
# Descriptions longer than this are cut in history listings (0 = never cut)
# Default: 60
description_width = 60
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub shell: ShellConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Interactive shell configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShellConfig {
    /// Pacing delay in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Recent records to print (0 = all)
    #[serde(default)]
    pub history_limit: usize,
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            history_limit: 0,
        }
    }
}

/// Output formatting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default = "default_description_width")]
    pub description_width: usize,
}

fn default_description_width() -> usize {
    DEFAULT_DESCRIPTION_WIDTH
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            description_width: default_description_width(),
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| HcacError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "shell.delay_ms" => Some(self.shell.delay_ms.to_string()),
            "shell.history_limit" => Some(self.shell.history_limit.to_string()),
            "display.description_width" => Some(self.display.description_width.to_string()),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "shell.delay_ms" => self.shell.delay_ms = parse_value(key, value)?,
            "shell.history_limit" => self.shell.history_limit = parse_value(key, value)?,
            "display.description_width" => {
                self.display.description_width = parse_value(key, value)?
            }
            _ => {
                return Err(HcacError::ConfigKeyNotFound {
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        ["shell.delay_ms", "shell.history_limit", "display.description_width"]
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }

    /// Pacing for interactive shells
    pub fn pacing(&self) -> Pacing {
        Pacing::from_millis(self.shell.delay_ms)
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| HcacError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}
