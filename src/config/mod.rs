//! Configuration module for bolt
//!
//! Settings are read from `config.toml` in the user's config directory
//! (`~/.config/bolt/config.toml` on Linux) and can be overridden by
//! `BOLT_`-prefixed environment variables such as `BOLT_COLOR=never`.
//! A missing file means defaults; loading never writes anything.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::listing::columns::{is_valid_time_format, DEFAULT_TIME_FORMAT};
use crate::tags::TagStore;

/// Keys accepted by `bolt config get/set`
pub const KEYS: [&str; 4] = ["color", "time_format", "strict_untag", "tag_file"];

/// When listings are colorized
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

impl ColorMode {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        })
    }
}

fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BoltConfig {
    /// Tag file location (defaults to `~/.bolt_tags.json`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_file: Option<PathBuf>,

    /// When to colorize listings
    #[serde(default)]
    pub color: ColorMode,

    /// chrono format of the modified column in long listings
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Fail `untag` when the tag file cannot be loaded instead of
    /// treating it as having nothing to remove
    #[serde(default)]
    pub strict_untag: bool,
}

impl Default for BoltConfig {
    fn default() -> Self {
        Self {
            tag_file: None,
            color: ColorMode::default(),
            time_format: default_time_format(),
            strict_untag: false,
        }
    }
}

impl BoltConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("bolt").join("config.toml"))
    }

    /// Load configuration from the default location plus the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path` plus the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(path, true)
    }

    /// Load only what is stored in the file at `path`
    ///
    /// `BOLT_` environment overrides are left out, so saving the result
    /// never writes them into the file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        Self::build(path, false)
    }

    fn build(path: &Path, with_env: bool) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml).required(false));
        if with_env {
            builder = builder.add_source(Environment::with_prefix("BOLT"));
        }

        builder.build()?.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Tag file path: the configured one, else `~/.bolt_tags.json`
    #[must_use]
    pub fn tag_file_path(&self) -> Option<PathBuf> {
        self.tag_file.clone().or_else(TagStore::default_path)
    }

    /// Read a single setting as text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "color" => Ok(self.color.to_string()),
            "time_format" => Ok(self.time_format.clone()),
            "strict_untag" => Ok(self.strict_untag.to_string()),
            "tag_file" => Ok(self
                .tag_file_path()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            _ => Err(ConfigError::NotFound(key.to_string())),
        }
    }

    /// Change a single setting in memory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or an invalid value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "color" => {
                self.color = ColorMode::parse(value).ok_or_else(|| {
                    ConfigError::Message(format!(
                        "Invalid value for color: '{value}'. Use 'auto', 'always' or 'never'"
                    ))
                })?;
            }
            "time_format" => {
                if value.is_empty() || !is_valid_time_format(value) {
                    return Err(ConfigError::Message(format!(
                        "Invalid value for time_format: '{value}'"
                    )));
                }
                self.time_format = value.to_string();
            }
            "strict_untag" => {
                self.strict_untag = value.parse::<bool>().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for strict_untag: '{value}'. Use 'true' or 'false'"
                    ))
                })?;
            }
            "tag_file" => {
                self.tag_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            _ => return Err(ConfigError::NotFound(key.to_string())),
        }
        Ok(())
    }
}
