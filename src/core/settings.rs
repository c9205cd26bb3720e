//! User settings loaded from `config.toml`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::config::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV, DEFAULT_ELLIPSIS, DEFAULT_SEPARATOR,
};
use crate::condense::EllipsisPosition;

/// Display settings, every key optional in the file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Visible slot budget; 0 means unlimited, negatives are clamped to 0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i64>,
    pub ellipsis_position: EllipsisPosition,
    pub separator: String,
    pub ellipsis: String,
    pub show_hidden: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_items: None,
            ellipsis_position: EllipsisPosition::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
            show_hidden: false,
        }
    }
}

/// Where settings came from
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsSource {
    File(PathBuf),
    Defaults,
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reads settings from a specific file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Loads settings following the lookup order
    ///
    /// An explicit path (flag or `CRUMBS_CONFIG`) must exist. The default
    /// location is optional and falls back to built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, SettingsSource)> {
        let env_path = std::env::var_os(CONFIG_PATH_ENV)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        if let Some(path) = explicit.map(Path::to_path_buf).or(env_path) {
            let settings = Self::load_from(&path)?;
            return Ok((settings, SettingsSource::File(path)));
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                let settings = Self::load_from(&path)?;
                Ok((settings, SettingsSource::File(path)))
            }
            _ => {
                debug!("no config file found, using defaults");
                Ok((Self::default(), SettingsSource::Defaults))
            }
        }
    }
}

/// Default config file path under the platform config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file() {
        let settings = Settings::from_toml("max_items = 5\nellipsis_position = \"start\"\n").unwrap();
        assert_eq!(settings.max_items, Some(5));
        assert_eq!(settings.ellipsis_position, EllipsisPosition::Start);
        assert_eq!(settings.separator, DEFAULT_SEPARATOR);
    }

    #[test]
    fn test_unknown_position_falls_back_to_center() {
        let settings = Settings::from_toml("ellipsis_position = \"diagonal\"").unwrap();
        assert_eq!(settings.ellipsis_position, EllipsisPosition::Center);
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        assert!(Settings::from_toml("max_items = \"three\"").is_err());
    }

    #[test]
    fn test_toml_output_reloads() {
        let settings = Settings {
            max_items: Some(4),
            separator: " > ".to_string(),
            ..Settings::default()
        };
        let text = settings.to_toml().unwrap();
        assert!(text.contains("max_items = 4"));
        assert!(text.contains("ellipsis_position = \"center\""));
        assert_eq!(Settings::from_toml(&text).unwrap(), settings);
    }
}
