use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::bootstrap;
use crate::model::Units;
use crate::theme::DEFAULT_THEME;

/// Defects in required configuration fields. These are fatal: the binary
/// propagates them to a non-zero exit, unlike theme attributes which fall
/// back silently.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} not configured in {}", path.display())]
    MissingField { field: &'static str, path: PathBuf },

    #[error("invalid value '{value}' for {field} in {}", path.display())]
    InvalidField {
        field: &'static str,
        value: String,
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Deserialize, Default)]
struct ApiSection {
    key: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct DefaultsSection {
    location: Option<String>,
    units: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct DisplaySection {
    theme: Option<String>,
}

/// On-disk document shape. Example TOML:
///
/// ```toml
/// [api]
/// key = "..."
///
/// [defaults]
/// location = "London"
/// units = "metric"
///
/// [display]
/// theme = "sunny_dynamic"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
struct ConfigDoc {
    #[serde(default)]
    api: ApiSection,
    #[serde(default)]
    defaults: DefaultsSection,
    #[serde(default)]
    display: DisplaySection,
}

/// Loaded configuration. Constructed once per process and never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    doc: ConfigDoc,
    path: PathBuf,
}

impl Config {
    /// Load the configuration from the user config directory. If no file
    /// exists yet, materialize the shipped defaults first, then load.
    pub fn load() -> Result<Self> {
        let path = config_file_path()?;
        if !path.exists() {
            bootstrap::materialize()
                .context("Failed to create the default configuration files")?;
        }
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&contents, path)
    }

    /// Parse a configuration document. `path` is only used in messages.
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self> {
        let doc: ConfigDoc = toml::from_str(contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(Self { doc, path: path.to_path_buf() })
    }

    /// Path of the file this configuration was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The OpenWeather API key. Required; an absent or empty key is fatal.
    pub fn api_key(&self) -> Result<&str> {
        match self.doc.api.key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ConfigError::MissingField {
                field: "api.key",
                path: self.path.clone(),
            }
            .into()),
        }
    }

    /// The default location used when no city is given on the command line.
    pub fn location(&self) -> Result<&str> {
        match self.doc.defaults.location.as_deref() {
            Some(loc) if !loc.trim().is_empty() => Ok(loc),
            _ => Err(ConfigError::MissingField {
                field: "defaults.location",
                path: self.path.clone(),
            }
            .into()),
        }
    }

    /// The default unit system. Required, and must be metric or imperial.
    pub fn units(&self) -> Result<Units> {
        let raw = self.doc.defaults.units.as_deref().ok_or_else(|| {
            ConfigError::MissingField {
                field: "defaults.units",
                path: self.path.clone(),
            }
        })?;

        Units::try_from(raw).map_err(|_| {
            ConfigError::InvalidField {
                field: "defaults.units",
                value: raw.to_string(),
                path: self.path.clone(),
            }
            .into()
        })
    }

    /// The selected theme name. Optional; absent means the default theme.
    pub fn theme_name(&self) -> &str {
        self.doc
            .display
            .theme
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_THEME)
    }
}

pub fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "sunny")
        .ok_or_else(|| anyhow!("Could not determine platform config directory"))
}

/// User-writable configuration directory, e.g. `~/.config/sunny` on Linux.
pub fn config_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Directory holding `{theme}.toml` documents.
pub fn theme_dir() -> Result<PathBuf> {
    Ok(config_dir()?.join("themes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Config {
        Config::from_toml_str(contents, Path::new("/tmp/config.toml")).expect("valid TOML")
    }

    const FULL: &str = r#"
        [api]
        key = "abc123"

        [defaults]
        location = "Kyiv"
        units = "imperial"

        [display]
        theme = "cyberpunk"
    "#;

    #[test]
    fn full_document_resolves_every_field() {
        let cfg = parse(FULL);
        assert_eq!(cfg.api_key().unwrap(), "abc123");
        assert_eq!(cfg.location().unwrap(), "Kyiv");
        assert_eq!(cfg.units().unwrap(), Units::Imperial);
        assert_eq!(cfg.theme_name(), "cyberpunk");
    }

    #[test]
    fn missing_location_is_fatal_and_names_the_field() {
        let cfg = parse("[defaults]\nunits = \"metric\"\n");
        let err = cfg.location().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("defaults.location"), "got: {msg}");
        assert!(msg.contains("config.toml"), "got: {msg}");
    }

    #[test]
    fn empty_api_key_is_fatal() {
        let cfg = parse("[api]\nkey = \"\"\n");
        let err = cfg.api_key().unwrap_err();
        assert!(err.to_string().contains("api.key"));
    }

    #[test]
    fn missing_units_is_fatal() {
        let cfg = parse("[defaults]\nlocation = \"Kyiv\"\n");
        assert!(cfg.units().is_err());
    }

    #[test]
    fn bogus_units_value_is_fatal() {
        let cfg = parse("[defaults]\nunits = \"kelvin\"\n");
        let err = cfg.units().unwrap_err();
        assert!(err.to_string().contains("kelvin"));
    }

    #[test]
    fn theme_name_defaults_silently() {
        let cfg = parse("");
        assert_eq!(cfg.theme_name(), DEFAULT_THEME);
    }

    #[test]
    fn unparsable_document_is_fatal() {
        let err = Config::from_toml_str("not = [valid", Path::new("/tmp/config.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
