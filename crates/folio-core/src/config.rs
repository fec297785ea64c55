//! Configuration for folio-core
//!
//! Where resources live and how they are fetched and cached.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::Locale;

/// Placeholder substituted with the locale code in localized paths.
pub const LANG_PLACEHOLDER: &str = "{lang}";

/// Resource path templates, relative to the transport root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcePaths {
    /// Localized project list
    pub projects: String,
    /// Shared technology list
    pub technologies: String,
    /// Localized certification list
    pub certifications: String,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            projects: "assets/data/projects.{lang}.json".to_string(),
            technologies: "assets/data/technologies.json".to_string(),
            certifications: "assets/data/certifications.{lang}.json".to_string(),
        }
    }
}

impl ResourcePaths {
    pub fn projects_for(&self, locale: Locale) -> String {
        self.projects.replace(LANG_PLACEHOLDER, locale.code())
    }

    pub fn technologies_path(&self) -> &str {
        &self.technologies
    }

    pub fn certifications_for(&self, locale: Locale) -> String {
        self.certifications.replace(LANG_PLACEHOLDER, locale.code())
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Site root the resource paths are relative to
    pub base_url: String,
    /// Locale used before the user picks one
    pub default_locale: Locale,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// User agent sent with HTTP requests
    pub user_agent: String,
    /// Cached collections older than this are refetched; `None` keeps them
    /// for the whole session
    pub cache_max_age_secs: Option<u64>,
    /// Resource path templates
    pub paths: ResourcePaths,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4200/".to_string(),
            default_locale: Locale::En,
            request_timeout_secs: 30,
            user_agent: concat!("folio/", env!("CARGO_PKG_VERSION")).to_string(),
            cache_max_age_secs: None,
            paths: ResourcePaths::default(),
        }
    }
}

impl FolioConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/folio/config.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
    }

    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the default location, or fall back to defaults when absent.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn cache_max_age(&self) -> Option<chrono::Duration> {
        self.cache_max_age_secs
            .and_then(|secs| i64::try_from(secs).ok())
            .map(chrono::Duration::seconds)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField("base_url".to_string()));
        }
        if url::Url::parse(&self.base_url).is_err() {
            return Err(ConfigError::InvalidUrl(self.base_url.clone()));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::OutOfRange(
                "request_timeout_secs must be positive".to_string(),
            ));
        }

        for (field, template, localized) in [
            ("paths.projects", &self.paths.projects, true),
            ("paths.technologies", &self.paths.technologies, false),
            ("paths.certifications", &self.paths.certifications, true),
        ] {
            if template.trim().is_empty() {
                return Err(ConfigError::MissingField(field.to_string()));
            }
            if localized && !template.contains(LANG_PLACEHOLDER) {
                return Err(ConfigError::MissingPlaceholder(field.to_string()));
            }
        }

        Ok(())
    }
}

/// Configuration loading or validation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Cannot read config: {0}")]
    Io(String),
    /// Config text is not valid TOML/JSON for this schema
    #[error("Cannot parse config: {0}")]
    Parse(String),
    /// Config could not be written out
    #[error("Cannot serialize config: {0}")]
    Serialize(String),
    /// Base URL does not parse
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),
    /// Required field is missing or blank
    #[error("Missing field: {0}")]
    MissingField(String),
    /// Localized path template lacks `{lang}`
    #[error("Path template {0} has no {{lang}} placeholder")]
    MissingPlaceholder(String),
}
