//! Configuration management for todoview
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, BACKEND_TODOIST, CONFIG_GENERATED, DEFAULT_API_TOKEN_ENV, DEFAULT_SYNC_ENDPOINT,
    LIST_CHROME_ROWS, LIST_DEFAULT_HEIGHT, LIST_DEFAULT_WIDTH, LIST_MAX_HEIGHT, LIST_TITLE, LOCAL_CONFIG_FILE,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend type (only "todoist" is supported)
    pub backend_type: String,
    /// Sync endpoint receiving the snapshot request
    pub endpoint: String,
    /// Name of the environment variable holding the API token
    pub api_token_env: String,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Title shown above the list
    pub title: String,
    /// Total list height in rows, including title, pagination and help
    pub list_height: u16,
    /// Width used before the terminal reports its size
    pub default_width: u16,
    /// Wrap the cursor around at both ends instead of stopping
    pub wrap_navigation: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            backend_type: BACKEND_TODOIST.to_string(),
            endpoint: DEFAULT_SYNC_ENDPOINT.to_string(),
            api_token_env: DEFAULT_API_TOKEN_ENV.to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: LIST_TITLE.to_string(),
            list_height: LIST_DEFAULT_HEIGHT,
            default_width: LIST_DEFAULT_WIDTH,
            wrap_navigation: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level into a `log` filter
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from the given file, or from the first file found
    /// in the default locations, or return defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        let xdg_config = Self::get_default_config_path().ok()?;
        if xdg_config.exists() {
            return Some(xdg_config);
        }

        None
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.api.backend_type != BACKEND_TODOIST {
            anyhow::bail!("unsupported backend_type '{}'", self.api.backend_type);
        }

        if self.api.endpoint.is_empty() {
            anyhow::bail!("endpoint cannot be empty");
        }
        if !self.api.endpoint.starts_with("https://") && !self.api.endpoint.starts_with("http://") {
            anyhow::bail!("endpoint must be an http(s) URL, got '{}'", self.api.endpoint);
        }

        if self.api.api_token_env.is_empty() {
            anyhow::bail!("api_token_env cannot be empty");
        }

        // At least one item row must fit under the chrome
        if self.ui.list_height <= LIST_CHROME_ROWS || self.ui.list_height > LIST_MAX_HEIGHT {
            anyhow::bail!(
                "list_height must be between {} and {} rows, got {}",
                LIST_CHROME_ROWS + 1,
                LIST_MAX_HEIGHT,
                self.ui.list_height
            );
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# todoview Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}

/// Bearer credential read once from the process environment.
///
/// A missing variable yields an empty token; the remote rejects it.
#[derive(Clone, Default)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Read the token from the variable named in the API config
    pub fn from_env(api: &ApiConfig) -> Self {
        Self(std::env::var(&api.api_token_env).unwrap_or_default())
    }

    pub fn token(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}
