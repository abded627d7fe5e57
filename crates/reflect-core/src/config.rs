//! Configuration management for reflect.
//!
//! Loads configuration from ${REFLECT_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the analysis service base URL.
pub const SERVICE_URL_ENV: &str = "REFLECT_SERVICE_URL";

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for reflect configuration and log directories.
    //!
    //! REFLECT_HOME resolution order:
    //! 1. REFLECT_HOME environment variable (if set)
    //! 2. ~/.config/reflect (default)
    //! 3. ./.reflect when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the reflect home directory.
    pub fn reflect_home() -> PathBuf {
        if let Ok(home) = std::env::var("REFLECT_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".reflect"),
            |h| h.join(".config").join("reflect"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        reflect_home().join("config.toml")
    }

    /// Returns the directory holding log files.
    pub fn logs_dir() -> PathBuf {
        reflect_home().join("logs")
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: Config::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the analysis service
    pub service_url: String,

    /// Request timeout in seconds (0 disables)
    pub request_timeout_secs: u32,

    /// Maximum reflection length in characters
    pub max_chars: usize,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";
    pub const DEFAULT_MAX_CHARS: usize = 1000;
    const DEFAULT_LOG_FILTER: &str = "info";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Returns the request timeout, or `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(u64::from(self.request_timeout_secs)))
        }
    }

    /// Resolves the service base URL with precedence: flag > env > config > default.
    ///
    /// # Errors
    /// Returns an error if the winning value is not a valid URL.
    pub fn effective_service_url(&self, flag: Option<&str>) -> Result<String> {
        let env = std::env::var(SERVICE_URL_ENV).ok();
        resolve_service_url(flag, env.as_deref(), Some(&self.service_url))
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: Self::DEFAULT_SERVICE_URL.to_string(),
            request_timeout_secs: 0,
            max_chars: Self::DEFAULT_MAX_CHARS,
            log: LogConfig::default(),
        }
    }
}

/// Picks the first non-blank candidate in precedence order and validates it.
///
/// # Errors
/// Returns an error if the chosen value is not a valid URL.
pub fn resolve_service_url(
    flag: Option<&str>,
    env: Option<&str>,
    config: Option<&str>,
) -> Result<String> {
    let chosen = [flag, env, config]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(Config::DEFAULT_SERVICE_URL);

    url::Url::parse(chosen).with_context(|| format!("Invalid analysis service URL: {chosen}"))?;
    Ok(chosen.trim_end_matches('/').to_string())
}
