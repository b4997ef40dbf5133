use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::i18n::Language;
use crate::paths;

/// Backend used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the configured backend URL.
pub const API_BASE_ENV: &str = "COUNSEL_API_BASE";

pub const DEFAULT_HEALTH_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Settings in the `[counsel]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounselConfig {
    /// Base URL of the assistant backend.
    pub base_url: Option<String>,
    /// Default session language (`en` or `hi`).
    pub language: Option<String>,
    /// Seconds between background health probes.
    pub health_interval_secs: Option<u64>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/counsel/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub counsel: CounselConfig,
}

/// Configuration after merging CLI options, environment, and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub language: Language,
    pub health_interval: Duration,
    pub request_timeout: Duration,
}

/// CLI overrides that take precedence over everything else.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub base_url: Option<String>,
    pub language: Option<String>,
}

/// Reads the backend URL override from the environment. Blank values are ignored.
fn env_base_url() -> Option<String> {
    std::env::var(API_BASE_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_base_url(url: &str) -> Result<String> {
    let url = url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!(
            "Invalid configuration: 'base_url' must start with http:// or https://, got '{url}'\n\n\
             Fix it via:\n  \
             - CLI option: counsel --base-url <url>\n  \
             - Environment: {API_BASE_ENV}=<url>\n  \
             - Config file: ~/.config/counsel/config.toml"
        );
    }
    Ok(url.trim_end_matches('/').to_string())
}

fn positive_secs(key: &str, value: Option<u64>, default: u64) -> Result<Duration> {
    match value {
        Some(0) => bail!("Invalid configuration: '{key}' must be greater than zero"),
        Some(secs) => Ok(Duration::from_secs(secs)),
        None => Ok(Duration::from_secs(default)),
    }
}

/// Resolves configuration.
///
/// Priority for the backend URL: CLI option, then `COUNSEL_API_BASE`, then the
/// config file, then [`DEFAULT_BASE_URL`]. Other keys skip the environment step.
/// Unknown languages fall back to English.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let file = &config_file.counsel;

    let base_url = options
        .base_url
        .clone()
        .or_else(env_base_url)
        .or_else(|| file.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let base_url = validate_base_url(&base_url)?;

    let language = options
        .language
        .as_deref()
        .or(file.language.as_deref())
        .map_or_else(Language::default, Language::coerce);

    let health_interval = positive_secs(
        "health_interval_secs",
        file.health_interval_secs,
        DEFAULT_HEALTH_INTERVAL_SECS,
    )?;
    let request_timeout = positive_secs(
        "request_timeout_secs",
        file.request_timeout_secs,
        DEFAULT_REQUEST_TIMEOUT_SECS,
    )?;

    Ok(ResolvedConfig {
        base_url,
        language,
        health_interval,
        request_timeout,
    })
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/counsel/config.toml`
    /// or `~/.config/counsel/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
