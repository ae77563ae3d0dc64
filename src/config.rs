use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variables checked for the token, in order
pub const TOKEN_ENV_VARS: [&str; 2] = ["GIT_API_TOKEN", "GITHUB_TOKEN"];

/// Resolved runtime configuration, built once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub token: Option<String>,
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Optional values read from the settings file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub token: Option<String>,
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Get the gitpeek configuration directory
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine the user configuration directory")?;
    Ok(base.join("gitpeek"))
}

/// Get the path to the settings file
pub fn settings_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load settings from a specific path; a missing file yields defaults
pub fn load_settings_from_path(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let settings: Settings = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(settings)
}

/// Load settings from the default location
pub fn load_settings() -> Result<Settings> {
    match settings_path() {
        Ok(path) => load_settings_from_path(&path),
        // No home directory means no settings file to honor
        Err(_) => Ok(Settings::default()),
    }
}

/// First non-empty token from the environment
#[must_use]
pub fn token_from_env() -> Option<String> {
    TOKEN_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

impl Config {
    /// Merge command-line values (which already include their env fallbacks)
    /// with the environment token and the settings file
    pub fn resolve(
        api_url: Option<String>,
        timeout_secs: Option<u64>,
        env_token: Option<String>,
        settings: Settings,
    ) -> Result<Self> {
        let token = env_token
            .or(settings.token)
            .filter(|token| !token.trim().is_empty());

        let api_url = api_url
            .or(settings.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if api_url.is_empty() {
            anyhow::bail!("API URL cannot be empty");
        }

        let timeout_secs = timeout_secs
            .or(settings.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        if timeout_secs == 0 {
            anyhow::bail!("Request timeout must be at least 1 second");
        }

        Ok(Self {
            token,
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Build configuration from the process environment and settings file
    pub fn load(api_url: Option<String>, timeout_secs: Option<u64>) -> Result<Self> {
        let settings = load_settings()?;
        Self::resolve(api_url, timeout_secs, token_from_env(), settings)
    }
}
