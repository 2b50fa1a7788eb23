use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Retry policy parameters (`[retry]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,
    /// Minimum backoff in seconds (e.g. 0.25 = 250ms).
    pub min_wait_secs: f64,
    /// Maximum backoff in seconds.
    pub max_wait_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 4,
            min_wait_secs: 1.0,
            max_wait_secs: 30,
        }
    }
}

/// Global configuration loaded from `~/.config/jira-backoff/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Retry ceiling and wait bounds; built-in defaults when the section is missing.
    #[serde(default)]
    pub retry: RetryConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("jira-backoff")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG path, creating a default file if none exists.
pub fn load_or_init() -> Result<BackoffConfig> {
    let path = config_path()?;
    if !path.exists() {
        let cfg = BackoffConfig::default();
        write_to_path(&cfg, &path)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<BackoffConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))
}

/// Write configuration as pretty TOML (creates parent dir if needed).
pub fn write_to_path(cfg: &BackoffConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create dir: {}", parent.display()))?;
    }
    let toml = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
    Ok(())
}
