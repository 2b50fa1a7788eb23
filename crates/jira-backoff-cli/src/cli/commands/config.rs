//! `jira-backoff config` – print effective configuration.

use anyhow::{Context, Result};
use jira_backoff_core::config::{self, BackoffConfig};

pub fn run_config(cfg: &BackoffConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg).context("serialize config")?);
    Ok(())
}
