//! CLI for evaluating the backoff policy offline.

mod commands;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use jira_backoff_core::config;
use jira_backoff_core::retry::RetryPolicy;
use std::path::PathBuf;
use std::time::Duration;

use commands::{run_compute, run_config, run_replay};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "jira-backoff")]
#[command(about = "Evaluate the rate-limit aware retry backoff policy", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Overrides for the configured wait bounds.
#[derive(Debug, Clone, Default, Args)]
pub struct WaitArgs {
    /// Minimum backoff in seconds (overrides config).
    #[arg(long, value_name = "SECS")]
    pub min_wait_secs: Option<f64>,
    /// Maximum backoff in seconds (overrides config).
    #[arg(long, value_name = "SECS")]
    pub max_wait_secs: Option<u64>,
}

impl WaitArgs {
    pub fn apply(&self, mut policy: RetryPolicy) -> Result<RetryPolicy> {
        if let Some(secs) = self.min_wait_secs {
            policy.min_wait = match Duration::try_from_secs_f64(secs) {
                Ok(d) => d,
                Err(_) => bail!("invalid --min-wait-secs: {secs}"),
            };
        }
        if let Some(secs) = self.max_wait_secs {
            policy.max_wait = Duration::from_secs(secs);
        }
        Ok(policy)
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compute the delay for one response, starting from an empty node table.
    Compute {
        /// HTTP status of the previous attempt.
        #[arg(long, default_value = "429")]
        status: u32,
        /// Response header as 'Name: value' (repeatable).
        #[arg(long = "header", short = 'H', value_name = "HEADER")]
        headers: Vec<String>,
        /// 0-based retry attempt.
        #[arg(long, default_value = "0")]
        attempt: u32,
        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Feed recorded responses through one shared policy and report each decision.
    Replay {
        /// TOML file with `[[response]]` entries.
        path: PathBuf,
        /// Print a JSON report instead of text.
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Show the effective configuration and where it lives.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let policy = RetryPolicy::from_config(&cfg.retry);

        match cli.command {
            CliCommand::Compute {
                status,
                headers,
                attempt,
                wait,
            } => run_compute(&wait.apply(policy)?, status, &headers, attempt)?,
            CliCommand::Replay { path, json, wait } => {
                run_replay(&wait.apply(policy)?, &path, json)?
            }
            CliCommand::Config => run_config(&cfg)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
