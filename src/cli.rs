//! Command line interface.

use crate::config::{ConfigFile, ConfigOverrides, PreviewConfig};
use crate::git::GitRemote;
use crate::github::{GitHubClient, GitHubProject};
use crate::preview::{
    DeploymentStatusEvent, DetectOptions, HttpProbe, MirrorSettings, Outcome, PullRequestEvent,
    detect, load_event, sync_event, synchronize,
};
use anyhow::{Context, Result, anyhow};
use chrono::{TimeDelta, Utc};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Keep pull request preview refs and deployments in sync with GitHub.
#[derive(Debug, Parser)]
#[command(name = "pr-preview", version, about, long_about = None)]
pub struct Cli {
    /// Location of the GitHub API server
    #[arg(long, env = "GITHUB_API_URL")]
    pub host: Option<String>,

    /// GitHub organization and project name separated by a slash (e.g. "web-platform-tests/wpt")
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub github_project: Option<String>,

    /// Base URL of the preview host
    #[arg(long)]
    pub target: Option<String>,

    /// Optional TOML file with default settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// GitHub API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Webhook payload of the triggering event
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Mirror every pull request updated within the last `window` seconds
    Synchronize {
        /// git remote (name, URL or path) holding the mirror refs
        #[arg(long)]
        remote: String,

        /// Size of the look-back window, in seconds
        #[arg(long)]
        window: u64,
    },

    /// Mirror the pull request of a `pull_request` event
    SyncEvent {
        /// git remote holding the mirror refs; refs go through the API when omitted
        #[arg(long)]
        remote: Option<String>,
    },

    /// Wait for a pending deployment to go live and report the result
    Detect {
        /// Seconds to wait before marking the deployment as failed
        #[arg(long)]
        timeout: u64,

        /// Seconds between availability checks
        #[arg(long)]
        polling_period: Option<u64>,
    },
}

impl Cli {
    /// Configuration values given on the command line or in the environment.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        let polling_period_secs = match self.command {
            Command::Detect { polling_period, .. } => polling_period,
            _ => None,
        };
        ConfigOverrides {
            host: self.host.clone(),
            github_project: self.github_project.clone(),
            target: self.target.clone(),
            token: self.token.clone(),
            polling_period_secs,
        }
    }
}

fn event_path(cli: &Cli) -> Result<&Path> {
    cli.event_path
        .as_deref()
        .ok_or_else(|| anyhow!("no event payload: set GITHUB_EVENT_PATH or --event-path"))
}

/// Execute the parsed command.
pub async fn run(cli: Cli) -> Result<Outcome> {
    let file = match &cli.config {
        Some(path) => ConfigFile::load(path).await?,
        None => ConfigFile::default(),
    };
    let config = PreviewConfig::resolve(cli.overrides(), file)?;

    let client = GitHubClient::builder()
        .personal_token(config.token.clone())
        .base_uri(config.host.clone())
        .build()?;
    let project = GitHubProject::new(client, &config.project.owner, &config.project.repo)
        .with_threshold(config.rate_limit_threshold);
    let settings = MirrorSettings {
        label: config.label.clone(),
        target: config.target.clone(),
    };

    match &cli.command {
        Command::Synchronize { remote, window } => {
            let window = i64::try_from(*window)
                .ok()
                .and_then(TimeDelta::try_seconds)
                .ok_or_else(|| anyhow!("window of {window} seconds is out of range"))?;
            let remote = GitRemote::new(remote);
            let report = synchronize(&project, &remote, &settings, Utc::now() - window)
                .await
                .context("synchronization failed")?;
            info!(
                "Processed {} pull requests, {} mirrored",
                report.processed, report.mirrored
            );
            Ok(Outcome::Success)
        }
        Command::SyncEvent { remote } => {
            let event: PullRequestEvent = load_event(event_path(&cli)?)
                .await
                .context("cannot read pull_request event")?;
            let plan = match remote {
                Some(remote) => {
                    sync_event(&project, &GitRemote::new(remote), &settings, &event).await
                }
                None => sync_event(&project, &project, &settings, &event).await,
            }
            .context("synchronization failed")?;
            info!(
                "Pull request #{}: {} ref change(s)",
                event.pull_request.number,
                plan.ref_actions.len()
            );
            Ok(Outcome::Success)
        }
        Command::Detect { timeout, .. } => {
            let event: DeploymentStatusEvent = load_event(event_path(&cli)?)
                .await
                .context("cannot read deployment_status event")?;
            let options = DetectOptions {
                target: config.target.clone(),
                timeout: Duration::from_secs(*timeout),
                polling_period: config.polling_period,
            };
            let probe = HttpProbe::new(&config.target)?;
            Ok(detect(&project, &probe, &event, &options).await?)
        }
    }
}
