//! Run configuration.
//!
//! Values come from command line flags (which clap also fills from the
//! environment), then an optional TOML file, then built-in defaults.

use crate::error::{PreviewError, PreviewResult};
use crate::github::DEFAULT_RATE_LIMIT_THRESHOLD;
use crate::preview::{DEFAULT_LABEL, DEFAULT_POLLING_PERIOD};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Public GitHub API.
pub const DEFAULT_HOST: &str = "https://api.github.com";

/// `owner/repo` pair identifying a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl FromStr for RepoSlug {
    type Err = PreviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = |(owner, repo): &(&str, &str)| {
            !owner.is_empty() && !repo.is_empty() && !repo.contains('/')
        };
        let (owner, repo) = s
            .split_once('/')
            .filter(valid)
            .ok_or_else(|| {
                PreviewError::Config(format!(
                    "GitHub project must look like \"owner/repo\", got \"{s}\""
                ))
            })?;
        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Contents of a `--config` TOML file. Every key is optional.
///
/// ```toml
/// host = "https://api.github.com"
/// github_project = "web-platform-tests/wpt"
/// target = "https://wpt-preview.example.org"
/// label = "pull-request-has-preview"
/// rate_limit_threshold = 0.2
/// polling_period_secs = 5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub host: Option<String>,
    pub github_project: Option<String>,
    pub target: Option<String>,
    pub label: Option<String>,
    pub rate_limit_threshold: Option<f64>,
    pub polling_period_secs: Option<u64>,
}

impl ConfigFile {
    pub fn from_toml_str(text: &str) -> PreviewResult<Self> {
        toml::from_str(text).map_err(|e| PreviewError::Config(format!("Invalid config file: {e}")))
    }

    pub async fn load(path: &Path) -> PreviewResult<Self> {
        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            PreviewError::Config(format!("Cannot read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub github_project: Option<String>,
    pub target: Option<String>,
    pub token: Option<String>,
    pub polling_period_secs: Option<u64>,
}

/// Fully resolved and validated configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewConfig {
    pub host: String,
    pub project: RepoSlug,
    pub target: String,
    pub token: String,
    pub label: String,
    pub rate_limit_threshold: f64,
    pub polling_period: Duration,
}

impl PreviewConfig {
    /// Merge overrides over the file over defaults, then validate.
    pub fn resolve(overrides: ConfigOverrides, file: ConfigFile) -> PreviewResult<Self> {
        let host = overrides
            .host
            .or(file.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let project: RepoSlug = overrides
            .github_project
            .or(file.github_project)
            .ok_or_else(|| {
                PreviewError::Config(
                    "missing GitHub project (--github-project or GITHUB_REPOSITORY)".to_string(),
                )
            })?
            .parse()?;

        let target = overrides
            .target
            .or(file.target)
            .ok_or_else(|| {
                PreviewError::Config("missing preview host (--target)".to_string())
            })?;

        let token = overrides
            .token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                PreviewError::Config("GITHUB_TOKEN is not set".to_string())
            })?;

        let rate_limit_threshold = file
            .rate_limit_threshold
            .unwrap_or(DEFAULT_RATE_LIMIT_THRESHOLD);
        if !(0.0..=1.0).contains(&rate_limit_threshold) {
            return Err(PreviewError::Config(format!(
                "rate_limit_threshold must be between 0 and 1, got {rate_limit_threshold}"
            )));
        }

        let polling_period = overrides
            .polling_period_secs
            .or(file.polling_period_secs)
            .map_or(DEFAULT_POLLING_PERIOD, Duration::from_secs);
        if polling_period.is_zero() {
            return Err(PreviewError::Config(
                "polling period must be at least one second".to_string(),
            ));
        }

        Ok(Self {
            host,
            project,
            target,
            token,
            label: file.label.unwrap_or_else(|| DEFAULT_LABEL.to_string()),
            rate_limit_threshold,
            polling_period,
        })
    }
}
