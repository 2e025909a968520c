//! GitHub API client wrapper
//!
//! Provides the REST calls the preview tooling needs without exposing Octocrab.
//!
//! # Examples
//!
//! ```rust,no_run
//! use pr_preview::GitHubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gh = GitHubClient::builder().personal_token("ghp_...").build()?;
//!
//!     let deployments = gh.list_deployments("owner", "repo", "abc123").await??;
//!     println!("{} deployments", deployments.len());
//!
//!     Ok(())
//! }
//! ```

use crate::error::{PreviewError, PreviewResult};
use crate::github::models::RateLimit;
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

mod deployments;
mod issues;
mod refs;

/// GitHub API client wrapper that encapsulates Octocrab.
///
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Current request quota for every rate limit resource
    #[must_use]
    pub fn rate_limit(&self) -> AsyncTask<Result<RateLimit, PreviewError>> {
        crate::github::get_rate_limit::get_rate_limit(self.inner.clone())
    }
}

/// Builder for creating `GitHubClient`
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_uri: Option<String>,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            base_uri: None,
        }
    }

    /// Set personal access token for authentication
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set base URI (GitHub Enterprise, or a mock server in tests)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Build the `GitHubClient`
    pub fn build(self) -> PreviewResult<GitHubClient> {
        let mut builder = Octocrab::builder();

        if let Some(token) = self.token {
            builder = builder.personal_token(token);
        }

        if let Some(uri) = self.base_uri {
            builder = builder
                .base_uri(uri.as_str())
                .map_err(|e| PreviewError::Config(format!("Invalid API host {uri}: {e}")))?;
        }

        let octocrab = builder
            .build()
            .map_err(|e| PreviewError::Config(format!("Client setup failed: {e}")))?;

        Ok(GitHubClient {
            inner: Arc::new(octocrab),
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
