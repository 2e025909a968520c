//! Error types shared by the GitHub client, the git remote wrapper and the
//! preview drivers.

use thiserror::Error;

/// Error types for preview operations
#[derive(Debug, Error)]
pub enum PreviewError {
    /// Octocrab library error
    #[error("Octocrab error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// Plain HTTP failure while probing the preview host
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A git subprocess exited unsuccessfully
    #[error("`git {command}` failed: {stderr}")]
    Git {
        /// Arguments passed to git, space separated
        command: String,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// Filesystem or process spawning failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON payload
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid or missing configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// The webhook payload did not have the expected shape
    #[error("Invalid event payload: {0}")]
    InvalidEvent(String),

    /// The shared request quota is too low to continue
    #[error(
        "Exiting to avoid GitHub.com API request throttling ({resource}: {remaining}/{limit} remaining)"
    )]
    RateLimitGuard {
        /// Rate limit resource name (`core`, `search`)
        resource: &'static str,
        /// Requests left in the current window
        remaining: u64,
        /// Total requests allowed in the window
        limit: u64,
    },

    /// The search API reported a partial result set
    #[error("Incomplete results")]
    IncompleteResults,

    /// No head revision could be resolved for a pull request that must be mirrored
    #[error("No head revision found for pull request #{0}")]
    MissingHead(u64),

    /// The preview host never served the deployed revision
    #[error("Deployment did not become available after {0} seconds")]
    DeploymentTimeout(u64),

    /// A background task was dropped before it produced a result
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::sync::oneshot::error::RecvError),
}

/// Convenience result alias for preview operations
pub type PreviewResult<T> = Result<T, PreviewError>;

impl PreviewError {
    /// Whether this error is a GitHub API 404 response.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            PreviewError::Octocrab(octocrab::Error::GitHub { source, .. }) => {
                source.status_code.as_u16() == 404
            }
            _ => false,
        }
    }
}
