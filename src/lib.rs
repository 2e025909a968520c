//! `pr_preview` - pull request preview mirroring via Octocrab
//!
//! Keeps three things in step with each pull request of a repository: the
//! preview label, the `prs-labeled-for-preview/<N>` and `prs-open/<N>` mirror
//! refs, and a GitHub deployment whose status tracks whether the preview host
//! is serving the pull request's head.

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod github;
pub mod preview;
pub mod runtime;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export error types
pub use error::{PreviewError, PreviewResult};

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder, GitHubProject};

pub use config::{ConfigFile, PreviewConfig, RepoSlug};
pub use git::GitRemote;
pub use preview::{
    DeploymentProbe, HttpProbe, MirrorSettings, Outcome, PreviewProject, RefStore, detect,
    sync_event, synchronize,
};
