//! Seams between the preview drivers and the outside world.
//!
//! The drivers in [`crate::preview`] only talk to GitHub, the git remote and
//! the preview host through these traits. Production implementations live in
//! [`crate::github::GitHubProject`], [`crate::git::GitRemote`] and
//! [`crate::preview::HttpProbe`].

use crate::error::PreviewResult;
use crate::github::models::{Deployment, DeploymentStatus, NewDeploymentStatus, PullRequest};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository-scoped GitHub operations used to mirror pull requests.
///
/// All `refspec` arguments omit the `refs/` prefix.
#[async_trait]
pub trait PreviewProject: Send + Sync {
    /// Pull requests updated strictly after `since`.
    async fn pull_requests_updated_since(
        &self,
        since: DateTime<Utc>,
    ) -> PreviewResult<Vec<PullRequest>>;

    async fn add_label(&self, number: u64, label: &str) -> PreviewResult<()>;

    async fn create_ref(&self, refspec: &str, revision: &str) -> PreviewResult<()>;

    async fn update_ref(&self, refspec: &str, revision: &str) -> PreviewResult<()>;

    /// The most recent deployment of `revision`, if any.
    async fn find_deployment(&self, revision: &str) -> PreviewResult<Option<Deployment>>;

    /// Create the preview deployment of `revision` for pull request `number`.
    async fn create_deployment(&self, number: u64, revision: &str) -> PreviewResult<Deployment>;

    async fn deployment_statuses(
        &self,
        deployment: &Deployment,
    ) -> PreviewResult<Vec<DeploymentStatus>>;

    async fn update_deployment(
        &self,
        deployment: &Deployment,
        status: NewDeploymentStatus,
    ) -> PreviewResult<()>;
}

/// Read and delete access to the refs of the mirrored repository.
#[async_trait]
pub trait RefStore: Send + Sync {
    /// Commit `refs/<refspec>` points at, or `None` if it does not exist.
    async fn revision(&self, refspec: &str) -> PreviewResult<Option<String>>;

    async fn delete_ref(&self, refspec: &str) -> PreviewResult<()>;
}

/// Observes whether a deployment is being served by the preview host.
#[async_trait]
pub trait DeploymentProbe: Send + Sync {
    async fn is_deployed(&self, deployment: &Deployment) -> PreviewResult<bool>;
}
