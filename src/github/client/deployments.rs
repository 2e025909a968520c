//! Deployments API methods

use super::GitHubClient;
use crate::error::PreviewError;
use crate::github::models::{Deployment, DeploymentStatus, NewDeployment, NewDeploymentStatus};
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// List deployments of a commit
    #[must_use]
    pub fn list_deployments(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        sha: impl Into<String>,
    ) -> AsyncTask<Result<Vec<Deployment>, PreviewError>> {
        crate::github::list_deployments::list_deployments(self.inner.clone(), owner, repo, sha)
    }

    /// Create a deployment
    #[must_use]
    pub fn create_deployment(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        request: NewDeployment,
    ) -> AsyncTask<Result<Deployment, PreviewError>> {
        crate::github::create_deployment::create_deployment(
            self.inner.clone(),
            owner,
            repo,
            request,
        )
    }

    /// List a deployment's status history
    #[must_use]
    pub fn list_deployment_statuses(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        deployment_id: u64,
    ) -> AsyncTask<Result<Vec<DeploymentStatus>, PreviewError>> {
        crate::github::list_deployment_statuses::list_deployment_statuses(
            self.inner.clone(),
            owner,
            repo,
            deployment_id,
        )
    }

    /// Post a new deployment status
    #[must_use]
    pub fn create_deployment_status(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        deployment_id: u64,
        request: NewDeploymentStatus,
    ) -> AsyncTask<Result<DeploymentStatus, PreviewError>> {
        crate::github::create_deployment_status::create_deployment_status(
            self.inner.clone(),
            owner,
            repo,
            deployment_id,
            request,
        )
    }
}
