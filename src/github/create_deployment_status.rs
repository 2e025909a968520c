//! Deployment status creation operation.

use crate::error::PreviewError;
use crate::github::models::{DeploymentStatus, NewDeploymentStatus};
use crate::github::util::{log_request, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Append a status to a deployment's history.
pub(crate) fn create_deployment_status(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    deployment_id: u64,
    request: NewDeploymentStatus,
) -> AsyncTask<Result<DeploymentStatus, PreviewError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/deployments/{deployment_id}/statuses");
        log_request("POST", &route);
        inner
            .post(route, Some(&request))
            .await
            .map_err(PreviewError::from)
    })
}
