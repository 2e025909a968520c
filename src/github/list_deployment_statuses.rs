//! Deployment status listing operation.

use crate::error::PreviewError;
use crate::github::models::DeploymentStatus;
use crate::github::util::{log_request, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// List the status history of a deployment.
pub(crate) fn list_deployment_statuses(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    deployment_id: u64,
) -> AsyncTask<Result<Vec<DeploymentStatus>, PreviewError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/deployments/{deployment_id}/statuses");
        log_request("GET", &route);
        inner
            .get(route, None::<&()>)
            .await
            .map_err(PreviewError::from)
    })
}
