//! Deployment creation operation.

use crate::error::PreviewError;
use crate::github::models::{Deployment, NewDeployment};
use crate::github::util::{log_request, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Create a deployment.
pub(crate) fn create_deployment(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    request: NewDeployment,
) -> AsyncTask<Result<Deployment, PreviewError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/deployments");
        log_request("POST", &route);
        inner
            .post(route, Some(&request))
            .await
            .map_err(PreviewError::from)
    })
}
