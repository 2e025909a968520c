//! Deployment listing operation.

use crate::error::PreviewError;
use crate::github::models::Deployment;
use crate::github::util::{log_request, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct DeploymentFilter<'a> {
    sha: &'a str,
}

/// List the deployments created for commit `sha`, in the order GitHub returns them.
pub(crate) fn list_deployments(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    sha: impl Into<String>,
) -> AsyncTask<Result<Vec<Deployment>, PreviewError>> {
    let (owner, repo, sha) = (owner.into(), repo.into(), sha.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/deployments");
        log_request("GET", &route);
        inner
            .get(route, Some(&DeploymentFilter { sha: &sha }))
            .await
            .map_err(PreviewError::from)
    })
}
