//! Issue label addition operation.

use crate::error::PreviewError;
use crate::github::models::Label;
use crate::github::util::{log_request, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Add labels to an issue or pull request, keeping any it already has.
///
/// Returns the full label set after the addition.
pub(crate) fn add_labels(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    issue_number: u64,
    labels: Vec<String>,
) -> AsyncTask<Result<Vec<Label>, PreviewError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/issues/{issue_number}/labels");
        log_request("POST", &route);
        inner
            .post(route, Some(&serde_json::json!({ "labels": labels })))
            .await
            .map_err(PreviewError::from)
    })
}
