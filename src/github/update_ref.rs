//! Git reference update operation.

use crate::error::PreviewError;
use crate::github::models::GitRef;
use crate::github::util::{log_request, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Move `refs/<refspec>` to `sha`.
///
/// The update is forced: mirror refs follow the pull request head through
/// rebases and force-pushes, so the new commit need not descend from the old.
pub(crate) fn update_ref(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    refspec: impl Into<String>,
    sha: impl Into<String>,
) -> AsyncTask<Result<GitRef, PreviewError>> {
    let (owner, repo, refspec, sha) = (owner.into(), repo.into(), refspec.into(), sha.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/git/refs/{refspec}");
        log_request("PATCH", &route);
        inner
            .patch(
                route,
                Some(&serde_json::json!({
                    "sha": sha,
                    "force": true
                })),
            )
            .await
            .map_err(PreviewError::from)
    })
}
