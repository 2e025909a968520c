//! Git reference creation operation.

use crate::error::PreviewError;
use crate::github::models::GitRef;
use crate::github::util::{log_request, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Create `refs/<refspec>` pointing at `sha`.
///
/// `refspec` is given without the `refs/` prefix, e.g. `prs-open/12`.
pub(crate) fn create_ref(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    refspec: impl Into<String>,
    sha: impl Into<String>,
) -> AsyncTask<Result<GitRef, PreviewError>> {
    let (owner, repo, refspec, sha) = (owner.into(), repo.into(), refspec.into(), sha.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/git/refs");
        log_request("POST", &route);
        inner
            .post(
                route,
                Some(&serde_json::json!({
                    "ref": format!("refs/{refspec}"),
                    "sha": sha
                })),
            )
            .await
            .map_err(PreviewError::from)
    })
}
