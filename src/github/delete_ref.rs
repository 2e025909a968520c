//! Git reference deletion operation.

use crate::error::PreviewError;
use crate::github::util::{log_request, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Delete `refs/<refspec>` from the repository.
///
/// GitHub answers with `204 No Content`, so the raw response is checked for
/// an error status instead of being deserialized.
pub(crate) fn delete_ref(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    refspec: impl Into<String>,
) -> AsyncTask<Result<(), PreviewError>> {
    let (owner, repo, refspec) = (owner.into(), repo.into(), refspec.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/git/refs/{refspec}");
        log_request("DELETE", &route);
        let response = inner._delete(route, None::<&()>).await?;
        octocrab::map_github_error(response).await?;
        Ok(())
    })
}
