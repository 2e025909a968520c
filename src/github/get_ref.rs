//! Git reference lookup operation.

use crate::error::PreviewError;
use crate::github::models::GitRef;
use crate::github::util::{log_request, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Look up `refs/<refspec>`.
///
/// A 404 means the reference does not exist and resolves to `Ok(None)`;
/// every other failure is returned as is.
pub(crate) fn get_ref(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    refspec: impl Into<String>,
) -> AsyncTask<Result<Option<GitRef>, PreviewError>> {
    let (owner, repo, refspec) = (owner.into(), repo.into(), refspec.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/git/ref/{refspec}");
        log_request("GET", &route);
        match inner.get::<GitRef, _, _>(route, None::<&()>).await {
            Ok(reference) => Ok(Some(reference)),
            Err(e) => {
                let err = PreviewError::from(e);
                if err.is_not_found() {
                    Ok(None)
                } else {
                    Err(err)
                }
            }
        }
    })
}
