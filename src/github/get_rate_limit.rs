//! GitHub rate limit lookup.

use crate::error::PreviewError;
use crate::github::models::RateLimit;
use crate::github::util::{log_request, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Fetch the current quota for every resource.
///
/// Querying `/rate_limit` does not itself count against the REST quota.
pub(crate) fn get_rate_limit(inner: Arc<Octocrab>) -> AsyncTask<Result<RateLimit, PreviewError>> {
    spawn_task(async move {
        let route = "/rate_limit";
        log_request("GET", route);
        inner
            .get(route, None::<&()>)
            .await
            .map_err(PreviewError::from)
    })
}
