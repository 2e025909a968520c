//! Pull request search operation.

use crate::error::PreviewError;
use crate::github::models::PullRequest;
use crate::github::util::{log_request, spawn_task};
use crate::runtime::AsyncTask;
use chrono::{DateTime, Utc};
use octocrab::{Octocrab, Page};
use serde::Serialize;
use std::sync::Arc;

/// Build the issue search query selecting pull requests of `owner/repo`
/// updated strictly after `since`.
#[must_use]
pub fn updated_since_query(owner: &str, repo: &str, since: DateTime<Utc>) -> String {
    format!(
        "repo:{owner}/{repo} is:pr updated:>{}",
        since.format("%Y-%m-%dT%H:%M:%SZ")
    )
}

#[derive(Serialize)]
struct SearchParams<'a> {
    q: &'a str,
    per_page: u8,
}

/// Run an issue search and collect every page of pull requests.
///
/// Fails with [`PreviewError::IncompleteResults`] if GitHub flags any page as
/// partial, since acting on a truncated set would skip pull requests silently.
pub(crate) fn search_pull_requests(
    inner: Arc<Octocrab>,
    query: impl Into<String>,
) -> AsyncTask<Result<Vec<PullRequest>, PreviewError>> {
    let query = query.into();
    spawn_task(async move {
        let route = "/search/issues";
        log_request("GET", route);
        let params = SearchParams {
            q: &query,
            per_page: 100,
        };

        let mut page: Page<PullRequest> = inner
            .get(route, Some(&params))
            .await
            .map_err(PreviewError::from)?;

        let mut results = Vec::new();
        loop {
            if page.incomplete_results == Some(true) {
                return Err(PreviewError::IncompleteResults);
            }
            results.append(&mut page.items);

            match inner.get_page::<PullRequest>(&page.next).await? {
                Some(next_page) => page = next_page,
                None => break,
            }
        }
        Ok(results)
    })
}
