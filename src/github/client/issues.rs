//! Issues and search API methods

use super::GitHubClient;
use crate::error::PreviewError;
use crate::github::models::{Label, PullRequest};
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// Search pull requests, following every result page
    #[must_use]
    pub fn search_pull_requests(
        &self,
        query: impl Into<String>,
    ) -> AsyncTask<Result<Vec<PullRequest>, PreviewError>> {
        crate::github::search_pull_requests::search_pull_requests(self.inner.clone(), query)
    }

    /// Add labels to an issue or pull request
    #[must_use]
    pub fn add_labels(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        issue_number: u64,
        labels: Vec<String>,
    ) -> AsyncTask<Result<Vec<Label>, PreviewError>> {
        crate::github::add_labels::add_labels(self.inner.clone(), owner, repo, issue_number, labels)
    }
}
