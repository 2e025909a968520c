//! Git database reference methods
//!
//! Every `refspec` is given without its `refs/` prefix.

use super::GitHubClient;
use crate::error::PreviewError;
use crate::github::models::GitRef;
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// Look up a reference; `None` if it does not exist
    #[must_use]
    pub fn get_ref(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        refspec: impl Into<String>,
    ) -> AsyncTask<Result<Option<GitRef>, PreviewError>> {
        crate::github::get_ref::get_ref(self.inner.clone(), owner, repo, refspec)
    }

    /// Create a reference
    #[must_use]
    pub fn create_ref(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        refspec: impl Into<String>,
        sha: impl Into<String>,
    ) -> AsyncTask<Result<GitRef, PreviewError>> {
        crate::github::create_ref::create_ref(self.inner.clone(), owner, repo, refspec, sha)
    }

    /// Force a reference to a new commit
    #[must_use]
    pub fn update_ref(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        refspec: impl Into<String>,
        sha: impl Into<String>,
    ) -> AsyncTask<Result<GitRef, PreviewError>> {
        crate::github::update_ref::update_ref(self.inner.clone(), owner, repo, refspec, sha)
    }

    /// Delete a reference
    #[must_use]
    pub fn delete_ref(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        refspec: impl Into<String>,
    ) -> AsyncTask<Result<(), PreviewError>> {
        crate::github::delete_ref::delete_ref(self.inner.clone(), owner, repo, refspec)
    }
}
