//! Repository-scoped GitHub adapter for the preview drivers.
//!
//! The preview tooling shares its request quota with more important
//! services. Every call is therefore preceded by a guard that checks the
//! relevant rate limit resource and refuses to continue once the remaining
//! share of the quota drops below the configured threshold. Checking the
//! quota is itself free.

use crate::error::{PreviewError, PreviewResult};
use crate::github::client::GitHubClient;
use crate::github::models::{
    Deployment, DeploymentStatus, NewDeployment, NewDeploymentStatus, PullRequest, RateResource,
};
use crate::github::search_pull_requests::updated_since_query;
use crate::preview::mirror::environment_name;
use crate::preview::ports::{PreviewProject, RefStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;

/// Remaining/limit ratio below which no further API calls are made.
pub const DEFAULT_RATE_LIMIT_THRESHOLD: f64 = 0.2;

/// One GitHub repository, seen through the preview tooling.
#[derive(Clone, Debug)]
pub struct GitHubProject {
    client: GitHubClient,
    owner: String,
    repo: String,
    threshold: f64,
}

impl GitHubProject {
    #[must_use]
    pub fn new(client: GitHubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
            threshold: DEFAULT_RATE_LIMIT_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Refuse to continue if `resource` is too close to exhaustion.
    pub async fn guard(&self, resource: RateResource) -> PreviewResult<()> {
        let limits = self.client.rate_limit().await??;
        let rate = resource.select(&limits);

        info!(
            "Limit for \"{}\" resource: {}/{}",
            resource.as_str(),
            rate.remaining,
            rate.limit
        );

        if !rate.allows(self.threshold) {
            return Err(PreviewError::RateLimitGuard {
                resource: resource.as_str(),
                remaining: rate.remaining,
                limit: rate.limit,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PreviewProject for GitHubProject {
    async fn pull_requests_updated_since(
        &self,
        since: DateTime<Utc>,
    ) -> PreviewResult<Vec<PullRequest>> {
        self.guard(RateResource::Search).await?;
        let query = updated_since_query(&self.owner, &self.repo, since);
        info!("Searching for pull requests: {query}");
        self.client.search_pull_requests(query).await?
    }

    async fn add_label(&self, number: u64, label: &str) -> PreviewResult<()> {
        self.guard(RateResource::Core).await?;
        self.client
            .add_labels(&self.owner, &self.repo, number, vec![label.to_string()])
            .await??;
        Ok(())
    }

    async fn create_ref(&self, refspec: &str, revision: &str) -> PreviewResult<()> {
        self.guard(RateResource::Core).await?;
        self.client
            .create_ref(&self.owner, &self.repo, refspec, revision)
            .await??;
        Ok(())
    }

    async fn update_ref(&self, refspec: &str, revision: &str) -> PreviewResult<()> {
        self.guard(RateResource::Core).await?;
        self.client
            .update_ref(&self.owner, &self.repo, refspec, revision)
            .await??;
        Ok(())
    }

    async fn find_deployment(&self, revision: &str) -> PreviewResult<Option<Deployment>> {
        self.guard(RateResource::Core).await?;
        let mut deployments = self
            .client
            .list_deployments(&self.owner, &self.repo, revision)
            .await??;
        Ok(deployments.pop())
    }

    async fn create_deployment(&self, number: u64, revision: &str) -> PreviewResult<Deployment> {
        self.guard(RateResource::Core).await?;
        // Previews are built regardless of commit status checks.
        let request = NewDeployment {
            git_ref: revision.to_string(),
            environment: environment_name(number),
            auto_merge: false,
            required_contexts: Vec::new(),
        };
        self.client
            .create_deployment(&self.owner, &self.repo, request)
            .await?
    }

    async fn deployment_statuses(
        &self,
        deployment: &Deployment,
    ) -> PreviewResult<Vec<DeploymentStatus>> {
        self.guard(RateResource::Core).await?;
        self.client
            .list_deployment_statuses(&self.owner, &self.repo, deployment.id)
            .await?
    }

    async fn update_deployment(
        &self,
        deployment: &Deployment,
        status: NewDeploymentStatus,
    ) -> PreviewResult<()> {
        self.guard(RateResource::Core).await?;
        self.client
            .create_deployment_status(&self.owner, &self.repo, deployment.id, status)
            .await??;
        Ok(())
    }
}

/// Refs read and deleted through the git database API, for runs without a
/// local git remote.
#[async_trait]
impl RefStore for GitHubProject {
    async fn revision(&self, refspec: &str) -> PreviewResult<Option<String>> {
        self.guard(RateResource::Core).await?;
        let reference = self.client.get_ref(&self.owner, &self.repo, refspec).await??;
        Ok(reference.map(|r| r.object.sha))
    }

    async fn delete_ref(&self, refspec: &str) -> PreviewResult<()> {
        self.guard(RateResource::Core).await?;
        self.client
            .delete_ref(&self.owner, &self.repo, refspec)
            .await?
    }
}
