//! HTTP probe of the preview host.

use crate::error::PreviewResult;
use crate::github::models::Deployment;
use crate::preview::ports::DeploymentProbe;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Upper bound on a single request to the preview host.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Checks the preview host's worktree metadata for a deployment's revision.
///
/// The host exposes `/.git/worktrees/<environment>/HEAD`; the deployment is
/// live once that file contains the deployed commit.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
    target: String,
}

impl HttpProbe {
    pub fn new(target: impl Into<String>) -> PreviewResult<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(client, target))
    }

    #[must_use]
    pub fn with_client(client: Client, target: impl Into<String>) -> Self {
        Self {
            client,
            target: target.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL of the worktree `HEAD` file for `environment`.
    #[must_use]
    pub fn head_url(&self, environment: &str) -> String {
        format!("{}/.git/worktrees/{environment}/HEAD", self.target)
    }
}

#[async_trait]
impl DeploymentProbe for HttpProbe {
    async fn is_deployed(&self, deployment: &Deployment) -> PreviewResult<bool> {
        let url = self.head_url(&deployment.environment);

        // The host may be restarting mid-deploy; treat transport failures
        // like a missing worktree and let the caller poll again.
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Could not reach {url}: {e}");
                return Ok(false);
            }
        };

        if response.status() != StatusCode::OK {
            debug!("{url} answered {}", response.status());
            return Ok(false);
        }

        match response.text().await {
            Ok(body) => Ok(body.trim() == deployment.sha),
            Err(e) => {
                warn!("Could not read {url}: {e}");
                Ok(false)
            }
        }
    }
}
