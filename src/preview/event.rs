//! Webhook event payloads, as written to `GITHUB_EVENT_PATH` by the runner.

use crate::error::{PreviewError, PreviewResult};
use crate::github::models::{Deployment, DeploymentState, PullRequest};
use log::debug;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// The `deployment_status` object of a `deployment_status` event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventDeploymentStatus {
    pub state: DeploymentState,
}

/// Payload of a `deployment_status` event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeploymentStatusEvent {
    pub deployment: Deployment,
    pub deployment_status: EventDeploymentStatus,
}

/// Payload of a `pull_request` event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PullRequestEvent {
    #[serde(default)]
    pub action: Option<String>,
    pub pull_request: PullRequest,
}

/// Parse an event payload from its JSON text.
pub fn parse_event<T: DeserializeOwned>(json: &str) -> PreviewResult<T> {
    let raw: serde_json::Value = serde_json::from_str(json)?;
    debug!(
        "Event data: {}",
        serde_json::to_string_pretty(&raw).unwrap_or_default()
    );
    serde_json::from_value(raw)
        .map_err(|e| PreviewError::InvalidEvent(e.to_string()))
}

/// Read and parse the event payload at `path`.
pub async fn load_event<T: DeserializeOwned>(path: &Path) -> PreviewResult<T> {
    let json = tokio::fs::read_to_string(path).await?;
    parse_event(&json)
}
