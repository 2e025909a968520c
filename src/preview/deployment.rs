//! Deployment status bookkeeping.

use crate::github::models::{Deployment, DeploymentState, DeploymentStatus, NewDeploymentStatus};

/// Newest status by creation time.
#[must_use]
pub fn latest_status(statuses: &[DeploymentStatus]) -> Option<&DeploymentStatus> {
    statuses.iter().max_by_key(|status| status.created_at)
}

/// A deployment is pending iff its newest status is `pending`. A deployment
/// without any status is not.
#[must_use]
pub fn is_pending(statuses: &[DeploymentStatus]) -> bool {
    latest_status(statuses)
        .is_some_and(|status| status.state == DeploymentState::Pending)
}

/// URL where the preview of `deployment` is browsable.
///
/// Only `pending` and `success` statuses link to the preview.
#[must_use]
pub fn environment_url(
    target: &str,
    deployment: &Deployment,
    state: DeploymentState,
) -> Option<String> {
    match state {
        DeploymentState::Pending | DeploymentState::Success => Some(format!(
            "{}/submissions/{}",
            target.trim_end_matches('/'),
            deployment.environment
        )),
        _ => None,
    }
}

/// Build the status request for `deployment` on preview host `target`.
#[must_use]
pub fn status_update(
    target: &str,
    deployment: &Deployment,
    state: DeploymentState,
    description: impl Into<String>,
) -> NewDeploymentStatus {
    NewDeploymentStatus {
        state,
        description: description.into(),
        environment_url: environment_url(target, deployment, state),
    }
}
