//! Deployment detection: wait for the preview host to serve a pending
//! deployment, then report the result on the deployment.

use crate::error::{PreviewError, PreviewResult};
use crate::github::models::{Deployment, DeploymentState};
use crate::preview::deployment::status_update;
use crate::preview::event::DeploymentStatusEvent;
use crate::preview::mirror::ENVIRONMENT_PREFIX;
use crate::preview::outcome::Outcome;
use crate::preview::ports::{DeploymentProbe, PreviewProject};
use log::{info, warn};
use std::time::Duration;
use tokio::time::{Instant, sleep, timeout};

/// Time between availability checks when none is configured.
pub const DEFAULT_POLLING_PERIOD: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectOptions {
    /// Base URL of the preview host.
    pub target: String,
    pub timeout: Duration,
    pub polling_period: Duration,
}

/// React to a `deployment_status` event.
///
/// Events for deployments that are not pending, or that belong to an
/// environment this tool does not manage, are [`Outcome::Neutral`].
pub async fn detect(
    project: &dyn PreviewProject,
    probe: &dyn DeploymentProbe,
    event: &DeploymentStatusEvent,
    options: &DetectOptions,
) -> PreviewResult<Outcome> {
    if event.deployment_status.state != DeploymentState::Pending {
        info!("Deployment is not pending. Exiting.");
        return Ok(Outcome::Neutral);
    }

    let deployment = &event.deployment;
    if !deployment.environment.starts_with(ENVIRONMENT_PREFIX) {
        info!("Deployment environment is unrecognized. Exiting.");
        return Ok(Outcome::Neutral);
    }

    info!(
        "Waiting up to {} seconds for deployment {} to be available on {}",
        options.timeout.as_secs(),
        deployment.environment,
        options.target
    );

    wait_for_deployment(project, probe, deployment, options).await?;
    Ok(Outcome::Success)
}

/// Poll until `deployment` is live and mark it `success`.
///
/// Once more than `timeout` has elapsed without the deployment going live,
/// it is marked `error` and [`PreviewError::DeploymentTimeout`] is returned.
/// A single check may run for the remaining budget or one polling period,
/// whichever is longer; a check cut short counts as "not live".
pub async fn wait_for_deployment(
    project: &dyn PreviewProject,
    probe: &dyn DeploymentProbe,
    deployment: &Deployment,
    options: &DetectOptions,
) -> PreviewResult<()> {
    let start = Instant::now();

    loop {
        let budget = options
            .timeout
            .saturating_sub(start.elapsed())
            .max(options.polling_period);
        let deployed = match timeout(budget, probe.is_deployed(deployment)).await {
            Ok(result) => result?,
            Err(_) => {
                warn!("Availability check gave no answer within {budget:?}");
                false
            }
        };
        if deployed {
            break;
        }

        if start.elapsed() > options.timeout {
            let secs = options.timeout.as_secs();
            let message = format!("Deployment did not become available after {secs} seconds");
            project
                .update_deployment(
                    deployment,
                    status_update(&options.target, deployment, DeploymentState::Error, message),
                )
                .await?;
            return Err(PreviewError::DeploymentTimeout(secs));
        }

        sleep(options.polling_period).await;
    }

    info!("Deployment {} is available", deployment.environment);
    project
        .update_deployment(
            deployment,
            status_update(&options.target, deployment, DeploymentState::Success, ""),
        )
        .await
}
