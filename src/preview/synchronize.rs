//! Pull request mirroring driven by a search window or a webhook event.

use crate::error::{PreviewError, PreviewResult};
use crate::github::models::{DeploymentState, PullRequest};
use crate::preview::deployment::{is_pending, status_update};
use crate::preview::event::PullRequestEvent;
use crate::preview::mirror::{self, MirrorPlan, PlanError, RefAction, RefSnapshot};
use crate::preview::ports::{PreviewProject, RefStore};
use chrono::{DateTime, Utc};
use log::info;

/// Settings shared by every mirroring run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorSettings {
    /// Label marking mirrored pull requests.
    pub label: String,
    /// Base URL of the preview host.
    pub target: String,
}

/// Summary of a synchronization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub processed: usize,
    pub mirrored: usize,
}

/// Inspect every pull request updated after `since`, adding the preview
/// label and creating, updating or deleting mirror refs according to each
/// pull request's state.
pub async fn synchronize(
    project: &dyn PreviewProject,
    refs: &dyn RefStore,
    settings: &MirrorSettings,
    since: DateTime<Utc>,
) -> PreviewResult<SyncReport> {
    let pull_requests = project.pull_requests_updated_since(since).await?;
    info!("Found {} pull requests", pull_requests.len());

    let mut report = SyncReport::default();
    for pull_request in &pull_requests {
        let plan = reconcile(project, refs, settings, pull_request, None).await?;
        report.processed += 1;
        if plan.mirrored {
            report.mirrored += 1;
        }
    }
    Ok(report)
}

/// Mirror the single pull request carried by a `pull_request` event.
pub async fn sync_event(
    project: &dyn PreviewProject,
    refs: &dyn RefStore,
    settings: &MirrorSettings,
    event: &PullRequestEvent,
) -> PreviewResult<MirrorPlan> {
    let pull_request = &event.pull_request;
    if let Some(action) = &event.action {
        info!("Pull request #{} was {action}", pull_request.number);
    }
    let head = pull_request.head.as_ref().map(|head| head.sha.clone());
    reconcile(project, refs, settings, pull_request, head).await
}

/// Bring one pull request's label, refs and deployment in line with its state.
///
/// `latest` overrides the head revision; when `None` it is read from
/// `pull/<N>/head`. Returns the plan that was applied.
pub async fn reconcile(
    project: &dyn PreviewProject,
    refs: &dyn RefStore,
    settings: &MirrorSettings,
    pull_request: &PullRequest,
    latest: Option<String>,
) -> PreviewResult<MirrorPlan> {
    let number = pull_request.number;
    info!("Processing pull request #{number}");

    let latest = match latest {
        Some(revision) => Some(revision),
        None => refs.revision(&mirror::head_refspec(number)).await?,
    };
    let snapshot = RefSnapshot {
        latest,
        labeled: refs.revision(&mirror::labeled_refspec(number)).await?,
        open: refs.revision(&mirror::open_refspec(number)).await?,
    };

    let plan = mirror::plan(pull_request, &settings.label, &snapshot).map_err(|e| match e {
        PlanError::MissingHead => PreviewError::MissingHead(number),
    })?;

    if plan.mirrored {
        info!("Pull request should be mirrored");
    } else {
        info!("Pull request should not be mirrored");
    }

    if plan.add_label {
        let label = &settings.label;
        info!("Adding label \"{label}\" to pull request #{number}");
        project.add_label(number, &settings.label).await?;
    }

    for action in &plan.ref_actions {
        match action {
            RefAction::Create { refspec, revision } => {
                info!("Creating ref \"{refspec}\" ({revision})");
                project.create_ref(refspec, revision).await?;
            }
            RefAction::Update { refspec, revision } => {
                info!("Updating ref \"{refspec}\" ({revision})");
                project.update_ref(refspec, revision).await?;
            }
            RefAction::Delete { refspec } => {
                info!("Deleting ref \"{refspec}\"");
                refs.delete_ref(refspec).await?;
            }
        }
    }

    if let Some(revision) = &plan.deploy {
        ensure_pending_deployment(project, settings, number, revision).await?;
    }

    Ok(plan)
}

/// Make sure `revision` has a deployment whose newest status is `pending`.
async fn ensure_pending_deployment(
    project: &dyn PreviewProject,
    settings: &MirrorSettings,
    number: u64,
    revision: &str,
) -> PreviewResult<()> {
    let deployment = match project.find_deployment(revision).await? {
        Some(deployment) => deployment,
        None => {
            info!("Creating deployment for \"{revision}\"");
            project.create_deployment(number, revision).await?
        }
    };

    let statuses = project.deployment_statuses(&deployment).await?;
    if !is_pending(&statuses) {
        info!("Marking deployment {} as pending", deployment.id);
        project
            .update_deployment(
                &deployment,
                status_update(&settings.target, &deployment, DeploymentState::Pending, ""),
            )
            .await?;
    }
    Ok(())
}
