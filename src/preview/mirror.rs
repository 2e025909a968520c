//! Mirroring decisions.
//!
//! Everything here is pure: the drivers gather the current state, ask
//! [`plan`] what to do, and then carry the plan out.

use crate::github::models::{AuthorAssociation, PullRequest};

/// Label marking a pull request as actively mirrored by the preview server.
pub const DEFAULT_LABEL: &str = "pull-request-has-preview";

/// Deployment environments owned by this tool start with this prefix.
pub const ENVIRONMENT_PREFIX: &str = "gh-";

#[must_use]
pub fn is_open(pull_request: &PullRequest) -> bool {
    pull_request.closed_at.is_none()
}

#[must_use]
pub fn has_label(pull_request: &PullRequest, label: &str) -> bool {
    pull_request.labels.iter().any(|l| l.name == label)
}

/// Open pull requests are mirrored when their author is a collaborator or
/// someone has applied the preview label.
#[must_use]
pub fn should_be_mirrored(pull_request: &PullRequest, label: &str) -> bool {
    is_open(pull_request)
        && (pull_request.author_association == AuthorAssociation::Collaborator
            || has_label(pull_request, label))
}

/// Ref tracking the head of every labeled pull request.
#[must_use]
pub fn labeled_refspec(number: u64) -> String {
    format!("prs-labeled-for-preview/{number}")
}

/// Ref tracking the head of every open, mirrored pull request.
#[must_use]
pub fn open_refspec(number: u64) -> String {
    format!("prs-open/{number}")
}

/// Ref GitHub maintains for the head of a pull request.
#[must_use]
pub fn head_refspec(number: u64) -> String {
    format!("pull/{number}/head")
}

/// Deployment environment of a pull request.
///
/// One environment per pull request means GitHub marks earlier deployments
/// inactive whenever a new one is created.
#[must_use]
pub fn environment_name(number: u64) -> String {
    format!("{ENVIRONMENT_PREFIX}{number}")
}

/// Current revisions of the refs involved in mirroring one pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefSnapshot {
    /// Head of the pull request.
    pub latest: Option<String>,
    /// `prs-labeled-for-preview/<N>`
    pub labeled: Option<String>,
    /// `prs-open/<N>`
    pub open: Option<String>,
}

/// A single ref change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefAction {
    Create { refspec: String, revision: String },
    Update { refspec: String, revision: String },
    Delete { refspec: String },
}

/// Everything that must change for one pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorPlan {
    pub mirrored: bool,
    pub add_label: bool,
    pub ref_actions: Vec<RefAction>,
    /// Revision that needs a pending deployment, when mirrored.
    pub deploy: Option<String>,
}

/// Why a plan could not be made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The pull request must be mirrored but its head revision is unknown.
    MissingHead,
}

/// Bring `refspec` to `latest`: create it if absent, move it if it points
/// elsewhere, leave it alone if it already matches.
fn sync_ref(refspec: String, current: Option<&str>, latest: &str) -> Option<RefAction> {
    match current {
        None => Some(RefAction::Create {
            refspec,
            revision: latest.to_string(),
        }),
        Some(current) if current != latest => Some(RefAction::Update {
            refspec,
            revision: latest.to_string(),
        }),
        Some(_) => None,
    }
}

/// Decide how to bring the refs, label and deployment of `pull_request` in
/// line with its state.
pub fn plan(
    pull_request: &PullRequest,
    label: &str,
    refs: &RefSnapshot,
) -> Result<MirrorPlan, PlanError> {
    let number = pull_request.number;
    let labeled = has_label(pull_request, label);

    if should_be_mirrored(pull_request, label) {
        let latest = refs.latest.as_deref().ok_or(PlanError::MissingHead)?;

        let ref_actions = [
            sync_ref(labeled_refspec(number), refs.labeled.as_deref(), latest),
            sync_ref(open_refspec(number), refs.open.as_deref(), latest),
        ]
        .into_iter()
        .flatten()
        .collect();

        return Ok(MirrorPlan {
            mirrored: true,
            add_label: !labeled,
            ref_actions,
            deploy: Some(latest.to_string()),
        });
    }

    let mut ref_actions = Vec::new();
    if !labeled && refs.labeled.is_some() {
        ref_actions.push(RefAction::Delete {
            refspec: labeled_refspec(number),
        });
    }
    if refs.open.is_some() && !is_open(pull_request) {
        ref_actions.push(RefAction::Delete {
            refspec: open_refspec(number),
        });
    }

    Ok(MirrorPlan {
        mirrored: false,
        add_label: false,
        ref_actions,
        deploy: None,
    })
}
