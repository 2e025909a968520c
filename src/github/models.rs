//! Wire types for the REST endpoints the preview tooling touches.
//!
//! Only the fields the tool reads are modelled; everything else in the
//! response bodies is ignored by serde.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Issue/pull request label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

/// Relationship of a pull request author to the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorAssociation {
    Collaborator,
    Contributor,
    FirstTimer,
    FirstTimeContributor,
    Mannequin,
    Member,
    #[serde(rename = "NONE")]
    NoAssociation,
    Owner,
    #[serde(other)]
    Other,
}

/// Head commit of a pull request, present in webhook payloads only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestHead {
    pub sha: String,
}

/// A pull request as returned by issue search or carried by a
/// `pull_request` webhook event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    pub author_association: AuthorAssociation,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub head: Option<PullRequestHead>,
}

/// Lifecycle state of a deployment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentState {
    Error,
    Failure,
    Inactive,
    InProgress,
    Queued,
    Pending,
    Success,
}

impl DeploymentState {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Failure => "failure",
            Self::Inactive => "inactive",
            Self::InProgress => "in_progress",
            Self::Queued => "queued",
            Self::Pending => "pending",
            Self::Success => "success",
        }
    }
}

/// A GitHub deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: u64,
    pub sha: String,
    pub environment: String,
    #[serde(rename = "ref", default)]
    pub git_ref: Option<String>,
}

/// One entry of a deployment's status history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentStatus {
    pub state: DeploymentState,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub environment_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /repos/{owner}/{repo}/deployments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDeployment {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub environment: String,
    pub auto_merge: bool,
    pub required_contexts: Vec<String>,
}

/// Body of `POST /repos/{owner}/{repo}/deployments/{id}/statuses`.
///
/// `environment_url` is serialized as `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDeploymentStatus {
    pub state: DeploymentState,
    pub description: String,
    pub environment_url: Option<String>,
}

/// Object a git reference points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitObject {
    pub sha: String,
}

/// A git reference as reported by the git database API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitRef {
    #[serde(rename = "ref")]
    pub name: String,
    pub object: GitObject,
}

/// Quota for one rate limit resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    pub limit: u64,
    pub remaining: u64,
}

impl Rate {
    /// Whether the remaining share of the quota is at or above `threshold`.
    ///
    /// A zero limit means the resource is unmetered.
    #[must_use]
    pub fn allows(&self, threshold: f64) -> bool {
        if self.limit == 0 {
            return true;
        }
        (self.remaining as f64) / (self.limit as f64) >= threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateResources {
    pub core: Rate,
    pub search: Rate,
}

/// Body of `GET /rate_limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimit {
    pub resources: RateResources,
}

/// Rate limit resource a request is billed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateResource {
    Core,
    Search,
}

impl RateResource {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Search => "search",
        }
    }

    /// Pick this resource's quota out of a rate limit snapshot.
    #[must_use]
    pub fn select(&self, limits: &RateLimit) -> Rate {
        match self {
            Self::Core => limits.resources.core,
            Self::Search => limits.resources.search,
        }
    }
}
