//! GitHub API operations module
//!
//! The REST calls behind pull request previews, made through octocrab.

pub mod client;
pub mod models;
pub mod project;
pub mod util;

pub use client::{GitHubClient, GitHubClientBuilder};
pub use project::{DEFAULT_RATE_LIMIT_THRESHOLD, GitHubProject};
pub use search_pull_requests::updated_since_query;
pub use util::spawn_task;

// Issues and search (internal)
pub(crate) mod add_labels;
pub(crate) mod search_pull_requests;

// Git database (internal)
pub(crate) mod create_ref;
pub(crate) mod delete_ref;
pub(crate) mod get_ref;
pub(crate) mod update_ref;

// Deployments (internal)
pub(crate) mod create_deployment;
pub(crate) mod create_deployment_status;
pub(crate) mod list_deployment_statuses;
pub(crate) mod list_deployments;

// Rate limit (internal)
pub(crate) mod get_rate_limit;
