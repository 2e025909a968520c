//! Tests for webhook payload parsing.

use pr_preview::PreviewError;
use pr_preview::github::models::{AuthorAssociation, DeploymentState};
use pr_preview::preview::{DeploymentStatusEvent, PullRequestEvent, load_event, parse_event};
use std::io::Write;

const DEPLOYMENT_STATUS_EVENT: &str = r#"{
    "action": "created",
    "deployment_status": {
        "id": 1,
        "state": "pending",
        "description": "",
        "created_at": "2024-02-01T10:00:00Z"
    },
    "deployment": {
        "id": 42,
        "sha": "0123abcd",
        "ref": "0123abcd",
        "environment": "gh-17",
        "task": "deploy"
    },
    "repository": { "full_name": "web-platform-tests/wpt" }
}"#;

const PULL_REQUEST_EVENT: &str = r#"{
    "action": "labeled",
    "number": 17,
    "pull_request": {
        "number": 17,
        "state": "open",
        "closed_at": null,
        "author_association": "FIRST_TIME_CONTRIBUTOR",
        "labels": [{ "id": 1, "name": "pull-request-has-preview" }],
        "head": { "sha": "0123abcd", "ref": "feature" }
    }
}"#;

#[test]
fn test_parse_deployment_status_event() {
    let event: DeploymentStatusEvent = parse_event(DEPLOYMENT_STATUS_EVENT).unwrap();
    assert_eq!(event.deployment_status.state, DeploymentState::Pending);
    assert_eq!(event.deployment.id, 42);
    assert_eq!(event.deployment.environment, "gh-17");
    assert_eq!(event.deployment.sha, "0123abcd");
}

#[test]
fn test_parse_pull_request_event() {
    let event: PullRequestEvent = parse_event(PULL_REQUEST_EVENT).unwrap();
    let pr = &event.pull_request;
    assert_eq!(event.action.as_deref(), Some("labeled"));
    assert_eq!(pr.number, 17);
    assert!(pr.closed_at.is_none());
    let association = pr.author_association;
    assert_eq!(association, AuthorAssociation::FirstTimeContributor);
    assert_eq!(pr.head.as_ref().map(|h| h.sha.as_str()), Some("0123abcd"));
}

#[test]
fn test_unknown_author_association_is_tolerated() {
    let json = r#"{ "pull_request": { "number": 1, "author_association": "SOMETHING_NEW" } }"#;
    let event: PullRequestEvent = parse_event(json).unwrap();
    let association = event.pull_request.author_association;
    assert_eq!(association, AuthorAssociation::Other);
}

#[test]
fn test_wrong_event_kind_is_rejected() {
    let err = parse_event::<DeploymentStatusEvent>(PULL_REQUEST_EVENT).unwrap_err();
    assert!(matches!(err, PreviewError::InvalidEvent(_)));
}

#[test]
fn test_malformed_json_is_rejected() {
    let err = parse_event::<PullRequestEvent>("{ not json").unwrap_err();
    assert!(matches!(err, PreviewError::Json(_)));
}

#[tokio::test]
async fn test_load_event_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DEPLOYMENT_STATUS_EVENT.as_bytes()).unwrap();

    let event: DeploymentStatusEvent = load_event(file.path()).await.unwrap();
    assert_eq!(event.deployment.id, 42);
}

#[tokio::test]
async fn test_load_event_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_event::<PullRequestEvent>(&dir.path().join("event.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, PreviewError::Io(_)));
}
