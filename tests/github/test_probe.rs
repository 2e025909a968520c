//! Tests for the HTTP probe of the preview host.

use pr_preview::HttpProbe;
use pr_preview::github::models::Deployment;
use pr_preview::preview::DeploymentProbe;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn probe(target: impl Into<String>) -> HttpProbe {
    let _ = rustls::crypto::ring::default_provider().install_default();
    HttpProbe::new(target).unwrap()
}

fn deployment(sha: &str) -> Deployment {
    Deployment {
        id: 1,
        sha: sha.to_string(),
        environment: "gh-5".to_string(),
        git_ref: None,
    }
}

async fn serve_head(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path("/.git/worktrees/gh-5/HEAD"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

#[test]
fn test_head_url() {
    let probe = probe("https://preview.example.org/");
    assert_eq!(
        probe.head_url("gh-5"),
        "https://preview.example.org/.git/worktrees/gh-5/HEAD"
    );
}

#[tokio::test]
async fn test_matching_head_is_deployed() {
    let server = MockServer::start().await;
    serve_head(&server, 200, "abc123\n").await;

    let probe = probe(server.uri());
    assert!(probe.is_deployed(&deployment("abc123")).await.unwrap());
}

#[tokio::test]
async fn test_other_head_is_not_deployed() {
    let server = MockServer::start().await;
    serve_head(&server, 200, "old999\n").await;

    let probe = probe(server.uri());
    assert!(!probe.is_deployed(&deployment("abc123")).await.unwrap());
}

#[tokio::test]
async fn test_missing_worktree_is_not_deployed() {
    let server = MockServer::start().await;
    serve_head(&server, 404, "").await;

    let probe = probe(server.uri());
    assert!(!probe.is_deployed(&deployment("abc123")).await.unwrap());
}

#[tokio::test]
async fn test_unreachable_host_is_not_deployed() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let probe = probe(uri);
    assert!(!probe.is_deployed(&deployment("abc123")).await.unwrap());
}

#[tokio::test]
async fn test_slow_host_is_not_deployed() {
    let _ = rustls::crypto::ring::default_provider().install_default();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/.git/worktrees/gh-5/HEAD"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("abc123\n")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let probe = HttpProbe::with_client(client, server.uri());

    assert!(!probe.is_deployed(&deployment("abc123")).await.unwrap());
}
