//! Tests for `GitRemote` against a bare repository on disk.

use pr_preview::git::parse_ls_remote;
use pr_preview::{GitRemote, PreviewError, RefStore};
use std::path::Path;
use std::process::Command;

fn git(cwd: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("git should run");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// A bare repository with one commit pushed to `refs/prs-open/7`.
/// Returns the remote directory and the pushed commit.
fn seeded_remote(root: &Path) -> (std::path::PathBuf, String) {
    let remote = root.join("remote.git");
    let work = root.join("work");
    std::fs::create_dir_all(&work).unwrap();

    let bare = remote.to_str().unwrap();
    git(root, &["init", "--quiet", "--bare", bare]);
    git(&work, &["init", "--quiet"]);
    git(
        &work,
        &[
            "-c",
            "user.name=Preview Bot",
            "-c",
            "user.email=preview@example.org",
            "commit",
            "--quiet",
            "--allow-empty",
            "-m",
            "initial",
        ],
    );
    let sha = git(&work, &["rev-parse", "HEAD"]);
    git(&work, &["push", "--quiet", bare, "HEAD:refs/prs-open/7"]);
    (remote, sha)
}

#[test]
fn test_parse_ls_remote_takes_first_revision() {
    let output = "1111111111111111111111111111111111111111\trefs/prs-open/7\n\
                  2222222222222222222222222222222222222222\trefs/prs-open/70\n";
    assert_eq!(
        parse_ls_remote(output).as_deref(),
        Some("1111111111111111111111111111111111111111")
    );
}

#[test]
fn test_parse_ls_remote_empty_output() {
    assert_eq!(parse_ls_remote(""), None);
    assert_eq!(parse_ls_remote("\n"), None);
}

#[tokio::test]
async fn test_revision_of_existing_and_missing_refs() {
    if !git_available() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let (remote, sha) = seeded_remote(dir.path());
    let remote = GitRemote::new(remote.to_str().unwrap());

    assert_eq!(remote.revision("prs-open/7").await.unwrap(), Some(sha));
    assert_eq!(remote.revision("prs-open/8").await.unwrap(), None);
}

#[tokio::test]
async fn test_delete_ref_removes_it_from_the_remote() {
    if !git_available() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let (remote, _) = seeded_remote(dir.path());
    let remote = GitRemote::new(remote.to_str().unwrap());

    remote.delete_ref("prs-open/7").await.unwrap();

    assert_eq!(remote.revision("prs-open/7").await.unwrap(), None);
}

#[tokio::test]
async fn test_unknown_remote_reports_git_failure() {
    if !git_available() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.git");
    let remote = GitRemote::new(missing.to_str().unwrap());

    let err = remote.revision("prs-open/7").await.unwrap_err();

    match err {
        PreviewError::Git { command, .. } => assert!(command.starts_with("ls-remote")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_missing_git_executable_is_an_io_error() {
    let remote = GitRemote::new("origin").with_git("/nonexistent/bin/git");

    let err = remote.revision("prs-open/7").await.unwrap_err();

    assert!(matches!(err, PreviewError::Io(_)));
}
