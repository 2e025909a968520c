//! Tests for configuration resolution.

use pr_preview::config::{ConfigOverrides, DEFAULT_HOST};
use pr_preview::{ConfigFile, PreviewConfig, PreviewError, RepoSlug};
use std::time::Duration;

fn overrides() -> ConfigOverrides {
    ConfigOverrides {
        github_project: Some("web-platform-tests/wpt".to_string()),
        target: Some("https://preview.example.org".to_string()),
        token: Some("secret".to_string()),
        ..ConfigOverrides::default()
    }
}

fn config_error(flags: ConfigOverrides, file: ConfigFile) -> String {
    match PreviewConfig::resolve(flags, file) {
        Err(PreviewError::Config(message)) => message,
        Err(other) => panic!("unexpected error: {other}"),
        Ok(config) => panic!("expected an error, got {config:?}"),
    }
}

#[test]
fn test_repo_slug_parsing() {
    let slug: RepoSlug = "web-platform-tests/wpt".parse().unwrap();
    assert_eq!(slug.owner, "web-platform-tests");
    assert_eq!(slug.repo, "wpt");
    assert_eq!(slug.to_string(), "web-platform-tests/wpt");

    for bad in ["wpt", "/wpt", "owner/", "a/b/c", ""] {
        assert!(bad.parse::<RepoSlug>().is_err(), "{bad:?}");
    }
}

#[test]
fn test_defaults_apply() {
    let config = PreviewConfig::resolve(overrides(), ConfigFile::default()).unwrap();

    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.label, "pull-request-has-preview");
    assert_eq!(config.rate_limit_threshold, 0.2);
    assert_eq!(config.polling_period, Duration::from_secs(5));
    assert_eq!(config.project.repo, "wpt");
}

#[test]
fn test_overrides_win_over_file() {
    let file = ConfigFile::from_toml_str(
        r#"
        host = "https://ghe.example.org/api/v3"
        github_project = "other/project"
        target = "https://file.example.org"
        label = "preview"
        rate_limit_threshold = 0.5
        polling_period_secs = 30
        "#,
    )
    .unwrap();

    let mut flags = overrides();
    flags.polling_period_secs = Some(2);
    let config = PreviewConfig::resolve(flags, file).unwrap();

    assert_eq!(config.host, "https://ghe.example.org/api/v3");
    assert_eq!(config.project.owner, "web-platform-tests");
    assert_eq!(config.target, "https://preview.example.org");
    assert_eq!(config.label, "preview");
    assert_eq!(config.rate_limit_threshold, 0.5);
    assert_eq!(config.polling_period, Duration::from_secs(2));
}

#[test]
fn test_file_fills_missing_flags() {
    let file = ConfigFile {
        github_project: Some("other/project".to_string()),
        target: Some("https://file.example.org".to_string()),
        ..ConfigFile::default()
    };
    let flags = ConfigOverrides {
        token: Some("secret".to_string()),
        ..ConfigOverrides::default()
    };

    let config = PreviewConfig::resolve(flags, file).unwrap();

    assert_eq!(config.project.to_string(), "other/project");
    assert_eq!(config.target, "https://file.example.org");
}

#[test]
fn test_missing_token_is_rejected() {
    let mut flags = overrides();
    flags.token = None;
    let message = config_error(flags, ConfigFile::default());
    assert!(message.contains("GITHUB_TOKEN"));

    let mut flags = overrides();
    flags.token = Some("  ".to_string());
    let message = config_error(flags, ConfigFile::default());
    assert!(message.contains("GITHUB_TOKEN"));
}

#[test]
fn test_missing_project_and_target_are_rejected() {
    let mut flags = overrides();
    flags.github_project = None;
    let message = config_error(flags, ConfigFile::default());
    assert!(message.contains("project"));

    let mut flags = overrides();
    flags.target = None;
    let message = config_error(flags, ConfigFile::default());
    assert!(message.contains("--target"));
}

#[test]
fn test_threshold_must_be_a_fraction() {
    let file = ConfigFile {
        rate_limit_threshold: Some(1.5),
        ..ConfigFile::default()
    };
    let message = config_error(overrides(), file);
    assert!(message.contains("rate_limit_threshold"));
}

#[test]
fn test_zero_polling_period_is_rejected() {
    let mut flags = overrides();
    flags.polling_period_secs = Some(0);
    let message = config_error(flags, ConfigFile::default());
    assert!(message.contains("polling period"));
}

#[test]
fn test_unknown_file_keys_are_rejected() {
    let text = "tagret = \"https://typo.example.org\"";
    let err = ConfigFile::from_toml_str(text).unwrap_err();
    assert!(matches!(err, PreviewError::Config(_)));
}

#[tokio::test]
async fn test_config_file_is_loaded_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preview.toml");
    std::fs::write(&path, "label = \"has-preview\"\n").unwrap();

    let file = ConfigFile::load(&path).await.unwrap();
    assert_eq!(file.label.as_deref(), Some("has-preview"));

    let missing = ConfigFile::load(&dir.path().join("absent.toml")).await;
    assert!(matches!(missing, Err(PreviewError::Config(_))));
}
