//! A named (or URL/path addressed) git remote.

use crate::error::{PreviewError, PreviewResult};
use crate::preview::ports::RefStore;
use crate::runtime::AsyncTask;
use async_trait::async_trait;
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A git remote, inspected with `ls-remote` and modified with `push`.
#[derive(Debug, Clone)]
pub struct GitRemote {
    name: String,
    git: PathBuf,
}

impl GitRemote {
    /// `name` is anything `git ls-remote` accepts: a configured remote, a
    /// URL or a path.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            git: PathBuf::from("git"),
        }
    }

    /// Use a specific git executable.
    #[must_use]
    pub fn with_git(mut self, git: impl Into<PathBuf>) -> Self {
        self.git = git.into();
        self
    }

    /// Commit `refs/<refspec>` points at on the remote, if it exists.
    pub async fn get_revision(&self, refspec: &str) -> PreviewResult<Option<String>> {
        let git = self.git.clone();
        let remote = self.name.clone();
        let full_ref = format!("refs/{refspec}");
        let output = AsyncTask::spawn(move || {
            let args = ["ls-remote", remote.as_str(), full_ref.as_str()];
            run_git(&git, &args, None)
        })
        .await??;
        Ok(parse_ls_remote(&output))
    }

    /// Delete `refs/<refspec>` from the remote.
    ///
    /// `git push` only works inside a repository, even when no local objects
    /// are involved, so the push runs from a throwaway empty repository.
    pub async fn remove_ref(&self, refspec: &str) -> PreviewResult<()> {
        let git = self.git.clone();
        let remote = self.name.clone();
        let full_ref = format!("refs/{refspec}");

        AsyncTask::spawn(move || -> PreviewResult<()> {
            let scratch = tempfile::tempdir()?;
            let cwd = Some(scratch.path());
            run_git(&git, &["init", "--quiet"], cwd)?;
            let push = ["push", remote.as_str(), "--delete", full_ref.as_str()];
            run_git(&git, &push, cwd)?;
            Ok(())
        })
        .await?
    }
}

#[async_trait]
impl RefStore for GitRemote {
    async fn revision(&self, refspec: &str) -> PreviewResult<Option<String>> {
        self.get_revision(refspec).await
    }

    async fn delete_ref(&self, refspec: &str) -> PreviewResult<()> {
        self.remove_ref(refspec).await
    }
}

/// Revision from `git ls-remote` output: the first field of the first line,
/// or `None` when nothing matched.
#[must_use]
pub fn parse_ls_remote(output: &str) -> Option<String> {
    output
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().next())
        .map(str::to_string)
}

/// Run git to completion and return its standard output.
fn run_git(git: &Path, args: &[&str], cwd: Option<&Path>) -> PreviewResult<String> {
    debug!("Running git {}", args.join(" "));

    let mut command = Command::new(git);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let output = command.output()?;
    if !output.status.success() {
        return Err(PreviewError::Git {
            command: args.join(" "),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
