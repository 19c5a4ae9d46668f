use std::path::Path;

use git2::Repository;
use thiserror::Error;

/// Ways running `git diff HEAD~1 HEAD` can fail.
///
/// Every variant renders as a single line so that a failed run prints
/// exactly one `Error:` line.
#[derive(Debug, Error)]
pub enum DiffError {
    /// The version-control binary could not be resolved.
    #[error("failed to execute {program}: program not found")]
    BinaryNotFound { program: String },

    /// The binary exists but could not be started.
    #[error("failed to execute {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The working directory is not inside a repository.
    #[error("not a git repository: {}", first_line(.stderr))]
    NotARepository { stderr: String },

    /// `HEAD~1` does not resolve, typically a repository with a single commit.
    #[error("no parent commit for HEAD: {}", first_line(.stderr))]
    NoParentCommit { stderr: String },

    /// The diff exited unsuccessfully for some other reason.
    #[error("git diff exited with {}: {}", describe_status(*.status), first_line(.stderr))]
    NonZeroExit { status: Option<i32>, stderr: String },
}

impl DiffError {
    /// Build the error for a spawn failure of `program` run from `workdir`.
    pub fn spawn(program: &str, workdir: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound && workdir.is_dir() {
            Self::BinaryNotFound {
                program: program.to_string(),
            }
        } else {
            Self::Spawn {
                program: program.to_string(),
                source,
            }
        }
    }

    /// Classify a non-zero exit by looking at the repository in `workdir`.
    ///
    /// Only consulted after the subprocess has already failed.
    pub fn from_exit(workdir: &Path, status: Option<i32>, stderr: &[u8]) -> Self {
        let stderr = String::from_utf8_lossy(stderr).trim().to_string();

        let Ok(repo) = Repository::discover(workdir) else {
            return Self::NotARepository { stderr };
        };
        if repo.revparse_single("HEAD~1").is_err() {
            return Self::NoParentCommit { stderr };
        }
        Self::NonZeroExit { status, stderr }
    }
}

fn first_line(text: &str) -> &str {
    text.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("no error output")
}

fn describe_status(status: Option<i32>) -> String {
    status.map_or_else(
        || "no exit status (terminated by signal)".to_string(),
        |code| format!("status {code}"),
    )
}
