use std::{
    fmt,
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::{Context, Result};
use tracing::{debug, trace};

use super::error::DiffError;
use crate::app::context::AppContext;

/// Version-control binary, resolved through `PATH`.
pub const PROGRAM: &str = "git";
/// Revision the diff starts from.
pub const BASE_REV: &str = "HEAD~1";
/// Revision the diff ends at.
pub const TARGET_REV: &str = "HEAD";

/// A fully specified `git diff HEAD~1 HEAD` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInvocation {
    workdir: PathBuf,
}

impl DiffInvocation {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn for_context(ctx: &AppContext) -> Self {
        Self::new(ctx.workdir.clone())
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Arguments passed to the program, in order.
    pub const fn args(&self) -> [&'static str; 3] {
        ["diff", BASE_REV, TARGET_REV]
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(PROGRAM);
        cmd.args(self.args())
            .current_dir(&self.workdir)
            .stdin(Stdio::null());
        cmd
    }

    /// Run the diff and wait for it, returning its raw standard output.
    ///
    /// # Errors
    /// Returns a [`DiffError`] if the program cannot be started or exits unsuccessfully.
    pub fn execute(&self) -> Result<Vec<u8>, DiffError> {
        debug!(workdir = %self.workdir.display(), "running {}", self);

        let output = self
            .command()
            .output()
            .map_err(|e| DiffError::spawn(PROGRAM, &self.workdir, e))?;

        if output.status.success() {
            trace!(bytes = output.stdout.len(), "diff completed");
            return Ok(output.stdout);
        }

        debug!(status = ?output.status.code(), "diff failed");
        Err(DiffError::from_exit(
            &self.workdir,
            output.status.code(),
            &output.stderr,
        ))
    }
}

impl fmt::Display for DiffInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PROGRAM}")?;
        for arg in self.args() {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Write the outcome of a diff: the raw text plus a newline, or one `Error:` line.
///
/// # Errors
/// Returns an error only if writing to `out` fails.
pub fn report(outcome: &Result<Vec<u8>, DiffError>, out: &mut impl Write) -> Result<()> {
    match outcome {
        Ok(text) => {
            out.write_all(text).context("failed to write diff")?;
            out.write_all(b"\n").context("failed to write diff")?;
        }
        Err(e) => {
            writeln!(out, "Error: {e}").context("failed to write error")?;
        }
    }
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Print the diff between `HEAD~1` and `HEAD` for the context's working directory.
///
/// Never propagates a failure: diff errors are printed as an `Error:` line,
/// and output errors are only logged.
pub fn run_git_diff(ctx: &AppContext, out: &mut impl Write) {
    let outcome = DiffInvocation::for_context(ctx).execute();
    if let Err(e) = &outcome {
        debug!(error = ?e, "reporting diff failure");
    }
    if let Err(e) = report(&outcome, out) {
        debug!("{e:#}");
    }
}
