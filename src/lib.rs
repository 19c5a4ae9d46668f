pub mod app;
pub mod cli;
pub mod core;
pub mod logging;

use std::io::Write;

use app::context::AppContext;

/// Entry point for the CLI: print the diff between `HEAD~1` and `HEAD`.
///
/// Failures are written to `out` as a single `Error:` line and never returned.
pub fn run(cli: &cli::Cli, out: &mut impl Write) {
    let ctx = AppContext::from_current_dir(cli.verbose);
    tracing::debug!(
        workdir = %ctx.workdir.display(),
        verbosity = ctx.verbosity,
        "resolved context"
    );
    crate::core::git::run_git_diff(&ctx, out);
}
