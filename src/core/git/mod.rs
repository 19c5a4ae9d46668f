pub mod diff;
pub mod error;

pub use diff::{DiffInvocation, report, run_git_diff};
pub use error::DiffError;
