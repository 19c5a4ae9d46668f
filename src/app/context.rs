use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppContext {
    pub workdir: PathBuf,
    pub verbosity: u8,
}

impl AppContext {
    pub const fn new(workdir: PathBuf, verbosity: u8) -> Self {
        Self { workdir, verbosity }
    }

    /// Convenience constructor for the current directory.
    ///
    /// Never fails: an unreadable current directory becomes `.`, and the
    /// subprocess is left to report the problem.
    pub fn from_current_dir(verbosity: u8) -> Self {
        let workdir = std::env::current_dir().unwrap_or_else(|e| {
            tracing::debug!("cannot determine current directory: {e}");
            PathBuf::from(".")
        });
        Self::new(workdir, verbosity)
    }
}
