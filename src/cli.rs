use clap::{ArgAction, Parser};

/// git-lastdiff command-line interface
#[derive(Parser, Debug, Clone)]
#[command(
    name = "git-lastdiff",
    version,
    about = "Show the diff between HEAD and its parent commit",
    long_about = None
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv). `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
