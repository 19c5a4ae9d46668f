use clap::Parser;
use git_lastdiff::cli::Cli;
use git_lastdiff::logging::init::init_tracing;
use git_lastdiff::run;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("warning: logging disabled: {e:#}");
    }

    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock());
}
