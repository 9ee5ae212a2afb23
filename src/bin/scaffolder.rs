use clap::Parser;
use scaffolder::cli::{run_cli, Cli};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run_cli(&cli) {
        tracing::error!("generation failed: {e:#}");
        std::process::exit(1);
    }
}
