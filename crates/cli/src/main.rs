mod cli;
mod greeting;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    greeting::write_greetings(&mut out).context("failed to write greetings to stdout")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

/// Set up stderr diagnostics. `GREET_LOG` overrides the level;
/// otherwise `--verbose` selects debug, default is warn.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("GREET_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
