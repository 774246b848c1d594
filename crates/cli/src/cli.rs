//! CLI argument parsing with clap derive.

use clap::Parser;

/// A tiny demo CLI that greets a fixed list of names
#[derive(Parser)]
#[command(name = "greet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
