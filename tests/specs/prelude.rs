//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
use std::process::Command;

/// Returns a Command configured to run the greet binary
pub fn greet_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("greet"));
    // Pin the log filter so an ambient GREET_LOG cannot pollute stderr.
    cmd.env_remove("GREET_LOG");
    cmd
}
