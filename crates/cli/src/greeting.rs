// SPDX-License-Identifier: MIT

//! Greeting formatting and the fixed demo roster.
//!
//! `greet` is a pure formatter; `write_greetings` walks the roster in
//! order and writes one line per name to the given sink.

use std::io::{self, Write};

/// Names greeted by the demo, in output order.
pub const NAMES: [&str; 3] = ["World", "Claude", "Voice Mode"];

/// Format a greeting for `name`. Accepts any string, including empty.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Write one greeting line per roster entry, in roster order.
pub fn write_greetings(mut out: impl Write) -> io::Result<()> {
    for name in NAMES {
        tracing::debug!(name, "writing greeting");
        writeln!(out, "{}", greet(name))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "greeting_tests.rs"]
mod tests;
