// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output helpers for consistent error/info formatting.
//!
//! Provides ANSI color support with automatic terminal detection.

use std::io::{self, IsTerminal, Write};

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Write an error message to a writer with explicit terminal flag.
fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

/// Print an informational message to stdout.
///
/// Displays in green when stdout is a terminal, plain text otherwise.
pub fn print_info(msg: impl std::fmt::Display) {
    let is_tty = io::stdout().is_terminal();
    write_info(&mut io::stdout(), msg, is_tty);
}

/// Write an informational message to a writer with explicit terminal flag.
fn write_info<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[32m{}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "{}", msg);
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
