// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Record and compare expected vs actual test program output
#[derive(Parser, Debug, Clone)]
#[command(name = "testdiff", version, about = "Record and compare test program output")]
pub struct Cli {
    /// Directory holding per-program recordings and reports
    #[arg(long, env = "TESTDIFF_PROGRAMS_DIR", default_value = "programs")]
    pub programs_dir: PathBuf,

    /// Program to select at startup
    #[arg(long)]
    pub program: Option<String>,

    /// Disable ANSI colors in terminal output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
