// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! testdiff binary entry point.

use std::io::{self, IsTerminal};

use clap::Parser;

use testdiff::cli::Cli;
use testdiff::diagnostics::print_error;
use testdiff::session::Session;
use testdiff::shell::Shell;
use testdiff::store::ProgramStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let store = ProgramStore::new(&cli.programs_dir);
    let mut session = Session::new();
    if let Some(name) = &cli.program {
        if let Err(err) = store.ensure_program(name) {
            print_error(err);
            std::process::exit(1);
        }
        session.select(name);
    }

    let color = !cli.no_color && io::stdout().is_terminal();
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    let mut shell = Shell::new(store, session, stdin, stdout, color);
    shell.run()?;
    Ok(())
}
