// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use std::path::Path;

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["testdiff"]).unwrap();

    assert_eq!(cli.programs_dir, Path::new("programs"));
    assert_eq!(cli.program, None);
    assert!(!cli.no_color);
}

#[test]
fn test_programs_dir_override() {
    let cli = Cli::try_parse_from(["testdiff", "--programs-dir", "/tmp/recordings"]).unwrap();

    assert_eq!(cli.programs_dir, Path::new("/tmp/recordings"));
}

#[test]
fn test_program_preselection_and_no_color() {
    let cli = Cli::try_parse_from(["testdiff", "--program", "myprog", "--no-color"]).unwrap();

    assert_eq!(cli.program.as_deref(), Some("myprog"));
    assert!(cli.no_color);
}

#[test]
fn test_unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["testdiff", "--bogus"]).is_err());
}
