// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_starts_unselected() {
    let session = Session::new();

    assert_eq!(session.selected(), None);
    assert_eq!(session.require_selected(), Err(NoProgramSelected));
}

#[test]
fn test_select_and_require() {
    let mut session = Session::new();
    session.select("myprog");

    assert_eq!(session.selected(), Some("myprog"));
    assert_eq!(session.require_selected(), Ok("myprog"));
}

#[test]
fn test_clear_after_delete() {
    let mut session = Session::new();
    session.select("myprog");
    session.clear();

    assert_eq!(session.selected(), None);
}

#[test]
fn test_reselect_replaces() {
    let mut session = Session::new();
    session.select("first");
    session.select("second");

    assert_eq!(session.selected(), Some("second"));
}

#[test]
fn test_refusal_message() {
    assert_eq!(NoProgramSelected.to_string(), "no program selected");
}
