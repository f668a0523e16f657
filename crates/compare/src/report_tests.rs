// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::compare::Classification;
use crate::text::NO_DIFFERENCES;

#[test]
fn test_matching_outputs() {
    let (report, result) = run_comparison(&["a", "b", "c"], &["a", "b", "c"], "demo");

    assert!(!report.has_differences);
    assert_eq!(report.text, NO_DIFFERENCES);
    // HTML still carries the full table.
    assert!(report.html.contains("<td class=\"match\">a</td>"));
    assert!(!result.has_differences());
}

#[test]
fn test_differing_outputs() {
    let (report, result) = run_comparison(&["a"], &["b"], "demo");

    assert!(report.has_differences);
    assert!(report.text.contains(">>> CONTENT DIFFERENCE <<<"));
    assert!(report.html.contains("CONTENT DIFFERENCE"));
    assert_eq!(
        result.rows()[0].classification,
        Classification::ContentDifference {
            diverge_at: Some(0)
        }
    );
}

#[test]
fn test_flag_comes_from_the_structured_result() {
    // A recorded line that happens to contain an annotation marker must not
    // flip the flag: it is derived from classifications, not report text.
    let line = ">>> CONTENT DIFFERENCE <<<";
    let (report, _) = run_comparison(&[line], &[line], "demo");

    assert!(!report.has_differences);
    assert_eq!(report.text, NO_DIFFERENCES);
}

#[test]
fn test_both_renderings_share_one_result() {
    let (report, result) = run_comparison(&["x", "y"], &["x"], "demo");

    assert_eq!(report.has_differences, result.has_differences());
    assert!(report.text.contains("vvv MISSING LINE: 'y'"));
    assert!(report.html.contains("MISSING LINE IN ACTUAL OUTPUT"));
}
