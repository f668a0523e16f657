// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-width two-column text report.
//!
//! The layout is load-bearing: `diff.txt` files written by earlier versions
//! of the tool use exactly these field widths, rules, and annotation
//! literals, and the colored terminal preview reproduces the same layout.

use crate::compare::{Classification, ComparisonResult};
use std::fmt::Write;

/// Column field width. Longer lines overflow without truncation; only the
/// padding is skipped.
pub const FIELD_WIDTH: usize = 30;

/// Returned instead of the tabular body when nothing differs.
pub const NO_DIFFERENCES: &str = "NO DIFFERENCES FOUND - OUTPUTS MATCH EXACTLY\n";

const COLUMN_HEADER: &str = "Expected                         | Actual\n";
const RULE: &str = "--------------------------------|--------------------------------\n";

/// Render the comparison as a fixed-width two-column text report.
///
/// When the result holds no differences the body is suppressed entirely and
/// the fixed [`NO_DIFFERENCES`] string is returned.
pub fn render_text(result: &ComparisonResult, program_label: &str) -> String {
    if !result.has_differences() {
        return NO_DIFFERENCES.to_string();
    }

    let mut out = String::new();
    out.push_str("DIFF REPORT\n");
    out.push_str("===========\n");
    let _ = writeln!(out, "Program: {}\n", program_label);
    out.push_str(COLUMN_HEADER);
    out.push_str(RULE);

    for row in result.rows() {
        let expected = row.expected.as_deref().unwrap_or("");
        let actual = row.actual.as_deref().unwrap_or("");

        match &row.classification {
            Classification::Match => {
                let _ = writeln!(out, "{:<w$}| {:<w$}", expected, actual, w = FIELD_WIDTH);
            }
            Classification::Extra => {
                let _ = writeln!(out, "{:<w$}| {:<w$}", "", actual, w = FIELD_WIDTH);
                let _ = writeln!(
                    out,
                    "{:<w$}| ^^^ EXTRA LINE: '{}'",
                    "",
                    actual,
                    w = FIELD_WIDTH
                );
                out.push_str(RULE);
            }
            Classification::Missing => {
                let _ = writeln!(out, "{:<w$}| {:<w$}", expected, "", w = FIELD_WIDTH);
                let _ = writeln!(
                    out,
                    "{:<w$}| vvv MISSING LINE: '{}'",
                    "",
                    expected,
                    w = FIELD_WIDTH
                );
                out.push_str(RULE);
            }
            Classification::ContentDifference { diverge_at } => {
                let _ = writeln!(out, "{:<w$}| {:<w$}", expected, actual, w = FIELD_WIDTH);
                let _ = writeln!(out, "{:<w$}| >>> CONTENT DIFFERENCE <<<", "", w = FIELD_WIDTH);
                // Prefix case carries no offset and gets no caret line.
                if let Some(offset) = *diverge_at {
                    let _ = writeln!(
                        out,
                        "{:<w$}| {:off$}^",
                        "",
                        "",
                        w = FIELD_WIDTH,
                        off = offset
                    );
                }
                out.push_str(RULE);
            }
        }
    }

    out
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
