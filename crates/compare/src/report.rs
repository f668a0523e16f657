// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Orchestration seam between the comparison core and the storage layer.

use crate::compare::{compare, ComparisonResult};
use crate::html::render_html;
use crate::text::render_text;

/// Both rendered reports plus the structural difference flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonReport {
    /// Fixed-width text report, persisted as `diff.txt`.
    pub text: String,
    /// Self-contained HTML report, persisted as `diff.html`.
    pub html: String,
    /// Taken from the [`ComparisonResult`], never re-derived from the
    /// rendered text.
    pub has_differences: bool,
}

/// Compare two sequences and render both report formats.
///
/// The [`ComparisonResult`] is computed once and both renderers consume it;
/// the returned result lets callers drive further presentation (e.g. the
/// colored terminal preview) from the structured rows.
pub fn run_comparison<S, T>(
    expected: &[S],
    actual: &[T],
    program_label: &str,
) -> (ComparisonReport, ComparisonResult)
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let result = compare(expected, actual);
    let report = ComparisonReport {
        text: render_text(&result, program_label),
        html: render_html(&result, program_label),
        has_differences: result.has_differences(),
    };
    (report, result)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
