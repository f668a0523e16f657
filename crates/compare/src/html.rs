// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Self-contained HTML report.
//!
//! Emits a complete document with embedded style rules and a two-column
//! table, one row per comparison row plus an annotation row beneath every
//! non-matching one. Unlike the text renderer, the full table is emitted
//! even when nothing differs.

use crate::compare::{Classification, ComparisonResult};
use std::fmt::Write;

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Diff Report - {title}</title>
    <style>
        body { font-family: monospace; margin: 20px; }
        .diff-table { border-collapse: collapse; width: 100%; }
        .diff-table td, .diff-table th { border: 1px solid #ddd; padding: 8px; }
        .expected { background-color: #ffcccc; }
        .actual { background-color: #ccffcc; }
        .match { background-color: #f0f0f0; }
        .header { background-color: #e0e0e0; font-weight: bold; }
        .extra { background-color: #ccffcc; color: #006600; }
        .missing { background-color: #ffcccc; color: #990000; }
        .difference { background-color: #ffffcc; color: #996600; }
    </style>
</head>
<body>
"#;

/// Cell classes and optional annotation for one table row.
struct RowStyle {
    expected_class: &'static str,
    actual_class: &'static str,
    annotation: Option<(&'static str, &'static str)>,
}

fn row_style(classification: &Classification) -> RowStyle {
    match classification {
        Classification::Match => RowStyle {
            expected_class: "match",
            actual_class: "match",
            annotation: None,
        },
        Classification::Missing => RowStyle {
            expected_class: "missing",
            actual_class: "match",
            annotation: Some(("MISSING LINE IN ACTUAL OUTPUT", "missing")),
        },
        Classification::Extra => RowStyle {
            expected_class: "match",
            actual_class: "extra",
            annotation: Some(("EXTRA LINE IN ACTUAL OUTPUT", "extra")),
        },
        Classification::ContentDifference { .. } => RowStyle {
            expected_class: "expected",
            actual_class: "actual",
            annotation: Some(("CONTENT DIFFERENCE", "difference")),
        },
    }
}

/// Render the comparison as a self-contained HTML document.
///
/// Line content and the program label are escaped, so report structure
/// survives arbitrary recorded output.
pub fn render_html(result: &ComparisonResult, program_label: &str) -> String {
    let title = escape(program_label);

    let mut out = DOCUMENT_HEAD.replace("{title}", &title);
    let _ = writeln!(out, "    <h1>Diff Report - {}</h1>", title);
    out.push_str("    <table class=\"diff-table\">\n");
    out.push_str("        <tr class=\"header\">\n");
    out.push_str("            <th width=\"50%\">Expected</th>\n");
    out.push_str("            <th width=\"50%\">Actual</th>\n");
    out.push_str("        </tr>\n");

    for row in result.rows() {
        let style = row_style(&row.classification);
        let expected = escape(row.expected.as_deref().unwrap_or(""));
        let actual = escape(row.actual.as_deref().unwrap_or(""));

        out.push_str("        <tr>\n");
        let _ = writeln!(
            out,
            "            <td class=\"{}\">{}</td>",
            style.expected_class, expected
        );
        let _ = writeln!(
            out,
            "            <td class=\"{}\">{}</td>",
            style.actual_class, actual
        );
        out.push_str("        </tr>\n");

        if let Some((text, class)) = style.annotation {
            out.push_str("        <tr>\n");
            let _ = writeln!(
                out,
                "            <td colspan=\"2\" class=\"{}\">{}</td>",
                class, text
            );
            out.push_str("        </tr>\n");
        }
    }

    out.push_str("    </table>\n");
    out.push_str("</body>\n");
    out.push_str("</html>\n");
    out
}

/// Escape characters significant to HTML so line content cannot corrupt
/// the document structure.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
