// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Colored terminal preview of a comparison.
//!
//! The preview colors each row from the structured [`ComparisonResult`]
//! classifications; it never re-derives them by scanning rendered report
//! text. Layout matches the text renderer exactly, so the preview and the
//! persisted `diff.txt` agree line for line. With color disabled the
//! preview *is* the plain text report.

use std::io::{self, Write};
use testdiff_compare::{render_text, Classification, ComparisonResult, FIELD_WIDTH, NO_DIFFERENCES};

/// ANSI style constants (public for reuse by the shell).
pub mod style {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const HI_RED: &str = "\x1b[91m";
    pub const HI_GREEN: &str = "\x1b[92m";
    pub const HI_YELLOW: &str = "\x1b[93m";
    pub const HI_CYAN: &str = "\x1b[96m";
}

const COLUMN_HEADER: &str = "Expected                         | Actual";
const RULE: &str = "--------------------------------|--------------------------------";

/// Pad to the column width, coloring only the content so the padding stays
/// plain and the visible layout matches the uncolored report. Width counts
/// chars, as `{:<30}` does in the text renderer.
fn padded(text: &str, color: &str) -> String {
    let fill = FIELD_WIDTH.saturating_sub(text.chars().count());
    format!("{}{}{}{}", color, text, style::RESET, " ".repeat(fill))
}

/// Write the comparison preview.
///
/// `use_color` off (flag or non-TTY stdout) falls back to the plain text
/// report so piped output stays clean.
pub fn write_preview<W: Write>(
    writer: &mut W,
    result: &ComparisonResult,
    program_label: &str,
    use_color: bool,
) -> io::Result<()> {
    if !use_color {
        return writer.write_all(render_text(result, program_label).as_bytes());
    }

    if !result.has_differences() {
        return writeln!(
            writer,
            "{}{}{}",
            style::GREEN,
            NO_DIFFERENCES.trim_end(),
            style::RESET
        );
    }

    writeln!(writer, "{}DIFF REPORT{}", style::CYAN, style::RESET)?;
    writeln!(writer, "{}==========={}", style::CYAN, style::RESET)?;
    writeln!(
        writer,
        "{}Program: {}{}",
        style::BLUE,
        program_label,
        style::RESET
    )?;
    writeln!(writer)?;
    writeln!(writer, "{}{}{}", style::BLUE, COLUMN_HEADER, style::RESET)?;
    writeln!(writer, "{}{}{}", style::BLUE, RULE, style::RESET)?;

    for row in result.rows() {
        let expected = row.expected.as_deref().unwrap_or("");
        let actual = row.actual.as_deref().unwrap_or("");

        match &row.classification {
            Classification::Match => {
                writeln!(
                    writer,
                    "{:<w$}| {:<w$}",
                    expected,
                    actual,
                    w = FIELD_WIDTH
                )?;
            }
            Classification::Extra => {
                writeln!(
                    writer,
                    "{:<w$}| {}",
                    "",
                    padded(actual, style::GREEN),
                    w = FIELD_WIDTH
                )?;
                writeln!(
                    writer,
                    "{:<w$}| {}^^^ EXTRA LINE: '{}'{}",
                    "",
                    style::GREEN,
                    actual,
                    style::RESET,
                    w = FIELD_WIDTH
                )?;
                writeln!(writer, "{}{}{}", style::BLUE, RULE, style::RESET)?;
            }
            Classification::Missing => {
                writeln!(
                    writer,
                    "{}| {:<w$}",
                    padded(expected, style::RED),
                    "",
                    w = FIELD_WIDTH
                )?;
                writeln!(
                    writer,
                    "{:<w$}| {}vvv MISSING LINE: '{}'{}",
                    "",
                    style::RED,
                    expected,
                    style::RESET,
                    w = FIELD_WIDTH
                )?;
                writeln!(writer, "{}{}{}", style::BLUE, RULE, style::RESET)?;
            }
            Classification::ContentDifference { diverge_at } => {
                writeln!(
                    writer,
                    "{}| {}",
                    padded(expected, style::RED),
                    padded(actual, style::GREEN)
                )?;
                writeln!(
                    writer,
                    "{:<w$}| {}>>> CONTENT DIFFERENCE <<<{}",
                    "",
                    style::YELLOW,
                    style::RESET,
                    w = FIELD_WIDTH
                )?;
                if let Some(offset) = *diverge_at {
                    writeln!(
                        writer,
                        "{:<w$}| {:off$}{}^{}",
                        "",
                        "",
                        style::YELLOW,
                        style::RESET,
                        w = FIELD_WIDTH,
                        off = offset
                    )?;
                }
                writeln!(writer, "{}{}{}", style::BLUE, RULE, style::RESET)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "preview_tests.rs"]
mod tests;
