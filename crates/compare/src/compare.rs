// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line classification core.
//!
//! [`compare`] walks both sequences by index and assigns exactly one
//! [`Classification`] per aligned row. The walk is strictly positional:
//! row `i` of the expected output is only ever compared against row `i`
//! of the actual output.

use serde::{Deserialize, Serialize};

/// Outcome category for one aligned row of the comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Classification {
    /// Both lines present and byte-equal.
    Match,
    /// Line present in expected, absent in actual at this index.
    Missing,
    /// Line present in actual, absent in expected at this index.
    Extra,
    /// Both lines present but unequal.
    ContentDifference {
        /// First byte offset at which the lines differ, scanning up to the
        /// shorter line's length. `None` when one line is a strict prefix
        /// of the other (a pure length difference).
        diverge_at: Option<usize>,
    },
}

impl Classification {
    /// Whether this row counts as a difference.
    pub fn is_difference(&self) -> bool {
        !matches!(self, Classification::Match)
    }
}

/// One aligned position across both sequences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Zero-based row index.
    pub index: usize,
    /// Expected line, absent past the end of the expected sequence.
    pub expected: Option<String>,
    /// Actual line, absent past the end of the actual sequence.
    pub actual: Option<String>,
    /// Classification for this row.
    pub classification: Classification,
}

/// Classified, line-indexed result of one comparison.
///
/// Immutable once built: renderers only read it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    rows: Vec<ComparisonRow>,
    has_differences: bool,
}

impl ComparisonResult {
    /// All aligned rows, in order. Row count is
    /// `max(len(expected), len(actual))`.
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    /// Whether at least one row is not a [`Classification::Match`].
    pub fn has_differences(&self) -> bool {
        self.has_differences
    }
}

/// Compare two line sequences position by position.
///
/// Pure and infallible: two empty sequences produce an empty result with
/// `has_differences == false`. Rows past the end of the shorter sequence
/// classify as [`Classification::Missing`] (actual ran out) or
/// [`Classification::Extra`] (expected ran out); in-range unequal lines
/// classify as [`Classification::ContentDifference`] with the first
/// mismatching byte offset.
pub fn compare<S, T>(expected: &[S], actual: &[T]) -> ComparisonResult
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let row_count = expected.len().max(actual.len());
    let mut rows = Vec::with_capacity(row_count);
    let mut has_differences = false;

    for index in 0..row_count {
        let exp = expected.get(index).map(AsRef::as_ref);
        let act = actual.get(index).map(AsRef::as_ref);

        let classification = match (exp, act) {
            (None, Some(_)) => Classification::Extra,
            (Some(_), None) => Classification::Missing,
            (Some(e), Some(a)) if e == a => Classification::Match,
            (Some(e), Some(a)) => Classification::ContentDifference {
                diverge_at: divergence_offset(e, a),
            },
            // Unreachable: index < max(len, len) guarantees one side is present.
            (None, None) => Classification::Match,
        };

        has_differences |= classification.is_difference();
        rows.push(ComparisonRow {
            index,
            expected: exp.map(str::to_owned),
            actual: act.map(str::to_owned),
            classification,
        });
    }

    ComparisonResult {
        rows,
        has_differences,
    }
}

/// First byte offset at which two unequal lines diverge, scanning only up
/// to the shorter line's length. `None` when the shorter line is a strict
/// prefix of the longer one.
fn divergence_offset(expected: &str, actual: &str) -> Option<usize> {
    expected
        .as_bytes()
        .iter()
        .zip(actual.as_bytes())
        .position(|(e, a)| e != a)
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
