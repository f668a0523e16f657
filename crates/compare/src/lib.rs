// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Positional line comparison and diff report rendering.
//!
//! This crate compares two ordered sequences of text lines ("expected" and
//! "actual") position by position and classifies every aligned row. Two
//! renderers consume the classified result: a fixed-width text report and a
//! self-contained HTML report.
//!
//! The comparison is deliberately *not* a minimal-edit-distance diff: there
//! is no alignment search and no resynchronization after an inserted or
//! deleted line. A shifted block shows up as a cascade of content
//! differences. That strictness is the point — recorded test output is
//! expected to match exactly, line for line.

mod compare;
mod html;
mod report;
mod text;

pub use compare::{compare, Classification, ComparisonResult, ComparisonRow};
pub use html::render_html;
pub use report::{run_comparison, ComparisonReport};
pub use text::{render_text, FIELD_WIDTH, NO_DIFFERENCES};
