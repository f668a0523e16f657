// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! testdiff
//!
//! A terminal utility for recording "expected" and "actual" text outputs per
//! named test program, comparing them line by line, and persisting text and
//! HTML diff reports. The comparison core lives in the `testdiff-compare`
//! crate; this crate provides the interactive shell, the on-disk program
//! store, and the colored terminal preview.

pub mod cli;
pub mod diagnostics;
pub mod preview;
pub mod session;
pub mod shell;
pub mod store;
