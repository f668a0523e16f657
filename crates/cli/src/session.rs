// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session context for the interactive shell.
//!
//! The currently selected program is an explicit value threaded through the
//! shell, not process-global state. Every program-scoped operation goes
//! through [`Session::require_selected`].

use thiserror::Error;

/// Refusal returned by program-scoped operations when nothing is selected.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no program selected")]
pub struct NoProgramSelected;

/// Holds the currently selected program, if any.
#[derive(Debug, Default)]
pub struct Session {
    selected: Option<String>,
}

impl Session {
    /// Create a session with no program selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a program by name.
    pub fn select(&mut self, name: impl Into<String>) {
        self.selected = Some(name.into());
    }

    /// The currently selected program name.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Clear the selection (after deleting the selected program).
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The selected program name, or a refusal when none is selected.
    pub fn require_selected(&self) -> Result<&str, NoProgramSelected> {
        self.selected.as_deref().ok_or(NoProgramSelected)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
