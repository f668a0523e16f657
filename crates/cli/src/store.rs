// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk program store.
//!
//! Each program owns one subdirectory under the store root holding its
//! recorded outputs and the last comparison reports. The artifact names are
//! a compatibility surface: existing program directories written by earlier
//! versions of the tool must keep working.
//!
//! ```text
//! programs/<name>/expected.txt
//! programs/<name>/actual.txt
//! programs/<name>/diff.txt
//! programs/<name>/diff.html
//! ```

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use testdiff_compare::ComparisonReport;
use thiserror::Error;

/// Which recorded output a read/write refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputKind {
    Expected,
    Actual,
}

impl OutputKind {
    fn file_name(self) -> &'static str {
        match self {
            OutputKind::Expected => "expected.txt",
            OutputKind::Actual => "actual.txt",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Expected => write!(f, "expected"),
            OutputKind::Actual => write!(f, "actual"),
        }
    }
}

/// Which persisted report format a read refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Html,
}

impl ReportFormat {
    fn file_name(self) -> &'static str {
        match self {
            ReportFormat::Text => "diff.txt",
            ReportFormat::Html => "diff.html",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Html => write!(f, "HTML"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid program name: '{0}'")]
    InvalidName(String),

    #[error("no {kind} output recorded for '{program}'")]
    MissingRecord { program: String, kind: OutputKind },

    #[error("no {format} diff found for '{program}'")]
    MissingReport {
        program: String,
        format: ReportFormat,
    },
}

/// File store rooted at the programs directory.
#[derive(Debug)]
pub struct ProgramStore {
    root: PathBuf,
}

impl ProgramStore {
    /// Create a store rooted at `root`. The directory is created lazily, on
    /// the first program creation.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory owned by one program.
    pub fn program_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Path of one artifact inside a program's directory.
    fn program_path(&self, name: &str, file: &str) -> PathBuf {
        self.program_dir(name).join(file)
    }

    /// Create (or re-select) a program directory.
    ///
    /// Names become directory names, so path separators and dot-names are
    /// rejected rather than silently escaping the store root.
    pub fn ensure_program(&self, name: &str) -> Result<(), StoreError> {
        validate_name(name)?;
        fs::create_dir_all(self.program_dir(name))?;
        Ok(())
    }

    /// Sorted names of all existing programs. A missing store root reads as
    /// an empty store.
    pub fn list_programs(&self) -> Result<Vec<String>, StoreError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Record an output for a program, newline-joined with no trailing
    /// newline.
    pub fn write_output(
        &self,
        name: &str,
        kind: OutputKind,
        lines: &[String],
    ) -> Result<(), StoreError> {
        self.ensure_program(name)?;
        fs::write(self.program_path(name, kind.file_name()), lines.join("\n"))?;
        Ok(())
    }

    /// Read a recorded output as a line sequence.
    ///
    /// Trailing newlines are stripped before splitting, and an empty file
    /// reads as an empty sequence. A missing record is a precondition
    /// failure, not an empty sequence.
    pub fn read_output(&self, name: &str, kind: OutputKind) -> Result<Vec<String>, StoreError> {
        let path = self.program_path(name, kind.file_name());
        let data = fs::read_to_string(path).map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                StoreError::MissingRecord {
                    program: name.to_string(),
                    kind,
                }
            } else {
                StoreError::Io(err)
            }
        })?;

        let content = data.trim_end_matches('\n');
        if content.is_empty() {
            return Ok(Vec::new());
        }
        Ok(content.split('\n').map(str::to_owned).collect())
    }

    /// Persist both rendered reports for a program.
    pub fn save_reports(&self, name: &str, report: &ComparisonReport) -> Result<(), StoreError> {
        self.ensure_program(name)?;
        fs::write(
            self.program_path(name, ReportFormat::Text.file_name()),
            &report.text,
        )?;
        fs::write(
            self.program_path(name, ReportFormat::Html.file_name()),
            &report.html,
        )?;
        Ok(())
    }

    /// Read a persisted report.
    pub fn read_report(&self, name: &str, format: ReportFormat) -> Result<String, StoreError> {
        fs::read_to_string(self.program_path(name, format.file_name())).map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                StoreError::MissingReport {
                    program: name.to_string(),
                    format,
                }
            } else {
                StoreError::Io(err)
            }
        })
    }

    /// Whether a persisted report exists.
    pub fn has_report(&self, name: &str, format: ReportFormat) -> bool {
        self.program_path(name, format.file_name()).exists()
    }

    /// Path of a persisted report, for display.
    pub fn report_path(&self, name: &str, format: ReportFormat) -> PathBuf {
        self.program_path(name, format.file_name())
    }

    /// Delete both report artifacts. Missing files are fine.
    pub fn delete_reports(&self, name: &str) -> Result<(), StoreError> {
        for format in [ReportFormat::Text, ReportFormat::Html] {
            match fs::remove_file(self.program_path(name, format.file_name())) {
                Ok(()) => {}
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }

    /// Delete a program and everything recorded under it.
    pub fn delete_program(&self, name: &str) -> Result<(), StoreError> {
        match fs::remove_dir_all(self.program_dir(name)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

fn validate_name(name: &str) -> Result<(), StoreError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\');
    if invalid {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
