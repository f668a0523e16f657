// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive menu shell.
//!
//! Presents the operation menu, reads single-line operator input, and
//! dispatches to the store and the comparison core. Every failure is
//! reported as a message and the loop continues; only "Exit" and end of
//! input terminate it.
//!
//! I/O is injected (`R: BufRead`, `W: Write`) so the whole loop can be
//! driven from byte buffers in tests.

use std::io::{self, BufRead, Write};

use testdiff_compare::run_comparison;

use crate::preview::{style, write_preview};
use crate::session::Session;
use crate::store::{OutputKind, ProgramStore, ReportFormat};

/// Sentinel line ending multi-line output entry.
const END_MARKER: &str = "END";

/// Whether the loop keeps going after a menu action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The interactive shell, generic over its input and output streams.
pub struct Shell<R, W> {
    store: ProgramStore,
    session: Session,
    reader: R,
    writer: W,
    color: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(store: ProgramStore, session: Session, reader: R, writer: W, color: bool) -> Self {
        Self {
            store,
            session,
            reader,
            writer,
            color,
        }
    }

    /// Run the menu loop until "Exit" or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            if self.dispatch(line.trim())? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        let title_top = self.paint(style::HI_CYAN, "╔══════════════════════════════╗");
        let title_mid = self.paint(style::HI_CYAN, "║           testdiff           ║");
        let title_bot = self.paint(style::HI_CYAN, "╚══════════════════════════════╝");
        writeln!(self.writer, "\n{}", title_top)?;
        writeln!(self.writer, "{}", title_mid)?;
        writeln!(self.writer, "{}", title_bot)?;

        match self.session.selected() {
            Some(name) => {
                let name = self.paint(style::HI_GREEN, name);
                writeln!(self.writer, "Current program: {}\n", name)?;
            }
            None => {
                let note = self.paint(style::HI_RED, "No program selected!");
                writeln!(self.writer, "{}\n", note)?;
            }
        }

        writeln!(self.writer, "1.  Create/select program")?;
        writeln!(self.writer, "2.  Show existing programs")?;
        writeln!(self.writer, "3.  Add expected output")?;
        writeln!(self.writer, "4.  Add actual output")?;
        writeln!(self.writer, "5.  Compare expected vs actual")?;
        writeln!(self.writer, "6.  Show last comparison (text)")?;
        writeln!(self.writer, "7.  Show last comparison (HTML)")?;
        writeln!(self.writer, "8.  Delete a program")?;
        writeln!(self.writer, "9.  Delete comparison for current program")?;
        writeln!(self.writer, "10. Exit")?;

        let prompt = self.paint(style::HI_YELLOW, "\nChoose: ");
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()
    }

    fn dispatch(&mut self, choice: &str) -> io::Result<Flow> {
        match choice {
            "1" => self.select_program()?,
            "2" => self.show_programs()?,
            "3" => self.add_output(OutputKind::Expected)?,
            "4" => self.add_output(OutputKind::Actual)?,
            "5" => self.compare_outputs()?,
            "6" => self.show_last_comparison(ReportFormat::Text)?,
            "7" => self.show_last_comparison(ReportFormat::Html)?,
            "8" => self.delete_program()?,
            "9" => self.delete_reports()?,
            "10" => {
                let bye = self.paint(style::HI_GREEN, "Goodbye!");
                writeln!(self.writer, "{}", bye)?;
                return Ok(Flow::Exit);
            }
            _ => {
                self.error("Invalid choice! Please select 1-10.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn select_program(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt_line("Enter program name: ")? else {
            return Ok(());
        };
        let name = name.trim().to_string();
        if let Err(err) = self.store.ensure_program(&name) {
            return self.error(err);
        }
        self.session.select(&name);
        self.success(format!("Selected program: {}", name))
    }

    fn show_programs(&mut self) -> io::Result<()> {
        let programs = match self.store.list_programs() {
            Ok(programs) => programs,
            Err(err) => return self.error(err),
        };
        if programs.is_empty() {
            return writeln!(self.writer, "No programs found.");
        }
        let header = self.paint(style::HI_CYAN, "\nAvailable Programs:");
        writeln!(self.writer, "{}", header)?;
        let rule = self.paint(style::HI_CYAN, "──────────────────");
        writeln!(self.writer, "{}", rule)?;
        for name in programs {
            writeln!(self.writer, "• {}", name)?;
        }
        writeln!(self.writer)
    }

    fn add_output(&mut self, kind: OutputKind) -> io::Result<()> {
        let name = match self.session.require_selected() {
            Ok(name) => name.to_string(),
            Err(err) => return self.error(err),
        };

        writeln!(
            self.writer,
            "Paste {} output (end with {} on a line by itself):",
            kind, END_MARKER
        )?;
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line == END_MARKER {
                break;
            }
            lines.push(line);
        }

        if let Err(err) = self.store.write_output(&name, kind, &lines) {
            return self.error(err);
        }
        self.success(format!("{} output saved for {}", kind, name))
    }

    fn compare_outputs(&mut self) -> io::Result<()> {
        let name = match self.session.require_selected() {
            Ok(name) => name.to_string(),
            Err(err) => return self.error(err),
        };
        let expected = match self.store.read_output(&name, OutputKind::Expected) {
            Ok(lines) => lines,
            Err(err) => return self.error(err),
        };
        let actual = match self.store.read_output(&name, OutputKind::Actual) {
            Ok(lines) => lines,
            Err(err) => return self.error(err),
        };

        let (report, result) = run_comparison(&expected, &actual, &name);
        if let Err(err) = self.store.save_reports(&name, &report) {
            return self.error(err);
        }

        if !report.has_differences {
            return self.success("No differences found!");
        }

        self.success("Comparison saved:")?;
        writeln!(
            self.writer,
            "  Text: {}",
            self.store.report_path(&name, ReportFormat::Text).display()
        )?;
        writeln!(
            self.writer,
            "  HTML: {}",
            self.store.report_path(&name, ReportFormat::Html).display()
        )?;

        self.preview_rule()?;
        let use_color = self.color;
        write_preview(&mut self.writer, &result, &name, use_color)?;
        self.preview_rule()
    }

    fn show_last_comparison(&mut self, format: ReportFormat) -> io::Result<()> {
        let name = match self.session.require_selected() {
            Ok(name) => name.to_string(),
            Err(err) => return self.error(err),
        };

        match format {
            ReportFormat::Text => {
                let report = match self.store.read_report(&name, format) {
                    Ok(report) => report,
                    Err(err) => return self.error(err),
                };
                self.preview_rule()?;
                self.writer.write_all(report.as_bytes())?;
                self.preview_rule()
            }
            ReportFormat::Html => {
                if !self.store.has_report(&name, format) {
                    return self.error(format!("no HTML diff found for '{}'", name));
                }
                let path = self.store.report_path(&name, format);
                self.success(format!("HTML diff saved to: {}", path.display()))?;
                writeln!(
                    self.writer,
                    "Open this file in a web browser to view the colored diff"
                )
            }
        }
    }

    fn delete_program(&mut self) -> io::Result<()> {
        let name = match self.session.require_selected() {
            Ok(name) => name.to_string(),
            Err(err) => return self.error(err),
        };
        if let Err(err) = self.store.delete_program(&name) {
            return self.error(err);
        }
        self.session.clear();
        self.success(format!("Program deleted: {}", name))
    }

    fn delete_reports(&mut self) -> io::Result<()> {
        let name = match self.session.require_selected() {
            Ok(name) => name.to_string(),
            Err(err) => return self.error(err),
        };
        if let Err(err) = self.store.delete_reports(&name) {
            return self.error(err);
        }
        self.success(format!("Deleted diff files for {}", name))
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let prompt = self.paint(style::HI_YELLOW, prompt);
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        self.read_line()
    }

    /// Read one line, stripping the trailing newline. `None` at end of
    /// input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }

    fn preview_rule(&mut self) -> io::Result<()> {
        let rule = self.paint(style::HI_CYAN, &"═".repeat(50));
        writeln!(self.writer, "{}", rule)
    }

    fn error(&mut self, msg: impl std::fmt::Display) -> io::Result<()> {
        let msg = self.paint(style::HI_RED, &format!("Error: {}", msg));
        writeln!(self.writer, "{}", msg)
    }

    fn success(&mut self, msg: impl std::fmt::Display) -> io::Result<()> {
        let msg = self.paint(style::HI_GREEN, &msg.to_string());
        writeln!(self.writer, "{}", msg)
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", color, text, style::RESET)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
