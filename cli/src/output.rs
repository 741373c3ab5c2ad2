//! Styled terminal output for the snaptex CLI.
//!
//! Wraps `console` so the pipeline reports through one consistent surface
//! instead of scattered `println!` calls.

use console::{Term, style};
use std::fmt::Display;

/// Terminal output helper for consistent styled output.
pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper writing to stdout.
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Print a success message with a green checkmark.
    pub fn success(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✓").green().bold(), message)),
        );
    }

    /// Print an error message with a red X.
    pub fn error(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✗").red().bold(), message)),
        );
    }

    /// Print an info message with a blue info icon.
    pub fn info(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("ℹ").blue().bold(), message)),
        );
    }

    /// Print a plain message without any prefix.
    pub fn print(&self, message: impl Display) {
        drop(self.term.write_line(&message.to_string()));
    }

    /// Print a dim/muted message.
    pub fn dim(&self, message: impl Display) {
        drop(self.term.write_line(&style(message).dim().to_string()));
    }

    /// Print a clipboard capture notification.
    pub fn clipboard(&self, width: usize, height: usize) {
        drop(self.term.write_line(&format!(
            "{} Clipboard image: {}",
            style("📋").bold(),
            style(format!("{width}x{height} pixels")).cyan()
        )));
    }

    /// Print the generated LaTeX between dim dividers.
    pub fn latex_block(&self, latex: &str) {
        let divider = style("─".repeat(40)).dim().to_string();
        drop(self.term.write_line(&divider));
        drop(self.term.write_line(latex));
        drop(self.term.write_line(&divider));
    }
}
