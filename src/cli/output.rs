//! Colored terminal output.
//!
//! Everything goes to stderr; stdout stays free for tools that capture it.

use colored::Colorize;
use std::io::{self, Write};

/// Writes styled progress and status lines to stderr.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    fn line(&self, message: impl std::fmt::Display) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{message}")
    }

    /// Prints a message only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if self.verbose && !self.quiet {
            self.line(message.dimmed())?;
        }
        Ok(())
    }

    /// Prints a progress step.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.line(format!("{} {}", "→".cyan(), message))
    }

    /// Prints a success line.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.line(format!("{} {}", "✓".green().bold(), message))
    }

    /// Prints a warning. Shown even in quiet mode.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        self.line(format!("{} {}", "warning:".yellow().bold(), message))
    }

    /// Prints a section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.line(format!("\n{}", format!("### {title} ###").bold()))
    }

    /// Prints an indented line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.line(format!("    {message}"))
    }
}
