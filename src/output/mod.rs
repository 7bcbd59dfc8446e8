//! User-facing output for the CLI.
//!
//! A [`Reporter`] is created once by `main` and handed to every command.
//! Routine messages are dimmed, warnings and errors bold, and everything
//! except listings goes to stderr.

use colored::Colorize;
use std::fmt::Display;

/// Verbosity level for output messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Suppress informational messages, show only warnings and errors.
    Quiet,
    /// Default verbosity level, show all standard messages.
    #[default]
    Normal,
    /// Show verbose messages in addition to standard output.
    Verbose,
}

impl Verbosity {
    /// Pick a level from the `--quiet` / `--verbose` flags; quiet wins.
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }
}

/// Prints command results to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbosity: Verbosity,
}

impl Reporter {
    /// Create a reporter with the given verbosity.
    #[must_use]
    pub const fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Current verbosity.
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    /// Prints a success message in green (respects quiet mode).
    pub fn success(&self, message: &str) {
        if self.is_quiet() {
            return;
        }
        eprintln!("{} {}", "✓".green().bold(), message);
    }

    /// Prints an error message in bold red (always shown).
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red().bold());
    }

    /// Prints a warning message in bold yellow (always shown).
    pub fn warning(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow().bold());
    }

    /// Prints an informational message in dimmed color (respects quiet mode).
    pub fn info(&self, message: &str) {
        if self.is_quiet() {
            return;
        }
        eprintln!("{}", message.dimmed());
    }

    /// Prints a verbose message (only in verbose mode).
    pub fn verbose(&self, message: &str) {
        if self.verbosity != Verbosity::Verbose {
            return;
        }
        eprintln!("{}", message.dimmed());
    }

    /// Prints a git-style action line: dimmed verb, plain subject.
    pub fn action(&self, verb: &str, subject: impl Display) {
        if self.is_quiet() {
            return;
        }
        eprintln!("  {} {}", verb.dimmed().bold(), subject);
    }

    /// Prints a group heading for listings (stdout, never suppressed).
    pub fn heading(&self, title: &str) {
        println!("{}:", title.bold());
    }

    /// Prints an indented listing line (stdout, never suppressed).
    pub fn item(&self, depth: usize, text: impl Display) {
        println!("{:indent$}{}", "", text, indent = depth * 2);
    }
}
