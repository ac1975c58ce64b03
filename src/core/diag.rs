//! Diagnostics on stderr
//!
//! stdout is reserved for the machine-readable report, so every human-facing
//! line goes through here and respects --quiet and --verbose. Colour is
//! switched off process-wide by the CLI for --no-color.

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Verbosity::Quiet,
            (false, true) => Verbosity::Verbose,
            (false, false) => Verbosity::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostics {
    verbosity: Verbosity,
}

impl Diagnostics {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Diagnostics that print nothing. Backs the option-less
    /// [`transform`](crate::flows::rewrite::transform) entry point.
    pub fn silent() -> Self {
        Self {
            verbosity: Verbosity::Quiet,
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    /// Phase progress, only with --verbose
    pub fn step(&self, message: impl AsRef<str>) {
        if self.is_verbose() {
            eprintln!("{} {}", "›".cyan(), message.as_ref());
        }
    }

    /// Warnings, suppressed by --quiet
    pub fn warn(&self, message: impl AsRef<str>) {
        if self.verbosity != Verbosity::Quiet {
            eprintln!("{} {}", "warning:".yellow().bold(), message.as_ref());
        }
    }

    /// Final line of a verbose run
    pub fn done(&self, message: impl AsRef<str>) {
        if self.is_verbose() {
            eprintln!("{} {}", "✓".green().bold(), message.as_ref());
        }
    }
}
