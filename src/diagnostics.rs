//! Diagnostic sinks.
//!
//! The engine never prints directly. Every component that reports something
//! borrows a [`DiagnosticSink`] that was constructed once for the run:
//!
//! - [`Silent`]: drops everything (the default)
//! - [`StderrSink`]: colored `trace:`/`info:`/`warning:` lines on stderr (`-v`)
//! - [`RecordingSink`]: keeps diagnostics in memory for tests

use std::{cell::RefCell, fmt};

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Trace,
    Info,
    Warning,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Trace => "trace:",
            Level::Info => "info:",
            Level::Warning => "warning:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.level.label(), self.message)
    }
}

pub trait DiagnosticSink {
    fn emit(&self, diagnostic: Diagnostic);
}

/// Shorthands usable on `&dyn DiagnosticSink`.
impl dyn DiagnosticSink + '_ {
    pub fn trace(&self, message: impl Into<String>) {
        self.emit(Diagnostic {
            level: Level::Trace,
            message: message.into(),
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.emit(Diagnostic {
            level: Level::Info,
            message: message.into(),
        });
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.emit(Diagnostic {
            level: Level::Warning,
            message: message.into(),
        });
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl DiagnosticSink for Silent {
    fn emit(&self, _diagnostic: Diagnostic) {}
}

/// Writes diagnostics at or above `min_level` to stderr.
#[derive(Debug, Clone, Copy)]
pub struct StderrSink {
    pub min_level: Level,
}

impl StderrSink {
    pub fn new(min_level: Level) -> Self {
        Self { min_level }
    }
}

impl DiagnosticSink for StderrSink {
    fn emit(&self, diagnostic: Diagnostic) {
        if diagnostic.level < self.min_level {
            return;
        }
        let label = match diagnostic.level {
            Level::Trace => diagnostic.level.label().dimmed(),
            Level::Info => diagnostic.level.label().bold().cyan(),
            Level::Warning => diagnostic.level.label().bold().yellow(),
        };
        eprintln!("{} {}", label, diagnostic.message);
    }
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Messages at exactly `level`, in emission order.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .map(|d| d.message.clone())
            .collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}
