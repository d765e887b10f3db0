//! Diagnostic channel backed by stderr.

use std::io::{self, Write};

use crate::error::{ReporterError, Result};
use crate::traits::DiagnosticSink;

/// [`DiagnosticSink`] that writes lines to stderr.
///
/// Stderr is the developer-facing channel for a CLI process; stdout stays
/// untouched. Each line is flushed immediately so an observer sees reports
/// as they happen, not when the stream buffer fills.
#[derive(Debug, Default)]
pub struct StderrSink;

impl StderrSink {
    /// Create a new stderr-backed sink.
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for StderrSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{}", line).map_err(ReporterError::Sink)?;
        stderr.flush().map_err(ReporterError::Sink)
    }
}
