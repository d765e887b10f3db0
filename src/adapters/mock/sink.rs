//! Mock diagnostic sink for testing.

use std::io;

use crate::error::{ReporterError, Result};
use crate::traits::DiagnosticSink;

/// Mock [`DiagnosticSink`] that records every written line in memory.
///
/// Tests drive the reporter or the run loop with this sink and then assert
/// on the exact lines received, in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Vec<String>,
    fail: bool,
}

impl MemorySink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink whose writes always fail.
    pub fn failing() -> Self {
        Self {
            lines: Vec::new(),
            fail: true,
        }
    }

    /// The lines written so far, in write order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl DiagnosticSink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        if self.fail {
            return Err(ReporterError::Sink(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "mock sink failure",
            )));
        }
        self.lines.push(line.to_string());
        Ok(())
    }
}
