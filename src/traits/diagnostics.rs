//! Diagnostic channel trait abstraction.
//!
//! The diagnostic channel is a developer-facing output stream, distinct
//! from any user-facing surface. In production it is stderr; tests use an
//! in-memory sink that records every line.

use crate::error::Result;

/// A line-oriented diagnostic output channel.
pub trait DiagnosticSink: Send {
    /// Write one line to the channel.
    ///
    /// The line is written verbatim, followed by a newline, and flushed so
    /// an observer of the channel sees it immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying write fails. The reporter does
    /// not recover from sink failures; the error propagates to the caller.
    fn write_line(&mut self, line: &str) -> Result<()>;
}
