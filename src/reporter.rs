//! The viewport reporter.
//!
//! A stateless handler: on each invocation it reads the current
//! display-surface width from a [`WidthSource`] and writes one labelled
//! line to a [`DiagnosticSink`]. The width is read inside the handler, at
//! the moment of the triggering event, never taken from the event payload
//! and never cached between invocations.

use tracing::trace;

use crate::error::Result;
use crate::traits::{DiagnosticSink, WidthSource};

/// Fixed label prefixing every reported line.
pub const LABEL: &str = "Viewport width";

/// Stateless handler that reports the current viewport width.
///
/// # Example
///
/// ```ignore
/// use viewport_reporter::adapters::{CrosstermWidthSource, StderrSink};
/// use viewport_reporter::reporter::ViewportReporter;
///
/// let reporter = ViewportReporter::new();
/// let mut sink = StderrSink::new();
/// reporter.report(&CrosstermWidthSource, &mut sink)?;
/// # Ok::<(), viewport_reporter::error::ReporterError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewportReporter;

impl ViewportReporter {
    /// Create a new reporter.
    pub fn new() -> Self {
        Self
    }

    /// Read the current width and write one `Viewport width: <w>` line.
    ///
    /// # Errors
    ///
    /// Propagates failures from the width accessor or the sink without
    /// retrying; each invocation is independent.
    pub fn report<W, S>(&self, source: &W, sink: &mut S) -> Result<()>
    where
        W: WidthSource + ?Sized,
        S: DiagnosticSink + ?Sized,
    {
        let width = source.width()?;
        trace!(width, "reporting viewport width");
        sink.write_line(&format_line(width))
    }
}

/// Format the fixed label/value diagnostic line for a width.
pub fn format_line(width: u16) -> String {
    format!("{}: {}", LABEL, width)
}
