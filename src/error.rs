//! Error types for viewport reporting.
//!
//! All fallible paths in the crate return [`ReporterError`] via the
//! crate-wide [`Result`] alias. The binary boundary converts these into
//! `color_eyre` reports.

use std::io;
use thiserror::Error;

/// Unified error type for viewport reporting operations.
#[derive(Debug, Error)]
pub enum ReporterError {
    /// The host's width accessor failed.
    #[error("failed to query display surface width: {0}")]
    Width(#[source] io::Error),

    /// The host could not supply a width value.
    #[error("display surface width unavailable")]
    WidthUnavailable,

    /// Writing to the diagnostic channel failed.
    #[error("failed to write to diagnostic channel: {0}")]
    Sink(#[source] io::Error),

    /// Terminal setup or teardown failed.
    #[error("terminal setup failed: {0}")]
    Terminal(#[source] io::Error),
}

/// Result type alias for viewport reporting operations.
pub type Result<T> = std::result::Result<T, ReporterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_width_error_display() {
        let err = ReporterError::Width(io::Error::new(io::ErrorKind::Other, "no tty"));
        assert!(err.to_string().contains("display surface width"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_width_unavailable_has_no_source() {
        let err = ReporterError::WidthUnavailable;
        assert_eq!(err.to_string(), "display surface width unavailable");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_sink_error_display() {
        let err = ReporterError::Sink(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(err.to_string().contains("diagnostic channel"));
    }
}
