//! Width accessor backed by the terminal.

use crate::error::{ReporterError, Result};
use crate::traits::WidthSource;

/// [`WidthSource`] that queries the terminal size via crossterm.
///
/// The width unit is terminal columns; the terminal owns the value and
/// this adapter never caches it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermWidthSource;

impl CrosstermWidthSource {
    /// Create a new terminal-backed width source.
    pub fn new() -> Self {
        Self
    }
}

impl WidthSource for CrosstermWidthSource {
    fn width(&self) -> Result<u16> {
        let (columns, _rows) = crossterm::terminal::size().map_err(ReporterError::Width)?;
        Ok(columns)
    }
}
