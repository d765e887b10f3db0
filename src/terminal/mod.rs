//! Terminal lifecycle management with RAII pattern for automatic cleanup.
//!
//! Raw mode stays enabled for the lifetime of the process so crossterm
//! delivers resize and key events; the guard restores the terminal when the
//! process exits, whether normally or due to a panic. Nothing is drawn, so
//! there is no alternate screen or mouse capture to manage.
//!
//! # Example
//!
//! ```no_run
//! use viewport_reporter::terminal::RawModeGuard;
//!
//! fn main() -> color_eyre::Result<()> {
//!     // Raw mode is automatically restored when the guard is dropped
//!     let _guard = RawModeGuard::new()?;
//!
//!     // ... run the reporter ...
//!
//!     Ok(())
//! }
//! ```

mod panic;

pub use panic::setup_panic_hook;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::error::{ReporterError, Result};

/// RAII guard that enables raw mode and restores it on drop.
pub struct RawModeGuard {
    /// Whether cleanup has already been performed
    cleaned_up: bool,
}

impl RawModeGuard {
    /// Enable raw mode and create the guard.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled (for example, no
    /// terminal is attached).
    pub fn new() -> Result<Self> {
        enable_raw_mode().map_err(ReporterError::Terminal)?;
        Ok(Self { cleaned_up: false })
    }

    /// Manually restore the terminal.
    ///
    /// This is called by Drop, but can also be called manually if needed.
    /// Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        let _ = disable_raw_mode();
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Restore the terminal to a usable state after a panic or error.
///
/// Ignores all errors; there is nothing useful to do with them on this
/// path.
pub fn emergency_restore() {
    let _ = disable_raw_mode();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emergency_restore_does_not_panic() {
        // Safe to call even without a terminal attached
        emergency_restore();
    }
}
