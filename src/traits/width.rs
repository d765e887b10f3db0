//! Width accessor trait abstraction.
//!
//! Abstracts the host environment's accessor for the current width of the
//! display surface. The value is owned entirely by the host: callers read
//! it fresh on each trigger and never cache it between triggers.

use crate::error::Result;

/// Accessor for the current display-surface width.
///
/// # Example
///
/// ```ignore
/// use viewport_reporter::traits::WidthSource;
///
/// fn current<W: WidthSource>(source: &W) -> u16 {
///     source.width().unwrap_or(0)
/// }
/// ```
pub trait WidthSource: Send + Sync {
    /// Read the current width of the display surface, in host display units.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot supply a width (for example,
    /// no terminal is attached).
    fn width(&self) -> Result<u16>;
}
