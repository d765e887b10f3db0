//! Mock width accessor for testing.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{ReporterError, Result};
use crate::traits::WidthSource;

/// Mock [`WidthSource`] with a fixed or scripted width.
///
/// With a sequence, each call to `width()` consumes the next value; the
/// final value repeats once the script runs out. This lets a test model a
/// display surface whose width changes between triggers and verify that the
/// reporter reads the accessor at handling time rather than reusing a stale
/// or payload-carried value.
///
/// # Example
///
/// ```ignore
/// use viewport_reporter::adapters::mock::MockWidthSource;
/// use viewport_reporter::traits::WidthSource;
///
/// let source = MockWidthSource::with_sequence(&[600, 1200]);
/// assert_eq!(source.width().unwrap(), 600);
/// assert_eq!(source.width().unwrap(), 1200);
/// assert_eq!(source.width().unwrap(), 1200); // last value repeats
/// ```
pub struct MockWidthSource {
    widths: Mutex<VecDeque<u16>>,
    fail: bool,
}

impl MockWidthSource {
    /// Create a mock that always returns `width`.
    pub fn new(width: u16) -> Self {
        Self {
            widths: Mutex::new(VecDeque::from([width])),
            fail: false,
        }
    }

    /// Create a mock that returns the given widths in order, repeating the
    /// last one once the sequence is exhausted.
    pub fn with_sequence(widths: &[u16]) -> Self {
        Self {
            widths: Mutex::new(widths.iter().copied().collect()),
            fail: false,
        }
    }

    /// Create a mock whose accessor always fails.
    pub fn failing() -> Self {
        Self {
            widths: Mutex::new(VecDeque::new()),
            fail: true,
        }
    }
}

impl WidthSource for MockWidthSource {
    fn width(&self) -> Result<u16> {
        if self.fail {
            return Err(ReporterError::WidthUnavailable);
        }
        let mut widths = self.widths.lock().unwrap();
        if widths.len() > 1 {
            Ok(widths.pop_front().unwrap())
        } else {
            widths.front().copied().ok_or(ReporterError::WidthUnavailable)
        }
    }
}
