//! Host trigger events consumed by the run loop.
//!
//! These are the events the host environment delivers to the reporter:
//! the one-shot readiness trigger at startup, resize notifications for the
//! lifetime of the process, and the quit request that ends the loop.

/// A trigger event from the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The display surface is ready. Synthesized exactly once, at startup.
    ContentReady,
    /// The display surface was resized.
    ///
    /// The dimensions carried here are informational only; the reporter
    /// re-queries the width accessor when it handles the event, so the
    /// reported value is always the one in effect at handling time.
    Resized { width: u16, height: u16 },
    /// The user asked to quit.
    Quit,
}

impl HostEvent {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            HostEvent::ContentReady => "content-ready",
            HostEvent::Resized { .. } => "resize",
            HostEvent::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(HostEvent::ContentReady.name(), "content-ready");
        assert_eq!(
            HostEvent::Resized {
                width: 80,
                height: 24
            }
            .name(),
            "resize"
        );
        assert_eq!(HostEvent::Quit.name(), "quit");
    }
}
