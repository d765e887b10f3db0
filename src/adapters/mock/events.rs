//! Scripted event source for testing.

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::events::HostEvent;
use crate::traits::EventSource;

/// Mock [`EventSource`] that replays a fixed sequence of events.
///
/// Once the script is exhausted, `next_event` returns `None`, modelling a
/// host whose event stream has ended.
///
/// # Example
///
/// ```ignore
/// use viewport_reporter::adapters::mock::ScriptedEvents;
/// use viewport_reporter::events::HostEvent;
///
/// let mut events = ScriptedEvents::new(vec![
///     HostEvent::Resized { width: 800, height: 24 },
///     HostEvent::Quit,
/// ]);
/// ```
#[derive(Debug)]
pub struct ScriptedEvents {
    script: VecDeque<HostEvent>,
}

impl ScriptedEvents {
    /// Create an event source that yields `script` in order.
    pub fn new(script: Vec<HostEvent>) -> Self {
        Self {
            script: script.into(),
        }
    }

    /// Create an event source with no events at all.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl EventSource for ScriptedEvents {
    async fn next_event(&mut self) -> Option<HostEvent> {
        self.script.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_script_in_order() {
        let mut events = ScriptedEvents::new(vec![HostEvent::ContentReady, HostEvent::Quit]);
        assert_eq!(events.next_event().await, Some(HostEvent::ContentReady));
        assert_eq!(events.next_event().await, Some(HostEvent::Quit));
        assert_eq!(events.next_event().await, None);
    }

    #[tokio::test]
    async fn test_empty_script_ends_immediately() {
        let mut events = ScriptedEvents::empty();
        assert_eq!(events.next_event().await, None);
    }
}
