//! Event source trait abstraction.
//!
//! Abstracts the host environment's event-subscription mechanism. The run
//! loop pulls trigger events from an [`EventSource`] one at a time; the
//! source is responsible for filtering host noise (keys that are not quit
//! bindings, mouse movement, focus changes) down to [`HostEvent`]s.

use async_trait::async_trait;

use crate::events::HostEvent;

/// An asynchronous stream of host trigger events.
///
/// Returning `None` means the host's event stream has ended and no further
/// triggers will ever be delivered.
#[async_trait]
pub trait EventSource: Send {
    /// Wait for the next trigger event from the host.
    async fn next_event(&mut self) -> Option<HostEvent>;
}
