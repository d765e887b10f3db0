//! Trigger events from the terminal's event stream.

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tracing::{trace, warn};

use crate::events::HostEvent;
use crate::traits::EventSource;

/// [`EventSource`] backed by crossterm's async [`EventStream`].
///
/// Resize notifications become [`HostEvent::Resized`]. Raw mode swallows
/// the usual signal handling, so quit detection also lives here: `q`,
/// `Esc`, and `Ctrl+C` key presses become [`HostEvent::Quit`]. Everything
/// else the terminal delivers (other keys, mouse, focus, paste) is host
/// noise and is filtered out.
pub struct CrosstermEventSource {
    stream: EventStream,
}

impl CrosstermEventSource {
    /// Create a new event source over the terminal's event stream.
    pub fn new() -> Self {
        Self {
            stream: EventStream::new(),
        }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[async_trait::async_trait]
impl EventSource for CrosstermEventSource {
    async fn next_event(&mut self) -> Option<HostEvent> {
        while let Some(result) = self.stream.next().await {
            match result {
                Ok(Event::Resize(width, height)) => {
                    return Some(HostEvent::Resized { width, height });
                }
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if is_quit_key(&key) {
                        return Some(HostEvent::Quit);
                    }
                    trace!(code = ?key.code, "ignoring key event");
                }
                Ok(other) => {
                    trace!(event = ?other, "ignoring host event");
                }
                Err(err) => {
                    // The terminal event stream is not recoverable once it
                    // starts returning errors.
                    warn!(error = %err, "terminal event stream failed");
                    return None;
                }
            }
        }
        None
    }
}
