//! The run loop connecting host events to the reporter.
//!
//! Pulls events from an [`EventSource`], hands each trigger to the
//! stateless [`ViewportReporter`], and stops on quit or stream end. The loop
//! synthesizes the one-shot content-ready trigger itself before consuming
//! host events, so the startup report happens exactly once regardless of
//! what the host delivers.

use tracing::{debug, info, trace};

use crate::error::Result;
use crate::events::HostEvent;
use crate::reporter::ViewportReporter;
use crate::traits::{DiagnosticSink, EventSource, WidthSource};

/// Run the viewport reporter until quit or event-stream end.
///
/// Emits one report for the synthetic content-ready trigger, then one
/// report per resize event, in arrival order. The loop is single-consumer,
/// so triggers are naturally serialized; each invocation of the handler
/// completes before the next event is pulled.
///
/// # Errors
///
/// Returns the first error from the width accessor or the sink; the loop
/// does not retry.
pub async fn run_reporter<E, W, S>(events: &mut E, source: &W, sink: &mut S) -> Result<()>
where
    E: EventSource,
    W: WidthSource + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let reporter = ViewportReporter::new();

    // Registered once, at process start: the content-ready trigger fires
    // exactly once per run.
    reporter.report(source, sink)?;
    info!("viewport reporter attached");

    while let Some(event) = events.next_event().await {
        trace!(event = event.name(), "host trigger");
        match event {
            HostEvent::Resized { width, height } => {
                debug!(width, height, "resize event");
                reporter.report(source, sink)?;
            }
            // A host re-delivering readiness is treated like any trigger:
            // read fresh, report once.
            HostEvent::ContentReady => {
                debug!("content-ready event");
                reporter.report(source, sink)?;
            }
            HostEvent::Quit => {
                info!("quit requested");
                break;
            }
        }
    }

    info!("viewport reporter detached");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MemorySink, MockWidthSource, ScriptedEvents};

    #[tokio::test]
    async fn test_startup_report_fires_once_with_no_events() {
        let mut events = ScriptedEvents::empty();
        let source = MockWidthSource::new(1024);
        let mut sink = MemorySink::new();

        run_reporter(&mut events, &source, &mut sink)
            .await
            .expect("run failed");

        assert_eq!(sink.lines(), &["Viewport width: 1024"]);
    }

    #[tokio::test]
    async fn test_quit_stops_the_loop() {
        let mut events = ScriptedEvents::new(vec![
            HostEvent::Quit,
            HostEvent::Resized {
                width: 200,
                height: 50,
            },
        ]);
        let source = MockWidthSource::new(80);
        let mut sink = MemorySink::new();

        run_reporter(&mut events, &source, &mut sink)
            .await
            .expect("run failed");

        // Only the startup report; the resize after quit is never handled.
        assert_eq!(sink.lines().len(), 1);
    }

    #[tokio::test]
    async fn test_startup_width_failure_propagates() {
        let mut events = ScriptedEvents::empty();
        let source = MockWidthSource::failing();
        let mut sink = MemorySink::new();

        assert!(run_reporter(&mut events, &source, &mut sink)
            .await
            .is_err());
    }
}
