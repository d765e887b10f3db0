use viewport_reporter::adapters::{CrosstermEventSource, CrosstermWidthSource, StderrSink};
use viewport_reporter::runner::run_reporter;
use viewport_reporter::terminal::{setup_panic_hook, RawModeGuard};

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

/// Initialize tracing with an env-controlled filter.
///
/// Lifecycle diagnostics go to stderr, sharing the diagnostic channel with
/// the report lines without ever touching stdout. The report lines
/// themselves are written directly by the sink so their format never gains
/// subscriber decoration.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    // Install panic hook before touching terminal state
    setup_panic_hook();
    let _guard = RawModeGuard::new()?;

    let mut events = CrosstermEventSource::new();
    let source = CrosstermWidthSource::new();
    let mut sink = StderrSink::new();

    run_reporter(&mut events, &source, &mut sink).await?;

    Ok(())
}
