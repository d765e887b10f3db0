//! Trait abstractions for dependency injection and testability.
//!
//! This module provides trait-based abstractions for the three host
//! interfaces the reporter touches, enabling dependency injection,
//! mocking, and better testability.
//!
//! # Traits
//!
//! - [`WidthSource`] - the host's accessor for the current display-surface width
//! - [`DiagnosticSink`] - the diagnostic output channel
//! - [`EventSource`] - the host's event-subscription mechanism

pub mod diagnostics;
pub mod events;
pub mod width;

pub use diagnostics::DiagnosticSink;
pub use events::EventSource;
pub use width::WidthSource;
