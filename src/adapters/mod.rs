//! Concrete implementations of trait abstractions.
//!
//! This module provides production-ready adapters over the real host
//! environment, implementing the traits defined in `crate::traits`.
//!
//! # Adapters
//!
//! - [`CrosstermWidthSource`] - width accessor using crossterm's size query
//! - [`StderrSink`] - diagnostic channel writing to stderr
//! - [`CrosstermEventSource`] - trigger events from crossterm's event stream
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for all adapters:
//! - [`mock::MockWidthSource`] - scripted width values
//! - [`mock::MemorySink`] - records written lines in memory
//! - [`mock::ScriptedEvents`] - replays a scripted event sequence

pub mod crossterm_events;
pub mod crossterm_width;
pub mod mock;
pub mod stderr_sink;

pub use crossterm_events::CrosstermEventSource;
pub use crossterm_width::CrosstermWidthSource;
pub use mock::{MemorySink, MockWidthSource, ScriptedEvents};
pub use stderr_sink::StderrSink;
