//! Mock implementations for testing.
//!
//! This module provides mock implementations of all trait abstractions,
//! enabling unit and integration tests without a real terminal attached.
//!
//! # Available Mocks
//!
//! - [`MockWidthSource`] - width accessor with a fixed or scripted value
//! - [`MemorySink`] - diagnostic channel that records lines in memory
//! - [`ScriptedEvents`] - event source that replays a fixed sequence

pub mod events;
pub mod sink;
pub mod width;

pub use events::ScriptedEvents;
pub use sink::MemorySink;
pub use width::MockWidthSource;
