//! Viewport Reporter - reports the terminal viewport width on startup and resize
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod error;
pub mod events;
pub mod reporter;
pub mod runner;
pub mod terminal;
pub mod traits;
