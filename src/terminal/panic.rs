//! Panic hook for terminal restoration.
//!
//! Raw mode left enabled after a panic makes the user's shell unusable;
//! this hook restores the terminal before the panic message prints.

use std::panic;

use super::emergency_restore;

/// Install a panic hook that restores the terminal.
///
/// Call early in main(), before creating the [`RawModeGuard`]. The hook
/// restores the terminal first, then calls the original panic hook so the
/// panic message still prints normally.
///
/// [`RawModeGuard`]: super::RawModeGuard
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
