//! Lazy evaluation gate.
//!
//! # Invariants
//! - A closed gate never invokes the deferred computation.
//! - Nothing is cached; every open call pays the full cost.

use std::time::Duration;

/// Returned when the gate is closed.
pub const SKIPPED: &str = "Skipped";
/// Result text of [`simulated_expensive_operation`].
pub const EXPENSIVE_RESULT: &str = "Expensive Result Computed!";
/// Delay used by callers simulating a slow computation.
pub const DEFAULT_EXPENSIVE_DELAY: Duration = Duration::from_millis(500);

/// Runs `deferred` only when `perform` is true; otherwise returns [`SKIPPED`].
pub fn heavy_computation<F>(perform: bool, deferred: F) -> String
where
    F: FnOnce() -> String,
{
    if !perform {
        return SKIPPED.to_string();
    }
    deferred()
}

/// Blocks the calling thread for `delay`, then returns [`EXPENSIVE_RESULT`].
pub fn simulated_expensive_operation(delay: Duration) -> String {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
    EXPENSIVE_RESULT.to_string()
}
