//! Internal types and constants for the app state module.

use std::time::{Duration, Instant};

/// How often to drain the webview event queue.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// When the event loop should wake next: the poll tick, or an earlier
/// blank-check deadline.
pub(super) fn next_wake(now: Instant, deadline: Option<Instant>) -> Instant {
    let tick = now + POLL_INTERVAL;
    match deadline {
        Some(d) if d < tick => d,
        _ => tick,
    }
}
