//! Page-load health monitoring.
//!
//! A finished load is not proof the page rendered: the remote app sometimes
//! completes navigation with an empty white document. After each finished
//! load the monitor schedules a couple of delayed inspections and shows the
//! reload overlay only when the page still looks blank.

mod classify;
mod monitor;
mod report;

#[cfg(test)]
mod tests;

pub use classify::{classify, is_error_document, BlankThresholds, Verdict};
pub use monitor::{CheckTicket, HealthMonitor, LoadState};
pub use report::{PageReport, INSPECT_SCRIPT};
