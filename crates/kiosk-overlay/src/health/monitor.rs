//! Per-navigation health state machine.
//!
//! `Idle → Loading → (Finished | Failed)`, restarting at `Loading` on every
//! navigation. Delayed checks are plain deadlines polled by the event loop;
//! each carries the navigation generation it was scheduled for, so checks
//! and inspection results from an earlier navigation can never toggle the
//! overlay for a newer one.

use std::time::{Duration, Instant};

use kiosk_config::schema::HealthConfig;
use tracing::{debug, info, warn};

use super::classify::{classify, BlankThresholds, Verdict};
use super::report::PageReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No navigation has happened yet.
    Idle,
    Loading,
    Finished,
    Failed,
}

/// A due check. The caller runs the inspection script and reports back
/// through [`HealthMonitor::on_inspection`] with the same generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckTicket {
    pub generation: u64,
    pub index: usize,
}

#[derive(Debug, Clone, Copy)]
struct PendingCheck {
    ticket: CheckTicket,
    due: Instant,
}

#[derive(Debug)]
pub struct HealthMonitor {
    enabled: bool,
    thresholds: BlankThresholds,
    delays: Vec<Duration>,
    state: LoadState,
    generation: u64,
    pending: Vec<PendingCheck>,
    overlay_visible: bool,
}

impl HealthMonitor {
    pub fn new(enabled: bool, thresholds: BlankThresholds, delays: Vec<Duration>) -> Self {
        Self {
            enabled,
            thresholds,
            delays,
            state: LoadState::Idle,
            generation: 0,
            pending: Vec::new(),
            overlay_visible: false,
        }
    }

    pub fn from_config(config: &HealthConfig) -> Self {
        Self::new(
            config.enabled,
            BlankThresholds::from(config),
            config
                .check_delays_ms
                .iter()
                .copied()
                .map(Duration::from_millis)
                .collect(),
        )
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn pending_checks(&self) -> usize {
        self.pending.len()
    }

    /// Navigation started: cancel outstanding checks and hide the overlay.
    pub fn on_load_started(&mut self, url: &str) {
        self.generation += 1;
        let canceled = self.pending.len();
        self.pending.clear();
        self.state = LoadState::Loading;
        self.overlay_visible = false;
        info!(generation = self.generation, url = %url, canceled, "did-start-loading");
    }

    /// Navigation finished: schedule the delayed blank checks.
    pub fn on_load_finished(&mut self, url: &str, now: Instant) {
        if self.state == LoadState::Failed {
            // The error page itself finished loading; keep the failure.
            debug!(generation = self.generation, url = %url, "finish after failure ignored");
            return;
        }
        self.state = LoadState::Finished;
        info!(generation = self.generation, url = %url, "did-finish-load");

        if !self.enabled {
            return;
        }
        let generation = self.generation;
        self.pending = self
            .delays
            .iter()
            .enumerate()
            .map(|(index, delay)| PendingCheck {
                ticket: CheckTicket { generation, index },
                due: now + *delay,
            })
            .collect();
    }

    /// Main-frame load failed: show the overlay right away.
    pub fn on_load_failed(&mut self, url: &str, reason: &str) {
        self.pending.clear();
        self.state = LoadState::Failed;
        self.overlay_visible = true;
        warn!(generation = self.generation, url = %url, reason = %reason, "did-fail-load");
    }

    /// Earliest pending deadline, for scheduling the next wake-up.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|c| c.due).min()
    }

    /// Remove and return every check whose deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Vec<CheckTicket> {
        let mut due = Vec::new();
        self.pending.retain(|c| {
            if c.due <= now {
                due.push(c.ticket);
                false
            } else {
                true
            }
        });
        due
    }

    /// Drop every scheduled check and invalidate results still in flight.
    /// Used at shutdown; the load state is left as is.
    pub fn cancel_pending(&mut self) {
        self.generation += 1;
        self.pending.clear();
    }

    /// Apply an inspection result. `raw` is `None` when the script could
    /// not be evaluated. Returns the verdict, or `None` if the result was
    /// stale or arrived after a failure.
    pub fn on_inspection(&mut self, ticket: CheckTicket, raw: Option<&str>) -> Option<Verdict> {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "stale blank-check result dropped"
            );
            return None;
        }
        if self.state != LoadState::Finished {
            return None;
        }

        let report = raw.and_then(PageReport::parse);
        let verdict = classify(report.as_ref(), self.thresholds);
        info!(
            generation = ticket.generation,
            check = ticket.index,
            ?verdict,
            text_length = report.as_ref().map(|r| r.text_length),
            markup_length = report.as_ref().map(|r| r.markup_length),
            "blank-check"
        );

        if verdict == Verdict::ErrorDocument {
            let href = report.and_then(|r| r.href).unwrap_or_default();
            self.on_load_failed(&href, "browser error document");
        } else {
            self.overlay_visible = verdict.wants_overlay();
        }
        Some(verdict)
    }
}
