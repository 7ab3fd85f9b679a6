//! Module: obs
//! Responsibility: view-local and guard-local counters and their
//! point-in-time snapshots.
//! Does not own: any engine semantics; counters are advisory only.

use serde::Serialize;

///
/// ViewMetrics
///
/// Monotonic counters owned by a view instance. Read through
/// [`MetricsSnapshot`]; never reset within a view lifetime.
///

#[derive(Clone, Debug, Default)]
pub struct ViewMetrics {
    filters_applied: u64,
    sorts_applied: u64,
    pages_served: u64,
    gated_page_hits: u64,
}

impl ViewMetrics {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            filters_applied: 0,
            sorts_applied: 0,
            pages_served: 0,
            gated_page_hits: 0,
        }
    }

    pub(crate) const fn record_filter(&mut self) {
        self.filters_applied += 1;
    }

    pub(crate) const fn record_sort(&mut self) {
        self.sorts_applied += 1;
    }

    pub(crate) const fn record_page(&mut self, gated: bool) {
        self.pages_served += 1;
        if gated {
            self.gated_page_hits += 1;
        }
    }

    /// Build a point-in-time report.
    #[must_use]
    pub const fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            filters_applied: self.filters_applied,
            sorts_applied: self.sorts_applied,
            pages_served: self.pages_served,
            gated_page_hits: self.gated_page_hits,
        }
    }
}

///
/// MetricsSnapshot
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub filters_applied: u64,
    pub sorts_applied: u64,
    pub pages_served: u64,
    pub gated_page_hits: u64,
}

///
/// GuardMetrics
///
/// Monotonic counter owned by a route guard, which sits outside the view
/// pipeline and so does not report through [`ViewMetrics`].
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GuardMetrics {
    redirects: u64,
}

impl GuardMetrics {
    #[must_use]
    pub const fn new() -> Self {
        Self { redirects: 0 }
    }

    pub(crate) const fn record_redirect(&mut self) {
        self.redirects += 1;
    }

    /// Redirect decisions issued since the guard was created.
    #[must_use]
    pub const fn redirects(&self) -> u64 {
        self.redirects
    }
}
