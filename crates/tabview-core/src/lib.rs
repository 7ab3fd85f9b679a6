//! Core runtime for tabview: values, rows, the filter/sort/paginate
//! pipeline, access gating, selection tracking, session guards, and the
//! per-screen view orchestrator exported via the `prelude`.
#![warn(unreachable_pub)]

pub mod access;
pub mod error;
pub mod filter;
pub mod obs;
pub mod page;
pub mod record;
pub mod selection;
pub mod session;
pub mod sort;
pub mod task;
pub mod value;
pub mod view;

///
/// CONSTANTS
///

/// Default rows per page across dashboard screens.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default free-tier page threshold: pages below this index are fully
/// visible and downloadable.
pub const DEFAULT_FREE_TIER_PAGES: usize = 3;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, metrics, or store seams are re-exported here.
///

pub mod prelude {
    pub use crate::{
        access::AccessTier,
        filter::FilterSpec,
        page::{GateConfig, PageBody, PageState},
        record::{FieldPresence, Record, TableRow},
        selection::{SelectionIndicator, SelectionSet},
        session::{GuardDecision, RouteGate, RouteGuard, SessionState},
        sort::{SortDirection, SortKey},
        value::Value,
        view::{Frame, TableView, ViewSchema},
    };
}
