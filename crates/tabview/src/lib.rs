//! tabview — reusable tabular data-view engine for dashboard screens.
//!
//! ## Crate layout
//! - `core`: values, rows, filter/sort/paginate pipeline, access gating,
//!   selection tracking, session guards, and the view orchestrator.
//!
//! The `prelude` module mirrors the surface a screen implementation uses.

pub use tabview_core as core;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use tabview_core::prelude::*;
    pub use tabview_core::{DEFAULT_FREE_TIER_PAGES, DEFAULT_PAGE_SIZE};
}
