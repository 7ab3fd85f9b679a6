//! Module: page
//! Responsibility: page-state math and slicing of the filtered/sorted set,
//! including the single synthetic gated page.
//! Does not own: access-tier semantics (see `access`) or row content.
//! Boundary: out-of-range requests clamp; only a zero page size errors.

#[cfg(test)]
mod tests;

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

///
/// PageState
///
/// `(index, size)`, 1-indexed. Size is fixed per view; constructing with a
/// zero size is a contract violation, not a recoverable case.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageState {
    index: usize,
    size: usize,
}

impl PageState {
    pub fn new(index: usize, size: usize) -> Result<Self, EngineError> {
        if size == 0 {
            return Err(EngineError::page_invariant("page size must be non-zero"));
        }

        Ok(Self {
            index: index.max(1),
            size,
        })
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Clamp the index into `[1, total_pages]`.
    ///
    /// A zero-page result set still clamps to page 1 (a valid empty page).
    #[must_use]
    pub const fn clamped(self, total_pages: usize) -> Self {
        let upper = if total_pages == 0 { 1 } else { total_pages };
        let index = if self.index > upper { upper } else { self.index };

        Self {
            index,
            size: self.size,
        }
    }

    #[must_use]
    pub const fn with_index(self, index: usize) -> Self {
        Self {
            index: if index == 0 { 1 } else { index },
            size: self.size,
        }
    }
}

///
/// GateConfig
///
/// When enabled, exactly one synthetic page is appended after the natural
/// pages; requesting it yields a fixed-size placeholder batch instead of
/// real rows.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GateConfig {
    pub enabled: bool,
    pub placeholder_rows: usize,
}

impl GateConfig {
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            placeholder_rows: 0,
        }
    }

    #[must_use]
    pub const fn gated(placeholder_rows: usize) -> Self {
        Self {
            enabled: true,
            placeholder_rows,
        }
    }

    /// Number of synthetic pages appended after the natural pages.
    #[must_use]
    pub const fn appended_pages(&self) -> usize {
        if self.enabled { 1 } else { 0 }
    }
}

///
/// PageBody
///
/// Natural pages carry real rows; the gated page carries only a
/// placeholder row count for the presentation layer to render.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PageBody<R> {
    Rows(Vec<R>),
    Placeholder { rows: usize },
}

impl<R> PageBody<R> {
    #[must_use]
    pub fn rows(&self) -> &[R] {
        match self {
            Self::Rows(rows) => rows,
            Self::Placeholder { .. } => &[],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            Self::Placeholder { rows } => *rows,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

///
/// PageView
///
/// One rendered page: body, effective (clamped) index, and page counts.
/// An empty natural page is distinct from the gated page.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PageView<R> {
    pub body: PageBody<R>,
    pub index: usize,
    pub is_gated: bool,
    pub natural_pages: usize,
    pub total_pages: usize,
}

/// Number of natural (real-data) pages.
///
/// CONTRACT: `page_size` must be non-zero; `PageState` guarantees this.
#[must_use]
pub const fn natural_pages(row_count: usize, page_size: usize) -> usize {
    row_count.div_ceil(page_size)
}

/// Slice one page out of the filtered/sorted set.
///
/// The requested index is clamped into the valid range; the effective
/// index is reported on the returned view. Out-of-range input is a caller
/// bug we absorb, never an error.
#[must_use]
pub fn paginate<R: Clone>(rows: &[R], state: PageState, gate: GateConfig) -> PageView<R> {
    let natural = natural_pages(rows.len(), state.size());
    let total = natural + gate.appended_pages();

    let state = state.clamped(total);
    let index = state.index();

    let is_gated = gate.enabled && index > natural;
    let body = if is_gated {
        PageBody::Placeholder {
            rows: gate.placeholder_rows,
        }
    } else {
        let start = (index - 1) * state.size();
        let end = (start + state.size()).min(rows.len());
        let slice = if start >= rows.len() {
            &[]
        } else {
            &rows[start..end]
        };

        PageBody::Rows(slice.to_vec())
    };

    PageView {
        body,
        index,
        is_gated,
        natural_pages: natural,
        total_pages: total,
    }
}
