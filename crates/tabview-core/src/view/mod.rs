//! Module: view
//! Responsibility: per-screen orchestration of the full pipeline:
//! filter -> sort -> clamp -> paginate, plus selection and metrics.
//! Does not own: rendering; `Frame` is pure data for a presentation layer.
//! Boundary: every mutation re-runs the pipeline synchronously against the
//! full unfiltered record set before the next input is accepted.


use crate::{
    DEFAULT_FREE_TIER_PAGES, DEFAULT_PAGE_SIZE,
    access::AccessTier,
    error::EngineError,
    filter::{self, FilterSpec},
    obs::{MetricsSnapshot, ViewMetrics},
    page::{self, GateConfig, PageBody, PageState},
    record::TableRow,
    selection::{SelectionIndicator, SelectionSet},
    sort::{self, SortKey, SortState},
};

///
/// ViewSchema
///
/// Screen-specific configuration: which fields are searchable, which field
/// is the primary ranking column, page sizing, and gating. One schema per
/// dashboard screen; the engine itself is screen-agnostic.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ViewSchema {
    pub page_size: usize,
    pub free_pages: usize,
    pub gate: GateConfig,
    pub ranking_field: Option<String>,
    pub searchable_fields: Vec<String>,
    /// Declared field names; constraints on anything else are pruned.
    /// Empty means "accept any field".
    pub known_fields: Vec<String>,
}

impl Default for ViewSchema {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            free_pages: DEFAULT_FREE_TIER_PAGES,
            gate: GateConfig::disabled(),
            ranking_field: None,
            searchable_fields: Vec::new(),
            known_fields: Vec::new(),
        }
    }
}

impl ViewSchema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub const fn with_free_pages(mut self, free_pages: usize) -> Self {
        self.free_pages = free_pages;
        self
    }

    #[must_use]
    pub const fn with_gate(mut self, gate: GateConfig) -> Self {
        self.gate = gate;
        self
    }

    #[must_use]
    pub fn with_ranking_field(mut self, field: impl Into<String>) -> Self {
        self.ranking_field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_searchable_fields(
        mut self,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.searchable_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_known_fields(
        mut self,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.known_fields = fields.into_iter().map(Into::into).collect();
        self
    }
}

///
/// Frame
///
/// One render of the view: the visible slice (or placeholder count),
/// pagination metadata, sort indicator, access tier, and selection state.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Frame<R> {
    pub body: PageBody<R>,
    pub page_index: usize,
    pub natural_pages: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub is_gated: bool,
    pub tier: AccessTier,
    pub can_download: bool,
    pub can_select: bool,
    pub sort_key: Option<SortKey>,
    pub selection_indicator: SelectionIndicator,
    pub selected_count: usize,
}

impl<R> Frame<R> {
    /// "No results" is a valid empty natural page, distinct from the
    /// locked synthetic page.
    #[must_use]
    pub fn is_no_results(&self) -> bool {
        !self.is_gated && self.body.is_empty()
    }
}

///
/// TableView
///
/// Owns one screen's rows and all mutable view state. Rows flow
/// unidirectionally: raw rows -> filter -> sort -> paginate; the selection
/// tracker observes the visible page's ids.
///

#[derive(Clone, Debug)]
pub struct TableView<R: TableRow + Clone> {
    schema: ViewSchema,
    rows: Vec<R>,
    filter: FilterSpec,
    sort: SortState,
    page: PageState,
    selection: SelectionSet,
    metrics: ViewMetrics,
    // filtered + sorted snapshot, rebuilt on every mutation
    snapshot: Vec<R>,
}

impl<R: TableRow + Clone> TableView<R> {
    /// Mount a view over a wholesale record set.
    pub fn new(schema: ViewSchema, rows: Vec<R>) -> Result<Self, EngineError> {
        if schema.page_size == 0 {
            return Err(EngineError::view_invariant("schema page size must be non-zero"));
        }

        let page = PageState::new(1, schema.page_size)?;

        let mut view = Self {
            schema,
            rows,
            filter: FilterSpec::new(),
            sort: SortState::new(),
            page,
            selection: SelectionSet::new(),
            metrics: ViewMetrics::new(),
            snapshot: Vec::new(),
        };
        view.recompute(false);

        Ok(view)
    }

    // ------------------------------------------------------------------
    // State inspection
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn schema(&self) -> &ViewSchema {
        &self.schema
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    #[must_use]
    pub const fn sort_key(&self) -> Option<&SortKey> {
        self.sort.key()
    }

    #[must_use]
    pub const fn page_index(&self) -> usize {
        self.page.index()
    }

    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.snapshot.len()
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    #[must_use]
    pub const fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Replace the record set wholesale (e.g. after a verify/generate task
    /// succeeds). Stale selected ids are pruned; the selection otherwise
    /// survives.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;

        let ids: Vec<String> = self.rows.iter().map(|r| r.id().to_string()).collect();
        self.selection.prune(ids.iter().map(String::as_str));

        self.recompute(false);
    }

    /// Replace the filter spec. Constraints on undeclared fields are
    /// pruned; selection is intentionally NOT cleared.
    pub fn set_filter(&mut self, mut spec: FilterSpec) {
        if !self.schema.known_fields.is_empty() {
            spec.retain_known_fields(&self.schema.known_fields);
        }

        self.filter = spec;
        self.metrics.record_filter();
        self.recompute(true);
    }

    /// Update only the free-text needle, against the schema's searchable
    /// fields.
    pub fn set_search(&mut self, needle: impl Into<String>) {
        let spec = std::mem::take(&mut self.filter)
            .search(needle, self.schema.searchable_fields.clone());

        self.filter = spec;
        self.metrics.record_filter();
        self.recompute(true);
    }

    /// Select a sort field, applying the default-direction rule; selecting
    /// the active field again flips direction.
    pub fn sort_by(&mut self, field: impl Into<String>) {
        self.sort.select(field, self.schema.ranking_field.as_deref());
        self.metrics.record_sort();
        self.recompute(false);
    }

    /// Navigate to a page; out-of-range requests clamp silently.
    pub fn set_page(&mut self, index: usize) {
        self.page = self.page.with_index(index).clamped(self.total_pages());
    }

    /// Tear the view down on navigation back to the precursor form:
    /// selection and view state are discarded.
    pub fn teardown(&mut self) {
        self.filter = FilterSpec::new();
        self.sort.clear();
        self.page = self.page.with_index(1);
        self.selection.select_none();
        self.recompute(false);
    }

    // ------------------------------------------------------------------
    // Selection (page-scoped)
    // ------------------------------------------------------------------

    /// Replace the selection with the visible page's ids. No-op on pages
    /// whose tier forbids selection.
    pub fn select_all_visible(&mut self) {
        if !self.current_tier().can_select() {
            return;
        }

        let ids: Vec<String> = self.visible_ids();
        self.selection.select_all(ids);
    }

    pub fn select_none(&mut self) {
        self.selection.select_none();
    }

    /// Toggle one row. No-op on the locked page.
    pub fn toggle(&mut self, id: impl Into<String>, checked: bool) {
        if !self.current_tier().can_select() {
            return;
        }

        self.selection.toggle(id, checked);
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Produce the current frame. Pure data; the presentation layer decides
    /// how to draw rows, placeholders, and the upgrade overlay.
    pub fn render(&mut self) -> Frame<R> {
        let paged = page::paginate(&self.snapshot, self.page, self.schema.gate);
        self.metrics.record_page(paged.is_gated);

        let tier = Self::tier_for(&paged, self.schema.free_pages);

        let visible: Vec<String> = paged
            .body
            .rows()
            .iter()
            .map(|r| r.id().to_string())
            .collect();
        let selection_indicator = self.selection.indicator(visible.iter().map(String::as_str));

        Frame {
            page_index: paged.index,
            natural_pages: paged.natural_pages,
            total_pages: paged.total_pages,
            filtered_count: self.snapshot.len(),
            is_gated: paged.is_gated,
            tier,
            can_download: tier.can_download(),
            can_select: tier.can_select(),
            sort_key: self.sort.key().cloned(),
            selection_indicator,
            selected_count: self.selection.len(),
            body: paged.body,
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Re-run filter and sort against the full unfiltered set, then keep
    /// the page index in range. A filter change that strands the index
    /// out of range resets to page 1; other shrinks clamp.
    fn recompute(&mut self, filter_changed: bool) {
        let filtered = filter::apply(&self.rows, &self.filter);
        self.snapshot = match self.sort.key() {
            Some(key) => sort::apply(&filtered, key),
            None => filtered,
        };

        let total = self.total_pages();
        let upper = total.max(1);
        if self.page.index() > upper {
            self.page = if filter_changed {
                self.page.with_index(1)
            } else {
                self.page.clamped(total)
            };
        }
    }

    fn total_pages(&self) -> usize {
        page::natural_pages(self.snapshot.len(), self.page.size())
            + self.schema.gate.appended_pages()
    }

    fn visible_ids(&self) -> Vec<String> {
        let paged = page::paginate(&self.snapshot, self.page, self.schema.gate);

        paged
            .body
            .rows()
            .iter()
            .map(|r| r.id().to_string())
            .collect()
    }

    fn current_tier(&self) -> AccessTier {
        let paged = page::paginate(&self.snapshot, self.page, self.schema.gate);

        Self::tier_for(&paged, self.schema.free_pages)
    }

    fn tier_for(paged: &page::PageView<R>, free_pages: usize) -> AccessTier {
        // an empty natural result set is a valid "no results" page, not a
        // locked one
        if !paged.is_gated && paged.natural_pages == 0 {
            return AccessTier::Visible;
        }

        AccessTier::derive(paged.index, free_pages, paged.natural_pages)
    }
}
