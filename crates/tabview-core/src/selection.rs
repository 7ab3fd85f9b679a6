//! Module: selection
//! Responsibility: bulk-selection bookkeeping over stable record ids.
//! Does not own: row visibility; callers pass the currently visible page's
//! ids for page-scoped queries.
//! Boundary: selection survives sort/filter changes and is cleared on view
//! teardown.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// SelectionIndicator
///
/// Declarative tri-state for the header checkbox, computed from the
/// intersection of the selection with the visible ids.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectionIndicator {
    Unchecked,
    Indeterminate,
    Checked,
}

///
/// SelectionSet
///
/// Set of selected record ids, persisted only within one view lifetime.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SelectionSet {
    ids: BTreeSet<String>,
}

impl SelectionSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }

    /// Replace the selection with exactly the visible page's ids.
    ///
    /// Select-all is page-scoped: rows on other pages are deselected even
    /// if they were individually selected before.
    pub fn select_all<I, S>(&mut self, visible_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = visible_ids.into_iter().map(Into::into).collect();
    }

    pub fn select_none(&mut self) {
        self.ids.clear();
    }

    /// Add or remove a single id. Toggling an id not currently in view is
    /// never an error; toggle is its own inverse.
    pub fn toggle(&mut self, id: impl Into<String>, checked: bool) {
        let id = id.into();

        if checked {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// True iff the visible set is non-empty and every visible id is
    /// selected.
    #[must_use]
    pub fn is_all_selected<'a, I>(&self, visible_ids: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut any = false;
        for id in visible_ids {
            if !self.ids.contains(id) {
                return false;
            }
            any = true;
        }

        any
    }

    /// True iff at least one, but not all, of the visible ids is selected.
    #[must_use]
    pub fn is_partially_selected<'a, I>(&self, visible_ids: I) -> bool
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        let any = visible_ids.clone().into_iter().any(|id| self.ids.contains(id));

        any && !self.is_all_selected(visible_ids)
    }

    /// Header-checkbox state for the visible page.
    #[must_use]
    pub fn indicator<'a, I>(&self, visible_ids: I) -> SelectionIndicator
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        if self.is_all_selected(visible_ids.clone()) {
            SelectionIndicator::Checked
        } else if self.is_partially_selected(visible_ids) {
            SelectionIndicator::Indeterminate
        } else {
            SelectionIndicator::Unchecked
        }
    }

    /// Drop ids that no longer exist in the record set.
    ///
    /// Called when the view's rows are replaced wholesale, so stale ids are
    /// pruned before the next selection mutation.
    pub fn prune<'a, I>(&mut self, valid_ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let valid: BTreeSet<&str> = valid_ids.into_iter().collect();
        self.ids.retain(|id| valid.contains(id.as_str()));
    }

    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page<'a>(ids: &'a [&'a str]) -> Vec<&'a str> {
        ids.to_vec()
    }

    #[test]
    fn select_all_is_page_scoped() {
        let mut selection = SelectionSet::new();

        selection.toggle("p1-row", true);
        selection.select_all(page(&["p2-a", "p2-b"]));

        // page-1 row was replaced, not merged
        assert!(!selection.contains("p1-row"));
        assert!(selection.is_all_selected(page(&["p2-a", "p2-b"])));
        assert!(!selection.is_all_selected(page(&["p1-row"])));
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut selection = SelectionSet::new();
        selection.toggle("a", true);
        let before = selection.clone();

        selection.toggle("b", true);
        selection.toggle("b", false);

        assert_eq!(selection, before);
    }

    #[test]
    fn untoggling_an_unknown_id_is_a_no_op() {
        let mut selection = SelectionSet::new();
        selection.toggle("ghost", false);

        assert!(selection.is_empty());
    }

    #[test]
    fn all_selected_requires_a_non_empty_visible_set() {
        let selection = SelectionSet::new();

        assert!(!selection.is_all_selected(page(&[])));
    }

    #[test]
    fn indicator_tracks_the_visible_intersection() {
        let mut selection = SelectionSet::new();
        let visible = page(&["a", "b", "c"]);

        assert_eq!(selection.indicator(visible.clone()), SelectionIndicator::Unchecked);

        selection.toggle("a", true);
        assert_eq!(
            selection.indicator(visible.clone()),
            SelectionIndicator::Indeterminate
        );

        selection.toggle("b", true);
        selection.toggle("c", true);
        assert_eq!(selection.indicator(visible), SelectionIndicator::Checked);

        // selection on another page does not affect this page's indicator
        assert_eq!(selection.indicator(page(&["x"])), SelectionIndicator::Unchecked);
    }

    #[test]
    fn prune_drops_stale_ids() {
        let mut selection = SelectionSet::new();
        selection.select_all(page(&["a", "b", "c"]));

        selection.prune(page(&["b", "c", "d"]));

        assert!(!selection.contains("a"));
        assert!(selection.contains("b"));
        assert_eq!(selection.len(), 2);
    }
}
