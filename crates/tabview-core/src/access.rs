//! Module: access
//! Responsibility: per-page tier derivation for the upgrade wall.
//! Does not own: pagination math or row content.
//! Boundary: pure function of page position; re-derivable after a refresh
//! or deep link with no hidden state.

///
/// AccessTier
///
/// - `Visible`: real data, fully interactive (download/export enabled).
/// - `Blurred`: real data rendered behind an upgrade overlay; selection
///   still works, download does not.
/// - `Locked`: the synthetic trailing page; placeholder content only.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessTier {
    Visible,
    Blurred,
    Locked,
}

impl AccessTier {
    /// Derive the tier for a 1-based page index.
    ///
    /// Pages below `free_pages` are visible; pages from `free_pages` up to
    /// the last natural page are blurred; anything beyond the natural pages
    /// is locked.
    #[must_use]
    pub const fn derive(page_index: usize, free_pages: usize, natural_pages: usize) -> Self {
        if page_index > natural_pages {
            Self::Locked
        } else if page_index < free_pages {
            Self::Visible
        } else {
            Self::Blurred
        }
    }

    #[must_use]
    pub const fn can_download(self) -> bool {
        matches!(self, Self::Visible)
    }

    #[must_use]
    pub const fn can_select(self) -> bool {
        matches!(self, Self::Visible | Self::Blurred)
    }

    #[must_use]
    pub const fn shows_upgrade_prompt(self) -> bool {
        matches!(self, Self::Blurred | Self::Locked)
    }
}
