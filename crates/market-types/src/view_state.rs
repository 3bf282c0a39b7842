//! Explicit, serializable presentation state.
//!
//! The browsing views keep no ambient state: everything the projection needs
//! travels in this struct, so the pipeline stays pure and the state can be
//! persisted or replayed. The setters own the "changing filters resets the
//! page" contract documented on [`ListQuery`].

use serde::{Deserialize, Serialize};

use crate::projector::{ListQuery, SortDirection, SortKey};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub query: ListQuery,
    /// Currently selected NFT id (e.g. for a confirmation dialog).
    pub selected: Option<u64>,
}

impl ViewState {
    /// State for the marketplace browsing view (availability filter on).
    pub fn marketplace() -> Self {
        Self {
            query: ListQuery {
                only_available: true,
                ..ListQuery::default()
            },
            selected: None,
        }
    }

    /// State for the owner's collection view (shows unlisted tokens too).
    pub fn collection() -> Self {
        Self::default()
    }

    /// Set or clear the search term; resets to page 1. An empty term counts
    /// as cleared.
    pub fn set_search(&mut self, term: Option<String>) {
        self.query.search = term.filter(|t| !t.is_empty());
        self.query.page = 1;
    }

    /// Change sort key/direction; resets to page 1.
    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.query.sort_by = key;
        self.query.direction = direction;
        self.query.page = 1;
    }

    /// Set or clear the rarity filter; resets to page 1.
    pub fn set_rarity(&mut self, rarity: Option<u8>) {
        self.query.rarity = rarity;
        self.query.page = 1;
    }

    /// Change the page size; resets to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.query.page_size = page_size;
        self.query.page = 1;
    }

    /// Navigate to a page (1-based). Does not touch filters.
    pub fn set_page(&mut self, page: usize) {
        self.query.page = page.max(1);
    }
}
