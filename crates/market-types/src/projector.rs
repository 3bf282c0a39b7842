//! Pure list projection: filter → search → sort → paginate.
//!
//! The stage order is part of the contract — reordering changes results.
//! All state lives in the serializable [`ListQuery`]; the projector holds
//! none of its own.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::nft::Nft;

/// Sort field for the projected list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Preserve input order.
    #[default]
    None,
    /// Case-insensitive name ordering.
    Name,
    Id,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// One projection request. `page` is 1-based.
///
/// Caller contract: changing `search`, `sort_by`, `direction`, `rarity`, or
/// `page_size` must reset `page` to 1; [`ViewState`] setters enforce this.
///
/// [`ViewState`]: crate::ViewState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Keep only marketplace-available records (for sale, or rentable and
    /// not currently rented). The collection view sets this to false.
    pub only_available: bool,
    /// Exact rarity-code match; `None` retains all.
    pub rarity: Option<u8>,
    /// Case-insensitive substring over name, id, and price renderings.
    pub search: Option<String>,
    pub sort_by: SortKey,
    pub direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            only_available: false,
            rarity: None,
            search: None,
            sort_by: SortKey::None,
            direction: SortDirection::Ascending,
            page: 1,
            page_size: 8,
        }
    }
}

/// One projected page plus the total match count (drives the pager).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub items: Vec<Nft>,
    /// Count after filtering, before pagination.
    pub total: usize,
}

/// Project a normalized collection through the query.
///
/// A page index past the end yields empty `items` with `total` still
/// correct; it is never an error.
pub fn project(nfts: &[Nft], query: &ListQuery) -> Page {
    let mut matched: Vec<&Nft> = nfts
        .iter()
        .filter(|nft| !query.only_available || nft.is_available())
        .filter(|nft| query.rarity.is_none_or(|r| nft.rarity == r))
        .filter(|nft| matches_search(nft, query.search.as_deref()))
        .collect();

    sort(&mut matched, query.sort_by, query.direction);

    let total = matched.len();
    let items = if query.page == 0 || query.page_size == 0 {
        Vec::new()
    } else {
        matched
            .into_iter()
            .skip((query.page - 1).saturating_mul(query.page_size))
            .take(query.page_size)
            .cloned()
            .collect()
    };

    Page { items, total }
}

/// Search matches the name case-insensitively, or the decimal rendering of
/// the id or price. An empty or absent term retains everything.
fn matches_search(nft: &Nft, term: Option<&str>) -> bool {
    let Some(term) = term.filter(|t| !t.is_empty()) else {
        return true;
    };
    let needle = term.to_lowercase();
    nft.name.to_lowercase().contains(&needle)
        || nft.id.to_string().contains(&needle)
        || nft.price.to_string().contains(&needle)
}

/// Stable sort; `SortKey::None` leaves the input order untouched.
fn sort(nfts: &mut [&Nft], key: SortKey, direction: SortDirection) {
    if key == SortKey::None {
        return;
    }
    nfts.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Name => compare_names(&a.name, &b.name),
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
            SortKey::None => Ordering::Equal,
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Case-insensitive code-point comparison, falling back to case-sensitive
/// order so "a" and "A" sort deterministically.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
