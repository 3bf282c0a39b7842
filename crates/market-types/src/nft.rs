//! Canonical NFT record.

use serde::{Deserialize, Serialize};

/// One NFT as seen by the presentation layer: text fields decoded, amounts
/// in human-scale APT.
///
/// Records are rebuilt wholesale on every fetch and never mutated in place;
/// after a successful transaction the caller refetches to pick up the new
/// chain state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nft {
    pub id: u64,
    /// Opaque account address; never parsed client-side.
    pub owner: String,
    pub name: String,
    pub description: String,
    pub uri: String,
    /// Sale price in APT.
    pub price: f64,
    pub for_sale: bool,
    /// On-chain rarity code, expected in 1..=4. Unknown codes are kept as-is
    /// and rendered via the [`Rarity`] fallbacks.
    ///
    /// [`Rarity`]: crate::Rarity
    pub rarity: u8,
    pub is_rented: bool,
    /// Hourly rental rate in APT. 0 means not listed for rent.
    pub rent_price_per_hour: f64,
    /// Unix seconds; meaningless unless `is_rented`.
    pub rent_end_time: u64,
    /// Current renter, when fetched through the collection view calls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renter: Option<String>,
}

impl Nft {
    /// Marketplace availability: purchasable, or rentable and not already
    /// rented out.
    pub fn is_available(&self) -> bool {
        self.for_sale || (self.rent_price_per_hour > 0.0 && !self.is_rented)
    }
}
