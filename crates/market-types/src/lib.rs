//! Shared types and pure-logic pipeline for the Aptos NFT marketplace client.
//! No I/O and no async — usable from any presentation layer.
//!
//! The pipeline over a fetched marketplace snapshot is:
//! [`decode`] → [`normalize_entries`] → [`project`], with [`rental`]
//! supplying remaining-hours arithmetic for rented tokens.

mod error;
mod hex_string;
mod nft;
mod normalize;
pub mod price;
mod projector;
mod rarity;
pub mod rental;
mod view_state;

#[cfg(test)]
mod tests;

pub use error::{DecodeError, NormalizeError};
pub use hex_string::{decode, encode};
pub use nft::Nft;
pub use normalize::{from_resource_entry, from_view_tuples, normalize_entries, Normalized};
pub use price::{rent_total_octas, to_human, to_raw, OCTAS_PER_APT};
pub use projector::{project, ListQuery, Page, SortDirection, SortKey};
pub use rarity::Rarity;
pub use view_state::ViewState;
