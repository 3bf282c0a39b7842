//! # Marketplace Client
//!
//! Async client for the `NFTMarketplace` Aptos contract. Reads chain state
//! through the fullnode REST API and shapes entry-function payloads for an
//! external wallet to sign — no keys are ever held here.
//!
//! ## Quick Start
//! ```bash
//! MARKETPLACE_ADDR=0x... cargo run --bin market -- browse --rarity 3
//! ```
//!
//! ## Flow
//! [`rpc::NodeClient`] fetches raw state, [`queries`] normalizes it into
//! `market_types::Nft` records, and the presentation layer projects them
//! with `market_types::project`. [`payload`] builds the five marketplace
//! transactions (purchase, rent, list-for-sale, list-for-rent, transfer).

pub mod config;
mod error;
pub mod payload;
pub mod queries;
pub mod rpc;

pub use config::Config;
pub use error::Error;
pub use payload::{EntryFunctionPayload, TransactionSubmitter, TxOutcome};
pub use queries::{FetchSequence, FetchTicket};
pub use rpc::NodeClient;
