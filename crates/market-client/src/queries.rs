//! Fetch orchestration for the two views.
//!
//! The marketplace view reads one account-resource snapshot; the collection
//! view enumerates ids and fans out one detail/rental view-call pair per id.
//! Per-item failures drop the item and the batch completes; only whole-fetch
//! failures surface as errors.

use std::sync::atomic::{AtomicU64, Ordering};

use futures::future::join_all;
use serde_json::{json, Value};
use tracing::{debug, warn};

use market_types::{from_view_tuples, normalize_entries, Nft, Normalized};

use crate::config::Config;
use crate::error::Error;
use crate::rpc::NodeClient;

/// Fetch and normalize the full marketplace listing set.
///
/// The availability filter is not applied here — the projector owns it, so
/// both views can share one snapshot.
///
/// Callers that can have overlapping fetches in flight (e.g. a refetch after
/// every transaction) should pair each call with a [`FetchSequence`] ticket
/// and discard the result when `commit` refuses it.
pub async fn fetch_market(client: &NodeClient, config: &Config) -> Result<Normalized, Error> {
    let resource = client
        .get_account_resource(&config.marketplace_address, &config.qualified("Marketplace"))
        .await?;
    let entries = resource
        .get("data")
        .and_then(|data| data.get("nfts"))
        .and_then(Value::as_array)
        .ok_or_else(|| Error::Chain("marketplace resource has no nfts array".into()))?;

    let normalized = normalize_entries(entries);
    if normalized.dropped > 0 {
        warn!(dropped = normalized.dropped, "dropped malformed marketplace entries");
    }
    debug!(count = normalized.nfts.len(), "marketplace snapshot normalized");
    Ok(normalized)
}

/// Fetch the NFTs owned by (or rented to) `owner`, one detail/rental
/// view-call pair per id, issued concurrently.
///
/// Subject to the same staleness contract as [`fetch_market`]: guard
/// overlapping calls with a [`FetchSequence`].
pub async fn fetch_collection(
    client: &NodeClient,
    config: &Config,
    owner: &str,
) -> Result<Normalized, Error> {
    let mut ids = owned_ids(client, config, owner).await?;

    // The rented-NFT view may not exist on older deployments; treat a
    // failure as an empty set.
    match rented_ids(client, config, owner).await {
        Ok(rented) => ids.extend(rented),
        Err(err) => debug!(%err, "no rented NFTs found"),
    }

    let fetches = ids.iter().map(|&id| fetch_one(client, config, id));
    let mut nfts = Vec::with_capacity(ids.len());
    let mut dropped = 0;
    for (id, result) in ids.iter().zip(join_all(fetches).await) {
        match result {
            Ok(nft) => nfts.push(nft),
            Err(err) => {
                warn!(id, %err, "dropping NFT with failed detail fetch");
                dropped += 1;
            }
        }
    }
    Ok(Normalized { nfts, dropped })
}

async fn fetch_one(client: &NodeClient, config: &Config, id: u64) -> Result<Nft, Error> {
    let id_arg = json!(id.to_string());
    let market_arg = json!(config.marketplace_address);

    let details = client
        .view(
            &config.qualified("get_nft_details"),
            &[],
            &[market_arg.clone(), id_arg.clone()],
        )
        .await?;
    let rental = client
        .view(
            &config.qualified("get_rental_details"),
            &[],
            &[market_arg, id_arg],
        )
        .await?;

    from_view_tuples(&details, &rental).map_err(|e| Error::Chain(e.to_string()))
}

async fn owned_ids(client: &NodeClient, config: &Config, owner: &str) -> Result<Vec<u64>, Error> {
    let values = client
        .view(
            &config.qualified("get_all_nfts_for_owner"),
            &[],
            &[
                json!(config.marketplace_address),
                json!(owner),
                json!(config.owner_limit.to_string()),
                json!("0"),
            ],
        )
        .await?;
    parse_id_list(&values)
}

async fn rented_ids(client: &NodeClient, config: &Config, owner: &str) -> Result<Vec<u64>, Error> {
    let values = client
        .view(
            &config.qualified("get_rented_nfts"),
            &[],
            &[json!(config.marketplace_address), json!(owner)],
        )
        .await?;
    parse_id_list(&values)
}

/// View results arrive either as `[[ids...]]` or as a bare id array.
fn parse_id_list(values: &[Value]) -> Result<Vec<u64>, Error> {
    let ids = match values.first() {
        Some(Value::Array(inner)) => inner.as_slice(),
        _ => values,
    };
    ids.iter().map(parse_id).collect()
}

fn parse_id(value: &Value) -> Result<u64, Error> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| Error::Chain(format!("bad NFT id: {value}"))),
        Value::String(s) => s
            .parse()
            .map_err(|_| Error::Chain(format!("bad NFT id: {value}"))),
        _ => Err(Error::Chain(format!("bad NFT id: {value}"))),
    }
}

/// Monotonic fetch sequencing: a response may only be applied when no newer
/// fetch has started, so late-arriving stale results are discarded instead
/// of overwriting fresher state.
#[derive(Debug, Default)]
pub struct FetchSequence {
    latest: AtomicU64,
}

/// Token for one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch; supersedes every earlier ticket.
    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True when the ticket is still the newest fetch and its result may be
    /// applied; false means discard.
    pub fn commit(&self, ticket: &FetchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
