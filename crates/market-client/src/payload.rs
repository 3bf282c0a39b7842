//! Entry-function payload shaping and the wallet boundary.
//!
//! The client never signs: each builder produces the exact
//! `entry_function_payload` JSON a connected wallet expects, with positional
//! string arguments and octa amounts re-derived from human-scale APT.

use async_trait::async_trait;
use serde::Serialize;

use market_types::price;

use crate::config::Config;
use crate::error::Error;

/// One entry-function invocation, serialized in wallet-adapter shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryFunctionPayload {
    #[serde(rename = "type")]
    pub payload_type: &'static str,
    pub function: String,
    /// Always empty for this contract — no generic entry functions.
    pub type_arguments: Vec<String>,
    pub arguments: Vec<String>,
}

impl EntryFunctionPayload {
    fn new(function: String, arguments: Vec<String>) -> Self {
        Self {
            payload_type: "entry_function_payload",
            function,
            type_arguments: Vec::new(),
            arguments,
        }
    }

    /// `purchase_nft(marketplace, id, price_octas)`.
    pub fn purchase_nft(config: &Config, id: u64, price_apt: f64) -> Result<Self, Error> {
        Ok(Self::new(
            config.qualified("purchase_nft"),
            vec![
                config.marketplace_address.clone(),
                id.to_string(),
                octas(price_apt, "price")?.to_string(),
            ],
        ))
    }

    /// `rent_nft(marketplace, id, rate_octas, total_octas)`.
    ///
    /// The total is rate × hours in integer octa space; overflow is a
    /// payload error, never a wrapped amount.
    pub fn rent_nft(config: &Config, id: u64, rate_apt: f64, hours: u64) -> Result<Self, Error> {
        let rate = octas(rate_apt, "hourly rate")?;
        let total = price::rent_total_octas(rate_apt, hours)
            .ok_or_else(|| Error::Payload(format!("rent total overflows: {rate_apt} x {hours}h")))?;
        Ok(Self::new(
            config.qualified("rent_nft"),
            vec![
                config.marketplace_address.clone(),
                id.to_string(),
                rate.to_string(),
                total.to_string(),
            ],
        ))
    }

    /// `list_for_sale(marketplace, id, price_octas)`.
    pub fn list_for_sale(config: &Config, id: u64, price_apt: f64) -> Result<Self, Error> {
        Ok(Self::new(
            config.qualified("list_for_sale"),
            vec![
                config.marketplace_address.clone(),
                id.to_string(),
                octas(price_apt, "price")?.to_string(),
            ],
        ))
    }

    /// `list_for_rent(marketplace, id, rate_octas)`.
    pub fn list_for_rent(config: &Config, id: u64, rate_apt: f64) -> Result<Self, Error> {
        Ok(Self::new(
            config.qualified("list_for_rent"),
            vec![
                config.marketplace_address.clone(),
                id.to_string(),
                octas(rate_apt, "hourly rate")?.to_string(),
            ],
        ))
    }

    /// `transfer_nft(marketplace, id, recipient)`.
    pub fn transfer_nft(config: &Config, id: u64, recipient: &str) -> Self {
        Self::new(
            config.qualified("transfer_nft"),
            vec![
                config.marketplace_address.clone(),
                id.to_string(),
                recipient.to_string(),
            ],
        )
    }
}

/// Human-scale APT → octas, rejecting amounts a wallet must never see:
/// negative, NaN, or infinite input is a payload error, not a zeroed amount.
fn octas(amount_apt: f64, what: &str) -> Result<u64, Error> {
    if !amount_apt.is_finite() || amount_apt < 0.0 {
        return Err(Error::Payload(format!(
            "{what} must be a non-negative amount, got {amount_apt}"
        )));
    }
    Ok(price::to_raw(amount_apt))
}

/// Opaque result of a submitted transaction.
#[derive(Debug, Clone)]
pub struct TxOutcome {
    pub hash: String,
    pub success: bool,
    /// VM status line on failure, when the wallet surfaces one.
    pub vm_status: Option<String>,
}

/// Wallet-side boundary: signs and submits a shaped payload.
///
/// Implementations live outside this crate (browser wallet bridge, test
/// double). On success the caller refetches the whole listing set; on
/// failure it leaves state untouched.
#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    async fn submit(&self, payload: &EntryFunctionPayload) -> Result<TxOutcome, Error>;
}
