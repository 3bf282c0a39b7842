//! Boundary validation: raw chain JSON → canonical [`Nft`] records.
//!
//! The fullnode renders the same logical fields differently depending on the
//! endpoint: u64s arrive as JSON numbers or decimal strings, booleans as
//! bools or the strings `"true"`/`"false"`, and text as `0x`-hex byte
//! strings. Everything is coerced here, per item, so untyped data never
//! travels further in.

use serde_json::Value;

use crate::error::NormalizeError;
use crate::hex_string;
use crate::nft::Nft;
use crate::price;

/// Result of normalizing a batch: the records that survived plus a count of
/// records dropped for per-item failures (surfaced for diagnostics, never
/// fatal).
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub nfts: Vec<Nft>,
    pub dropped: usize,
}

/// Normalize every entry of a `Marketplace` resource's `nfts` array,
/// dropping entries that fail instead of aborting the batch.
pub fn normalize_entries(entries: &[Value]) -> Normalized {
    let mut nfts = Vec::with_capacity(entries.len());
    let mut dropped = 0;
    for entry in entries {
        match from_resource_entry(entry) {
            Ok(nft) => nfts.push(nft),
            Err(_) => dropped += 1,
        }
    }
    Normalized { nfts, dropped }
}

/// Build an [`Nft`] from one object in the marketplace account resource.
pub fn from_resource_entry(entry: &Value) -> Result<Nft, NormalizeError> {
    let obj = entry
        .as_object()
        .ok_or(NormalizeError::InvalidField("entry", String::new()))?;
    let field = |name: &'static str| obj.get(name).ok_or(NormalizeError::MissingField(name));

    Ok(Nft {
        id: coerce_u64(field("id")?, "id")?,
        owner: coerce_address(field("owner")?, "owner")?,
        name: coerce_text(field("name")?, "name")?,
        description: coerce_text(field("description")?, "description")?,
        uri: coerce_text(field("uri")?, "uri")?,
        price: price::to_human(coerce_u64(field("price")?, "price")?),
        for_sale: coerce_bool(field("for_sale")?, "for_sale")?,
        rarity: coerce_u8(field("rarity")?, "rarity")?,
        is_rented: coerce_bool(field("is_rented")?, "is_rented")?,
        rent_price_per_hour: price::to_human(coerce_u64(
            field("rent_price_per_hour")?,
            "rent_price_per_hour",
        )?),
        rent_end_time: coerce_u64(field("rent_end_time")?, "rent_end_time")?,
        renter: None,
    })
}

/// Build an [`Nft`] from the positional tuples returned by the
/// `get_nft_details` and `get_rental_details` view functions.
pub fn from_view_tuples(details: &[Value], rental: &[Value]) -> Result<Nft, NormalizeError> {
    let detail = |idx: usize, name: &'static str| {
        details.get(idx).ok_or(NormalizeError::MissingField(name))
    };
    let rent = |idx: usize, name: &'static str| {
        rental.get(idx).ok_or(NormalizeError::MissingField(name))
    };

    Ok(Nft {
        id: coerce_u64(detail(0, "id")?, "id")?,
        owner: coerce_address(detail(1, "owner")?, "owner")?,
        name: coerce_text(detail(2, "name")?, "name")?,
        description: coerce_text(detail(3, "description")?, "description")?,
        uri: coerce_text(detail(4, "uri")?, "uri")?,
        price: price::to_human(coerce_u64(detail(5, "price")?, "price")?),
        for_sale: coerce_bool(detail(6, "for_sale")?, "for_sale")?,
        rarity: coerce_u8(detail(7, "rarity")?, "rarity")?,
        is_rented: coerce_bool(rent(0, "is_rented")?, "is_rented")?,
        renter: Some(coerce_address(rent(1, "renter")?, "renter")?),
        rent_end_time: coerce_u64(rent(2, "rent_end_time")?, "rent_end_time")?,
        rent_price_per_hour: price::to_human(coerce_u64(
            rent(3, "rent_price_per_hour")?,
            "rent_price_per_hour",
        )?),
    })
}

// --- Field coercions ---

fn coerce_u64(value: &Value, name: &'static str) -> Result<u64, NormalizeError> {
    match value {
        Value::Number(n) => n.as_u64().ok_or_else(|| NormalizeError::invalid(name, value)),
        Value::String(s) => s
            .parse::<u64>()
            .map_err(|_| NormalizeError::invalid(name, value)),
        _ => Err(NormalizeError::invalid(name, value)),
    }
}

fn coerce_u8(value: &Value, name: &'static str) -> Result<u8, NormalizeError> {
    let n = coerce_u64(value, name)?;
    u8::try_from(n).map_err(|_| NormalizeError::invalid(name, value))
}

fn coerce_bool(value: &Value, name: &'static str) -> Result<bool, NormalizeError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s == "true" => Ok(true),
        Value::String(s) if s == "false" => Ok(false),
        _ => Err(NormalizeError::invalid(name, value)),
    }
}

/// Text field: hex-encoded byte strings are decoded; already-plain strings
/// pass through unchanged.
fn coerce_text(value: &Value, name: &'static str) -> Result<String, NormalizeError> {
    let s = value
        .as_str()
        .ok_or_else(|| NormalizeError::invalid(name, value))?;
    if s.starts_with("0x") {
        hex_string::decode(s).map_err(|e| NormalizeError::Decode(name, e))
    } else {
        Ok(s.to_string())
    }
}

/// Address field: opaque string, no decoding.
fn coerce_address(value: &Value, name: &'static str) -> Result<String, NormalizeError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| NormalizeError::invalid(name, value))
}
