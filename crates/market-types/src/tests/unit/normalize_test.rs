use serde_json::json;

use crate::{encode, from_resource_entry, from_view_tuples, normalize_entries, NormalizeError};

fn resource_entry() -> serde_json::Value {
    json!({
        "id": "7",
        "owner": "0xabc",
        "name": encode("Aurora"),
        "description": encode("First of its kind"),
        "uri": encode("https://img.example/7.png"),
        "price": "250000000",
        "for_sale": true,
        "rarity": 3,
        "is_rented": false,
        "rent_price_per_hour": "50000000",
        "rent_end_time": "0"
    })
}

// --- Resource entries ---

#[test]
fn resource_entry_normalizes() {
    let nft = from_resource_entry(&resource_entry()).unwrap();
    assert_eq!(nft.id, 7);
    assert_eq!(nft.name, "Aurora");
    assert_eq!(nft.description, "First of its kind");
    assert_eq!(nft.uri, "https://img.example/7.png");
    assert_eq!(nft.price, 2.5);
    assert_eq!(nft.rent_price_per_hour, 0.5);
    assert_eq!(nft.rarity, 3);
    assert!(nft.for_sale);
    assert!(!nft.is_rented);
    assert_eq!(nft.renter, None);
}

#[test]
fn numeric_and_string_shapes_both_coerce() {
    let mut entry = resource_entry();
    entry["id"] = json!(7);
    entry["price"] = json!(250000000u64);
    entry["for_sale"] = json!("true");
    let nft = from_resource_entry(&entry).unwrap();
    assert_eq!(nft.id, 7);
    assert_eq!(nft.price, 2.5);
    assert!(nft.for_sale);
}

#[test]
fn plain_text_passes_through_undecoded() {
    let mut entry = resource_entry();
    entry["name"] = json!("Already Decoded");
    assert_eq!(from_resource_entry(&entry).unwrap().name, "Already Decoded");
}

#[test]
fn missing_field_is_reported() {
    let mut entry = resource_entry();
    entry.as_object_mut().unwrap().remove("price");
    assert_eq!(
        from_resource_entry(&entry).unwrap_err(),
        NormalizeError::MissingField("price")
    );
}

#[test]
fn bad_hex_is_a_decode_error() {
    let mut entry = resource_entry();
    entry["name"] = json!("0x4e465");
    assert!(matches!(
        from_resource_entry(&entry).unwrap_err(),
        NormalizeError::Decode("name", _)
    ));
}

#[test]
fn non_boolean_for_sale_is_invalid() {
    let mut entry = resource_entry();
    entry["for_sale"] = json!(1);
    assert!(matches!(
        from_resource_entry(&entry).unwrap_err(),
        NormalizeError::InvalidField("for_sale", _)
    ));
}

// --- Batches ---

#[test]
fn batch_drops_bad_entries_and_counts_them() {
    let entries = vec![resource_entry(), json!({"id": "8"}), resource_entry()];
    let normalized = normalize_entries(&entries);
    assert_eq!(normalized.nfts.len(), 2);
    assert_eq!(normalized.dropped, 1);
}

#[test]
fn empty_batch_is_empty() {
    let normalized = normalize_entries(&[]);
    assert!(normalized.nfts.is_empty());
    assert_eq!(normalized.dropped, 0);
}

// --- View tuples ---

#[test]
fn view_tuples_build_full_record() {
    let details = vec![
        json!("12"),
        json!("0xowner"),
        json!(encode("Borealis")),
        json!(encode("desc")),
        json!(encode("https://img.example/12.png")),
        json!("100000000"),
        json!(false),
        json!("2"),
    ];
    let rental = vec![json!(true), json!("0xrenter"), json!("1700003600"), json!("25000000")];

    let nft = from_view_tuples(&details, &rental).unwrap();
    assert_eq!(nft.id, 12);
    assert_eq!(nft.name, "Borealis");
    assert_eq!(nft.price, 1.0);
    assert_eq!(nft.rarity, 2);
    assert!(nft.is_rented);
    assert_eq!(nft.renter.as_deref(), Some("0xrenter"));
    assert_eq!(nft.rent_end_time, 1_700_003_600);
    assert_eq!(nft.rent_price_per_hour, 0.25);
}

#[test]
fn short_tuple_is_missing_field() {
    let details = vec![json!("12")];
    let rental = vec![];
    assert_eq!(
        from_view_tuples(&details, &rental).unwrap_err(),
        NormalizeError::MissingField("owner")
    );
}
