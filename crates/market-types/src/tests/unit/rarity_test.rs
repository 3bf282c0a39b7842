use crate::Rarity;

#[test]
fn known_codes_map_to_tiers() {
    assert_eq!(Rarity::from_code(1), Some(Rarity::Common));
    assert_eq!(Rarity::from_code(2), Some(Rarity::Uncommon));
    assert_eq!(Rarity::from_code(3), Some(Rarity::Rare));
    assert_eq!(Rarity::from_code(4), Some(Rarity::SuperRare));
}

#[test]
fn labels_and_colors() {
    assert_eq!(Rarity::label(1), "Common");
    assert_eq!(Rarity::color(1), "green");
    assert_eq!(Rarity::label(4), "Super Rare");
    assert_eq!(Rarity::color(4), "orange");
}

#[test]
fn unknown_code_falls_back_without_panicking() {
    assert_eq!(Rarity::from_code(0), None);
    assert_eq!(Rarity::from_code(99), None);
    assert_eq!(Rarity::label(99), "Unknown");
    assert_eq!(Rarity::color(99), "default");
}

#[test]
fn code_round_trips() {
    for code in 1..=4u8 {
        assert_eq!(Rarity::from_code(code).unwrap().code(), code);
    }
}
