
// --- Unit Tests ---
pub mod unit {
    pub mod hex_string_test;
    pub mod normalize_test;
    pub mod price_test;
    pub mod projector_test;
    pub mod rarity_test;
    pub mod rental_test;
    pub mod view_state_test;
}
