use crate::{SortDirection, SortKey, ViewState};

#[test]
fn marketplace_state_filters_availability() {
    assert!(ViewState::marketplace().query.only_available);
    assert!(!ViewState::collection().query.only_available);
}

#[test]
fn changing_search_resets_page() {
    let mut state = ViewState::marketplace();
    state.set_page(4);
    state.set_search(Some("dragon".to_string()));
    assert_eq!(state.query.page, 1);
    assert_eq!(state.query.search.as_deref(), Some("dragon"));
}

#[test]
fn empty_search_term_counts_as_cleared() {
    let mut state = ViewState::marketplace();
    state.set_search(Some(String::new()));
    assert_eq!(state.query.search, None);
}

#[test]
fn changing_sort_resets_page() {
    let mut state = ViewState::marketplace();
    state.set_page(3);
    state.set_sort(SortKey::Price, SortDirection::Descending);
    assert_eq!(state.query.page, 1);
}

#[test]
fn changing_rarity_resets_page() {
    let mut state = ViewState::marketplace();
    state.set_page(2);
    state.set_rarity(Some(4));
    assert_eq!(state.query.page, 1);
}

#[test]
fn changing_page_size_resets_page() {
    let mut state = ViewState::marketplace();
    state.set_page(2);
    state.set_page_size(16);
    assert_eq!(state.query.page, 1);
    assert_eq!(state.query.page_size, 16);
}

#[test]
fn navigation_alone_keeps_filters() {
    let mut state = ViewState::marketplace();
    state.set_rarity(Some(2));
    state.set_page(5);
    assert_eq!(state.query.page, 5);
    assert_eq!(state.query.rarity, Some(2));
}

#[test]
fn page_is_clamped_to_one_based() {
    let mut state = ViewState::marketplace();
    state.set_page(0);
    assert_eq!(state.query.page, 1);
}

#[test]
fn view_state_round_trips_through_json() {
    let mut state = ViewState::marketplace();
    state.set_search(Some("wolf".to_string()));
    state.selected = Some(7);
    let json = serde_json::to_string(&state).unwrap();
    let back: ViewState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}
