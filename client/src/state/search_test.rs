use super::*;

#[test]
fn normalize_query_trims_and_collapses() {
    assert_eq!(normalize_query("  bali   beach "), Some("bali beach".to_owned()));
    assert_eq!(normalize_query("   "), None);
    assert_eq!(normalize_query(""), None);
}

#[test]
fn blank_query_does_not_start_loading() {
    let mut state = SearchState::default();
    assert_eq!(state.begin("  "), None);
    assert!(!state.loading);
    assert!(!state.no_matches());
}

#[test]
fn resolve_stores_results_for_current_query() {
    let mut state = SearchState::default();
    let q = state.begin("Greece").unwrap();
    assert!(state.loading);
    state.resolve(&q, Ok(SearchResults::default()));
    assert!(!state.loading);
    assert!(state.no_matches());
}

#[test]
fn stale_response_is_ignored() {
    let mut state = SearchState::default();
    let old = state.begin("rome").unwrap();
    state.begin("paris");
    state.resolve(&old, Err(ApiError::Status(500)));
    assert!(state.loading);
    assert!(!state.failed);
}

#[test]
fn failed_search_is_flagged() {
    let mut state = SearchState::default();
    let q = state.begin("tokyo").unwrap();
    state.resolve(&q, Err(ApiError::Network("offline".into())));
    assert!(state.failed);
    assert!(!state.loading);
}
