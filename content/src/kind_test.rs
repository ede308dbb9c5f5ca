use super::*;

#[test]
fn kind_path_round_trips_for_every_kind() {
    for kind in ContentKind::ALL {
        assert_eq!(ContentKind::from_path(kind.as_path()), Some(kind));
    }
}

#[test]
fn unknown_path_segment_is_rejected() {
    assert_eq!(ContentKind::from_path("hotels"), None);
    assert_eq!(ContentKind::from_path(""), None);
    assert_eq!(ContentKind::from_path("Destinations"), None);
}

#[test]
fn kind_serializes_as_kebab_case() {
    let json = serde_json::to_string(&ContentKind::BlogPosts).unwrap();
    assert_eq!(json, "\"blog-posts\"");
}

#[test]
fn endpoint_for_each_scope() {
    assert_eq!(ContentQuery::all(ContentKind::Destinations).endpoint(), "/api/content/destinations");
    assert_eq!(ContentQuery::featured(ContentKind::Packages).endpoint(), "/api/content/packages/featured");
    assert_eq!(
        ContentQuery::latest(ContentKind::BlogPosts, 3).endpoint(),
        "/api/content/blog-posts/latest?limit=3"
    );
}

#[test]
fn latest_query_clamps_count() {
    assert_eq!(ContentQuery::latest(ContentKind::Faqs, 0).scope, ContentScope::Latest(1));
    assert_eq!(ContentQuery::latest(ContentKind::Faqs, 500).scope, ContentScope::Latest(MAX_LATEST_LIMIT));
}

#[test]
fn clamp_latest_limit_defaults_when_missing() {
    assert_eq!(clamp_latest_limit(None), DEFAULT_LATEST_LIMIT);
    assert_eq!(clamp_latest_limit(Some(7)), 7);
}
