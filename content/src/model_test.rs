use super::*;
use rust_decimal::Decimal;
use time::macros::datetime;

fn faq(id: &str, order: i32) -> Faq {
    Faq { id: id.to_owned(), question: format!("q{id}"), answer: format!("a{id}"), order, active: true }
}

#[test]
fn destination_parses_provider_json() {
    let json = r#"{
        "id": "d1",
        "name": "Santorini",
        "country": "Greece",
        "tour_count": 12,
        "image_url": "/images/santorini.jpg",
        "description": "Whitewashed cliffs.",
        "featured": true,
        "created_at": "2024-05-01T10:00:00Z"
    }"#;
    let dest: Destination = serde_json::from_str(json).unwrap();
    assert_eq!(dest.name, "Santorini");
    assert_eq!(dest.tour_count, 12);
    assert!(dest.featured);
    assert_eq!(dest.created_at, datetime!(2024-05-01 10:00:00 UTC));
}

#[test]
fn package_price_is_a_json_number() {
    let pkg = TourPackage {
        id: "p1".into(),
        destination_id: None,
        name: "Island Hopper".into(),
        duration: "5 Days".into(),
        price: Decimal::new(129_950, 2),
        description: String::new(),
        image_url: String::new(),
        featured: false,
        created_at: datetime!(2024-01-01 00:00:00 UTC),
    };
    let value = serde_json::to_value(&pkg).unwrap();
    assert!(value["price"].is_number());
    assert_eq!(value["created_at"], "2024-01-01T00:00:00Z");
}

#[test]
fn package_accepts_missing_destination_reference() {
    let json = r#"{"id":"p2","destination_id":null,"name":"n","duration":"d","price":10.5,
        "description":"","image_url":"","featured":true,"created_at":"2024-01-01T00:00:00Z"}"#;
    let pkg: TourPackage = serde_json::from_str(json).unwrap();
    assert_eq!(pkg.destination_id, None);
    assert_eq!(pkg.price, Decimal::new(105, 1));
}

#[test]
fn sort_faqs_orders_by_display_key_and_is_stable() {
    let mut faqs = vec![faq("c", 3), faq("a", 1), faq("b1", 2), faq("b2", 2)];
    sort_faqs(&mut faqs);
    let ids: Vec<_> = faqs.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b1", "b2", "c"]);
}

#[test]
fn search_results_missing_lists_default_to_empty() {
    let results: SearchResults = serde_json::from_str("{}").unwrap();
    assert!(results.is_empty());
}
