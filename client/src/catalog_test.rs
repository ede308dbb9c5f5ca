use std::collections::HashSet;

use super::*;

#[test]
fn provider_placeholders_are_non_empty() {
    assert!(!destinations().is_empty());
    assert!(!packages().is_empty());
    assert!(!blog_posts().is_empty());
    assert!(!faqs().is_empty());
}

#[test]
fn placeholder_catalog_is_stable_between_calls() {
    assert_eq!(destinations(), destinations());
    assert_eq!(faqs(), faqs());
}

#[test]
fn placeholder_ids_are_unique() {
    let ids: Vec<String> = destinations()
        .into_iter()
        .map(|d| d.id)
        .chain(packages().into_iter().map(|p| p.id))
        .chain(blog_posts().into_iter().map(|b| b.id))
        .chain(faqs().into_iter().map(|f| f.id))
        .collect();
    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn faq_placeholders_are_sorted_and_active() {
    let faqs = faqs();
    assert!(faqs.windows(2).all(|w| w[0].order <= w[1].order));
    assert!(faqs.iter().all(|f| f.active));
}

#[test]
fn package_placeholders_reference_placeholder_destinations() {
    let dest_ids: HashSet<String> = destinations().into_iter().map(|d| d.id).collect();
    for pkg in packages() {
        let dest = pkg.destination_id.expect("placeholder package has a destination");
        assert!(dest_ids.contains(&dest), "{dest} missing");
    }
}

#[test]
fn blog_post_lookup_by_slug() {
    assert_eq!(blog_post("street-food-guide").map(|p| p.title), Some("A Beginner's Guide to Street Food".to_owned()));
    assert!(blog_post("does-not-exist").is_none());
}

#[test]
fn hotel_lookup_by_id() {
    assert_eq!(hotel("gion-machiya").map(|h| h.city), Some("Kyoto"));
    assert!(hotel("nowhere").is_none());
}

#[test]
fn testimonial_ratings_are_in_range() {
    assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
}

#[test]
fn static_lists_are_populated() {
    assert!(!PARTNERS.is_empty());
    assert!(!SERVICES.is_empty());
    assert!(!APARTMENTS.is_empty());
}
