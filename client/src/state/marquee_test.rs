use super::*;

#[test]
fn doubled_has_twice_the_length_and_repeats() {
    let partners = ["Airline", "Hotels", "Cruises", "Rail", "Tours"];
    let seq = doubled(&partners);
    assert_eq!(seq.len(), partners.len() * 2);
    for (i, item) in seq.iter().enumerate() {
        assert_eq!(*item, partners[i % partners.len()]);
    }
}

#[test]
fn doubled_empty_is_empty() {
    let seq: Vec<&str> = doubled(&[]);
    assert!(seq.is_empty());
}

#[test]
fn track_style_never_emits_zero_duration() {
    assert_eq!(track_style(DEFAULT_MARQUEE_SECS), "--marquee-duration: 30s");
    assert_eq!(track_style(0), "--marquee-duration: 1s");
}
