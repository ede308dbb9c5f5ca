use super::*;
use time::macros::datetime;

#[test]
fn price_groups_thousands_and_drops_zero_cents() {
    assert_eq!(price(Decimal::new(189_900, 2)), "$1,899");
    assert_eq!(price(Decimal::new(95, 0)), "$95");
    assert_eq!(price(Decimal::new(1_234_567, 0)), "$1,234,567");
}

#[test]
fn price_keeps_non_zero_cents() {
    assert_eq!(price(Decimal::new(129_950, 2)), "$1,299.50");
    assert_eq!(price(Decimal::new(1005, 3)), "$1.01");
}

#[test]
fn price_of_zero() {
    assert_eq!(price(Decimal::ZERO), "$0");
}

#[test]
fn whole_price_groups() {
    assert_eq!(whole_price(1_850), "$1,850");
    assert_eq!(whole_price(420), "$420");
}

#[test]
fn date_uses_short_month() {
    assert_eq!(date(datetime!(2024-03-10 08:00:00 UTC)), "Mar 10, 2024");
}

#[test]
fn read_time_has_floor_of_one() {
    assert_eq!(read_time(6), "6 min read");
    assert_eq!(read_time(0), "1 min read");
}

#[test]
fn stars_fill_and_clamp() {
    assert_eq!(stars(4), "★★★★☆");
    assert_eq!(stars(9), "★★★★★");
    assert_eq!(stars(0), "☆☆☆☆☆");
}

#[test]
fn tenths_formats_one_decimal() {
    assert_eq!(tenths(94), "9.4");
    assert_eq!(tenths(100), "10.0");
}
