//! Display formatting for prices, dates, and ratings.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");

/// `$1,899` for whole amounts, `$1,899.50` otherwise.
#[must_use]
pub fn price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();
    let whole = abs.trunc();
    let cents = ((abs - whole) * Decimal::ONE_HUNDRED).trunc();
    let grouped = group_thousands(&whole.to_string());
    let sign = if negative { "-" } else { "" };
    if cents.is_zero() {
        return format!("{sign}${grouped}");
    }
    let cents = cents.to_string();
    format!("{sign}${grouped}.{cents:0>2}")
}

/// `$1,850` for whole-dollar integer amounts.
#[must_use]
pub fn whole_price(amount: u32) -> String {
    format!("${}", group_thousands(&amount.to_string()))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `Mar 10, 2024`. Falls back to the ISO date if formatting fails.
#[must_use]
pub fn date(ts: OffsetDateTime) -> String {
    ts.format(DATE_FORMAT).unwrap_or_else(|_| ts.date().to_string())
}

#[must_use]
pub fn read_time(minutes: i32) -> String {
    format!("{} min read", minutes.max(1))
}

/// Five-star string such as `★★★★☆`.
#[must_use]
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// `9.4` from a rating stored in tenths.
#[must_use]
pub fn tenths(value: u16) -> String {
    format!("{}.{}", value / 10, value % 10)
}
