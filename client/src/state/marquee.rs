//! Logo marquee sequence.
//!
//! The row renders the partner list twice back to back and the stylesheet
//! translates it from 0% to -50%, so the second copy lands exactly where the
//! first started and the loop is seamless.

#[cfg(test)]
#[path = "marquee_test.rs"]
mod marquee_test;

/// Default seconds for one full loop.
pub const DEFAULT_MARQUEE_SECS: u32 = 30;

/// The list followed by itself once.
#[must_use]
pub fn doubled<T: Clone>(items: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() * 2);
    out.extend_from_slice(items);
    out.extend_from_slice(items);
    out
}

/// Inline style carrying the loop duration as a CSS custom property.
#[must_use]
pub fn track_style(duration_secs: u32) -> String {
    format!("--marquee-duration: {}s", duration_secs.max(1))
}
