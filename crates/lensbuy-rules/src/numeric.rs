//! Shared numeric helpers for the promotion and diopter parsers.
//!
//! Both mini-languages embed numbers in free text typed by merchandisers.
//! Helpers return `None` instead of an error and callers skip whatever they
//! cannot read.

use std::sync::LazyLock;

use regex::Regex;

/// Longest leading decimal literal, after optional leading whitespace.
///
/// Mirrors lenient float parsing: `"-1.00D"` reads as `-1.00`, `".5"` as
/// `0.5`, `"-Infinity"` as negative infinity, and a string with no numeric
/// prefix is rejected.
static LEADING_DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*([+-]?)(Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)",
    )
    .expect("valid leading decimal regex")
});

/// Parses an ASCII digit run captured by a rule pattern.
///
/// Returns `None` when the run does not fit in a `u32`.
#[must_use]
pub fn parse_count(digits: &str) -> Option<u32> {
    digits.parse::<u32>().ok()
}

/// Parses the leading decimal number of `s`, ignoring any trailing text.
///
/// Returns `None` when `s` does not start with a number (after whitespace).
/// `Infinity` and literals too large for `f64` read as infinite.
#[must_use]
pub fn leading_decimal(s: &str) -> Option<f64> {
    let caps = LEADING_DECIMAL.captures(s)?;
    let magnitude = match &caps[2] {
        "Infinity" => f64::INFINITY,
        digits => digits.parse::<f64>().ok()?,
    };
    Some(if &caps[1] == "-" { -magnitude } else { magnitude })
}

/// Formats `value` with exactly two fraction digits.
///
/// Negative zero is rendered as `"0.00"`. Other negatives that round to zero
/// keep their sign (`"-0.00"`), which matches no master option.
#[must_use]
pub fn format_hundredths(value: f64) -> String {
    if value == 0.0 {
        "0.00".to_string()
    } else {
        format!("{value:.2}")
    }
}

/// Formats a value held in hundredths (e.g. `-125` → `"-1.25"`).
#[must_use]
pub fn format_centi(centi: i32) -> String {
    let sign = if centi < 0 { "-" } else { "" };
    let abs = centi.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
