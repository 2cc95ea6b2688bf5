//! Lenient integer parsing for values read out of page markup.
//!
//! Markup values arrive as free-form strings (`"150"`, `" 3 "`, `"12abc"`).
//! They follow the browser's `parseInt` reading: optional leading whitespace,
//! an optional sign, then the longest run of decimal digits. Anything else is
//! "not a number" and callers pick their own fallback.

use num_traits::cast::cast;
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_INT: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^\s*([+-]?)(\d+)").ok());

/// Parse the leading integer of `raw`, saturating at the `i64` range.
///
/// Returns `None` when no digits follow the optional sign.
#[must_use]
pub fn parse_int(raw: &str) -> Option<i64> {
    let caps = LEADING_INT.as_ref()?.captures(raw)?;
    let negative = caps.get(1).is_some_and(|sign| sign.as_str() == "-");
    let digits = caps.get(2)?.as_str();
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Coerce a numeric host value into whole points, truncating toward zero.
///
/// Non-finite values become 0; out-of-range values clamp to the `i64` range.
#[must_use]
pub fn points_from_f64(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let saturated = if value.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    };
    cast::<f64, i64>(value.trunc()).unwrap_or(saturated)
}

/// Coerce an optional markup string into points, defaulting to 0.
#[must_use]
pub fn points_from_str(raw: Option<&str>) -> i64 {
    raw.and_then(parse_int).unwrap_or(0)
}
