use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::validation::ValidationError;

/// Matches a percent-escape as emitted by `urlencoding` (uppercase hex).
fn escape_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"%[0-9A-F]{2}").expect("invalid regex"))
}

/// Percent-encodes a query value and lowercases every escape.
///
/// The unreserved set is `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, so `!'()*` pass
/// through untouched. Escapes are lowercased (`/` becomes `%2f`) because the
/// tracking server signs the lowercase form.
pub fn encode_string(value: &str) -> String {
    let encoded = urlencoding::encode(value);
    escape_pattern()
        .replace_all(&encoded, |caps: &Captures| match &caps[0] {
            "%21" => "!".to_string(),
            "%27" => "'".to_string(),
            "%28" => "(".to_string(),
            "%29" => ")".to_string(),
            "%2A" => "*".to_string(),
            escape => escape.to_ascii_lowercase(),
        })
        .into_owned()
}

/// Renders an amount with exactly two decimal places.
///
/// Rounds half away from zero on `value * 100`. Negative zero renders as
/// `0.00`.
pub fn encode_number(value: f64) -> Result<String, ValidationError> {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return Err(ValidationError::NonFinite {
            value: value.to_string(),
        });
    }
    let mut rounded = scaled.round() / 100.0;
    if rounded == 0.0 {
        rounded = 0.0;
    }
    Ok(format!("{rounded:.2}"))
}

/// Parses an amount supplied as text, ignoring surrounding whitespace.
///
/// The whole string must be numeric; `"12abc"` is rejected rather than
/// truncated.
pub fn parse_amount(value: &str) -> Result<f64, ValidationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotNumeric {
            value: value.to_string(),
        })
}
