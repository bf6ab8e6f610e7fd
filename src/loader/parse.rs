use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Trailing single parenthetical: `Name (Size)`.
static SIZE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)\(([^()]*)\)\s*$").expect("size suffix pattern"));

/// Why a present cell produced no number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericError {
    #[error("blank cell")]
    Blank,

    #[error("not a number: {0:?}")]
    Unparseable(String),
}

/// Parse a nutrition cell such as `12g`, `1,200 mg` or ` 40 `.
///
/// Everything except digits, `.` and `-` is stripped before parsing.
pub fn parse_number(raw: &str) -> Result<f64, NumericError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NumericError::Blank);
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(NumericError::Unparseable(trimmed.to_string())),
    }
}

/// Parse an integer identifier cell. Anything else is treated as absent.
pub fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// Split `Name (Size)` into the canonical name and a candidate size.
///
/// Only a trailing parenthetical group triggers the split. If the name part
/// would be empty the original text is kept as the name.
pub fn split_size(text: &str) -> (String, Option<String>) {
    match SIZE_SUFFIX.captures(text) {
        Some(caps) => {
            let name = caps.get(1).map_or("", |m| m.as_str()).trim();
            let size = caps.get(2).map_or("", |m| m.as_str()).trim();
            let name = if name.is_empty() { text } else { name };
            let size = (!size.is_empty()).then(|| size.to_string());
            (name.to_string(), size)
        }
        None => (text.to_string(), None),
    }
}
