//! Range parsing for attribute strings such as `"1200-1800 liters/lactation"`.
//!
//! Policy:
//! 1. A trailing `%` and trailing unit words are ignored.
//! 2. With a `-` separator the text splits into two parts and the leading
//!    numeric token of each part is a bound; `average = (min + max) / 2`.
//! 3. Without a separator the single leading numeric token is used for
//!    `min`, `max` and `average`.
//! 4. No numeric token yields [`Error::UnparsableAttribute`]; callers exclude
//!    the record from numeric comparisons instead of aborting.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Numeric bounds derived from an attribute string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Midpoint of the range.
    pub average: f64,
}

impl ParsedRange {
    fn between(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            average: f64::midpoint(min, max),
        }
    }

    fn single(value: f64) -> Self {
        Self {
            min: value,
            max: value,
            average: value,
        }
    }
}

/// Parse a range such as `"1200-1800 liters/lactation"` or `"305 days"`.
pub fn parse_range(text: &str) -> Result<ParsedRange> {
    let unparsable = || Error::UnparsableAttribute {
        text: text.to_string(),
    };

    match text.split_once('-') {
        Some((low, high)) => {
            let min = leading_number(low).ok_or_else(unparsable)?;
            let max = leading_number(high).ok_or_else(unparsable)?;
            Ok(ParsedRange::between(min, max))
        }
        None => leading_number(text)
            .map(ParsedRange::single)
            .ok_or_else(unparsable),
    }
}

/// Parse a percentage range such as `"4.5-5.0%"`.
pub fn parse_percentage(text: &str) -> Result<ParsedRange> {
    let stripped = text.replace('%', "");
    parse_range(&stripped).map_err(|_| Error::UnparsableAttribute {
        text: text.to_string(),
    })
}

/// Leading numeric token of `text`, ignoring surrounding whitespace and any
/// trailing unit words.
fn leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let end = trimmed
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.'))
        .map_or(trimmed.len(), |(idx, _)| idx);

    let token = &trimmed[..end];
    if token.is_empty() {
        return None;
    }
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}
