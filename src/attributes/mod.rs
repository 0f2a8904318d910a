//! Numeric extraction from free-text breed attributes.

mod parser;

pub use parser::{ParsedRange, parse_percentage, parse_range};
