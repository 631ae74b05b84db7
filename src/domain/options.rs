//! Prediction option value objects

use std::fmt;

use super::input::is_separator;

/// Number of top-ranked labels to request from the model.
///
/// Parsed leniently: a malformed value silently falls back to 1 instead of
/// being reported. Zero and negative values are passed to the backend
/// unchanged; the backend owns their meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopK(i32);

impl TopK {
    pub const DEFAULT: i32 = 1;

    pub fn new(k: i32) -> Self {
        Self(k)
    }

    /// Parse an optional argument, falling back to 1 when absent or malformed
    pub fn parse_lenient(arg: Option<&str>) -> Self {
        arg.and_then(parse_integer).map(Self).unwrap_or_default()
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

impl Default for TopK {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for TopK {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a decimal integer literal.
///
/// Accepts surrounding whitespace, one leading sign, and single underscores
/// between digits (`1_000`). Only ASCII digits are recognized. Values
/// outside `i32` are rejected.
fn parse_integer(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_matches(is_separator);
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }

    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    if !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    format!("{}{}", sign, cleaned).parse().ok()
}
