//! Input text value object

use std::fmt;

use super::error::EmptyInputError;

/// Value object holding text ready for classification.
///
/// Runs of whitespace (including newlines and tabs) are collapsed into a
/// single space and leading/trailing whitespace is removed. An instance is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputText(String);

impl InputText {
    /// Normalize raw text, rejecting input that is empty afterwards.
    pub fn new(raw: &str) -> Result<Self, EmptyInputError> {
        let normalized = normalize_whitespace(raw);
        if normalized.is_empty() {
            return Err(EmptyInputError);
        }
        Ok(Self(normalized))
    }

    /// Normalize raw bytes read from a stream.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected.
    pub fn from_bytes(raw: &[u8]) -> Result<Self, EmptyInputError> {
        Self::new(&String::from_utf8_lossy(raw))
    }

    /// Get the normalized text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the normalized text in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed value
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for InputText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for InputText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Word separators: Unicode `White_Space` plus the ASCII information
/// separators (`\x1c`..=`\x1f`).
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Collapse whitespace runs into single spaces and trim both ends.
pub fn normalize_whitespace(raw: &str) -> String {
    raw.split(is_separator)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
