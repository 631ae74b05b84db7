//! Prediction value object

use std::fmt;

/// A single predicted label with its probability.
///
/// The label is the model's own identifier (commonly prefixed, e.g.
/// `__label__en`) and is never rewritten.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub probability: f32,
}

impl Prediction {
    pub fn new(label: impl Into<String>, probability: f32) -> Self {
        Self {
            label: label.into(),
            probability,
        }
    }
}

/// Formats as `<label> <probability>`, the output line format.
impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.probability)
    }
}
