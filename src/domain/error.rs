//! Domain error types

use thiserror::Error;

/// Error when the input contains nothing but whitespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Input text is empty after whitespace normalization")]
pub struct EmptyInputError;
