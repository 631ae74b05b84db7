//! Domain layer - Core value objects
//!
//! Contains input normalization, the top-k option, prediction results
//! and domain errors. This layer has no dependencies on external systems.

pub mod error;
pub mod input;
pub mod options;
pub mod prediction;

// Re-export common types
pub use error::*;
pub use input::InputText;
pub use options::TopK;
pub use prediction::Prediction;
