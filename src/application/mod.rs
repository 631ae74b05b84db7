//! Application layer - Use cases and port interfaces
//!
//! Contains the prediction workflow and the trait definitions
//! for the external classification backend.

pub mod ports;
pub mod predict;

// Re-export use cases
pub use predict::{PredictError, PredictInput, PredictOutput, PredictUseCase};
