//! Port interfaces (traits) for external systems
//!
//! These traits define the boundary between the application
//! and infrastructure layers.

pub mod classifier;

// Re-export common types
pub use classifier::{Classifier, ClassifierError, ModelLoader};
