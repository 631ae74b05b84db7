//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the external classification library.

pub mod classifier;

// Re-export adapters
pub use classifier::create_loader;
#[cfg(feature = "fasttext")]
pub use classifier::FastTextLoader;
