//! Classification backend module
//!
//! The fastText backend is compiled in with the `fasttext` cargo feature.
//! Without it the factory reports the backend as unavailable.

mod factory;
#[cfg(feature = "fasttext")]
mod fasttext;

pub use factory::create_loader;
#[cfg(feature = "fasttext")]
pub use self::fasttext::{FastTextClassifier, FastTextLoader};
