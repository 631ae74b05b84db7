//! Backend factory

use crate::application::ports::{ClassifierError, ModelLoader};

/// Create the model loader compiled into this binary.
///
/// Fails with [`ClassifierError::Unavailable`] when no backend was built in.
pub fn create_loader() -> Result<Box<dyn ModelLoader>, ClassifierError> {
    #[cfg(feature = "fasttext")]
    {
        Ok(Box::new(super::FastTextLoader::new()))
    }

    #[cfg(not(feature = "fasttext"))]
    {
        Err(ClassifierError::Unavailable)
    }
}
