//! Classification backend port interface

use std::path::Path;

use thiserror::Error;

use crate::domain::{InputText, Prediction, TopK};

/// Classification backend errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifierError {
    #[error("fastText backend not available. Install a build with it enabled: cargo install fasttext-cli --features fasttext")]
    Unavailable,

    #[error("Failed to load model '{path}': {message}")]
    Load { path: String, message: String },

    #[error("Prediction failed: {0}")]
    Predict(String),
}

/// Port for a loaded text classification model
pub trait Classifier {
    /// Predict the top-k labels for the text.
    ///
    /// # Arguments
    /// * `text` - Normalized input text
    /// * `k` - Number of labels requested
    ///
    /// # Returns
    /// At most `k` predictions, in the order chosen by the backend
    fn predict(&self, text: &InputText, k: TopK) -> Result<Vec<Prediction>, ClassifierError>;
}

/// Port for loading a model from disk
pub trait ModelLoader {
    /// Short backend name, used in diagnostics
    fn name(&self) -> &'static str;

    /// Load the model stored at `path`.
    fn load(&self, path: &Path) -> Result<Box<dyn Classifier>, ClassifierError>;
}

impl<T: ModelLoader + ?Sized> ModelLoader for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn load(&self, path: &Path) -> Result<Box<dyn Classifier>, ClassifierError> {
        (**self).load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_error_explains_how_to_install() {
        let message = ClassifierError::Unavailable.to_string();
        assert!(message.contains("not available"));
        assert!(message.contains("--features fasttext"));
    }

    #[test]
    fn load_error_names_the_path() {
        let err = ClassifierError::Load {
            path: "models/lid.176.bin".to_string(),
            message: "No such file".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to load model 'models/lid.176.bin': No such file"
        );
    }
}
