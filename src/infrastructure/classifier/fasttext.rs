//! fastText classifier adapter
//!
//! Wraps the `fasttext` crate, which binds the reference C++ library.

use std::path::Path;

use ::fasttext::FastText;
use tracing::debug;

use crate::application::ports::{Classifier, ClassifierError, ModelLoader};
use crate::domain::{InputText, Prediction, TopK};

/// Loads `.bin` / `.ftz` models with the fastText library
pub struct FastTextLoader;

impl FastTextLoader {
    /// Create a new fastText loader
    pub fn new() -> Self {
        Self
    }
}

impl Default for FastTextLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelLoader for FastTextLoader {
    fn name(&self) -> &'static str {
        "fasttext"
    }

    fn load(&self, path: &Path) -> Result<Box<dyn Classifier>, ClassifierError> {
        let display = path.display().to_string();
        let path_str = path.to_str().ok_or_else(|| ClassifierError::Load {
            path: display.clone(),
            message: "path is not valid UTF-8".to_string(),
        })?;

        let mut model = FastText::new();
        model
            .load_model(path_str)
            .map_err(|message| ClassifierError::Load {
                path: display,
                message,
            })?;
        debug!(path = path_str, "fastText model loaded");

        Ok(Box::new(FastTextClassifier { model }))
    }
}

/// Probability threshold handed to fastText; every label is eligible
const NO_THRESHOLD: f32 = 0.0;

/// A loaded fastText model
pub struct FastTextClassifier {
    model: FastText,
}

impl Classifier for FastTextClassifier {
    fn predict(&self, text: &InputText, k: TopK) -> Result<Vec<Prediction>, ClassifierError> {
        let predictions = self
            .model
            .predict(text.as_str(), k.get(), NO_THRESHOLD)
            .map_err(ClassifierError::Predict)?;

        Ok(predictions
            .into_iter()
            .map(|p| Prediction::new(p.label, p.prob))
            .collect())
    }
}
