//! Predict-prob use case

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::domain::{EmptyInputError, InputText, Prediction, TopK};

use super::ports::{ClassifierError, ModelLoader};

/// Errors from the predict use case
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    #[error(transparent)]
    EmptyInput(#[from] EmptyInputError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Input parameters for the predict use case
#[derive(Debug, Clone)]
pub struct PredictInput {
    /// Path to the model file, handed to the backend as-is
    pub model_path: PathBuf,
    /// Raw text as read from the input stream
    pub raw_text: Vec<u8>,
    /// Number of labels requested
    pub k: TopK,
}

/// Output from the predict use case
#[derive(Debug, Clone, PartialEq)]
pub struct PredictOutput {
    /// Normalized text the model was run on
    pub text: InputText,
    /// Predictions in backend order
    pub predictions: Vec<Prediction>,
}

/// Normalize, load, predict.
///
/// The model is only loaded once the input is known to be non-empty.
pub struct PredictUseCase<L>
where
    L: ModelLoader,
{
    loader: L,
}

impl<L> PredictUseCase<L>
where
    L: ModelLoader,
{
    /// Create a new use case instance
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Execute the prediction workflow
    pub fn execute(&self, input: PredictInput) -> Result<PredictOutput, PredictError> {
        let text = InputText::from_bytes(&input.raw_text)?;
        debug!(
            raw_bytes = input.raw_text.len(),
            normalized_bytes = text.len(),
            "normalized input"
        );

        debug!(
            backend = self.loader.name(),
            model = %input.model_path.display(),
            "loading model"
        );
        let model = self.loader.load(&input.model_path)?;

        let predictions = model.predict(&text, input.k)?;
        debug!(
            k = input.k.get(),
            count = predictions.len(),
            "prediction complete"
        );

        Ok(PredictOutput { text, predictions })
    }
}
