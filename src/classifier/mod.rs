//! Classifier adapter around a pre-trained emotion model.
//!
//! The model itself is opaque: anything implementing [`Predictor`] maps text to
//! a numeric code, and the adapter turns that code into a human-readable label
//! through the [`EmotionLabelSet`] loaded alongside it.
//!
//! Both artifacts are loaded once at startup. If either fails, the adapter is
//! still constructed but stays disabled, and every `classify` call reports
//! `ClassificationError::ModelUnavailable`.

pub mod labels;
pub mod model;

pub use labels::EmotionLabelSet;
pub use model::BagOfWordsModel;

use crate::constants::{STATUS_MODEL_NOT_LOADED, STATUS_MODEL_READY};
use crate::errors::{ClassificationError, LoadError};
use std::path::Path;
use tracing::{debug, info, warn};

/// A pre-trained text model that predicts a numeric emotion code.
pub trait Predictor {
    fn predict(&self, text: &str) -> i64;
}

/// Wraps a predictor and its label mapping; exposes `classify(text) -> label`.
pub struct Classifier {
    predictor: Option<Box<dyn Predictor>>,
    labels: Option<EmotionLabelSet>,
    load_errors: Vec<LoadError>,
}

impl Classifier {
    /// Builds a ready classifier from an in-memory predictor and label set.
    pub fn new(predictor: Box<dyn Predictor>, labels: EmotionLabelSet) -> Self {
        Self {
            predictor: Some(predictor),
            labels: Some(labels),
            load_errors: Vec::new(),
        }
    }

    /// Loads the model and mapping artifacts, failing soft.
    ///
    /// A missing or corrupt artifact is logged and remembered; the returned
    /// classifier reports itself as not ready. The label set is kept even when
    /// only the model failed, so entries can still be edited and validated.
    pub fn load(model_path: &Path, mapping_path: &Path) -> Self {
        let mut load_errors = Vec::new();

        let predictor = match BagOfWordsModel::load(model_path) {
            Ok(model) => Some(Box::new(model) as Box<dyn Predictor>),
            Err(e) => {
                warn!("Error loading model: {}", e);
                load_errors.push(e);
                None
            }
        };

        let labels = match EmotionLabelSet::load(mapping_path) {
            Ok(labels) => Some(labels),
            Err(e) => {
                warn!("Error loading emotion mapping: {}", e);
                load_errors.push(e);
                None
            }
        };

        let classifier = Self {
            predictor,
            labels,
            load_errors,
        };
        if classifier.is_ready() {
            info!("Model loaded successfully");
        }
        classifier
    }

    /// Whether both the predictor and the label mapping are available.
    pub fn is_ready(&self) -> bool {
        self.predictor.is_some() && self.labels.is_some()
    }

    /// Human-readable status line for the front end.
    pub fn status(&self) -> &'static str {
        if self.is_ready() {
            STATUS_MODEL_READY
        } else {
            STATUS_MODEL_NOT_LOADED
        }
    }

    pub fn labels(&self) -> Option<&EmotionLabelSet> {
        self.labels.as_ref()
    }

    /// Errors recorded while loading the artifacts.
    pub fn load_errors(&self) -> &[LoadError] {
        &self.load_errors
    }

    /// Predicts the emotion label of `text`.
    ///
    /// The input is trimmed before prediction.
    ///
    /// # Errors
    ///
    /// - `ClassificationError::ModelUnavailable` if either artifact failed to load
    /// - `ClassificationError::EmptyInput` if the text is blank
    /// - `ClassificationError::UnmappedCode` if the model predicts a code the
    ///   mapping does not contain
    pub fn classify(&self, text: &str) -> Result<String, ClassificationError> {
        let (predictor, labels) = match (&self.predictor, &self.labels) {
            (Some(predictor), Some(labels)) => (predictor, labels),
            _ => return Err(ClassificationError::ModelUnavailable),
        };

        let text = text.trim();
        if text.is_empty() {
            return Err(ClassificationError::EmptyInput);
        }

        let code = predictor.predict(text);
        let emotion = labels
            .name_for(code)
            .ok_or(ClassificationError::UnmappedCode { code })?;

        debug!("Classified {} chars as '{}'", text.len(), emotion);
        Ok(emotion.to_string())
    }
}
