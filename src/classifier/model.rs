//! Bag-of-words linear model read from a JSON artifact.
//!
//! The artifact is produced offline by whatever trained the classifier; this
//! module only scores text against the exported weights.

use super::Predictor;
use crate::errors::{ArtifactProblem, LoadError};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// A linear classifier over lowercase word counts.
///
/// Each class `i` scores `intercepts[i] + Σ vocabulary[token][i]` over the
/// tokens of the input, and the highest-scoring class code is predicted.
/// Tokens outside the vocabulary contribute nothing.
#[derive(Debug, Clone, Deserialize)]
pub struct BagOfWordsModel {
    classes: Vec<i64>,
    intercepts: Vec<f64>,
    vocabulary: HashMap<String, Vec<f64>>,
}

impl BagOfWordsModel {
    /// Builds a model from its parts, checking that every weight vector has
    /// one entry per class.
    pub fn new(
        classes: Vec<i64>,
        intercepts: Vec<f64>,
        vocabulary: HashMap<String, Vec<f64>>,
    ) -> Result<Self, ArtifactProblem> {
        let model = Self {
            classes,
            intercepts,
            vocabulary,
        };
        model.check_shape()?;
        Ok(model)
    }

    /// Reads and validates a model artifact.
    ///
    /// # Errors
    ///
    /// - `LoadError::ArtifactMissing` if the file cannot be opened
    /// - `LoadError::ArtifactCorrupt` if the JSON does not match the model layout
    /// - `LoadError::ArtifactInvalid` if vector lengths disagree with `classes`
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::ArtifactMissing {
            path: path.to_path_buf(),
            source,
        })?;

        let model: Self = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            LoadError::ArtifactCorrupt {
                path: path.to_path_buf(),
                source,
            }
        })?;

        model
            .check_shape()
            .map_err(|reason| LoadError::ArtifactInvalid {
                path: path.to_path_buf(),
                reason,
            })?;

        debug!(
            "Loaded model with {} classes and {} vocabulary terms",
            model.classes.len(),
            model.vocabulary.len()
        );
        Ok(model)
    }

    fn check_shape(&self) -> Result<(), ArtifactProblem> {
        let width = self.classes.len();
        if width == 0 {
            return Err(ArtifactProblem::NoClasses);
        }
        if self.intercepts.len() != width {
            return Err(ArtifactProblem::InterceptCount {
                expected: width,
                found: self.intercepts.len(),
            });
        }
        if let Some((term, weights)) = self.vocabulary.iter().find(|(_, w)| w.len() != width) {
            return Err(ArtifactProblem::WeightCount {
                term: term.clone(),
                expected: width,
                found: weights.len(),
            });
        }
        Ok(())
    }

    /// Class codes in score order.
    pub fn classes(&self) -> &[i64] {
        &self.classes
    }
}

impl Predictor for BagOfWordsModel {
    fn predict(&self, text: &str) -> i64 {
        let mut scores = self.intercepts.clone();

        for token in tokenize(text) {
            if let Some(weights) = self.vocabulary.get(&token) {
                for (score, weight) in scores.iter_mut().zip(weights) {
                    *score += weight;
                }
            }
        }

        // Strict comparison keeps the first class on ties.
        let mut best = 0;
        for (i, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = i;
            }
        }
        self.classes[best]
    }
}

/// Splits text into lowercase word tokens.
///
/// Apostrophes are kept when they sit between letters ("don't"), otherwise
/// every non-alphanumeric character is a separator.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        let inner_apostrophe = (ch == '\'' || ch == '’')
            && !current.is_empty()
            && chars.get(i + 1).is_some_and(|next| next.is_alphanumeric());

        if ch.is_alphanumeric() {
            current.push(ch);
        } else if inner_apostrophe {
            current.push('\'');
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_model() -> BagOfWordsModel {
        let vocabulary = HashMap::from([
            ("happy".to_string(), vec![2.0, -1.0, 0.0]),
            ("passed".to_string(), vec![1.5, 0.0, 0.0]),
            ("cry".to_string(), vec![-1.0, 2.0, 0.0]),
            ("scared".to_string(), vec![0.0, 0.5, 2.5]),
        ]);
        BagOfWordsModel::new(vec![10, 20, 30], vec![0.0, 0.1, 0.0], vocabulary).unwrap()
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("I passed my exam!"),
            vec!["i", "passed", "my", "exam"]
        );
        assert_eq!(tokenize("Don't   STOP"), vec!["don't", "stop"]);
        assert_eq!(tokenize("'quoted' words-here"), vec!["quoted", "words", "here"]);
        assert!(tokenize("  ...  ").is_empty());
    }

    #[test]
    fn test_predict_picks_highest_score() {
        let model = sample_model();
        assert_eq!(model.predict("I passed my exam, so happy!"), 10);
        assert_eq!(model.predict("I want to cry"), 20);
        assert_eq!(model.predict("So SCARED of tomorrow"), 30);
    }

    #[test]
    fn test_predict_unknown_words_fall_back_to_intercepts() {
        let model = sample_model();
        assert_eq!(model.predict("lorem ipsum"), 20);
    }

    #[test]
    fn test_predict_tie_keeps_first_class() {
        let model =
            BagOfWordsModel::new(vec![5, 6], vec![1.0, 1.0], HashMap::new()).unwrap();
        assert_eq!(model.predict("anything"), 5);
    }

    #[test]
    fn test_new_rejects_mismatched_shapes() {
        assert_eq!(
            BagOfWordsModel::new(vec![], vec![], HashMap::new()).unwrap_err(),
            ArtifactProblem::NoClasses
        );
        assert_eq!(
            BagOfWordsModel::new(vec![0, 1], vec![0.0], HashMap::new()).unwrap_err(),
            ArtifactProblem::InterceptCount {
                expected: 2,
                found: 1
            }
        );

        let vocabulary = HashMap::from([("joy".to_string(), vec![1.0])]);
        let err = BagOfWordsModel::new(vec![0, 1], vec![0.0, 0.0], vocabulary).unwrap_err();
        assert_eq!(
            err,
            ArtifactProblem::WeightCount {
                term: "joy".to_string(),
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_load_from_json() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let path = temp_dir.path().join("emotion_model.json");
        fs::write(
            &path,
            r#"{"classes": [0, 1], "intercepts": [0.0, 0.0],
                "vocabulary": {"happy": [1.0, -1.0], "sad": [-1.0, 1.0]}}"#,
        )
        .unwrap();

        let model = BagOfWordsModel::load(&path).expect("model should load");
        assert_eq!(model.classes(), &[0, 1]);
        assert_eq!(model.predict("so sad"), 1);
    }

    #[test]
    fn test_load_rejects_invalid_artifacts() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");

        let corrupt = temp_dir.path().join("corrupt.json");
        fs::write(&corrupt, "not a model").unwrap();
        assert!(matches!(
            BagOfWordsModel::load(&corrupt),
            Err(LoadError::ArtifactCorrupt { .. })
        ));

        let invalid = temp_dir.path().join("invalid.json");
        fs::write(
            &invalid,
            r#"{"classes": [0, 1], "intercepts": [0.0], "vocabulary": {}}"#,
        )
        .unwrap();
        assert!(matches!(
            BagOfWordsModel::load(&invalid),
            Err(LoadError::ArtifactInvalid {
                reason: ArtifactProblem::InterceptCount { .. },
                ..
            })
        ));
    }
}
