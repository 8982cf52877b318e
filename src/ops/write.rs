//! Analyze a note and save it to the diary.

use super::prompt::{prompt_label, LabelAnswer};
use crate::classifier::Classifier;
use crate::diary::{DiaryEntry, DiaryStore};
use crate::errors::{AppResult, ValidationError};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// How the detected label is confirmed before saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Ask "Is this correct?" and accept a correction.
    Ask,
    /// Save the detected label without asking.
    AssumeYes,
}

/// Classifies `text` and returns the detected emotion.
pub fn analyze_text(classifier: &Classifier, text: &str) -> AppResult<String> {
    let emotion = classifier.classify(text)?;
    info!("Analyzed note: emotion = {}", emotion);
    Ok(emotion)
}

/// Saves `text` to the diary under a confirmed emotion label.
///
/// When `emotion` is given it is used as-is and the classifier is not
/// consulted. Otherwise the text is classified, the detected label is printed,
/// and with [`Confirmation::Ask`] the user may correct it.
///
/// # Errors
///
/// - `ClassificationError` if no label was given and classification fails
/// - `ValidationError` if the text is blank or the label is unknown
/// - `PersistError` if the diary file cannot be written
/// - `AppError::Io` if the prompt cannot be read or written
pub fn write_entry<R: BufRead, W: Write>(
    classifier: &Classifier,
    store: &mut DiaryStore,
    text: &str,
    emotion: Option<&str>,
    confirmation: Confirmation,
    input: &mut R,
    output: &mut W,
) -> AppResult<DiaryEntry> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyText.into());
    }

    let emotion = match emotion {
        Some(label) => label.to_string(),
        None => {
            let detected = analyze_text(classifier, text)?;
            writeln!(output, "Detected Emotion: {}", detected)?;

            match confirmation {
                Confirmation::AssumeYes => detected,
                Confirmation::Ask => {
                    let labels = store.labels().ok_or(ValidationError::LabelsUnavailable)?;
                    let options: Vec<&str> = labels.names().collect();
                    match prompt_label(input, output, &options)? {
                        LabelAnswer::Accept => detected,
                        LabelAnswer::Replace(label) => {
                            debug!("User corrected '{}' to '{}'", detected, label);
                            label
                        }
                    }
                }
            }
        }
    };

    let saved = store.append(DiaryEntry::new(text, emotion))?.clone();

    writeln!(output, "Entry saved to diary successfully")?;
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{EmotionLabelSet, Predictor};
    use crate::errors::{AppError, ClassificationError};
    use std::io::Cursor;
    use tempfile::{tempdir, TempDir};

    struct KeywordPredictor;

    impl Predictor for KeywordPredictor {
        fn predict(&self, text: &str) -> i64 {
            if text.contains("passed") {
                0
            } else {
                1
            }
        }
    }

    fn labels() -> EmotionLabelSet {
        EmotionLabelSet::from_pairs([("joy", 0), ("sadness", 1), ("anger", 2)]).unwrap()
    }

    fn setup() -> (TempDir, Classifier, DiaryStore) {
        let temp_dir = tempdir().unwrap();
        let classifier = Classifier::new(Box::new(KeywordPredictor), labels());
        let store = DiaryStore::open(temp_dir.path().join("emotion_diary.csv"), Some(labels()));
        (temp_dir, classifier, store)
    }

    #[test]
    fn test_analyze_text() {
        let (_temp_dir, classifier, _store) = setup();
        assert_eq!(analyze_text(&classifier, "I passed my exam!").unwrap(), "joy");
        assert!(matches!(
            analyze_text(&classifier, ""),
            Err(AppError::Classification(ClassificationError::EmptyInput))
        ));
    }

    #[test]
    fn test_write_entry_accepts_detected_label() {
        let (_temp_dir, classifier, mut store) = setup();
        let mut input = Cursor::new(b"y\n".to_vec());
        let mut output = Vec::new();

        let saved = write_entry(
            &classifier,
            &mut store,
            "I passed my exam!",
            None,
            Confirmation::Ask,
            &mut input,
            &mut output,
        )
        .unwrap();

        assert_eq!(saved.emotion, "joy");
        assert_eq!(store.load().len(), 1);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Detected Emotion: joy"));
        assert!(text.contains("Entry saved to diary successfully"));
    }

    #[test]
    fn test_write_entry_with_correction() {
        let (_temp_dir, classifier, mut store) = setup();
        let mut input = Cursor::new(b"anger\n".to_vec());
        let mut output = Vec::new();

        let saved = write_entry(
            &classifier,
            &mut store,
            "Stuck in traffic again",
            None,
            Confirmation::Ask,
            &mut input,
            &mut output,
        )
        .unwrap();

        assert_eq!(saved.emotion, "anger");
        assert_eq!(store.entries()[0].emotion, "anger");
    }

    #[test]
    fn test_write_entry_with_explicit_emotion_skips_classifier() {
        let temp_dir = tempdir().unwrap();
        let disabled = Classifier::load(
            &temp_dir.path().join("missing_model.json"),
            &temp_dir.path().join("missing_mapping.json"),
        );
        let mut store =
            DiaryStore::open(temp_dir.path().join("emotion_diary.csv"), Some(labels()));
        let mut output = Vec::new();

        let saved = write_entry(
            &disabled,
            &mut store,
            "Quiet evening",
            Some("joy"),
            Confirmation::Ask,
            &mut Cursor::new(Vec::<u8>::new()),
            &mut output,
        )
        .unwrap();

        assert_eq!(saved.emotion, "joy");
        assert!(!String::from_utf8(output).unwrap().contains("Detected Emotion"));
    }

    #[test]
    fn test_write_entry_without_model_fails() {
        let temp_dir = tempdir().unwrap();
        let disabled = Classifier::load(
            &temp_dir.path().join("missing_model.json"),
            &temp_dir.path().join("missing_mapping.json"),
        );
        let mut store =
            DiaryStore::open(temp_dir.path().join("emotion_diary.csv"), Some(labels()));

        let err = write_entry(
            &disabled,
            &mut store,
            "Anything",
            None,
            Confirmation::AssumeYes,
            &mut Cursor::new(Vec::<u8>::new()),
            &mut Vec::<u8>::new(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            AppError::Classification(ClassificationError::ModelUnavailable)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_write_entry_rejects_blank_text() {
        let (_temp_dir, classifier, mut store) = setup();
        let err = write_entry(
            &classifier,
            &mut store,
            "   ",
            Some("joy"),
            Confirmation::AssumeYes,
            &mut Cursor::new(Vec::<u8>::new()),
            &mut Vec::<u8>::new(),
        )
        .unwrap_err();

        assert!(matches!(err, AppError::Validation(ValidationError::EmptyText)));
    }
}
