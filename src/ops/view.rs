//! Read-only views of the diary and the classifier.

use crate::classifier::Classifier;
use crate::constants::{EMPTY_DIARY_MESSAGE, UNKNOWN_DATE};
use crate::diary::DiaryStore;
use crate::errors::{AppResult, ValidationError};
use std::io::Write;

/// Lists entries most recent first, each with the index used by `edit` and `delete`.
pub fn list_entries<W: Write>(store: &DiaryStore, output: &mut W) -> AppResult<()> {
    if store.is_empty() {
        writeln!(output, "{}", EMPTY_DIARY_MESSAGE)?;
        return Ok(());
    }

    for (index, entry) in store.entries().iter().enumerate().rev() {
        let date = if entry.timestamp.is_empty() {
            UNKNOWN_DATE
        } else {
            entry.timestamp.as_str()
        };
        writeln!(output, "[{}] {}", index, date)?;
        for line in entry.text.lines() {
            writeln!(output, "    {}", line)?;
        }
        writeln!(output, "    Emotion: {}", entry.emotion)?;
        writeln!(output)?;
    }
    Ok(())
}

/// Prints whether the model is usable, how many entries the diary holds, and
/// any problem hit while loading either.
pub fn show_status<W: Write>(
    classifier: &Classifier,
    store: &DiaryStore,
    output: &mut W,
) -> AppResult<()> {
    writeln!(output, "{}", classifier.status())?;
    for error in classifier.load_errors() {
        writeln!(output, "  {}", error)?;
    }

    writeln!(output, "Diary: {} entries", store.len())?;
    if let Some(error) = store.load_error() {
        writeln!(output, "  {}", error)?;
    }
    Ok(())
}

/// Prints the emotion labels a note can be filed under.
pub fn show_labels<W: Write>(classifier: &Classifier, output: &mut W) -> AppResult<()> {
    let labels = classifier
        .labels()
        .ok_or(ValidationError::LabelsUnavailable)?;
    for name in labels.names() {
        writeln!(output, "{}", name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{EmotionLabelSet, Predictor};
    use crate::constants::{STATUS_MODEL_NOT_LOADED, STATUS_MODEL_READY};
    use crate::diary::DiaryEntry;
    use std::fs;
    use tempfile::tempdir;

    struct Constant;

    impl Predictor for Constant {
        fn predict(&self, _text: &str) -> i64 {
            0
        }
    }

    fn labels() -> EmotionLabelSet {
        EmotionLabelSet::from_pairs([("joy", 0), ("sadness", 1)]).unwrap()
    }

    #[test]
    fn test_list_empty_diary() {
        let temp_dir = tempdir().unwrap();
        let store = DiaryStore::open(temp_dir.path().join("emotion_diary.csv"), None);
        let mut output = Vec::new();

        list_entries(&store, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("{}\n", EMPTY_DIARY_MESSAGE)
        );
    }

    #[test]
    fn test_list_most_recent_first_with_indices() {
        let temp_dir = tempdir().unwrap();
        let mut store = DiaryStore::open(temp_dir.path().join("emotion_diary.csv"), Some(labels()));
        store.append(DiaryEntry::new("older note", "joy")).unwrap();
        store
            .append(DiaryEntry::new("newer note\nsecond line", "sadness"))
            .unwrap();

        let mut output = Vec::new();
        list_entries(&store, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        let newer = text.find("[1] ").unwrap();
        let older = text.find("[0] ").unwrap();
        assert!(newer < older);
        assert!(text.contains("    newer note\n    second line\n    Emotion: sadness\n"));
    }

    #[test]
    fn test_status_reports_load_problems() {
        let temp_dir = tempdir().unwrap();
        let diary = temp_dir.path().join("emotion_diary.csv");
        fs::write(&diary, "text,emotion,date\nbroken\n").unwrap();

        let classifier = Classifier::load(
            &temp_dir.path().join("emotion_model.json"),
            &temp_dir.path().join("emotion_mapping.json"),
        );
        let store = DiaryStore::open(&diary, None);

        let mut output = Vec::new();
        show_status(&classifier, &store, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with(STATUS_MODEL_NOT_LOADED));
        assert!(text.contains("emotion_model.json"));
        assert!(text.contains("Diary: 0 entries"));
        assert!(text.contains("malformed"));
    }

    #[test]
    fn test_status_ready() {
        let temp_dir = tempdir().unwrap();
        let classifier = Classifier::new(Box::new(Constant), labels());
        let store = DiaryStore::open(temp_dir.path().join("emotion_diary.csv"), Some(labels()));

        let mut output = Vec::new();
        show_status(&classifier, &store, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("{}\nDiary: 0 entries\n", STATUS_MODEL_READY)
        );
    }

    #[test]
    fn test_show_labels() {
        let classifier = Classifier::new(Box::new(Constant), labels());
        let mut output = Vec::new();
        show_labels(&classifier, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "joy\nsadness\n");
    }
}
