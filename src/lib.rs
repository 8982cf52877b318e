/*!
# Emotion Diary

Emotion Diary lets you write short notes, detects the emotion in each one with
a pre-trained text classifier, and keeps the labeled notes in a flat CSV diary
that you can list, edit, delete from, and export.

## Architecture

- `classifier`: adapter around the pre-trained model and its emotion labels
- `diary`: diary entries and the CSV-backed store with write-through persistence
- `ops`: user-facing operations that tie the two together
- `cli`: command-line interface handling using clap
- `config`: configuration loading and validation
- `errors`: error handling infrastructure

## Usage Example

```rust,no_run
use emotion_diary::{Classifier, Config, DiaryEntry, DiaryStore};

fn main() -> emotion_diary::AppResult<()> {
    let config = Config::load()?;
    let classifier = Classifier::load(&config.model_file, &config.mapping_file);
    let mut store = DiaryStore::open(&config.diary_file, classifier.labels().cloned());

    let emotion = classifier.classify("I passed my exam!")?;
    store.append(DiaryEntry::new("I passed my exam!", emotion))?;
    Ok(())
}
```
*/

/// Classifier adapter and emotion labels
pub mod classifier;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Diary entries and their flat-file store
pub mod diary;
/// Error types and utilities for error handling
pub mod errors;
/// High-level operations behind each command
pub mod ops;

// Re-export important types for convenience
pub use classifier::{Classifier, EmotionLabelSet, Predictor};
pub use cli::CliArgs;
pub use config::Config;
pub use diary::{DiaryEntry, DiaryStore};
pub use errors::{AppError, AppResult};
