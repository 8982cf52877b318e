//! Error handling utilities for the emotion diary application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! None of these errors are fatal to the process: load failures degrade the
//! diary or classifier to an empty/disabled state, and everything else is
//! reported once at the binary boundary.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the model artifacts or the diary backing file.
///
/// Load errors are non-fatal. The classifier is disabled when a model artifact
/// fails, and the diary starts empty when its backing file fails.
///
/// # Examples
///
/// ```
/// use emotion_diary::errors::LoadError;
/// use std::io::{self, ErrorKind};
/// use std::path::PathBuf;
///
/// let error = LoadError::ArtifactMissing {
///     path: PathBuf::from("/data/emotion_model.json"),
///     source: io::Error::new(ErrorKind::NotFound, "no such file"),
/// };
///
/// assert!(format!("{}", error).contains("emotion_model.json"));
/// ```
#[derive(Debug, Error)]
pub enum LoadError {
    /// A model artifact could not be opened.
    #[error("Model artifact {path} could not be opened: {source}. Place the trained model files in the data directory or point EMOTION_DIARY_MODEL / EMOTION_DIARY_MAPPING at them.")]
    ArtifactMissing {
        /// Path of the artifact
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A model artifact is not valid JSON of the expected shape.
    #[error("Model artifact {path} is corrupt: {source}")]
    ArtifactCorrupt {
        /// Path of the artifact
        path: PathBuf,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// A model artifact parsed but its contents are inconsistent.
    #[error("Model artifact {path} is invalid: {reason}")]
    ArtifactInvalid {
        /// Path of the artifact
        path: PathBuf,
        /// What is wrong with it
        reason: ArtifactProblem,
    },

    /// The diary file exists but could not be read.
    #[error("Diary file {path} could not be read: {source}")]
    DiaryUnreadable {
        /// Path of the diary file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The diary file is not well-formed CSV with the expected columns.
    #[error("Diary file {path} is malformed: {source}")]
    DiaryMalformed {
        /// Path of the diary file
        path: PathBuf,
        /// The underlying CSV error
        #[source]
        source: csv::Error,
    },

    /// The diary file lacks a required column.
    #[error("Diary file {path} has no '{column}' column")]
    DiaryMissingColumn {
        /// Path of the diary file
        path: PathBuf,
        /// Name of the missing column
        column: &'static str,
    },
}

/// Inconsistencies found in a model artifact that parsed as JSON.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArtifactProblem {
    #[error("model has no classes")]
    NoClasses,

    #[error("expected {expected} intercepts, found {found}")]
    InterceptCount { expected: usize, found: usize },

    #[error("term '{term}' has {found} weights, expected {expected}")]
    WeightCount {
        term: String,
        expected: usize,
        found: usize,
    },

    #[error("the label mapping is empty")]
    EmptyMapping,

    #[error("emotion names cannot be blank")]
    BlankName,

    #[error("emotion '{name}' is listed twice")]
    DuplicateName { name: String },

    #[error("code {code} is used by both '{first}' and '{second}'")]
    DuplicateCode {
        code: i64,
        first: String,
        second: String,
    },
}

/// Errors for user input that is rejected before any state changes.
///
/// # Examples
///
/// ```
/// use emotion_diary::errors::ValidationError;
///
/// let error = ValidationError::EmptyText;
/// assert_eq!(format!("{}", error), "Text cannot be empty");
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Entry text is empty or whitespace only.
    #[error("Text cannot be empty")]
    EmptyText,

    /// Emotion is not one of the loaded labels.
    #[error("Unknown emotion '{emotion}'. Run `emotion-diary labels` to see the available emotions.")]
    UnknownEmotion {
        /// The rejected label
        emotion: String,
    },

    /// No entry exists at the given position.
    #[error("No diary entry at index {index} (the diary has {len} entries)")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Number of entries
        len: usize,
    },

    /// The label mapping did not load, so no emotion can be validated.
    #[error("Emotion labels are not loaded. Please ensure model files are available.")]
    LabelsUnavailable,
}

/// Errors raised by the classifier adapter.
///
/// # Examples
///
/// ```
/// use emotion_diary::errors::ClassificationError;
///
/// let error = ClassificationError::ModelUnavailable;
/// assert!(format!("{}", error).contains("Model not loaded"));
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassificationError {
    /// The predictor or label mapping failed to load at startup.
    #[error("Model not loaded. Please ensure model files are available.")]
    ModelUnavailable,

    /// Nothing to classify.
    #[error("Please enter text for analysis")]
    EmptyInput,

    /// The predictor returned a code the mapping does not know.
    #[error("Model produced code {code}, which has no emotion label")]
    UnmappedCode {
        /// The predicted code
        code: i64,
    },
}

/// Errors raised while writing the diary or its export.
///
/// When persisting fails the in-memory diary keeps the mutation, but it is not
/// guaranteed to be on disk.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The backing file or its temporary sibling could not be written.
    #[error("Failed to save diary to {path}: {source}. Please check disk space and directory permissions.")]
    Write {
        /// Path of the diary file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An entry could not be encoded as CSV.
    #[error("Failed to encode diary for {path}: {source}")]
    Encode {
        /// Path of the diary file
        path: PathBuf,
        /// The underlying CSV error
        #[source]
        source: csv::Error,
    },

    /// The export file could not be written.
    #[error("Failed to export diary to {path}: {source}")]
    Export {
        /// Path of the export file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents errors that can occur when attempting to lock the diary file.
///
/// # Examples
///
/// ```
/// use emotion_diary::errors::LockError;
/// use std::path::PathBuf;
///
/// let error = LockError::FileBusy {
///     path: PathBuf::from("/path/to/emotion_diary.csv"),
/// };
///
/// assert!(format!("{}", error).contains("in use by another process"));
/// ```
#[derive(Debug, Error)]
pub enum LockError {
    /// Error when the file is already locked by another process.
    #[error("Diary file is in use by another process: {path}. Please wait for the other emotion-diary command to finish.")]
    FileBusy {
        /// The path to the file that is locked
        path: PathBuf,
    },

    /// Error when acquiring the lock fails for a technical reason.
    #[error("Failed to acquire lock for diary file {path}: {source}. Please check file permissions and ensure the directory is accessible.")]
    AcquisitionFailed {
        /// The path to the file that couldn't be locked
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents all possible errors that can occur in the emotion diary application.
///
/// # Examples
///
/// ```
/// use emotion_diary::errors::{AppError, ValidationError};
///
/// let error: AppError = ValidationError::EmptyText.into();
/// assert_eq!(format!("{}", error), "Validation error: Text cannot be empty");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem or terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Model artifacts or diary file could not be loaded.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Rejected user input.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Classification could not be performed.
    #[error("Analysis error: {0}")]
    Classification(#[from] ClassificationError),

    /// The diary or its export could not be written.
    #[error("Save error: {0}")]
    Persist(#[from] PersistError),

    /// Errors related to file locking.
    #[error("File locking error: {0}")]
    Lock(#[from] LockError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
