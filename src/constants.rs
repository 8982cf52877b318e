//! Constants used throughout the application.
//!
//! This module contains all constants used in the Emotion Diary application,
//! organized into logical groups. Having constants centralized makes them easier
//! to find, modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "emotion-diary";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Classify the emotion of your notes and keep them in a diary";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the data directory.
pub const ENV_VAR_DIARY_DIR: &str = "EMOTION_DIARY_DIR";
/// Environment variable overriding the model artifact path.
pub const ENV_VAR_MODEL_PATH: &str = "EMOTION_DIARY_MODEL";
/// Environment variable overriding the label mapping artifact path.
pub const ENV_VAR_MAPPING_PATH: &str = "EMOTION_DIARY_MAPPING";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for diary data within the user's home directory.
pub const DEFAULT_DIARY_SUBDIR: &str = "Documents/emotion-diary";

// File System Parameters
/// File name of the CSV backing file.
pub const DIARY_FILE_NAME: &str = "emotion_diary.csv";
/// File name of the serialized predictor.
pub const MODEL_FILE_NAME: &str = "emotion_model.json";
/// File name of the serialized label mapping.
pub const MAPPING_FILE_NAME: &str = "emotion_mapping.json";
/// File name of the default plain-text export.
pub const EXPORT_FILE_NAME: &str = "my_diary.txt";
/// Extension appended to the diary path for its lock sidecar.
pub const LOCK_FILE_EXTENSION: &str = "lock";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;

// Diary Format
/// Column headers of the backing file, in order.
pub const DIARY_COLUMNS: [&str; 3] = ["text", "emotion", "date"];
/// Timestamp format stored in the `date` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Shown in place of a date that could not be recovered.
pub const UNKNOWN_DATE: &str = "Unknown date";
/// Title banner at the top of an export.
pub const EXPORT_TITLE: &str = "════════════════ Emotion Diary ════════════════";
/// Character repeated to form the divider between exported entries.
pub const EXPORT_DIVIDER_CHAR: char = '═';
/// Width of the divider between exported entries.
pub const EXPORT_DIVIDER_WIDTH: usize = 50;

// Status Messages
/// Status line when both model artifacts loaded.
pub const STATUS_MODEL_READY: &str = "Model ready for use";
/// Status line when either model artifact is unavailable.
pub const STATUS_MODEL_NOT_LOADED: &str = "Model not loaded";
/// Shown by `list` when the diary has no entries.
pub const EMPTY_DIARY_MESSAGE: &str = "No entries in the diary yet.";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "emotion-diary";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
