//! Configuration management for the emotion diary application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `EMOTION_DIARY_DIR`: Data directory holding the diary, the model artifacts
//!   and the default export (defaults to ~/Documents/emotion-diary)
//! - `EMOTION_DIARY_MODEL`: Path to the model artifact (defaults to
//!   `<dir>/emotion_model.json`)
//! - `EMOTION_DIARY_MAPPING`: Path to the label mapping artifact (defaults to
//!   `<dir>/emotion_mapping.json`)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_DIARY_SUBDIR, DIARY_FILE_NAME, ENV_VAR_DIARY_DIR, ENV_VAR_HOME,
    ENV_VAR_MAPPING_PATH, ENV_VAR_MODEL_PATH, EXPORT_FILE_NAME, MAPPING_FILE_NAME,
    MODEL_FILE_NAME,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the emotion diary application.
///
/// # Examples
///
/// ```
/// use emotion_diary::Config;
/// use std::path::PathBuf;
///
/// let config = Config::with_data_dir(PathBuf::from("/path/to/diary"));
/// assert_eq!(config.diary_file, PathBuf::from("/path/to/diary/emotion_diary.csv"));
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Directory holding the diary data.
    pub data_dir: PathBuf,
    /// CSV backing file of the diary.
    pub diary_file: PathBuf,
    /// Serialized predictor.
    pub model_file: PathBuf,
    /// Serialized label mapping.
    pub mapping_file: PathBuf,
    /// Default target of `export`.
    pub export_file: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .field("diary_file", &"[REDACTED_PATH]")
            .field("model_file", &"[REDACTED_PATH]")
            .field("mapping_file", &"[REDACTED_PATH]")
            .field("export_file", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Config {
    /// Builds a configuration with every file at its default name inside `data_dir`.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Config {
            diary_file: data_dir.join(DIARY_FILE_NAME),
            model_file: data_dir.join(MODEL_FILE_NAME),
            mapping_file: data_dir.join(MAPPING_FILE_NAME),
            export_file: data_dir.join(EXPORT_FILE_NAME),
            data_dir,
        }
    }

    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// Paths are expanded with `shellexpand` to handle `~` and environment
    /// variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or the data directory
    /// resolves to an empty path.
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_DIARY_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_DIARY_SUBDIR)
        });

        let data_dir = expand_path(&data_dir_str)?;
        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        let mut config = Config::with_data_dir(data_dir);

        if let Ok(model) = env::var(ENV_VAR_MODEL_PATH) {
            config.model_file = expand_path(&model)?;
        }
        if let Ok(mapping) = env::var(ENV_VAR_MAPPING_PATH) {
            config.mapping_file = expand_path(&mapping)?;
        }

        Ok(config)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Data directory path is empty"
    /// - "Data directory must be an absolute path"
    /// - "Model file path is empty" / "Mapping file path is empty"
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        if self.model_file.as_os_str().is_empty() {
            return Err(AppError::Config("Model file path is empty".to_string()));
        }
        if self.mapping_file.as_os_str().is_empty() {
            return Err(AppError::Config("Mapping file path is empty".to_string()));
        }

        Ok(())
    }
}

fn expand_path(raw: &str) -> AppResult<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

/// Ensures the data directory exists, creating it if necessary.
///
/// New directories get owner-only permissions on Unix.
///
/// # Errors
///
/// - `AppError::Config` if the path is not absolute
/// - `AppError::Io` if the directory cannot be created
pub fn ensure_data_directory_exists(data_dir: &Path) -> AppResult<()> {
    if !data_dir.is_absolute() {
        return Err(AppError::Config(format!(
            "Data directory path must be absolute: {}",
            data_dir.display()
        )));
    }

    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;

        #[cfg(unix)]
        {
            use crate::constants::DEFAULT_DIR_PERMISSIONS;
            use std::os::unix::fs::PermissionsExt;

            let permissions = fs::Permissions::from_mode(DEFAULT_DIR_PERMISSIONS);
            fs::set_permissions(data_dir, permissions).map_err(|e| {
                AppError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to set secure permissions on data directory: {}", e),
                ))
            })?;
            tracing::debug!("Set 0o700 permissions on data directory");
        }
    }
    Ok(())
}
