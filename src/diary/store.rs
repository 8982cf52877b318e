//! CSV-backed diary store with write-through persistence.
//!
//! The backing file has a `text,emotion,date` header row and one record per
//! entry in insertion order. Every mutation rewrites the whole file: the new
//! contents go to a temporary file in the same directory which is then renamed
//! over the old one.

use super::{export, now_timestamp, DiaryEntry};
use crate::classifier::EmotionLabelSet;
use crate::constants::DIARY_COLUMNS;
use crate::errors::{AppResult, LoadError, PersistError, ValidationError};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// A record as read from disk; older files may lack the `date` column.
#[derive(Debug, Deserialize)]
struct StoredRecord {
    text: String,
    emotion: String,
    #[serde(default)]
    date: Option<String>,
}

/// Ordered collection of diary entries kept in sync with its backing file.
#[derive(Debug)]
pub struct DiaryStore {
    path: PathBuf,
    entries: Vec<DiaryEntry>,
    labels: Option<EmotionLabelSet>,
    load_error: Option<LoadError>,
}

impl DiaryStore {
    /// Opens the diary at `path`, failing soft.
    ///
    /// A missing file yields an empty diary. An unreadable or malformed file
    /// also yields an empty diary; the condition is logged and kept available
    /// through [`DiaryStore::load_error`].
    ///
    /// `labels` is the emotion label set entries are validated against. Without
    /// it the diary can still be listed, deleted from and exported, but not
    /// appended to or edited.
    pub fn open(path: impl Into<PathBuf>, labels: Option<EmotionLabelSet>) -> Self {
        let mut store = Self {
            path: path.into(),
            entries: Vec::new(),
            labels,
            load_error: None,
        };
        store.load();
        store
    }

    /// Re-reads the backing file, replacing the in-memory entries.
    ///
    /// Fails soft exactly like [`DiaryStore::open`].
    pub fn load(&mut self) -> &[DiaryEntry] {
        match read_entries(&self.path) {
            Ok(entries) => {
                debug!("Loaded {} diary entries", entries.len());
                self.entries = entries;
                self.load_error = None;
            }
            Err(e) => {
                warn!("Error loading diary: {}", e);
                self.entries = Vec::new();
                self.load_error = Some(e);
            }
        }
        &self.entries
    }

    /// Adds `entry` at the end and persists, returning the stored entry.
    ///
    /// The entry's text is stored trimmed.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if the text is blank or the emotion is not a known
    ///   label; the diary is unchanged
    /// - `PersistError` if the file cannot be written; the entry stays in memory
    pub fn append(&mut self, mut entry: DiaryEntry) -> AppResult<&DiaryEntry> {
        entry.text = self.validate(&entry.text, &entry.emotion)?;

        let index = self.entries.len();
        self.entries.push(entry);
        info!("Appended diary entry at index {}", index);
        self.persist()?;
        Ok(&self.entries[index])
    }

    /// Replaces the text and emotion of the entry at `index`, refreshes its
    /// timestamp, and persists. The entry keeps its position.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if `index` is out of range, the text is blank, or
    ///   the emotion is not a known label; the diary is unchanged
    /// - `PersistError` if the file cannot be written; the edit stays in memory
    pub fn update(&mut self, index: usize, text: &str, emotion: &str) -> AppResult<()> {
        self.check_index(index)?;
        let text = self.validate(text, emotion)?;

        let entry = &mut self.entries[index];
        entry.text = text;
        entry.emotion = emotion.to_string();
        entry.timestamp = now_timestamp();

        info!("Updated diary entry at index {}", index);
        self.persist()?;
        Ok(())
    }

    /// Removes the entry at `index` and persists, returning the removed entry.
    ///
    /// # Errors
    ///
    /// - `ValidationError::IndexOutOfRange` if there is no such entry
    /// - `PersistError` if the file cannot be written; the removal stays in memory
    pub fn delete(&mut self, index: usize) -> AppResult<DiaryEntry> {
        self.check_index(index)?;

        let removed = self.entries.remove(index);
        info!("Deleted diary entry at index {}", index);
        self.persist()?;
        Ok(removed)
    }

    /// Rewrites the backing file from the in-memory entries.
    pub fn persist(&self) -> Result<(), PersistError> {
        let write_error = |source: io::Error| PersistError::Write {
            path: self.path.clone(),
            source,
        };
        let encode_error = |source: csv::Error| PersistError::Encode {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp = NamedTempFile::new_in(dir).map_err(write_error)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(temp);
        writer.write_record(DIARY_COLUMNS).map_err(encode_error)?;
        for entry in &self.entries {
            writer.serialize(entry).map_err(encode_error)?;
        }

        writer.flush().map_err(write_error)?;
        let temp = writer
            .into_inner()
            .map_err(|e| write_error(io::Error::new(e.error().kind(), e.to_string())))?;
        temp.as_file().sync_all().map_err(write_error)?;
        temp.persist(&self.path).map_err(|e| write_error(e.error))?;

        debug!("Diary entries saved to {:?}", self.path);
        Ok(())
    }

    /// Writes a human-readable rendering of all entries, most recent first.
    pub fn export(&self, path: &Path) -> Result<(), PersistError> {
        let export_error = |source: io::Error| PersistError::Export {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::create(path).map_err(export_error)?;
        file.write_all(export::render(&self.entries).as_bytes())
            .map_err(export_error)?;

        info!("Exported {} diary entries", self.entries.len());
        Ok(())
    }

    pub fn entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&DiaryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn labels(&self) -> Option<&EmotionLabelSet> {
        self.labels.as_ref()
    }

    /// The failure from the most recent load, if it fell back to an empty diary.
    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }

    fn check_index(&self, index: usize) -> Result<(), ValidationError> {
        if index >= self.entries.len() {
            return Err(ValidationError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }

    /// Returns the trimmed text if `text` and `emotion` may be stored.
    fn validate(&self, text: &str, emotion: &str) -> Result<String, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }

        let labels = self
            .labels
            .as_ref()
            .ok_or(ValidationError::LabelsUnavailable)?;
        if !labels.contains(emotion) {
            return Err(ValidationError::UnknownEmotion {
                emotion: emotion.to_string(),
            });
        }

        Ok(text.to_string())
    }
}

/// Reads every entry from the CSV file at `path`.
///
/// A missing or zero-length file is an empty diary. Records without a date get
/// the current time.
pub fn read_entries(path: &Path) -> Result<Vec<DiaryEntry>, LoadError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No diary file at {:?}, starting empty", path);
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(LoadError::DiaryUnreadable {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let malformed = |source: csv::Error| LoadError::DiaryMalformed {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_reader(file);
    let headers = reader.headers().map_err(malformed)?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    for column in ["text", "emotion"] {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::DiaryMissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut entries = Vec::new();
    for record in reader.deserialize::<StoredRecord>() {
        let record = record.map_err(malformed)?;
        let timestamp = match record.date {
            Some(date) if !date.trim().is_empty() => date,
            _ => now_timestamp(),
        };
        entries.push(DiaryEntry {
            text: record.text,
            emotion: record.emotion,
            timestamp,
        });
    }

    Ok(entries)
}
