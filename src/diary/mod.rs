//! Diary entries and the flat-file store that keeps them.
//!
//! Entries have no stable identifier: an entry is addressed by its position in
//! the ordered collection, and deleting an entry shifts every later position
//! down by one.

pub mod export;
pub mod lock;
pub mod store;

pub use lock::DiaryLock;
pub use store::DiaryStore;

use crate::constants::TIMESTAMP_FORMAT;
use chrono::Local;
use serde::Serialize;

/// A single labeled note.
///
/// `timestamp` holds the creation time, or the time of the last edit, formatted
/// as `YYYY-MM-DD HH:MM:SS`. It is persisted in the `date` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiaryEntry {
    pub text: String,
    pub emotion: String,
    #[serde(rename = "date")]
    pub timestamp: String,
}

impl DiaryEntry {
    /// Creates an entry stamped with the current local time.
    pub fn new(text: impl Into<String>, emotion: impl Into<String>) -> Self {
        DiaryEntry {
            text: text.into(),
            emotion: emotion.into(),
            timestamp: now_timestamp(),
        }
    }
}

/// Current local time in the diary's timestamp format.
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_new_entry_is_stamped_now() {
        let entry = DiaryEntry::new("I passed my exam!", "joy");
        assert_eq!(entry.text, "I passed my exam!");
        assert_eq!(entry.emotion, "joy");
        assert!(NaiveDateTime::parse_from_str(&entry.timestamp, TIMESTAMP_FORMAT).is_ok());
    }
}
