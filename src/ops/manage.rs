//! Edit, delete and export diary entries.

use super::prompt::prompt_yes_no;
use crate::diary::DiaryStore;
use crate::errors::{AppResult, ValidationError};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

/// Updates the entry at `index`. Fields left as `None` keep their current value.
///
/// # Errors
///
/// Returns `ValidationError` for an unknown index, blank text or unknown
/// emotion, and `PersistError` if the diary cannot be saved.
pub fn edit_entry<W: Write>(
    store: &mut DiaryStore,
    index: usize,
    text: Option<&str>,
    emotion: Option<&str>,
    output: &mut W,
) -> AppResult<()> {
    let current = store
        .get(index)
        .cloned()
        .ok_or(ValidationError::IndexOutOfRange {
            index,
            len: store.len(),
        })?;

    let text = text.unwrap_or(current.text.as_str());
    let emotion = emotion.unwrap_or(current.emotion.as_str());
    store.update(index, text, emotion)?;

    writeln!(output, "Entry updated successfully")?;
    Ok(())
}

/// Deletes the entry at `index` after confirmation.
///
/// Returns `false` when the user declines; the diary is then untouched.
pub fn delete_entry<R: BufRead, W: Write>(
    store: &mut DiaryStore,
    index: usize,
    assume_yes: bool,
    input: &mut R,
    output: &mut W,
) -> AppResult<bool> {
    if store.get(index).is_none() {
        return Err(ValidationError::IndexOutOfRange {
            index,
            len: store.len(),
        }
        .into());
    }

    let confirmed = assume_yes
        || prompt_yes_no(
            input,
            output,
            "Are you sure you want to delete this entry?",
            false,
        )?;
    if !confirmed {
        info!("Deletion of entry {} cancelled", index);
        writeln!(output, "Entry kept")?;
        return Ok(false);
    }

    store.delete(index)?;
    writeln!(output, "Entry deleted")?;
    Ok(true)
}

/// Exports the diary to `path` and reports where it went.
pub fn export_diary<W: Write>(store: &DiaryStore, path: &Path, output: &mut W) -> AppResult<()> {
    store.export(path)?;
    writeln!(
        output,
        "Diary exported successfully to '{}'",
        path.display()
    )?;
    Ok(())
}
