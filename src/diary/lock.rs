//! Advisory lock that keeps the diary file owned by a single process.

use crate::constants::LOCK_FILE_EXTENSION;
use crate::errors::LockError;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Exclusive lock on `<diary>.lock`, released when dropped.
#[derive(Debug)]
pub struct DiaryLock {
    file: File,
    path: PathBuf,
}

impl DiaryLock {
    /// Takes the lock for `diary_path` without blocking.
    ///
    /// # Errors
    ///
    /// - `LockError::FileBusy` if another process holds the lock
    /// - `LockError::AcquisitionFailed` if the lock file cannot be opened or locked
    pub fn acquire(diary_path: &Path) -> Result<Self, LockError> {
        let path = lock_path_for(diary_path);

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|source| LockError::AcquisitionFailed {
                path: path.clone(),
                source,
            })?;

        match file.try_lock_exclusive() {
            Ok(()) => {
                debug!("Acquired diary lock {:?}", path);
                Ok(Self { file, path })
            }
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => {
                Err(LockError::FileBusy {
                    path: diary_path.to_path_buf(),
                })
            }
            Err(source) => Err(LockError::AcquisitionFailed { path, source }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for DiaryLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
        debug!("Released diary lock {:?}", self.path);
    }
}

fn lock_path_for(diary_path: &Path) -> PathBuf {
    let mut name = diary_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(LOCK_FILE_EXTENSION);
    diary_path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_lock_path_is_a_sidecar() {
        assert_eq!(
            lock_path_for(Path::new("/data/emotion_diary.csv")),
            PathBuf::from("/data/emotion_diary.csv.lock")
        );
    }

    #[test]
    fn test_second_lock_reports_busy() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let diary = temp_dir.path().join("emotion_diary.csv");

        let first = DiaryLock::acquire(&diary).expect("first lock should succeed");
        assert!(first.path().exists());

        match DiaryLock::acquire(&diary) {
            Err(LockError::FileBusy { path }) => assert_eq!(path, diary),
            other => panic!("Expected FileBusy, got {:?}", other),
        }

        drop(first);
        assert!(DiaryLock::acquire(&diary).is_ok());
    }
}
