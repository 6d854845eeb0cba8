//! Atomic JSON persistence for small state files.
//!
//! History and UI state are plain JSON documents rewritten in full on every
//! change. Writes go through a sibling temp file, fsync, and rename so a
//! crash never leaves a half-written document behind, and a lock file
//! serializes concurrent writers.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

/// Errors from the atomic JSON layer.
#[derive(Debug)]
pub enum AtomicJsonError {
    /// Reading, writing, or renaming failed.
    Io(std::io::Error),
    /// The document did not serialize or deserialize.
    Json(serde_json::Error),
    /// The lock file could not be acquired.
    Lock(String),
}

impl std::fmt::Display for AtomicJsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicJsonError::Io(e) => write!(f, "I/O error: {e}"),
            AtomicJsonError::Json(e) => write!(f, "JSON error: {e}"),
            AtomicJsonError::Lock(e) => write!(f, "lock error: {e}"),
        }
    }
}

impl std::error::Error for AtomicJsonError {}

impl From<std::io::Error> for AtomicJsonError {
    fn from(e: std::io::Error) -> Self {
        AtomicJsonError::Io(e)
    }
}

impl From<serde_json::Error> for AtomicJsonError {
    fn from(e: serde_json::Error) -> Self {
        AtomicJsonError::Json(e)
    }
}

/// A typed handle to one JSON document on disk.
///
/// `load` returns `None` for a missing or empty file so first runs need no
/// special casing. `save` is all-or-nothing: the document is written to a
/// hidden sibling, synced, then renamed over the target. `update` wraps a
/// read-modify-write cycle in an exclusive file lock.
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    /// The document this handle reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and deserializes the document, `None` when the file is missing
    /// or blank.
    pub fn load(&self) -> Result<Option<T>, AtomicJsonError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Replaces the document on disk in one atomic step.
    pub fn save(&self, data: &T) -> Result<(), AtomicJsonError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(data)?;

        let tmp_path = self.tmp_path()?;
        let mut tmp = File::create(&tmp_path)?;
        tmp.write_all(json.as_bytes())?;
        tmp.sync_all()?;
        drop(tmp);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Runs a read-modify-write cycle under an exclusive lock.
    ///
    /// `default_value` seeds the document when the file does not exist yet.
    /// The updated value is written back atomically once `f` returns.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<(), AtomicJsonError>
    where
        F: FnOnce(&mut T) -> Result<(), AtomicJsonError>,
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = self.load()?.unwrap_or(default_value);
        f(&mut data)?;
        self.save(&data)
    }

    /// Deletes the document. A missing file is not an error, so callers can
    /// clear state without checking existence first.
    pub fn remove(&self) -> Result<(), AtomicJsonError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AtomicJsonError::Io(e)),
        }
    }

    // Hidden sibling in the same directory, so the final rename never
    // crosses a filesystem boundary.
    fn tmp_path(&self) -> Result<PathBuf, AtomicJsonError> {
        let name = self.path.file_name().ok_or_else(|| {
            AtomicJsonError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "storage path has no file name",
            ))
        })?;
        Ok(self
            .path
            .with_file_name(format!(".{}.tmp", name.to_string_lossy())))
    }
}

/// Holds an exclusive advisory lock for the duration of an update.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicJsonError> {
        let lock_path = path.with_extension("lock");
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .open(&lock_path)?;

        // Advisory lock, released when the handle drops. Non-Unix platforms
        // go unlocked; a single-user terminal app does not contend.
        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive().map_err(|e| {
                AtomicJsonError::Lock(format!("could not lock {}: {e}", lock_path.display()))
            })?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Checkpoint {
        name: String,
        revision: u32,
    }

    fn handle(dir: &TempDir) -> AtomicJsonFile<Checkpoint> {
        AtomicJsonFile::new(dir.path().join("deep").join("checkpoint.json"))
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let file = handle(&dir);

        let state = Checkpoint {
            name: "alpha".to_string(),
            revision: 7,
        };
        file.save(&state).unwrap();

        assert_eq!(file.load().unwrap(), Some(state));
    }

    #[test]
    fn test_missing_and_blank_files_load_as_none() {
        let dir = TempDir::new().unwrap();
        let file = handle(&dir);
        assert!(file.load().unwrap().is_none());

        fs::create_dir_all(file.path().parent().unwrap()).unwrap();
        fs::write(file.path(), "  \n\t").unwrap();
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_document_is_a_json_error() {
        let dir = TempDir::new().unwrap();
        let file = handle(&dir);
        fs::create_dir_all(file.path().parent().unwrap()).unwrap();
        fs::write(file.path(), "{ truncated").unwrap();

        assert!(matches!(file.load(), Err(AtomicJsonError::Json(_))));
    }

    #[test]
    fn test_update_seeds_from_default_then_mutates() {
        let dir = TempDir::new().unwrap();
        let file = handle(&dir);
        let default = Checkpoint {
            name: "seed".to_string(),
            revision: 0,
        };

        file.update(default.clone(), |state| {
            state.revision += 1;
            Ok(())
        })
        .unwrap();
        file.update(default, |state| {
            state.name.push_str("-updated");
            Ok(())
        })
        .unwrap();

        let state = file.load().unwrap().unwrap();
        assert_eq!(state.name, "seed-updated");
        assert_eq!(state.revision, 1);
    }

    #[test]
    fn test_save_leaves_no_scratch_files() {
        let dir = TempDir::new().unwrap();
        let file = handle(&dir);

        file.update(
            Checkpoint {
                name: "clean".to_string(),
                revision: 1,
            },
            |_| Ok(()),
        )
        .unwrap();

        let parent = file.path().parent().unwrap();
        let leftovers: Vec<_> = fs::read_dir(parent)
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .filter(|name| name != "checkpoint.json")
            .collect();
        assert!(leftovers.is_empty(), "found {leftovers:?}");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let file = handle(&dir);

        file.save(&Checkpoint {
            name: "gone".to_string(),
            revision: 2,
        })
        .unwrap();

        file.remove().unwrap();
        file.remove().unwrap();
        assert!(file.load().unwrap().is_none());
    }
}
