//! Key-value document stores backing the favorites set.

use std::{
    collections::HashMap,
    fmt, fs, io,
    path::{Path, PathBuf},
};

use parking_lot::Mutex;

use crate::error::StorageError;

const APP_DIR: &str = "cinema-eats";

/// Whole-document key-value storage.
///
/// Values are opaque strings; callers always read and write a complete
/// document under a key.
pub trait FavoritesStorage: fmt::Debug + Send + Sync {
    /// `Ok(None)` when nothing has been stored under `key` yet.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    documents: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Storage pre-seeded with a document, e.g. to simulate an earlier session.
    pub fn with_document(
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let storage = Self::default();
        storage.documents.lock().insert(key.into(), value.into());
        storage
    }

    /// Raw document currently stored under `key`.
    pub fn document(&self, key: &str) -> Option<String> {
        self.documents.lock().get(key).cloned()
    }
}

impl FavoritesStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.document(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.documents.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// One JSON file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<data dir>/cinema-eats`, or `None` on platforms without a data dir.
    pub fn in_default_location() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join(APP_DIR)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl FavoritesStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
