//! Persistence port for cache snapshots

use crate::error::{Error, Result};
use std::fmt;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// Durable home for a serialized cache snapshot
///
/// Implementations read and write the whole document at once.
pub trait SnapshotStore: Send + Sync + fmt::Debug {
    /// Read the stored document, `None` if nothing has been stored yet
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored document
    fn save(&self, contents: &str) -> Result<()>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for Arc<S> {
    fn load(&self) -> Result<Option<String>> {
        (**self).load()
    }

    fn save(&self, contents: &str) -> Result<()> {
        (**self).save(contents)
    }
}

/// Snapshot stored in a file, replaced atomically on save
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persistence_error(&self, source: std::io::Error) -> Error {
        Error::Persistence {
            path: self.path.clone(),
            source,
        }
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.is_file() {
            return Ok(None);
        }

        fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|e| self.persistence_error(e))
    }

    fn save(&self, contents: &str) -> Result<()> {
        let parent_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir).map_err(|e| self.persistence_error(e))?;

        let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| self.persistence_error(e))?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            writer
                .write_all(contents.as_bytes())
                .and_then(|_| writer.flush())
                .map_err(|e| self.persistence_error(e))?;
        }

        temp_file
            .persist(&self.path)
            .map_err(|e| self.persistence_error(e.error))?;
        Ok(())
    }
}

/// In-process snapshot store
///
/// Counts writes, which makes it useful for checking flush behaviour.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: Mutex<Option<String>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a document
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(contents.into())),
            writes: AtomicUsize::new(0),
        }
    }

    /// Current document, if any
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of completed saves
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.contents())
    }

    fn save(&self, contents: &str) -> Result<()> {
        *self
            .contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(contents.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
