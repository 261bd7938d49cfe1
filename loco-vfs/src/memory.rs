//! In-memory file system implementation

use crate::error::{VfsError, VfsResult};
use crate::r#trait::SourceReader;
use crate::VirtualFileSystem;
use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// An in-memory file system implementation.
///
/// Sources are stored in a `BTreeMap` keyed by normalised path. Opening a
/// source hands out a cursor over a private copy of its bytes, so later
/// inserts never change a stream that is already being read.
///
/// # Example
/// ```
/// use loco_vfs::{MemoryFileSystem, VirtualFileSystem};
/// use std::path::Path;
///
/// let fs = MemoryFileSystem::new();
/// fs.insert("/test.loco", b"42".to_vec());
/// assert!(fs.is_file(Path::new("/test.loco")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryFileSystem {
    /// Create a new empty memory file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new memory file system pre-populated with files.
    ///
    /// # Arguments
    /// * `files` - Iterator of (path, content) tuples
    pub fn with_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<u8>)>,
        S: AsRef<str>,
    {
        let fs = Self::new();
        for (path, content) in files {
            fs.insert(path.as_ref(), content);
        }
        fs
    }

    /// Add or replace a source
    pub fn insert(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let normalized = normalize_path(path.as_ref());
        // A poisoned lock still holds a consistent map: inserts are single calls.
        let mut files = self.files.write().unwrap_or_else(|e| e.into_inner());
        files.insert(normalized, content.into());
    }
}

/// Uses forward slashes consistently for cross-platform compatibility.
fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

impl VirtualFileSystem for MemoryFileSystem {
    fn open(&self, path: &Path) -> VfsResult<SourceReader> {
        let normalized = normalize_path(path);
        let files = self.files.read().map_err(|_| VfsError::Io {
            message: String::from("Lock poisoned"),
        })?;

        let content = files
            .get(&normalized)
            .cloned()
            .ok_or(VfsError::NotFound { path: normalized })?;
        Ok(Box::new(Cursor::new(content)))
    }

    fn exists(&self, path: &Path) -> bool {
        let normalized = normalize_path(path);
        match self.files.read() {
            Ok(files) => files.contains_key(&normalized),
            Err(_) => false,
        }
    }

    fn is_file(&self, path: &Path) -> bool {
        // No directories in memory: anything stored is a file
        self.exists(path)
    }
}
