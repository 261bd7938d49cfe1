//! VirtualFileSystem trait definition

use crate::error::VfsResult;
use std::io::Read;
use std::path::Path;

/// An open source handle
pub type SourceReader = Box<dyn Read + Send>;

/// Virtual File System trait
///
/// Decouples the lexer from where its sources live.
///
/// # Implementations
/// - `MemoryFileSystem`: In-memory sources (tests, embedded scripts)
/// - `NativeFileSystem`: Native OS file system
pub trait VirtualFileSystem: Send + Sync {
    /// Open a named source for reading
    ///
    /// Failure to open is reported here, not deferred to the first read.
    fn open(&self, path: &Path) -> VfsResult<SourceReader>;

    /// Check if path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a readable file
    fn is_file(&self, path: &Path) -> bool;
}
