//! Native file system implementation

use crate::error::{VfsError, VfsResult};
use crate::r#trait::SourceReader;
use crate::VirtualFileSystem;
use std::io::BufReader;
use std::path::Path;

/// A native OS file system implementation.
///
/// Sources are opened with `std::fs::File` behind a `BufReader`, so the
/// lexer's byte-at-a-time reads do not hit the OS for every byte.
///
/// # Example
/// ```
/// use loco_vfs::{NativeFileSystem, VirtualFileSystem};
/// use std::path::Path;
///
/// let fs = NativeFileSystem::new();
/// assert!(fs.open(Path::new("/definitely/not/here.loco")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NativeFileSystem {}

impl NativeFileSystem {
    /// Create a new native file system.
    pub fn new() -> Self {
        Self {}
    }
}

impl VirtualFileSystem for NativeFileSystem {
    fn open(&self, path: &Path) -> VfsResult<SourceReader> {
        if path.is_dir() {
            return Err(VfsError::InvalidPath {
                path: path.to_string_lossy().to_string(),
                reason: "is a directory".to_string(),
            });
        }
        let file = std::fs::File::open(path).map_err(|e| VfsError::from_io(e, path))?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("loco_vfs_{}_{}", name, std::process::id()))
    }

    #[test]
    fn test_native_open_and_read() {
        let fs = NativeFileSystem::new();
        let temp_file = temp_file("open");
        std::fs::write(&temp_file, b"x = 5").unwrap();

        let mut content = String::new();
        fs.open(&temp_file)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "x = 5");

        std::fs::remove_file(&temp_file).unwrap();
    }

    #[test]
    fn test_native_open_nonexistent() {
        let fs = NativeFileSystem::new();
        let nonexistent = temp_file("nonexistent_xyz");
        let _ = std::fs::remove_file(&nonexistent);

        assert!(!fs.exists(&nonexistent));
        assert!(!fs.is_file(&nonexistent));
        assert!(matches!(fs.open(&nonexistent), Err(VfsError::NotFound { .. })));
    }

    #[test]
    fn test_native_open_directory() {
        let fs = NativeFileSystem::new();
        let dir = std::env::temp_dir();

        assert!(fs.exists(&dir));
        assert!(!fs.is_file(&dir));
        assert!(matches!(fs.open(&dir), Err(VfsError::InvalidPath { .. })));
    }
}
