//! Loco Virtual File System
//!
//! Opens named sources for the lexer. A source is opened once and handed
//! out as a single owned byte reader; dropping the reader releases it.
//!
//! # Usage
//! ```rust
//! use loco_vfs::{MemoryFileSystem, VirtualFileSystem};
//! use std::io::Read;
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::with_files([("main.loco", b"x = 5".to_vec())]);
//! let mut text = String::new();
//! fs.open(Path::new("main.loco")).unwrap().read_to_string(&mut text).unwrap();
//! assert_eq!(text, "x = 5");
//! ```

mod error;
mod memory;
mod native;
mod r#trait;

pub use error::{VfsError, VfsResult};
pub use memory::MemoryFileSystem;
pub use native::NativeFileSystem;
pub use r#trait::{SourceReader, VirtualFileSystem};
