//! Loco - lexical front end for the Loco scripting language
//!
//! This crate bundles the workspace members behind one import path.
//!
//! # Architecture
//!
//! ```text
//! loco-config/  - Lexer settings (tab width) and log phases
//! loco-vfs/     - Named sources: native files or in-memory files
//! loco-core/    - Character stream, scanner and lexer
//! ```
//!
//! # Quick Start
//!
//! ```
//! use loco::{tokenize_source, TokenKind};
//!
//! let tokens = tokenize_source("demo.loco", "if x = 5").unwrap();
//! assert_eq!(tokens[0].kind(), TokenKind::Keyword);
//! assert_eq!(tokens.last().unwrap().kind(), TokenKind::EndOfFile);
//! ```

use std::path::Path;
use std::sync::Arc;

// 重导出常用类型
pub use loco_config::{ConfigError, LexerConfig, Phase, DEFAULT_TAB_WIDTH};
pub use loco_core::{
    CharStream, ErrorKind, LexError, LexResult, Lexer, LiteralValue, LocoScanner, Scanner,
    SourceLocation, StreamError, Token, TokenKind,
};
pub use loco_vfs::{MemoryFileSystem, NativeFileSystem, VfsError, VirtualFileSystem};

/// 词法分析本地文件，返回以 `EndOfFile` 结尾的全部 token
pub fn tokenize_file(path: impl AsRef<Path>) -> LexResult<Vec<Token>> {
    Lexer::open(path)?.tokenize()
}

/// 按给定配置，通过指定文件系统词法分析命名源
pub fn tokenize_with(
    fs: &dyn VirtualFileSystem,
    path: impl AsRef<Path>,
    config: &LexerConfig,
) -> LexResult<Vec<Token>> {
    Lexer::open_with(fs, path, config)?.tokenize()
}

/// 词法分析内存中的源码
pub fn tokenize_source(name: impl Into<Arc<str>>, source: &str) -> LexResult<Vec<Token>> {
    Lexer::from_bytes(name, source).tokenize()
}
