//! Lexer 主入口
//!
//! 在 Scanner 之上提供 token 级的预读与回退：
//! - `read_token`：优先从回退栈弹出，否则扫描新 token
//! - `peek_token`：扫描一次并存入回退栈，之后的读取重放同一个 token
//! - `unread_token`：压入回退栈，深度不限，后进先出
//!
//! # 示例
//!
//! ```rust
//! use loco_core::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::from_bytes("demo.loco", "x = 5");
//! let x = lexer.read_token().unwrap();
//! assert_eq!(x.kind(), TokenKind::Identifier);
//! assert!(lexer.peek_token().unwrap().is_symbol(b'='));
//! ```

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use loco_config::LexerConfig;
use loco_vfs::{NativeFileSystem, VirtualFileSystem};
use tracing::{debug, trace, warn};

use super::core::{CharStream, SourceLocation};
use super::error::{LexError, LexResult};
use super::scanner::{LocoScanner, Scanner};
use super::token::Token;

/// 词法分析器
///
/// 每个实例独占自己的字符流和回退栈，不做内部加锁，不支持并发访问。
pub struct Lexer<S: Scanner = LocoScanner> {
    stream: CharStream,
    scanner: S,
    /// token 回退栈（栈顶为下一个返回的 token）
    rewind: Vec<Token>,
    /// peek 时遇到的错误，下一次读取时原样返回
    pending_error: Option<LexError>,
    /// 迭代器是否已结束
    finished: bool,
}

impl Lexer<LocoScanner> {
    /// 从本地文件系统打开命名源（默认配置）
    pub fn open(path: impl AsRef<Path>) -> LexResult<Self> {
        Self::open_with(&NativeFileSystem::new(), path, &LexerConfig::default())
    }

    /// 通过指定文件系统和配置打开命名源
    ///
    /// 源打不开时返回 `SourceUnavailable`，位置为该源的 1:1。
    pub fn open_with(
        fs: &dyn VirtualFileSystem,
        path: impl AsRef<Path>,
        config: &LexerConfig,
    ) -> LexResult<Self> {
        let path = path.as_ref();
        let stream = CharStream::open(fs, path, config.tab_width).map_err(|e| {
            LexError::from_stream(e, SourceLocation::start(path.to_string_lossy().into_owned()))
        })?;
        Ok(Self::from_stream(stream))
    }

    /// 内存中的源（默认配置）
    pub fn from_bytes(name: impl Into<Arc<str>>, source: impl Into<Vec<u8>>) -> Self {
        let reader = Box::new(Cursor::new(source.into()));
        Self::from_stream(CharStream::from_reader(
            name,
            reader,
            LexerConfig::default().tab_width,
        ))
    }

    /// 在已有字符流上创建
    pub fn from_stream(stream: CharStream) -> Self {
        Self::with_scanner(stream, LocoScanner::new())
    }
}

impl<S: Scanner> Lexer<S> {
    /// 使用自定义 Scanner
    pub fn with_scanner(stream: CharStream, scanner: S) -> Self {
        trace!(target: "loco::lexer", location = %stream.location(), "Creating new Lexer");
        Self {
            stream,
            scanner,
            rewind: Vec::new(),
            pending_error: None,
            finished: false,
        }
    }

    /// 读取下一个 token
    ///
    /// 每次调用要么返回一个 token，要么返回一个错误。
    pub fn read_token(&mut self) -> LexResult<Token> {
        if let Some(token) = self.rewind.pop() {
            trace!(target: "loco::lexer", kind = %token.kind(), depth = self.rewind.len(), "Replaying rewound token");
            return Ok(token);
        }
        if let Some(error) = self.pending_error.take() {
            trace!(target: "loco::lexer", "Replaying peeked error");
            return Err(error);
        }
        self.scan()
    }

    /// 预读下一个 token，不改变后续读取的结果
    pub fn peek_token(&mut self) -> LexResult<Token> {
        if let Some(token) = self.rewind.last() {
            return Ok(token.clone());
        }
        if let Some(error) = &self.pending_error {
            return Err(error.clone());
        }

        match self.scan() {
            Ok(token) => {
                self.rewind.push(token.clone());
                Ok(token)
            }
            Err(error) => {
                self.pending_error = Some(error.clone());
                Err(error)
            }
        }
    }

    /// 回退一个 token，下一次读取/预读先返回它
    pub fn unread_token(&mut self, token: Token) {
        trace!(target: "loco::lexer", kind = %token.kind(), depth = self.rewind.len() + 1, "Unread token");
        self.finished = false;
        self.rewind.push(token);
    }

    /// 当前字符流位置（用于错误报告）
    pub fn location(&self) -> &SourceLocation {
        self.stream.location()
    }

    /// 回退栈深度
    pub fn rewind_depth(&self) -> usize {
        self.rewind.len()
    }

    /// 读取全部 token，最后一个为 `EndOfFile`；遇到第一个错误即停止
    pub fn tokenize(&mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.read_token()?;
            let eof = token.is_eof();
            tokens.push(token);
            if eof {
                return Ok(tokens);
            }
        }
    }

    fn scan(&mut self) -> LexResult<Token> {
        let result = self.scanner.next_token(&mut self.stream);
        match &result {
            Ok(token) => debug!(
                target: "loco::lexer",
                kind = %token.kind(),
                literal = ?token.literal(),
                line = token.location().line,
                column = token.location().column,
                "Produced token"
            ),
            Err(error) => warn!(target: "loco::lexer", error = %error, "Lex error encountered"),
        }
        result
    }
}

/// 逐个产出 token，包括最后的 `EndOfFile`；错误只产出一次，随后结束
impl<S: Scanner> Iterator for Lexer<S> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.read_token();
        if !matches!(&result, Ok(token) if !token.is_eof()) {
            self.finished = true;
        }
        Some(result)
    }
}
