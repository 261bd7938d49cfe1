//! 测试辅助工具
//!
//! 提供内存源词法分析和日志捕获的辅助函数

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use loco_core::{LexResult, Lexer, LexerConfig, Token, TokenKind};
use loco_vfs::MemoryFileSystem;
use tracing_subscriber::fmt::MakeWriter;

/// 默认的测试源名
pub const SOURCE_NAME: &str = "test.loco";

/// 在内存文件系统中放入单个源，并打开它
pub fn lexer_for(code: &str) -> Lexer {
    let fs = MemoryFileSystem::with_files([(SOURCE_NAME, code.as_bytes().to_vec())]);
    Lexer::open_with(&fs, SOURCE_NAME, &LexerConfig::default()).expect("memory source must open")
}

/// 读取全部 token（含最后的 EndOfFile）
pub fn lex_all(code: &str) -> LexResult<Vec<Token>> {
    lexer_for(code).tokenize()
}

/// 只取 token 种类
pub fn kinds(code: &str) -> Vec<TokenKind> {
    lex_all(code)
        .expect("source should lex cleanly")
        .iter()
        .map(Token::kind)
        .collect()
}

/// 只取 (行, 列)
pub fn positions(tokens: &[Token]) -> Vec<(usize, usize)> {
    tokens
        .iter()
        .map(|t| (t.location().line, t.location().column))
        .collect()
}

/// 日志捕获缓冲区
#[derive(Clone, Default)]
pub struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已捕获的全部输出
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().expect("capture buffer poisoned");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .expect("capture buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// 在捕获日志的情况下运行闭包，返回闭包结果和日志文本
pub fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let writer = CaptureWriter::new();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, writer.contents())
}
