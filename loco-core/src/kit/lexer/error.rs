//! Lexer 错误类型
//!
//! 结构化的词法错误：错误类型 + 发生位置。所有错误都交给调用方处理，
//! 词法器不会中止进程，也不会自行重试。

use super::core::{SourceLocation, StreamError};

/// 词法分析结果
pub type LexResult<T> = Result<T, LexError>;

/// 错误类型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    /// 命名源无法打开（构造时）
    #[error("Cannot open source: {reason}")]
    SourceUnavailable { reason: String },

    /// 字符串在源结尾前没有闭合
    #[error("Unterminated string literal")]
    UnterminatedString,

    /// 数字词素无法解析
    #[error("Malformed number '{0}'")]
    MalformedNumber(String),

    /// 无法开始任何 token 的字节
    #[error("Invalid character {}", describe_byte(.0))]
    InvalidCharacter(u8),

    /// 打开之后读取源失败
    #[error("Read error: {0}")]
    Io(String),
}

/// 词法错误，包含结构化信息
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("[{location}] {kind}")]
pub struct LexError {
    /// 错误类型
    pub kind: ErrorKind,
    /// 错误发生的位置
    pub location: SourceLocation,
}

impl LexError {
    /// 在指定位置创建错误
    pub fn new(kind: ErrorKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }

    /// 字符流错误转换，附上当前位置
    pub fn from_stream(error: StreamError, location: SourceLocation) -> Self {
        let kind = match error {
            StreamError::SourceUnavailable { source, .. } => ErrorKind::SourceUnavailable {
                reason: source.to_string(),
            },
            StreamError::Io(reason) => ErrorKind::Io(reason),
        };
        Self { kind, location }
    }

    /// 获取行号（1-based）
    pub fn line(&self) -> usize {
        self.location.line
    }

    /// 获取列号（1-based）
    pub fn column(&self) -> usize {
        self.location.column
    }
}

fn describe_byte(c: &u8) -> String {
    if c.is_ascii_graphic() {
        format!("'{}'", *c as char)
    } else {
        format!("0x{c:02X}")
    }
}
