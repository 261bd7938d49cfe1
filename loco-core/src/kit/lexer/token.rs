//! Token 与字面量

use std::fmt;

use super::core::SourceLocation;

/// Token 种类
///
/// `EndOfLine` 和 `Indentation` 属于词汇表，但当前扫描把所有空白一视同仁地跳过，
/// 不会产生这两种 token。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    EndOfFile,
    EndOfLine,
    Indentation,
    Identifier,
    Keyword,
    StringLiteral,
    Symbol,
    Number,
}

impl TokenKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EndOfFile => "EndOfFile",
            TokenKind::EndOfLine => "EndOfLine",
            TokenKind::Indentation => "Indentation",
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "Keyword",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::Symbol => "Symbol",
            TokenKind::Number => "Number",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 字面量值
///
/// 由携带它的 token 独占。
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Character(u8),
}

impl LiteralValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            LiteralValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            LiteralValue::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            LiteralValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<u8> {
        match self {
            LiteralValue::Character(c) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Integer(n) => write!(f, "{n}"),
            LiteralValue::Float(x) => write!(f, "{x}"),
            LiteralValue::Text(s) => f.write_str(s),
            LiteralValue::Character(c) => write!(f, "{}", *c as char),
        }
    }
}

/// Token
///
/// 构造后不可变；位置在创建时拷贝，不回指字符流。
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    location: SourceLocation,
    literal: Option<LiteralValue>,
}

impl Token {
    /// 创建不带字面量的 token
    pub fn new(kind: TokenKind, location: SourceLocation) -> Self {
        Self {
            kind,
            location,
            literal: None,
        }
    }

    /// 创建带字面量的 token
    pub fn with_literal(kind: TokenKind, location: SourceLocation, literal: LiteralValue) -> Self {
        Self {
            kind,
            location,
            literal: Some(literal),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn literal(&self) -> Option<&LiteralValue> {
        self.literal.as_ref()
    }

    /// 取出字面量
    pub fn into_literal(self) -> Option<LiteralValue> {
        self.literal
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    /// 是否为指定的单字符符号
    pub fn is_symbol(&self, symbol: u8) -> bool {
        self.kind == TokenKind::Symbol
            && matches!(self.literal, Some(LiteralValue::Character(c)) if c == symbol)
    }

    /// 是否为指定关键字
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text() == Some(keyword)
    }

    /// 文本字面量（标识符、关键字、字符串）
    pub fn text(&self) -> Option<&str> {
        self.literal.as_ref().and_then(LiteralValue::as_text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{}({}) at {}", self.kind, literal, self.location),
            None => write!(f, "{} at {}", self.kind, self.location),
        }
    }
}
