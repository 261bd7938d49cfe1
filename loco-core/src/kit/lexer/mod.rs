//! Loco Lexer
//!
//! 词法分析器，分为三层：
//! - `core`：字符流（单字符回退）与位置追踪
//! - `scanner`：从字符流中识别一个 token
//! - `lexer`：对外接口，提供 token 级预读与回退

pub mod core;
pub mod error;
pub mod lexer;
pub mod scanner;
pub mod token;

pub use self::core::{CharStream, SourceLocation, StreamError};
pub use error::{ErrorKind, LexError, LexResult};
pub use lexer::Lexer;
pub use scanner::{LocoScanner, Scanner, KEYWORDS};
pub use token::{LiteralValue, Token, TokenKind};
