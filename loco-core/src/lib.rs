//! Loco Core - lexical front end
//!
//! Turns a named source into classified tokens with precise source
//! locations. Parsing and evaluation consume these tokens and live
//! outside this crate.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod kit;

// Re-export common types
pub use kit::lexer::{
    CharStream, ErrorKind, LexError, LexResult, Lexer, LiteralValue, LocoScanner, Scanner,
    SourceLocation, StreamError, Token, TokenKind,
};

// Re-export config types from loco-config
pub use loco_config::{LexerConfig, Phase};
