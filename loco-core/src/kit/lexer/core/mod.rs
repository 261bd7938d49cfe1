//! 字符层：位置与字符流

pub mod position;
pub mod stream;

pub use position::SourceLocation;
pub use stream::{CharStream, StreamError};
