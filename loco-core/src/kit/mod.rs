//! 前端工具集

pub mod lexer;
