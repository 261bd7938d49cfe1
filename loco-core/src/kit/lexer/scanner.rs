//! Loco 语言 Scanner 实现
//!
//! 在字符流上识别一个 token。规则按优先级依次尝试：
//! 1. 源结束 → `EndOfFile`
//! 2. 单字符符号 `( ) [ ] , * < > =` → `Symbol`
//! 3. `"` → 字符串（无转义处理）
//! 4. 数字或 `+ - .` → 数字
//! 5. 字母或 `_` → 关键字 / 标识符
//! 6. 其他 → 非法字符
//!
//! `+` `-` 不是符号，而是数字的起始字符。

use super::core::CharStream;
use super::error::{ErrorKind, LexError, LexResult};
use super::token::{LiteralValue, Token, TokenKind};
use super::SourceLocation;

use tracing::{debug, trace, warn};

/// 词法扫描器 trait
///
/// Lexer 只负责预读/回退，具体的 token 识别交给 Scanner。
pub trait Scanner {
    /// 扫描下一个 token
    ///
    /// 先跳过空白和注释，再识别；成功时消费整个词素。
    fn next_token(&mut self, stream: &mut CharStream) -> LexResult<Token>;
}

/// 关键字表
pub static KEYWORDS: &[&str] = &[
    "int", "float", "string", "bool", "import", "for", "while", "def", "return", "if", "else",
    "elif", "and", "or",
];

/// 单字符符号
const SYMBOLS: &[u8] = b"()[],*<>=";

/// Loco 扫描器
pub struct LocoScanner {
    /// 关键字查找表
    keywords: &'static [&'static str],
}

impl LocoScanner {
    pub fn new() -> Self {
        trace!(target: "loco::lexer::scanner", "Creating new LocoScanner");
        Self { keywords: KEYWORDS }
    }

    /// 扫描字符串，开头的 `"` 已消费
    fn scan_string(&mut self, stream: &mut CharStream, start: SourceLocation) -> LexResult<Token> {
        let mut value = Vec::new();

        loop {
            match read_byte(stream)? {
                Some(b'"') => break,
                Some(c) => value.push(c),
                None => {
                    warn!(target: "loco::lexer::scanner", location = %start, "Unterminated string literal");
                    return Err(LexError::new(ErrorKind::UnterminatedString, start));
                }
            }
        }

        let text = String::from_utf8_lossy(&value).into_owned();
        Ok(Token::with_literal(
            TokenKind::StringLiteral,
            start,
            LiteralValue::Text(text),
        ))
    }

    /// 扫描数字：数字串、至多一个 `.`、可选指数（`e`/`E`，可带符号）
    fn scan_number(
        &mut self,
        stream: &mut CharStream,
        first: u8,
        start: SourceLocation,
    ) -> LexResult<Token> {
        let mut lexeme = String::from(first as char);
        let mut seen_dot = first == b'.';
        let mut seen_exponent = false;

        while let Some(c) = read_byte(stream)? {
            match c {
                b'0'..=b'9' => lexeme.push(c as char),
                b'.' if !seen_dot && !seen_exponent => {
                    seen_dot = true;
                    lexeme.push('.');
                }
                b'e' | b'E' if !seen_exponent => {
                    seen_exponent = true;
                    lexeme.push(c as char);
                    // 指数符号
                    match read_byte(stream)? {
                        Some(sign @ (b'+' | b'-')) => lexeme.push(sign as char),
                        Some(other) => stream.unread(other),
                        None => break,
                    }
                }
                _ => {
                    stream.unread(c);
                    break;
                }
            }
        }

        let literal = if seen_dot || seen_exponent {
            // 超出 f64 范围时 parse 会得到 inf，按畸形数字处理
            lexeme
                .parse::<f64>()
                .ok()
                .filter(|x| x.is_finite())
                .map(LiteralValue::Float)
        } else {
            lexeme.parse::<i64>().ok().map(LiteralValue::Integer)
        };

        match literal {
            Some(literal) => Ok(Token::with_literal(TokenKind::Number, start, literal)),
            None => {
                warn!(target: "loco::lexer::scanner", location = %start, lexeme = %lexeme, "Malformed number");
                Err(LexError::new(ErrorKind::MalformedNumber(lexeme), start))
            }
        }
    }

    /// 扫描标识符或关键字
    fn scan_identifier_or_keyword(
        &mut self,
        stream: &mut CharStream,
        first: u8,
        start: SourceLocation,
    ) -> LexResult<Token> {
        let mut value = String::from(first as char);

        while let Some(c) = read_byte(stream)? {
            if is_identifier_continue(c) {
                value.push(c as char);
            } else {
                stream.unread(c);
                break;
            }
        }

        let kind = if self.is_keyword(&value) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Ok(Token::with_literal(kind, start, LiteralValue::Text(value)))
    }

    /// 查找关键字
    fn is_keyword(&self, word: &str) -> bool {
        let found = self.keywords.contains(&word);
        if found {
            debug!(target: "loco::lexer::scanner", keyword = word, "Matched keyword");
        }
        found
    }
}

impl Default for LocoScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for LocoScanner {
    fn next_token(&mut self, stream: &mut CharStream) -> LexResult<Token> {
        stream
            .skip_whitespace_and_comments()
            .map_err(|e| LexError::from_stream(e, stream.location().clone()))?;

        // 记录 token 起始位置
        let start = stream.location().clone();
        trace!(target: "loco::lexer::scanner", line = start.line, column = start.column, "Starting token scan");

        let c = match read_byte(stream)? {
            Some(c) => c,
            None => {
                return Ok(Token::with_literal(
                    TokenKind::EndOfFile,
                    start,
                    LiteralValue::Text(String::new()),
                ))
            }
        };

        match c {
            c if is_symbol(c) => Ok(Token::with_literal(
                TokenKind::Symbol,
                start,
                LiteralValue::Character(c),
            )),
            b'"' => self.scan_string(stream, start),
            c if is_number_start(c) => self.scan_number(stream, c, start),
            c if is_identifier_start(c) => self.scan_identifier_or_keyword(stream, c, start),
            c => {
                warn!(target: "loco::lexer::scanner", location = %start, byte = c, "Invalid character");
                Err(LexError::new(ErrorKind::InvalidCharacter(c), start))
            }
        }
    }
}

/// 读一个字节，字符流错误附上当前位置
fn read_byte(stream: &mut CharStream) -> LexResult<Option<u8>> {
    stream
        .read()
        .map_err(|e| LexError::from_stream(e, stream.location().clone()))
}

/// 单字符符号
pub fn is_symbol(c: u8) -> bool {
    SYMBOLS.contains(&c)
}

/// 数字起始字符（含符号和前导小数点）
pub fn is_number_start(c: u8) -> bool {
    c.is_ascii_digit() || matches!(c, b'+' | b'-' | b'.')
}

/// 标识符起始字符
pub fn is_identifier_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

/// 标识符延续字符
pub fn is_identifier_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn create_stream(input: &str) -> CharStream {
        CharStream::from_reader("scan.loco", Box::new(Cursor::new(input.as_bytes().to_vec())), 4)
    }

    fn scan_one(input: &str) -> LexResult<Token> {
        LocoScanner::new().next_token(&mut create_stream(input))
    }

    fn collect_tokens(input: &str) -> Vec<Token> {
        let mut stream = create_stream(input);
        let mut scanner = LocoScanner::new();
        let mut tokens = Vec::new();

        loop {
            let token = scanner
                .next_token(&mut stream)
                .unwrap_or_else(|e| panic!("Lex error: {e}"));
            let eof = token.is_eof();
            tokens.push(token);
            if eof {
                break;
            }
        }

        tokens
    }

    #[test]
    fn test_symbols() {
        let tokens = collect_tokens("()[],*<>=");
        assert_eq!(tokens.len(), 10);
        for (token, expected) in tokens.iter().zip(b"()[],*<>=") {
            assert_eq!(token.kind(), TokenKind::Symbol);
            assert_eq!(token.literal(), Some(&LiteralValue::Character(*expected)));
        }
        assert!(tokens[9].is_eof());
    }

    #[test]
    fn test_keywords() {
        for kw in KEYWORDS {
            let token = scan_one(kw).unwrap();
            assert_eq!(token.kind(), TokenKind::Keyword, "keyword {kw}");
            assert_eq!(token.text(), Some(*kw));
        }
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let token = scan_one("iffy").unwrap();
        assert_eq!(token.kind(), TokenKind::Identifier);
        assert_eq!(token.text(), Some("iffy"));

        let token = scan_one("If").unwrap();
        assert_eq!(token.kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_identifier() {
        let tokens = collect_tokens("my_var _private test123");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].kind(), TokenKind::Identifier);
        assert_eq!(tokens[0].text(), Some("my_var"));
        assert_eq!(tokens[1].text(), Some("_private"));
        assert_eq!(tokens[2].text(), Some("test123"));
    }

    #[test]
    fn test_integers() {
        let tokens = collect_tokens("0 123 -7 +42");
        let values: Vec<_> = tokens[..4]
            .iter()
            .map(|t| t.literal().and_then(LiteralValue::as_integer))
            .collect();
        assert_eq!(values, vec![Some(0), Some(123), Some(-7), Some(42)]);
    }

    #[test]
    fn test_floats() {
        let tokens = collect_tokens("2.75 0.5 .25 -1.5 7.");
        let values: Vec<_> = tokens[..5]
            .iter()
            .map(|t| t.literal().and_then(LiteralValue::as_float))
            .collect();
        assert_eq!(values, vec![Some(2.75), Some(0.5), Some(0.25), Some(-1.5), Some(7.0)]);
    }

    #[test]
    fn test_exponent_is_float() {
        let tokens = collect_tokens("1e3 2.5E-2 4e+1");
        assert_eq!(tokens[0].literal(), Some(&LiteralValue::Float(1000.0)));
        assert_eq!(tokens[1].literal(), Some(&LiteralValue::Float(0.025)));
        assert_eq!(tokens[2].literal(), Some(&LiteralValue::Float(40.0)));
    }

    #[test]
    fn test_number_stops_at_second_dot() {
        let mut stream = create_stream("1.2.3");
        let mut scanner = LocoScanner::new();
        let first = scanner.next_token(&mut stream).unwrap();
        assert_eq!(first.literal(), Some(&LiteralValue::Float(1.2)));
        let second = scanner.next_token(&mut stream).unwrap();
        assert_eq!(second.literal(), Some(&LiteralValue::Float(0.3)));
    }

    #[test]
    fn test_number_followed_by_symbol() {
        let tokens = collect_tokens("5)");
        assert_eq!(tokens[0].literal(), Some(&LiteralValue::Integer(5)));
        assert!(tokens[1].is_symbol(b')'));
    }

    #[test]
    fn test_malformed_numbers() {
        for input in ["-", "+", ".", "1e", "99999999999999999999"] {
            let err = scan_one(input).unwrap_err();
            assert!(
                matches!(err.kind, ErrorKind::MalformedNumber(ref lexeme) if lexeme == input),
                "input {input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_out_of_range_float_is_malformed() {
        for input in ["1e400", "-1e400", "2.5E+999"] {
            let err = scan_one(input).unwrap_err();
            assert_eq!(err.kind, ErrorKind::MalformedNumber(input.to_string()));
            assert_eq!(err.column(), 1);
        }

        // 下溢到 0 仍是合法数字
        let token = scan_one("1e-400").unwrap();
        assert_eq!(token.literal(), Some(&LiteralValue::Float(0.0)));
    }

    #[test]
    fn test_string() {
        let token = scan_one(r#""hello world""#).unwrap();
        assert_eq!(token.kind(), TokenKind::StringLiteral);
        assert_eq!(token.text(), Some("hello world"));
    }

    #[test]
    fn test_string_has_no_escapes() {
        let token = scan_one(r#""a\nb""#).unwrap();
        assert_eq!(token.text(), Some(r"a\nb"));
    }

    #[test]
    fn test_string_keeps_whitespace_and_hash() {
        let token = scan_one("\"  # not a comment\n\"").unwrap();
        assert_eq!(token.text(), Some("  # not a comment\n"));
    }

    #[test]
    fn test_unterminated_string_points_at_quote() {
        let err = scan_one("  \"abc").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnterminatedString);
        assert_eq!((err.line(), err.column()), (1, 3));
    }

    #[test]
    fn test_invalid_character() {
        let err = scan_one("  $").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCharacter(b'$'));
        assert_eq!(err.column(), 3);
    }

    #[test]
    fn test_eof_literal_is_empty_text() {
        let token = scan_one("   ").unwrap();
        assert!(token.is_eof());
        assert_eq!(token.text(), Some(""));
    }

    #[test]
    fn test_comment_skipped() {
        let token = scan_one("# comment\n42").unwrap();
        assert_eq!(token.literal(), Some(&LiteralValue::Integer(42)));
        assert_eq!((token.location().line, token.location().column), (2, 1));
    }

    #[test]
    fn test_minus_is_never_a_symbol() {
        let tokens = collect_tokens("x -1");
        assert_eq!(tokens[0].kind(), TokenKind::Identifier);
        assert_eq!(tokens[1].literal(), Some(&LiteralValue::Integer(-1)));
    }

    #[test]
    fn test_position_tracking() {
        let tokens = collect_tokens("def f(x)\n\treturn x");
        let positions: Vec<_> = tokens
            .iter()
            .map(|t| (t.location().line, t.location().column))
            .collect();
        // def f ( x ) return x EOF
        assert_eq!(
            positions,
            vec![(1, 1), (1, 5), (1, 6), (1, 7), (1, 8), (2, 5), (2, 12), (2, 13)]
        );
    }

    #[test]
    fn test_char_predicates() {
        assert!(is_symbol(b'='));
        assert!(!is_symbol(b'-'));
        assert!(is_number_start(b'.'));
        assert!(is_identifier_start(b'_'));
        assert!(!is_identifier_start(b'1'));
        assert!(is_identifier_continue(b'1'));
    }
}
