/// Kind of a single lexical token produced by the DBC lexer.
///
/// Newlines are significant in DBC files (they terminate statements), so the
/// lexer emits an explicit [`TokenKind::Newline`] instead of swallowing them
/// with the rest of the whitespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Alphanumeric word, may contain `_` and `.`.
    Identifier,
    /// Decimal number, optional leading `-`, fraction and exponent.
    Number,
    /// Double-quoted string; the lexeme holds the unescaped content.
    String,
    /// End-of-line marker (`\n`).
    Newline,
    Colon,
    Semicolon,
    At,
    Plus,
    Minus,
    Pipe,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    /// Sentinel appended after the last real token.
    EndOfFile,
}

/// One lexical token with its source position (1-based line and column).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, column: u32) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }
}
