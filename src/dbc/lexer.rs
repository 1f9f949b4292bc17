use crate::types::token::{Token, TokenKind};

/// Hand-written lexer for DBC text.
///
/// Produces identifiers, numbers, quoted strings, single-character
/// punctuation and explicit [`TokenKind::Newline`] tokens; `//` starts a
/// line comment. Unrecognized characters are logged and skipped so the
/// token stream is always well formed.
pub struct Lexer {
    chars: Vec<char>,
    index: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            chars: input.chars().collect(),
            index: 0,
            line: 1,
            column: 1,
        }
    }

    fn eof(&self) -> bool {
        self.index >= self.chars.len()
    }

    fn peek(&self) -> char {
        self.chars.get(self.index).copied().unwrap_or('\0')
    }

    fn peek_at(&self, offset: usize) -> char {
        self.chars.get(self.index + offset).copied().unwrap_or('\0')
    }

    fn bump(&mut self) -> char {
        if self.eof() {
            return '\0';
        }
        let c = self.chars[self.index];
        self.index += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Skips spaces, tabs, carriage returns and `//` comments, but never a
    /// bare `\n`: newlines terminate statements and must become tokens.
    fn skip_whitespace_except_newline(&mut self) {
        while !self.eof() {
            let c = self.peek();
            if c == ' ' || c == '\t' || c == '\r' {
                self.bump();
                continue;
            }
            if c == '/' && self.peek_at(1) == '/' {
                while !self.eof() && self.peek() != '\n' {
                    self.bump();
                }
                continue;
            }
            break;
        }
    }

    fn read_identifier(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        let mut lexeme = String::new();
        while !self.eof() {
            let c = self.peek();
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
                lexeme.push(self.bump());
            } else {
                break;
            }
        }
        Token::new(TokenKind::Identifier, lexeme, line, column)
    }

    fn read_number_into(&mut self, lexeme: &mut String) {
        let mut seen_dot = false;
        while !self.eof() {
            let c = self.peek();
            if c.is_ascii_digit() {
                lexeme.push(self.bump());
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                lexeme.push(self.bump());
            } else if c == 'e' || c == 'E' {
                lexeme.push(self.bump());
                if self.peek() == '+' || self.peek() == '-' {
                    lexeme.push(self.bump());
                }
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        let mut lexeme = String::new();
        self.read_number_into(&mut lexeme);
        Token::new(TokenKind::Number, lexeme, line, column)
    }

    fn read_string(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        let mut lexeme = String::new();
        // consume opening quote
        self.bump();
        while !self.eof() {
            let c = self.bump();
            if c == '"' {
                break;
            }
            if c == '\\' {
                if !self.eof() {
                    lexeme.push(self.bump());
                }
            } else {
                lexeme.push(c);
            }
        }
        Token::new(TokenKind::String, lexeme, line, column)
    }

    /// Consumes the whole input and returns the token stream, terminated by
    /// an [`TokenKind::EndOfFile`] sentinel.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        while !self.eof() {
            // Normalize whitespace first (consumes '\r' in CRLF).
            self.skip_whitespace_except_newline();
            if self.eof() {
                break;
            }
            if self.peek() == '\n' {
                let tok = Token::new(TokenKind::Newline, "\n", self.line, self.column);
                self.bump();
                tokens.push(tok);
                continue;
            }

            let c = self.peek();
            if c.is_ascii_alphabetic() || c == '_' {
                tokens.push(self.read_identifier());
                continue;
            }
            if c.is_ascii_digit() {
                tokens.push(self.read_number());
                continue;
            }
            if c == '-' && self.peek_at(1).is_ascii_digit() {
                // negative number
                let (line, column) = (self.line, self.column);
                let mut lexeme = String::from("-");
                self.bump();
                self.read_number_into(&mut lexeme);
                tokens.push(Token::new(TokenKind::Number, lexeme, line, column));
                continue;
            }

            let punct = match c {
                ':' => Some(TokenKind::Colon),
                ';' => Some(TokenKind::Semicolon),
                '@' => Some(TokenKind::At),
                '+' => Some(TokenKind::Plus),
                '-' => Some(TokenKind::Minus),
                '|' => Some(TokenKind::Pipe),
                '(' => Some(TokenKind::LParen),
                ')' => Some(TokenKind::RParen),
                '[' => Some(TokenKind::LBracket),
                ']' => Some(TokenKind::RBracket),
                ',' => Some(TokenKind::Comma),
                _ => None,
            };

            if let Some(kind) = punct {
                let (line, column) = (self.line, self.column);
                let c = self.bump();
                tokens.push(Token::new(kind, c.to_string(), line, column));
            } else if c == '"' {
                tokens.push(self.read_string());
            } else {
                log::error!(
                    "Unrecognized character: {:?} (0x{:02X}) at line {} column {}",
                    c,
                    c as u32,
                    self.line,
                    self.column
                );
                self.bump();
            }
        }

        tokens.push(Token::new(TokenKind::EndOfFile, "", self.line, self.column));
        tokens
    }
}
