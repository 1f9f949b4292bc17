use std::collections::HashMap;

use crate::dbc::layout::check_signal_fits;
use crate::dbc::lexer::Lexer;
use crate::dbc::ParseOptions;
use crate::types::ast::{Database, Message, Signal, ValueMapping};
use crate::types::errors::ParseError;
use crate::types::token::{Token, TokenKind};

/// Recursive-descent parser over the DBC token stream.
///
/// A single forward pass recognizes the top-level keywords (`VERSION`,
/// `NS_`, `BS_`, `BU_`, `BO_`/`SG_`, `CM_`, `VAL_`). Malformed constructs
/// never abort the parse: the production records a [`ParseError`], the rest
/// of the offending line is skipped, and parsing continues. [`Parser::parse`]
/// therefore always returns a [`Database`], possibly missing some expected
/// content; inspect [`Parser::errors`] to detect partial failure.
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
    options: ParseOptions,
    errors: Vec<ParseError>,
}

type ParseResult = Result<(), ParseError>;

impl Parser {
    pub fn new(input: &str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &str, options: ParseOptions) -> Self {
        Parser {
            tokens: Lexer::new(input).tokenize(),
            index: 0,
            options,
            errors: Vec::new(),
        }
    }

    /// Recoverable errors collected so far, in source order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.index]
    }

    fn bump(&mut self) -> &Token {
        let tok = &self.tokens[self.index];
        if self.index + 1 < self.tokens.len() {
            self.index += 1;
        }
        tok
    }

    fn eof(&self) -> bool {
        self.peek().kind == TokenKind::EndOfFile
    }

    fn accept(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    fn error_here(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(self.peek().line, self.peek().column, message)
    }

    /// Consumes up to and including the next newline.
    fn skip_line(&mut self) {
        while !self.eof() && self.peek().kind != TokenKind::Newline {
            self.bump();
        }
        if self.peek().kind == TokenKind::Newline {
            self.bump();
        }
    }

    fn recover(&mut self, section: &str, err: ParseError) {
        log::warn!("Failed to parse {} ({}, line {})", section, err.message, err.line);
        self.errors.push(err);
        self.skip_line();
    }

    /// Parses the whole token stream into a [`Database`].
    ///
    /// Never fails as a whole; unrecognized or malformed lines are skipped.
    pub fn parse(&mut self) -> Database {
        let mut db = Database::default();

        while !self.eof() {
            if self.peek().kind != TokenKind::Identifier {
                self.bump();
                continue;
            }

            let keyword = self.peek().lexeme.clone();
            match keyword.as_str() {
                "VERSION" => {
                    if let Err(err) = self.parse_version(&mut db) {
                        self.recover("VERSION", err);
                    }
                }
                "NS_" => self.parse_namespace_section(),
                "BS_" => self.skip_line(),
                "BU_" => self.parse_nodes(&mut db),
                "BO_" => {
                    if let Err(err) = self.parse_message(&mut db) {
                        self.recover("BO_", err);
                    }
                }
                "CM_" => {
                    if let Err(err) = self.parse_comment(&mut db) {
                        self.recover("CM_", err);
                    }
                }
                "VAL_" => {
                    if let Err(err) = self.parse_value_table(&mut db) {
                        self.recover("VAL_", err);
                    }
                }
                _ => self.skip_line(),
            }
        }

        db
    }

    fn parse_u32(&mut self, what: &str) -> Result<u32, ParseError> {
        if self.peek().kind != TokenKind::Number {
            return Err(self.error_here(format!("Expected {}", what)));
        }
        let err = self.error_here(format!("Invalid {}", what));
        self.bump().lexeme.parse::<u32>().map_err(|_| err)
    }

    fn parse_f64(&mut self, what: &str) -> Result<f64, ParseError> {
        if self.peek().kind != TokenKind::Number {
            return Err(self.error_here(format!("Expected {}", what)));
        }
        let err = self.error_here(format!("Invalid {}", what));
        self.bump().lexeme.parse::<f64>().map_err(|_| err)
    }

    // VERSION "..."
    fn parse_version(&mut self, db: &mut Database) -> ParseResult {
        self.bump(); // VERSION
        match self.peek().kind {
            TokenKind::String => {
                db.version = self.bump().lexeme.clone();
            }
            // Some DBCs have VERSION without quotes; accept a bare word.
            TokenKind::Identifier | TokenKind::Number => {
                db.version = self.bump().lexeme.clone();
            }
            _ => return Err(self.error_here("VERSION expects a string or identifier")),
        }
        self.skip_line();
        Ok(())
    }

    // NS_ [:] followed by one keyword per line; runs until a blank line or a
    // recognized top-level keyword.
    fn parse_namespace_section(&mut self) {
        self.bump(); // NS_
        if self.accept(TokenKind::Colon) {
            self.skip_line();
        }
        while !self.eof() {
            if self.peek().kind == TokenKind::Identifier {
                match self.peek().lexeme.as_str() {
                    "BU_" | "BO_" | "VERSION" | "BS_" => break,
                    _ => {}
                }
            }
            self.skip_line();
            // A blank line ends the NS_ block as well.
            if self.peek().kind == TokenKind::Newline {
                self.bump();
                break;
            }
        }
    }

    // BU_ [:] nodeA nodeB ...
    fn parse_nodes(&mut self, db: &mut Database) {
        self.bump(); // BU_
        self.accept(TokenKind::Colon);
        while !self.eof() && self.peek().kind != TokenKind::Newline {
            if self.peek().kind == TokenKind::Identifier {
                let name = self.bump().lexeme.clone();
                db.nodes.push(name);
            } else {
                self.bump();
            }
        }
        if self.peek().kind == TokenKind::Newline {
            self.bump();
        }
    }

    // BO_ <id> <name> : <dlc> <transmitter>, followed by its SG_ lines.
    fn parse_message(&mut self, db: &mut Database) -> ParseResult {
        self.bump(); // BO_

        let mut msg = Message::default();
        msg.id = self.parse_u32("message id")?;

        if self.peek().kind != TokenKind::Identifier {
            return Err(self.error_here("BO_ expects name"));
        }
        msg.name = self.bump().lexeme.clone();

        if !self.accept(TokenKind::Colon) {
            return Err(self.error_here("BO_ expects ':'"));
        }

        msg.dlc = self.parse_u32("DLC")?;

        if self.peek().kind != TokenKind::Identifier {
            return Err(self.error_here("BO_ expects transmitter"));
        }
        msg.transmitter = self.bump().lexeme.clone();
        self.skip_line();

        // Signal lines until the first token that is not SG_.
        while !self.eof() {
            match self.peek().kind {
                TokenKind::Newline => {
                    self.bump();
                }
                TokenKind::Identifier if self.peek().lexeme == "SG_" => {
                    self.parse_signal(&mut msg)?;
                }
                _ => break,
            }
        }

        if self.options.require_unique_message_ids
            && db.messages.iter().any(|m| m.id == msg.id)
        {
            let err = ParseError::new(
                self.peek().line,
                self.peek().column,
                format!("Duplicate message id {} ({})", msg.id, msg.name),
            );
            log::warn!("{}", err);
            self.errors.push(err);
        }

        db.messages.push(msg);
        Ok(())
    }

    // SG_ <name> [M|m<idx>] : <start>|<len>@<endianness><sign> (<scale>,<offset>)
    //     [<min>|<max>] "<unit>" <receivers...>
    fn parse_signal(&mut self, msg: &mut Message) -> ParseResult {
        self.bump(); // SG_

        if self.peek().kind != TokenKind::Identifier {
            return Err(self.error_here("SG_ expects name"));
        }
        let mut sig = Signal::default();
        sig.name = self.bump().lexeme.clone();

        // Optional multiplexer marker between name and ':'.
        if self.peek().kind == TokenKind::Identifier {
            let marker = self.peek().lexeme.clone();
            if marker == "M" {
                self.bump();
                sig.is_multiplexor = true;
                msg.is_multiplexed = true;
            } else if let Some(digits) = marker.strip_prefix('m')
                && !digits.is_empty()
                && digits.bytes().all(|b| b.is_ascii_digit())
            {
                self.bump();
                sig.is_multiplex = true;
                sig.multiplexed_group_idx = digits.parse::<u32>().unwrap_or(0);
                msg.is_multiplexed = true;
            }
        }

        if !self.accept(TokenKind::Colon) {
            return Err(self.error_here("SG_ expects ':'"));
        }

        sig.start_bit = self.parse_u32("start bit")?;
        if !self.accept(TokenKind::Pipe) {
            return Err(self.error_here("SG_ expects '|'"));
        }
        sig.length = self.parse_u32("length")?;
        if !self.accept(TokenKind::At) {
            return Err(self.error_here("SG_ expects '@'"));
        }

        // DBC: @0 = Motorola (big-endian), @1 = Intel (little-endian).
        let endianness = self.parse_u32("endianness marker")?;
        sig.little_endian = endianness == 1;

        match self.peek().kind {
            TokenKind::Plus => {
                sig.is_signed = false;
                self.bump();
            }
            TokenKind::Minus => {
                sig.is_signed = true;
                self.bump();
            }
            _ => {}
        }

        if !self.accept(TokenKind::LParen) {
            return Err(self.error_here("SG_ expects '('"));
        }
        sig.scale = self.parse_f64("scale")?;
        self.accept(TokenKind::Comma);
        sig.offset = self.parse_f64("offset")?;
        if !self.accept(TokenKind::RParen) {
            // tolerate a missing ')'
        }

        if self.accept(TokenKind::LBracket) {
            if self.peek().kind == TokenKind::Number {
                sig.minimum = self.bump().lexeme.parse::<f64>().unwrap_or(0.0);
            }
            self.accept(TokenKind::Pipe);
            if self.peek().kind == TokenKind::Number {
                sig.maximum = self.bump().lexeme.parse::<f64>().unwrap_or(0.0);
            }
            self.accept(TokenKind::RBracket);
        }

        if self.peek().kind == TokenKind::String {
            sig.unit = self.bump().lexeme.clone();
        }

        // Receivers until end of line, identifiers separated by commas.
        while !self.eof() && self.peek().kind != TokenKind::Newline {
            if self.peek().kind == TokenKind::Identifier {
                let name = self.bump().lexeme.clone();
                sig.receivers.push(name);
            } else {
                self.bump();
            }
        }
        if self.peek().kind == TokenKind::Newline {
            self.bump();
        }

        if self.options.check_signal_ranges
            && let Err(layout) = check_signal_fits(msg.dlc, sig.start_bit, sig.length, sig.little_endian)
        {
            let err = ParseError::new(
                self.peek().line,
                self.peek().column,
                format!("Signal '{}' does not fit: {}", sig.name, layout),
            );
            log::warn!("{}", err);
            self.errors.push(err);
        }

        msg.signals.push(sig);
        Ok(())
    }

    // CM_ BO_ <id> "<text>" [;]  |  CM_ SG_ <id> <signal> "<text>" [;]
    //
    // Comments attach to already-parsed content by id+name lookup; a comment
    // that references a message or signal not yet parsed silently fails to
    // attach (ordering preserved from the DBC convention).
    fn parse_comment(&mut self, db: &mut Database) -> ParseResult {
        self.bump(); // CM_

        if self.peek().kind != TokenKind::Identifier {
            self.skip_line();
            return Ok(());
        }

        let target = self.bump().lexeme.clone();
        match target.as_str() {
            "BO_" => {
                let id = self.parse_u32("CM_ BO_ id")?;
                if self.peek().kind == TokenKind::String {
                    let text = Self::strip_line_breaks(&self.bump().lexeme);
                    self.accept(TokenKind::Semicolon);
                    if let Some(msg) = db.message_by_id_mut(id) {
                        msg.comment = text;
                    }
                }
            }
            "SG_" => {
                let id = self.parse_u32("CM_ SG_ id")?;
                if self.peek().kind != TokenKind::Identifier {
                    return Err(self.error_here("CM_ SG_ expects signal name"));
                }
                let sig_name = self.bump().lexeme.clone();
                if self.peek().kind == TokenKind::String {
                    let text = Self::strip_line_breaks(&self.bump().lexeme);
                    self.accept(TokenKind::Semicolon);
                    if let Some(msg) = db.message_by_id_mut(id)
                        && let Some(sig) = msg.signals.iter_mut().find(|s| s.name == sig_name)
                    {
                        sig.comment = text;
                    }
                }
            }
            // CM_ BU_ and free-standing comments are not modelled; skip.
            _ => {}
        }

        self.skip_line();
        Ok(())
    }

    // VAL_ <id> <signal> (<raw> "<text>")* [;]
    fn parse_value_table(&mut self, db: &mut Database) -> ParseResult {
        self.bump(); // VAL_

        let id = self.parse_u32("VAL_ message id")?;
        if self.peek().kind != TokenKind::Identifier {
            return Err(self.error_here("VAL_ expects signal name"));
        }
        let sig_name = self.bump().lexeme.clone();

        let mut mappings: Vec<ValueMapping> = Vec::new();
        while !self.eof() && self.peek().kind != TokenKind::Newline {
            if self.peek().kind == TokenKind::Semicolon {
                self.bump();
                break;
            }
            if self.peek().kind != TokenKind::Number {
                // stray tokens; drop the rest of the line
                while !self.eof() && self.peek().kind != TokenKind::Newline {
                    self.bump();
                }
                break;
            }
            let raw_value = self.bump().lexeme.parse::<i64>().unwrap_or(0);
            if self.peek().kind != TokenKind::String {
                // malformed pair; bail out of this VAL_ line
                while !self.eof() && self.peek().kind != TokenKind::Newline {
                    self.bump();
                }
                break;
            }
            let description = Self::sanitize_description(&self.bump().lexeme);
            mappings.push(ValueMapping {
                raw_value,
                description,
            });
        }
        if self.peek().kind == TokenKind::Newline {
            self.bump();
        }

        Self::disambiguate_descriptions(&mut mappings);

        if let Some(msg) = db.message_by_id_mut(id)
            && let Some(sig) = msg.signals.iter_mut().find(|s| s.name == sig_name)
        {
            sig.value_table = mappings;
        }
        Ok(())
    }

    /// Replaces every non-alphanumeric character with `_` so the description
    /// can be used as an enumerator name by the code generator.
    fn sanitize_description(text: &str) -> String {
        text.chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    }

    /// Entries with identical descriptions each get their own raw value
    /// appended, so generated enumerator names stay unique.
    fn disambiguate_descriptions(mappings: &mut [ValueMapping]) {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for m in mappings.iter() {
            *counts.entry(m.description.as_str()).or_default() += 1;
        }
        let colliding: Vec<String> = counts
            .into_iter()
            .filter(|&(_, n)| n > 1)
            .map(|(desc, _)| desc.to_string())
            .collect();
        for m in mappings.iter_mut() {
            if colliding.iter().any(|d| *d == m.description) {
                let suffixed = format!("{}_{}", m.description, m.raw_value);
                m.description = Self::sanitize_description(&suffixed);
            }
        }
    }

    fn strip_line_breaks(text: &str) -> String {
        text.chars().filter(|&c| c != '\n' && c != '\r').collect()
    }
}
