use std::fmt;
use std::io;
use thiserror::Error;

/// A recoverable diagnostic produced while parsing DBC text.
///
/// Parse errors never abort the parse: the offending line is skipped and the
/// error is logged and recorded, so `Parser::parse` still yields a
/// [`Database`](crate::types::ast::Database). Callers inspect
/// `Parser::errors()` to detect partial failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based source line.
    pub line: u32,
    /// 1-based source column.
    pub column: u32,
    /// Human-readable description of what was expected.
    pub message: String,
}

impl ParseError {
    pub fn new(line: u32, column: u32, message: impl Into<String>) -> Self {
        ParseError {
            line,
            column,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (line {}, column {})", self.message, self.line, self.column)
    }
}

/// Errors produced while reading a `.dbc` file from disk.
#[derive(Debug, Error)]
pub enum DbcReadError {
    #[error("Not a valid .dbc file: {path}")]
    InvalidExtension { path: String },
    #[error("Failed to open '{path}'. \nError: {source}")]
    OpenFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while reading '{path}'. \nError: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Errors produced while writing generated source files.
///
/// These are the only fatal errors of a generation run; everything upstream
/// (lexing, parsing) recovers locally.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("Failed to create directories for '{path}'. \nError: {source}")]
    CreateDirectory {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to create '{path}'. \nError: {source}")]
    CreateFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while writing '{path}'. \nError: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to format generated source")]
    Format,
}

/// Errors produced while verifying that a signal fits a CAN frame layout.
///
/// Only raised when range checking is enabled via
/// [`ParseOptions`](crate::dbc::ParseOptions).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Signal bit length cannot be zero")]
    ZeroBitLength,
    #[error("Invalid DLC {dlc}")]
    InvalidDlc { dlc: u32 },
    #[error(
        "Out of bounds (Intel)! \nSignal end bit = {end} \nMessage total bits = {total_bits} (dlc={dlc})"
    )]
    IntelOutOfBounds {
        end: usize,
        total_bits: usize,
        dlc: u32,
    },
    #[error(
        "Out of bounds (Motorola)! \nSignal linearized start = {start} \nMessage total bits = {total_bits} (dlc={dlc})"
    )]
    MotorolaStartOutOfBounds {
        start: usize,
        total_bits: usize,
        dlc: u32,
    },
    #[error(
        "Out of bounds (Motorola): Signal linearized end = {end} \nMessage total bits = {total_bits} (dlc={dlc})"
    )]
    MotorolaEndOutOfBounds {
        end: usize,
        total_bits: usize,
        dlc: u32,
    },
}
