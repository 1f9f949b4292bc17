//! # dbc
//!
//! `dbc` is the module to work with .dbc files: lexing, parsing and the
//! optional strictness checks.

pub mod layout;
pub mod lexer;
pub mod parser;

use std::fs::File;
use std::io::{BufReader, Read};

use encoding_rs::WINDOWS_1252;

use crate::types::ast::Database;
use crate::types::errors::DbcReadError;

pub use parser::Parser;

/// Optional strictness checks applied during parsing.
///
/// The DBC convention leaves message-id uniqueness and signal bit ranges
/// unvalidated, and plenty of hand-edited vendor files rely on that. Both
/// checks therefore default to off; when enabled, violations are recorded as
/// recoverable [`ParseError`](crate::types::errors::ParseError)s and logged,
/// and parsing continues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Flag messages that reuse an already-declared CAN id.
    pub require_unique_message_ids: bool,
    /// Flag signals whose bit range does not fit `dlc * 8` bits.
    pub check_signal_ranges: bool,
}

/// Parses DBC text into a [`Database`].
///
/// Malformed lines are skipped, never fatal; use [`Parser`] directly when
/// the recovered errors are of interest.
pub fn parse_from_str(text: &str) -> Database {
    let mut parser = Parser::new(text);
    let db = parser.parse();
    if !parser.errors().is_empty() {
        log::warn!(
            "DBC parse finished with {} recovered error(s)",
            parser.errors().len()
        );
    }
    db
}

/// Parses a DBC file and returns a populated [`Database`] instance.
///
/// Reads the file from disk, decodes it as Windows-1252 (the encoding DBC
/// tooling traditionally emits), and parses its content:
/// - **Version** (from the `VERSION` line)
/// - **Nodes** (from the `BU_` line)
/// - **Messages** (from `BO_` lines)
/// - **Signals** (from `SG_` lines, including multiplex markers)
/// - **Comments** for messages and signals (from `CM_` lines)
/// - **Value tables** (from `VAL_` lines)
///
/// # Parameters
/// - `path`: Path to the `.dbc` file to parse.
///
/// # Returns
/// - `Ok(Database)` if the file was successfully read and parsed.
/// - `Err(DbcReadError)` if the file could not be opened or read.
///
/// # Errors
/// Returns an `Err` only for I/O-level problems (wrong extension, open or
/// read failure). Parsing errors themselves are recovered: malformed lines
/// are skipped and result in missing elements, not in a failed call.
///
/// # Example
/// ```no_run
/// use dbc_gen::dbc;
///
/// let db = dbc::parse_from_file("example.dbc").expect("Failed to read DBC file");
/// println!("Parsed {} messages", db.messages.len());
/// ```
pub fn parse_from_file(path: &str) -> Result<Database, DbcReadError> {
    if !path.to_ascii_lowercase().ends_with(".dbc") {
        return Err(DbcReadError::InvalidExtension {
            path: path.to_string(),
        });
    }

    let file = File::open(path).map_err(|source| DbcReadError::OpenFile {
        path: path.to_string(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| DbcReadError::Read {
            path: path.to_string(),
            source,
        })?;

    // Decode in Windows-1252
    let (text, _, _) = WINDOWS_1252.decode(&bytes);

    // Swap german chars with plain ASCII
    let text = text
        .replace('ü', "u")
        .replace('ö', "o")
        .replace('ä', "a")
        .replace('ß', "ss")
        .replace('Ü', "U")
        .replace('Ö', "O")
        .replace('Ä', "A")
        .replace('¿', "?");

    Ok(parse_from_str(&text))
}
