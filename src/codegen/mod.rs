//! # codegen
//!
//! Emits Rust source from a parsed [`Database`]: one codec module per
//! message, one aggregate database module and one frame dispatcher module.
//! The emitted code depends only on [`crate::rt`] for bit traversal and
//! seen-state tracking.

use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::types::ast::{Database, Message};
use crate::types::errors::CodegenError;

pub mod database;
pub mod dispatch;
pub mod message;

/// Writes every generated artifact for `db` into `out_dir`, creating the
/// directory if needed.
///
/// Artifacts, with `base` as the user-chosen stem:
/// - `<base>_<message_name>.rs` per message,
/// - `<base>.rs` aggregate database module,
/// - `<base>_parser.rs` frame dispatcher module.
///
/// # Errors
/// - [`CodegenError`] when the directory or one of the files cannot be
///   created or written. IO failures are fatal to the run; nothing upstream
///   of them is rolled back.
pub fn generate(db: &Database, base: &str, out_dir: &Path) -> Result<(), CodegenError> {
    fs::create_dir_all(out_dir).map_err(|source| CodegenError::CreateDirectory {
        path: out_dir.display().to_string(),
        source,
    })?;

    for msg in &db.messages {
        let file_name = message::message_file_name(base, msg);
        write_artifact(out_dir, &file_name, &message::render_message(msg))?;
    }
    write_artifact(out_dir, &format!("{base}.rs"), &database::render_database(base, db))?;
    write_artifact(
        out_dir,
        &format!("{base}_parser.rs"),
        &dispatch::render_parser(base, db),
    )?;

    log::info!(
        "generated {} message codec(s) for '{}' in {}",
        db.messages.len(),
        base,
        out_dir.display()
    );
    Ok(())
}

fn write_artifact(out_dir: &Path, file_name: &str, content: &str) -> Result<(), CodegenError> {
    let path = out_dir.join(file_name);
    let mut file = File::create(&path).map_err(|source| CodegenError::CreateFile {
        path: path.display().to_string(),
        source,
    })?;
    file.write_all(content.as_bytes())
        .map_err(|source| CodegenError::Write {
            path: path.display().to_string(),
            source,
        })?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Messages deduplicated by CAN id, first declaration wins. The aggregate
/// module and the dispatcher can only carry one codec per id; later
/// declarations sharing an id still get their own codec file but are
/// unreachable from `decode`.
pub(crate) fn unique_messages(db: &Database) -> Vec<&Message> {
    let mut unique: Vec<&Message> = Vec::new();
    for msg in &db.messages {
        if !unique.iter().any(|m| m.id == msg.id) {
            unique.push(msg);
        }
    }
    unique
}

/// Converts a DBC name to a snake_case module/file stem.
pub(crate) fn snake_ident(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev_lower = i > 0 && (chars[i - 1].is_ascii_lowercase() || chars[i - 1].is_ascii_digit());
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if i > 0 && (prev_lower || (next_lower && chars[i - 1] != '_')) {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Formats an `f64` so it reads back as the same value and always parses as
/// a float literal (integral values get a trailing `.0`).
pub(crate) fn format_f64(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
