//! # dbc_gen
//!
//! Rust compiler for **automotive CAN** databases: parse `.dbc` files and
//! generate typed, bit-exact message codecs plus a frame dispatcher.
//!
//! ## Highlights
//! - **DBC front end**: lenient lexer + recursive-descent parser producing an
//!   immutable [`Database`] AST; malformed lines are logged and skipped, never
//!   fatal.
//! - **Codec generation**: per-message Rust modules with `encode`/`decode`
//!   implementing exact Intel/Motorola bit packing, sign extension and
//!   value-table enums.
//! - **Database generation**: one aggregate struct, a `Messages` enum keyed by
//!   CAN id and an `id -> decode` dispatch.
//! - **Dispatch generation**: a runtime parser with per-message callbacks,
//!   multiplexed-batch gating and primary-gated N-message aggregators.
//! - **Runtime support**: the generated code leans on [`rt`] for bit
//!   traversal ([`rt::extract_bits`], [`rt::insert_bits`]) and seen-state
//!   tracking ([`rt::SeenSet`], [`rt::MessageAggregator`]).
//!

pub mod codegen;
pub mod dbc;
pub mod rt;
#[doc(hidden)]
pub mod types;

// Top-level re-exports (appear under Crate Items → Structs)
#[doc(inline)]
pub use crate::types::{
    ast::{Database, Message, Signal, ValueMapping},
    errors::{CodegenError, DbcReadError, LayoutError, ParseError},
};

#[doc(inline)]
pub use crate::dbc::{ParseOptions, Parser, parse_from_file, parse_from_str};

#[doc(inline)]
pub use crate::codegen::generate;
