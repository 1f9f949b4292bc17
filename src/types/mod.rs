//! Pure data types: AST, tokens and the error taxonomy.

pub mod ast;
pub mod errors;
pub mod token;
