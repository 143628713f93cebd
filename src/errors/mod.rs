//! Error types and error handling.
//!
//! - Error structures with source position information
//! - Lexer errors (unrecognised input, oversized integers)
//! - The parser's unexpected token error
//! - Helpful error tips for rendering

pub mod errors;
