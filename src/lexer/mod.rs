//! Lexical analysis module.
//!
//! This module turns source text into the tokens the parser pulls:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of the `true`/`false` keywords, integers and operators
//! - Token position tracking for error reporting
//! - The `TokenSource` pull interface and a vector-backed implementation

pub mod lexer;
pub mod source;
pub mod tokens;
