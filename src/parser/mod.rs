//! Parser module for building the expression tree.
//!
//! This module contains a recursive-descent parser that pulls tokens one at
//! a time from a `TokenSource`. Operator precedence is encoded by the call
//! structure of the grammar rules:
//!
//! - `parse_expr` handles `+` and `-`, delegating operands to `parse_term`
//! - `parse_term` handles `*`, delegating operands to `parse_factor`
//! - `parse_factor` accepts integer and boolean literals
//!
//! Both operator levels fold left, so `1 - 2 - 3` is `(1 - 2) - 3`.

pub mod expr;
pub mod parser;
