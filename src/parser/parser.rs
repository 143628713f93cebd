//! Parser state and token consumption.
//!
//! The parser owns a token source and a single lookahead token. Grammar
//! rules live in `expr.rs`; this module holds the state they share and the
//! `parse` entry point for whole inputs.

use std::mem;

use log::trace;

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        source::{TokenSource, TokenStream},
        tokens::{Token, TokenKind},
    },
};

/// Recursive-descent parser over a pull-based token source.
pub struct Parser<S: TokenSource> {
    /// Where tokens are pulled from
    source: S,
    /// The next unconsumed token
    current: Token,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a new parser, pulling the first token from `source`.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        trace!("primed lookahead with {}", current.kind);

        Parser { source, current }
    }

    /// Returns the current lookahead token without consuming it.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current lookahead token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Consumes the lookahead token, refilling it from the source.
    pub(crate) fn advance(&mut self) -> Token {
        let next = self.source.next_token();
        let consumed = mem::replace(&mut self.current, next);
        trace!("consumed {} {:?}", consumed.kind, consumed.value);
        consumed
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Builds the unexpected token error for the current lookahead.
    pub(crate) fn unexpected(&self, rule: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                rule: String::from(rule),
                kind: self.current.kind,
            },
            self.current.span.start.clone(),
        )
    }

    /// Succeeds only when every token has been consumed.
    pub fn expect_eof(&self) -> Result<(), Error> {
        if self.peek_is(TokenKind::EOF) {
            Ok(())
        } else {
            Err(self.unexpected("parse"))
        }
    }

    /// Releases the token source. The lookahead token is dropped.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl Parser<TokenStream> {
    /// Tokenizes `source` and creates a parser over the resulting tokens.
    ///
    /// # Arguments
    ///
    /// * `source` - The expression text
    /// * `file` - Label used in spans, `shell` when not given
    pub fn from_source(source: String, file: Option<String>) -> Result<Self, Error> {
        let tokens = tokenize(source, file)?;
        Ok(Parser::new(TokenStream::new(tokens)))
    }
}

/// Parses a complete expression from source text.
///
/// Fails if the text does not tokenize, does not start with a valid
/// expression, or has tokens left over after it.
pub fn parse(source: String, file: Option<String>) -> Result<Expr, Error> {
    let mut parser = Parser::from_source(source, file)?;
    let expr = parser.parse_expr()?;
    parser.expect_eof()?;

    Ok(expr)
}
