use std::vec::IntoIter;

use crate::Span;

use super::tokens::{Token, TokenKind};

/// A pull-based producer of tokens.
///
/// Every call yields a token. Once the input is exhausted the source keeps
/// returning an `EOF` token.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

/// Token source backed by an already tokenized vector.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: IntoIter<Token>,
    eof_span: Span,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof_span = tokens
            .last()
            .map(|token| Span {
                start: token.span.end.clone(),
                end: token.span.end.clone(),
            })
            .unwrap_or_else(Span::null);

        TokenStream {
            tokens: tokens.into_iter(),
            eof_span,
        }
    }

    /// Number of tokens not yet pulled, not counting synthesised `EOF`s.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) => {
                if token.kind == TokenKind::EOF {
                    self.eof_span = token.span.clone();
                }
                token
            }
            None => Token::eof(self.eof_span.clone()),
        }
    }
}
