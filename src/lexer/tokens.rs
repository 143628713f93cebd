use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, (TokenKind, Literal)> = {
        let mut map = HashMap::new();
        map.insert("true", (TokenKind::Boolean, Literal::Boolean(true)));
        map.insert("false", (TokenKind::Boolean, Literal::Boolean(false)));
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Integer,
    Boolean,

    Plus,
    Minus,
    Star,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Typed payload of a literal token.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Literal {
    Integer(i64),
    Boolean(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the token
    pub value: String,
    pub literal: Option<Literal>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn integer(value: i64, span: Span) -> Self {
        Token {
            kind: TokenKind::Integer,
            value: value.to_string(),
            literal: Some(Literal::Integer(value)),
            span,
        }
    }

    pub fn boolean(value: bool, span: Span) -> Self {
        Token {
            kind: TokenKind::Boolean,
            value: value.to_string(),
            literal: Some(Literal::Boolean(value)),
            span,
        }
    }

    /// Builds an operator token whose text is the operator symbol.
    ///
    /// Returns `None` for any kind that is not an operator; literal tokens
    /// need a payload and end-of-input has `Token::eof`.
    pub fn symbol(kind: TokenKind, span: Span) -> Option<Self> {
        let value = match kind {
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::EOF | TokenKind::Integer | TokenKind::Boolean => return None,
        };

        Some(Token {
            kind,
            value: String::from(value),
            literal: None,
            span,
        })
    }

    pub fn eof(span: Span) -> Self {
        Token {
            kind: TokenKind::EOF,
            value: String::from("EOF"),
            literal: None,
            span,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, TokenKind::Integer | TokenKind::Boolean)
    }

    pub fn debug(&self) {
        if self.is_literal() {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
