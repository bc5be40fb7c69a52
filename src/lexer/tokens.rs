use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// No token. Produced by the parser once it runs past the end of input.
    None,

    Plus,
    Sub,
    Mult,
    Div,

    LParen,
    RParen,

    Int,
    Float,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::None => "NONE",
            TokenKind::Plus => "PLUS",
            TokenKind::Sub => "SUB",
            TokenKind::Mult => "MULT",
            TokenKind::Div => "DIV",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
        };
        write!(f, "{}", name)
    }
}

/// Literal payload of a token. Only numeric tokens carry one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue {
    None,
    Int(i64),
    Float(f64),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::None => write!(f, ""),
            TokenValue::Int(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{}", value),
        }
    }
}

/// A lexical unit.
///
/// Numeric tokens can only be built from an `i64` or `f64`, so `value` is
/// `TokenValue::None` exactly when `kind` is not `Int` or `Float`.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    value: TokenValue,
    span: Span,
}

impl Token {
    /// Creates a token without a payload. Numeric tokens go through `Token::int` and `Token::float`.
    pub(crate) fn new(kind: TokenKind, span: Span) -> Self {
        debug_assert!(!matches!(kind, TokenKind::Int | TokenKind::Float));

        Token {
            kind,
            value: TokenValue::None,
            span,
        }
    }

    pub(crate) fn int(value: i64, span: Span) -> Self {
        Token {
            kind: TokenKind::Int,
            value: TokenValue::Int(value),
            span,
        }
    }

    pub(crate) fn float(value: f64, span: Span) -> Self {
        Token {
            kind: TokenKind::Float,
            value: TokenValue::Float(value),
            span,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> TokenValue {
        self.value
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            TokenValue::None => write!(f, "{}", self.kind),
            value => write!(f, "{}:{}", self.kind, value),
        }
    }
}

/// Renders a token list as `[INT:1, PLUS, INT:2]`.
pub fn display_tokens(tokens: &[Token]) -> String {
    let parts = tokens.iter().map(Token::to_string).collect::<Vec<String>>();
    format!("[{}]", parts.join(", "))
}
