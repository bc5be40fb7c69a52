//! Parser state and entry point.
//!
//! The `Parser` owns the token stream and a cursor that only moves forward.
//! Once the cursor passes the last token it reports a NONE token positioned
//! at the end of the input, so the productions never see an out-of-range index.

use crate::{
    ast::ast::Node,
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::expr::parse_expr;

/// Deepest parenthesis nesting accepted before the parse fails.
pub const MAX_NESTING: usize = 256;

/// The parser state: the tokens and the index of the current one.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Returned once `pos` runs past the last token
    end_of_input: Token,
    /// Number of currently open parenthesized groups
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens
            .last()
            .map(|token| token.span().end.clone())
            .unwrap_or_else(Position::null);

        Parser {
            tokens,
            pos: 0,
            end_of_input: MK_TOKEN!(
                TokenKind::None,
                Span {
                    start: end.clone(),
                    end
                }
            ),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.end_of_input)
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind()
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it has the expected kind, otherwise fails
    /// with `detail`.
    pub fn expect_error(&mut self, expected_kind: TokenKind, detail: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(Error::invalid_syntax(detail, self.get_position()));
        }

        Ok(self.advance())
    }

    /// Enters a parenthesized group, failing once more than `MAX_NESTING` are open.
    pub fn enter_group(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING {
            return Err(Error::invalid_syntax("Expression nested too deeply", self.get_position()));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_group(&mut self) {
        self.depth -= 1;
    }

    /// Position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span().start.clone()
    }
}

/// Parses a token stream into a single expression tree.
///
/// Tokens left over after a complete expression are ignored.
pub fn parse(tokens: Vec<Token>) -> Result<Node, Error> {
    let mut parser = Parser::new(tokens);
    parse_expr(&mut parser)
}
