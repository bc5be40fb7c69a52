use std::fmt::Display;

use crate::{lexer::tokens::Token, Span};

use super::ast::Node;

// LITERALS

/// Number Expression
/// A leaf holding an INT or FLOAT token.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub token: Token,
}

impl NumberExpr {
    pub fn get_span(&self) -> &Span {
        self.token.span()
    }
}

impl Display for NumberExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NN[{}]", self.token)
    }
}

// COMPLEX

/// Binary Expression
/// An arithmetic operation between two sub-trees.
///
/// The operator is always PLUS, SUB, MULT or DIV. The span runs from the start
/// of `left` to the end of `right`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Node>,
    pub operator: Token,
    pub right: Box<Node>,
    pub span: Span,
}

impl BinaryExpr {
    pub fn new(left: Node, operator: Token, right: Node) -> Self {
        let span = Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        };

        BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            span,
        }
    }
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BINOP[{}, {}, {}]", self.left, self.operator, self.right)
    }
}
