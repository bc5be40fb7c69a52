use crate::{
    ast::{
        ast::Node,
        expressions::{BinaryExpr, NumberExpr},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{is_operator_of, BindingPower},
    parser::Parser,
};

type Production = fn(&mut Parser) -> Result<Node, Error>;

/// Expr := Term ((PLUS | SUB) Term)*
pub fn parse_expr(parser: &mut Parser) -> Result<Node, Error> {
    parse_binary_expr(parser, BindingPower::Additive, parse_term)
}

/// Term := Factor ((MULT | DIV) Factor)*
pub fn parse_term(parser: &mut Parser) -> Result<Node, Error> {
    parse_binary_expr(parser, BindingPower::Multiplicative, parse_factor)
}

/// Factor := INT | FLOAT | LPAREN Expr RPAREN
pub fn parse_factor(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind() {
        TokenKind::Int | TokenKind::Float => Ok(Node::from(NumberExpr {
            token: parser.advance(),
        })),
        TokenKind::LParen => parse_grouping_expr(parser),
        _ => Err(Error::invalid_syntax(
            format!("Unexpected token {}", parser.current_token()),
            parser.get_position(),
        )),
    }
}

fn parse_grouping_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.enter_group()?;
    parser.advance();
    let expr = parse_expr(parser)?;
    parser.expect_error(TokenKind::RParen, "Expected closing parenthesis")?;
    parser.exit_group();

    Ok(expr)
}

/// Parses `operand (op operand)*` for the operators of one tier, folding to the left.
fn parse_binary_expr(parser: &mut Parser, bp: BindingPower, operand: Production) -> Result<Node, Error> {
    let mut left = operand(parser)?;

    while is_operator_of(parser.current_token_kind(), bp) {
        let operator = parser.advance();
        let right = operand(parser)?;

        left = Node::from(BinaryExpr::new(left, operator, right));
    }

    Ok(left)
}
