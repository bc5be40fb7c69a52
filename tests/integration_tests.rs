//! Integration tests for the tokenize and parse pipeline.
//!
//! These go through the public API only, the way the command line driver does.

use rparse::{
    ast::ast::Node,
    errors::errors::ErrorKind,
    lexer::{
        lexer::{tokenize, tokenize_multiline},
        tokens::{display_tokens, TokenKind, TokenValue},
    },
    parse_source,
    parser::parser::parse,
};

#[test]
fn test_pipeline_simple_expression() {
    let tokens = tokenize("1+2").unwrap();
    assert_eq!(display_tokens(&tokens), "[INT:1, PLUS, INT:2]");

    let ast = parse(tokens).unwrap();
    assert_eq!(ast.to_string(), "BINOP[NN[INT:1], PLUS, NN[INT:2]]");
}

#[test]
fn test_pipeline_mixed_numbers() {
    let ast = parse_source("3.5 * (2 - 0.5) / 7").unwrap();
    assert_eq!(
        ast.to_string(),
        "BINOP[BINOP[NN[FLOAT:3.5], MULT, BINOP[NN[INT:2], SUB, NN[FLOAT:0.5]]], DIV, NN[INT:7]]"
    );
}

#[test]
fn test_pipeline_number_payloads() {
    let ast = parse_source("10 + 2.25").unwrap();
    let Node::Binary(binary) = &ast else {
        panic!("Expected binary node");
    };

    let Node::Number(left) = binary.left.as_ref() else {
        panic!("Expected number node");
    };
    let Node::Number(right) = binary.right.as_ref() else {
        panic!("Expected number node");
    };

    assert_eq!(left.token.kind(), TokenKind::Int);
    assert_eq!(left.token.value(), TokenValue::Int(10));
    assert_eq!(right.token.kind(), TokenKind::Float);
    assert_eq!(right.token.value(), TokenValue::Float(2.25));
}

#[test]
fn test_pipeline_multiline_source() {
    let ast = parse(tokenize_multiline("(1 +\n  2)\n* 3").unwrap()).unwrap();
    assert_eq!(
        ast.to_string(),
        "BINOP[BINOP[NN[INT:1], PLUS, NN[INT:2]], MULT, NN[INT:3]]"
    );
    assert_eq!(ast.get_span().start.line, 1);
    assert_eq!(ast.get_span().end.line, 3);
}

#[test]
fn test_pipeline_lexical_failure() {
    let error = parse_source("1 & 2").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::IllegalCharacter);
    assert_eq!(error.message(), "Unsupported character '&'");
    assert_eq!(error.source_line().as_str(), "1 & 2");
}

#[test]
fn test_pipeline_syntax_failure() {
    let error = parse_source("(1+2").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::InvalidSyntax);
    assert_eq!(
        error.message(),
        "Cannot understand line #1. Perhaps a typo? Expected closing parenthesis"
    );
}

#[test]
fn test_pipeline_empty_source() {
    let error = parse_source("").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidSyntax);

    let error = parse_source("  \t ").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidSyntax);
}

#[test]
fn test_pipeline_error_is_std_error() {
    let error: Box<dyn std::error::Error> = Box::new(parse_source("1 # 2").unwrap_err());
    assert_eq!(error.to_string(), "Unsupported character '#'");
}

#[test]
fn test_pipeline_independent_runs() {
    let first = parse_source("8 - 3 - 2").unwrap();
    assert!(parse_source("8 - ").is_err());
    let second = parse_source("8 - 3 - 2").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_pipeline_line_break_is_illegal_by_default() {
    let error = parse_source("1\n+2").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::IllegalCharacter);
    assert_eq!(error.message(), "Unsupported character '\n'");
}

#[test]
fn test_pipeline_deep_nesting_is_an_error() {
    let source = "(".repeat(5000) + "1" + &")".repeat(5000);
    let error = parse_source(&source).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::InvalidSyntax);
    assert!(error.message().ends_with("Expression nested too deeply"));
}
