//! Lexical analysis.
//!
//! Converts source text into a flat token stream for the parser. It handles:
//!
//! - Integer and floating-point literals
//! - The four arithmetic operators and parentheses
//! - Skipping spaces and tabs, and tracking line breaks for error reporting

pub mod lexer;
pub mod tokens;
