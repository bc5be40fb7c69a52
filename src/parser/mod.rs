//! Parser module for building the expression tree.
//!
//! A recursive-descent parser over three productions, one per precedence tier:
//!
//! - `Expr` handles `+` and `-`
//! - `Term` handles `*` and `/`
//! - `Factor` handles number literals and parenthesized expressions
//!
//! Both operator tiers fold to the left. The first syntax error ends the parse.

pub mod expr;
pub mod lookups;
pub mod parser;
