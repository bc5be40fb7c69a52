#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{ast::ast::Node, errors::errors::Error, lexer::lexer::tokenize, parser::parser::parse};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in the source text.
///
/// `line` and `column` are 1-based, `column` counting characters within the line.
/// The text of the line is shared between every position on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub source_line: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, source_line: Rc<String>) -> Self {
        Position {
            line,
            column,
            source_line,
        }
    }

    pub fn null() -> Self {
        Position::new(1, 1, Rc::new(String::new()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tracks which line of the source the tokenizer is on.
///
/// Only used to annotate positions, one instance per `tokenize` call.
#[derive(Debug, Clone)]
pub struct SourceTracker {
    lines: Vec<Rc<String>>,
    line: usize,
}

impl SourceTracker {
    pub fn new(source: &str) -> Self {
        let lines = source
            .split('\n')
            .map(|line| Rc::new(line.strip_suffix('\r').unwrap_or(line).to_string()))
            .collect();

        SourceTracker { lines, line: 0 }
    }

    /// Moves to the next line, staying on the last one once the text runs out.
    pub fn next_line(&mut self) -> Rc<String> {
        if self.line + 1 < self.lines.len() {
            self.line += 1;
        }
        self.current_line()
    }

    pub fn current_line(&self) -> Rc<String> {
        Rc::clone(&self.lines[self.line])
    }

    /// 1-based number of the current line.
    pub fn line_number(&self) -> u32 {
        self.line as u32 + 1
    }

    pub fn position(&self, column: u32) -> Position {
        Position::new(self.line_number(), column, self.current_line())
    }
}

/// Tokenizes and parses `source` in one go.
pub fn parse_source(source: &str) -> Result<Node, Error> {
    let tokens = tokenize(source)?;
    parse(tokens)
}
