use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::Position;

/// A lexical or syntactic failure.
///
/// Returned as the `Err` side of `tokenize` and `parse`. The first failure ends the
/// phase, so at most one of these is ever produced per call.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn illegal_character(character: char, position: Position) -> Self {
        Error::new(ErrorImpl::IllegalCharacter { character }, position)
    }

    pub fn invalid_syntax(detail: impl Into<String>, position: Position) -> Self {
        Error::new(
            ErrorImpl::InvalidSyntax {
                detail: detail.into(),
                line: position.line,
            },
            position,
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    /// Text of the line the failure happened on.
    pub fn source_line(&self) -> Rc<String> {
        Rc::clone(&self.position.source_line)
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => ErrorKind::IllegalCharacter,
            ErrorImpl::InvalidSyntax { .. } => ErrorKind::InvalidSyntax,
            ErrorImpl::NumberParseError { .. } => ErrorKind::NumberParseError,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::InvalidSyntax { .. } => "InvalidSyntax",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IllegalCharacter,
    InvalidSyntax,
    NumberParseError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unsupported character '{character}'")]
    IllegalCharacter { character: char },
    #[error("Cannot understand line #{line}. Perhaps a typo? {detail}")]
    InvalidSyntax { detail: String, line: u32 },
    #[error("Invalid number '{literal}'. Is it above the integer limit?")]
    NumberParseError { literal: String },
}
