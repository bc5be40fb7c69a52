use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, SourceTracker, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Handles a pattern match of `len` bytes at the lexer's current position.
pub type RegexHandler = fn(&mut Lexer, usize) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored, so a match always starts at the cursor.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]*)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^[ \t]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\r?\n").unwrap(), handler: newline_handler },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Sub) },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Mult) },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Div) },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LParen) },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RParen) },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    /// Byte offset of the cursor
    pos: usize,
    /// 1-based character column of the cursor on the current line
    column: u32,
    /// Whether line breaks separate lines or are illegal characters
    multiline: bool,
    tracker: SourceTracker,
}

impl Lexer {
    pub fn new(source: String, multiline: bool) -> Lexer {
        Lexer {
            tokens: vec![],
            tracker: SourceTracker::new(&source),
            source,
            pos: 0,
            column: 1,
            multiline,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.column += Self::width(&self.remainder()[..n]);
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// The character under the cursor. Only valid while `!at_eof()`.
    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn width(text: &str) -> u32 {
        text.chars().count() as u32
    }

    pub fn position(&self) -> Position {
        self.tracker.position(self.column)
    }

    /// Span covering the next `len` bytes.
    pub fn span_of(&self, len: usize) -> Span {
        let width = Self::width(&self.remainder()[..len]);

        Span {
            start: self.position(),
            end: self.tracker.position(self.column + width),
        }
    }

    fn next_line(&mut self) {
        self.column = 1;
        self.tracker.next_line();
    }
}

fn number_handler(lexer: &mut Lexer, len: usize) -> Result<(), Error> {
    let literal = lexer.remainder()[..len].to_string();
    let span = lexer.span_of(len);

    let token = if literal.contains('.') {
        literal.parse::<f64>().ok().map(|value| Token::float(value, span.clone()))
    } else {
        literal.parse::<i64>().ok().map(|value| Token::int(value, span.clone()))
    };

    match token {
        Some(token) => lexer.push(token),
        None => return Err(Error::new(ErrorImpl::NumberParseError { literal }, span.start)),
    }

    lexer.advance_n(len);
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, len: usize) -> Result<(), Error> {
    lexer.advance_n(len);
    Ok(())
}

fn newline_handler(lexer: &mut Lexer, len: usize) -> Result<(), Error> {
    if !lexer.multiline {
        return Err(Error::illegal_character(lexer.at(), lexer.position()));
    }

    lexer.advance_n(len);
    lexer.next_line();
    Ok(())
}

/// Converts source text into tokens, stopping at the first character no pattern accepts.
///
/// Only spaces and tabs are skipped, so a line break is an illegal character.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    run_lexer(Lexer::new(source.to_string(), false))
}

/// Like `tokenize`, but line breaks (`\n` or `\r\n`) separate lines instead of failing.
/// Positions after a break report the later line.
pub fn tokenize_multiline(source: &str) -> Result<Vec<Token>, Error> {
    run_lexer(Lexer::new(source.to_string(), true))
}

fn run_lexer(mut lex: Lexer) -> Result<Vec<Token>, Error> {
    while !lex.at_eof() {
        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|found| (pattern.handler, found.end()))
        });

        match matched {
            Some((handler, len)) => handler(&mut lex, len)?,
            None => return Err(Error::illegal_character(lex.at(), lex.position())),
        }
    }

    Ok(lex.tokens)
}
