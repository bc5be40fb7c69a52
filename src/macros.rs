//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a payload-free Token
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for single-character operators

/// Creates a Token without a literal payload.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Plus, span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $span:expr) => {
        $crate::lexer::tokens::Token::new($kind, $span)
    };
}

/// Creates a lexer handler that pushes one token of the given kind and
/// advances past the matched text.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, len: usize| -> Result<(), Error> {
            let span = lexer.span_of(len);
            lexer.push(MK_TOKEN!($kind, span));
            lexer.advance_n(len);
            Ok(())
        }
    };
}
