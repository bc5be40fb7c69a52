//! Error types for the tokenizer and parser.
//!
//! Every failure is a value carrying:
//!
//! - The kind of failure and its message
//! - The line and column it happened at
//! - The text of the offending line, for display
//!
//! Rendering and deciding whether to stop is left to the caller.

pub mod errors;
