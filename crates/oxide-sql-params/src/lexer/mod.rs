//! SQL parameter lexer.
//!
//! This module splits query text into tokens that are either parameter
//! references or opaque text. Comments and quoted literals are consumed
//! whole, so parameter lookalikes inside them stay plain text.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Token, TokenKind};
pub use tokenizer::{lex, Lexer};
