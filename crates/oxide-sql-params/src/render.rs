//! Token stream rendering.

use crate::lexer::Token;

/// Concatenates the text of `tokens` in order. The inverse of
/// [`lex`](crate::lex()).
#[must_use]
pub fn render(tokens: &[Token<'_>]) -> String {
    let len = tokens.iter().map(|token| token.text.len()).sum();
    let mut output = String::with_capacity(len);
    for token in tokens {
        output.push_str(token.text);
    }
    output
}
