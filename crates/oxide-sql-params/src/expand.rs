//! Expansion of sequence bindings into inline placeholder lists.

use tracing::{debug, trace};

use crate::error::{BindError, Result};
use crate::lexer::{Lexer, Span, Token, TokenKind};
use crate::render::render;
use crate::value::Binding;

/// Replaces each `?` bound to a sequence with a parenthesized list of `?`,
/// one per element, and flattens the bindings to match.
///
/// Each `?` consumes exactly one input binding. A scalar leaves its `?`
/// and value as they are. A sequence of `n` values becomes `(?, ?, ...)`
/// with `n` placeholders, or `()` when empty, and contributes its values in
/// order. Bindings left over after the last `?` are ignored.
///
/// The input must be canonical: only `?` placeholders.
///
/// # Errors
///
/// Returns [`BindError::ExplicitNotAllowed`] or
/// [`BindError::NamedNotAllowed`] for a non-canonical parameter, and
/// [`BindError::PositionalExhausted`] when a `?` has no binding left.
pub fn expand_tokens<'a, V>(
    tokens: impl IntoIterator<Item = Token<'a>>,
    bindings: Vec<Binding<V>>,
) -> Result<(Vec<Token<'a>>, Vec<V>)> {
    let tokens = tokens.into_iter();
    let mut output_tokens = Vec::with_capacity(tokens.size_hint().0);
    let mut output_bindings = Vec::with_capacity(bindings.len());
    let supplied = bindings.len();
    let mut bindings = bindings.into_iter();

    for token in tokens {
        match token.kind {
            TokenKind::Other => output_tokens.push(token),
            TokenKind::Explicit => return Err(BindError::explicit_not_allowed(&token)),
            TokenKind::Named | TokenKind::NamedPython => {
                return Err(BindError::named_not_allowed(&token));
            }
            TokenKind::Implicit => {
                let binding = bindings
                    .next()
                    .ok_or_else(|| BindError::positional_exhausted(&token))?;
                match binding {
                    Binding::Scalar(value) => {
                        output_tokens.push(token);
                        output_bindings.push(value);
                    }
                    Binding::Sequence(values) => {
                        trace!(span = %token.span, elements = values.len(), "expanded sequence");
                        push_parameter_list(&mut output_tokens, values.len(), token.span);
                        output_bindings.extend(values);
                    }
                }
            }
        }
    }

    debug!(
        supplied,
        unused = bindings.len(),
        parameters = output_bindings.len(),
        "expanded query parameters"
    );

    Ok((output_tokens, output_bindings))
}

/// Appends the tokens of `(?, ?, ...)` with `count` placeholders, all
/// attributed to `span`.
fn push_parameter_list(tokens: &mut Vec<Token<'_>>, count: usize, span: Span) {
    tokens.push(Token::other("(", span));
    for i in 0..count {
        if i > 0 {
            tokens.push(Token::other(", ", span));
        }
        tokens.push(Token::implicit(span));
    }
    tokens.push(Token::other(")", span));
}

/// Expands sequence bindings of the `?` placeholders in `query`.
///
/// # Example
///
/// ```
/// use oxide_sql_params::{expand, Binding};
///
/// let (sql, bindings) = expand(
///     "select * from t where x in ? and y = ?",
///     vec![Binding::sequence([1, 2, 3]), Binding::scalar(4)],
/// )
/// .unwrap();
///
/// assert_eq!(sql, "select * from t where x in (?, ?, ?) and y = ?");
/// assert_eq!(bindings, vec![1, 2, 3, 4]);
/// ```
///
/// # Errors
///
/// See [`expand_tokens`].
pub fn expand<V>(query: &str, bindings: Vec<Binding<V>>) -> Result<(String, Vec<V>)> {
    let (tokens, bindings) = expand_tokens(Lexer::new(query), bindings)?;
    Ok((render(&tokens), bindings))
}

/// Like [`expand`], for call sites that treat a binding mistake as a bug.
///
/// # Panics
///
/// Panics with the [`BindError`] message if expansion fails.
#[must_use]
pub fn must_expand<V>(query: &str, bindings: Vec<Binding<V>>) -> (String, Vec<V>) {
    expand(query, bindings).unwrap_or_else(|err| panic!("{err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    #[test]
    fn test_sequence_and_scalar() {
        let (sql, bindings) = expand(
            "select * from t where x in ? and y = ?",
            vec![Binding::sequence(["1", "2", "3"]), Binding::scalar("foo")],
        )
        .unwrap();
        assert_eq!(sql, "select * from t where x in (?, ?, ?) and y = ?");
        assert_eq!(bindings, vec!["1", "2", "3", "foo"]);
    }

    #[test]
    fn test_empty_sequence() {
        let (sql, bindings) =
            expand("select * from t where x in ?", vec![Binding::<i32>::sequence([])]).unwrap();
        assert_eq!(sql, "select * from t where x in ()");
        assert!(bindings.is_empty());
    }

    #[test]
    fn test_single_element_sequence() {
        let (sql, bindings) = expand("x in ?", vec![Binding::sequence([7])]).unwrap();
        assert_eq!(sql, "x in (?)");
        assert_eq!(bindings, vec![7]);
    }

    #[test]
    fn test_scalars_are_untouched() {
        let query = "update t set a = ?, b = ? where c = ?";
        let (sql, bindings) = expand(
            query,
            vec![Binding::scalar(1), Binding::scalar(2), Binding::scalar(3)],
        )
        .unwrap();
        assert_eq!(sql, query);
        assert_eq!(bindings, vec![1, 2, 3]);
    }

    #[test]
    fn test_expanded_tokens_align_with_bindings() {
        let (tokens, bindings) = expand_tokens(
            lex("? ?"),
            vec![Binding::sequence([1, 2]), Binding::sequence([3])],
        )
        .unwrap();
        let placeholders = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Implicit)
            .count();
        assert_eq!(placeholders, bindings.len());
        assert_eq!(render(&tokens), "(?, ?) (?)");
    }

    #[test]
    fn test_expanded_tokens_inherit_span() {
        let (tokens, _) = expand_tokens(lex("x in ?"), vec![Binding::sequence([1, 2])]).unwrap();
        assert!(tokens[1..].iter().all(|t| t.span == Span::new(5, 6)));
    }

    #[test]
    fn test_placeholder_inside_comment_is_not_expanded() {
        let (sql, bindings) =
            expand("/* in ? */ x in ?", vec![Binding::sequence(["a", "b"])]).unwrap();
        assert_eq!(sql, "/* in ? */ x in (?, ?)");
        assert_eq!(bindings, vec!["a", "b"]);
    }

    #[test]
    fn test_leftover_bindings_are_ignored() {
        let (sql, bindings) =
            expand("x = ?", vec![Binding::scalar(1), Binding::sequence([2, 3])]).unwrap();
        assert_eq!(sql, "x = ?");
        assert_eq!(bindings, vec![1]);
    }

    #[test]
    fn test_explicit_not_allowed() {
        let err = expand("x in :1", vec![Binding::scalar(1)]).unwrap_err();
        assert_eq!(
            err,
            BindError::ExplicitNotAllowed {
                text: String::from(":1"),
                span: Span::new(5, 7),
            }
        );
    }

    #[test]
    fn test_named_not_allowed() {
        let err = expand("x in %(ids)s", vec![Binding::scalar(1)]).unwrap_err();
        assert!(matches!(err, BindError::NamedNotAllowed { ref text, .. } if text == "%(ids)s"));
    }

    #[test]
    fn test_exhausted() {
        let err = expand("x in ? and y = ?", vec![Binding::sequence([1, 2])]).unwrap_err();
        assert_eq!(
            err,
            BindError::PositionalExhausted {
                text: String::from("?"),
                span: Span::new(15, 16),
            }
        );
    }

    #[test]
    #[should_panic(expected = "not allowed in expand")]
    fn test_must_expand_panics() {
        let _ = must_expand("@2", vec![Binding::scalar(1)]);
    }
}
