//! Resolution of named and explicit parameters to implicit placeholders.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::num::IntErrorKind;

use tracing::{debug, trace};

use crate::error::{BindError, Result};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::render::render;
use crate::value::Binding;

/// Rewrites every parameter token into a `?` paired with its binding.
///
/// - Named references (`:name`, `@name`, `%(name)s`) are looked up in
///   `named`.
/// - Explicit references (`$1`, `@2`, `:3`) index `positionals`, one-based.
///   They may repeat and never advance the implicit cursor.
/// - Implicit placeholders (`?`) consume `positionals` in order.
///
/// The returned bindings line up one-to-one with the `?` tokens in the
/// returned token stream. Bindings that no parameter refers to are
/// ignored.
///
/// # Errors
///
/// Returns the first [`BindError`] encountered; no partial output is
/// produced.
pub fn resolve_tokens<'a, K, V, S>(
    tokens: impl IntoIterator<Item = Token<'a>>,
    named: &HashMap<K, Binding<V>, S>,
    positionals: &[Binding<V>],
) -> Result<(Vec<Token<'a>>, Vec<Binding<V>>)>
where
    K: Borrow<str> + Hash + Eq,
    V: Clone,
    S: BuildHasher,
{
    let tokens = tokens.into_iter();
    let mut output_tokens = Vec::with_capacity(tokens.size_hint().0);
    let mut output_bindings = Vec::new();
    let mut next_positional = 0;

    for token in tokens {
        let binding = match token.kind {
            TokenKind::Other => {
                output_tokens.push(token);
                continue;
            }
            TokenKind::Named | TokenKind::NamedPython => named
                .get(token.inside)
                .ok_or_else(|| BindError::unbound_name(&token))?,
            TokenKind::Explicit => explicit_binding(&token, positionals)?,
            TokenKind::Implicit => {
                let binding = positionals
                    .get(next_positional)
                    .ok_or_else(|| BindError::positional_exhausted(&token))?;
                next_positional += 1;
                binding
            }
        };

        trace!(parameter = token.text, kind = token.kind.as_str(), "resolved parameter");
        output_tokens.push(Token::implicit(token.span));
        output_bindings.push(binding.clone());
    }

    debug!(
        parameters = output_bindings.len(),
        positionals = positionals.len(),
        implicit_consumed = next_positional,
        "resolved query parameters"
    );

    Ok((output_tokens, output_bindings))
}

/// Looks up the positional binding an explicit reference points at.
fn explicit_binding<'b, V>(
    token: &Token<'_>,
    positionals: &'b [Binding<V>],
) -> Result<&'b Binding<V>> {
    let index = token.inside.parse::<usize>().map_err(|err| match err.kind() {
        // Digits too long for usize cannot index anything supplied.
        IntErrorKind::PosOverflow => BindError::positional_out_of_range(token, positionals.len()),
        _ => BindError::invalid_explicit_index(token),
    })?;

    let index = index
        .checked_sub(1)
        .ok_or_else(|| BindError::invalid_explicit_index(token))?;

    positionals
        .get(index)
        .ok_or_else(|| BindError::positional_out_of_range(token, positionals.len()))
}

/// Replaces all named and explicit parameters in `query` with `?`.
///
/// Returns the rewritten query and one binding per `?`, in order. See
/// [`resolve_tokens`] for the lookup rules.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use oxide_sql_params::{resolve, Binding};
///
/// let named = HashMap::from([("color", Binding::scalar("purple"))]);
/// let (sql, bindings) = resolve(
///     "select * from t where id = ? or f = :1 and c = :color",
///     &named,
///     &[Binding::scalar("1337")],
/// )
/// .unwrap();
///
/// assert_eq!(sql, "select * from t where id = ? or f = ? and c = ?");
/// assert_eq!(bindings.len(), 3);
/// ```
///
/// # Errors
///
/// Returns the first [`BindError`] encountered.
pub fn resolve<K, V, S>(
    query: &str,
    named: &HashMap<K, Binding<V>, S>,
    positionals: &[Binding<V>],
) -> Result<(String, Vec<Binding<V>>)>
where
    K: Borrow<str> + Hash + Eq,
    V: Clone,
    S: BuildHasher,
{
    let (tokens, bindings) = resolve_tokens(Lexer::new(query), named, positionals)?;
    Ok((render(&tokens), bindings))
}

/// Like [`resolve`], for call sites that treat a binding mistake as a bug.
///
/// # Panics
///
/// Panics with the [`BindError`] message if resolution fails.
#[must_use]
pub fn must_resolve<K, V, S>(
    query: &str,
    named: &HashMap<K, Binding<V>, S>,
    positionals: &[Binding<V>],
) -> (String, Vec<Binding<V>>)
where
    K: Borrow<str> + Hash + Eq,
    V: Clone,
    S: BuildHasher,
{
    resolve(query, named, positionals).unwrap_or_else(|err| panic!("{err}"))
}
