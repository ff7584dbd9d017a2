//! Resolution followed by expansion over a single lexing pass.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::error::Result;
use crate::expand::expand_tokens;
use crate::lexer::Lexer;
use crate::render::render;
use crate::resolve::resolve_tokens;
use crate::value::Binding;

/// Runs [`resolve`](crate::resolve()) and then [`expand`](crate::expand()),
/// lexing `query` only once.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use oxide_sql_params::{resolve_and_expand, Binding};
///
/// let named = HashMap::from([
///     ("types", Binding::sequence(["gender", "orientation"])),
///     ("userID", Binding::scalar("steve")),
/// ]);
/// let (sql, bindings) = resolve_and_expand(
///     "select value from tags where type in @types and userid = @userID",
///     &named,
///     &[],
/// )
/// .unwrap();
///
/// assert_eq!(sql, "select value from tags where type in (?, ?) and userid = ?");
/// assert_eq!(bindings, vec!["gender", "orientation", "steve"]);
/// ```
///
/// # Errors
///
/// Returns the first [`BindError`](crate::BindError) from either pass.
/// Expansion does not run if resolution fails.
pub fn resolve_and_expand<K, V, S>(
    query: &str,
    named: &HashMap<K, Binding<V>, S>,
    positionals: &[Binding<V>],
) -> Result<(String, Vec<V>)>
where
    K: Borrow<str> + Hash + Eq,
    V: Clone,
    S: BuildHasher,
{
    let (tokens, bindings) = resolve_tokens(Lexer::new(query), named, positionals)?;
    let (tokens, bindings) = expand_tokens(tokens, bindings)?;
    Ok((render(&tokens), bindings))
}

/// Like [`resolve_and_expand`], for call sites that treat a binding
/// mistake as a bug.
///
/// # Panics
///
/// Panics with the [`BindError`](crate::BindError) message if either pass
/// fails.
#[must_use]
pub fn must_resolve_and_expand<K, V, S>(
    query: &str,
    named: &HashMap<K, Binding<V>, S>,
    positionals: &[Binding<V>],
) -> (String, Vec<V>)
where
    K: Borrow<str> + Hash + Eq,
    V: Clone,
    S: BuildHasher,
{
    resolve_and_expand(query, named, positionals).unwrap_or_else(|err| panic!("{err}"))
}
