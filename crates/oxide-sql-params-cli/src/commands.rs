//! Command implementations.
//!
//! Each command takes the query and its bindings and returns the text to
//! print, so the binary only deals with argument parsing and I/O.

use oxide_sql_params::{lex, Params};
use tracing::{info, warn};

use crate::error::Result;
use crate::output::{format_expanded, format_resolved, format_tokens, Format};

/// Lists the tokens of `query`.
///
/// # Errors
///
/// Returns an error if the output cannot be encoded.
pub fn lex_query(query: &str, format: Format) -> Result<String> {
    let tokens = lex(query);
    info!(tokens = tokens.len(), "lexed query");
    format_tokens(format, &tokens)
}

/// Resolves named and explicit parameters to `?`.
///
/// # Errors
///
/// Returns an error if a parameter cannot be bound.
pub fn resolve_query(query: &str, params: &Params, format: Format) -> Result<String> {
    let (sql, bindings) = params.resolve(query)?;
    info!(bindings = bindings.len(), "resolved query");
    format_resolved(format, &sql, &bindings)
}

/// Expands list bindings of `?` placeholders.
///
/// # Errors
///
/// Returns an error if a placeholder cannot be bound.
pub fn expand_query(query: &str, params: &Params, format: Format) -> Result<String> {
    if !params.named_bindings().is_empty() {
        warn!(
            named = params.named_bindings().len(),
            "named bindings are ignored by expand"
        );
    }
    let (sql, values) = params.expand(query)?;
    info!(bindings = values.len(), "expanded query");
    format_expanded(format, &sql, &values)
}

/// Resolves and then expands parameters.
///
/// # Errors
///
/// Returns an error if a parameter cannot be bound.
pub fn resolve_expand_query(query: &str, params: &Params, format: Format) -> Result<String> {
    let (sql, values) = params.resolve_and_expand(query)?;
    info!(bindings = values.len(), "resolved and expanded query");
    format_expanded(format, &sql, &values)
}
