//! Formatting command results.

use std::fmt::Write;

use clap::ValueEnum;
use oxide_sql_params::{Binding, SqlValue, Token};
use serde::Serialize;

use crate::error::Result;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The query followed by one binding per line.
    Text,
    /// A JSON object with `query` and `bindings` members.
    Json,
}

#[derive(Serialize)]
struct Rewrite<'a, B> {
    query: &'a str,
    bindings: &'a [B],
}

/// Formats a resolved query whose bindings may still hold lists.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
pub fn format_resolved(format: Format, query: &str, bindings: &[Binding]) -> Result<String> {
    match format {
        Format::Json => json(query, bindings),
        Format::Text => Ok(text(query, bindings.iter().map(binding_literal))),
    }
}

/// Formats an expanded query with one value per placeholder.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
pub fn format_expanded(format: Format, query: &str, values: &[SqlValue]) -> Result<String> {
    match format {
        Format::Json => json(query, values),
        Format::Text => Ok(text(query, values.iter().map(SqlValue::to_sql_inline))),
    }
}

/// Formats a token stream, one token per line in text form.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
pub fn format_tokens(format: Format, tokens: &[Token<'_>]) -> Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(tokens)?),
        Format::Text => {
            let mut output = String::new();
            for token in tokens {
                let _ = writeln!(
                    output,
                    "{:<12} {:<10} {:?}",
                    token.kind.as_str(),
                    token.span.to_string(),
                    token.text
                );
            }
            Ok(output)
        }
    }
}

fn json<B: Serialize>(query: &str, bindings: &[B]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Rewrite { query, bindings })?)
}

fn text(query: &str, literals: impl Iterator<Item = String>) -> String {
    let mut output = format!("{query}\n");
    for (i, literal) in literals.enumerate() {
        let _ = writeln!(output, "-- {}: {literal}", i + 1);
    }
    output
}

fn binding_literal(binding: &Binding) -> String {
    match binding {
        Binding::Scalar(value) => value.to_sql_inline(),
        Binding::Sequence(values) => {
            let items: Vec<_> = values.iter().map(SqlValue::to_sql_inline).collect();
            format!("({})", items.join(", "))
        }
    }
}
