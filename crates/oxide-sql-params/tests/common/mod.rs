#![allow(dead_code)]

use std::collections::HashMap;

use oxide_sql_params::{lex, Binding, Token, TokenKind};

/// Queries that exercise every token form and the edge cases around them.
pub const CORPUS: &[&str] = &[
    "",
    "?",
    "select 1",
    " -- foo\n/*bar*/NONSENSE'baz'\"buzz\"`fizz`?@1$2:wakka%(hah)s",
    "/* a ? b */ select ? ",
    "select * from t where id=? or f=:1 and c=:color limit :limit;",
    "select ':x', \"@y\", `?` -- :z\n, ?",
    "'unterminated ? string",
    "/* unterminated ? comment",
    "/* a **/ ?",
    "x::int = :0 and y = :07 and z = $99999999999999999999999",
    "where name = :prénom and tag = %(étiquette)s",
    "%(not closed s %()s %(1abc)s $name @ : $",
    "-- trailing line comment without newline ?",
    "'it\\'s' \"say \\\"hi\\\"\" `a\\`b` ?",
    "emoji 🦀 = ? and 名前 = :名前",
];

pub fn no_names<V>() -> HashMap<&'static str, Binding<V>> {
    HashMap::new()
}

pub fn scalars<V: Clone>(values: &[V]) -> Vec<Binding<V>> {
    values.iter().cloned().map(Binding::scalar).collect()
}

pub fn count_kind(tokens: &[Token<'_>], kind: TokenKind) -> usize {
    tokens.iter().filter(|t| t.kind == kind).count()
}

pub fn parameter_kinds(query: &str) -> Vec<(TokenKind, &str)> {
    lex(query)
        .into_iter()
        .filter(|t| t.is_parameter())
        .map(|t| (t.kind, t.inside))
        .collect()
}
