//! Parameter set builder.
//!
//! # Example
//!
//! ```rust
//! use oxide_sql_params::{Params, SqlValue};
//!
//! let (sql, values) = Params::new()
//!     .named_list("types", [0, 1])
//!     .named("user_id", "steve")
//!     .resolve_and_expand("select v from tags where type in @types and userid = :user_id")
//!     .unwrap();
//!
//! assert_eq!(sql, "select v from tags where type in (?, ?) and userid = ?");
//! assert_eq!(
//!     values,
//!     vec![
//!         SqlValue::Int(0),
//!         SqlValue::Int(1),
//!         SqlValue::Text(String::from("steve")),
//!     ]
//! );
//! ```

use std::collections::HashMap;

use crate::error::Result;
use crate::expand::expand;
use crate::pipeline::resolve_and_expand;
use crate::resolve::resolve;
use crate::value::{Binding, SqlValue, ToSqlValue};

/// Named and positional bindings for one query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    named: HashMap<String, Binding>,
    positionals: Vec<Binding>,
}

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to a single value. A later binding of the same name
    /// replaces the earlier one.
    #[must_use]
    pub fn named(self, name: impl Into<String>, value: impl ToSqlValue) -> Self {
        self.named_binding(name, Binding::Scalar(value.to_sql_value()))
    }

    /// Binds `name` to a list of values.
    #[must_use]
    pub fn named_list<T: ToSqlValue>(
        self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        self.named_binding(name, sequence(values))
    }

    /// Binds `name` to a prepared binding.
    #[must_use]
    pub fn named_binding(mut self, name: impl Into<String>, binding: Binding) -> Self {
        self.named.insert(name.into(), binding);
        self
    }

    /// Appends a single positional value.
    #[must_use]
    pub fn positional(self, value: impl ToSqlValue) -> Self {
        self.positional_binding(Binding::Scalar(value.to_sql_value()))
    }

    /// Appends a positional list of values.
    #[must_use]
    pub fn positional_list<T: ToSqlValue>(self, values: impl IntoIterator<Item = T>) -> Self {
        self.positional_binding(sequence(values))
    }

    /// Appends a prepared positional binding.
    #[must_use]
    pub fn positional_binding(mut self, binding: Binding) -> Self {
        self.positionals.push(binding);
        self
    }

    /// Returns the named bindings.
    #[must_use]
    pub const fn named_bindings(&self) -> &HashMap<String, Binding> {
        &self.named
    }

    /// Returns the positional bindings, in order.
    #[must_use]
    pub fn positionals(&self) -> &[Binding] {
        &self.positionals
    }

    /// Resolves `query` against these bindings.
    ///
    /// # Errors
    ///
    /// See [`resolve`](crate::resolve()).
    pub fn resolve(&self, query: &str) -> Result<(String, Vec<Binding>)> {
        resolve(query, &self.named, &self.positionals)
    }

    /// Expands the `?` placeholders of `query` against the positional
    /// bindings. Named bindings are not consulted.
    ///
    /// # Errors
    ///
    /// See [`expand`](crate::expand()).
    pub fn expand(&self, query: &str) -> Result<(String, Vec<SqlValue>)> {
        expand(query, self.positionals.clone())
    }

    /// Resolves and then expands `query` against these bindings.
    ///
    /// # Errors
    ///
    /// See [`resolve_and_expand`](crate::resolve_and_expand()).
    pub fn resolve_and_expand(&self, query: &str) -> Result<(String, Vec<SqlValue>)> {
        resolve_and_expand(query, &self.named, &self.positionals)
    }
}

fn sequence<T: ToSqlValue>(values: impl IntoIterator<Item = T>) -> Binding {
    Binding::sequence(values.into_iter().map(ToSqlValue::to_sql_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BindError;

    #[test]
    fn test_resolve_mixed_styles() {
        let (sql, bindings) = Params::new()
            .named("color", "purple")
            .named("limit", 10)
            .positional(1337)
            .resolve("select * from t where id=? or f=:1 and c=:color limit :limit;")
            .unwrap();

        assert_eq!(sql, "select * from t where id=? or f=? and c=? limit ?;");
        assert_eq!(
            bindings,
            vec![
                Binding::Scalar(SqlValue::Int(1337)),
                Binding::Scalar(SqlValue::Int(1337)),
                Binding::Scalar(SqlValue::Text(String::from("purple"))),
                Binding::Scalar(SqlValue::Int(10)),
            ]
        );
    }

    #[test]
    fn test_expand_uses_positionals() {
        let (sql, values) = Params::new()
            .positional_list(["a", "b"])
            .positional(None::<i32>)
            .expand("x in ? and y is ?")
            .unwrap();
        assert_eq!(sql, "x in (?, ?) and y is ?");
        assert_eq!(
            values,
            vec![
                SqlValue::Text(String::from("a")),
                SqlValue::Text(String::from("b")),
                SqlValue::Null,
            ]
        );
    }

    #[test]
    fn test_later_named_binding_replaces_earlier() {
        let params = Params::new().named("a", 1).named("a", 2);
        assert_eq!(
            params.named_bindings().get("a"),
            Some(&Binding::Scalar(SqlValue::Int(2)))
        );
    }

    #[test]
    fn test_positionals_keep_order() {
        let params = Params::new()
            .positional(1)
            .positional_binding(Binding::Sequence(vec![]))
            .positional(true);
        assert_eq!(params.positionals().len(), 3);
        assert!(params.positionals()[1].is_sequence());
    }

    #[test]
    fn test_unbound_name_error() {
        let err = Params::new().resolve_and_expand("where a = @a").unwrap_err();
        assert!(matches!(err, BindError::UnboundName { .. }));
    }
}
