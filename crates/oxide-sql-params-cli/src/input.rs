//! Reading queries and bindings.
//!
//! Bindings are JSON. A bindings file holds an object with optional
//! `named` (object) and `positional` (array) members; the same shapes can
//! be passed inline. Scalars map to [`SqlValue`]s and arrays of scalars to
//! sequence bindings.

use std::fs;
use std::io::Read;
use std::path::Path;

use oxide_sql_params::{Binding, Params, SqlValue};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{CliError, Result};

/// Contents of a bindings file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BindingsFile {
    #[serde(default)]
    named: Map<String, Value>,
    #[serde(default)]
    positional: Vec<Value>,
}

/// Where a command's bindings come from.
#[derive(Debug, Default, Clone)]
pub struct BindingSources<'a> {
    /// Path to a bindings file.
    pub file: Option<&'a Path>,
    /// Inline JSON object of named bindings.
    pub named: Option<&'a str>,
    /// Inline JSON array of positional bindings.
    pub positional: Option<&'a str>,
}

/// Returns the query text from `inline`, else `file`, else `stdin`.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub fn read_query(inline: Option<&str>, file: Option<&Path>, stdin: impl Read) -> Result<String> {
    if let Some(query) = inline {
        return Ok(query.to_owned());
    }
    if let Some(path) = file {
        return Ok(fs::read_to_string(path)?);
    }
    Ok(std::io::read_to_string(stdin)?)
}

/// Builds the parameter set described by `sources`.
///
/// The file is applied first. Inline named bindings then replace file
/// entries of the same name, and inline positional bindings are appended
/// after the file's.
///
/// # Errors
///
/// Returns an error if a source cannot be read or parsed, or holds a value
/// with no binding equivalent.
pub fn load_params(sources: &BindingSources<'_>) -> Result<Params> {
    let mut params = Params::new();

    if let Some(path) = sources.file {
        let text = fs::read_to_string(path).map_err(|source| CliError::BindingsFile {
            path: path.to_path_buf(),
            source,
        })?;
        let file: BindingsFile = serde_json::from_str(&text)?;
        params = add_named(params, file.named)?;
        params = add_positional(params, file.positional)?;
    }

    if let Some(json) = sources.named {
        params = add_named(params, serde_json::from_str(json)?)?;
    }

    if let Some(json) = sources.positional {
        params = add_positional(params, serde_json::from_str(json)?)?;
    }

    debug!(
        named = params.named_bindings().len(),
        positional = params.positionals().len(),
        "loaded bindings"
    );

    Ok(params)
}

fn add_named(mut params: Params, named: Map<String, Value>) -> Result<Params> {
    for (name, value) in named {
        let binding = binding_from_json(&name, value)?;
        params = params.named_binding(name, binding);
    }
    Ok(params)
}

fn add_positional(mut params: Params, positional: Vec<Value>) -> Result<Params> {
    let offset = params.positionals().len();
    for (i, value) in positional.into_iter().enumerate() {
        let binding = binding_from_json(&format!("#{}", offset + i + 1), value)?;
        params = params.positional_binding(binding);
    }
    Ok(params)
}

/// Converts a JSON value into a binding. `name` is used in error messages.
///
/// # Errors
///
/// Returns [`CliError::InvalidBinding`] for objects, nested arrays and
/// numbers outside the range of `i64` and `f64`.
pub fn binding_from_json(name: &str, value: Value) -> Result<Binding> {
    match value {
        Value::Array(values) => values
            .into_iter()
            .map(|value| match value {
                Value::Array(_) => Err(invalid(name, "nested arrays are not supported")),
                value => scalar_from_json(name, value),
            })
            .collect::<Result<Vec<_>>>()
            .map(Binding::Sequence),
        value => scalar_from_json(name, value).map(Binding::Scalar),
    }
}

fn scalar_from_json(name: &str, value: Value) -> Result<SqlValue> {
    match value {
        Value::Null => Ok(SqlValue::Null),
        Value::Bool(b) => Ok(SqlValue::Bool(b)),
        Value::Number(n) => n
            .as_i64()
            .map(SqlValue::Int)
            .or_else(|| n.as_f64().map(SqlValue::Float))
            .ok_or_else(|| invalid(name, "number is out of range")),
        Value::String(s) => Ok(SqlValue::Text(s)),
        Value::Object(_) => Err(invalid(name, "objects are not supported")),
        Value::Array(_) => Err(invalid(name, "arrays are only supported at the top level")),
    }
}

fn invalid(name: &str, reason: &'static str) -> CliError {
    CliError::InvalidBinding {
        name: name.to_owned(),
        reason,
    }
}
