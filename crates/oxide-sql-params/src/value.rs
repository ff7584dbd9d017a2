//! Binding values.
//!
//! A [`Binding`] is what a caller supplies for one parameter: either a
//! single value or a sequence of values to be expanded into an inline
//! placeholder list. [`SqlValue`] is the value type used by
//! [`Params`](crate::Params); the rewrite passes accept any value type.

/// A SQL value that can be used as a parameter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Binary blob value.
    Blob(Vec<u8>),
}

impl SqlValue {
    /// Returns the SQL literal for this value, for display only.
    ///
    /// **Warning**: Never splice this into a query; bind the value instead.
    #[must_use]
    pub fn to_sql_inline(&self) -> String {
        match self {
            Self::Null => String::from("NULL"),
            Self::Bool(b) => {
                if *b {
                    String::from("TRUE")
                } else {
                    String::from("FALSE")
                }
            }
            Self::Int(n) => format!("{n}"),
            Self::Float(f) => format!("{f}"),
            Self::Text(s) => {
                // Escape single quotes by doubling them
                let escaped = s.replace('\'', "''");
                format!("'{escaped}'")
            }
            Self::Blob(b) => {
                let hex: String = b.iter().map(|byte| format!("{byte:02X}")).collect();
                format!("X'{hex}'")
            }
        }
    }
}

/// Trait for types that can be converted to SQL values.
pub trait ToSqlValue {
    /// Converts the value to a `SqlValue`.
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Bool(self)
    }
}

impl ToSqlValue for i64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(self)
    }
}

impl ToSqlValue for i32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for i16 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for i8 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for u32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for u16 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for u8 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(self)
    }
}

impl ToSqlValue for f32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(f64::from(self))
    }
}

impl ToSqlValue for String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self)
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(String::from(self))
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        match self {
            Some(v) => v.to_sql_value(),
            None => SqlValue::Null,
        }
    }
}

impl ToSqlValue for Vec<u8> {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self)
    }
}

impl ToSqlValue for &[u8] {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self.to_vec())
    }
}

/// A value bound to one parameter.
///
/// Whether a binding is a sequence is decided by the caller when it is
/// built. Only the expansion pass looks at the distinction; resolution
/// moves bindings around without inspecting them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Binding<V = SqlValue> {
    /// A single value, bound to a single `?`.
    Scalar(V),
    /// An ordered list of values, expanded to `(?, ?, ...)`.
    Sequence(Vec<V>),
}

impl<V> Binding<V> {
    /// Creates a scalar binding.
    #[must_use]
    pub const fn scalar(value: V) -> Self {
        Self::Scalar(value)
    }

    /// Creates a sequence binding from the values of `values`, in order.
    #[must_use]
    pub fn sequence(values: impl IntoIterator<Item = V>) -> Self {
        Self::Sequence(values.into_iter().collect())
    }

    /// Returns true if this binding is a sequence.
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns the value of a scalar binding.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&V> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Sequence(_) => None,
        }
    }

    /// Returns the elements of a sequence binding.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[V]> {
        match self {
            Self::Scalar(_) => None,
            Self::Sequence(values) => Some(values),
        }
    }

    /// Returns the values this binding contributes after expansion.
    #[must_use]
    pub fn into_values(self) -> Vec<V> {
        match self {
            Self::Scalar(value) => vec![value],
            Self::Sequence(values) => values,
        }
    }
}

impl From<SqlValue> for Binding<SqlValue> {
    fn from(value: SqlValue) -> Self {
        Self::Scalar(value)
    }
}
