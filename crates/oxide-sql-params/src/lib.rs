//! # oxide-sql-params
//!
//! Rewrites SQL written with rich parameter syntax into plain `?`
//! placeholders and a flat list of values, for drivers that only
//! understand positional parameters.
//!
//! This crate provides:
//! - A lexer that tells parameters apart from lookalikes in comments and
//!   quoted literals
//! - Resolution of named (`:name`, `@name`, `%(name)s`) and explicit
//!   positional (`$1`, `@1`, `:1`) references into `?`
//! - Expansion of list bindings into `(?, ?, ...)`
//!
//! ## Resolving Parameters
//!
//! ```rust
//! use oxide_sql_params::{Binding, Params, SqlValue};
//!
//! let (sql, bindings) = Params::new()
//!     .named("color", "purple")
//!     .positional(1337)
//!     .resolve("select * from llamas where id = ? or friend = :1 and color = :color")
//!     .unwrap();
//!
//! assert_eq!(sql, "select * from llamas where id = ? or friend = ? and color = ?");
//! assert_eq!(bindings[2], Binding::Scalar(SqlValue::Text(String::from("purple"))));
//! ```
//!
//! ## Expanding Lists
//!
//! ```rust
//! use oxide_sql_params::{expand, Binding};
//!
//! let (sql, values) = expand(
//!     "select * from t where x in ?",
//!     vec![Binding::sequence(["a", "b", "c"])],
//! )
//! .unwrap();
//!
//! assert_eq!(sql, "select * from t where x in (?, ?, ?)");
//! assert_eq!(values, vec!["a", "b", "c"]);
//! ```

pub mod error;
pub mod expand;
pub mod lexer;
pub mod params;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod value;

pub use error::{BindError, Result};
pub use expand::{expand, expand_tokens, must_expand};
pub use lexer::{lex, Lexer, Span, Token, TokenKind};
pub use params::Params;
pub use pipeline::{must_resolve_and_expand, resolve_and_expand};
pub use render::render;
pub use resolve::{must_resolve, resolve, resolve_tokens};
pub use value::{Binding, SqlValue, ToSqlValue};
