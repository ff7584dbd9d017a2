//! # oxide-sql-params-cli
//!
//! Command-line front-end for `oxide-sql-params`: lexes queries and
//! rewrites their parameters using bindings given as JSON.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, Result};
pub use output::Format;
