//! Error types for parameter resolution and expansion.

use crate::lexer::{Span, Token};

/// Errors raised while binding parameters.
///
/// Every variant carries the literal text of the offending token and where
/// it was found in the query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// A named parameter has no entry in the named bindings.
    #[error("named parameter {text:?} at {span} does not have a corresponding binding")]
    UnboundName {
        /// The parameter as written, e.g. `:color`.
        text: String,
        /// Where the parameter appears.
        span: Span,
    },

    /// An explicit positional parameter used index zero.
    #[error("invalid explicit positional parameter {text:?} at {span}: index is one-based")]
    InvalidExplicitIndex {
        /// The parameter as written, e.g. `:0`.
        text: String,
        /// Where the parameter appears.
        span: Span,
    },

    /// An explicit positional parameter refers past the positional bindings.
    #[error(
        "explicit positional parameter {text:?} at {span} does not have a corresponding \
         positional binding ({available} supplied)"
    )]
    PositionalOutOfRange {
        /// The parameter as written, e.g. `$3`.
        text: String,
        /// Where the parameter appears.
        span: Span,
        /// Number of positional bindings supplied.
        available: usize,
    },

    /// An implicit placeholder has no binding left to consume.
    #[error(
        "implicit positional parameter {text:?} at {span} does not have a corresponding \
         positional binding"
    )]
    PositionalExhausted {
        /// The parameter as written.
        text: String,
        /// Where the parameter appears.
        span: Span,
    },

    /// An explicit positional parameter reached the expansion pass.
    #[error("explicit positional parameters are not allowed in expand: {text:?} at {span}")]
    ExplicitNotAllowed {
        /// The parameter as written.
        text: String,
        /// Where the parameter appears.
        span: Span,
    },

    /// A named parameter reached the expansion pass.
    #[error("named parameters are not allowed in expand: {text:?} at {span}")]
    NamedNotAllowed {
        /// The parameter as written.
        text: String,
        /// Where the parameter appears.
        span: Span,
    },
}

impl BindError {
    /// Returns the text of the offending token.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::UnboundName { text, .. }
            | Self::InvalidExplicitIndex { text, .. }
            | Self::PositionalOutOfRange { text, .. }
            | Self::PositionalExhausted { text, .. }
            | Self::ExplicitNotAllowed { text, .. }
            | Self::NamedNotAllowed { text, .. } => text,
        }
    }

    /// Returns the location of the offending token.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnboundName { span, .. }
            | Self::InvalidExplicitIndex { span, .. }
            | Self::PositionalOutOfRange { span, .. }
            | Self::PositionalExhausted { span, .. }
            | Self::ExplicitNotAllowed { span, .. }
            | Self::NamedNotAllowed { span, .. } => *span,
        }
    }

    pub(crate) fn unbound_name(token: &Token<'_>) -> Self {
        Self::UnboundName {
            text: token.text.to_owned(),
            span: token.span,
        }
    }

    pub(crate) fn invalid_explicit_index(token: &Token<'_>) -> Self {
        Self::InvalidExplicitIndex {
            text: token.text.to_owned(),
            span: token.span,
        }
    }

    pub(crate) fn positional_out_of_range(token: &Token<'_>, available: usize) -> Self {
        Self::PositionalOutOfRange {
            text: token.text.to_owned(),
            span: token.span,
            available,
        }
    }

    pub(crate) fn positional_exhausted(token: &Token<'_>) -> Self {
        Self::PositionalExhausted {
            text: token.text.to_owned(),
            span: token.span,
        }
    }

    pub(crate) fn explicit_not_allowed(token: &Token<'_>) -> Self {
        Self::ExplicitNotAllowed {
            text: token.text.to_owned(),
            span: token.span,
        }
    }

    pub(crate) fn named_not_allowed(token: &Token<'_>) -> Self {
        Self::NamedNotAllowed {
            text: token.text.to_owned(),
            span: token.span,
        }
    }
}

/// Result type alias for binding operations.
pub type Result<T> = std::result::Result<T, BindError>;
