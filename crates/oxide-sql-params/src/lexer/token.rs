//! Token types for the parameter lexer.

use super::Span;

/// The parameter role of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TokenKind {
    /// Plain query text, comments and quoted literals.
    Other,
    /// Unpositioned placeholder: `?`.
    Implicit,
    /// One-based positional reference: `$2`, `@1`, `:3`.
    Explicit,
    /// ISO/MySQL-style named reference: `:name`, `@name`.
    Named,
    /// Python-style named reference: `%(name)s`.
    NamedPython,
}

impl TokenKind {
    /// Returns true for every kind except [`TokenKind::Other`].
    #[must_use]
    pub const fn is_parameter(self) -> bool {
        !matches!(self, Self::Other)
    }

    /// Returns true for the kinds resolved through the named bindings map.
    #[must_use]
    pub const fn is_named(self) -> bool {
        matches!(self, Self::Named | Self::NamedPython)
    }

    /// Returns a short lowercase name for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Other => "other",
            Self::Implicit => "implicit",
            Self::Explicit => "explicit",
            Self::Named => "named",
            Self::NamedPython => "named_python",
        }
    }
}

/// A lexical span of a query.
///
/// `text` is the exact substring the token occupies, so rendering the
/// tokens of a query in order reproduces it. `inside` is the part that
/// matters for binding: the digits of an explicit reference, the
/// identifier of a named reference, `?` for an implicit placeholder and
/// the empty string for [`TokenKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'a> {
    /// The kind of token.
    pub kind: TokenKind,
    /// Full extent of the token, e.g. `:23`.
    pub text: &'a str,
    /// Interpreted part of the token, e.g. `23`.
    pub inside: &'a str,
    /// The location in the query this token came from.
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'a str, inside: &'a str, span: Span) -> Self {
        Self {
            kind,
            text,
            inside,
            span,
        }
    }

    /// Creates a plain text token.
    #[must_use]
    pub const fn other(text: &'a str, span: Span) -> Self {
        Self::new(TokenKind::Other, text, "", span)
    }

    /// Creates a canonical `?` placeholder attributed to `span`.
    #[must_use]
    pub const fn implicit(span: Span) -> Self {
        Self::new(TokenKind::Implicit, "?", "?", span)
    }

    /// Returns true if this token is a parameter of any style.
    #[must_use]
    pub const fn is_parameter(&self) -> bool {
        self.kind.is_parameter()
    }
}
