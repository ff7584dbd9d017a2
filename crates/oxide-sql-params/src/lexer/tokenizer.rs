//! Parameter tokenizer implementation.

use std::sync::LazyLock;

use regex::{CaptureMatches, Captures, Regex};

use super::{Span, Token, TokenKind};

/// Zero, or digits without a leading zero.
const NATURAL: &str = "0|[1-9][0-9]*";

/// A letter or underscore followed by letters, digits or underscores.
const IDENTIFIER: &str = r"(?:\pL|_)(?:\pL|\p{Nd}|_)*";

/// Capture group names and the token kinds they produce.
const PARAMETER_GROUPS: [(&str, TokenKind); 4] = [
    ("implicit", TokenKind::Implicit),
    ("explicit", TokenKind::Explicit),
    ("named", TokenKind::Named),
    ("python", TokenKind::NamedPython),
];

/// The combined token pattern.
///
/// Alternatives are tried in order at each position, so comments and
/// quoted literals swallow anything inside them that looks like a
/// parameter. Only the parameter alternatives have named groups; a match
/// without one is plain text.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = [
        // -- line comment, including its newline
        String::from(r"--[^\n]*(?:\n|$)"),
        // /* block comment */
        String::from(r"/\*(?:[^*]|\*[^/])*\*/"),
        // 'single-quoted string, maybe \'with\' escapes'
        String::from(r"'(?:[^'\\]|\\.)*'"),
        // "double-quoted string"
        String::from(r#""(?:[^"\\]|\\.)*""#),
        // `backtick string`
        String::from(r"`(?:[^`\\]|\\.)*`"),
        String::from(r"(?P<implicit>\?)"),
        // :4, @1, $2 and the invalid but well-formed @0
        format!("[$@:](?P<explicit>{NATURAL})"),
        format!("[@:](?P<named>{IDENTIFIER})"),
        format!(r"%\((?P<python>{IDENTIFIER})\)s"),
    ];

    let pattern = alternatives
        .iter()
        .map(|alternative| format!("(?:{alternative})"))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&pattern).expect("token pattern is a valid regex")
});

/// A lexer that splits a query into parameter and non-parameter tokens.
///
/// The lexer never fails: text that matches no pattern becomes
/// [`TokenKind::Other`], and adjacent unmatched text is coalesced into a
/// single token.
#[derive(Debug)]
pub struct Lexer<'a> {
    /// The input query.
    input: &'a str,
    /// Pattern matches not yet consumed.
    matches: CaptureMatches<'static, 'a>,
    /// Byte offset one past the end of the last emitted token.
    pos: usize,
    /// A matched token held back while the gap before it is emitted.
    pending: Option<Token<'a>>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given query.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let regex: &'static Regex = &TOKEN_REGEX;
        Self {
            input,
            matches: regex.captures_iter(input),
            pos: 0,
            pending: None,
        }
    }

    /// Tokenizes the entire input.
    #[must_use]
    pub fn tokenize(self) -> Vec<Token<'a>> {
        self.collect()
    }

    /// Emits the unmatched text between the current position and `end`.
    fn gap(&mut self, end: usize) -> Token<'a> {
        let token = Token::other(&self.input[self.pos..end], Span::new(self.pos, end));
        self.pos = end;
        token
    }

    /// Builds the token for one pattern match.
    fn classify(&self, captures: &Captures<'a>, start: usize, end: usize) -> Token<'a> {
        let text = &self.input[start..end];
        let span = Span::new(start, end);

        PARAMETER_GROUPS
            .iter()
            .find_map(|&(group, kind)| {
                captures
                    .name(group)
                    .map(|inside| Token::new(kind, text, inside.as_str(), span))
            })
            .unwrap_or_else(|| Token::other(text, span))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }

        let Some(captures) = self.matches.next() else {
            return (self.pos < self.input.len()).then(|| self.gap(self.input.len()));
        };

        let whole = captures.get(0)?;
        let token = self.classify(&captures, whole.start(), whole.end());

        if whole.start() > self.pos {
            let gap = self.gap(whole.start());
            self.pos = whole.end();
            self.pending = Some(token);
            return Some(gap);
        }

        self.pos = whole.end();
        Some(token)
    }
}

/// Lexes `query` into tokens. The inverse of [`render`](crate::render()).
#[must_use]
pub fn lex(query: &str) -> Vec<Token<'_>> {
    Lexer::new(query).tokenize()
}
