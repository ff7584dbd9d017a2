//! Tests for tokenization and rendering.

mod common;
use common::*;

use oxide_sql_params::{lex, render, Lexer, Span, Token, TokenKind};

#[test]
fn render_inverts_lex_over_corpus() {
    for query in CORPUS {
        assert_eq!(render(&lex(query)), *query, "round trip failed for {query:?}");
    }
}

#[test]
fn spans_are_contiguous_over_corpus() {
    for query in CORPUS {
        let mut end = 0;
        for token in lex(query) {
            assert_eq!(token.span.start, end, "gap before {token:?} in {query:?}");
            assert_eq!(token.span.slice(query), Some(token.text));
            end = token.span.end;
        }
        assert_eq!(end, query.len());
    }
}

#[test]
fn no_empty_tokens_over_corpus() {
    for query in CORPUS {
        assert!(lex(query).iter().all(|t| !t.text.is_empty()), "{query:?}");
    }
}

#[test]
fn unmatched_text_is_coalesced() {
    let tokens = lex("select a, b from t where c > 1");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Other);
}

#[test]
fn comment_then_gap_are_separate_tokens() {
    assert_eq!(
        lex("/* a ? b */ select ? "),
        vec![
            Token::other("/* a ? b */", Span::new(0, 11)),
            Token::other(" select ", Span::new(11, 19)),
            Token::implicit(Span::new(19, 20)),
            Token::other(" ", Span::new(20, 21)),
        ]
    );
}

#[test]
fn realistic_query() {
    let query = "-- Here's a more realistic example.
select foo, bar
from bazz
  inner join hah on bazz.id = hah.id
where foo = @some_damned_thing
  and bar in @more_things;";
    let summary: Vec<_> = lex(query).iter().map(|t| (t.kind, t.text)).collect();
    assert_eq!(
        summary,
        vec![
            (TokenKind::Other, "-- Here's a more realistic example.\n"),
            (
                TokenKind::Other,
                "select foo, bar\nfrom bazz\n  inner join hah on bazz.id = hah.id\nwhere foo = "
            ),
            (TokenKind::Named, "@some_damned_thing"),
            (TokenKind::Other, "\n  and bar in "),
            (TokenKind::Named, "@more_things"),
            (TokenKind::Other, ";"),
        ]
    );
}

#[test]
fn sigils_and_kinds() {
    assert_eq!(
        parameter_kinds("? $1 @2 :3 @name :name %(name)s"),
        vec![
            (TokenKind::Implicit, "?"),
            (TokenKind::Explicit, "1"),
            (TokenKind::Explicit, "2"),
            (TokenKind::Explicit, "3"),
            (TokenKind::Named, "name"),
            (TokenKind::Named, "name"),
            (TokenKind::NamedPython, "name"),
        ]
    );
}

#[test]
fn lookalikes_that_are_not_parameters() {
    // `$` never introduces a name, bare sigils are text, and a python
    // reference needs an identifier and the trailing `s`.
    assert!(parameter_kinds("$name @ : $ %(x) %()s %(1abc)s").is_empty());
}

#[test]
fn underscore_identifiers() {
    assert_eq!(
        parameter_kinds(":_private @user_id2"),
        vec![(TokenKind::Named, "_private"), (TokenKind::Named, "user_id2")]
    );
}

#[test]
fn block_comment_ending_in_double_star_is_not_a_comment() {
    // `\*[^/]` consumes the first star of `**/`, so the closing `*/` is
    // never found and the placeholder after it is a real parameter.
    assert_eq!(
        parameter_kinds("/* a **/ ?"),
        vec![(TokenKind::Implicit, "?")]
    );
    assert_eq!(parameter_kinds("/* a * b */ ?").len(), 1);
    assert!(parameter_kinds("/* ? */").is_empty());
}

#[test]
fn escaped_newline_does_not_continue_a_string() {
    // `\\.` does not match a newline, so this string never closes.
    assert_eq!(
        parameter_kinds("'a\\\n?'"),
        vec![(TokenKind::Implicit, "?")]
    );
}

#[test]
fn lexer_streams_tokens() {
    let mut lexer = Lexer::new("a = :a and b = ?");
    let first = lexer.next().unwrap();
    assert_eq!(first.text, "a = ");
    let rest: Vec<_> = lexer.map(|t| t.kind).collect();
    assert_eq!(
        rest,
        vec![TokenKind::Named, TokenKind::Other, TokenKind::Implicit]
    );
}
