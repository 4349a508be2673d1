//! Tests for the tokenizer: lexeme kinds, normalization, parameters,
//! operators, comments and errors.

mod common;
use common::*;

use rawsql_core::lexer::{TokenKind, TokenizeError, Tokenizer};

// ===================================================================
// Keywords and identifiers
// ===================================================================

#[test]
fn keywords_are_lowercased_commands() {
    let lexemes = lex("SeLeCt A fRoM B");
    assert_eq!(lexemes[0].kind, TokenKind::Command);
    assert_eq!(lexemes[0].text, "select");
    assert_eq!(lexemes[1].kind, TokenKind::Identifier);
    assert_eq!(lexemes[1].text, "A");
}

#[test]
fn multi_word_keywords_are_merged() {
    assert_eq!(
        texts("select a from t left   outer\njoin u on true group by a order by a nulls first"),
        vec![
            "select",
            "a",
            "from",
            "t",
            "left outer join",
            "u",
            "on",
            "true",
            "group by",
            "a",
            "order by",
            "a",
            "nulls first"
        ]
    );
}

#[test]
fn phrase_prefix_alone_stays_identifier() {
    let lexemes = lex("select left from t");
    assert_eq!(lexemes[1].kind, TokenKind::Identifier);
    assert_eq!(lexemes[1].text, "left");
}

#[test]
fn quoted_identifiers() {
    assert_eq!(
        texts(r#"select "a b", `c`, [d], "e""f" from t"#),
        vec!["select", "a b", ",", "c", ",", "d", ",", "e\"f", "from", "t"]
    );
    assert_eq!(kinds(r#""select""#), vec![TokenKind::Identifier]);
}

// ===================================================================
// Literals
// ===================================================================

#[test]
fn number_forms() {
    assert_eq!(
        texts("select 1, 1.5, .5, 1e10, 2.5E-3, 0xFF, 0b101, 0o17"),
        vec![
            "select", "1", ",", "1.5", ",", "0.5", ",", "1e10", ",", "2.5E-3", ",", "0xFF", ",",
            "0b101", ",", "0o17"
        ]
    );
}

#[test]
fn signed_numbers_follow_operand_position() {
    assert_eq!(texts("select -1"), vec!["select", "-1"]);
    assert_eq!(texts("select +1"), vec!["select", "1"]);
    assert_eq!(texts("select - 1"), vec!["select", "-1"]);
    assert_eq!(texts("select a - 1"), vec!["select", "a", "-", "1"]);
    assert_eq!(texts("select (-2)"), vec!["select", "(", "-2", ")"]);
    assert_eq!(texts("select -a"), vec!["select", "-", "a"]);
}

#[test]
fn strings_keep_raw_text() {
    let lexemes = lex("select 'it''s', 'a\\'b'");
    assert_eq!(lexemes[1].kind, TokenKind::Literal);
    assert_eq!(lexemes[1].text, "'it''s'");
    assert_eq!(lexemes[3].text, "'a\\'b'");
}

#[test]
fn prefixed_strings() {
    let lexemes = lex("select E'a\\nb', x'FF', U&'d'");
    assert_eq!(lexemes[1].kind, TokenKind::EscapedStringConstant);
    assert_eq!(lexemes[1].text, "e'a\\nb'");
    assert_eq!(lexemes[3].text, "x'FF'");
    assert_eq!(lexemes[5].text, "u&'d'");
}

// ===================================================================
// Parameters
// ===================================================================

#[test]
fn parameter_markers() {
    let lexemes = lex("select :name, $1, @p, ?, ?");
    let params: Vec<&str> = lexemes
        .iter()
        .filter(|l| l.kind == TokenKind::Parameter)
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(params, vec!["name", "1", "p", "1", "2"]);
}

#[test]
fn double_colon_is_not_a_parameter() {
    assert_eq!(texts("select a::int"), vec!["select", "a", "::", "int"]);
    assert_eq!(kinds("a::int")[1], TokenKind::Operator);
}

// ===================================================================
// Operators
// ===================================================================

#[test]
fn compound_operators_use_maximal_munch() {
    assert_eq!(
        texts("a->>b #>> c <> d || e !~* f <= g"),
        vec!["a", "->>", "b", "#>>", "c", "<>", "d", "||", "e", "!~*", "f", "<=", "g"]
    );
}

#[test]
fn wildcard_versus_multiplication() {
    let lexemes = lex("select t.*, a * b from t");
    assert_eq!(lexemes[3].kind, TokenKind::Identifier);
    assert_eq!(lexemes[3].text, "*");
    assert_eq!(lexemes[6].kind, TokenKind::Operator);
}

#[test]
fn positions_are_byte_offsets() {
    let positions: Vec<usize> = lex("select a,\n  b").iter().map(|l| l.position).collect();
    assert_eq!(positions, vec![0, 7, 8, 12]);
}

// ===================================================================
// Comments
// ===================================================================

#[test]
fn comments_are_kept_aside() {
    let mut tokenizer = Tokenizer::new("/* head\n  second */ select 1 -- tail");
    let lexemes = tokenizer.tokenize().unwrap();
    assert_eq!(lexemes.len(), 2);
    let comments: Vec<&str> = tokenizer.comments().iter().map(|c| c.text.as_str()).collect();
    assert_eq!(comments, vec!["head", "second", "tail"]);
}

// ===================================================================
// Errors
// ===================================================================

#[test]
fn unclosed_string_points_at_opening_quote() {
    let err = Tokenizer::new("SELECT 'abc").tokenize().unwrap_err();
    assert!(matches!(err, TokenizeError::UnclosedString { position: 7, .. }));
}

#[test]
fn unclosed_identifier_has_context() {
    let err = Tokenizer::new("select \"abc from t").tokenize().unwrap_err();
    let TokenizeError::UnclosedIdentifier { position, delimiter, .. } = &err else {
        panic!("Expected unclosed identifier, got {err:?}");
    };
    assert_eq!(*position, 7);
    assert_eq!(*delimiter, '"');
    assert!(err.to_string().contains("Closing delimiter"));
    assert!(err.context().contains('^'));
}

#[test]
fn unclosed_block_comment() {
    let err = Tokenizer::new("select 1 /* never").tokenize().unwrap_err();
    assert!(matches!(err, TokenizeError::UnclosedComment { position: 9, .. }));
}

#[test]
fn unexpected_character() {
    let err = Tokenizer::new("select {").tokenize().unwrap_err();
    assert!(matches!(
        err,
        TokenizeError::UnexpectedCharacter { character: '{', position: 7, .. }
    ));
}
