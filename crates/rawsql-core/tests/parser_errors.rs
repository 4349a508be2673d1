//! Tests for parser error cases and error positions.

mod common;
use common::*;

use rawsql_core::lexer::TokenizeError;
use rawsql_core::parser::{Parser, DEFAULT_MAX_DEPTH};
use rawsql_core::ParseError;

fn syntax_position(sql: &str) -> usize {
    match parse_err(sql) {
        ParseError::Syntax(err) => err.position,
        other => panic!("Expected syntax error for {sql}, got {other:?}"),
    }
}

#[test]
fn error_empty_input() {
    let err = parse_err("");
    assert_eq!(err.position(), 0);
}

#[test]
fn error_incomplete_select() {
    let _ = parse_err("SELECT");
}

#[test]
fn error_missing_from_table() {
    assert_eq!(syntax_position("SELECT * FROM"), 13);
}

#[test]
fn error_not_a_query() {
    let ParseError::Syntax(err) = parse_err("TRUNCATE users") else {
        panic!("Expected syntax error");
    };
    assert_eq!(err.position, 0);
    assert_eq!(err.found.as_deref(), Some("TRUNCATE"));
}

#[test]
fn error_unclosed_paren() {
    let ParseError::Syntax(err) = parse_err("SELECT (1 + 2") else {
        panic!("Expected syntax error");
    };
    assert_eq!(err.expected, "`)`");
    assert!(err.found.is_none());
}

#[test]
fn error_between_without_and() {
    assert_eq!(syntax_position("SELECT * FROM t WHERE x BETWEEN 1 OR 2"), 34);
}

#[test]
fn error_case_without_when() {
    let _ = parse_err("SELECT CASE ELSE 1 END");
}

#[test]
fn error_unclosed_string_is_a_tokenize_error() {
    let err = parse_err("SELECT 'abc");
    assert!(matches!(
        err,
        ParseError::Tokenize(TokenizeError::UnclosedString { position: 7, .. })
    ));
    assert_eq!(err.position(), 7);
}

#[test]
fn error_trailing_input() {
    let err = parse_err("SELECT 1 FROM t EXTRA");
    assert!(matches!(
        err,
        ParseError::TrailingInput { position: 16, ref found, .. } if found == "EXTRA"
    ));
    assert!(err.to_string().contains("EXTRA"));
}

#[test]
fn error_second_statement() {
    assert!(matches!(
        parse_err("SELECT 1; SELECT 2"),
        ParseError::TrailingInput { position: 10, .. }
    ));
}

#[test]
fn error_with_before_values() {
    let _ = parse_err("WITH w AS (SELECT 1) VALUES (1)");
}

#[test]
fn error_empty_window_definition() {
    let ParseError::Syntax(err) = parse_err("SELECT 1 FROM t WINDOW w AS ()") else {
        panic!("Expected syntax error");
    };
    assert_eq!(err.found.as_deref(), Some(")"));
}

#[test]
fn error_message_names_expected_construct() {
    let err = parse_err("SELECT a FROM t WHERE");
    assert_eq!(
        err.to_string(),
        "Unexpected token at position 21: expected expression, found end of input"
    );
}

#[test]
fn error_position_at_end_covers_source_text() {
    // The merged `order by` lexeme spans ten source bytes, not eight.
    let sql = "SELECT a FROM t ORDER   BY";
    assert_eq!(syntax_position(sql), sql.len());
}

#[test]
fn nesting_limit() {
    assert_eq!(DEFAULT_MAX_DEPTH, 128);

    let deep = format!("SELECT {}1{}", "(".repeat(100), ")".repeat(100));
    let lexemes = rawsql_core::Tokenizer::new(&deep).tokenize().unwrap();
    let err = Parser::new(&lexemes)
        .with_max_depth(64)
        .parse_statement()
        .unwrap_err();
    assert!(matches!(err, ParseError::NestingTooDeep { depth: 64, .. }));

    let lexemes = rawsql_core::Tokenizer::new("SELECT ((((1))))").tokenize().unwrap();
    assert!(Parser::new(&lexemes).with_max_depth(8).parse_statement().is_err());
    assert!(Parser::new(&lexemes).with_max_depth(16).parse_statement().is_ok());
}

// ============================================================================
// Deep nesting
// ============================================================================

fn nested_subqueries(levels: usize) -> String {
    format!("SELECT {}1{}", "(SELECT ".repeat(levels), ")".repeat(levels))
}

fn nested_from_subqueries(levels: usize) -> String {
    format!(
        "SELECT * FROM {}(SELECT 1) AS t{}",
        "(SELECT * FROM ".repeat(levels),
        ") AS t".repeat(levels)
    )
}

fn nested_parens(levels: usize) -> String {
    format!("SELECT {}1{}", "(".repeat(levels), ")".repeat(levels))
}

#[test]
fn nested_subqueries_within_limit() {
    round_trip(&nested_subqueries(40));
    round_trip(&nested_from_subqueries(50));
    round_trip(&nested_parens(60));
}

#[test]
fn nested_subqueries_beyond_limit() {
    for sql in [
        nested_subqueries(1000),
        nested_from_subqueries(1000),
        nested_parens(1000),
        format!("SELECT 1 WHERE {}1{}", "EXISTS (SELECT ".repeat(1000), ")".repeat(1000)),
    ] {
        let err = parse_err(&sql);
        assert!(
            matches!(err, ParseError::NestingTooDeep { depth: DEFAULT_MAX_DEPTH, .. }),
            "unexpected error: {err:?}"
        );
    }
}
