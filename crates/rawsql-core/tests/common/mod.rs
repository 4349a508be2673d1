#![allow(dead_code)]

use rawsql_core::ast::{SelectQuery, SimpleSelectQuery};
use rawsql_core::lexer::{Lexeme, TokenKind, Tokenizer};
use rawsql_core::{DialectConfig, ParseError};

pub fn parse(sql: &str) -> SelectQuery {
    rawsql_core::parse(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    rawsql_core::parse(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_simple(sql: &str) -> SimpleSelectQuery {
    match parse(sql) {
        SelectQuery::Simple(query) => *query,
        other => panic!("Expected simple SELECT, got {other:?}"),
    }
}

pub fn lex(sql: &str) -> Vec<Lexeme> {
    Tokenizer::new(sql)
        .tokenize()
        .unwrap_or_else(|e| panic!("Failed to tokenize: {sql}\nError: {e}"))
}

pub fn kinds(sql: &str) -> Vec<TokenKind> {
    lex(sql).into_iter().map(|lexeme| lexeme.kind).collect()
}

pub fn texts(sql: &str) -> Vec<String> {
    lex(sql).into_iter().map(|lexeme| lexeme.text).collect()
}

/// Parses and formats with the default configuration.
pub fn fmt(sql: &str) -> String {
    fmt_with(sql, &DialectConfig::default())
}

pub fn fmt_with(sql: &str, config: &DialectConfig) -> String {
    let query = parse(sql);
    rawsql_core::format(&query, Some(config))
        .unwrap_or_else(|e| panic!("Failed to format: {sql}\nError: {e}"))
}

/// Verifies that formatting reaches a fixed point: the formatted text
/// parses to a tree that formats to the same text and parses back to
/// the same tree.
pub fn round_trip(sql: &str) {
    let rendered1 = fmt(sql);
    let ast2 = parse(&rendered1);
    let rendered2 = rawsql_core::format(&ast2, None).unwrap();
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
    assert_eq!(
        ast2,
        parse(&rendered2),
        "Re-parsed tree differs for: {rendered2}"
    );
}
