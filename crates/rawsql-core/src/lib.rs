//! # rawsql-core
//!
//! A SELECT query parser and dialect-aware SQL formatter.
//!
//! This crate provides:
//! - A tokenizer built from independent token readers
//! - A hand-written recursive descent parser with Pratt expression parsing
//! - A typed AST with a generic visitor and traversal
//! - A formatter that writes canonical SQL back out under a dialect
//!
//! ## Parsing and Formatting
//!
//! ```rust
//! use rawsql_core::{format, parse};
//!
//! let query = parse("SELECT id AS id, name AS n FROM users u WHERE u.age > :age").unwrap();
//! let sql = format(&query, None).unwrap();
//! assert_eq!(sql, "select id, name as n from users as u where u.age > :age");
//! ```
//!
//! ## Dialects
//!
//! Output quoting and parameter markers follow a [`DialectConfig`]:
//!
//! ```rust
//! use rawsql_core::dialect::{dialect_by_name, Dialect};
//! use rawsql_core::{format, parse};
//!
//! let query = parse(r#"select "order" from t where id = :id"#).unwrap();
//! let config = dialect_by_name("mysql").unwrap().config();
//! assert_eq!(
//!     format(&query, Some(&config)).unwrap(),
//!     "select `order` from t where id = ?"
//! );
//! ```

pub mod ast;
pub mod dialect;
pub mod formatter;
pub mod lexer;
pub mod parser;

use core::str::FromStr;

pub use ast::{AstNode, Node, NodeKind, SelectQuery, ValueExpr, Visitor};
pub use dialect::{dialect_by_name, Dialect};
pub use formatter::{DialectConfig, FormatError, Formatter};
pub use lexer::{Lexeme, TokenKind, TokenizeError, Tokenizer};
pub use parser::{ParseError, Parser, SyntaxError};

/// Parses one query.
///
/// Accepts a `select`, a set operation or a `values` list, with an
/// optional leading `with` clause and one optional trailing `;`.
pub fn parse(sql: &str) -> Result<SelectQuery, ParseError> {
    Parser::parse_sql(sql)
}

/// Formats a node with `config`, or with the default configuration.
pub fn format<N: AstNode + ?Sized>(
    node: &N,
    config: Option<&DialectConfig>,
) -> Result<String, FormatError> {
    match config {
        Some(config) => Formatter::new(config.clone()).format(node),
        None => Formatter::default().format(node),
    }
}

impl FromStr for SelectQuery {
    type Err = ParseError;

    fn from_str(sql: &str) -> Result<Self, Self::Err> {
        parse(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_send_sync() {
        assert_send_sync::<SelectQuery>();
        assert_send_sync::<Formatter>();
        assert_send_sync::<ParseError>();
        assert_send_sync::<FormatError>();
        assert_send_sync::<&'static dyn Dialect>();
    }

    #[test]
    fn test_from_str() {
        let query: SelectQuery = "select 1".parse().unwrap();
        assert!(query.as_simple().is_some());
        assert!("select".parse::<SelectQuery>().is_err());
    }
}
