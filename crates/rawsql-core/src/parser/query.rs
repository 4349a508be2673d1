//! Query level parsing: `with`, set operations and `values`.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    CommonTable, SelectQuery, SimpleSelectQuery, SourceAlias, TupleExpression, ValuesQuery,
    WithClause,
};
use crate::lexer::TokenKind;

/// Set operators, as merged by the tokenizer.
const SET_OPERATORS: &[&str] = &[
    "union",
    "union all",
    "intersect",
    "intersect all",
    "except",
    "except all",
];

impl Parser<'_> {
    /// Parses a complete query.
    ///
    /// Set operations are left associative. A leading `with` clause is
    /// attached to the leftmost select.
    pub fn parse_query(&mut self) -> Result<SelectQuery, ParseError> {
        self.enter()?;
        let result = self.parse_query_inner();
        self.leave();
        result
    }

    fn parse_query_inner(&mut self) -> Result<SelectQuery, ParseError> {
        let with = if self.check_keyword("with") {
            let with = self.parse_with_clause()?;
            if !self.check_keyword("select") {
                return Err(self.unexpected("`select`"));
            }
            Some(with)
        } else {
            None
        };

        let mut query = self.parse_query_term()?;
        if let SelectQuery::Simple(simple) = &mut query {
            simple.with = with;
        }

        loop {
            let operator = match self.current() {
                Some(lexeme)
                    if lexeme.kind == TokenKind::Command
                        && SET_OPERATORS.contains(&lexeme.text.as_str()) =>
                {
                    lexeme.text.as_str()
                }
                _ => break,
            };
            self.advance();
            let right = self.parse_query_term()?;
            query = SelectQuery::binary(query, operator, right);
        }

        Ok(query)
    }

    /// Parses one operand of a set operation.
    fn parse_query_term(&mut self) -> Result<SelectQuery, ParseError> {
        if self.check_keyword("values") {
            return self.parse_values_query().map(SelectQuery::Values);
        }
        self.parse_simple_select().map(SelectQuery::from)
    }

    fn parse_simple_select(&mut self) -> Result<SimpleSelectQuery, ParseError> {
        let mut query = SimpleSelectQuery::new(self.parse_select_clause()?);

        if self.check_keyword("from") {
            query.from = Some(self.parse_from_clause()?);
        }
        if self.check_keyword("where") {
            query.where_clause = Some(self.parse_where_clause()?);
        }
        if self.check_keyword("group by") {
            query.group_by = Some(self.parse_group_by_clause()?);
        }
        if self.check_keyword("having") {
            query.having = Some(self.parse_having_clause()?);
        }
        if self.check_keyword("window") {
            query.window = Some(self.parse_window_clause()?);
        }
        if self.check_keyword("order by") {
            query.order_by = Some(self.parse_order_by()?);
        }
        query.limit = self.parse_limit_clause()?;
        if self.check_keyword("fetch") {
            query.fetch = Some(self.parse_fetch_clause()?);
        }
        if self.check_keyword("for") {
            query.for_clause = Some(self.parse_for_clause()?);
        }

        Ok(query)
    }

    /// Parses `with [recursive] name [(cols)] as [[not] materialized] (query), ..`.
    fn parse_with_clause(&mut self) -> Result<WithClause, ParseError> {
        self.expect_keyword("with")?;
        let recursive = self.eat_keyword("recursive");
        let tables = self.parse_comma_list(|p| {
            let name = p.expect_identifier()?;
            let columns = if p.check(TokenKind::OpenParen) {
                p.parse_identifier_list()?
            } else {
                Vec::new()
            };
            p.expect_keyword("as")?;
            let materialized = if p.eat_keyword("materialized") {
                Some(true)
            } else if p.eat_keyword("not materialized") {
                Some(false)
            } else {
                None
            };
            p.expect(TokenKind::OpenParen, "`(`")?;
            p.enter()?;
            let query = p.parse_query()?;
            p.expect(TokenKind::CloseParen, "`)`")?;
            p.leave();
            Ok(CommonTable {
                alias: SourceAlias { name, columns },
                materialized,
                query: Box::new(query),
            })
        })?;
        Ok(WithClause { recursive, tables })
    }

    /// Parses `values (..), (..)`.
    fn parse_values_query(&mut self) -> Result<ValuesQuery, ParseError> {
        self.expect_keyword("values")?;
        let tuples = self.parse_comma_list(|p| {
            p.expect(TokenKind::OpenParen, "`(`")?;
            let values = p.parse_comma_list(|p| p.parse_expression(0))?;
            p.expect(TokenKind::CloseParen, "`)`")?;
            Ok(TupleExpression { values })
        })?;
        Ok(ValuesQuery { tuples })
    }
}
