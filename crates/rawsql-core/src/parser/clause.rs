//! Clause parsing for simple select queries.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    DataSource, Distinct, FetchClause, FetchPosition, FetchUnit, ForClause, FromClause,
    GroupByClause, HavingClause, JoinClause, JoinCondition, LimitClause, LockMode,
    NullsPosition, OrderByClause, OrderByItem, RawString, SelectClause, SelectItem,
    SortDirection, SourceAlias, SourceExpression, TableSource, ValueList, WhereClause,
    WindowClause, WindowFrameClause,
};
use crate::lexer::TokenKind;

impl Parser<'_> {
    /// Parses `select [distinct [on (..)] | all] item, ..`.
    pub(super) fn parse_select_clause(&mut self) -> Result<SelectClause, ParseError> {
        self.expect_keyword("select")?;

        let distinct = if self.eat_keyword("distinct on") {
            self.expect(TokenKind::OpenParen, "`(`")?;
            let values = self.parse_comma_list(|p| p.parse_expression(0))?;
            self.expect(TokenKind::CloseParen, "`)`")?;
            Some(Distinct::DistinctOn(ValueList { values }))
        } else if self.eat_keyword("distinct") {
            Some(Distinct::Distinct)
        } else {
            self.eat_keyword("all");
            None
        };

        let items = self.parse_comma_list(Self::parse_select_item)?;
        Ok(SelectClause { distinct, items })
    }

    fn parse_select_item(&mut self) -> Result<SelectItem, ParseError> {
        let value = self.parse_expression(0)?;
        let alias = if self.eat_keyword("as") || self.check_alias() {
            Some(self.expect_identifier()?)
        } else {
            None
        };
        Ok(SelectItem { value, alias })
    }

    /// Checks if the current lexeme can be a bare alias.
    fn check_alias(&self) -> bool {
        self.current()
            .is_some_and(|lexeme| lexeme.kind == TokenKind::Identifier && lexeme.text != "*")
    }

    /// Parses `from source [join ..]`.
    pub(super) fn parse_from_clause(&mut self) -> Result<FromClause, ParseError> {
        self.expect_keyword("from")?;
        let source = self.parse_source_expression()?;

        let mut joins = Vec::new();
        loop {
            let join_type = match self.current() {
                Some(lexeme) if lexeme.kind == TokenKind::Comma => "cross join",
                Some(lexeme) if lexeme.kind == TokenKind::Command && lexeme.text.ends_with("join") => {
                    lexeme.text.as_str()
                }
                _ => break,
            };
            let comma = self.check(TokenKind::Comma);
            self.advance();
            let lateral = self.eat_keyword("lateral");
            let source = self.parse_source_expression()?;

            let condition = if comma {
                None
            } else if self.eat_keyword("on") {
                Some(JoinCondition::On(self.parse_expression(0)?))
            } else if self.eat_keyword("using") {
                Some(JoinCondition::Using(self.parse_identifier_list()?))
            } else {
                None
            };

            joins.push(JoinClause {
                join_type: RawString::new(join_type),
                lateral,
                source,
                condition,
            });
        }

        Ok(FromClause { source, joins })
    }

    /// Parses a table, sub-query or function source with its alias.
    fn parse_source_expression(&mut self) -> Result<SourceExpression, ParseError> {
        let datasource = if self.check(TokenKind::OpenParen) {
            self.advance();
            self.enter()?;
            let query = self.parse_query()?;
            self.expect(TokenKind::CloseParen, "`)`")?;
            self.leave();
            DataSource::SubQuery(Box::new(query))
        } else {
            let mut names = vec![self.expect_identifier()?];
            while self.check(TokenKind::Dot) {
                self.advance();
                names.push(self.expect_identifier()?);
            }
            let Some(last) = names.pop() else {
                return Err(self.unexpected("table name"));
            };
            if self.check(TokenKind::OpenParen) {
                DataSource::Function(self.parse_function_call(names, RawString::new(last.0))?)
            } else {
                DataSource::Table(TableSource {
                    namespaces: names,
                    table: last,
                })
            }
        };

        let is_table = matches!(datasource, DataSource::Table(_));
        let alias = self.parse_source_alias(is_table)?;
        Ok(SourceExpression { datasource, alias })
    }

    /// Parses `[as] name [(col, ..)]`.
    ///
    /// A bare name after a table is only an alias when more of the query
    /// follows it; at the end of a statement it is trailing input.
    fn parse_source_alias(&mut self, is_table: bool) -> Result<Option<SourceAlias>, ParseError> {
        let explicit = self.eat_keyword("as");
        if !explicit {
            if !self.check_alias() {
                return Ok(None);
            }
            let continues = self
                .peek_nth(1)
                .is_some_and(|next| !(next.kind == TokenKind::Operator && next.text == ";"));
            if is_table && !continues {
                return Ok(None);
            }
        }

        let name = self.expect_identifier()?;
        let columns = if self.check(TokenKind::OpenParen) {
            self.parse_identifier_list()?
        } else {
            Vec::new()
        };
        Ok(Some(SourceAlias { name, columns }))
    }

    pub(super) fn parse_where_clause(&mut self) -> Result<WhereClause, ParseError> {
        self.expect_keyword("where")?;
        Ok(WhereClause {
            condition: self.parse_expression(0)?,
        })
    }

    pub(super) fn parse_group_by_clause(&mut self) -> Result<GroupByClause, ParseError> {
        self.expect_keyword("group by")?;
        Ok(GroupByClause {
            items: self.parse_comma_list(|p| p.parse_expression(0))?,
        })
    }

    pub(super) fn parse_having_clause(&mut self) -> Result<HavingClause, ParseError> {
        self.expect_keyword("having")?;
        Ok(HavingClause {
            condition: self.parse_expression(0)?,
        })
    }

    /// Parses `window name as (..), ..`.
    pub(super) fn parse_window_clause(&mut self) -> Result<WindowClause, ParseError> {
        self.expect_keyword("window")?;
        let windows = self.parse_comma_list(|p| {
            let name = p.expect_identifier()?;
            p.expect_keyword("as")?;
            p.expect(TokenKind::OpenParen, "`(`")?;
            p.enter()?;
            let expression = p.parse_window_expression()?;
            let window = WindowFrameClause::new(name.0, expression)
                .map_err(|_| p.unexpected("`partition by` or `order by`"))?;
            p.expect(TokenKind::CloseParen, "`)`")?;
            p.leave();
            Ok(window)
        })?;
        Ok(WindowClause { windows })
    }

    /// Parses `order by value [asc|desc] [nulls first|last], ..`.
    pub(super) fn parse_order_by(&mut self) -> Result<OrderByClause, ParseError> {
        self.expect_keyword("order by")?;
        let items = self.parse_comma_list(|p| {
            let value = p.parse_expression(0)?;
            let direction = if p.eat_keyword("desc") {
                SortDirection::Desc
            } else {
                p.eat_keyword("asc");
                SortDirection::Asc
            };
            let nulls = if p.eat_keyword("nulls first") {
                Some(NullsPosition::First)
            } else if p.eat_keyword("nulls last") {
                Some(NullsPosition::Last)
            } else {
                None
            };
            Ok(OrderByItem {
                value,
                direction,
                nulls,
            })
        })?;
        Ok(OrderByClause { items })
    }

    /// Parses `limit` and `offset` in either order.
    pub(super) fn parse_limit_clause(&mut self) -> Result<Option<LimitClause>, ParseError> {
        let mut limit = None;
        let mut offset = None;
        loop {
            if limit.is_none() && self.eat_keyword("limit") {
                limit = Some(self.parse_expression(0)?);
            } else if offset.is_none() && self.eat_keyword("offset") {
                offset = Some(self.parse_expression(0)?);
                self.eat_rows();
            } else {
                break;
            }
        }
        if limit.is_none() && offset.is_none() {
            return Ok(None);
        }
        Ok(Some(LimitClause { limit, offset }))
    }

    /// Consumes `row` or `rows`.
    fn eat_rows(&mut self) -> bool {
        self.eat_word("rows") || self.eat_word("row")
    }

    /// Parses `fetch first|next [count] rows only|with ties`.
    pub(super) fn parse_fetch_clause(&mut self) -> Result<FetchClause, ParseError> {
        self.expect_keyword("fetch")?;
        let position = if self.eat_word("first") {
            FetchPosition::First
        } else if self.eat_word("next") {
            FetchPosition::Next
        } else {
            return Err(self.unexpected("`first` or `next`"));
        };

        let count = if self.check_word("row") || self.check_word("rows") {
            None
        } else {
            Some(self.parse_expression(0)?)
        };

        let percent = self.eat_word("percent");
        if !self.eat_rows() {
            return Err(self.unexpected("`rows`"));
        }
        let unit = if self.eat_word("only") {
            if percent {
                FetchUnit::Percent
            } else {
                FetchUnit::RowsOnly
            }
        } else if !percent && self.eat_keyword("with") {
            self.expect_word("ties")?;
            FetchUnit::WithTies
        } else {
            return Err(self.unexpected("`only`"));
        };

        Ok(FetchClause {
            position,
            count,
            unit,
        })
    }

    /// Parses `for update|no key update|share|key share`.
    pub(super) fn parse_for_clause(&mut self) -> Result<ForClause, ParseError> {
        self.expect_keyword("for")?;
        let lock_mode = if self.eat_word("update") {
            LockMode::Update
        } else if self.eat_word("share") {
            LockMode::Share
        } else if self.eat_word("no") {
            self.expect_word("key")?;
            self.expect_word("update")?;
            LockMode::NoKeyUpdate
        } else if self.eat_word("key") {
            self.expect_word("share")?;
            LockMode::KeyShare
        } else {
            return Err(self.unexpected("lock mode"));
        };
        Ok(ForClause { lock_mode })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{DataSource, FetchUnit, JoinCondition, LockMode, SelectQuery, SimpleSelectQuery};
    use crate::parser::{ParseError, Parser};

    fn parse(sql: &str) -> SimpleSelectQuery {
        match Parser::parse_sql(sql).unwrap() {
            SelectQuery::Simple(query) => *query,
            other => panic!("expected simple query, got {other:?}"),
        }
    }

    #[test]
    fn test_select_aliases() {
        let query = parse("select a as x, b y, c from t");
        let aliases: Vec<_> = query
            .select
            .items
            .iter()
            .map(|item| item.alias.as_ref().map(|a| a.as_str().to_string()))
            .collect();
        assert_eq!(
            aliases,
            vec![Some("x".to_string()), Some("y".to_string()), None]
        );
    }

    #[test]
    fn test_distinct_on() {
        let query = parse("select distinct on (a, b) a, b, c from t");
        assert!(matches!(
            query.select.distinct,
            Some(crate::ast::Distinct::DistinctOn(ref list)) if list.values.len() == 2
        ));
    }

    #[test]
    fn test_joins() {
        let query = parse(
            "select * from a x join b y on x.id = y.id left outer join c using (id), d cross join e",
        );
        let from = query.from.unwrap();
        let types: Vec<_> = from.joins.iter().map(|j| j.join_type.as_str()).collect();
        assert_eq!(
            types,
            vec!["join", "left outer join", "cross join", "cross join"]
        );
        assert!(matches!(from.joins[0].condition, Some(JoinCondition::On(_))));
        assert!(matches!(from.joins[1].condition, Some(JoinCondition::Using(ref cols)) if cols.len() == 1));
        assert!(from.joins[2].condition.is_none());
    }

    #[test]
    fn test_source_kinds() {
        let query = parse("select * from (select 1) q, generate_series(1, 3) as g(n), s.t");
        let from = query.from.unwrap();
        assert!(matches!(from.source.datasource, DataSource::SubQuery(_)));
        assert!(matches!(from.joins[0].source.datasource, DataSource::Function(_)));
        let alias = from.joins[0].source.alias.as_ref().unwrap();
        assert_eq!(alias.columns.len(), 1);
        assert!(matches!(
            from.joins[1].source.datasource,
            DataSource::Table(ref t) if t.namespaces.len() == 1
        ));
    }

    #[test]
    fn test_bare_table_alias_needs_following_input() {
        let query = parse("select * from users u where u.id = 1");
        assert!(query.from.unwrap().source.alias.is_some());
        assert!(matches!(
            Parser::parse_sql("select * from users u"),
            Err(ParseError::TrailingInput { .. })
        ));
        assert!(Parser::parse_sql("select * from users as u").is_ok());
    }

    #[test]
    fn test_limit_offset_either_order() {
        let a = parse("select 1 limit 10 offset 5").limit.unwrap();
        let b = parse("select 1 offset 5 rows limit 10").limit.unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fetch_and_lock() {
        let query = parse("select 1 from t fetch next 5 rows with ties for no key update");
        assert_eq!(query.fetch.unwrap().unit, FetchUnit::WithTies);
        assert_eq!(query.for_clause.unwrap().lock_mode, LockMode::NoKeyUpdate);

        let query = parse("select 1 fetch first row only");
        assert!(query.fetch.unwrap().count.is_none());
    }

    #[test]
    fn test_window_clause() {
        let query = parse("select sum(x) over w from t window w as (partition by a order by b)");
        assert_eq!(query.window.unwrap().windows[0].name.as_str(), "w");
        assert!(Parser::parse_sql("select 1 from t window w as ()").is_err());
    }
}
