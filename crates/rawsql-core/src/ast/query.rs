//! Query AST types.

use serde::Serialize;

use super::clause::{
    FetchClause, ForClause, FromClause, GroupByClause, HavingClause, LimitClause, OrderByClause,
    SelectClause, WhereClause, WindowClause, WithClause,
};
use super::value::{RawString, TupleExpression};

/// A single `select` with all its clauses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleSelectQuery {
    /// Common tables.
    pub with: Option<WithClause>,
    /// The select list.
    pub select: SelectClause,
    /// The from clause.
    pub from: Option<FromClause>,
    /// The where clause.
    pub where_clause: Option<WhereClause>,
    /// The group by clause.
    pub group_by: Option<GroupByClause>,
    /// The having clause.
    pub having: Option<HavingClause>,
    /// The window clause.
    pub window: Option<WindowClause>,
    /// The order by clause.
    pub order_by: Option<OrderByClause>,
    /// Limit and offset.
    pub limit: Option<LimitClause>,
    /// The fetch clause.
    pub fetch: Option<FetchClause>,
    /// The locking clause.
    pub for_clause: Option<ForClause>,
}

impl SimpleSelectQuery {
    /// Creates a query with only a select list.
    #[must_use]
    pub const fn new(select: SelectClause) -> Self {
        Self {
            with: None,
            select,
            from: None,
            where_clause: None,
            group_by: None,
            having: None,
            window: None,
            order_by: None,
            limit: None,
            fetch: None,
            for_clause: None,
        }
    }
}

/// A set operation between two queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinarySelectQuery {
    /// Left query.
    pub left: Box<SelectQuery>,
    /// `union`, `union all`, `intersect`, `intersect all`, `except` or `except all`.
    pub operator: RawString,
    /// Right query.
    pub right: Box<SelectQuery>,
}

/// A `values (..), (..)` list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuesQuery {
    /// The rows.
    pub tuples: Vec<TupleExpression>,
}

/// A complete query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectQuery {
    /// A single select.
    Simple(Box<SimpleSelectQuery>),
    /// A set operation.
    Binary(BinarySelectQuery),
    /// A values list.
    Values(ValuesQuery),
}

impl SelectQuery {
    /// Combines two queries with a set operator.
    #[must_use]
    pub fn binary(left: Self, operator: impl Into<String>, right: Self) -> Self {
        Self::Binary(BinarySelectQuery {
            left: Box::new(left),
            operator: RawString::new(operator),
            right: Box::new(right),
        })
    }

    /// Returns the simple query, if this is one.
    #[must_use]
    pub fn as_simple(&self) -> Option<&SimpleSelectQuery> {
        match self {
            Self::Simple(query) => Some(query),
            _ => None,
        }
    }
}

impl From<SimpleSelectQuery> for SelectQuery {
    fn from(query: SimpleSelectQuery) -> Self {
        Self::Simple(Box::new(query))
    }
}
