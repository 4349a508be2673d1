//! Abstract Syntax Tree (AST) types for SQL queries.
//!
//! Every node type implements [`AstNode`], which exposes its [`NodeKind`]
//! and its children by role name, and dispatches to a [`Visitor`].

mod clause;
mod kind;
mod query;
mod value;
mod visit;

pub use clause::{
    CommonTable, DataSource, Distinct, FetchClause, FetchPosition, FetchUnit, ForClause,
    FrameBound, FrameType, FromClause, GroupByClause, HavingClause, JoinClause, JoinCondition,
    LimitClause, LockMode, NullsPosition, OrderByClause, OrderByItem, OverClause,
    PartitionByClause, SelectClause, SelectItem, SortDirection, SourceAlias, SourceExpression,
    TableSource, WhereClause, WindowClause, WindowExpression, WindowFrameClause, WindowFrameSpec,
    WithClause,
};
pub use kind::NodeKind;
pub use query::{BinarySelectQuery, SelectQuery, SimpleSelectQuery, ValuesQuery};
pub use value::{
    ArrayExpression, BetweenExpression, BinaryExpression, CaseExpression, CaseKeyValuePair,
    CastExpression, ColumnReference, FunctionCall, IdentifierString, InlineQuery, LiteralValue,
    ParameterExpression, ParenExpression, RawString, StringSpecifierExpression,
    SwitchCaseArgument, TupleExpression, TypeValue, UnaryExpression, ValueExpr, ValueList,
};
pub use visit::{walk, AstNode, Node, Visitor};
