//! Clause AST types.

use serde::Serialize;

use super::query::SelectQuery;
use super::value::{FunctionCall, IdentifierString, RawString, ValueExpr, ValueList};
use crate::formatter::FormatError;

/// `distinct` or `distinct on (..)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Distinct {
    /// Plain `distinct`.
    Distinct,
    /// Postgres `distinct on (..)`.
    DistinctOn(ValueList),
}

/// One projected value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectItem {
    /// The projected value.
    pub value: ValueExpr,
    /// The alias, as written.
    pub alias: Option<IdentifierString>,
}

impl SelectItem {
    /// Creates an item without alias.
    #[must_use]
    pub const fn new(value: ValueExpr) -> Self {
        Self { value, alias: None }
    }

    /// Returns the alias unless it repeats the projected column name.
    #[must_use]
    pub fn effective_alias(&self) -> Option<&IdentifierString> {
        let alias = self.alias.as_ref()?;
        match &self.value {
            ValueExpr::Column(column) if column.column == *alias => None,
            _ => Some(alias),
        }
    }
}

/// The `select` list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectClause {
    /// The distinct mode.
    pub distinct: Option<Distinct>,
    /// The projected items.
    pub items: Vec<SelectItem>,
}

/// A table name, possibly schema qualified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSource {
    /// Qualifier segments, outermost first.
    pub namespaces: Vec<IdentifierString>,
    /// The table name.
    pub table: IdentifierString,
}

impl TableSource {
    /// Creates an unqualified table.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            namespaces: Vec::new(),
            table: IdentifierString::new(table),
        }
    }
}

/// What a source expression reads from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// A table.
    Table(TableSource),
    /// A parenthesized sub-query.
    SubQuery(Box<SelectQuery>),
    /// A set-returning function.
    Function(FunctionCall),
}

/// `alias` or `alias(col1, col2)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceAlias {
    /// The alias name.
    pub name: IdentifierString,
    /// Column aliases.
    pub columns: Vec<IdentifierString>,
}

impl SourceAlias {
    /// Creates an alias without column list.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: IdentifierString::new(name),
            columns: Vec::new(),
        }
    }
}

/// A source in `from` or `join`, with its alias.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceExpression {
    /// The data source.
    pub datasource: DataSource,
    /// The alias.
    pub alias: Option<SourceAlias>,
}

impl SourceExpression {
    /// Returns the alias unless it repeats the table name without adding
    /// column aliases.
    #[must_use]
    pub fn effective_alias(&self) -> Option<&SourceAlias> {
        let alias = self.alias.as_ref()?;
        match &self.datasource {
            DataSource::Table(table) if table.table == alias.name && alias.columns.is_empty() => {
                None
            }
            _ => Some(alias),
        }
    }
}

/// The condition of a join.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinCondition {
    /// `on <condition>`.
    On(ValueExpr),
    /// `using (a, b)`.
    Using(Vec<IdentifierString>),
}

/// One joined source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinClause {
    /// The join keyword (`join`, `left outer join`, `cross join`, ...).
    pub join_type: RawString,
    /// True for `lateral`.
    pub lateral: bool,
    /// The joined source.
    pub source: SourceExpression,
    /// The join condition.
    pub condition: Option<JoinCondition>,
}

/// The `from` clause.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FromClause {
    /// The first source.
    pub source: SourceExpression,
    /// Joined sources, in order. Comma joins are stored as `cross join`.
    pub joins: Vec<JoinClause>,
}

/// The `where` clause.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhereClause {
    /// The filter condition.
    pub condition: ValueExpr,
}

/// The `group by` clause.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupByClause {
    /// The grouping values.
    pub items: Vec<ValueExpr>,
}

/// The `having` clause.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HavingClause {
    /// The group filter condition.
    pub condition: ValueExpr,
}

/// Sort direction of an order item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Placement of nulls in an order item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NullsPosition {
    /// `nulls first`.
    First,
    /// `nulls last`.
    Last,
}

impl NullsPosition {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "nulls first",
            Self::Last => "nulls last",
        }
    }
}

/// An `order by` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderByItem {
    /// The sort key.
    pub value: ValueExpr,
    /// The direction.
    pub direction: SortDirection,
    /// Null placement.
    pub nulls: Option<NullsPosition>,
}

/// The `order by` clause.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderByClause {
    /// Sort keys, most significant first.
    pub items: Vec<OrderByItem>,
}

/// `partition by` inside a window specification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartitionByClause {
    /// The partitioning values.
    pub values: Vec<ValueExpr>,
}

/// `rows`, `range` or `groups`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameType {
    /// Physical rows.
    Rows,
    /// Value range.
    Range,
    /// Peer groups.
    Groups,
}

impl FrameType {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rows => "rows",
            Self::Range => "range",
            Self::Groups => "groups",
        }
    }
}

/// One end of a window frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameBound {
    /// `unbounded preceding`.
    UnboundedPreceding,
    /// `unbounded following`.
    UnboundedFollowing,
    /// `current row`.
    CurrentRow,
    /// `<offset> preceding`.
    Preceding(Box<ValueExpr>),
    /// `<offset> following`.
    Following(Box<ValueExpr>),
}

/// A window frame: `rows between a and b`, or `rows a`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowFrameSpec {
    /// The frame unit.
    pub frame_type: FrameType,
    /// Start bound.
    pub start: FrameBound,
    /// End bound, when written with `between`.
    pub end: Option<FrameBound>,
}

/// The content of a window specification.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WindowExpression {
    /// `partition by` values.
    pub partition: Option<PartitionByClause>,
    /// `order by` keys.
    pub order: Option<OrderByClause>,
    /// Frame bounds.
    pub frame: Option<WindowFrameSpec>,
}

impl WindowExpression {
    /// Returns true if the window partitions or orders rows.
    #[must_use]
    pub const fn has_bounds(&self) -> bool {
        self.partition.is_some() || self.order.is_some()
    }
}

/// The `over` clause of a window function.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverClause {
    /// `over name`.
    Named(IdentifierString),
    /// `over (..)`.
    Window(WindowExpression),
}

/// One named definition of the `window` clause.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowFrameClause {
    /// The window name.
    pub name: IdentifierString,
    /// The window definition.
    pub expression: WindowExpression,
}

impl WindowFrameClause {
    /// Creates a named window definition.
    ///
    /// Fails when the definition neither partitions nor orders rows.
    pub fn new(name: impl Into<String>, expression: WindowExpression) -> Result<Self, FormatError> {
        let name = IdentifierString::new(name);
        if !expression.has_bounds() {
            return Err(FormatError::IncompleteWindowFrame { name: name.0 });
        }
        Ok(Self { name, expression })
    }
}

/// The `window` clause.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowClause {
    /// Named windows, in order.
    pub windows: Vec<WindowFrameClause>,
}

/// One common table of a `with` clause.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommonTable {
    /// The table name and optional column list.
    pub alias: SourceAlias,
    /// `Some(true)` for `materialized`, `Some(false)` for `not materialized`.
    pub materialized: Option<bool>,
    /// The table query.
    pub query: Box<SelectQuery>,
}

/// The `with` clause.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithClause {
    /// True for `with recursive`.
    pub recursive: bool,
    /// Common tables, in order.
    pub tables: Vec<CommonTable>,
}

/// `limit` and `offset`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimitClause {
    /// Row count.
    pub limit: Option<ValueExpr>,
    /// Rows skipped.
    pub offset: Option<ValueExpr>,
}

/// `first` or `next` in a fetch clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchPosition {
    /// `fetch first`.
    First,
    /// `fetch next`.
    Next,
}

impl FetchPosition {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Next => "next",
        }
    }
}

/// What a fetch count means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchUnit {
    /// `rows only`.
    RowsOnly,
    /// `percent rows only`.
    Percent,
    /// `rows with ties`.
    WithTies,
}

impl FetchUnit {
    /// Returns the SQL keywords.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RowsOnly => "rows only",
            Self::Percent => "percent rows only",
            Self::WithTies => "rows with ties",
        }
    }
}

/// `fetch first|next [count] unit`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchClause {
    /// `first` or `next`.
    pub position: FetchPosition,
    /// The row count; one row when absent.
    pub count: Option<ValueExpr>,
    /// The count unit.
    pub unit: FetchUnit,
}

/// Row lock strength of a `for` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LockMode {
    /// `for update`.
    Update,
    /// `for no key update`.
    NoKeyUpdate,
    /// `for share`.
    Share,
    /// `for key share`.
    KeyShare,
}

impl LockMode {
    /// Returns the SQL keywords.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::NoKeyUpdate => "no key update",
            Self::Share => "share",
            Self::KeyShare => "key share",
        }
    }
}

/// The `for` locking clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForClause {
    /// The lock strength.
    pub lock_mode: LockMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_item_alias_elision() {
        let mut item = SelectItem::new(ValueExpr::column("id"));
        item.alias = Some(IdentifierString::new("id"));
        assert!(item.effective_alias().is_none());
        item.alias = Some(IdentifierString::new("uid"));
        assert_eq!(item.effective_alias().map(IdentifierString::as_str), Some("uid"));
    }

    #[test]
    fn test_source_alias_elision_keeps_column_list() {
        let mut source = SourceExpression {
            datasource: DataSource::Table(TableSource::new("t")),
            alias: Some(SourceAlias::new("t")),
        };
        assert!(source.effective_alias().is_none());

        let mut alias = SourceAlias::new("t");
        alias.columns.push(IdentifierString::new("a"));
        source.alias = Some(alias);
        assert!(source.effective_alias().is_some());
    }

    #[test]
    fn test_window_definition_requires_bounds() {
        let err = WindowFrameClause::new("w", WindowExpression::default()).unwrap_err();
        assert!(matches!(err, FormatError::IncompleteWindowFrame { .. }));

        let expression = WindowExpression {
            partition: Some(PartitionByClause {
                values: vec![ValueExpr::column("a")],
            }),
            ..WindowExpression::default()
        };
        assert!(WindowFrameClause::new("w", expression).is_ok());
    }
}
