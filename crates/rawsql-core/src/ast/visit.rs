//! Generic traversal over the AST.

use super::clause::{
    CommonTable, DataSource, Distinct, FetchClause, ForClause, FrameBound, FromClause,
    GroupByClause, HavingClause, JoinClause, JoinCondition, LimitClause, OrderByClause,
    OrderByItem, OverClause, PartitionByClause, SelectClause, SelectItem, SourceAlias,
    SourceExpression, TableSource, WhereClause, WindowClause, WindowExpression,
    WindowFrameClause, WindowFrameSpec, WithClause,
};
use super::kind::NodeKind;
use super::query::{BinarySelectQuery, SelectQuery, SimpleSelectQuery, ValuesQuery};
use super::value::{
    ArrayExpression, BetweenExpression, BinaryExpression, CaseExpression, CaseKeyValuePair,
    CastExpression, ColumnReference, FunctionCall, IdentifierString, InlineQuery, LiteralValue,
    ParameterExpression, ParenExpression, RawString, StringSpecifierExpression,
    SwitchCaseArgument, TupleExpression, TypeValue, UnaryExpression, ValueExpr, ValueList,
};

/// A borrowed view of any AST node.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Literal(&'a LiteralValue),
    Raw(&'a RawString),
    Identifier(&'a IdentifierString),
    Column(&'a ColumnReference),
    Function(&'a FunctionCall),
    Unary(&'a UnaryExpression),
    Binary(&'a BinaryExpression),
    Parameter(&'a ParameterExpression),
    Array(&'a ArrayExpression),
    Tuple(&'a TupleExpression),
    ValueList(&'a ValueList),
    Case(&'a CaseExpression),
    SwitchCase(&'a SwitchCaseArgument),
    CaseKeyValue(&'a CaseKeyValuePair),
    Cast(&'a CastExpression),
    Paren(&'a ParenExpression),
    Between(&'a BetweenExpression),
    Type(&'a TypeValue),
    StringSpecifier(&'a StringSpecifierExpression),
    InlineQuery(&'a InlineQuery),
    Select(&'a SelectClause),
    SelectItem(&'a SelectItem),
    Distinct(&'a Distinct),
    From(&'a FromClause),
    Join(&'a JoinClause),
    Source(&'a SourceExpression),
    Table(&'a TableSource),
    SourceAlias(&'a SourceAlias),
    Where(&'a WhereClause),
    GroupBy(&'a GroupByClause),
    Having(&'a HavingClause),
    OrderBy(&'a OrderByClause),
    OrderByItem(&'a OrderByItem),
    PartitionBy(&'a PartitionByClause),
    Over(&'a OverClause),
    WindowExpression(&'a WindowExpression),
    WindowFrameSpec(&'a WindowFrameSpec),
    WindowFrame(&'a WindowFrameClause),
    Window(&'a WindowClause),
    With(&'a WithClause),
    CommonTable(&'a CommonTable),
    Limit(&'a LimitClause),
    Fetch(&'a FetchClause),
    For(&'a ForClause),
    SimpleQuery(&'a SimpleSelectQuery),
    BinaryQuery(&'a BinarySelectQuery),
    ValuesQuery(&'a ValuesQuery),
}

impl<'a> Node<'a> {
    /// Returns the kind tag of the node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Literal(_) => NodeKind::Literal,
            Self::Raw(_) => NodeKind::Raw,
            Self::Identifier(_) => NodeKind::Identifier,
            Self::Column(_) => NodeKind::Column,
            Self::Function(_) => NodeKind::Function,
            Self::Unary(_) => NodeKind::Unary,
            Self::Binary(_) => NodeKind::Binary,
            Self::Parameter(_) => NodeKind::Parameter,
            Self::Array(_) => NodeKind::Array,
            Self::Tuple(_) => NodeKind::Tuple,
            Self::ValueList(_) => NodeKind::ValueList,
            Self::Case(_) => NodeKind::Case,
            Self::SwitchCase(_) => NodeKind::SwitchCase,
            Self::CaseKeyValue(_) => NodeKind::CaseKeyValue,
            Self::Cast(_) => NodeKind::Cast,
            Self::Paren(_) => NodeKind::Paren,
            Self::Between(_) => NodeKind::Between,
            Self::Type(_) => NodeKind::Type,
            Self::StringSpecifier(_) => NodeKind::StringSpecifier,
            Self::InlineQuery(_) => NodeKind::InlineQuery,
            Self::Select(_) => NodeKind::Select,
            Self::SelectItem(_) => NodeKind::SelectItem,
            Self::Distinct(_) => NodeKind::Distinct,
            Self::From(_) => NodeKind::From,
            Self::Join(_) => NodeKind::Join,
            Self::Source(_) => NodeKind::Source,
            Self::Table(_) => NodeKind::Table,
            Self::SourceAlias(_) => NodeKind::SourceAlias,
            Self::Where(_) => NodeKind::Where,
            Self::GroupBy(_) => NodeKind::GroupBy,
            Self::Having(_) => NodeKind::Having,
            Self::OrderBy(_) => NodeKind::OrderBy,
            Self::OrderByItem(_) => NodeKind::OrderByItem,
            Self::PartitionBy(_) => NodeKind::PartitionBy,
            Self::Over(_) => NodeKind::Over,
            Self::WindowExpression(_) => NodeKind::WindowExpression,
            Self::WindowFrameSpec(_) => NodeKind::WindowFrameSpec,
            Self::WindowFrame(_) => NodeKind::WindowFrame,
            Self::Window(_) => NodeKind::Window,
            Self::With(_) => NodeKind::With,
            Self::CommonTable(_) => NodeKind::CommonTable,
            Self::Limit(_) => NodeKind::Limit,
            Self::Fetch(_) => NodeKind::Fetch,
            Self::For(_) => NodeKind::For,
            Self::SimpleQuery(_) => NodeKind::SimpleQuery,
            Self::BinaryQuery(_) => NodeKind::BinaryQuery,
            Self::ValuesQuery(_) => NodeKind::ValuesQuery,
        }
    }

    /// Returns the direct children of the node, each with its role name.
    #[must_use]
    pub fn children(&self) -> Vec<(&'static str, Node<'a>)> {
        let mut out = Children::default();
        match *self {
            Self::Literal(_)
            | Self::Raw(_)
            | Self::Identifier(_)
            | Self::Parameter(_)
            | Self::For(_) => {}
            Self::Column(column) => {
                out.all("namespace", &column.namespaces);
                out.push("column", Node::Identifier(&column.column));
            }
            Self::Function(function) => {
                out.all("namespace", &function.namespaces);
                out.push("name", Node::Raw(&function.name));
                out.opt("argument", function.argument.as_deref());
                out.opt("over", function.over.as_deref());
            }
            Self::Unary(unary) => {
                out.push("operator", Node::Raw(&unary.operator));
                out.push("expression", (&*unary.expression).into());
            }
            Self::Binary(binary) => {
                out.push("left", (&*binary.left).into());
                out.push("operator", Node::Raw(&binary.operator));
                out.push("right", (&*binary.right).into());
            }
            Self::Array(array) => out.push("expression", (&*array.expression).into()),
            Self::Tuple(tuple) => out.all("value", &tuple.values),
            Self::ValueList(list) => out.all("value", &list.values),
            Self::Case(case) => {
                out.opt("condition", case.condition.as_deref());
                out.push("switch", Node::SwitchCase(&case.switch));
            }
            Self::SwitchCase(switch) => {
                for pair in &switch.cases {
                    out.push("case", Node::CaseKeyValue(pair));
                }
                out.opt("else", switch.else_value.as_deref());
            }
            Self::CaseKeyValue(pair) => {
                out.push("key", (&pair.key).into());
                out.push("value", (&pair.value).into());
            }
            Self::Cast(cast) => {
                out.push("input", (&*cast.input).into());
                out.push("type", Node::Type(&cast.cast_type));
            }
            Self::Paren(paren) => out.push("expression", (&*paren.expression).into()),
            Self::Between(between) => {
                out.push("expression", (&*between.expression).into());
                out.push("lower", (&*between.lower).into());
                out.push("upper", (&*between.upper).into());
            }
            Self::Type(ty) => {
                out.push("name", Node::Raw(&ty.name));
                out.opt("argument", ty.argument.as_deref());
            }
            Self::StringSpecifier(spec) => {
                out.push("specifier", Node::Raw(&spec.specifier));
                out.push("value", Node::Literal(&spec.value));
            }
            Self::InlineQuery(inline) => out.push("query", (&*inline.query).into()),
            Self::Select(select) => {
                out.opt("distinct", select.distinct.as_ref());
                for item in &select.items {
                    out.push("item", Node::SelectItem(item));
                }
            }
            Self::SelectItem(item) => {
                out.push("value", (&item.value).into());
                out.opt("alias", item.alias.as_ref());
            }
            Self::Distinct(distinct) => {
                if let Distinct::DistinctOn(values) = distinct {
                    out.push("on", Node::ValueList(values));
                }
            }
            Self::From(from) => {
                out.push("source", Node::Source(&from.source));
                for join in &from.joins {
                    out.push("join", Node::Join(join));
                }
            }
            Self::Join(join) => {
                out.push("type", Node::Raw(&join.join_type));
                out.push("source", Node::Source(&join.source));
                match &join.condition {
                    Some(JoinCondition::On(condition)) => out.push("on", condition.into()),
                    Some(JoinCondition::Using(columns)) => out.all("using", columns),
                    None => {}
                }
            }
            Self::Source(source) => {
                out.push("datasource", (&source.datasource).into());
                out.opt("alias", source.alias.as_ref());
            }
            Self::Table(table) => {
                out.all("namespace", &table.namespaces);
                out.push("table", Node::Identifier(&table.table));
            }
            Self::SourceAlias(alias) => {
                out.push("name", Node::Identifier(&alias.name));
                out.all("column", &alias.columns);
            }
            Self::Where(clause) => out.push("condition", (&clause.condition).into()),
            Self::GroupBy(clause) => out.all("item", &clause.items),
            Self::Having(clause) => out.push("condition", (&clause.condition).into()),
            Self::OrderBy(clause) => {
                for item in &clause.items {
                    out.push("item", Node::OrderByItem(item));
                }
            }
            Self::OrderByItem(item) => out.push("value", (&item.value).into()),
            Self::PartitionBy(clause) => out.all("value", &clause.values),
            Self::Over(over) => match over {
                OverClause::Named(name) => out.push("name", Node::Identifier(name)),
                OverClause::Window(window) => out.push("window", Node::WindowExpression(window)),
            },
            Self::WindowExpression(window) => {
                out.opt("partition", window.partition.as_ref());
                out.opt("order", window.order.as_ref());
                out.opt("frame", window.frame.as_ref());
            }
            Self::WindowFrameSpec(frame) => {
                let bounds = [("start", Some(&frame.start)), ("end", frame.end.as_ref())];
                for (role, bound) in bounds {
                    if let Some(FrameBound::Preceding(offset) | FrameBound::Following(offset)) =
                        bound
                    {
                        out.push(role, (&**offset).into());
                    }
                }
            }
            Self::WindowFrame(frame) => {
                out.push("name", Node::Identifier(&frame.name));
                out.push("expression", Node::WindowExpression(&frame.expression));
            }
            Self::Window(clause) => {
                for window in &clause.windows {
                    out.push("window", Node::WindowFrame(window));
                }
            }
            Self::With(clause) => {
                for table in &clause.tables {
                    out.push("table", Node::CommonTable(table));
                }
            }
            Self::CommonTable(table) => {
                out.push("alias", Node::SourceAlias(&table.alias));
                out.push("query", (&*table.query).into());
            }
            Self::Fetch(clause) => out.opt("count", clause.count.as_ref()),
            Self::Limit(clause) => {
                out.opt("limit", clause.limit.as_ref());
                out.opt("offset", clause.offset.as_ref());
            }
            Self::SimpleQuery(query) => {
                out.opt("with", query.with.as_ref());
                out.push("select", Node::Select(&query.select));
                out.opt("from", query.from.as_ref());
                out.opt("where", query.where_clause.as_ref());
                out.opt("group_by", query.group_by.as_ref());
                out.opt("having", query.having.as_ref());
                out.opt("window", query.window.as_ref());
                out.opt("order_by", query.order_by.as_ref());
                out.opt("limit", query.limit.as_ref());
                out.opt("fetch", query.fetch.as_ref());
                out.opt("for", query.for_clause.as_ref());
            }
            Self::BinaryQuery(query) => {
                out.push("left", (&*query.left).into());
                out.push("operator", Node::Raw(&query.operator));
                out.push("right", (&*query.right).into());
            }
            Self::ValuesQuery(query) => {
                for tuple in &query.tuples {
                    out.push("tuple", Node::Tuple(tuple));
                }
            }
        }
        out.0
    }
}

/// Collects named children.
#[derive(Default)]
struct Children<'a>(Vec<(&'static str, Node<'a>)>);

impl<'a> Children<'a> {
    fn push(&mut self, role: &'static str, node: Node<'a>) {
        self.0.push((role, node));
    }

    fn opt<T: AstNode>(&mut self, role: &'static str, node: Option<&'a T>) {
        if let Some(node) = node {
            self.push(role, node.as_node());
        }
    }

    fn all<T: AstNode>(&mut self, role: &'static str, nodes: &'a [T]) {
        for node in nodes {
            self.push(role, node.as_node());
        }
    }
}

impl<'a> From<&'a ValueExpr> for Node<'a> {
    fn from(value: &'a ValueExpr) -> Self {
        match value {
            ValueExpr::Literal(v) => Self::Literal(v),
            ValueExpr::Raw(v) => Self::Raw(v),
            ValueExpr::Column(v) => Self::Column(v),
            ValueExpr::Function(v) => Self::Function(v),
            ValueExpr::Unary(v) => Self::Unary(v),
            ValueExpr::Binary(v) => Self::Binary(v),
            ValueExpr::Parameter(v) => Self::Parameter(v),
            ValueExpr::Array(v) => Self::Array(v),
            ValueExpr::Tuple(v) => Self::Tuple(v),
            ValueExpr::List(v) => Self::ValueList(v),
            ValueExpr::Case(v) => Self::Case(v),
            ValueExpr::Cast(v) => Self::Cast(v),
            ValueExpr::Paren(v) => Self::Paren(v),
            ValueExpr::Between(v) => Self::Between(v),
            ValueExpr::Type(v) => Self::Type(v),
            ValueExpr::StringSpecifier(v) => Self::StringSpecifier(v),
            ValueExpr::InlineQuery(v) => Self::InlineQuery(v),
        }
    }
}

impl<'a> From<&'a SelectQuery> for Node<'a> {
    fn from(query: &'a SelectQuery) -> Self {
        match query {
            SelectQuery::Simple(q) => Self::SimpleQuery(q),
            SelectQuery::Binary(q) => Self::BinaryQuery(q),
            SelectQuery::Values(q) => Self::ValuesQuery(q),
        }
    }
}

impl<'a> From<&'a DataSource> for Node<'a> {
    fn from(source: &'a DataSource) -> Self {
        match source {
            DataSource::Table(table) => Self::Table(table),
            DataSource::SubQuery(query) => (&**query).into(),
            DataSource::Function(function) => Self::Function(function),
        }
    }
}

/// Receives nodes during traversal.
pub trait Visitor {
    /// The result of visiting one node.
    type Output;

    /// Handles one node.
    fn visit(&mut self, node: Node<'_>) -> Self::Output;
}

/// The traversal contract shared by every AST node type.
pub trait AstNode {
    /// Returns the borrowed view of this node.
    fn as_node(&self) -> Node<'_>;

    /// Returns the kind tag of this node.
    fn kind(&self) -> NodeKind {
        self.as_node().kind()
    }

    /// Dispatches this node to `visitor`.
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit(self.as_node())
    }

    /// Returns the direct children, each with its role name.
    fn children(&self) -> Vec<(&'static str, Node<'_>)> {
        self.as_node().children()
    }
}

impl AstNode for Node<'_> {
    fn as_node(&self) -> Node<'_> {
        *self
    }
}

macro_rules! impl_ast_node {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl AstNode for $ty {
                fn as_node(&self) -> Node<'_> {
                    Node::$variant(self)
                }
            }
        )+
    };
}

impl_ast_node!(
    LiteralValue => Literal,
    RawString => Raw,
    IdentifierString => Identifier,
    ColumnReference => Column,
    FunctionCall => Function,
    UnaryExpression => Unary,
    BinaryExpression => Binary,
    ParameterExpression => Parameter,
    ArrayExpression => Array,
    TupleExpression => Tuple,
    ValueList => ValueList,
    CaseExpression => Case,
    SwitchCaseArgument => SwitchCase,
    CaseKeyValuePair => CaseKeyValue,
    CastExpression => Cast,
    ParenExpression => Paren,
    BetweenExpression => Between,
    TypeValue => Type,
    StringSpecifierExpression => StringSpecifier,
    InlineQuery => InlineQuery,
    SelectClause => Select,
    SelectItem => SelectItem,
    Distinct => Distinct,
    FromClause => From,
    JoinClause => Join,
    SourceExpression => Source,
    TableSource => Table,
    SourceAlias => SourceAlias,
    WhereClause => Where,
    GroupByClause => GroupBy,
    HavingClause => Having,
    OrderByClause => OrderBy,
    OrderByItem => OrderByItem,
    PartitionByClause => PartitionBy,
    OverClause => Over,
    WindowExpression => WindowExpression,
    WindowFrameSpec => WindowFrameSpec,
    WindowFrameClause => WindowFrame,
    WindowClause => Window,
    WithClause => With,
    CommonTable => CommonTable,
    LimitClause => Limit,
    FetchClause => Fetch,
    ForClause => For,
    SimpleSelectQuery => SimpleQuery,
    BinarySelectQuery => BinaryQuery,
    ValuesQuery => ValuesQuery,
);

impl AstNode for ValueExpr {
    fn as_node(&self) -> Node<'_> {
        self.into()
    }
}

impl AstNode for SelectQuery {
    fn as_node(&self) -> Node<'_> {
        self.into()
    }
}

impl AstNode for DataSource {
    fn as_node(&self) -> Node<'_> {
        self.into()
    }
}

/// Calls `f` on `node` and every node below it, parents first.
pub fn walk<'a>(node: Node<'a>, f: &mut impl FnMut(Node<'a>)) {
    f(node);
    for (_, child) in node.children() {
        walk(child, f);
    }
}
