//! SQL formatter.
//!
//! [`Formatter`] turns any AST node back into SQL text: lowercase
//! keywords, single spaces and `, ` separators. Identifier quoting and
//! parameter markers follow a [`DialectConfig`].

mod config;

pub use config::{DialectConfig, IdentifierEscape, ParameterStyle, QuotePolicy};

use crate::ast::{
    ArrayExpression, AstNode, BetweenExpression, BinaryExpression, BinarySelectQuery,
    CaseExpression, CastExpression, ColumnReference, CommonTable, DataSource, Distinct,
    FetchClause, FrameBound, FromClause, FunctionCall, IdentifierString, JoinClause,
    JoinCondition, LimitClause, LiteralValue, Node, OrderByItem, OverClause, ParameterExpression,
    RawString, SelectClause, SelectItem, SelectQuery, SimpleSelectQuery, SortDirection,
    SourceAlias, SourceExpression, StringSpecifierExpression, SwitchCaseArgument, TypeValue,
    UnaryExpression, ValueExpr, ValuesQuery, Visitor, WindowFrameClause, WindowFrameSpec,
    WithClause,
};
use crate::lexer::{is_reserved, phrase_status};

/// Default limit for nested nodes while formatting.
///
/// Every visited node counts one level, so this comfortably covers any
/// tree the parser accepts with its own default limit.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// An AST that cannot be written as SQL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A keyword or operator is a punctuation value.
    #[error("Invalid keyword: `{0}`")]
    InvalidKeyword(String),

    /// A keyword or operator is blank.
    #[error("Invalid keyword: empty string")]
    EmptyKeyword,

    /// A named window neither partitions nor orders rows.
    #[error("Window `{name}` needs `partition by` or `order by`")]
    IncompleteWindowFrame {
        /// The window name.
        name: String,
    },

    /// The tree is nested deeper than the formatter's limit.
    #[error("Nesting deeper than {depth} levels")]
    NestingTooDeep {
        /// The configured limit.
        depth: usize,
    },
}

/// Values a [`RawString`] may not hold.
const INVALID_KEYWORDS: &[&str] = &["'", "\"", ",", ";", ":", ".", "--", "/*"];

/// Specifiers written directly against the quote (`e'..'`).
const STRING_PREFIXES: &[&str] = &["e", "x", "b", "u&"];

/// Formats AST nodes under a dialect configuration.
#[derive(Debug, Clone)]
pub struct Formatter {
    config: DialectConfig,
    max_depth: usize,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DialectConfig::default())
    }
}

impl Formatter {
    /// Creates a formatter.
    #[must_use]
    pub const fn new(config: DialectConfig) -> Self {
        Self {
            config,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &DialectConfig {
        &self.config
    }

    /// Formats a node and everything below it.
    pub fn format<N: AstNode + ?Sized>(&self, node: &N) -> Result<String, FormatError> {
        let mut renderer = Renderer {
            config: &self.config,
            depth: 0,
            max_depth: self.max_depth,
        };
        let sql = renderer.visit(node.as_node())?;
        tracing::debug!(kind = %node.kind(), length = sql.len(), "formatted node");
        Ok(sql)
    }
}

/// Returns true if `name` reads back as the same bare identifier.
fn is_bare_word(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Returns true if `name` must be quoted to stay an identifier.
fn needs_quoting(name: &str) -> bool {
    if !is_bare_word(name) {
        return true;
    }
    let (complete, extendable) = phrase_status(&name.to_ascii_lowercase());
    complete || extendable
}

/// Returns true if a function name must be quoted to stay a call.
///
/// A phrase prefix such as `left` is still read as a name before `(`, so
/// only reserved words need quotes.
fn function_needs_quoting(name: &str) -> bool {
    !is_bare_word(name) || is_reserved(&name.to_ascii_lowercase())
}

/// The visitor behind [`Formatter`].
///
/// Each node kind has its own method so that one level of nesting costs
/// only a few small stack frames.
struct Renderer<'c> {
    config: &'c DialectConfig,
    depth: usize,
    max_depth: usize,
}

type Rendered = Result<String, FormatError>;

impl Renderer<'_> {
    fn value(&mut self, value: &ValueExpr) -> Rendered {
        self.visit(value.into())
    }

    fn query(&mut self, query: &SelectQuery) -> Rendered {
        self.visit(query.into())
    }

    fn join<'n>(&mut self, nodes: impl IntoIterator<Item = Node<'n>>, separator: &str) -> Rendered {
        let parts = nodes
            .into_iter()
            .map(|node| self.visit(node))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.join(separator))
    }

    fn values(&mut self, values: &[ValueExpr]) -> Rendered {
        self.join(values.iter().map(Node::from), ", ")
    }

    /// Writes `keyword value`.
    fn keyword_value(&mut self, keyword: &str, value: &ValueExpr) -> Rendered {
        Ok(format!("{keyword} {}", self.value(value)?))
    }

    fn raw(raw: &RawString) -> Rendered {
        let value = raw.as_str().trim();
        if value.is_empty() {
            return Err(FormatError::EmptyKeyword);
        }
        if INVALID_KEYWORDS.contains(&value) {
            return Err(FormatError::InvalidKeyword(value.to_string()));
        }
        Ok(value.to_string())
    }

    fn quote(&self, name: &str) -> String {
        let escape = &self.config.identifier_escape;
        let doubled = format!("{}{}", escape.end, escape.end);
        format!(
            "{}{}{}",
            escape.start,
            name.replace(escape.end.as_str(), &doubled),
            escape.end
        )
    }

    fn identifier(&self, identifier: &IdentifierString) -> String {
        let name = identifier.as_str();
        if identifier.is_wildcard() {
            return name.to_string();
        }
        match self.config.quote_policy {
            QuotePolicy::Always => self.quote(name),
            QuotePolicy::WhenNeeded if needs_quoting(name) => self.quote(name),
            QuotePolicy::WhenNeeded => name.to_string(),
        }
    }

    fn identifiers(&self, identifiers: &[IdentifierString]) -> String {
        let names: Vec<String> = identifiers.iter().map(|i| self.identifier(i)).collect();
        names.join(", ")
    }

    fn qualified(&self, namespaces: &[IdentifierString], leaf: String) -> String {
        let mut parts: Vec<String> = namespaces.iter().map(|n| self.identifier(n)).collect();
        parts.push(leaf);
        parts.join(".")
    }

    fn literal(literal: &LiteralValue) -> String {
        match literal {
            LiteralValue::Number(number) => number.clone(),
            LiteralValue::String(text) => format!("'{}'", text.replace('\'', "''")),
            LiteralValue::Boolean(value) => value.to_string(),
            LiteralValue::Null => "null".to_string(),
        }
    }

    fn column(&self, column: &ColumnReference) -> String {
        let leaf = self.identifier(&column.column);
        self.qualified(&column.namespaces, leaf)
    }

    fn function(&mut self, function: &FunctionCall) -> Rendered {
        let raw = Self::raw(&function.name)?;
        let name = if function_needs_quoting(&raw) {
            self.quote(&raw)
        } else {
            raw
        };
        let name = self.qualified(&function.namespaces, name);

        let argument = match function.argument.as_deref() {
            Some(ValueExpr::InlineQuery(inline)) => self.query(&inline.query)?,
            Some(argument) => self.value(argument)?,
            None => String::new(),
        };

        match function.over.as_deref() {
            Some(over) => {
                let over = self.visit(Node::Over(over))?;
                Ok(format!("{name}({argument}) {over}"))
            }
            None => Ok(format!("{name}({argument})")),
        }
    }

    fn unary(&mut self, unary: &UnaryExpression) -> Rendered {
        let operator = Self::raw(&unary.operator)?;
        let operand = self.value(&unary.expression)?;
        let keyword = operator.starts_with(|c: char| c.is_ascii_alphabetic());
        if keyword || operand.starts_with(['-', '+']) {
            Ok(format!("{operator} {operand}"))
        } else {
            Ok(format!("{operator}{operand}"))
        }
    }

    fn binary(&mut self, binary: &BinaryExpression) -> Rendered {
        let left = self.value(&binary.left)?;
        let operator = Self::raw(&binary.operator)?;
        let right = self.value(&binary.right)?;
        Ok(format!("{left} {operator} {right}"))
    }

    fn parameter(&self, parameter: &ParameterExpression) -> String {
        match self.config.parameter_style {
            ParameterStyle::Named => format!("{}{}", self.config.parameter_symbol, parameter.name),
            ParameterStyle::Anonymous => "?".to_string(),
        }
    }

    fn array(&mut self, array: &ArrayExpression) -> Rendered {
        match array.expression.as_ref() {
            ValueExpr::InlineQuery(inline) => Ok(format!("array({})", self.query(&inline.query)?)),
            expression => Ok(format!("array[{}]", self.value(expression)?)),
        }
    }

    fn parenthesized_values(&mut self, values: &[ValueExpr]) -> Rendered {
        Ok(format!("({})", self.values(values)?))
    }

    fn case(&mut self, case: &CaseExpression) -> Rendered {
        let switch = self.visit(Node::SwitchCase(&case.switch))?;
        match &case.condition {
            Some(condition) => Ok(format!("case {} {switch} end", self.value(condition)?)),
            None => Ok(format!("case {switch} end")),
        }
    }

    fn switch_case(&mut self, switch: &SwitchCaseArgument) -> Rendered {
        let cases = self.join(switch.cases.iter().map(Node::CaseKeyValue), " ")?;
        match &switch.else_value {
            Some(value) => Ok(format!("{cases} else {}", self.value(value)?)),
            None => Ok(cases),
        }
    }

    fn case_pair(&mut self, key: &ValueExpr, value: &ValueExpr) -> Rendered {
        let key = self.value(key)?;
        let value = self.value(value)?;
        Ok(format!("when {key} then {value}"))
    }

    fn cast(&mut self, cast: &CastExpression) -> Rendered {
        let input = self.value(&cast.input)?;
        let cast_type = self.visit(Node::Type(&cast.cast_type))?;
        if cast.input.is_primary() {
            Ok(format!("{input}::{cast_type}"))
        } else {
            Ok(format!("cast({input} as {cast_type})"))
        }
    }

    fn paren(&mut self, expression: &ValueExpr) -> Rendered {
        Ok(format!("({})", self.value(expression)?))
    }

    fn between(&mut self, between: &BetweenExpression) -> Rendered {
        let expression = self.value(&between.expression)?;
        let lower = self.value(&between.lower)?;
        let upper = self.value(&between.upper)?;
        let keyword = if between.negated {
            "not between"
        } else {
            "between"
        };
        Ok(format!("{expression} {keyword} {lower} and {upper}"))
    }

    fn type_value(&mut self, type_value: &TypeValue) -> Rendered {
        let name = Self::raw(&type_value.name)?;
        match &type_value.argument {
            Some(argument) => Ok(format!("{name}({})", self.value(argument)?)),
            None => Ok(name),
        }
    }

    fn string_specifier(spec: &StringSpecifierExpression) -> Rendered {
        let specifier = Self::raw(&spec.specifier)?;
        let value = Self::literal(&spec.value);
        if STRING_PREFIXES.contains(&specifier.to_ascii_lowercase().as_str()) {
            Ok(format!("{specifier}{value}"))
        } else {
            Ok(format!("{specifier} {value}"))
        }
    }

    fn inline_query(&mut self, query: &SelectQuery) -> Rendered {
        Ok(format!("({})", self.query(query)?))
    }

    fn select(&mut self, select: &SelectClause) -> Rendered {
        let items = self.join(select.items.iter().map(Node::SelectItem), ", ")?;
        match &select.distinct {
            Some(distinct) => {
                let distinct = self.visit(Node::Distinct(distinct))?;
                Ok(format!("select {distinct} {items}"))
            }
            None => Ok(format!("select {items}")),
        }
    }

    fn select_item(&mut self, item: &SelectItem) -> Rendered {
        let value = self.value(&item.value)?;
        match item.effective_alias() {
            Some(alias) => Ok(format!("{value} as {}", self.identifier(alias))),
            None => Ok(value),
        }
    }

    fn distinct(&mut self, distinct: &Distinct) -> Rendered {
        match distinct {
            Distinct::Distinct => Ok("distinct".to_string()),
            Distinct::DistinctOn(list) => {
                Ok(format!("distinct on ({})", self.values(&list.values)?))
            }
        }
    }

    fn from(&mut self, from: &FromClause) -> Rendered {
        let mut sql = format!("from {}", self.visit(Node::Source(&from.source))?);
        for join in &from.joins {
            sql.push(' ');
            sql.push_str(&self.visit(Node::Join(join))?);
        }
        Ok(sql)
    }

    fn join_clause(&mut self, join: &JoinClause) -> Rendered {
        let mut sql = Self::raw(&join.join_type)?;
        if join.lateral {
            sql.push_str(" lateral");
        }
        sql.push(' ');
        sql.push_str(&self.visit(Node::Source(&join.source))?);
        match &join.condition {
            Some(JoinCondition::On(condition)) => {
                sql.push_str(" on ");
                sql.push_str(&self.value(condition)?);
            }
            Some(JoinCondition::Using(columns)) => {
                sql.push_str(" using (");
                sql.push_str(&self.identifiers(columns));
                sql.push(')');
            }
            None => {}
        }
        Ok(sql)
    }

    fn source(&mut self, source: &SourceExpression) -> Rendered {
        let datasource = match &source.datasource {
            DataSource::Table(table) => {
                let leaf = self.identifier(&table.table);
                self.qualified(&table.namespaces, leaf)
            }
            DataSource::SubQuery(query) => self.inline_query(query)?,
            DataSource::Function(function) => self.function(function)?,
        };
        match source.effective_alias() {
            Some(alias) => Ok(format!("{datasource} as {}", self.source_alias(alias))),
            None => Ok(datasource),
        }
    }

    fn source_alias(&self, alias: &SourceAlias) -> String {
        let name = self.identifier(&alias.name);
        if alias.columns.is_empty() {
            name
        } else {
            format!("{name}({})", self.identifiers(&alias.columns))
        }
    }

    fn order_by_item(&mut self, item: &OrderByItem) -> Rendered {
        let mut sql = self.value(&item.value)?;
        if item.direction != SortDirection::Asc {
            sql.push(' ');
            sql.push_str(item.direction.as_str());
        }
        if let Some(nulls) = item.nulls {
            sql.push(' ');
            sql.push_str(nulls.as_str());
        }
        Ok(sql)
    }

    fn over(&mut self, over: &OverClause) -> Rendered {
        match over {
            OverClause::Named(name) => Ok(format!("over {}", self.identifier(name))),
            OverClause::Window(window) => Ok(format!(
                "over({})",
                self.visit(Node::WindowExpression(window))?
            )),
        }
    }

    fn frame_bound(&mut self, bound: &FrameBound) -> Rendered {
        Ok(match bound {
            FrameBound::UnboundedPreceding => "unbounded preceding".to_string(),
            FrameBound::UnboundedFollowing => "unbounded following".to_string(),
            FrameBound::CurrentRow => "current row".to_string(),
            FrameBound::Preceding(offset) => format!("{} preceding", self.value(offset)?),
            FrameBound::Following(offset) => format!("{} following", self.value(offset)?),
        })
    }

    fn frame_spec(&mut self, frame: &WindowFrameSpec) -> Rendered {
        let start = self.frame_bound(&frame.start)?;
        match &frame.end {
            Some(end) => Ok(format!(
                "{} between {start} and {}",
                frame.frame_type.as_str(),
                self.frame_bound(end)?
            )),
            None => Ok(format!("{} {start}", frame.frame_type.as_str())),
        }
    }

    fn window_frame(&mut self, frame: &WindowFrameClause) -> Rendered {
        if !frame.expression.has_bounds() {
            return Err(FormatError::IncompleteWindowFrame {
                name: frame.name.as_str().to_string(),
            });
        }
        Ok(format!(
            "{} as ({})",
            self.identifier(&frame.name),
            self.visit(Node::WindowExpression(&frame.expression))?
        ))
    }

    fn with(&mut self, with: &WithClause) -> Rendered {
        let tables = self.join(with.tables.iter().map(Node::CommonTable), ", ")?;
        if with.recursive {
            Ok(format!("with recursive {tables}"))
        } else {
            Ok(format!("with {tables}"))
        }
    }

    fn common_table(&mut self, table: &CommonTable) -> Rendered {
        let alias = self.source_alias(&table.alias);
        let query = self.query(&table.query)?;
        match table.materialized {
            Some(true) => Ok(format!("{alias} as materialized ({query})")),
            Some(false) => Ok(format!("{alias} as not materialized ({query})")),
            None => Ok(format!("{alias} as ({query})")),
        }
    }

    fn limit(&mut self, limit: &LimitClause) -> Rendered {
        let mut parts = Vec::new();
        if let Some(count) = &limit.limit {
            parts.push(self.keyword_value("limit", count)?);
        }
        if let Some(offset) = &limit.offset {
            parts.push(self.keyword_value("offset", offset)?);
        }
        Ok(parts.join(" "))
    }

    fn fetch(&mut self, fetch: &FetchClause) -> Rendered {
        let mut parts = vec!["fetch".to_string(), fetch.position.as_str().to_string()];
        if let Some(count) = &fetch.count {
            parts.push(self.value(count)?);
        }
        parts.push(fetch.unit.as_str().to_string());
        Ok(parts.join(" "))
    }

    /// Joins the present parts with single spaces.
    fn clauses<'n>(&mut self, nodes: impl IntoIterator<Item = Option<Node<'n>>>) -> Rendered {
        let mut parts = Vec::new();
        for node in nodes.into_iter().flatten() {
            let part = self.visit(node)?;
            if !part.is_empty() {
                parts.push(part);
            }
        }
        Ok(parts.join(" "))
    }

    fn simple_query(&mut self, query: &SimpleSelectQuery) -> Rendered {
        self.clauses([
            query.with.as_ref().map(Node::With),
            Some(Node::Select(&query.select)),
            query.from.as_ref().map(Node::From),
            query.where_clause.as_ref().map(Node::Where),
            query.group_by.as_ref().map(Node::GroupBy),
            query.having.as_ref().map(Node::Having),
            query.window.as_ref().map(Node::Window),
            query.order_by.as_ref().map(Node::OrderBy),
            query.limit.as_ref().map(Node::Limit),
            query.fetch.as_ref().map(Node::Fetch),
            query.for_clause.as_ref().map(Node::For),
        ])
    }

    fn binary_query(&mut self, query: &BinarySelectQuery) -> Rendered {
        let left = self.query(&query.left)?;
        let operator = Self::raw(&query.operator)?;
        let right = self.query(&query.right)?;
        Ok(format!("{left} {operator} {right}"))
    }

    fn values_query(&mut self, query: &ValuesQuery) -> Rendered {
        let tuples = self.join(query.tuples.iter().map(Node::Tuple), ", ")?;
        Ok(format!("values {tuples}"))
    }

    /// Dispatches one node to its handler.
    fn render(&mut self, node: Node<'_>) -> Rendered {
        match node {
            Node::Literal(literal) => Ok(Self::literal(literal)),
            Node::Raw(raw) => Self::raw(raw),
            Node::Identifier(identifier) => Ok(self.identifier(identifier)),
            Node::Column(column) => Ok(self.column(column)),
            Node::Function(function) => self.function(function),
            Node::Unary(unary) => self.unary(unary),
            Node::Binary(binary) => self.binary(binary),
            Node::Parameter(parameter) => Ok(self.parameter(parameter)),
            Node::Array(array) => self.array(array),
            Node::Tuple(tuple) => self.parenthesized_values(&tuple.values),
            Node::ValueList(list) => self.values(&list.values),
            Node::Case(case) => self.case(case),
            Node::SwitchCase(switch) => self.switch_case(switch),
            Node::CaseKeyValue(pair) => self.case_pair(&pair.key, &pair.value),
            Node::Cast(cast) => self.cast(cast),
            Node::Paren(paren) => self.paren(&paren.expression),
            Node::Between(between) => self.between(between),
            Node::Type(type_value) => self.type_value(type_value),
            Node::StringSpecifier(spec) => Self::string_specifier(spec),
            Node::InlineQuery(inline) => self.inline_query(&inline.query),
            Node::Select(select) => self.select(select),
            Node::SelectItem(item) => self.select_item(item),
            Node::Distinct(distinct) => self.distinct(distinct),
            Node::From(from) => self.from(from),
            Node::Join(join) => self.join_clause(join),
            Node::Source(source) => self.source(source),
            Node::Table(table) => {
                let leaf = self.identifier(&table.table);
                Ok(self.qualified(&table.namespaces, leaf))
            }
            Node::SourceAlias(alias) => Ok(self.source_alias(alias)),
            Node::Where(clause) => self.keyword_value("where", &clause.condition),
            Node::GroupBy(clause) => Ok(format!("group by {}", self.values(&clause.items)?)),
            Node::Having(clause) => self.keyword_value("having", &clause.condition),
            Node::OrderBy(clause) => Ok(format!(
                "order by {}",
                self.join(clause.items.iter().map(Node::OrderByItem), ", ")?
            )),
            Node::OrderByItem(item) => self.order_by_item(item),
            Node::PartitionBy(clause) => {
                Ok(format!("partition by {}", self.values(&clause.values)?))
            }
            Node::Over(over) => self.over(over),
            Node::WindowExpression(window) => self.clauses([
                window.partition.as_ref().map(Node::PartitionBy),
                window.order.as_ref().map(Node::OrderBy),
                window.frame.as_ref().map(Node::WindowFrameSpec),
            ]),
            Node::WindowFrameSpec(frame) => self.frame_spec(frame),
            Node::WindowFrame(frame) => self.window_frame(frame),
            Node::Window(clause) => Ok(format!(
                "window {}",
                self.join(clause.windows.iter().map(Node::WindowFrame), ", ")?
            )),
            Node::With(with) => self.with(with),
            Node::CommonTable(table) => self.common_table(table),
            Node::Limit(limit) => self.limit(limit),
            Node::Fetch(fetch) => self.fetch(fetch),
            Node::For(clause) => Ok(format!("for {}", clause.lock_mode.as_str())),
            Node::SimpleQuery(query) => self.simple_query(query),
            Node::BinaryQuery(query) => self.binary_query(query),
            Node::ValuesQuery(query) => self.values_query(query),
        }
    }
}

impl Visitor for Renderer<'_> {
    type Output = Rendered;

    fn visit(&mut self, node: Node<'_>) -> Rendered {
        if self.depth >= self.max_depth {
            return Err(FormatError::NestingTooDeep {
                depth: self.max_depth,
            });
        }
        self.depth += 1;
        let result = self.render(node);
        self.depth -= 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        ColumnReference, SelectClause, SelectItem, SimpleSelectQuery, UnaryExpression,
        WindowClause, WindowExpression, WindowFrameClause,
    };
    use crate::parser::Parser;

    fn fmt(sql: &str) -> String {
        let query = Parser::parse_sql(sql).unwrap();
        Formatter::default().format(&query).unwrap()
    }

    #[test]
    fn test_quoting_when_needed() {
        assert!(!needs_quoting("users"));
        assert!(!needs_quoting("User_1$"));
        assert!(needs_quoting("select"));
        assert!(needs_quoting("group"));
        assert!(needs_quoting("1abc"));
        assert!(needs_quoting("first name"));
        assert!(needs_quoting(""));
    }

    #[test]
    fn test_function_name_quoting() {
        assert!(!function_needs_quoting("left"));
        assert!(!function_needs_quoting("coalesce"));
        assert!(function_needs_quoting("values"));
        assert!(function_needs_quoting("Select"));
        assert!(function_needs_quoting("my func"));
    }

    #[test]
    fn test_quote_doubles_closing_delimiter() {
        let config = DialectConfig::default().with_identifier_escape("[", "]");
        let renderer = Renderer {
            config: &config,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        };
        assert_eq!(renderer.quote("a]b"), "[a]]b]");
    }

    #[test]
    fn test_keywords_are_lowercased() {
        assert_eq!(
            fmt("SELECT DISTINCT a FROM t WHERE b IS NOT NULL ORDER BY a DESC NULLS LAST"),
            "select distinct a from t where b is not null order by a desc nulls last"
        );
    }

    #[test]
    fn test_unary_spacing() {
        assert_eq!(fmt("select -a, not b, - -1"), "select -a, not b, - -1");
    }

    #[test]
    fn test_cast_forms() {
        assert_eq!(fmt("select cast(a as int)"), "select a::int");
        assert_eq!(fmt("select cast(a + 1 as int)"), "select cast(a + 1 as int)");
    }

    #[test]
    fn test_over_forms() {
        assert_eq!(
            fmt("select row_number() OVER (PARTITION BY a ORDER BY b) from t"),
            "select row_number() over(partition by a order by b) from t"
        );
        assert_eq!(
            fmt("select sum(x) over w from t window w as (order by y)"),
            "select sum(x) over w from t window w as (order by y)"
        );
    }

    #[test]
    fn test_parameter_styles() {
        let query = Parser::parse_sql("select :id, ?").unwrap();
        assert_eq!(Formatter::default().format(&query).unwrap(), "select :id, :1");
        let anonymous = DialectConfig::default().with_parameter_style(ParameterStyle::Anonymous);
        assert_eq!(
            Formatter::new(anonymous).format(&query).unwrap(),
            "select ?, ?"
        );
    }

    #[test]
    fn test_invalid_raw_strings() {
        let value = ValueExpr::Unary(UnaryExpression {
            operator: RawString::new(";"),
            expression: Box::new(ValueExpr::column("a")),
        });
        assert_eq!(
            Formatter::default().format(&value),
            Err(FormatError::InvalidKeyword(";".to_string()))
        );
        let value = ValueExpr::binary(ValueExpr::column("a"), "  ", ValueExpr::column("b"));
        assert_eq!(Formatter::default().format(&value), Err(FormatError::EmptyKeyword));
    }

    #[test]
    fn test_hand_built_empty_window_is_rejected() {
        let mut query = SimpleSelectQuery::new(SelectClause {
            distinct: None,
            items: vec![SelectItem::new(ValueExpr::Column(ColumnReference::wildcard()))],
        });
        query.window = Some(WindowClause {
            windows: vec![WindowFrameClause {
                name: IdentifierString::new("w"),
                expression: WindowExpression::default(),
            }],
        });
        let err = Formatter::default().format(&SelectQuery::from(query)).unwrap_err();
        assert_eq!(
            err,
            FormatError::IncompleteWindowFrame {
                name: "w".to_string()
            }
        );
    }

    #[test]
    fn test_depth_limit() {
        let query = Parser::parse_sql("select ((1))").unwrap();
        // SimpleQuery, Select, SelectItem, two parens and the literal.
        assert!(Formatter::default().with_max_depth(6).format(&query).is_ok());
        assert_eq!(
            Formatter::default().with_max_depth(5).format(&query),
            Err(FormatError::NestingTooDeep { depth: 5 })
        );
    }
}
