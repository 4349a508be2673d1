//! Value expression AST types.

use serde::Serialize;

use super::clause::OverClause;
use super::query::SelectQuery;

/// A bare keyword or operator kept verbatim (`and`, `::`, `left join`).
///
/// Validity is only checked when the node is formatted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RawString(pub String);

impl RawString {
    /// Creates a raw keyword.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the keyword text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An unquoted identifier name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IdentifierString(pub String);

impl IdentifierString {
    /// Creates an identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the `*` wildcard.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.0 == "*"
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum LiteralValue {
    /// Numeric literal, kept as written (`-1`, `0.5`, `0xff`).
    Number(String),
    /// String literal, unescaped.
    String(String),
    /// `true` or `false`.
    Boolean(bool),
    /// `null`.
    Null,
}

/// A possibly qualified column name (`a.b.c`, `t.*`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnReference {
    /// Qualifier segments, outermost first.
    pub namespaces: Vec<IdentifierString>,
    /// The column name, or `*`.
    pub column: IdentifierString,
}

impl ColumnReference {
    /// Creates an unqualified column reference.
    #[must_use]
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            namespaces: Vec::new(),
            column: IdentifierString::new(column),
        }
    }

    /// Creates a qualified column reference.
    #[must_use]
    pub fn qualified(namespaces: &[&str], column: impl Into<String>) -> Self {
        Self {
            namespaces: namespaces.iter().map(|ns| IdentifierString::new(*ns)).collect(),
            column: IdentifierString::new(column),
        }
    }

    /// Returns the bare `*` wildcard.
    #[must_use]
    pub fn wildcard() -> Self {
        Self::new("*")
    }
}

/// A function call with an optional argument and window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionCall {
    /// Schema qualifiers of the function name.
    pub namespaces: Vec<IdentifierString>,
    /// The function name.
    pub name: RawString,
    /// The argument: a single value, a [`ValueList`], `*` or a query.
    pub argument: Option<Box<ValueExpr>>,
    /// The `over` clause of a window function.
    pub over: Option<Box<OverClause>>,
}

/// A prefix operator applied to an operand (`-x`, `not x`, `distinct x`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryExpression {
    /// The operator or keyword.
    pub operator: RawString,
    /// The operand.
    pub expression: Box<ValueExpr>,
}

/// A binary operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryExpression {
    /// Left operand.
    pub left: Box<ValueExpr>,
    /// The operator or keyword (`+`, `and`, `not like`).
    pub operator: RawString,
    /// Right operand.
    pub right: Box<ValueExpr>,
}

/// A bind parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterExpression {
    /// Parameter name without its marker; anonymous parameters carry their ordinal.
    pub name: String,
}

/// `array[..]` or `array(query)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayExpression {
    /// A [`ValueList`] for the bracket form, an inline query otherwise.
    pub expression: Box<ValueExpr>,
}

/// A parenthesized list of values, as used by `in (..)` and `values`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TupleExpression {
    /// The elements.
    pub values: Vec<ValueExpr>,
}

/// Comma separated values without surrounding punctuation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueList {
    /// The elements.
    pub values: Vec<ValueExpr>,
}

/// A `case` expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseExpression {
    /// The subject of a simple case (`case x when ..`).
    pub condition: Option<Box<ValueExpr>>,
    /// The branches.
    pub switch: SwitchCaseArgument,
}

/// The `when` branches and `else` value of a case expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwitchCaseArgument {
    /// `when key then value` pairs, in order.
    pub cases: Vec<CaseKeyValuePair>,
    /// The `else` value.
    pub else_value: Option<Box<ValueExpr>>,
}

/// One `when .. then ..` branch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseKeyValuePair {
    /// The condition or compared value.
    pub key: ValueExpr,
    /// The result.
    pub value: ValueExpr,
}

/// `cast(x as type)` or `x::type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CastExpression {
    /// The value being converted.
    pub input: Box<ValueExpr>,
    /// The target type.
    pub cast_type: TypeValue,
}

/// A parenthesized expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParenExpression {
    /// The inner expression.
    pub expression: Box<ValueExpr>,
}

/// `x [not] between lower and upper`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BetweenExpression {
    /// The tested value.
    pub expression: Box<ValueExpr>,
    /// Lower bound.
    pub lower: Box<ValueExpr>,
    /// Upper bound.
    pub upper: Box<ValueExpr>,
    /// True for `not between`.
    pub negated: bool,
}

/// A type name with an optional argument (`numeric(10, 2)`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeValue {
    /// The type name, lowercase, possibly several words.
    pub name: RawString,
    /// The type modifier list.
    pub argument: Option<Box<ValueExpr>>,
}

impl TypeValue {
    /// Creates a type without modifiers.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: RawString::new(name),
            argument: None,
        }
    }
}

/// A prefixed string constant (`e'..'`, `x'..'`, `b'..'`, `u&'..'`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringSpecifierExpression {
    /// The lowercase prefix.
    pub specifier: RawString,
    /// The unescaped string body.
    pub value: LiteralValue,
}

/// A sub-query used as a value or a source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineQuery {
    /// The query.
    pub query: Box<SelectQuery>,
}

/// Any value expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueExpr {
    /// Literal value.
    Literal(LiteralValue),
    /// Bare keyword.
    Raw(RawString),
    /// Column reference.
    Column(ColumnReference),
    /// Function call.
    Function(FunctionCall),
    /// Prefix operation.
    Unary(UnaryExpression),
    /// Binary operation.
    Binary(BinaryExpression),
    /// Bind parameter.
    Parameter(ParameterExpression),
    /// Array constructor.
    Array(ArrayExpression),
    /// Parenthesized value list.
    Tuple(TupleExpression),
    /// Bare value list.
    List(ValueList),
    /// Case expression.
    Case(CaseExpression),
    /// Type conversion.
    Cast(CastExpression),
    /// Parenthesized expression.
    Paren(ParenExpression),
    /// Range test.
    Between(BetweenExpression),
    /// Type name.
    Type(TypeValue),
    /// Prefixed string constant.
    StringSpecifier(StringSpecifierExpression),
    /// Sub-query.
    InlineQuery(InlineQuery),
}

impl ValueExpr {
    /// Creates a numeric literal.
    #[must_use]
    pub fn number(value: impl Into<String>) -> Self {
        Self::Literal(LiteralValue::Number(value.into()))
    }

    /// Creates a string literal from its unescaped content.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(LiteralValue::String(value.into()))
    }

    /// Creates an unqualified column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(ColumnReference::new(name))
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(left: Self, operator: impl Into<String>, right: Self) -> Self {
        Self::Binary(BinaryExpression {
            left: Box::new(left),
            operator: RawString::new(operator),
            right: Box::new(right),
        })
    }

    /// Creates a prefix expression.
    #[must_use]
    pub fn unary(operator: impl Into<String>, expression: Self) -> Self {
        Self::Unary(UnaryExpression {
            operator: RawString::new(operator),
            expression: Box::new(expression),
        })
    }

    /// Returns true for expressions that print as a single term, so that a
    /// postfix `::type` binds to all of them.
    #[must_use]
    pub const fn is_primary(&self) -> bool {
        matches!(
            self,
            Self::Literal(_)
                | Self::Column(_)
                | Self::Function(_)
                | Self::Parameter(_)
                | Self::Array(_)
                | Self::Tuple(_)
                | Self::Case(_)
                | Self::Paren(_)
                | Self::StringSpecifier(_)
                | Self::InlineQuery(_)
                | Self::Cast(_)
        )
    }
}
