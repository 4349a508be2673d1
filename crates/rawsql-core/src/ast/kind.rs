//! Node kind tags.

use core::fmt;

use serde::Serialize;

/// The tag of an AST node variant. Each node type has exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Literal,
    Raw,
    Identifier,
    Column,
    Function,
    Unary,
    Binary,
    Parameter,
    Array,
    Tuple,
    ValueList,
    Case,
    SwitchCase,
    CaseKeyValue,
    Cast,
    Paren,
    Between,
    Type,
    StringSpecifier,
    InlineQuery,
    Select,
    SelectItem,
    Distinct,
    From,
    Join,
    Source,
    Table,
    SourceAlias,
    Where,
    GroupBy,
    Having,
    OrderBy,
    OrderByItem,
    PartitionBy,
    Over,
    WindowExpression,
    WindowFrameSpec,
    WindowFrame,
    Window,
    With,
    CommonTable,
    Limit,
    Fetch,
    For,
    SimpleQuery,
    BinaryQuery,
    ValuesQuery,
}

impl NodeKind {
    /// Returns the snake case name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Raw => "raw",
            Self::Identifier => "identifier",
            Self::Column => "column",
            Self::Function => "function",
            Self::Unary => "unary",
            Self::Binary => "binary",
            Self::Parameter => "parameter",
            Self::Array => "array",
            Self::Tuple => "tuple",
            Self::ValueList => "value_list",
            Self::Case => "case",
            Self::SwitchCase => "switch_case",
            Self::CaseKeyValue => "case_key_value",
            Self::Cast => "cast",
            Self::Paren => "paren",
            Self::Between => "between",
            Self::Type => "type",
            Self::StringSpecifier => "string_specifier",
            Self::InlineQuery => "inline_query",
            Self::Select => "select",
            Self::SelectItem => "select_item",
            Self::Distinct => "distinct",
            Self::From => "from",
            Self::Join => "join",
            Self::Source => "source",
            Self::Table => "table",
            Self::SourceAlias => "source_alias",
            Self::Where => "where",
            Self::GroupBy => "group_by",
            Self::Having => "having",
            Self::OrderBy => "order_by",
            Self::OrderByItem => "order_by_item",
            Self::PartitionBy => "partition_by",
            Self::Over => "over",
            Self::WindowExpression => "window_expression",
            Self::WindowFrameSpec => "window_frame_spec",
            Self::WindowFrame => "window_frame",
            Self::Window => "window",
            Self::With => "with",
            Self::CommonTable => "common_table",
            Self::Limit => "limit",
            Self::Fetch => "fetch",
            Self::For => "for",
            Self::SimpleQuery => "simple_query",
            Self::BinaryQuery => "binary_query",
            Self::ValuesQuery => "values_query",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
