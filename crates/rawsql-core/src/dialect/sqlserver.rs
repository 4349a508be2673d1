//! SQL Server dialect.

use super::Dialect;

/// SQL Server: bracket identifiers and `@name` parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlServerDialect;

impl SqlServerDialect {
    /// Creates a new SQL Server dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqlServerDialect {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn identifier_quote(&self) -> (char, char) {
        ('[', ']')
    }

    fn parameter_symbol(&self) -> &'static str {
        "@"
    }
}
