//! SQLite dialect.

use super::Dialect;

/// SQLite: double quoted identifiers and `$name` parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn parameter_symbol(&self) -> &'static str {
        "$"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_dialect() {
        let dialect = SqliteDialect::new();
        assert_eq!(dialect.identifier_quote(), ('"', '"'));
        assert_eq!(dialect.config().parameter_symbol, "$");
    }
}
