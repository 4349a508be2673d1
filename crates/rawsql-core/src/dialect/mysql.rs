//! MySQL dialect.

use super::Dialect;
use crate::formatter::ParameterStyle;

/// MySQL and MariaDB: backtick identifiers and `?` placeholders.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn identifier_quote(&self) -> (char, char) {
        ('`', '`')
    }

    fn parameter_style(&self) -> ParameterStyle {
        ParameterStyle::Anonymous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_dialect() {
        let config = MySqlDialect::new().config();
        assert_eq!(config.identifier_escape.start, "`");
        assert_eq!(config.identifier_escape.end, "`");
        assert_eq!(config.parameter_style, ParameterStyle::Anonymous);
    }
}
