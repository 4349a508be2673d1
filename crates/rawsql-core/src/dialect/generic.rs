//! Generic SQL dialect.

use super::Dialect;

/// A generic dialect: standard double quotes and Postgres style `:name`
/// parameters. This is the formatter default.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::{DialectConfig, ParameterStyle};

    #[test]
    fn test_generic_dialect() {
        let dialect = GenericDialect::new();
        assert_eq!(dialect.name(), "generic");
        assert_eq!(dialect.identifier_quote(), ('"', '"'));
        assert_eq!(dialect.parameter_symbol(), ":");
        assert_eq!(dialect.parameter_style(), ParameterStyle::Named);
        assert_eq!(dialect.config(), DialectConfig::default());
    }
}
