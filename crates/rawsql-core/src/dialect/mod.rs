//! SQL Dialect support.
//!
//! Databases quote identifiers and mark parameters differently. A
//! [`Dialect`] describes those choices and produces the matching
//! [`DialectConfig`] for the formatter. Parsing is dialect independent.

mod generic;
mod mysql;
mod sqlite;
mod sqlserver;

pub use generic::GenericDialect;
pub use mysql::MySqlDialect;
pub use sqlite::SqliteDialect;
pub use sqlserver::SqlServerDialect;

use crate::formatter::{DialectConfig, IdentifierEscape, ParameterStyle, QuotePolicy};

/// Trait for SQL dialect-specific output.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote pair (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> (char, char) {
        ('"', '"')
    }

    /// Returns the prefix of named parameters.
    fn parameter_symbol(&self) -> &'static str {
        ":"
    }

    /// Returns the parameter style.
    fn parameter_style(&self) -> ParameterStyle {
        ParameterStyle::Named
    }

    /// Builds the formatter configuration for this dialect.
    fn config(&self) -> DialectConfig {
        let (start, end) = self.identifier_quote();
        DialectConfig {
            identifier_escape: IdentifierEscape::new(start, end),
            parameter_symbol: self.parameter_symbol().to_string(),
            parameter_style: self.parameter_style(),
            quote_policy: QuotePolicy::WhenNeeded,
        }
    }
}

/// Looks up a dialect preset by name, ignoring case.
///
/// Accepts `generic`, `postgres`, `postgresql`, `mysql`, `mariadb`,
/// `sqlserver`, `mssql` and `sqlite`.
#[must_use]
pub fn dialect_by_name(name: &str) -> Option<&'static dyn Dialect> {
    match name.to_ascii_lowercase().as_str() {
        "generic" | "postgres" | "postgresql" => Some(&GenericDialect),
        "mysql" | "mariadb" => Some(&MySqlDialect),
        "sqlserver" | "mssql" => Some(&SqlServerDialect),
        "sqlite" => Some(&SqliteDialect),
        _ => None,
    }
}
