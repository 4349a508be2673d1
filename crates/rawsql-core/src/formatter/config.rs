//! Formatter configuration.

use serde::{Deserialize, Serialize};

/// The pair of characters that quote an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierEscape {
    /// Opening quote.
    pub start: String,
    /// Closing quote, doubled inside a quoted name.
    pub end: String,
}

impl IdentifierEscape {
    /// Creates an escape pair.
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl Default for IdentifierEscape {
    fn default() -> Self {
        Self::new("\"", "\"")
    }
}

/// How bind parameters are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterStyle {
    /// The parameter symbol followed by the name (`:id`, `@id`, `$1`).
    #[default]
    Named,
    /// A bare `?` for every parameter.
    Anonymous,
}

/// When identifiers are quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotePolicy {
    /// Only names that would not read back as the same bare identifier.
    #[default]
    WhenNeeded,
    /// Every identifier except the `*` wildcard.
    Always,
}

/// Output settings that vary across database vendors.
///
/// Missing fields take their default when deserialized, so a JSON file
/// only needs the settings it changes:
///
/// ```
/// use rawsql_core::formatter::{DialectConfig, QuotePolicy};
///
/// let config: DialectConfig = serde_json::from_str(r#"{"quote_policy": "always"}"#).unwrap();
/// assert_eq!(config.quote_policy, QuotePolicy::Always);
/// assert_eq!(config.parameter_symbol, ":");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialectConfig {
    /// Identifier quote pair.
    pub identifier_escape: IdentifierEscape,
    /// Prefix of named parameters.
    pub parameter_symbol: String,
    /// Named or anonymous parameters.
    pub parameter_style: ParameterStyle,
    /// Identifier quoting policy.
    pub quote_policy: QuotePolicy,
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self {
            identifier_escape: IdentifierEscape::default(),
            parameter_symbol: ":".to_string(),
            parameter_style: ParameterStyle::Named,
            quote_policy: QuotePolicy::WhenNeeded,
        }
    }
}

impl DialectConfig {
    /// Sets the identifier quote pair.
    #[must_use]
    pub fn with_identifier_escape(mut self, start: &str, end: &str) -> Self {
        self.identifier_escape = IdentifierEscape::new(start, end);
        self
    }

    /// Sets the named parameter prefix.
    #[must_use]
    pub fn with_parameter_symbol(mut self, symbol: &str) -> Self {
        symbol.clone_into(&mut self.parameter_symbol);
        self
    }

    /// Sets the parameter style.
    #[must_use]
    pub const fn with_parameter_style(mut self, style: ParameterStyle) -> Self {
        self.parameter_style = style;
        self
    }

    /// Quotes every identifier.
    #[must_use]
    pub const fn quote_all(mut self) -> Self {
        self.quote_policy = QuotePolicy::Always;
        self
    }
}
