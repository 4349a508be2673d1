//! Parser error types.

use crate::lexer::TokenizeError;

/// A lexeme that does not fit the grammar at its position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Unexpected token at position {position}: expected {expected}, found {}",
    .found.as_deref().unwrap_or("end of input")
)]
pub struct SyntaxError {
    /// Index of the offending lexeme.
    pub index: usize,
    /// Byte offset of the offending lexeme.
    pub position: usize,
    /// Description of the expected construct.
    pub expected: String,
    /// Text of the lexeme found, `None` at end of input.
    pub found: Option<String>,
}

impl SyntaxError {
    /// Creates a new syntax error.
    #[must_use]
    pub fn new(
        index: usize,
        position: usize,
        expected: impl Into<String>,
        found: Option<String>,
    ) -> Self {
        Self {
            index,
            position,
            expected: expected.into(),
            found,
        }
    }
}

/// An error raised by [`crate::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input could not be tokenized.
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    /// A lexeme did not fit the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// A complete statement was read but lexemes remain.
    #[error("Unexpected trailing input at position {position}: `{found}`")]
    TrailingInput {
        /// Index of the first unread lexeme.
        index: usize,
        /// Byte offset of the first unread lexeme.
        position: usize,
        /// Text of the first unread lexeme.
        found: String,
    },

    /// Parentheses, calls or sub-queries are nested too deeply.
    #[error("Nesting deeper than {depth} levels at position {position}")]
    NestingTooDeep {
        /// The configured limit.
        depth: usize,
        /// Byte offset where the limit was exceeded.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Tokenize(err) => err.position(),
            Self::Syntax(err) => err.position,
            Self::TrailingInput { position, .. } | Self::NestingTooDeep { position, .. } => {
                *position
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_message() {
        let err = SyntaxError::new(3, 12, "`)`", Some("from".to_string()));
        assert_eq!(
            err.to_string(),
            "Unexpected token at position 12: expected `)`, found from"
        );

        let err = SyntaxError::new(3, 12, "expression", None);
        assert!(err.to_string().ends_with("found end of input"));
    }

    #[test]
    fn test_position_of_each_variant() {
        let err = ParseError::TrailingInput {
            index: 4,
            position: 16,
            found: "EXTRA".to_string(),
        };
        assert_eq!(err.position(), 16);
        let err: ParseError = SyntaxError::new(0, 5, "select", None).into();
        assert_eq!(err.position(), 5);
    }
}
