//! Bind parameters.

use super::TokenReader;
use crate::lexer::chars::is_delimiter;
use crate::lexer::cursor::Cursor;
use crate::lexer::error::TokenizeError;
use crate::lexer::token::{Lexeme, TokenKind};

/// Reads `:name`, `$1`, `$name`, `@name` and anonymous `?` parameters.
///
/// Anonymous parameters are named by their 1-based ordinal.
#[derive(Debug, Default, Clone)]
pub struct ParameterReader {
    anonymous: usize,
}

impl ParameterReader {
    /// Creates a reader with the anonymous counter at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { anonymous: 0 }
    }
}

impl TokenReader for ParameterReader {
    fn try_read(
        &mut self,
        cursor: &mut Cursor<'_>,
        _previous: Option<&Lexeme>,
    ) -> Result<Option<Lexeme>, TokenizeError> {
        let start = cursor.pos();
        match cursor.peek() {
            Some('?') => {
                cursor.advance();
                self.anonymous += 1;
                let name = self.anonymous.to_string();
                Ok(Some(Lexeme::new(TokenKind::Parameter, name, start)))
            }
            Some(':' | '$' | '@') => {
                if cursor.peek_nth(1).is_none_or(is_delimiter) {
                    return Ok(None);
                }
                cursor.advance();
                let name_pos = cursor.pos();
                cursor.advance_while(|c| !is_delimiter(c));
                let name = cursor.slice_from(name_pos);
                Ok(Some(Lexeme::new(TokenKind::Parameter, name, start)))
            }
            _ => Ok(None),
        }
    }
}
