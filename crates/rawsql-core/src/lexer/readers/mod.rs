//! Token readers.
//!
//! Each reader recognizes one lexical category at the cursor. The
//! tokenizer tries them in a fixed order and keeps the first match.

mod identifier;
mod literal;
mod operator;
mod parameter;

pub use identifier::IdentifierReader;
pub use literal::LiteralReader;
pub use operator::OperatorReader;
pub use parameter::ParameterReader;

use super::cursor::Cursor;
use super::error::TokenizeError;
use super::token::Lexeme;

/// A strategy that reads one lexeme at the cursor.
pub trait TokenReader {
    /// Tries to read a lexeme at the cursor position.
    ///
    /// Returns `Ok(None)` with the cursor unchanged when the input at the
    /// cursor does not belong to this reader. `previous` is the last
    /// lexeme emitted, used to disambiguate signs, `*` and `[`.
    fn try_read(
        &mut self,
        cursor: &mut Cursor<'_>,
        previous: Option<&Lexeme>,
    ) -> Result<Option<Lexeme>, TokenizeError>;
}
