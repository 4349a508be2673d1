//! Punctuation and symbolic operators.

use super::TokenReader;
use crate::lexer::chars::is_operator_char;
use crate::lexer::cursor::Cursor;
use crate::lexer::error::{context_snippet, TokenizeError};
use crate::lexer::token::{Lexeme, TokenKind};

/// Multi-character operators, longest first.
const COMPOUND_OPERATORS: &[&str] = &[
    "->>", "#>>", "!~*", "::", "||", "<=", ">=", "<>", "!=", "->", "#>", "@>", "<@", "<<", ">>",
    "!~", "~*",
];

/// Reads punctuation and operators. This is the last reader tried, so any
/// other character is reported as unexpected.
#[derive(Debug, Default, Clone, Copy)]
pub struct OperatorReader;

impl TokenReader for OperatorReader {
    fn try_read(
        &mut self,
        cursor: &mut Cursor<'_>,
        _previous: Option<&Lexeme>,
    ) -> Result<Option<Lexeme>, TokenizeError> {
        let start = cursor.pos();
        let Some(c) = cursor.peek() else {
            return Ok(None);
        };

        let punctuation = match c {
            '(' => Some(TokenKind::OpenParen),
            ')' => Some(TokenKind::CloseParen),
            '[' => Some(TokenKind::OpenBracket),
            ']' => Some(TokenKind::CloseBracket),
            ',' => Some(TokenKind::Comma),
            '.' => Some(TokenKind::Dot),
            ';' => Some(TokenKind::Operator),
            _ => None,
        };
        if let Some(kind) = punctuation {
            cursor.advance();
            return Ok(Some(Lexeme::new(kind, c.to_string(), start)));
        }

        if let Some(op) = COMPOUND_OPERATORS
            .iter()
            .find(|op| cursor.rest().starts_with(*op))
        {
            cursor.reset(start + op.len());
            return Ok(Some(Lexeme::new(TokenKind::Operator, *op, start)));
        }

        if is_operator_char(c) || c == ':' {
            cursor.advance();
            return Ok(Some(Lexeme::new(TokenKind::Operator, c.to_string(), start)));
        }

        Err(TokenizeError::UnexpectedCharacter {
            character: c,
            position: start,
            context: context_snippet(cursor.input(), start),
        })
    }
}
