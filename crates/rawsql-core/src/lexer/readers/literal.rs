//! Numbers, quoted strings and prefixed string constants.

use super::TokenReader;
use crate::lexer::chars::{
    is_binary_digit, is_digit, is_hex_digit, is_octal_digit, is_whitespace,
};
use crate::lexer::cursor::Cursor;
use crate::lexer::error::{context_snippet, TokenizeError};
use crate::lexer::token::{Lexeme, TokenKind};

/// String prefixes recognized before a single quote.
const STRING_PREFIXES: &[&str] = &["u&'", "e'", "x'", "b'"];

/// Reads numeric and string literals.
#[derive(Debug, Default, Clone, Copy)]
pub struct LiteralReader;

impl TokenReader for LiteralReader {
    fn try_read(
        &mut self,
        cursor: &mut Cursor<'_>,
        previous: Option<&Lexeme>,
    ) -> Result<Option<Lexeme>, TokenizeError> {
        let start = cursor.pos();
        let Some(c) = cursor.peek() else {
            return Ok(None);
        };

        if c == '\'' {
            let text = read_quoted(cursor, start)?;
            return Ok(Some(Lexeme::new(TokenKind::Literal, text, start)));
        }

        if let Some(prefix) = STRING_PREFIXES
            .iter()
            .find(|prefix| cursor.starts_with_ignore_case(prefix))
        {
            let quote = prefix.len() - 1;
            cursor.reset(start + quote);
            let body = read_quoted(cursor, start)?;
            let text = format!("{}{body}", &prefix[..quote]);
            return Ok(Some(Lexeme::new(
                TokenKind::EscapedStringConstant,
                text,
                start,
            )));
        }

        if starts_number(cursor) {
            let text = read_number(cursor);
            return Ok(Some(Lexeme::new(TokenKind::Literal, text, start)));
        }

        if matches!(c, '+' | '-') && previous.is_none_or(Lexeme::expects_operand) {
            cursor.advance();
            cursor.advance_while(is_whitespace);
            if starts_number(cursor) {
                let digits = read_number(cursor);
                let text = if c == '-' { format!("-{digits}") } else { digits };
                return Ok(Some(Lexeme::new(TokenKind::Literal, text, start)));
            }
            cursor.reset(start);
        }

        Ok(None)
    }
}

/// Returns true if a number starts at the cursor.
fn starts_number(cursor: &Cursor<'_>) -> bool {
    match cursor.peek() {
        Some(c) if is_digit(c) => true,
        Some('.') => cursor.peek_nth(1).is_some_and(is_digit),
        _ => false,
    }
}

/// Reads an integer, decimal, exponent or radix number.
fn read_number(cursor: &mut Cursor<'_>) -> String {
    let start = cursor.pos();

    if cursor.peek() == Some('0') {
        let radix_digit: Option<fn(char) -> bool> = match cursor.peek_nth(1) {
            Some('x' | 'X') => Some(is_hex_digit),
            Some('b' | 'B') => Some(is_binary_digit),
            Some('o' | 'O') => Some(is_octal_digit),
            _ => None,
        };
        if let Some(is_radix_digit) = radix_digit {
            if cursor.peek_nth(2).is_some_and(is_radix_digit) {
                cursor.advance();
                cursor.advance();
                cursor.advance_while(is_radix_digit);
                return cursor.slice_from(start).to_string();
            }
        }
    }

    cursor.advance_while(is_digit);
    if cursor.peek() == Some('.') && cursor.peek_nth(1) != Some('.') {
        cursor.advance();
        cursor.advance_while(is_digit);
    }
    if matches!(cursor.peek(), Some('e' | 'E')) {
        let exponent_digit = match cursor.peek_nth(1) {
            Some('+' | '-') => 2,
            _ => 1,
        };
        if cursor.peek_nth(exponent_digit).is_some_and(is_digit) {
            for _ in 0..exponent_digit {
                cursor.advance();
            }
            cursor.advance_while(is_digit);
        }
    }

    let text = cursor.slice_from(start);
    if text.starts_with('.') {
        format!("0{text}")
    } else {
        text.to_string()
    }
}

/// Reads a single-quoted string starting at the cursor and returns its raw
/// source text, quotes included.
///
/// Both `''` and `\'` are accepted as embedded quotes. `error_at` is the
/// offset reported when the closing quote is missing.
fn read_quoted(cursor: &mut Cursor<'_>, error_at: usize) -> Result<String, TokenizeError> {
    let start = cursor.pos();
    cursor.advance();
    loop {
        match cursor.advance() {
            Some('\\') => {
                cursor.advance();
            }
            Some('\'') if cursor.peek() == Some('\'') => {
                cursor.advance();
            }
            Some('\'') => return Ok(cursor.slice_from(start).to_string()),
            Some(_) => {}
            None => {
                let input = cursor.input();
                cursor.reset(error_at);
                return Err(TokenizeError::UnclosedString {
                    position: error_at,
                    context: context_snippet(input, error_at),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str, previous: Option<&Lexeme>) -> Option<Lexeme> {
        let mut cursor = Cursor::new(input);
        LiteralReader.try_read(&mut cursor, previous).unwrap()
    }

    fn text(input: &str) -> String {
        read(input, None).unwrap().text
    }

    #[test]
    fn test_numbers() {
        assert_eq!(text("42"), "42");
        assert_eq!(text("3.14 "), "3.14");
        assert_eq!(text("1e10"), "1e10");
        assert_eq!(text("2.5E-3"), "2.5E-3");
        assert_eq!(text(".5"), "0.5");
        assert_eq!(text("0xFF"), "0xFF");
        assert_eq!(text("0b101"), "0b101");
        assert_eq!(text("0o17"), "0o17");
    }

    #[test]
    fn test_signed_numbers() {
        assert_eq!(text("-1"), "-1");
        assert_eq!(text("+1"), "1");
        assert_eq!(text("-  7"), "-7");

        let column = Lexeme::new(TokenKind::Identifier, "a", 0);
        assert!(read("- 1", Some(&column)).is_none());

        let comma = Lexeme::new(TokenKind::Comma, ",", 0);
        assert_eq!(read("-1", Some(&comma)).unwrap().text, "-1");
    }

    #[test]
    fn test_sign_without_digits_restores_cursor() {
        let mut cursor = Cursor::new("- a");
        assert!(LiteralReader.try_read(&mut cursor, None).unwrap().is_none());
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn test_strings() {
        assert_eq!(text("'abc' x"), "'abc'");
        assert_eq!(text("'it''s'"), "'it''s'");
        assert_eq!(text(r"'it\'s'"), r"'it\'s'");
    }

    #[test]
    fn test_prefixed_strings() {
        let lexeme = read("E'a\\nb'", None).unwrap();
        assert_eq!(lexeme.kind, TokenKind::EscapedStringConstant);
        assert_eq!(lexeme.text, "e'a\\nb'");

        let lexeme = read("U&'d\\0061t'", None).unwrap();
        assert_eq!(lexeme.text, "u&'d\\0061t'");
    }

    #[test]
    fn test_unclosed_string_points_at_quote() {
        let mut cursor = Cursor::new("select 'abc");
        cursor.reset(7);
        let err = LiteralReader.try_read(&mut cursor, None).unwrap_err();
        assert_eq!(err.position(), 7);
    }
}
