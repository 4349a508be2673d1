//! Identifiers, keywords and the `*` wildcard.

use super::TokenReader;
use crate::lexer::chars::{is_delimiter, is_whitespace};
use crate::lexer::cursor::Cursor;
use crate::lexer::error::{context_snippet, TokenizeError};
use crate::lexer::token::{phrase_status, Lexeme, TokenKind};

/// Reads bare and quoted names, keyword commands and the wildcard.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentifierReader;

impl TokenReader for IdentifierReader {
    fn try_read(
        &mut self,
        cursor: &mut Cursor<'_>,
        previous: Option<&Lexeme>,
    ) -> Result<Option<Lexeme>, TokenizeError> {
        let start = cursor.pos();
        let Some(c) = cursor.peek() else {
            return Ok(None);
        };

        match c {
            '*' if previous.is_none_or(precedes_wildcard) => {
                cursor.advance();
                Ok(Some(Lexeme::new(TokenKind::Identifier, "*", start)))
            }
            '`' => read_escaped(cursor, '`').map(Some),
            '"' => read_escaped(cursor, '"').map(Some),
            '[' if !previous.is_some_and(|lexeme| lexeme.is_command("array")) => {
                read_escaped(cursor, ']').map(Some)
            }
            c if is_delimiter(c) => Ok(None),
            _ => Ok(Some(read_word(cursor))),
        }
    }
}

/// Returns true if a `*` after `lexeme` is a wildcard rather than a product.
fn precedes_wildcard(lexeme: &Lexeme) -> bool {
    match lexeme.kind {
        TokenKind::Dot | TokenKind::Comma | TokenKind::OpenParen => true,
        TokenKind::Command => lexeme.expects_operand(),
        _ => false,
    }
}

/// Reads a delimited name. Doubling the closing delimiter escapes it.
fn read_escaped(cursor: &mut Cursor<'_>, close: char) -> Result<Lexeme, TokenizeError> {
    let start = cursor.pos();
    cursor.advance();
    let mut name = String::new();
    loop {
        match cursor.advance() {
            Some(c) if c == close && cursor.peek() == Some(close) => {
                cursor.advance();
                name.push(close);
            }
            Some(c) if c == close => {
                return Ok(Lexeme::new(TokenKind::Identifier, name, start));
            }
            Some(c) => name.push(c),
            None => {
                let context = context_snippet(cursor.input(), start);
                cursor.reset(start);
                return Err(TokenizeError::UnclosedIdentifier {
                    position: start,
                    delimiter: close,
                    context,
                });
            }
        }
    }
}

/// Reads a bare word and classifies it as a command or an identifier.
///
/// Multi-word keywords are merged greedily: following words are taken as
/// long as some keyword still starts with the phrase, and the longest
/// complete keyword wins.
fn read_word(cursor: &mut Cursor<'_>) -> Lexeme {
    let start = cursor.pos();
    cursor.advance_while(|c| !is_delimiter(c));
    let word = cursor.slice_from(start);
    let word_end = cursor.pos();

    let mut phrase = word.to_ascii_lowercase();
    let (complete, mut extendable) = phrase_status(&phrase);
    let mut longest = complete.then(|| (phrase.clone(), word_end));

    while extendable {
        cursor.advance_while(is_whitespace);
        let next_start = cursor.pos();
        cursor.advance_while(|c| !is_delimiter(c));
        if cursor.pos() == next_start {
            break;
        }
        phrase.push(' ');
        phrase.push_str(&cursor.slice_from(next_start).to_ascii_lowercase());
        let (complete, more) = phrase_status(&phrase);
        if complete {
            longest = Some((phrase.clone(), cursor.pos()));
        }
        extendable = more;
    }

    match longest {
        Some((keyword, end)) => {
            cursor.reset(end);
            Lexeme::new(TokenKind::Command, keyword, start)
        }
        None => {
            cursor.reset(word_end);
            Lexeme::new(TokenKind::Identifier, word, start)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str, previous: Option<&Lexeme>) -> (Option<Lexeme>, usize) {
        let mut cursor = Cursor::new(input);
        let lexeme = IdentifierReader.try_read(&mut cursor, previous).unwrap();
        (lexeme, cursor.pos())
    }

    #[test]
    fn test_bare_identifier_keeps_case() {
        let (lexeme, pos) = read("UserName FROM", None);
        let lexeme = lexeme.unwrap();
        assert_eq!(lexeme.kind, TokenKind::Identifier);
        assert_eq!(lexeme.text, "UserName");
        assert_eq!(pos, 8);
    }

    #[test]
    fn test_keyword_is_lowercased() {
        let (lexeme, _) = read("SELECT id", None);
        let lexeme = lexeme.unwrap();
        assert_eq!(lexeme.kind, TokenKind::Command);
        assert_eq!(lexeme.text, "select");
    }

    #[test]
    fn test_multi_word_keywords() {
        let (lexeme, pos) = read("GROUP   BY a", None);
        assert_eq!(lexeme.unwrap().text, "group by");
        assert_eq!(pos, 10);

        let (lexeme, _) = read("left outer join t", None);
        assert_eq!(lexeme.unwrap().text, "left outer join");

        let (lexeme, _) = read("not materialized (", None);
        assert_eq!(lexeme.unwrap().text, "not materialized");
    }

    #[test]
    fn test_longest_complete_keyword_wins() {
        let (lexeme, pos) = read("union select", None);
        assert_eq!(lexeme.unwrap().text, "union");
        assert_eq!(pos, 5);

        let (lexeme, pos) = read("not exists", None);
        assert_eq!(lexeme.unwrap().text, "not");
        assert_eq!(pos, 3);
    }

    #[test]
    fn test_phrase_starter_alone_is_identifier() {
        let (lexeme, pos) = read("left(name, 2)", None);
        let lexeme = lexeme.unwrap();
        assert_eq!(lexeme.kind, TokenKind::Identifier);
        assert_eq!(lexeme.text, "left");
        assert_eq!(pos, 4);

        let (lexeme, pos) = read("group from", None);
        assert_eq!(lexeme.unwrap().kind, TokenKind::Identifier);
        assert_eq!(pos, 5);
    }

    #[test]
    fn test_quoted_identifiers() {
        let (lexeme, _) = read("\"Order \"\"Id\"\"\"", None);
        assert_eq!(lexeme.unwrap().text, "Order \"Id\"");
        let (lexeme, _) = read("`select`", None);
        let lexeme = lexeme.unwrap();
        assert_eq!(lexeme.kind, TokenKind::Identifier);
        assert_eq!(lexeme.text, "select");
        let (lexeme, _) = read("[my table]", None);
        assert_eq!(lexeme.unwrap().text, "my table");
    }

    #[test]
    fn test_bracket_after_array_is_not_an_identifier() {
        let array = Lexeme::new(TokenKind::Command, "array", 0);
        let (lexeme, pos) = read("[1, 2]", Some(&array));
        assert!(lexeme.is_none());
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_unclosed_quoted_identifier() {
        let mut cursor = Cursor::new("select \"abc");
        cursor.reset(7);
        let err = IdentifierReader.try_read(&mut cursor, None).unwrap_err();
        assert_eq!(err.position(), 7);
        assert!(err.to_string().contains("Closing delimiter"));
    }

    #[test]
    fn test_wildcard_depends_on_previous() {
        let select = Lexeme::new(TokenKind::Command, "select", 0);
        let (lexeme, _) = read("*", Some(&select));
        assert_eq!(lexeme.unwrap().text, "*");

        let column = Lexeme::new(TokenKind::Identifier, "a", 0);
        let (lexeme, _) = read("* b", Some(&column));
        assert!(lexeme.is_none());
    }
}
