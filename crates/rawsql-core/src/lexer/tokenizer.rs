//! SQL tokenizer implementation.

use super::comment::skip_whitespace_and_comments;
use super::cursor::Cursor;
use super::error::{context_snippet, TokenizeError};
use super::readers::{
    IdentifierReader, LiteralReader, OperatorReader, ParameterReader, TokenReader,
};
use super::token::Lexeme;

/// Splits SQL text into lexemes.
///
/// Whitespace and comments are skipped; comment text is collected
/// separately and available through [`Tokenizer::comments`].
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    literal: LiteralReader,
    parameter: ParameterReader,
    identifier: IdentifierReader,
    operator: OperatorReader,
    comments: Vec<Lexeme>,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            literal: LiteralReader,
            parameter: ParameterReader::new(),
            identifier: IdentifierReader,
            operator: OperatorReader,
            comments: Vec::new(),
        }
    }

    /// Reads the whole input.
    ///
    /// Stops at the first error; no partial result is returned.
    pub fn tokenize(&mut self) -> Result<Vec<Lexeme>, TokenizeError> {
        let mut lexemes: Vec<Lexeme> = Vec::new();
        loop {
            skip_whitespace_and_comments(&mut self.cursor, &mut self.comments)?;
            if self.cursor.is_eof() {
                break;
            }
            let lexeme = self.read_lexeme(lexemes.last())?;
            lexemes.push(lexeme);
        }
        tracing::debug!(
            input_len = self.cursor.input().len(),
            lexemes = lexemes.len(),
            comments = self.comments.len(),
            "tokenized input"
        );
        Ok(lexemes)
    }

    /// Comments seen so far, in source order.
    #[must_use]
    pub fn comments(&self) -> &[Lexeme] {
        &self.comments
    }

    /// Tries each reader in priority order at the cursor.
    fn read_lexeme(&mut self, previous: Option<&Lexeme>) -> Result<Lexeme, TokenizeError> {
        let readers: [&mut dyn TokenReader; 4] = [
            &mut self.literal,
            &mut self.parameter,
            &mut self.identifier,
            &mut self.operator,
        ];
        for reader in readers {
            if let Some(lexeme) = reader.try_read(&mut self.cursor, previous)? {
                return Ok(lexeme.ending_at(self.cursor.pos()));
            }
        }
        // The operator reader either matches or fails, so this is only
        // reached at end of input.
        let position = self.cursor.pos();
        Err(TokenizeError::UnexpectedCharacter {
            character: self.cursor.peek().unwrap_or('\0'),
            position,
            context: context_snippet(self.cursor.input(), position),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    fn kinds(input: &str) -> Vec<(TokenKind, String)> {
        Tokenizer::new(input)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|lexeme| (lexeme.kind, lexeme.text))
            .collect()
    }

    #[test]
    fn test_simple_select() {
        let lexemes = kinds("SELECT id, name FROM users");
        assert_eq!(
            lexemes,
            vec![
                (TokenKind::Command, "select".to_string()),
                (TokenKind::Identifier, "id".to_string()),
                (TokenKind::Comma, ",".to_string()),
                (TokenKind::Identifier, "name".to_string()),
                (TokenKind::Command, "from".to_string()),
                (TokenKind::Identifier, "users".to_string()),
            ]
        );
    }

    #[test]
    fn test_positions() {
        let lexemes = Tokenizer::new("select  a").tokenize().unwrap();
        assert_eq!(lexemes[0].position, 0);
        assert_eq!(lexemes[1].position, 8);
    }

    #[test]
    fn test_sign_and_wildcard_disambiguation() {
        let lexemes = kinds("select -1, a - 1, *, a * b");
        let texts: Vec<&str> = lexemes.iter().map(|(_, text)| text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["select", "-1", ",", "a", "-", "1", ",", "*", ",", "a", "*", "b"]
        );
        assert_eq!(lexemes[7].0, TokenKind::Identifier);
        assert_eq!(lexemes[10].0, TokenKind::Operator);
    }

    #[test]
    fn test_end_covers_source_text() {
        let lexemes = Tokenizer::new(r#"select "a b" ORDER   BY"#).tokenize().unwrap();
        assert_eq!(lexemes[0].end, 6);
        assert_eq!(lexemes[1].text, "a b");
        assert_eq!(lexemes[1].end, 12);
        assert_eq!(lexemes[2].text, "order by");
        assert_eq!(lexemes[2].end, 23);
    }

    #[test]
    fn test_comments_are_collected() {
        let mut tokenizer = Tokenizer::new("select 1 -- one\n/* two */ from t");
        let lexemes = tokenizer.tokenize().unwrap();
        assert_eq!(lexemes.len(), 4);
        let comments: Vec<&str> = tokenizer.comments().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(comments, vec!["one", "two"]);
    }

    #[test]
    fn test_array_subscript_brackets() {
        let lexemes = kinds("array[1, 2]");
        assert_eq!(lexemes[0], (TokenKind::Command, "array".to_string()));
        assert_eq!(lexemes[1].0, TokenKind::OpenBracket);
        assert_eq!(lexemes[5].0, TokenKind::CloseBracket);
    }
}
