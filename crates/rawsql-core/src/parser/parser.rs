//! SQL parser state and cursor helpers.

use super::error::{ParseError, SyntaxError};
use crate::ast::{IdentifierString, SelectQuery};
use crate::lexer::{Lexeme, TokenKind, Tokenizer};

/// Default limit for nested parentheses, calls and sub-queries.
///
/// A parenthesized expression costs two levels and a sub-query three, so
/// the default allows about 60 nested parentheses or 40 nested sub-queries.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Recursive descent parser over a lexeme slice.
///
/// A parser reads one statement; create a new one per input.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    lexemes: &'a [Lexeme],
    index: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over already tokenized input.
    #[must_use]
    pub const fn new(lexemes: &'a [Lexeme]) -> Self {
        Self {
            lexemes,
            index: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Tokenizes and parses one query.
    pub fn parse_sql(sql: &str) -> Result<SelectQuery, ParseError> {
        let lexemes = Tokenizer::new(sql).tokenize()?;
        Parser::new(&lexemes).parse_statement()
    }

    /// Parses one query, an optional trailing `;`, and requires the input
    /// to end there.
    pub fn parse_statement(&mut self) -> Result<SelectQuery, ParseError> {
        let query = self.parse_query()?;
        if self.check_operator(";") {
            self.advance();
        }
        if let Some(lexeme) = self.current() {
            return Err(ParseError::TrailingInput {
                index: self.index,
                position: lexeme.position,
                found: lexeme.text.clone(),
            });
        }
        tracing::debug!(lexemes = self.lexemes.len(), "parsed query");
        Ok(query)
    }

    /// Index of the next unread lexeme.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the current lexeme.
    pub(super) fn current(&self) -> Option<&'a Lexeme> {
        self.lexemes.get(self.index)
    }

    /// Returns the lexeme `n` places after the current one.
    pub(super) fn peek_nth(&self, n: usize) -> Option<&'a Lexeme> {
        self.lexemes.get(self.index + n)
    }

    /// Moves past the current lexeme.
    pub(super) fn advance(&mut self) {
        if self.index < self.lexemes.len() {
            self.index += 1;
        }
    }

    /// Checks if the current lexeme has the given kind.
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|lexeme| lexeme.kind == kind)
    }

    /// Checks if the current lexeme is the given command keyword.
    pub(super) fn check_keyword(&self, keyword: &str) -> bool {
        self.current().is_some_and(|lexeme| lexeme.is_command(keyword))
    }

    /// Checks if the current lexeme is the given bare word.
    pub(super) fn check_word(&self, word: &str) -> bool {
        self.current().is_some_and(|lexeme| lexeme.is_word(word))
    }

    /// Checks if the current lexeme is the given operator.
    pub(super) fn check_operator(&self, op: &str) -> bool {
        self.current()
            .is_some_and(|lexeme| lexeme.kind == TokenKind::Operator && lexeme.text == op)
    }

    /// Consumes the given command keyword if it is next.
    pub(super) fn eat_keyword(&mut self, keyword: &str) -> bool {
        let found = self.check_keyword(keyword);
        if found {
            self.advance();
        }
        found
    }

    /// Consumes the given bare word if it is next.
    pub(super) fn eat_word(&mut self, word: &str) -> bool {
        let found = self.check_word(word);
        if found {
            self.advance();
        }
        found
    }

    /// Expects the current lexeme to have the given kind.
    pub(super) fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Expects the current lexeme to be the given command keyword.
    pub(super) fn expect_keyword(&mut self, keyword: &str) -> Result<(), ParseError> {
        if self.eat_keyword(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("`{keyword}`")))
        }
    }

    /// Expects the current lexeme to be the given bare word.
    pub(super) fn expect_word(&mut self, word: &str) -> Result<(), ParseError> {
        if self.eat_word(word) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("`{word}`")))
        }
    }

    /// Expects and returns an identifier. The `*` wildcard is not accepted.
    pub(super) fn expect_identifier(&mut self) -> Result<IdentifierString, ParseError> {
        match self.current() {
            Some(lexeme) if lexeme.kind == TokenKind::Identifier && lexeme.text != "*" => {
                self.advance();
                Ok(IdentifierString::new(lexeme.text.as_str()))
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Builds an error for the current lexeme.
    pub(super) fn unexpected(&self, expected: &str) -> ParseError {
        let (position, found) = match self.current() {
            Some(lexeme) => (lexeme.position, Some(lexeme.text.clone())),
            None => (self.end_position(), None),
        };
        SyntaxError::new(self.index, position, expected, found).into()
    }

    /// Byte offset just past the last lexeme.
    fn end_position(&self) -> usize {
        self.lexemes.last().map_or(0, |lexeme| lexeme.end)
    }

    /// Enters one nesting level.
    pub(super) fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            let position = self
                .current()
                .map_or_else(|| self.end_position(), |lexeme| lexeme.position);
            return Err(ParseError::NestingTooDeep {
                depth: self.max_depth,
                position,
            });
        }
        Ok(())
    }

    /// Leaves one nesting level.
    pub(super) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Parses a comma separated list with `item`.
    pub(super) fn parse_comma_list<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = vec![item(self)?];
        while self.check(TokenKind::Comma) {
            self.advance();
            items.push(item(self)?);
        }
        Ok(items)
    }

    /// Parses `( a, b, .. )` into identifiers.
    pub(super) fn parse_identifier_list(&mut self) -> Result<Vec<IdentifierString>, ParseError> {
        self.expect(TokenKind::OpenParen, "`(`")?;
        let names = self.parse_comma_list(Self::expect_identifier)?;
        self.expect(TokenKind::CloseParen, "`)`")?;
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ValueExpr;

    fn parse(sql: &str) -> Result<SelectQuery, ParseError> {
        Parser::parse_sql(sql)
    }

    #[test]
    fn test_simple_select() {
        let query = parse("SELECT id, name FROM users").unwrap();
        let simple = query.as_simple().unwrap();
        assert_eq!(simple.select.items.len(), 2);
        assert!(simple.from.is_some());
    }

    #[test]
    fn test_trailing_semicolon() {
        assert!(parse("select 1;").is_ok());
        assert!(matches!(
            parse("select 1;;"),
            Err(ParseError::TrailingInput { index: 3, .. })
        ));
    }

    #[test]
    fn test_trailing_input() {
        let err = parse("SELECT 1 FROM t EXTRA").unwrap_err();
        assert!(matches!(
            err,
            ParseError::TrailingInput { position: 16, ref found, .. } if found == "EXTRA"
        ));
    }

    #[test]
    fn test_nesting_limit() {
        let sql = format!("select {}1{}", "(".repeat(20), ")".repeat(20));
        let lexemes = Tokenizer::new(&sql).tokenize().unwrap();
        let err = Parser::new(&lexemes)
            .with_max_depth(10)
            .parse_statement()
            .unwrap_err();
        assert!(matches!(err, ParseError::NestingTooDeep { depth: 10, .. }));

        let query = Parser::new(&lexemes).parse_statement().unwrap();
        let simple = query.as_simple().unwrap();
        assert!(matches!(simple.select.items[0].value, ValueExpr::Paren(_)));
    }

    #[test]
    fn test_error_at_end_of_input() {
        let err = parse("select a from").unwrap_err();
        let ParseError::Syntax(err) = err else {
            panic!("expected syntax error, got {err:?}");
        };
        assert_eq!(err.found, None);
        assert_eq!(err.position, 13);
    }
}
