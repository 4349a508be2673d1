//! Whitespace and comment skipping between tokens.

use super::chars::is_whitespace;
use super::cursor::Cursor;
use super::error::{context_snippet, TokenizeError};
use super::token::{Lexeme, TokenKind};

/// Skips whitespace, `--` line comments and `/* */` block comments.
///
/// Comment text is trimmed and appended to `comments`. A block comment
/// starting with `/*+` is an optimizer hint and is left in place.
pub fn skip_whitespace_and_comments(
    cursor: &mut Cursor<'_>,
    comments: &mut Vec<Lexeme>,
) -> Result<(), TokenizeError> {
    loop {
        cursor.advance_while(is_whitespace);

        if cursor.rest().starts_with("--") {
            let start = cursor.pos();
            cursor.advance();
            cursor.advance();
            cursor.advance_while(|c| c != '\n');
            let text = cursor.slice_from(start + 2).trim();
            if !text.is_empty() {
                tracing::trace!(position = start, comment = text, "line comment");
                comments.push(
                    Lexeme::new(TokenKind::Comment, text, start).ending_at(cursor.pos()),
                );
            }
            continue;
        }

        if cursor.rest().starts_with("/*") && !cursor.rest().starts_with("/*+") {
            let start = cursor.pos();
            let Some(len) = cursor.rest()[2..].find("*/") else {
                return Err(TokenizeError::UnclosedComment {
                    position: start,
                    context: context_snippet(cursor.input(), start),
                });
            };
            let body = &cursor.rest()[2..2 + len];
            cursor.reset(start + len + 4);
            for line in block_comment_lines(body) {
                tracing::trace!(position = start, comment = line, "block comment");
                comments.push(
                    Lexeme::new(TokenKind::Comment, line, start).ending_at(cursor.pos()),
                );
            }
            continue;
        }

        return Ok(());
    }
}

/// Trims every line of a block comment and drops blank leading and
/// trailing lines.
fn block_comment_lines(body: &str) -> Vec<&str> {
    let lines: Vec<&str> = body.lines().map(str::trim).collect();
    let first = lines.iter().position(|line| !line.is_empty());
    let last = lines.iter().rposition(|line| !line.is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].to_vec(),
        _ => Vec::new(),
    }
}
