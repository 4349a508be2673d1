//! SQL lexer.
//!
//! A [`Tokenizer`] drives a fixed sequence of token readers over the
//! input and produces [`Lexeme`]s carrying normalized text and their byte
//! offset.

mod chars;
mod comment;
mod cursor;
mod error;
mod readers;
mod token;
mod tokenizer;

pub use error::{context_snippet, TokenizeError};
pub use token::{is_reserved, phrase_status, Lexeme, TokenKind};
pub use tokenizer::Tokenizer;
