//! SQL Parser
//!
//! A hand-written recursive descent parser with Pratt expression parsing.
//! Clauses are read in their fixed order; expressions go through the
//! binding power table in [`pratt`].

mod clause;
mod error;
mod expression;
mod parser;
mod pratt;
mod query;

pub use error::{ParseError, SyntaxError};
pub use parser::{Parser, DEFAULT_MAX_DEPTH};
pub use pratt::{infix_binding_power, prefix_binding_power};
