//! SQL Parser
//!
//! A hand-written recursive descent parser with Pratt expression parsing.
//! One statement per input; the first token that does not fit the grammar
//! ends the parse with a [`ParseError`].

mod ddl;
mod error;
#[allow(clippy::module_inception)]
mod parser;
mod pratt;

pub use error::{ParseError, ParseErrorKind};
pub use parser::Parser;
