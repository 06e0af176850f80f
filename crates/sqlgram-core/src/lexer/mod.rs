//! SQL Lexer/Tokenizer
//!
//! Turns statement text into a [`TokenStream`] of typed tokens that carry
//! their text and 1-based line/column for diagnostics.

mod span;
mod stream;
mod token;
mod tokenizer;

pub use span::{Span, source_line};
pub use stream::TokenStream;
pub use token::{Keyword, Token, TokenCategory, TokenKind};
pub use tokenizer::Lexer;

/// Tokenizes `sql` into a stream ending with an EOF token.
#[must_use]
pub fn tokenize(sql: &str) -> TokenStream {
    Lexer::new(sql).tokenize()
}
