//! Forward-only token cursor consumed by the grammar rules.

use super::Token;

/// The tokens of one statement plus a read position.
///
/// Always ends with exactly one EOF token; advancing past it keeps
/// returning it, so the grammar can look ahead without bounds checks.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    /// Wraps a token sequence produced by the lexer.
    ///
    /// The sequence must end with an EOF token.
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(tokens.last().is_some_and(Token::is_eof));
        Self { tokens, pos: 0 }
    }

    /// The token at the cursor.
    #[must_use]
    pub fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// The token after the cursor.
    #[must_use]
    pub fn peek_next(&self) -> &Token {
        &self.tokens[(self.pos + 1).min(self.tokens.len() - 1)]
    }

    /// Moves the cursor forward and returns the token it was on.
    pub fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    /// Index of the cursor.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Number of tokens, including the EOF token.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true when the stream holds nothing but the EOF token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.len() == 1
    }

    /// Consumes the stream, returning all tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}
