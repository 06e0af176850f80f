//! Parser error types.

use core::fmt;

use crate::lexer::{Span, Token, source_line};

/// Broad class of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A token appears where the grammar does not permit it.
    UnexpectedToken,
    /// A statement or object keyword that is not recognized.
    UnknownConstruct,
    /// The input ended before a required token.
    Incomplete,
}

/// A parse error.
///
/// Carries everything needed to render the caret diagnostic:
///
/// ```text
/// Parse error: Unexpected token on line 1
/// drop table play cascade restrict
///                         ^ found: "restrict"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The failure class.
    pub kind: ParseErrorKind,
    /// The reason, e.g. `Unknown object to drop`.
    pub message: String,
    /// 1-based line of the offending token.
    pub line: usize,
    /// 1-based character column of the offending token.
    pub column: usize,
    /// Text of the offending token.
    pub found: String,
    /// The source line holding the offending token.
    pub source_line: String,
    /// Byte span of the offending token.
    pub span: Span,
}

impl ParseError {
    /// Creates an error pointing at `token` inside `source`.
    ///
    /// An error at the end-of-input token is always [`ParseErrorKind::Incomplete`].
    #[must_use]
    pub fn new(
        kind: ParseErrorKind,
        message: impl Into<String>,
        token: &Token,
        source: &str,
    ) -> Self {
        let kind = if token.is_eof() {
            ParseErrorKind::Incomplete
        } else {
            kind
        };
        // Empty literals such as '' have no text of their own
        let found = if token.text.is_empty() {
            token.span.slice(source).to_string()
        } else {
            token.text.clone()
        };
        Self {
            kind,
            message: message.into(),
            line: token.line(),
            column: token.column(),
            found,
            source_line: source_line(source, token.line()).to_string(),
            span: token.span,
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>, token: &Token, source: &str) -> Self {
        Self::new(ParseErrorKind::UnexpectedToken, message, token, source)
    }

    /// Creates an "unknown construct" error.
    #[must_use]
    pub fn unknown(message: impl Into<String>, token: &Token, source: &str) -> Self {
        Self::new(ParseErrorKind::UnknownConstruct, message, token, source)
    }

    /// Returns the caret line: padding up to the token, `^`, and the token text.
    ///
    /// Tabs before the token are kept so the caret lines up in a terminal.
    #[must_use]
    pub fn caret_line(&self) -> String {
        let mut padding: String = self
            .source_line
            .chars()
            .take(self.column.saturating_sub(1))
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let shortfall = self.column.saturating_sub(1) - padding.chars().count();
        padding.push_str(&" ".repeat(shortfall));
        format!("{padding}^ found: \"{}\"", self.found)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error: {} on line {}\n{}\n{}",
            self.message,
            self.line,
            self.source_line,
            self.caret_line()
        )
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Lexer, TokenKind};

    fn token_at(sql: &str, index: usize) -> Token {
        Lexer::new(sql).tokenize().into_tokens().swap_remove(index)
    }

    #[test]
    fn test_display_shape() {
        let sql = "drop table play cascade restrict";
        let err = ParseError::unexpected("Unexpected token", &token_at(sql, 4), sql);
        assert_eq!(
            err.to_string(),
            format!(
                "Parse error: Unexpected token on line 1\n{sql}\n{}^ found: \"restrict\"",
                " ".repeat(24)
            )
        );
        assert_eq!(err.column, 25);
    }

    #[test]
    fn test_caret_on_second_line() {
        let sql = "drop\n  elephant";
        let err = ParseError::unknown("Unknown object to drop", &token_at(sql, 1), sql);
        assert_eq!(err.line, 2);
        assert_eq!(err.source_line, "  elephant");
        assert_eq!(err.caret_line(), "  ^ found: \"elephant\"");
        assert_eq!(err.kind, ParseErrorKind::UnknownConstruct);
    }

    #[test]
    fn test_eof_is_incomplete() {
        let sql = "drop table";
        let eof = token_at(sql, 2);
        assert_eq!(eof.kind, TokenKind::Eof);
        let err = ParseError::unexpected("Expected table name", &eof, sql);
        assert_eq!(err.kind, ParseErrorKind::Incomplete);
        assert_eq!(err.found, "end of input");
        assert_eq!(err.column, 11);
        assert_eq!(err.caret_line(), format!("{}^ found: \"end of input\"", " ".repeat(10)));
    }

    #[test]
    fn test_empty_literal_reports_its_source_text() {
        let sql = "drop table ''";
        let err = ParseError::unexpected("Expected table name", &token_at(sql, 2), sql);
        assert_eq!(err.found, "''");
        assert_eq!(err.caret_line(), format!("{}^ found: \"''\"", " ".repeat(11)));
    }

    #[test]
    fn test_tabs_are_mirrored() {
        let sql = "drop\ttable\tx y";
        let err = ParseError::unexpected("Unexpected token", &token_at(sql, 3), sql);
        assert_eq!(err.caret_line(), "    \t     \t  ^ found: \"y\"");
    }
}
