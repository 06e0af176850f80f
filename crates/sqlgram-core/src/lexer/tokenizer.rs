//! SQL Tokenizer implementation.

use super::{Keyword, Span, Token, TokenKind, TokenStream};

/// A lexer that tokenizes SQL input.
///
/// The lexer never fails: characters it cannot classify, unterminated
/// quotes and malformed numbers become [`TokenKind::Error`] tokens so the
/// parser can point at them.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// Current 1-based line.
    line: usize,
    /// Current 1-based character column.
    column: usize,
    /// The byte position of the start of the current token.
    start: usize,
    /// Line of the start of the current token.
    start_line: usize,
    /// Column of the start of the current token.
    start_column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
            start: 0,
            start_line: 1,
            start_column: 1,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Skips whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            // -- comment
            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            // /* comment */
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        None => break,
                        _ => {}
                    }
                }
                continue;
            }

            break;
        }
    }

    /// Records the current position as the start of the next token.
    fn mark_start(&mut self) {
        self.start = self.pos;
        self.start_line = self.line;
        self.start_column = self.column;
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos, self.start_line, self.start_column)
    }

    /// Creates a token whose text is the scanned source slice.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, &self.input[self.start..self.pos], self.make_span())
    }

    /// Creates a token with explicit text.
    fn make_token_with_text(&self, kind: TokenKind, text: String) -> Token {
        Token::new(kind, text, self.make_span())
    }

    /// Consumes one character and creates a token for it.
    fn single(&mut self, kind: TokenKind) -> Token {
        self.advance();
        self.make_token(kind)
    }

    /// Consumes one character, then a second one if it matches `next`.
    fn one_or_two(&mut self, next: char, double: TokenKind, single: TokenKind) -> Token {
        self.advance();
        if self.peek() == Some(next) {
            self.advance();
            self.make_token(double)
        } else {
            self.make_token(single)
        }
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        match Keyword::from_str(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier(String::from(text))),
        }
    }

    /// Scans the body of a quoted token, unescaping doubled quotes.
    ///
    /// Returns `None` when the closing quote is missing.
    fn scan_quoted(&mut self, quote: char) -> Option<String> {
        self.advance(); // opening quote
        let mut value = String::new();
        loop {
            match self.peek() {
                Some(c) if c == quote => {
                    self.advance();
                    if self.peek() == Some(quote) {
                        value.push(quote);
                        self.advance();
                    } else {
                        return Some(value);
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
                None => return None,
            }
        }
    }

    /// Scans a quoted identifier (e.g., "column name" or `column name`).
    fn scan_quoted_identifier(&mut self, quote: char) -> Token {
        match self.scan_quoted(quote) {
            Some(name) => self.make_token_with_text(TokenKind::Identifier(name.clone()), name),
            None => self.make_token(TokenKind::Error(String::from(
                "Unterminated quoted identifier",
            ))),
        }
    }

    /// Scans a string literal.
    fn scan_string(&mut self) -> Token {
        match self.scan_quoted('\'') {
            Some(value) => self.make_token_with_text(TokenKind::String(value.clone()), value),
            None => self.make_token(TokenKind::Error(String::from(
                "Unterminated string literal",
            ))),
        }
    }

    /// Scans a number (integer or float).
    fn scan_number(&mut self) -> Token {
        let mut is_float = false;

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            is_float = true;
            self.advance();
            if self.peek().is_some_and(|c| c == '+' || c == '-') {
                self.advance();
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = &self.input[self.start..self.pos];
        let kind = if is_float {
            text.parse::<f64>().map_or_else(
                |e| TokenKind::Error(format!("Invalid float: {e}")),
                TokenKind::Float,
            )
        } else {
            text.parse::<i64>().map_or_else(
                |e| TokenKind::Error(format!("Invalid integer: {e}")),
                TokenKind::Integer,
            )
        };
        self.make_token(kind)
    }

    /// Scans a blob literal (X'...' or x'...').
    fn scan_blob(&mut self) -> Token {
        self.advance(); // X/x
        self.advance(); // opening quote

        let mut bytes = Vec::new();
        let mut hex_chars = String::new();

        loop {
            match self.peek() {
                Some('\'') => break,
                Some(c) if c.is_ascii_hexdigit() => {
                    hex_chars.push(c);
                    self.advance();

                    if hex_chars.len() == 2 {
                        if let Ok(byte) = u8::from_str_radix(&hex_chars, 16) {
                            bytes.push(byte);
                        }
                        hex_chars.clear();
                    }
                }
                Some(_) => {
                    self.advance();
                    return self.make_token(TokenKind::Error(String::from(
                        "Invalid character in blob literal",
                    )));
                }
                None => {
                    return self
                        .make_token(TokenKind::Error(String::from("Unterminated blob literal")));
                }
            }
        }
        self.advance(); // closing quote

        if !hex_chars.is_empty() {
            return self.make_token(TokenKind::Error(String::from(
                "Odd number of hex digits in blob literal",
            )));
        }
        self.make_token(TokenKind::Blob(bytes))
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();
        self.mark_start();

        let Some(c) = self.peek() else {
            return Token::eof(self.make_span());
        };

        match c {
            '(' => self.single(TokenKind::LeftParen),
            ')' => self.single(TokenKind::RightParen),
            '[' => self.single(TokenKind::LeftBracket),
            ']' => self.single(TokenKind::RightBracket),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Star),
            '/' => self.single(TokenKind::Slash),
            '%' => self.single(TokenKind::Percent),
            '~' => self.single(TokenKind::BitNot),
            '?' => self.single(TokenKind::Question),
            '@' => self.single(TokenKind::At),
            '.' => self.single(TokenKind::Dot),
            '=' => self.single(TokenKind::Eq),
            '&' => self.single(TokenKind::BitAnd),
            ':' => self.one_or_two(':', TokenKind::DoubleColon, TokenKind::Colon),
            '|' => self.one_or_two('|', TokenKind::Concat, TokenKind::BitOr),
            '<' => match self.peek_next() {
                Some('=') => self.one_or_two('=', TokenKind::LtEq, TokenKind::Lt),
                Some('>') => self.one_or_two('>', TokenKind::NotEq, TokenKind::Lt),
                Some('<') => self.one_or_two('<', TokenKind::LeftShift, TokenKind::Lt),
                _ => self.single(TokenKind::Lt),
            },
            '>' => match self.peek_next() {
                Some('=') => self.one_or_two('=', TokenKind::GtEq, TokenKind::Gt),
                Some('>') => self.one_or_two('>', TokenKind::RightShift, TokenKind::Gt),
                _ => self.single(TokenKind::Gt),
            },
            '!' if self.peek_next() == Some('=') => {
                self.one_or_two('=', TokenKind::NotEq, TokenKind::NotEq)
            }
            '\'' => self.scan_string(),
            '"' | '`' => self.scan_quoted_identifier(c),
            'X' | 'x' if self.peek_next() == Some('\'') => self.scan_blob(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_alphabetic() || c == '_' => self.scan_identifier(),
            c => self.single(TokenKind::Error(format!("Unexpected character: {c}"))),
        }
    }

    /// Tokenizes the entire input into a stream ending in one EOF token.
    #[must_use]
    pub fn tokenize(mut self) -> TokenStream {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        TokenStream::new(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize().into_tokens()
    }

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    fn positions(input: &str) -> Vec<(String, usize, usize)> {
        tokenize(input)
            .into_iter()
            .map(|t| (t.text.clone(), t.line(), t.column()))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
    }

    #[test]
    fn test_whitespace_only() {
        let tokens = tokenize("   \n\t  ");
        assert_eq!(tokens.len(), 1);
        assert_eq!((tokens[0].line(), tokens[0].column()), (2, 4));
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            token_kinds("DROP -- comment\nTABLE /* more */ t"),
            vec![
                TokenKind::Keyword(Keyword::Drop),
                TokenKind::Keyword(Keyword::Table),
                TokenKind::Identifier(String::from("t")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_case_insensitive_identifiers_keep_case() {
        let tokens = tokenize("drop TABLE Dishes");
        assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Drop));
        assert_eq!(tokens[0].text, "drop");
        assert_eq!(tokens[1].kind, TokenKind::Keyword(Keyword::Table));
        assert_eq!(tokens[2].kind, TokenKind::Identifier(String::from("Dishes")));
    }

    #[test]
    fn test_quoted_identifiers() {
        assert_eq!(
            token_kinds("\"column name\" `select` \"a\"\"b\""),
            vec![
                TokenKind::Identifier(String::from("column name")),
                TokenKind::Identifier(String::from("select")),
                TokenKind::Identifier(String::from("a\"b")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            token_kinds("42 3.5 1e10 2.5e-3"),
            vec![
                TokenKind::Integer(42),
                TokenKind::Float(3.5),
                TokenKind::Float(1e10),
                TokenKind::Float(2.5e-3),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_integer_overflow_is_error_token() {
        let tokens = tokenize("99999999999999999999");
        assert!(matches!(&tokens[0].kind, TokenKind::Error(m) if m.starts_with("Invalid integer")));
        assert_eq!(tokens[0].text, "99999999999999999999");
    }

    #[test]
    fn test_string_text_is_unquoted() {
        let tokens = tokenize("'it''s  here'");
        assert_eq!(tokens[0].kind, TokenKind::String(String::from("it's  here")));
        assert_eq!(tokens[0].text, "it's  here");
    }

    #[test]
    fn test_unterminated_string() {
        let tokens = tokenize("'abc");
        assert_eq!(
            tokens[0].kind,
            TokenKind::Error(String::from("Unterminated string literal"))
        );
        assert!(tokens[1].is_eof());
    }

    #[test]
    fn test_blob() {
        let tokens = tokenize("X'48454C4C4F'");
        assert_eq!(tokens.len(), 2);
        assert!(
            matches!(&tokens[0].kind, TokenKind::Blob(b) if b == &[0x48, 0x45, 0x4C, 0x4C, 0x4F])
        );
    }

    #[test]
    fn test_x_alone_is_identifier() {
        assert_eq!(
            token_kinds("x"),
            vec![TokenKind::Identifier(String::from("x")), TokenKind::Eof]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            token_kinds("+ - * / % = != <> < <= > >= || & | ~ << >>"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::Eq,
                TokenKind::NotEq,
                TokenKind::NotEq,
                TokenKind::Lt,
                TokenKind::LtEq,
                TokenKind::Gt,
                TokenKind::GtEq,
                TokenKind::Concat,
                TokenKind::BitAnd,
                TokenKind::BitOr,
                TokenKind::BitNot,
                TokenKind::LeftShift,
                TokenKind::RightShift,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            token_kinds("( ) [ ] , ; . : :: ? @"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBracket,
                TokenKind::RightBracket,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Dot,
                TokenKind::Colon,
                TokenKind::DoubleColon,
                TokenKind::Question,
                TokenKind::At,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unknown_character_is_error_token() {
        let tokens = tokenize("drop # x");
        assert_eq!(
            tokens[1].kind,
            TokenKind::Error(String::from("Unexpected character: #"))
        );
        assert_eq!(tokens[1].text, "#");
        assert_eq!(tokens[1].column(), 6);
        assert_eq!(tokens[2].text, "x");
    }

    #[test]
    fn test_lone_bang_is_error_token() {
        assert!(matches!(tokenize("!")[0].kind, TokenKind::Error(_)));
    }

    #[test]
    fn test_line_and_column_tracking() {
        assert_eq!(
            positions("drop table\n  dishes cascade"),
            vec![
                (String::from("drop"), 1, 1),
                (String::from("table"), 1, 6),
                (String::from("dishes"), 2, 3),
                (String::from("cascade"), 2, 10),
                (String::from("end of input"), 2, 17),
            ]
        );
    }

    #[test]
    fn test_columns_count_characters() {
        let tokens = tokenize("select 'é' x");
        assert_eq!(tokens[2].text, "x");
        assert_eq!(tokens[2].column(), 12);
        assert_eq!(tokens[2].span.start, 12);
    }

    #[test]
    fn test_columns_on_long_line_match_fresh_line() {
        let body = "1,".repeat(5_000) + "x";
        let single = tokenize(&body);
        let shifted = tokenize(&format!("select\n{body}"));
        assert_eq!(single.len() + 1, shifted.len());
        for (token, moved) in single.iter().zip(&shifted[1..]) {
            assert_eq!(token.column(), moved.column());
            assert_eq!(moved.line(), 2);
        }
        assert_eq!(single[single.len() - 2].column(), 10_001);
    }

    #[test]
    fn test_multiline_string_moves_following_lines() {
        let tokens = tokenize("'a\nb' c");
        assert_eq!(tokens[0].line(), 1);
        assert_eq!((tokens[1].line(), tokens[1].column()), (2, 4));
    }

    #[test]
    fn test_span_tracking() {
        let tokens = tokenize("DROP t");
        assert_eq!(tokens[0].span, Span::new(0, 4, 1, 1));
        assert_eq!(tokens[1].span, Span::new(5, 6, 1, 6));
    }
}
