//! Source location tracking for tokens.

/// Location of a token in the source text.
///
/// `start`/`end` are byte offsets; `line` and `column` are 1-based, with
/// `column` counted in characters so a caret can be placed under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Line of the first character.
    pub line: usize,
    /// Column of the first character.
    pub column: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no source text.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the source text covered by this span.
    #[must_use]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::new(0, 0, 1, 1)
    }
}

/// Returns the text of the given 1-based line, without its line terminator.
///
/// Lines past the end of the source (e.g. after a trailing newline) are empty.
#[must_use]
pub fn source_line(source: &str, line: usize) -> &str {
    line.checked_sub(1)
        .and_then(|index| source.split('\n').nth(index))
        .map_or("", |text| text.strip_suffix('\r').unwrap_or(text))
}
