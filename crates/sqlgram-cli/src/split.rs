//! Splitting of SQL scripts into single statements.

/// One statement cut out of a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Statement text, without the terminating `;`.
    pub sql: String,
    /// 1-based script line on which the statement starts.
    pub line: usize,
}

impl Fragment {
    /// A fragment standing for a whole, unsplit statement.
    #[must_use]
    pub fn whole(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            line: 1,
        }
    }
}

/// Splits `script` on `;` outside quotes and comments.
///
/// Leading whitespace and comments of each statement are dropped, so
/// [`Fragment::line`] is the line of its first token. Pieces holding no
/// code at all are skipped.
#[must_use]
pub fn split_statements(script: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut chars = script.char_indices().peekable();
    let mut line = 1;
    // Byte offset and line of the first code character of the current piece
    let mut start: Option<(usize, usize)> = None;

    let mut push = |from: usize, to: usize, line: usize| {
        fragments.push(Fragment {
            sql: script[from..to].trim_end().to_string(),
            line,
        });
    };

    while let Some((i, c)) = chars.next() {
        match c {
            '\n' => line += 1,
            '-' if chars.peek().is_some_and(|&(_, n)| n == '-') => {
                // Stop before the newline so it is still counted
                while chars.next_if(|&(_, n)| n != '\n').is_some() {}
            }
            '/' if chars.peek().is_some_and(|&(_, n)| n == '*') => {
                chars.next();
                let mut prev = '\0';
                for (_, n) in chars.by_ref() {
                    if n == '\n' {
                        line += 1;
                    }
                    if prev == '*' && n == '/' {
                        break;
                    }
                    prev = n;
                }
            }
            '\'' | '"' | '`' => {
                start.get_or_insert((i, line));
                while let Some((_, n)) = chars.next() {
                    if n == '\n' {
                        line += 1;
                    }
                    // A doubled quote is an escaped quote
                    if n == c && chars.next_if(|&(_, m)| m == c).is_none() {
                        break;
                    }
                }
            }
            ';' => {
                if let Some((from, first_line)) = start.take() {
                    push(from, i, first_line);
                }
            }
            c if c.is_whitespace() => {}
            _ => {
                start.get_or_insert((i, line));
            }
        }
    }

    if let Some((from, first_line)) = start {
        push(from, script.len(), first_line);
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(script: &str) -> Vec<String> {
        split_statements(script).into_iter().map(|f| f.sql).collect()
    }

    #[test]
    fn test_split_on_semicolons() {
        assert_eq!(
            texts("drop table a; drop index b;\ndrop view c"),
            vec!["drop table a", "drop index b", "drop view c"]
        );
    }

    #[test]
    fn test_semicolons_in_quotes_are_kept() {
        assert_eq!(
            texts("SELECT 'a;b', \"x;y\", `p;q` FROM t; SELECT 'it''s;'"),
            vec!["SELECT 'a;b', \"x;y\", `p;q` FROM t", "SELECT 'it''s;'"]
        );
    }

    #[test]
    fn test_semicolons_in_comments_are_ignored() {
        assert_eq!(
            texts("-- first; statement\nSELECT 1 /* ; */ + 2;\n/* trailing; */"),
            vec!["SELECT 1 /* ; */ + 2"]
        );
    }

    #[test]
    fn test_minus_and_slash_are_code() {
        assert_eq!(texts("SELECT 4 - 2 / 1"), vec!["SELECT 4 - 2 / 1"]);
    }

    #[test]
    fn test_start_lines() {
        let fragments = split_statements("\n\n  drop table a;\n-- note\ndrop table b\n;");
        assert_eq!(
            fragments,
            vec![
                Fragment {
                    sql: String::from("drop table a"),
                    line: 3
                },
                Fragment {
                    sql: String::from("drop table b"),
                    line: 5
                },
            ]
        );
    }

    #[test]
    fn test_multiline_string_counts_lines() {
        let fragments = split_statements("SELECT 'a\nb';\nSELECT 2");
        assert_eq!(fragments[1].line, 3);
    }

    #[test]
    fn test_empty_pieces_are_skipped() {
        assert!(split_statements(" ; ;; -- only a comment\n").is_empty());
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(texts("SELECT 'oops; DROP x"), vec!["SELECT 'oops; DROP x"]);
    }
}
