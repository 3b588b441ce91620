/// Removes one pair of matching single or double quotes around `s`.
#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let (first, last) = (b[0], b[b.len() - 1]);
        if first == last && (first == b'\'' || first == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Splits on commas that are not inside quotes. Tokens are trimmed and keep
/// their quotes. A blank line yields no tokens; a trailing comma yields a
/// trailing empty token.
pub fn split_csv_preserving_quotes(line: &str) -> Vec<&str> {
    if line.trim().is_empty() {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_quotes: Option<char> = None;

    for (i, ch) in line.char_indices() {
        match in_quotes {
            Some(q) if ch == q => in_quotes = None,
            Some(_) => {}
            None if ch == '"' || ch == '\'' => in_quotes = Some(ch),
            None if ch == ',' => {
                out.push(line[start..i].trim());
                start = i + 1;
            }
            None => {}
        }
    }
    out.push(line[start..].trim());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_quotes_works() {
        assert_eq!(strip_surrounding_quotes("'a,b'"), "a,b");
        assert_eq!(strip_surrounding_quotes(r#""x""#), "x");
        assert_eq!(strip_surrounding_quotes("nq"), "nq");
        assert_eq!(strip_surrounding_quotes("'mixed\""), "'mixed\"");
    }

    #[test]
    fn split_preserving_quotes() {
        let line = r#"'sunny',85,"85",FALSE,no"#;
        assert_eq!(
            split_csv_preserving_quotes(line),
            vec!["'sunny'", "85", "\"85\"", "FALSE", "no"]
        );
    }

    #[test]
    fn quoted_commas_do_not_split() {
        let line = "'a, b', c ,d";
        assert_eq!(split_csv_preserving_quotes(line), vec!["'a, b'", "c", "d"]);
    }

    #[test]
    fn empty_and_inner_empty_tokens() {
        assert!(split_csv_preserving_quotes("").is_empty());
        assert!(split_csv_preserving_quotes("   ").is_empty());
        assert_eq!(split_csv_preserving_quotes("1,,2"), vec!["1", "", "2"]);
        assert_eq!(split_csv_preserving_quotes("1,a,"), vec!["1", "a", ""]);
    }
}
