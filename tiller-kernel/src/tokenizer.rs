//! Input-line tokenization.

/// Split a line into whitespace-separated tokens, honoring double-quote
/// grouping.
///
/// A double quote toggles quoted mode and is never copied to the output;
/// spaces inside quotes are preserved as content. Runs of separators yield no
/// empty tokens. No escaping is supported: an unterminated quote simply stays
/// open through the end of the line, absorbing any remaining separators into
/// the final token.
pub fn split(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut buffer = String::new();
    let mut in_quote = false;

    for c in line.chars() {
        if c == '"' {
            in_quote = !in_quote;
        } else if c == ' ' && !in_quote {
            if !buffer.is_empty() {
                tokens.push(std::mem::take(&mut buffer));
            }
        } else {
            buffer.push(c);
        }
    }

    if !buffer.is_empty() {
        tokens.push(buffer);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_simple_split() {
        assert_eq!(split("a b c"), owned(&["a", "b", "c"]));
    }

    #[test]
    fn test_quoted_group() {
        assert_eq!(split("a \"b c\" d"), owned(&["a", "b c", "d"]));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split(""), Vec::<String>::new());
    }

    #[test]
    fn test_separator_collapse() {
        assert_eq!(split("  a   b  "), owned(&["a", "b"]));
    }

    #[test]
    fn test_quotes_are_not_copied() {
        assert_eq!(split("\"a\""), owned(&["a"]));
        assert_eq!(split("say \"\" nothing"), owned(&["say", "nothing"]));
    }

    #[test]
    fn test_unterminated_quote_absorbs_separators() {
        assert_eq!(split("a \"b c d"), owned(&["a", "b c d"]));
    }

    #[test]
    fn test_adjacent_quoted_and_plain() {
        assert_eq!(split("pre\"mid dle\"post"), owned(&["premid dlepost"]));
    }
}
