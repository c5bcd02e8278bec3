// ============================================================
// Layer 3 — Placeholder Marker Format
// ============================================================
// Every masked token is shown on the worksheet as
//
//   (<blank number>)<underscores>
//
// e.g. "sat" → "(1)___", "garden" → "(2)______".
// The underscore run matches the hidden word's character
// length so students get a length hint, but never drops
// below MIN_UNDERSCORES so short words stay writable.
//
// parse_numbers() is the inverse used to check that every
// marker in the finished worksheet has a ledger entry.

/// Shortest underscore run a blank may have
pub const MIN_UNDERSCORES: usize = 3;

/// Render the placeholder for blank `number` hiding `original`.
pub fn render(number: usize, original: &str) -> String {
    let width = original.chars().count().max(MIN_UNDERSCORES);
    format!("({number}){}", "_".repeat(width))
}

/// Find every placeholder in `text` and return their numbers
/// in the order they appear.
///
/// A placeholder is '(' + one or more ASCII digits + ')'
/// followed immediately by at least MIN_UNDERSCORES underscores.
pub fn parse_numbers(text: &str) -> Vec<usize> {
    let chars: Vec<char> = text.chars().collect();
    let mut numbers = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '(' {
            i += 1;
            continue;
        }

        // Collect the digit run after '('
        let mut j = i + 1;
        while j < chars.len() && chars[j].is_ascii_digit() {
            j += 1;
        }
        let has_digits = j > i + 1;
        if !has_digits || j >= chars.len() || chars[j] != ')' {
            i += 1;
            continue;
        }

        // Count underscores after ')'
        let mut k = j + 1;
        while k < chars.len() && chars[k] == '_' {
            k += 1;
        }
        if k - (j + 1) < MIN_UNDERSCORES {
            i += 1;
            continue;
        }

        let digits: String = chars[i + 1..j].iter().collect();
        if let Ok(n) = digits.parse::<usize>() {
            numbers.push(n);
        }
        i = k;
    }

    numbers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_words_get_minimum_width() {
        assert_eq!(render(1, "sat"), "(1)___");
        assert_eq!(render(2, "a"), "(2)___");
    }

    #[test]
    fn test_width_follows_char_length() {
        assert_eq!(render(10, "mountain"), "(10)________");
        // Hangul: 3 chars, 9 bytes
        assert_eq!(render(3, "학교에"), "(3)___");
        assert_eq!(render(3, "도서관에서"), "(3)_____");
    }

    #[test]
    fn test_parse_finds_markers_in_order() {
        let text = "The (1)___ sat on (2)___ mat (12)_____.";
        assert_eq!(parse_numbers(text), vec![1, 2, 12]);
    }

    #[test]
    fn test_parse_ignores_plain_parentheses() {
        assert!(parse_numbers("See page (3) and (b)___ here.").is_empty());
        assert!(parse_numbers("Too short (4)__ marker").is_empty());
    }

    #[test]
    fn test_parse_inverts_render() {
        let text = format!("{} {}", render(7, "running"), render(8, "x"));
        assert_eq!(parse_numbers(&text), vec![7, 8]);
    }
}
