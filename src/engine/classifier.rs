// ============================================================
// Layer 5 — Token Classifier
// ============================================================
// Pairs every token with the tag the tagger produced and
// decides whether it is a CANDIDATE (allowed to become a
// blank). The tag itself comes from outside; this module only
// owns the candidate predicate:
//
//   candidate  ⇔  has at least one letter or digit
//                 AND (exclude_punctuation ⇒ not all symbols)
//                 AND (alphabetic_only     ⇒ every char is a letter)
//
// "Letter" is Unicode-alphabetic, so Latin and Hangul both
// count. alphabetic_only narrows candidates to purely
// alphabetic words.
//
// The first condition already rejects every all-symbol token,
// so exclude_punctuation only restates it.
//
// The tokenizer cuts "don't" into "don" "'" "t". The short tail
// after the apostrophe ("t", "s", "ll", "re", ...) is never a
// candidate: it is not a word a student can fill in.
//
// Reference: Rust Book §8 (Strings: iterating over chars)

use crate::domain::config::GenerationConfig;
use crate::domain::token::{TaggedToken, Token};

/// Decide whether a token's text may be blanked.
pub fn is_candidate(text: &str, exclude_punctuation: bool, alphabetic_only: bool) -> bool {
    let has_letter_or_digit = text.chars().any(char::is_alphanumeric);
    if !has_letter_or_digit {
        return false;
    }

    if exclude_punctuation && text.chars().all(is_symbol) {
        return false;
    }

    if alphabetic_only && !text.chars().all(char::is_alphabetic) {
        return false;
    }

    true
}

/// A character that is neither part of a word nor whitespace
fn is_symbol(c: char) -> bool {
    !(c.is_alphanumeric() || c == '_' || c.is_whitespace())
}

/// Attach tags and candidate flags. `tags` must have the same
/// length as `tokens`; the engine guarantees this by replacing
/// bad tagger output with fallback tags first.
pub fn classify(tokens: Vec<Token>, tags: Vec<String>, config: &GenerationConfig) -> Vec<TaggedToken> {
    debug_assert_eq!(tokens.len(), tags.len());

    let flags: Vec<bool> = (0..tokens.len())
        .map(|i| {
            is_candidate(&tokens[i].text, config.exclude_punctuation, config.alphabetic_only)
                && !is_contraction_tail(&tokens, i)
        })
        .collect();

    tokens
        .into_iter()
        .zip(tags)
        .zip(flags)
        .map(|((token, tag), candidate)| TaggedToken::new(token, tag, candidate))
        .collect()
}

/// word + apostrophe + at most two characters, with no space between
fn is_contraction_tail(tokens: &[Token], i: usize) -> bool {
    if i < 2 || tokens[i].text.chars().count() > 2 {
        return false;
    }
    let (word, mark, tail) = (&tokens[i - 2], &tokens[i - 1], &tokens[i]);
    matches!(mark.text.as_str(), "'" | "\u{2019}")
        && word.span.1 == mark.span.0
        && mark.span.1 == tail.span.0
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_and_numbers_are_candidates() {
        assert!(is_candidate("cat", true, false));
        assert!(is_candidate("2024", true, false));
        assert!(is_candidate("학교", true, false));
        assert!(is_candidate("3rd", true, false));
    }

    #[test]
    fn test_punctuation_is_never_a_candidate() {
        assert!(!is_candidate(".", true, false));
        assert!(!is_candidate("?!\"", true, false));
        assert!(!is_candidate("", true, false));
    }

    #[test]
    fn test_punctuation_exclusion_does_not_change_the_result() {
        for text in ["...", "&", "?!", "cat", "3rd", "--", "e.g"] {
            assert_eq!(
                is_candidate(text, true, false),
                is_candidate(text, false, false),
                "{text}"
            );
        }
    }

    #[test]
    fn test_alphabetic_only_skips_digits_and_mixed() {
        assert!(is_candidate("cat", true, true));
        assert!(is_candidate("학교", true, true));
        assert!(!is_candidate("2024", true, true));
        assert!(!is_candidate("3rd", true, true));
    }

    #[test]
    fn test_classify_keeps_order_and_tags() {
        let tokens = vec![
            Token::new(0, "Hi", 0, 2),
            Token::new(1, "!", 2, 3),
        ];
        let tags = vec!["UH".to_string(), ".".to_string()];
        let tagged = classify(tokens, tags, &GenerationConfig::default());
        assert_eq!(tagged.len(), 2);
        assert_eq!(tagged[0].tag, "UH");
        assert!(tagged[0].candidate);
        assert_eq!(tagged[1].index(), 1);
        assert!(!tagged[1].candidate);
    }

    fn tokens(text: &str) -> Vec<Token> {
        crate::engine::tokenizer::WordTokenizer::new().tokenize(text)
    }

    fn candidates(text: &str) -> Vec<String> {
        let toks = tokens(text);
        let tags = vec!["NN".to_string(); toks.len()];
        classify(toks, tags, &GenerationConfig::default())
            .into_iter()
            .filter(|t| t.candidate)
            .map(|t| t.text().to_string())
            .collect()
    }

    #[test]
    fn test_contraction_tails_are_not_candidates() {
        assert_eq!(candidates("I don't know."), vec!["I", "don", "know"]);
        assert_eq!(candidates("John's dog we'll see"), vec!["John", "dog", "we", "see"]);
        assert_eq!(candidates("It\u{2019}s fine"), vec!["It", "fine"]);
    }

    #[test]
    fn test_quoted_letter_after_space_is_still_a_candidate() {
        // The apostrophe opens a quote, it does not join a word
        assert_eq!(candidates("grade 'A' paper"), vec!["grade", "A", "paper"]);
    }
}
