// ============================================================
// Layer 5 — Reassembler
// ============================================================
// Joins a token sequence back into one line of text.
//
// Rule (one rule, applied everywhere):
//   - the first token has no leading separator
//   - a token made only of punctuation is glued to the previous
//     token with no space
//   - every other token gets exactly one space in front
//
//   ["The", "cat", "(1)___", ",", "right", "?"]
//   → "The cat (1)___, right?"
//
// Known rough edge: opening quotes and brackets are punctuation
// too, so they glue LEFT, and the word after them gets a space:
//
//   ["He", "said", "\"", "hi", "\""]  → "He said\" hi\""
//
// The same goes for contractions and possessives, which the
// tokenizer cuts at the apostrophe:
//
//   ["don", "'", "t"]   → "don' t"
//   ["John", "'", "s"]  → "John' s"
//
// The classifier never blanks the "t" / "s" tail.
//
// Placeholders always contain digits, so they are never glued.

use crate::domain::token::Slot;

/// True when every character is punctuation or a symbol.
/// Empty strings are not punctuation.
pub fn is_punctuation_only(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| !c.is_alphanumeric() && !c.is_whitespace())
}

/// Join display texts with the spacing rule above.
pub fn assemble<S: AsRef<str>>(pieces: &[S]) -> String {
    let mut out = String::new();
    for (i, piece) in pieces.iter().enumerate() {
        let piece = piece.as_ref();
        if i > 0 && !is_punctuation_only(piece) {
            out.push(' ');
        }
        out.push_str(piece);
    }
    out
}

/// Join a masked paragraph.
pub fn assemble_slots(slots: &[Slot]) -> String {
    let pieces: Vec<String> = slots.iter().map(Slot::display).collect();
    assemble(&pieces)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::token::{TaggedToken, Token};

    #[test]
    fn test_punctuation_glues_left() {
        assert_eq!(
            assemble(&["The", "cat", "sat", "on", "the", "mat", "."]),
            "The cat sat on the mat."
        );
        assert_eq!(assemble(&["Hello", ",", "world", "!"]), "Hello, world!");
    }

    #[test]
    fn test_clusters_count_as_punctuation() {
        assert_eq!(assemble(&["Wait", "...", "what", "?!"]), "Wait... what?!");
    }

    #[test]
    fn test_opening_quote_quirk_is_stable() {
        assert_eq!(
            assemble(&["He", "said", "\"", "hi", "\""]),
            "He said\" hi\""
        );
    }

    #[test]
    fn test_contraction_spacing_is_stable() {
        assert_eq!(assemble(&["I", "don", "'", "t", "know"]), "I don' t know");
    }

    #[test]
    fn test_empty_sequence_is_empty_string() {
        let none: [&str; 0] = [];
        assert_eq!(assemble(&none), "");
    }

    #[test]
    fn test_first_token_punctuation_has_no_space() {
        assert_eq!(assemble(&["-", "item"]), "- item");
    }

    #[test]
    fn test_is_punctuation_only() {
        assert!(is_punctuation_only("."));
        assert!(is_punctuation_only("?!\""));
        assert!(!is_punctuation_only("(1)___"));
        assert!(!is_punctuation_only("학교"));
        assert!(!is_punctuation_only(""));
    }

    #[test]
    fn test_assemble_slots_shows_placeholders() {
        let tok = |i, w: &str| TaggedToken::new(Token::new(i, w, 0, 0), "NN", true);
        let slots = vec![
            Slot::Original(tok(0, "Cats")),
            Slot::Blanked { number: 1, original: tok(1, "sleep") },
            Slot::Original(tok(2, ".")),
        ];
        assert_eq!(assemble_slots(&slots), "Cats (1)_____.");
    }
}
