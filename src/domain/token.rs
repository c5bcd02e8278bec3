// ============================================================
// Layer 3 — Token Domain Types
// ============================================================
// A paragraph goes through three shapes on its way to the
// worksheet:
//
//   Token        → raw text cut out of the paragraph
//   TaggedToken  → Token + part-of-speech tag + candidate flag
//   Slot         → either the original TaggedToken or a blank
//
// Tokens are never edited in place. Masking builds a new
// Slot::Blanked that still owns the original token, so the
// answer text is always recoverable from the output.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};

use crate::domain::placeholder;

/// One unit of text produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Position in the paragraph's token sequence (0-based)
    pub index: usize,

    /// The exact text of the token as it appeared in the source
    pub text: String,

    /// Byte offsets [start, end) into the paragraph text
    pub span: (usize, usize),
}

impl Token {
    pub fn new(index: usize, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            index,
            text: text.into(),
            span: (start, end),
        }
    }
}

/// A token after the tagger and the candidate predicate ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: Token,

    /// Fine-grained tag code (Penn Treebank style, e.g. "VBD")
    pub tag: String,

    /// Whether the token may be turned into a blank at all
    pub candidate: bool,
}

impl TaggedToken {
    pub fn new(token: Token, tag: impl Into<String>, candidate: bool) -> Self {
        Self {
            token,
            tag: tag.into(),
            candidate,
        }
    }

    pub fn text(&self) -> &str {
        &self.token.text
    }

    pub fn index(&self) -> usize {
        self.token.index
    }
}

/// A position in a (possibly) masked paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// Token shown as-is
    Original(TaggedToken),

    /// Token replaced by a numbered blank
    Blanked {
        number:   usize,
        original: TaggedToken,
    },
}

impl Slot {
    /// The text that ends up on the worksheet for this slot
    pub fn display(&self) -> String {
        match self {
            Slot::Original(t) => t.text().to_string(),
            Slot::Blanked { number, original } => {
                placeholder::render(*number, original.text())
            }
        }
    }

    /// The underlying token, blanked or not
    pub fn original(&self) -> &TaggedToken {
        match self {
            Slot::Original(t) => t,
            Slot::Blanked { original, .. } => original,
        }
    }

    /// Blank number if this slot was masked
    pub fn blank_number(&self) -> Option<usize> {
        match self {
            Slot::Original(_) => None,
            Slot::Blanked { number, .. } => Some(*number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(text: &str) -> TaggedToken {
        TaggedToken::new(Token::new(0, text, 0, text.len()), "NN", true)
    }

    #[test]
    fn test_original_slot_displays_text() {
        let slot = Slot::Original(tagged("cat"));
        assert_eq!(slot.display(), "cat");
        assert_eq!(slot.blank_number(), None);
    }

    #[test]
    fn test_blanked_slot_keeps_original() {
        let slot = Slot::Blanked { number: 4, original: tagged("garden") };
        assert_eq!(slot.display(), "(4)______");
        assert_eq!(slot.original().text(), "garden");
        assert_eq!(slot.blank_number(), Some(4));
    }
}
