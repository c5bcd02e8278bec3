// ============================================================
// Layer 5 — Word Tokenizer
// ============================================================
// Splits one paragraph into tokens using the `Whitespace`
// pre-tokenizer from the HuggingFace tokenizers crate. Its
// pattern is
//
//   \w+ | [^\w\s]+
//
// so every run of word characters (Latin, Hangul, digits, …)
// becomes one token and every run of punctuation becomes
// another. Whitespace is the only thing removed, which means
// no visible character is ever dropped.
//
// Example:
//   "The cat sat on the mat."
//   → ["The", "cat", "sat", "on", "the", "mat", "."]
//
// We keep the byte span of every token so taggers that run on
// the raw text (nlprule) can be aligned back to our tokens.
//
// If the pre-tokenizer ever returns an error we fall back to a
// plain whitespace split instead of failing the paragraph.
//
// Reference: tokenizers crate, pre_tokenizers::whitespace

use tokenizers::pre_tokenizers::whitespace::Whitespace;
use tokenizers::{OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer};

use crate::domain::token::Token;

pub struct WordTokenizer {
    pre_tokenizer: Whitespace,
}

impl WordTokenizer {
    pub fn new() -> Self {
        Self { pre_tokenizer: Whitespace {} }
    }

    /// Split `text` into ordered tokens. Deterministic, no side effects.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut pretokenized = PreTokenizedString::from(text);
        if let Err(e) = self.pre_tokenizer.pre_tokenize(&mut pretokenized) {
            tracing::warn!("Pre-tokenizer failed ({e}); splitting on whitespace instead");
            return split_whitespace(text);
        }

        pretokenized
            .get_splits(OffsetReferential::Original, OffsetType::Byte)
            .into_iter()
            .enumerate()
            .map(|(index, (piece, (start, end), _))| Token::new(index, piece, start, end))
            .collect()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Whitespace-only split with byte spans, used as the fallback path.
fn split_whitespace(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push(Token::new(tokens.len(), &text[s..i], s, i));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(Token::new(tokens.len(), &text[s..], s, text.len()));
    }

    tokens
}
