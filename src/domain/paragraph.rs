// ============================================================
// Layer 3 — Paragraph, Blank Entry and Blank Counter
// ============================================================
// ParagraphRecord
//   One source paragraph on its way through the engine: the
//   original text, its tagged tokens and the positions chosen
//   for blanking. Created once per paragraph, consumed when
//   the output paragraph is produced.
//
// BlankEntry
//   One masked position: its document-wide number, the hidden
//   word and the paragraph it came from.
//
// BlankCounter
//   The document-wide blank number sequence. It is a plain
//   value that the engine threads through every paragraph
//   call and gets back updated, so there is no shared mutable
//   state and numbering can never reset between paragraphs.
//
// Reference: Rust Book §5 (Structs), §4 (Ownership: moving values)

use serde::{Deserialize, Serialize};

use crate::domain::token::TaggedToken;

/// One source paragraph with its classified tokens.
#[derive(Debug, Clone)]
pub struct ParagraphRecord {
    /// Position of the paragraph in the source document
    pub index: usize,

    /// Paragraph text after preprocessing (may be empty)
    pub original: String,

    /// Classified tokens in reading order
    pub tokens: Vec<TaggedToken>,

    /// Token positions picked for blanking, ascending
    pub chosen: Vec<usize>,
}

impl ParagraphRecord {
    pub fn new(index: usize, original: impl Into<String>, tokens: Vec<TaggedToken>) -> Self {
        Self {
            index,
            original: original.into(),
            tokens,
            chosen: Vec::new(),
        }
    }

    /// Number of tokens the candidate predicate accepted
    pub fn candidate_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.candidate).count()
    }
}

/// One (blank number → original word) pair of the answer key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlankEntry {
    /// Document-wide number shown in the placeholder, starting at 1
    pub number: usize,

    /// The word that was hidden
    pub answer: String,

    /// Index of the paragraph the blank lives in
    pub paragraph: usize,
}

impl BlankEntry {
    pub fn new(number: usize, answer: impl Into<String>, paragraph: usize) -> Self {
        Self {
            number,
            answer: answer.into(),
            paragraph,
        }
    }

    /// "3. sat": the text used in answer-key cells
    pub fn label(&self) -> String {
        format!("{}. {}", self.number, self.answer)
    }
}

/// Running blank number sequence for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlankCounter {
    issued: usize,
}

impl BlankCounter {
    /// A fresh counter; the first number it hands out is 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next unused number
    pub fn next_number(&mut self) -> usize {
        self.issued += 1;
        self.issued
    }

    /// How many numbers have been issued so far
    pub fn issued(&self) -> usize {
        self.issued
    }
}
