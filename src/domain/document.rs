// ============================================================
// Layer 3 — Source Document Type
// ============================================================
// Represents one uploaded document after its text has been
// pulled out of the container format.
//
// Unlike a plain text blob, a worksheet must keep the
// paragraph structure: every source paragraph (including
// empty ones used as spacing) maps to exactly one output
// paragraph. So the document is an ordered Vec of paragraph
// strings rather than a single joined String.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §8 (Vectors)

use serde::{Deserialize, Serialize};

/// A source document loaded from disk.
/// Format-agnostic: by the time a Document exists the text
/// has already been extracted from the .docx or .txt file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The filename the paragraphs came from (for logs and titles)
    pub source: String,

    /// Paragraph texts in document order. Empty strings are
    /// blank lines and must be preserved.
    pub paragraphs: Vec<String>,
}

impl Document {
    /// Create a new Document from a source name and its paragraphs.
    ///
    /// Example:
    ///   let doc = Document::new("lesson3.docx", vec!["The cat sat.".into(), String::new()]);
    pub fn new(source: impl Into<String>, paragraphs: Vec<String>) -> Self {
        Self {
            source: source.into(),
            paragraphs,
        }
    }

    /// Number of paragraphs, empty ones included
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// True when the document has no paragraphs at all
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Number of paragraphs that contain something other than whitespace
    pub fn non_empty_paragraphs(&self) -> usize {
        self.paragraphs
            .iter()
            .filter(|p| !p.trim().is_empty())
            .count()
    }
}
