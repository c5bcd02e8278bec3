// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Cleans paragraph text extracted from .docx files before it
// reaches the blanking engine.
//
// Why do we need to clean text?
//   .docx files often contain:
//   - Non-breaking spaces (U+00A0) from Word formatting
//   - Zero-width spaces (U+200B) from copy-pasting
//   - Byte order marks (U+FEFF) at the start of pasted text
//   - Tab characters from table formatting
//   - Multiple consecutive spaces from indentation
//   - Control characters from special Word features
//
// The worksheet is rebuilt from tokens, so stray whitespace
// would be lost anyway; cleaning it first keeps placeholder
// widths and spacing predictable.
//
// Cleaning steps (applied to each paragraph):
//   1. Replace Unicode whitespace variants with plain space
//   2. Replace control characters (including \r, \n) with space
//   3. Collapse multiple spaces into one
//   4. Trim leading/trailing whitespace
//
// A paragraph is NEVER removed, even if it cleans down to "".
// The paragraph count must match the source document.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

use crate::domain::document::Document;

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Clean one paragraph of text.
    pub fn clean_paragraph(&self, text: &str) -> String {
        let mut out        = String::with_capacity(text.len());
        let mut last_space = true; // swallows leading spaces

        for c in text.chars() {
            let c = match c {
                // Non-breaking, zero-width and BOM → space
                '\u{00A0}' | '\u{200B}' | '\u{FEFF}' | '\u{3000}' => ' ',
                // Tab, \r, \n and any other control character → space
                c if c.is_control() => ' ',
                c => c,
            };

            if c == ' ' {
                // Only add a space if the last char wasn't a space
                if !last_space {
                    out.push(' ');
                }
                last_space = true;
            } else {
                out.push(c);
                last_space = false;
            }
        }

        // At most one trailing space can remain
        if out.ends_with(' ') {
            out.pop();
        }
        out
    }

    /// Clean every paragraph of a document, keeping the count.
    pub fn clean_document(&self, document: Document) -> Document {
        let paragraphs = document
            .paragraphs
            .iter()
            .map(|p| self.clean_paragraph(p))
            .collect();
        Document::new(document.source, paragraphs)
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
