// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The blanking engine talks to its collaborators only through
// these traits, so each one can be swapped without touching
// the engine:
//
//   DocumentSource
//     - DocxLoader → paragraphs of a .docx body
//     - TextLoader → one paragraph per line of a .txt file
//
//   PosTagger
//     - LexiconTagger → built-in rules, no data files needed
//     - NlpruleTagger → nlprule English model (feature "nlprule")
//     - test stubs that fail on purpose
//
// Randomness is not a trait of its own here: the engine is
// generic over rand::Rng, so a seeded StdRng can be passed in
// from tests.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::document::Document;
use crate::domain::token::Token;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Anything that can yield the ordered paragraphs of one document.
pub trait DocumentSource {
    /// Load the document. Must keep paragraph order and must not
    /// drop empty paragraphs. An unreadable source is an error.
    fn load(&self) -> Result<Document>;
}

// ─── PosTagger ────────────────────────────────────────────────────────────────
/// Anything that can assign a part-of-speech tag to each token.
pub trait PosTagger {
    /// Return one tag per token, same order, same length.
    /// An Err (or a result of the wrong length) makes the engine
    /// fall back to a neutral tag for that paragraph.
    fn tag(&self, tokens: &[Token]) -> Result<Vec<String>>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
