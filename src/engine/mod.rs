// ============================================================
// Layer 5 — Blanking Engine
// ============================================================
// Turns one paragraph of text into a masked paragraph plus
// answer entries. This is the only layer that knows how
// blanks are chosen.
//
// The steps, in order:
//
//   tokenizer.rs   → split text into word and punctuation tokens
//   tagger.rs      → built-in part-of-speech tagger
//   classifier.rs  → attach tags, decide which tokens are candidates
//   selector.rs    → pick a random subset of candidates to blank
//   masker.rs      → replace picks with numbered placeholders
//   reassembler.rs → join tokens back into one line of text
//   pipeline.rs    → run all of the above over a whole document,
//                    threading the blank counter and the ledger
//
// Nothing in this layer touches the filesystem or docx-rs.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            rand crate documentation

/// Word / punctuation splitting built on tokenizers' pre-tokenizer
pub mod tokenizer;

/// Rule-and-lexicon part-of-speech tagger (Penn Treebank codes)
pub mod tagger;

/// Candidate predicate and tag attachment
pub mod classifier;

/// Ratio-driven random choice of positions
pub mod selector;

/// Placeholder substitution and blank numbering
pub mod masker;

/// Spacing rules for joining tokens
pub mod reassembler;

/// Whole-document orchestration
pub mod pipeline;
