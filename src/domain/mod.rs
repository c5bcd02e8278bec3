// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits that define what a
// worksheet IS: tokens, paragraphs, blanks, the answer ledger
// and the settings that drive a generation run.
//
// Rules for this layer:
//   - NO docx-rs types allowed here
//   - NO file I/O
//   - NO tokenizer or tagger implementations
//   - Only plain data, small invariants and the trait seams
//
// Everything the blanking engine (Layer 5) produces is built
// out of these types, so they stay easy to unit test.
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// A loaded source document (ordered paragraph texts)
pub mod document;

// Tokens before and after classification, and masked slots
pub mod token;

// Closed set of grammatical categories a worksheet can target
pub mod category;

// Per-paragraph record, blank entries and the global counter
pub mod paragraph;

// Placeholder marker format: (n)___
pub mod placeholder;

// The document-wide answer ledger and its rendered layouts
pub mod ledger;

// Generation settings and worksheet furniture
pub mod config;

// Core abstractions (traits) that other layers implement
pub mod traits;
