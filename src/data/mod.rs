// ============================================================
// Layer 4 — Document I/O
// ============================================================
// This layer handles everything between files on disk and
// the plain paragraph strings the blanking engine works on.
//
// The pipeline flows in this order:
//
//   .docx / .txt file
//       │
//       ▼
//   DocxLoader / TextLoader → paragraphs in document order
//       │
//       ▼
//   Preprocessor            → cleans each paragraph (never drops one)
//       │
//       ▼
//   (Layer 5 engine blanks the paragraphs)
//       │
//       ▼
//   WorksheetWriter         → header, masked text, page break,
//                             answer key → .docx
//
// Each module is responsible for exactly one step.
//
// Reference: docx-rs crate documentation
//            Rust Book §13 (Iterators and Closures)

/// Loads .docx and .txt documents
pub mod loader;

/// Cleans and normalises paragraph text
pub mod preprocessor;

/// Writes the worksheet .docx using docx-rs
pub mod writer;
