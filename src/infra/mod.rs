// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles the concerns that sit around a generation run
// rather than inside it:
//
//   answer_store.rs   — Answer key persistence
//                       Saves the ledger plus the settings that
//                       produced it as JSON, and loads it back
//                       for the `answers` command.
//
//   report.rs         — Blanking report
//                       Writes per-paragraph statistics to CSV
//                       and logs realised vs configured rate.
//
//   nlprule_tagger.rs — Statistical tagger
//                       Compiled with the `nlprule` feature (default).
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Answer key JSON saving and loading
pub mod answer_store;

/// Per-paragraph CSV report and run summary
pub mod report;

/// nlprule-backed part-of-speech tagger
#[cfg(feature = "nlprule")]
pub mod nlprule_tagger;
