// ============================================================
// Layer 3 — Generation Settings
// ============================================================
// GenerationConfig
//   Everything the blanking engine reads: which category to
//   target, what fraction of candidates to blank, how strict
//   the candidate predicate is, and an optional RNG seed.
//   Serialisable so it can be stored next to the answer key
//   and the run can be reproduced later with the same seed.
//
// WorksheetLayout
//   The "furniture" of the output document: header fields,
//   title, answer-key heading and answer layout. The engine
//   never reads it; only the document writer does.
//
// Reference: Rust Book §5 (Structs), serde documentation

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::domain::category::PosCategory;
use crate::domain::ledger::AnswerLayout;

/// Default fraction of candidates to blank (the original form's 20%)
pub const DEFAULT_RATIO: f64 = 0.20;

// ─── GenerationConfig ────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Which part of speech to blank ("all" matches everything)
    pub category: PosCategory,

    /// Fraction of eligible candidates to blank, per paragraph.
    /// Must be in (0, 1].
    pub ratio: f64,

    /// Reject tokens made entirely of non-word symbols
    pub exclude_punctuation: bool,

    /// Only tokens made entirely of letters may be blanked
    /// (numbers and mixed tokens like "3rd" are skipped)
    pub alphabetic_only: bool,

    /// Fixed seed for reproducible worksheets; None = random
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            category:            PosCategory::All,
            ratio:               DEFAULT_RATIO,
            exclude_punctuation: true,
            alphabetic_only:     false,
            seed:                None,
        }
    }
}

impl GenerationConfig {
    /// Check the settings before any document is touched.
    pub fn validate(&self) -> Result<()> {
        if self.ratio.is_nan() || self.ratio <= 0.0 || self.ratio > 1.0 {
            bail!("blank ratio must be in (0, 1], got {}", self.ratio);
        }
        Ok(())
    }

    /// Build the random source for one generation pass.
    /// A fixed seed gives the same worksheet every time.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

// ─── WorksheetLayout ─────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetLayout {
    /// Labels of the header table (one column each, blank row below)
    pub header_fields: Vec<String>,

    /// Optional title printed above the passage
    pub title: Option<String>,

    /// Heading of the answer-key page
    pub answer_heading: String,

    /// Grid or per-paragraph lines
    pub answer_layout: AnswerLayout,

    /// Body font size in points
    pub font_size_pt: usize,
}

impl Default for WorksheetLayout {
    fn default() -> Self {
        Self {
            header_fields: ["Class", "Name", "Score", "Teacher Check"]
                .into_iter()
                .map(String::from)
                .collect(),
            title:          None,
            answer_heading: "Answer Key".to_string(),
            answer_layout:  AnswerLayout::default(),
            font_size_pt:   12,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GenerationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_ratio_bounds() {
        let ok = |ratio| GenerationConfig { ratio, ..GenerationConfig::default() }.validate();
        assert!(ok(1.0).is_ok());
        assert!(ok(0.05).is_ok());
        assert!(ok(0.0).is_err());
        assert!(ok(-0.5).is_err());
        assert!(ok(1.01).is_err());
        assert!(ok(f64::NAN).is_err());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let cfg = GenerationConfig { seed: Some(42), ..GenerationConfig::default() };
        let a: u64 = cfg.rng().gen();
        let b: u64 = cfg.rng().gen();
        assert_eq!(a, b);
    }

    #[test]
    fn test_config_json_round_trip() {
        let cfg = GenerationConfig {
            category: PosCategory::Adverb,
            seed: Some(7),
            ..GenerationConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"adverb\""));
        let back: GenerationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_default_layout() {
        let layout = WorksheetLayout::default();
        assert_eq!(layout.header_fields.len(), 4);
        assert_eq!(layout.answer_layout, AnswerLayout::Grid { columns: 3 });
    }
}
