// ============================================================
// Layer 6 — Answer Store
// ============================================================
// Saves the answer key of one generated worksheet as JSON, and
// loads it back for the `answers` command.
//
// What gets saved:
//   {
//     "document": "story.docx",
//     "config":   { "category": "verb", "ratio": 0.2, ... },
//     "answers":  [ { "number": 1, "answer": "sat", "paragraph": 0 }, ... ],
//     "sources":  { "0": "The cat sat on the mat." }
//   }
//
// Why save the config too?
//   With the seed and the settings a teacher can regenerate the
//   exact same worksheet later. Without them the JSON would be
//   a bare word list.
//
// Loading rebuilds an AnswerLedger through record(), so a file
// with gaps or duplicate numbers is rejected instead of
// producing a misleading key.
//
// Reference: serde_json documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::PathBuf};

use crate::domain::config::GenerationConfig;
use crate::domain::ledger::AnswerLedger;
use crate::domain::paragraph::BlankEntry;

/// On-disk form of one worksheet's answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerSheet {
    pub document: String,
    pub config:   GenerationConfig,
    pub answers:  Vec<BlankEntry>,
    #[serde(default)]
    pub sources:  BTreeMap<usize, String>,
}

impl AnswerSheet {
    pub fn new(document: impl Into<String>, config: &GenerationConfig, ledger: &AnswerLedger) -> Self {
        let sources = ledger
            .entries()
            .iter()
            .filter_map(|e| ledger.source(e.paragraph).map(|s| (e.paragraph, s.to_string())))
            .collect();

        Self {
            document: document.into(),
            config:   config.clone(),
            answers:  ledger.entries().to_vec(),
            sources,
        }
    }

    /// Rebuild the ledger, re-checking that numbers run 1..=N.
    pub fn to_ledger(&self) -> Result<AnswerLedger> {
        let mut ledger = AnswerLedger::new();
        for (paragraph, text) in &self.sources {
            ledger.record_source(*paragraph, text.clone());
        }
        for entry in &self.answers {
            ledger
                .record(entry.clone())
                .with_context(|| format!("Answer file for '{}' is inconsistent", self.document))?;
        }
        Ok(ledger)
    }
}

/// Reads and writes AnswerSheet JSON files.
pub struct AnswerStore {
    path: PathBuf,
}

impl AnswerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn save(&self, sheet: &AnswerSheet) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        // serde_json::to_string_pretty adds indentation for readability
        let json = serde_json::to_string_pretty(sheet)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write answers to '{}'", self.path.display()))?;

        tracing::info!(
            "Saved {} answers to '{}'",
            sheet.answers.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn load(&self) -> Result<AnswerSheet> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read answers from '{}'", self.path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("'{}' is not a valid answer file", self.path.display()))
    }
}
