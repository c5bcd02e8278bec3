// ============================================================
// Layer 2 — AnswersUseCase
// ============================================================
// Reloads a saved answer file and renders the key again,
// optionally in a different layout than the worksheet used.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::Result;
use std::path::PathBuf;

use crate::domain::ledger::AnswerLayout;
use crate::infra::answer_store::AnswerStore;

pub struct AnswersUseCase {
    path:   PathBuf,
    layout: AnswerLayout,
}

impl AnswersUseCase {
    pub fn new(path: PathBuf, layout: AnswerLayout) -> Self {
        Self { path, layout }
    }

    /// Rendered answer key text
    pub fn execute(&self) -> Result<String> {
        let sheet = AnswerStore::new(&self.path).load()?;
        let ledger = sheet.to_ledger()?;

        tracing::info!(
            "Loaded {} answers for {} (category '{}')",
            ledger.len(),
            sheet.document,
            sheet.config.category
        );
        Ok(ledger.render(self.layout).to_text())
    }
}
