// ============================================================
// Layer 2 — PreviewUseCase
// ============================================================
// Runs the same blanking pass as `generate` but returns the
// result as plain text instead of writing a .docx, so a teacher
// can try a category and ratio before producing the worksheet.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use std::path::PathBuf;

use crate::application::generate_use_case::blank_source;
use crate::domain::config::{GenerationConfig, WorksheetLayout};
use crate::engine::pipeline::BlankedDocument;

pub struct PreviewUseCase {
    input:       PathBuf,
    config:      GenerationConfig,
    layout:      WorksheetLayout,
    tagger_data: Option<PathBuf>,
}

/// Masked text and answer key, ready to print
#[derive(Debug, Clone)]
pub struct Preview {
    pub worksheet:  String,
    pub answer_key: String,
    pub blanks:     usize,
}

impl PreviewUseCase {
    pub fn new(
        input:       PathBuf,
        config:      GenerationConfig,
        layout:      WorksheetLayout,
        tagger_data: Option<PathBuf>,
    ) -> Self {
        Self { input, config, layout, tagger_data }
    }

    pub fn execute(&self) -> Result<Preview> {
        let blanked = blank_source(&self.input, &self.config, self.tagger_data.as_deref())?;
        Ok(self.render(&blanked))
    }

    fn render(&self, blanked: &BlankedDocument) -> Preview {
        let mut worksheet = String::new();
        if let Some(title) = &self.layout.title {
            worksheet.push_str(title);
            worksheet.push_str("\n\n");
        }
        worksheet.push_str(&blanked.paragraphs.join("\n"));

        Preview {
            worksheet,
            answer_key: blanked.ledger.render(self.layout.answer_layout).to_text(),
            blanks:     blanked.total_blanks(),
        }
    }
}
