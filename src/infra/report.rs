// ============================================================
// Layer 6 — Blanking Report
// ============================================================
// Records what the engine did to each paragraph in a CSV file,
// and summarises the whole run in one log line.
//
// Why a report?
//   The blank ratio is applied PER PARAGRAPH and every paragraph
//   with a candidate gets at least one blank. A document of many
//   short lines therefore ends up with far more blanks than the
//   configured ratio suggests. The report makes that visible.
//
// Columns recorded per paragraph:
//   - paragraph:       index in the source document (0-based)
//   - tokens:          tokens after splitting
//   - candidates:      tokens eligible for blanking
//   - pool:            primary / fallback / empty
//   - blanks:          blanks created
//   - tagger_fallback: true if the tagger failed on this paragraph
//
// Example CSV output:
//   paragraph,tokens,candidates,pool,blanks,tagger_fallback
//   0,7,6,primary,1,false
//   1,0,0,empty,0,false
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs,
    io::{BufWriter, Write},
    path::PathBuf,
};

use crate::engine::pipeline::{BlankedDocument, ParagraphStats};

const CSV_HEADER: &str = "paragraph,tokens,candidates,pool,blanks,tagger_fallback";

/// Whole-document totals
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub paragraphs:          usize,
    pub candidates:          usize,
    pub blanks:              usize,
    pub realized_rate:       f64,
    pub configured_ratio:    f64,
    pub fallback_paragraphs: usize,
}

impl RunSummary {
    pub fn from_document(doc: &BlankedDocument, configured_ratio: f64) -> Self {
        Self {
            paragraphs:          doc.paragraphs.len(),
            candidates:          doc.total_candidates(),
            blanks:              doc.total_blanks(),
            realized_rate:       doc.realized_rate(),
            configured_ratio,
            fallback_paragraphs: doc.fallback_paragraphs(),
        }
    }

    /// True when the per-paragraph minimum pushed the rate above the setting
    pub fn exceeds_ratio(&self) -> bool {
        self.realized_rate > self.configured_ratio + f64::EPSILON
    }

    pub fn log(&self) {
        tracing::info!(
            "{} blanks over {} candidates: realised rate {:.1}% (configured {:.1}%)",
            self.blanks,
            self.candidates,
            self.realized_rate * 100.0,
            self.configured_ratio * 100.0
        );
        if self.exceeds_ratio() {
            tracing::info!("Short paragraphs round up to one blank each, so the realised rate is higher");
        }
        if self.fallback_paragraphs > 0 {
            tracing::warn!(
                "{} of {} paragraphs used fallback tags",
                self.fallback_paragraphs,
                self.paragraphs
            );
        }
    }
}

/// Writes the per-paragraph CSV.
pub struct ReportWriter {
    csv_path: PathBuf,
}

impl ReportWriter {
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self { csv_path: csv_path.into() }
    }

    /// Write (or overwrite) the CSV for one document.
    pub fn write(&self, doc: &BlankedDocument) -> Result<()> {
        if let Some(parent) = self.csv_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(&self.csv_path)
            .with_context(|| format!("Cannot create report '{}'", self.csv_path.display()))?;
        let mut out = BufWriter::new(file);

        writeln!(out, "{CSV_HEADER}")?;
        for stats in &doc.stats {
            writeln!(out, "{}", csv_row(stats))?;
        }
        out.flush()?;

        tracing::debug!(
            "Wrote {} report rows to '{}'",
            doc.stats.len(),
            self.csv_path.display()
        );
        Ok(())
    }
}

fn csv_row(s: &ParagraphStats) -> String {
    format!(
        "{},{},{},{},{},{}",
        s.paragraph,
        s.tokens,
        s.candidates,
        s.pool.as_str(),
        s.blanks,
        s.tagger_fallback
    )
}
