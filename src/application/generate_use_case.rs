// ============================================================
// Layer 2 — GenerateUseCase
// ============================================================
// Orchestrates one worksheet generation in order:
//
//   Step 1: Validate the settings       (Layer 3 - domain)
//   Step 2: Load the source document    (Layer 4 - data)
//   Step 3: Clean every paragraph       (Layer 4 - data)
//   Step 4: Pick the tagger             (Layer 5 / 6)
//   Step 5: Blank the document          (Layer 5 - engine)
//   Step 6: Log the run summary         (Layer 6 - infra)
//   Step 7: Write the worksheet .docx   (Layer 4 - data)
//   Step 8: Save answers JSON / report  (Layer 6 - infra)
//
// A source that cannot be read stops everything before any
// output is written. Problems inside a paragraph never do.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::data::{loader::load_source, preprocessor::Preprocessor, writer::WorksheetWriter};
use crate::domain::config::{GenerationConfig, WorksheetLayout};
use crate::domain::traits::PosTagger;
use crate::engine::pipeline::{BlankedDocument, BlankingEngine};
use crate::engine::tagger::LexiconTagger;
use crate::infra::{
    answer_store::{AnswerSheet, AnswerStore},
    report::{ReportWriter, RunSummary},
};

// ─── Request ─────────────────────────────────────────────────────────────────
// Everything one `generate` run needs, already converted from CLI args.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub input:        PathBuf,
    pub output:       PathBuf,
    pub config:       GenerationConfig,
    pub layout:       WorksheetLayout,
    pub tagger_data:  Option<PathBuf>,
    pub answers_json: Option<PathBuf>,
    pub report:       Option<PathBuf>,
}

/// What the CLI prints after a successful run
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub output:  PathBuf,
    pub summary: RunSummary,
}

// ─── GenerateUseCase ─────────────────────────────────────────────────────────
pub struct GenerateUseCase {
    request: GenerateRequest,
}

impl GenerateUseCase {
    pub fn new(request: GenerateRequest) -> Self {
        Self { request }
    }

    pub fn execute(&self) -> Result<GenerateOutcome> {
        let req = &self.request;

        // ── Steps 1-5: settings, document, tagger, engine ────────────────────
        let blanked = blank_source(&req.input, &req.config, req.tagger_data.as_deref())?;

        // ── Step 6: Summary ──────────────────────────────────────────────────
        let summary = RunSummary::from_document(&blanked, req.config.ratio);
        summary.log();

        // ── Step 7: Worksheet ────────────────────────────────────────────────
        WorksheetWriter::new(req.layout.clone())
            .write(&req.output, &blanked.paragraphs, &blanked.ledger)
            .context("Failed to write the worksheet")?;

        // ── Step 8: Optional exports ─────────────────────────────────────────
        if let Some(path) = &req.answers_json {
            let sheet = AnswerSheet::new(&blanked.source, &req.config, &blanked.ledger);
            AnswerStore::new(path).save(&sheet)?;
        }
        if let Some(path) = &req.report {
            ReportWriter::new(path).write(&blanked)?;
        }

        Ok(GenerateOutcome {
            output: req.output.clone(),
            summary,
        })
    }
}

/// Steps 1-5, shared with the preview command.
pub fn blank_source(
    input:       &Path,
    config:      &GenerationConfig,
    tagger_data: Option<&Path>,
) -> Result<BlankedDocument> {
    config.validate()?;

    let document = load_source(input)?;
    let document = Preprocessor::new().clean_document(document);

    let tagger = select_tagger(tagger_data)?;
    tracing::info!(
        "Blanking {} with category '{}', ratio {:.2}, tagger '{}'",
        document.source,
        config.category,
        config.ratio,
        tagger.name()
    );

    let mut rng = config.rng();
    BlankingEngine::new(tagger.as_ref(), config).blank_document(&document, &mut rng)
}

/// nlprule when its binary can be found, otherwise the built-in
/// lexicon tagger. An explicit data directory must load.
pub fn select_tagger(data_dir: Option<&Path>) -> Result<Box<dyn PosTagger>> {
    match data_dir {
        #[cfg(feature = "nlprule")]
        None => {
            use crate::infra::nlprule_tagger::NlpruleTagger;
            match NlpruleTagger::from_default_locations() {
                Ok(tagger) => Ok(Box::new(tagger)),
                Err(e) => {
                    tracing::warn!("{e:#}; using the built-in lexicon tagger");
                    Ok(Box::new(LexiconTagger::new()))
                }
            }
        }

        #[cfg(feature = "nlprule")]
        Some(dir) => Ok(Box::new(crate::infra::nlprule_tagger::NlpruleTagger::from_dir(dir)?)),

        #[cfg(not(feature = "nlprule"))]
        None => Ok(Box::new(LexiconTagger::new())),

        #[cfg(not(feature = "nlprule"))]
        Some(dir) => anyhow::bail!(
            "--tagger-data '{}' needs a build with the `nlprule` feature",
            dir.display()
        ),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_docx;
    use crate::domain::category::PosCategory;
    use std::fs;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fill_blank_gen_{}_{}", std::process::id(), name))
    }

    fn request(dir: &Path, input: &Path) -> GenerateRequest {
        GenerateRequest {
            input:        input.to_path_buf(),
            output:       dir.join("sheet.docx"),
            config:       GenerationConfig {
                category: PosCategory::Verb,
                ratio:    1.0,
                seed:     Some(1),
                ..GenerationConfig::default()
            },
            layout:       WorksheetLayout::default(),
            tagger_data:  None,
            answers_json: Some(dir.join("answers.json")),
            report:       Some(dir.join("report.csv")),
        }
    }

    #[test]
    fn test_generate_writes_all_outputs() {
        let dir = scratch("all");
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("story.txt");
        fs::write(&input, "The cat sat on the mat.\n\nDogs ran home.\n").unwrap();

        let outcome = GenerateUseCase::new(request(&dir, &input)).execute().unwrap();
        assert_eq!(outcome.summary.paragraphs, 3);
        assert_eq!(outcome.summary.blanks, 2);

        let doc = parse_docx(&fs::read(&outcome.output).unwrap(), "sheet.docx").unwrap();
        assert!(doc.paragraphs.contains(&"The cat (1)___ on the mat.".to_string()));
        assert!(doc.paragraphs.contains(&"Dogs (2)___ home.".to_string()));

        let sheet = AnswerStore::new(dir.join("answers.json")).load().unwrap();
        let answers: Vec<_> = sheet.answers.iter().map(|e| e.answer.as_str()).collect();
        assert_eq!(answers, vec!["sat", "ran"]);

        let report = fs::read_to_string(dir.join("report.csv")).unwrap();
        assert_eq!(report.lines().count(), 4);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unreadable_source_writes_nothing() {
        let dir = scratch("bad");
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("broken.docx");
        fs::write(&input, b"not a zip archive").unwrap();

        let req = request(&dir, &input);
        let output = req.output.clone();
        assert!(GenerateUseCase::new(req).execute().is_err());
        assert!(!output.exists());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_invalid_ratio_is_rejected() {
        let config = GenerationConfig { ratio: 0.0, ..GenerationConfig::default() };
        assert!(blank_source(Path::new("unused.txt"), &config, None).is_err());
    }

    #[test]
    fn test_default_tagger_is_always_available() {
        let tagger = select_tagger(None).unwrap();
        assert!(["nlprule", "lexicon"].contains(&tagger.name()));
    }

    #[cfg(feature = "nlprule")]
    #[test]
    fn test_explicit_tagger_data_must_load() {
        assert!(select_tagger(Some(Path::new("/nonexistent/nlprule-data"))).is_err());
    }

    #[cfg(not(feature = "nlprule"))]
    #[test]
    fn test_tagger_data_needs_feature() {
        assert!(select_tagger(Some(Path::new("/data"))).is_err());
        assert_eq!(select_tagger(None).unwrap().name(), "lexicon");
    }
}
