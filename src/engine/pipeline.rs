// ============================================================
// Layer 5 — Blanking Pipeline
// ============================================================
// Runs the engine over a whole document, one paragraph at a
// time, in document order:
//
//   for each paragraph:
//     tokenize → tag (or fall back) → classify → select
//       → mask (counter in, counter out) → reassemble
//     append the paragraph's entries to the ledger
//
// The blank counter is a plain value threaded from one
// paragraph to the next. The random source is borrowed from
// the caller, so a seeded StdRng gives a reproducible sheet.
//
// Tagger problems never abort the document. If the tagger
// returns an error, or a tag list of the wrong length, every
// token of that paragraph is tagged FALLBACK_TAG and the
// paragraph carries on (category fallback then picks from all
// candidates).
//
// After the last paragraph the placeholder numbers found in the
// masked text are checked against the ledger. A mismatch means
// an internal bug, so it is returned as an error.

use anyhow::{bail, Result};
use rand::Rng;

use crate::domain::category::FALLBACK_TAG;
use crate::domain::config::GenerationConfig;
use crate::domain::document::Document;
use crate::domain::ledger::AnswerLedger;
use crate::domain::paragraph::{BlankCounter, BlankEntry, ParagraphRecord};
use crate::domain::placeholder;
use crate::domain::token::Token;
use crate::domain::traits::PosTagger;
use crate::engine::classifier::classify;
use crate::engine::masker::mask;
use crate::engine::reassembler::assemble_slots;
use crate::engine::selector::{select, PoolKind};
use crate::engine::tokenizer::WordTokenizer;

// ─── Per-paragraph statistics ────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphStats {
    pub paragraph:       usize,
    pub tokens:          usize,
    pub candidates:      usize,
    pub pool:            PoolKind,
    pub blanks:          usize,
    pub tagger_fallback: bool,
}

/// Everything produced for one paragraph
#[derive(Debug, Clone)]
pub struct ParagraphOutcome {
    pub text:    String,
    pub entries: Vec<BlankEntry>,
    pub counter: BlankCounter,
    pub stats:   ParagraphStats,
}

/// Result of blanking a whole document.
#[derive(Debug, Clone)]
pub struct BlankedDocument {
    pub source:     String,
    /// One entry per source paragraph, same order, empty lines kept
    pub paragraphs: Vec<String>,
    pub ledger:     AnswerLedger,
    pub stats:      Vec<ParagraphStats>,
}

impl BlankedDocument {
    pub fn total_blanks(&self) -> usize {
        self.ledger.len()
    }

    pub fn total_candidates(&self) -> usize {
        self.stats.iter().map(|s| s.candidates).sum()
    }

    /// Blanks divided by candidates over the whole document
    pub fn realized_rate(&self) -> f64 {
        match self.total_candidates() {
            0 => 0.0,
            c => self.total_blanks() as f64 / c as f64,
        }
    }

    pub fn fallback_paragraphs(&self) -> usize {
        self.stats.iter().filter(|s| s.tagger_fallback).count()
    }
}

// ─── BlankingEngine ──────────────────────────────────────────────────────────
pub struct BlankingEngine<'a> {
    tokenizer: WordTokenizer,
    tagger:    &'a dyn PosTagger,
    config:    &'a GenerationConfig,
}

impl<'a> BlankingEngine<'a> {
    pub fn new(tagger: &'a dyn PosTagger, config: &'a GenerationConfig) -> Self {
        Self {
            tokenizer: WordTokenizer::new(),
            tagger,
            config,
        }
    }

    /// Blank one paragraph, numbering from `counter`.
    pub fn blank_paragraph<R: Rng + ?Sized>(
        &self,
        index:   usize,
        text:    &str,
        counter: BlankCounter,
        rng:     &mut R,
    ) -> ParagraphOutcome {
        let tokens = self.tokenizer.tokenize(text);
        if tokens.is_empty() {
            return ParagraphOutcome {
                text: String::new(),
                entries: Vec::new(),
                counter,
                stats: ParagraphStats {
                    paragraph:       index,
                    tokens:          0,
                    candidates:      0,
                    pool:            PoolKind::Empty,
                    blanks:          0,
                    tagger_fallback: false,
                },
            };
        }

        let (tags, tagger_fallback) = self.tag_or_fallback(index, &tokens);
        let token_count = tokens.len();

        let mut record = ParagraphRecord::new(index, text, classify(tokens, tags, self.config));
        let selection = select(&record.tokens, self.config.category, self.config.ratio, rng);
        record.chosen = selection.positions;

        let candidates = record.candidate_count();
        let masked = mask(record.tokens, &record.chosen, counter, index);

        tracing::debug!(
            "Paragraph {}: {} tokens, {} candidates, {} pool of {}, {} blanks",
            index,
            token_count,
            candidates,
            selection.pool.as_str(),
            selection.pool_size,
            masked.entries.len()
        );

        ParagraphOutcome {
            text: assemble_slots(&masked.slots),
            stats: ParagraphStats {
                paragraph: index,
                tokens: token_count,
                candidates,
                pool: selection.pool,
                blanks: masked.entries.len(),
                tagger_fallback,
            },
            entries: masked.entries,
            counter: masked.counter,
        }
    }

    /// Blank every paragraph of `document` and build the ledger.
    pub fn blank_document<R: Rng + ?Sized>(
        &self,
        document: &Document,
        rng:      &mut R,
    ) -> Result<BlankedDocument> {
        let mut counter = BlankCounter::new();
        let mut ledger = AnswerLedger::new();
        let mut paragraphs = Vec::with_capacity(document.len());
        let mut stats = Vec::with_capacity(document.len());

        for (index, text) in document.paragraphs.iter().enumerate() {
            let outcome = self.blank_paragraph(index, text, counter, rng);
            counter = outcome.counter;

            if !outcome.entries.is_empty() {
                ledger.record_source(index, text.trim());
            }
            for entry in outcome.entries {
                ledger.record(entry)?;
            }

            paragraphs.push(outcome.text);
            stats.push(outcome.stats);
        }

        verify_completeness(&paragraphs, &ledger)?;

        tracing::info!(
            "Blanked {} paragraphs from {}: {} blanks, tagger '{}'",
            paragraphs.len(),
            document.source,
            ledger.len(),
            self.tagger.name()
        );

        Ok(BlankedDocument {
            source: document.source.clone(),
            paragraphs,
            ledger,
            stats,
        })
    }

    /// Ask the tagger, substituting fallback tags on error or bad length.
    fn tag_or_fallback(&self, index: usize, tokens: &[Token]) -> (Vec<String>, bool) {
        match self.tagger.tag(tokens) {
            Ok(tags) if tags.len() == tokens.len() => (tags, false),
            Ok(tags) => {
                tracing::warn!(
                    "Tagger '{}' returned {} tags for {} tokens in paragraph {}; using fallback tags",
                    self.tagger.name(),
                    tags.len(),
                    tokens.len(),
                    index
                );
                (fallback_tags(tokens.len()), true)
            }
            Err(e) => {
                tracing::warn!(
                    "Tagger '{}' failed on paragraph {}: {:#}; using fallback tags",
                    self.tagger.name(),
                    index,
                    e
                );
                (fallback_tags(tokens.len()), true)
            }
        }
    }
}

fn fallback_tags(n: usize) -> Vec<String> {
    vec![FALLBACK_TAG.to_string(); n]
}

/// Check that the placeholders in `paragraphs` are exactly 1..=N,
/// each once, and that the ledger holds the same numbers.
pub fn verify_completeness(paragraphs: &[String], ledger: &AnswerLedger) -> Result<()> {
    let mut found: Vec<usize> = paragraphs
        .iter()
        .flat_map(|p| placeholder::parse_numbers(p))
        .collect();
    found.sort_unstable();

    let expected: Vec<usize> = (1..=ledger.len()).collect();
    if found != expected {
        bail!(
            "masked text holds {} placeholders but the answer ledger has {} entries",
            found.len(),
            ledger.len()
        );
    }
    if ledger.numbers() != expected {
        bail!("answer ledger numbers are not contiguous from 1");
    }
    Ok(())
}
