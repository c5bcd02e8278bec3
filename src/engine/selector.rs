// ============================================================
// Layer 5 — Candidate Selector
// ============================================================
// Chooses which candidate positions of ONE paragraph become
// blanks.
//
//   1. primary  = candidates whose tag is in the category
//   2. fallback = all candidates, used only if primary is empty
//                 (so a paragraph without any verbs still gets
//                 blanks on a "verb" worksheet)
//   3. n        = round(pool size × ratio), clamped to [1, pool]
//                 (0 if the pool is empty)
//   4. draw n positions uniformly, without replacement
//
// The ratio is applied per paragraph, not per document. Short
// paragraphs always round up to at least one blank, so the
// document-wide blank rate can end up above the configured
// ratio. That is expected behaviour.
//
// The random source is a parameter (any rand::Rng), so tests
// pass a seeded StdRng and get the same picks every time.
//
// Reference: rand::seq::SliceRandom::choose_multiple
//            (same sampling helpers the data splitter used)

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::category::PosCategory;
use crate::domain::token::TaggedToken;

/// Which pool the picks were drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    /// Candidates matching the category
    Primary,
    /// No category match; any candidate was eligible
    Fallback,
    /// No candidates at all
    Empty,
}

impl PoolKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PoolKind::Primary  => "primary",
            PoolKind::Fallback => "fallback",
            PoolKind::Empty    => "empty",
        }
    }
}

/// Result of selecting blanks for one paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Chosen token positions, ascending
    pub positions: Vec<usize>,
    pub pool:      PoolKind,
    pub pool_size: usize,
}

/// How many blanks a pool of `pool_size` candidates yields.
///
/// min(pool, max(1, round(pool × ratio))) for a non-empty pool, else 0.
pub fn blank_count(pool_size: usize, ratio: f64) -> usize {
    if pool_size == 0 {
        return 0;
    }
    let wanted = (pool_size as f64 * ratio).round() as usize;
    wanted.clamp(1, pool_size)
}

/// Pick the positions to blank in one paragraph.
pub fn select<R: Rng + ?Sized>(
    tokens:   &[TaggedToken],
    category: PosCategory,
    ratio:    f64,
    rng:      &mut R,
) -> Selection {
    let primary: Vec<usize> = tokens
        .iter()
        .filter(|t| t.candidate && category.matches(&t.tag))
        .map(TaggedToken::index)
        .collect();

    let (pool, kind) = if !primary.is_empty() {
        (primary, PoolKind::Primary)
    } else {
        let fallback: Vec<usize> = tokens
            .iter()
            .filter(|t| t.candidate)
            .map(TaggedToken::index)
            .collect();
        if fallback.is_empty() {
            (fallback, PoolKind::Empty)
        } else {
            (fallback, PoolKind::Fallback)
        }
    };

    let n = blank_count(pool.len(), ratio);

    // choose_multiple samples without replacement
    let mut positions: Vec<usize> = pool.choose_multiple(rng, n).copied().collect();
    positions.sort_unstable();

    Selection {
        positions,
        pool:      kind,
        pool_size: pool.len(),
    }
}
