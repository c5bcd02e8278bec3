// ============================================================
// Layer 5 — Masking Engine
// ============================================================
// Replaces the selected tokens of one paragraph with numbered
// placeholders and produces the matching answer entries.
//
// Blank numbers come from a BlankCounter that is passed IN and
// handed back OUT. The counter is never global state: the
// pipeline threads one value through every paragraph, so the
// numbers run 1, 2, 3, … across the whole document.
//
// Within a paragraph numbers are given in ascending token
// order, so reading the masked text left to right always shows
// increasing numbers.
//
//   tokens    = [The, cat, sat, on, the, mat, .]
//   positions = {2}
//   counter   = issued 0
//   ───────────────────────────────────────────────
//   slots     = [The, cat, (1)___, on, the, mat, .]
//   entries   = [1. sat]
//   counter   = issued 1

use std::collections::BTreeSet;

use crate::domain::paragraph::{BlankCounter, BlankEntry};
use crate::domain::token::{Slot, TaggedToken};

/// Output of masking one paragraph.
#[derive(Debug, Clone)]
pub struct Masked {
    pub slots:   Vec<Slot>,
    pub entries: Vec<BlankEntry>,
    pub counter: BlankCounter,
}

/// Mask `positions` in `tokens`, numbering from `counter`.
///
/// Duplicate positions are masked once. Positions past the end of
/// the paragraph are ignored.
pub fn mask(
    tokens:      Vec<TaggedToken>,
    positions:   &[usize],
    mut counter: BlankCounter,
    paragraph:   usize,
) -> Masked {
    let chosen: BTreeSet<usize> = positions
        .iter()
        .copied()
        .filter(|&p| p < tokens.len())
        .collect();

    let mut entries = Vec::with_capacity(chosen.len());
    let slots = tokens
        .into_iter()
        .enumerate()
        .map(|(i, token)| {
            if chosen.contains(&i) {
                let number = counter.next_number();
                entries.push(BlankEntry::new(number, token.text(), paragraph));
                Slot::Blanked { number, original: token }
            } else {
                Slot::Original(token)
            }
        })
        .collect();

    Masked { slots, entries, counter }
}
