// ============================================================
// Layer 3 — Answer Ledger
// ============================================================
// Collects every (blank number → original word) pair for one
// document, in increasing number order, and turns them into
// an answer-key layout.
//
// Invariants (checked on every record() call):
//   - numbers start at 1 and are contiguous
//   - exactly one entry per number
//
// Two layouts are supported:
//
//   Grid   - N entries spread over a fixed number of columns,
//            filled COLUMN-MAJOR (down column 0, then column 1…)
//            rows = ceil(N / columns)
//
//            N = 7, columns = 3 → rows = 3
//              1. …   4. …   7. …
//              2. …   5. …
//              3. …   6. …
//
//   Lines  - one line per paragraph that had blanks: the
//            paragraph's original text, then its answers
//
// An empty ledger renders AnswerKey::Empty so the document
// writer can print a notice instead of an empty table.
//
// Reference: Rust Book §8 (Vectors, HashMaps), §6 (Enums)

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::domain::paragraph::BlankEntry;

/// Shown in place of the answer key when nothing was blanked
pub const NO_BLANKS_NOTICE: &str = "No blanks were generated for this document.";

/// Default column count of the answer grid
pub const DEFAULT_GRID_COLUMNS: usize = 3;

/// How the answer key is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerLayout {
    Grid { columns: usize },
    Lines,
}

impl Default for AnswerLayout {
    fn default() -> Self {
        AnswerLayout::Grid { columns: DEFAULT_GRID_COLUMNS }
    }
}

/// All blank entries of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerLedger {
    entries: Vec<BlankEntry>,

    /// Original text of each paragraph that produced blanks,
    /// keyed by paragraph index (used by the Lines layout)
    sources: BTreeMap<usize, String>,
}

impl AnswerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Its number must be exactly len() + 1.
    pub fn record(&mut self, entry: BlankEntry) -> Result<()> {
        let expected = self.entries.len() + 1;
        if entry.number != expected {
            bail!(
                "answer ledger out of order: got blank {} but expected {}",
                entry.number,
                expected
            );
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Remember the original text of a paragraph that has blanks
    pub fn record_source(&mut self, paragraph: usize, text: impl Into<String>) {
        self.sources.insert(paragraph, text.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry for blank `number` (1-based)
    pub fn get(&self, number: usize) -> Option<&BlankEntry> {
        number
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
    }

    pub fn entries(&self) -> &[BlankEntry] {
        &self.entries
    }

    /// Blank numbers in ledger order
    pub fn numbers(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.number).collect()
    }

    pub fn source(&self, paragraph: usize) -> Option<&str> {
        self.sources.get(&paragraph).map(String::as_str)
    }

    /// Render the ledger into the requested layout
    pub fn render(&self, layout: AnswerLayout) -> AnswerKey {
        if self.entries.is_empty() {
            return AnswerKey::Empty;
        }
        match layout {
            AnswerLayout::Grid { columns } => AnswerKey::Grid(self.render_grid(columns)),
            AnswerLayout::Lines => AnswerKey::Lines(self.render_lines()),
        }
    }

    // ── Grid: column-major fill ──────────────────────────────────────────────
    fn render_grid(&self, columns: usize) -> AnswerGrid {
        // A zero column count would divide by zero; treat it as one column
        let columns = columns.max(1);
        let total   = self.entries.len();
        let rows    = total.div_ceil(columns);

        let mut cells: Vec<Vec<Option<BlankEntry>>> = vec![vec![None; columns]; rows];

        // Entry i goes to column i / rows, row i % rows
        for (i, entry) in self.entries.iter().enumerate() {
            let col = i / rows;
            let row = i % rows;
            cells[row][col] = Some(entry.clone());
        }

        AnswerGrid { rows, columns, cells }
    }

    // ── Lines: grouped by paragraph ──────────────────────────────────────────
    fn render_lines(&self) -> Vec<AnswerLine> {
        let mut grouped: BTreeMap<usize, Vec<BlankEntry>> = BTreeMap::new();
        for entry in &self.entries {
            grouped.entry(entry.paragraph).or_default().push(entry.clone());
        }

        grouped
            .into_iter()
            .map(|(paragraph, answers)| AnswerLine {
                paragraph,
                source: self.sources.get(&paragraph).cloned().unwrap_or_default(),
                answers,
            })
            .collect()
    }
}

/// A rendered answer key, ready for the document writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerKey {
    /// No blanks anywhere in the document
    Empty,
    Grid(AnswerGrid),
    Lines(Vec<AnswerLine>),
}

impl AnswerKey {
    /// Plain-text rendering (used by the preview and answers commands)
    pub fn to_text(&self) -> String {
        match self {
            AnswerKey::Empty => NO_BLANKS_NOTICE.to_string(),
            AnswerKey::Grid(grid) => grid
                .rows()
                .map(|row| {
                    row.into_iter()
                        .map(|cell| cell.map(BlankEntry::label).unwrap_or_default())
                        .map(|label| format!("{label:<24}"))
                        .collect::<String>()
                        .trim_end()
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join("\n"),
            AnswerKey::Lines(lines) => lines
                .iter()
                .map(AnswerLine::to_text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Answer entries arranged in rows × columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerGrid {
    pub rows:    usize,
    pub columns: usize,

    /// cells[row][column]; trailing cells of the last column may be empty
    cells: Vec<Vec<Option<BlankEntry>>>,
}

impl AnswerGrid {
    pub fn cell(&self, row: usize, column: usize) -> Option<&BlankEntry> {
        self.cells
            .get(row)
            .and_then(|r| r.get(column))
            .and_then(Option::as_ref)
    }

    /// Iterate row by row; each row has exactly `columns` cells
    pub fn rows(&self) -> impl Iterator<Item = Vec<Option<&BlankEntry>>> + '_ {
        self.cells
            .iter()
            .map(|row| row.iter().map(Option::as_ref).collect())
    }

    /// Blank numbers found in one column, top to bottom
    pub fn column_numbers(&self, column: usize) -> Vec<usize> {
        (0..self.rows)
            .filter_map(|row| self.cell(row, column))
            .map(|e| e.number)
            .collect()
    }
}

/// One paragraph's answers in the Lines layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerLine {
    pub paragraph: usize,
    pub source:    String,
    pub answers:   Vec<BlankEntry>,
}

impl AnswerLine {
    /// "The cat sat on the mat. [1. sat]"
    pub fn to_text(&self) -> String {
        let answers = self
            .answers
            .iter()
            .map(BlankEntry::label)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} [{}]", self.source, answers)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with(paragraph_of: &[usize]) -> AnswerLedger {
        let mut ledger = AnswerLedger::new();
        for (i, &p) in paragraph_of.iter().enumerate() {
            ledger
                .record(BlankEntry::new(i + 1, format!("w{}", i + 1), p))
                .unwrap();
            ledger.record_source(p, format!("paragraph {p}"));
        }
        ledger
    }

    #[test]
    fn test_record_rejects_gaps_and_duplicates() {
        let mut ledger = AnswerLedger::new();
        assert!(ledger.record(BlankEntry::new(2, "x", 0)).is_err());
        ledger.record(BlankEntry::new(1, "x", 0)).unwrap();
        assert!(ledger.record(BlankEntry::new(1, "y", 0)).is_err());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_get_is_one_based() {
        let ledger = ledger_with(&[0, 0]);
        assert_eq!(ledger.get(0), None);
        assert_eq!(ledger.get(1).unwrap().answer, "w1");
        assert_eq!(ledger.get(2).unwrap().answer, "w2");
        assert_eq!(ledger.get(3), None);
    }

    #[test]
    fn test_grid_four_entries_three_columns() {
        // Two paragraphs: blanks 1-2 and 3-4. rows = ceil(4 / 3) = 2
        let ledger = ledger_with(&[0, 0, 1, 1]);
        let AnswerKey::Grid(grid) = ledger.render(AnswerLayout::Grid { columns: 3 }) else {
            panic!("expected grid");
        };
        assert_eq!(grid.rows, 2);
        assert_eq!(grid.column_numbers(0), vec![1, 2]);
        assert_eq!(grid.column_numbers(1), vec![3, 4]);
        assert!(grid.column_numbers(2).is_empty());
    }

    #[test]
    fn test_grid_is_column_major() {
        let ledger = ledger_with(&[0; 7]);
        let AnswerKey::Grid(grid) = ledger.render(AnswerLayout::Grid { columns: 3 }) else {
            panic!("expected grid");
        };
        assert_eq!(grid.rows, 3);
        assert_eq!(grid.column_numbers(0), vec![1, 2, 3]);
        assert_eq!(grid.column_numbers(1), vec![4, 5, 6]);
        assert_eq!(grid.column_numbers(2), vec![7]);
        assert_eq!(grid.cell(0, 2).unwrap().number, 7);
        assert!(grid.cell(1, 2).is_none());
    }

    #[test]
    fn test_grid_contains_every_number_once() {
        let ledger = ledger_with(&[0; 11]);
        let AnswerKey::Grid(grid) = ledger.render(AnswerLayout::Grid { columns: 3 }) else {
            panic!("expected grid");
        };
        let mut seen: Vec<usize> = (0..grid.columns)
            .flat_map(|c| grid.column_numbers(c))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (1..=11).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_columns_falls_back_to_one() {
        let ledger = ledger_with(&[0, 0]);
        let AnswerKey::Grid(grid) = ledger.render(AnswerLayout::Grid { columns: 0 }) else {
            panic!("expected grid");
        };
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.column_numbers(0), vec![1, 2]);
    }

    #[test]
    fn test_lines_group_by_paragraph() {
        let ledger = ledger_with(&[0, 0, 2]);
        let AnswerKey::Lines(lines) = ledger.render(AnswerLayout::Lines) else {
            panic!("expected lines");
        };
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].paragraph, 0);
        assert_eq!(lines[0].answers.len(), 2);
        assert_eq!(lines[1].paragraph, 2);
        assert_eq!(lines[1].to_text(), "paragraph 2 [3. w3]");
    }

    #[test]
    fn test_empty_ledger_renders_notice() {
        let ledger = AnswerLedger::new();
        let key = ledger.render(AnswerLayout::default());
        assert_eq!(key, AnswerKey::Empty);
        assert_eq!(key.to_text(), NO_BLANKS_NOTICE);
    }

    #[test]
    fn test_ledger_json_round_trip_keeps_sources() {
        let ledger = ledger_with(&[0, 1]);
        let json = serde_json::to_string(&ledger).unwrap();
        let back: AnswerLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ledger);
        assert_eq!(back.source(1), Some("paragraph 1"));
    }
}
