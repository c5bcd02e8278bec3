// ============================================================
// Layer 4 — Worksheet Writer
// ============================================================
// Builds the output .docx with docx-rs. The page order is
// fixed:
//
//   ┌──────────────────────────────────────────┐
//   │ Class │ Name │ Score │ Teacher Check     │  header table
//   │       │      │       │                   │  (blank row to fill in)
//   ├──────────────────────────────────────────┤
//   │ (empty spacer paragraph)                 │
//   │ Title (optional, Heading1)               │
//   │ masked paragraph 0                       │
//   │ masked paragraph 1  … one per source     │
//   ├──────────── page break ──────────────────┤
//   │ Answer Key (Heading1)                    │
//   │ grid table │ one line per paragraph │    │
//   │ or the "no blanks" notice                │
//   └──────────────────────────────────────────┘
//
// Everything is written to an in-memory Cursor first, so the
// same code serves both the file output and the tests.
//
// Reference: docx-rs crate documentation (Docx, Table, Run)

use anyhow::{anyhow, Context, Result};
use docx_rs::{
    BreakType, Docx, Paragraph, Run, Style, StyleType, Table, TableCell, TableRow,
};
use std::{fs, io::Cursor, path::Path};

use crate::domain::config::WorksheetLayout;
use crate::domain::ledger::{AnswerGrid, AnswerKey, AnswerLedger, AnswerLine, NO_BLANKS_NOTICE};
use crate::domain::paragraph::BlankEntry;

const HEADING_STYLE: &str = "Heading1";

pub struct WorksheetWriter {
    layout: WorksheetLayout,
}

impl WorksheetWriter {
    pub fn new(layout: WorksheetLayout) -> Self {
        Self { layout }
    }

    /// Assemble the worksheet and return the packed .docx bytes.
    pub fn to_bytes(&self, paragraphs: &[String], ledger: &AnswerLedger) -> Result<Vec<u8>> {
        let docx = self.build(paragraphs, ledger);

        let mut buf = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buf)
            .map_err(|e| anyhow!("docx-rs pack error: {:?}", e))?;
        Ok(buf.into_inner())
    }

    /// Assemble the worksheet and write it to `path`.
    pub fn write(&self, path: &Path, paragraphs: &[String], ledger: &AnswerLedger) -> Result<()> {
        let bytes = self.to_bytes(paragraphs, ledger)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }
        fs::write(path, &bytes)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::info!("Worksheet written to {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    fn build(&self, paragraphs: &[String], ledger: &AnswerLedger) -> Docx {
        let heading = Style::new(HEADING_STYLE, StyleType::Paragraph)
            .name("Heading 1")
            .bold()
            .size(self.half_points() + 8);

        let mut docx = Docx::new()
            .add_style(heading)
            .add_table(self.header_table())
            .add_paragraph(Paragraph::new());

        if let Some(title) = &self.layout.title {
            docx = docx.add_paragraph(self.heading(title));
        }

        for text in paragraphs {
            docx = docx.add_paragraph(self.body(text));
        }

        docx = docx
            .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)))
            .add_paragraph(self.heading(&self.layout.answer_heading));

        match ledger.render(self.layout.answer_layout) {
            AnswerKey::Empty => docx.add_paragraph(self.body(NO_BLANKS_NOTICE)),
            AnswerKey::Grid(grid) => docx.add_table(self.answer_table(&grid)),
            AnswerKey::Lines(lines) => lines
                .iter()
                .fold(docx, |docx, line| docx.add_paragraph(self.answer_line(line))),
        }
    }

    // ── Furniture ────────────────────────────────────────────────────────────

    /// Labels row in bold, then an empty row for the student to fill in
    fn header_table(&self) -> Table {
        let labels = self
            .layout
            .header_fields
            .iter()
            .map(|field| {
                TableCell::new().add_paragraph(
                    Paragraph::new().add_run(self.run(field).bold()),
                )
            })
            .collect();
        let blanks = self
            .layout
            .header_fields
            .iter()
            .map(|_| TableCell::new().add_paragraph(Paragraph::new()))
            .collect();

        Table::new(vec![TableRow::new(labels), TableRow::new(blanks)])
    }

    fn answer_table(&self, grid: &AnswerGrid) -> Table {
        let rows = grid
            .rows()
            .map(|row| {
                let cells = row
                    .into_iter()
                    .map(|cell| {
                        let label = cell.map(BlankEntry::label).unwrap_or_default();
                        TableCell::new().add_paragraph(self.body(&label))
                    })
                    .collect();
                TableRow::new(cells)
            })
            .collect();
        Table::new(rows)
    }

    /// "source [1. a, 2. b]" as one run
    fn answer_line(&self, line: &AnswerLine) -> Paragraph {
        self.body(&line.to_text())
    }

    // ── Small builders ───────────────────────────────────────────────────────

    fn heading(&self, text: &str) -> Paragraph {
        Paragraph::new()
            .style(HEADING_STYLE)
            .add_run(Run::new().add_text(text))
    }

    fn body(&self, text: &str) -> Paragraph {
        if text.is_empty() {
            return Paragraph::new();
        }
        Paragraph::new().add_run(self.run(text))
    }

    fn run(&self, text: &str) -> Run {
        Run::new().add_text(text).size(self.half_points())
    }

    /// docx-rs sizes are in half-points
    fn half_points(&self) -> usize {
        self.layout.font_size_pt * 2
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_docx;
    use crate::domain::ledger::AnswerLayout;
    use docx_rs::{read_docx, DocumentChild};

    fn ledger(answers: &[(&str, usize)]) -> AnswerLedger {
        let mut ledger = AnswerLedger::new();
        for (i, (answer, paragraph)) in answers.iter().enumerate() {
            ledger.record(BlankEntry::new(i + 1, *answer, *paragraph)).unwrap();
        }
        ledger
    }

    fn count_tables(bytes: &[u8]) -> usize {
        read_docx(bytes)
            .unwrap()
            .document
            .children
            .iter()
            .filter(|c| matches!(c, DocumentChild::Table(_)))
            .count()
    }

    #[test]
    fn test_masked_paragraphs_survive_round_trip() {
        let paragraphs = vec![
            "The cat (1)___ on the mat.".to_string(),
            String::new(),
            "Birds (2)____ at dawn.".to_string(),
        ];
        let writer = WorksheetWriter::new(WorksheetLayout::default());
        let bytes = writer
            .to_bytes(&paragraphs, &ledger(&[("sat", 0), ("sing", 2)]))
            .unwrap();

        let doc = parse_docx(&bytes, "out.docx").unwrap();
        // leading spacer paragraph, then the body in order
        assert_eq!(doc.paragraphs[0], "");
        assert_eq!(&doc.paragraphs[1..4], &paragraphs[..]);
        assert!(doc.paragraphs.contains(&"Answer Key".to_string()));
        // header table + answer grid
        assert_eq!(count_tables(&bytes), 2);
    }

    #[test]
    fn test_title_comes_before_body() {
        let layout = WorksheetLayout {
            title: Some("Unit 3 Reading".to_string()),
            ..WorksheetLayout::default()
        };
        let bytes = WorksheetWriter::new(layout)
            .to_bytes(&["Body (1)____.".to_string()], &ledger(&[("text", 0)]))
            .unwrap();
        let doc = parse_docx(&bytes, "t.docx").unwrap();
        assert_eq!(doc.paragraphs[1], "Unit 3 Reading");
        assert_eq!(doc.paragraphs[2], "Body (1)____.");
    }

    #[test]
    fn test_empty_ledger_writes_notice_instead_of_table() {
        let writer = WorksheetWriter::new(WorksheetLayout::default());
        let bytes = writer.to_bytes(&["...".to_string()], &AnswerLedger::new()).unwrap();

        let doc = parse_docx(&bytes, "n.docx").unwrap();
        assert_eq!(doc.paragraphs.last().map(String::as_str), Some(NO_BLANKS_NOTICE));
        // only the header table
        assert_eq!(count_tables(&bytes), 1);
    }

    #[test]
    fn test_lines_layout_writes_one_paragraph_per_source() {
        let mut answers = ledger(&[("sat", 0), ("mat", 0), ("sing", 2)]);
        answers.record_source(0, "The cat sat on the mat.");
        answers.record_source(2, "Birds sing.");

        let layout = WorksheetLayout {
            answer_layout: AnswerLayout::Lines,
            ..WorksheetLayout::default()
        };
        let bytes = WorksheetWriter::new(layout)
            .to_bytes(&["x".to_string()], &answers)
            .unwrap();

        let doc = parse_docx(&bytes, "l.docx").unwrap();
        let n = doc.paragraphs.len();
        assert_eq!(doc.paragraphs[n - 2], "The cat sat on the mat. [1. sat, 2. mat]");
        assert_eq!(doc.paragraphs[n - 1], "Birds sing. [3. sing]");
        assert_eq!(count_tables(&bytes), 1);
    }

    #[test]
    fn test_write_creates_parent_directory() {
        let dir = std::env::temp_dir().join(format!("fill_blank_writer_{}", std::process::id()));
        let path = dir.join("nested").join("sheet.docx");
        WorksheetWriter::new(WorksheetLayout::default())
            .write(&path, &["Hello (1)_____.".to_string()], &ledger(&[("world", 0)]))
            .unwrap();
        assert!(path.exists());
        fs::remove_dir_all(&dir).ok();
    }
}
