// ============================================================
// Layer 4 — Document Loader
// ============================================================
// Reads one source document and returns its paragraphs in
// order, using the docx-rs crate for .docx files and plain
// line splitting for .txt files.
//
// How .docx files work:
//   A .docx file is actually a ZIP archive containing XML files.
//   docx-rs parses this ZIP and gives us a typed Rust API
//   over the XML content.
//
// The document structure in docx-rs looks like:
//   Document
//     └── children: Vec<DocumentChild>
//           └── Paragraph
//                 └── children: Vec<ParagraphChild>
//                       └── Run
//                             └── children: Vec<RunChild>
//                                   └── Text (the actual words!)
//
// Hyperlinks and tracked insertions wrap further runs, so the
// walk descends into them too.
//
// Every body paragraph becomes one entry, INCLUDING empty
// ones: a blank line in the source must stay a blank line in
// the worksheet. Tables, images and section properties are
// not paragraphs and are skipped.
//
// A file that is not a valid .docx aborts the whole run with
// a readable error; there is no partial recovery.
//
// Reference: docx-rs crate documentation
//            Rust Book §8 (Collections)
//            Rust Book §9 (Error Handling)

use anyhow::{anyhow, bail, Context, Result};
use std::{fs, path::Path};
use docx_rs::{read_docx, DocumentChild, InsertChild, ParagraphChild, RunChild};

use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

/// Loads a single .docx file.
/// Implements the DocumentSource trait from Layer 3.
pub struct DocxLoader {
    /// Path to the .docx file
    path: String,
}

impl DocxLoader {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for DocxLoader {
    fn load(&self) -> Result<Document> {
        let path = Path::new(&self.path);

        // Read the raw bytes of the .docx file (which is a ZIP)
        let bytes = fs::read(path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;

        let doc = parse_docx(&bytes, file_name(path))
            .with_context(|| format!("'{}' is not a valid .docx document", path.display()))?;

        tracing::debug!("Loaded: {} ({} paragraphs)", doc.source, doc.len());
        Ok(doc)
    }
}

/// Loads a plain-text file, one paragraph per line.
pub struct TextLoader {
    path: String,
}

impl TextLoader {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for TextLoader {
    fn load(&self) -> Result<Document> {
        let path = Path::new(&self.path);
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;

        // str::lines() also strips the \r of Windows line endings
        let paragraphs = text.lines().map(str::to_string).collect();
        Ok(Document::new(file_name(path), paragraphs))
    }
}

/// Pick a loader by file extension and load the document.
pub fn load_source(path: &Path) -> Result<Document> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let path_str = path.to_string_lossy().to_string();

    let doc = match extension.as_deref() {
        Some("docx") => DocxLoader::new(path_str).load()?,
        Some("txt") | Some("md") => TextLoader::new(path_str).load()?,
        _ => bail!(
            "Unsupported input '{}': expected a .docx or .txt file",
            path.display()
        ),
    };

    tracing::info!(
        "Read {} paragraphs ({} non-empty) from {}",
        doc.len(),
        doc.non_empty_paragraphs(),
        doc.source
    );
    Ok(doc)
}

/// Parse .docx bytes into a Document, keeping empty paragraphs.
pub fn parse_docx(bytes: &[u8], source: impl Into<String>) -> Result<Document> {
    // Parse the ZIP/XML using docx-rs
    let docx = read_docx(bytes)
        .map_err(|e| anyhow!("docx-rs parse error: {:?}", e))?;

    // We only care about Paragraph nodes (not tables, images, etc.)
    let paragraphs = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(extract_paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(Document::new(source, paragraphs))
}

/// Extract plain text from a single docx-rs Paragraph node.
///
/// Paragraph → Run → Text is the path through the docx-rs tree.
/// Multiple runs in a paragraph are concatenated with no separator
/// because they are parts of the same sentence. Tabs and line
/// breaks become spaces.
fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&para.children, &mut text);
    text
}

/// Hyperlinks nest their own paragraph children; tracked insertions
/// hold runs that are part of the visible text. Deleted runs are not.
fn push_children_text(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run_text(run, text),
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, text),
            ParagraphChild::Insert(insert) => {
                for ic in &insert.children {
                    if let InsertChild::Run(run) = ic {
                        push_run_text(run, text);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run_text(run: &docx_rs::Run, text: &mut String) {
    for rc in &run.children {
        match rc {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) | RunChild::Break(_) | RunChild::CarriageReturn(_) => text.push(' '),
            _ => {}
        }
    }
}

/// Use the filename as the source identifier
fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{BreakType, Docx, Hyperlink, HyperlinkType, Insert, Paragraph, Run};
    use std::io::Cursor;

    fn docx_bytes(docx: Docx) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("fill_blank_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_paragraphs_and_blank_lines_are_kept_in_order() {
        let docx = Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("First line.")))
            .add_paragraph(Paragraph::new())
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Split-"))
                    .add_run(Run::new().add_text("runs").bold()),
            );

        let doc = parse_docx(&docx_bytes(docx), "mem.docx").unwrap();
        assert_eq!(doc.paragraphs, vec!["First line.", "", "Split-runs"]);
        assert_eq!(doc.source, "mem.docx");
    }

    #[test]
    fn test_hyperlink_text_is_kept() {
        let docx = Docx::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Visit "))
                .add_hyperlink(
                    Hyperlink::new("https://example.com", HyperlinkType::External)
                        .add_run(Run::new().add_text("our library")),
                )
                .add_run(Run::new().add_text(" today.")),
        );

        let doc = parse_docx(&docx_bytes(docx), "link.docx").unwrap();
        assert_eq!(doc.paragraphs, vec!["Visit our library today."]);
    }

    #[test]
    fn test_line_break_separates_words() {
        let docx = Docx::new().add_paragraph(
            Paragraph::new().add_run(
                Run::new()
                    .add_text("first line")
                    .add_break(BreakType::TextWrapping)
                    .add_text("second line"),
            ),
        );

        let doc = parse_docx(&docx_bytes(docx), "br.docx").unwrap();
        assert_eq!(doc.paragraphs, vec!["first line second line"]);
    }

    #[test]
    fn test_inserted_runs_are_read() {
        let docx = Docx::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Cats "))
                .add_insert(Insert::new(Run::new().add_text("really ")))
                .add_run(Run::new().add_text("nap.")),
        );

        let doc = parse_docx(&docx_bytes(docx), "ins.docx").unwrap();
        assert_eq!(doc.paragraphs, vec!["Cats really nap."]);
    }

    #[test]
    fn test_invalid_bytes_are_an_error() {
        assert!(parse_docx(b"definitely not a zip", "bad.docx").is_err());
    }

    #[test]
    fn test_text_loader_splits_lines() {
        let path = temp_path("lines.txt");
        fs::write(&path, "one\r\n\r\ntwo three\n").unwrap();
        let doc = TextLoader::new(path.to_string_lossy()).load().unwrap();
        assert_eq!(doc.paragraphs, vec!["one", "", "two three"]);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_source_rejects_unknown_extension() {
        let err = load_source(Path::new("worksheet.pdf")).unwrap_err();
        assert!(err.to_string().contains("Unsupported input"));
    }

    #[test]
    fn test_missing_docx_is_an_error() {
        assert!(load_source(Path::new("/nonexistent/dir/missing.docx")).is_err());
    }
}
