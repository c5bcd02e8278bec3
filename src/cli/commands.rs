// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `generate`, `preview` and
// `answers`, and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → u8, PosCategory, etc.)
//
// The argument structs are converted into domain structs with
// From, so nothing below this layer ever sees a clap type.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{builder::TypedValueParser, Args, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::application::generate_use_case::GenerateRequest;
use crate::domain::category::PosCategory;
use crate::domain::config::{GenerationConfig, WorksheetLayout};
use crate::domain::ledger::{AnswerLayout, DEFAULT_GRID_COLUMNS};

/// The three top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Turn a .docx (or .txt) into a fill-in-the-blank worksheet .docx
    Generate(GenerateArgs),

    /// Print the masked text and answer key without writing a document
    Preview(PreviewArgs),

    /// Print the answer key from a saved --answers-json file
    Answers(AnswersArgs),
}

// ─── Shared option groups ────────────────────────────────────────────────────

/// How blanks are chosen
#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    /// Part of speech to blank: all, verb, noun, adjective, adverb
    /// (Korean labels 전체, 동사, 명사, 형용사, 부사 also work)
    #[arg(long, default_value = "all")]
    pub category: PosCategory,

    /// Percentage of eligible words to blank in each paragraph
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub blank_percent: u8,

    /// Seed for the random choice; the same seed gives the same worksheet
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only blank words made entirely of letters (no digits)
    #[arg(long)]
    pub alphabetic_only: bool,

    /// Directory holding nlprule's en_tokenizer.bin; without it a few
    /// standard locations are searched, then the built-in tagger is used
    #[arg(long)]
    pub tagger_data: Option<PathBuf>,
}

impl From<&EngineArgs> for GenerationConfig {
    fn from(a: &EngineArgs) -> Self {
        GenerationConfig {
            category:            a.category,
            ratio:               f64::from(a.blank_percent) / 100.0,
            exclude_punctuation: true,
            alphabetic_only:     a.alphabetic_only,
            seed:                a.seed,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Numbered answers in a table, filled column by column
    Grid,
    /// One line per paragraph: the sentence, then its answers
    Lines,
}

/// How the answer key is arranged
#[derive(Args, Debug, Clone)]
pub struct KeyArgs {
    #[arg(long, value_enum, default_value_t = LayoutKind::Grid)]
    pub layout: LayoutKind,

    /// Columns in the grid layout
    #[arg(long, default_value_t = DEFAULT_GRID_COLUMNS,
          value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub columns: usize,
}

impl From<&KeyArgs> for AnswerLayout {
    fn from(a: &KeyArgs) -> Self {
        match a.layout {
            LayoutKind::Grid  => AnswerLayout::Grid { columns: a.columns },
            LayoutKind::Lines => AnswerLayout::Lines,
        }
    }
}

/// Worksheet furniture
#[derive(Args, Debug, Clone)]
pub struct SheetArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// Title printed above the text
    #[arg(long)]
    pub title: Option<String>,

    /// Header table field (repeatable); defaults to Class, Name, Score, Teacher Check
    #[arg(long = "header-field")]
    pub header_fields: Vec<String>,

    /// Body font size in points
    #[arg(long, default_value_t = 12)]
    pub font_size: usize,
}

impl From<&SheetArgs> for WorksheetLayout {
    fn from(a: &SheetArgs) -> Self {
        let defaults = WorksheetLayout::default();
        WorksheetLayout {
            header_fields: if a.header_fields.is_empty() {
                defaults.header_fields
            } else {
                a.header_fields.clone()
            },
            title:          a.title.clone(),
            answer_heading: defaults.answer_heading,
            answer_layout:  AnswerLayout::from(&a.key),
            font_size_pt:   a.font_size,
        }
    }
}

// ─── generate ────────────────────────────────────────────────────────────────

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Source document (.docx or .txt)
    #[arg(long, short)]
    pub input: PathBuf,

    /// Worksheet to write; defaults to <input>_worksheet.docx
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub engine: EngineArgs,

    #[command(flatten)]
    pub sheet: SheetArgs,

    /// Also save the answer key as JSON
    #[arg(long)]
    pub answers_json: Option<PathBuf>,

    /// Also write a per-paragraph CSV report
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl From<GenerateArgs> for GenerateRequest {
    fn from(a: GenerateArgs) -> Self {
        let output = a.output.clone().unwrap_or_else(|| default_output(&a.input));
        GenerateRequest {
            config:       GenerationConfig::from(&a.engine),
            layout:       WorksheetLayout::from(&a.sheet),
            tagger_data:  a.engine.tagger_data,
            input:        a.input,
            output,
            answers_json: a.answers_json,
            report:       a.report,
        }
    }
}

/// story.docx → story_worksheet.docx, next to the input
fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    input.with_file_name(format!("{stem}_worksheet.docx"))
}

// ─── preview / answers ───────────────────────────────────────────────────────

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Source document (.docx or .txt)
    #[arg(long, short)]
    pub input: PathBuf,

    #[command(flatten)]
    pub engine: EngineArgs,

    #[command(flatten)]
    pub sheet: SheetArgs,
}

#[derive(Args, Debug)]
pub struct AnswersArgs {
    /// Answer file written by `generate --answers-json`
    #[arg(long, short)]
    pub input: PathBuf,

    #[command(flatten)]
    pub key: KeyArgs,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(args).unwrap().command
    }

    #[test]
    fn test_generate_defaults() {
        let Commands::Generate(args) = parse(&["fill-blank", "generate", "-i", "in/story.docx"]) else {
            panic!("expected generate");
        };
        let req = GenerateRequest::from(args);
        assert_eq!(req.output, PathBuf::from("in/story_worksheet.docx"));
        assert_eq!(req.config, GenerationConfig::default());
        assert_eq!(req.layout, WorksheetLayout::default());
        assert!(req.answers_json.is_none());
    }

    #[test]
    fn test_generate_with_options() {
        let Commands::Generate(args) = parse(&[
            "fill-blank", "generate", "-i", "a.docx", "-o", "b.docx",
            "--category", "동사", "--blank-percent", "50", "--seed", "3",
            "--alphabetic-only", "--layout", "lines",
            "--header-field", "Name", "--header-field", "Date",
        ]) else {
            panic!("expected generate");
        };
        let req = GenerateRequest::from(args);
        assert_eq!(req.config.category, PosCategory::Verb);
        assert!((req.config.ratio - 0.5).abs() < 1e-12);
        assert_eq!(req.config.seed, Some(3));
        assert!(req.config.alphabetic_only);
        assert!(req.config.exclude_punctuation);
        assert_eq!(req.layout.answer_layout, AnswerLayout::Lines);
        assert_eq!(req.layout.header_fields, vec!["Name", "Date"]);
    }

    #[test]
    fn test_percent_out_of_range_is_rejected() {
        for bad in ["0", "101"] {
            let res = Cli::try_parse_from(["fill-blank", "generate", "-i", "a.docx", "--blank-percent", bad]);
            assert!(res.is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_punctuation_switch_is_not_a_flag() {
        let res = Cli::try_parse_from(["fill-blank", "preview", "-i", "a.txt", "--include-punctuation"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let res = Cli::try_parse_from(["fill-blank", "preview", "-i", "a.txt", "--category", "pronoun"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_answers_columns() {
        let Commands::Answers(args) = parse(&["fill-blank", "answers", "-i", "k.json", "--columns", "4"]) else {
            panic!("expected answers");
        };
        assert_eq!(AnswerLayout::from(&args.key), AnswerLayout::Grid { columns: 4 });
    }
}
