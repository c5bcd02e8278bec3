// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `generate`: writes the worksheet .docx (+ optional JSON / CSV)
//   2. `preview`:  prints the masked text and answer key
//   3. `answers`:  prints the key from a saved answer file
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{AnswersArgs, Commands, GenerateArgs, PreviewArgs};

/// Top-level parser; every flag lives on a subcommand.
#[derive(Parser, Debug)]
#[command(
    name = "fill-blank",
    version,
    about = "Turn a Word document into a fill-in-the-blank worksheet with an answer key."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Generate(args) => Self::run_generate(args),
            Commands::Preview(args)  => Self::run_preview(args),
            Commands::Answers(args)  => Self::run_answers(args),
        }
    }

    fn run_generate(args: GenerateArgs) -> Result<()> {
        use crate::application::generate_use_case::GenerateUseCase;

        tracing::info!("Generating worksheet from {}", args.input.display());

        // Convert CLI args → application request (separates presentation from domain)
        let outcome = GenerateUseCase::new(args.into()).execute()?;

        println!(
            "Worksheet saved to {} ({} blanks in {} paragraphs).",
            outcome.output.display(),
            outcome.summary.blanks,
            outcome.summary.paragraphs
        );
        Ok(())
    }

    fn run_preview(args: PreviewArgs) -> Result<()> {
        use crate::application::preview_use_case::PreviewUseCase;

        let use_case = PreviewUseCase::new(
            args.input.clone(),
            (&args.engine).into(),
            (&args.sheet).into(),
            args.engine.tagger_data.clone(),
        );
        let preview = use_case.execute()?;

        println!("{}", preview.worksheet);
        println!("\n──── Answer Key ({} blanks) ────", preview.blanks);
        println!("{}", preview.answer_key);
        Ok(())
    }

    fn run_answers(args: AnswersArgs) -> Result<()> {
        use crate::application::answers_use_case::AnswersUseCase;

        let key = AnswersUseCase::new(args.input.clone(), (&args.key).into()).execute()?;
        println!("{key}");
        Ok(())
    }
}
