#![allow(dead_code)]

mod cli;
mod application;
mod domain;
mod data;
mod engine;
mod infra;

use anyhow::Result;
use cli::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("fill_blank=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
