use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "gitdeck")]
#[command(bin_name = "gitdeck")]
#[command(version)]
#[command(about = "Interactive console for everyday git workflows")]
pub struct Cli {
    /// Repository directory to work on; skips the path prompt.
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Write a diagnostics log under ~/.config/gitdeck/diagnostics.
    #[arg(long, global = true)]
    pub diagnostics: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Run environment and configuration checks")]
    Doctor,
}
