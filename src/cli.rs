//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use bingo_cards::types::PrintMode;

#[derive(Debug, Parser)]
#[command(name = "bingo", version, about = "Generate, play and print bingo cards")]
pub struct Cli {
    /// Directory holding the sets (overrides BINGO_SETS_DIR)
    #[arg(long, global = true)]
    pub sets_dir: Option<PathBuf>,

    /// Directory for generated PDFs (overrides BINGO_OUTPUT_DIR)
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print cards to a PDF; prompts for a missing set or size
    Print(PrintArgs),
    /// Play a card in the console
    Play(PlayArgs),
    /// Render a fresh card to stdout
    Show(ShowArgs),
    /// Manage sets
    #[command(subcommand)]
    Sets(SetsCommand),
}

#[derive(Debug, Clone, Args)]
pub struct CardArgs {
    /// Name of the set to draw labels from
    #[arg(long)]
    pub set: Option<String>,

    /// Side length of the card
    #[arg(long)]
    pub size: Option<usize>,

    /// Do not put a free cell in the center
    #[arg(long)]
    pub no_free: bool,

    /// Seed for reproducible cards
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Args)]
pub struct PrintArgs {
    /// Cards per page: one or six
    #[arg(long, default_value = "one", value_parser = parse_print_mode)]
    pub mode: PrintMode,

    #[command(flatten)]
    pub card: CardArgs,

    /// Output file (defaults to a timestamped name in the output directory)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Number of pages to fill
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,
}

#[derive(Debug, Clone, Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub card: CardArgs,

    /// Draw borders with ASCII characters
    #[arg(long)]
    pub ascii: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub card: CardArgs,

    /// Draw borders with ASCII characters
    #[arg(long, conflicts_with = "json")]
    pub ascii: bool,

    /// Print a JSON snapshot instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum SetsCommand {
    /// List stored sets
    List,
    /// Print the entries of a set
    Show { name: String },
    /// Create a set; entries are read from stdin when none are given
    Add { name: String, entries: Vec<String> },
    /// Replace the entries of an existing set
    Replace { name: String, entries: Vec<String> },
    /// Delete a set
    Delete { name: String },
}

fn parse_print_mode(s: &str) -> Result<PrintMode, String> {
    PrintMode::from_str(s).ok_or_else(|| format!("unknown mode {:?}, expected one or six", s))
}
