use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI for checking and rewriting CD cuesheets.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Check(CheckCommand),
    Rewrite(RewriteCommand),
}

/// Parses a cuesheet and reports every syntax and semantic problem found.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct CheckCommand {
    /// Input cuesheet path
    #[arg(value_name = "INPUT_CUE")]
    pub input: PathBuf,
}

/// Parses a cuesheet and writes it back out in canonical form.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct RewriteCommand {
    /// Input cuesheet path
    #[arg(value_name = "INPUT_CUE")]
    pub input: PathBuf,

    /// Output path; defaults to overwriting the input
    #[arg(long, short = 'o', value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Line ending style for the output: CR, LF, or CRLF
    #[arg(long, value_name = "STYLE")]
    pub line_ending: Option<String>,
}
