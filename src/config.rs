use std::path::PathBuf;

use clap::builder::{Styles, styling};
use clap::{Parser, Subcommand, ValueEnum};

use color_eyre::Result;

const CLAP_STYLING: Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Blue.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

pub struct Config {
    pub command: Command,
    pub output_format: OutputFormat,
    pub progress: bool,
}

/// Weighted prefix completion and alphabet-ordered sorting of words.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, styles = CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,
    /// Output format. (default: plain)
    #[arg(short, long, global = true, default_value = "plain")]
    format: OutputFormat,
    /// Shows progress while loading terms
    #[arg(short, long, global = true)]
    progress: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Reads an alphabet line and then words from stdin, prints the words in alphabet order.
    Sort,
    /// Loads weighted terms and prints the heaviest completions of each prefix.
    Complete {
        /// Terms file: optional count line, then `<weight> <term>` per line.
        #[arg(short, long)]
        terms: PathBuf,
        /// Maximum number of completions per prefix.
        #[arg(short, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
        k: u64,
        /// Prefixes to complete. Read one per line from stdin when omitted.
        prefixes: Vec<String>,
    },
}

impl Config {
    pub fn new() -> Result<Self> {
        let args = Args::parse();

        Ok(Self {
            command: args.command,
            output_format: args.format,
            progress: args.progress,
        })
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}
