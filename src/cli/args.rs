//! Command line argument parsing for the Shuddhi CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Shuddhi - A dictionary-based spelling corrector
#[derive(Parser, Debug, Clone)]
#[command(name = "shuddhi")]
#[command(about = "A dictionary-based spelling corrector for fixed vocabularies")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Shuddhi Contributors")]
#[command(long_about = None)]
pub struct ShuddhiArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ShuddhiArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Spell-check a text file against a corpus
    Check(CheckArgs),

    /// Show corpus statistics
    Stats(StatsArgs),
}

/// Arguments for spell checking
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Input text file to check
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Corpus file with one vocabulary word per line
    #[arg(
        short,
        long,
        value_name = "CORPUS_FILE",
        default_value = "hindi_corpus.txt"
    )]
    pub dictionary: PathBuf,

    /// Write the annotated text to a file instead of stdout
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Check tokens in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Number of worker threads for --parallel (0 = one per CPU)
    #[arg(long, default_value = "0")]
    pub threads: usize,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Corpus file with one vocabulary word per line
    #[arg(
        short,
        long,
        value_name = "CORPUS_FILE",
        default_value = "hindi_corpus.txt"
    )]
    pub dictionary: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_check_args_defaults() {
        let args = ShuddhiArgs::parse_from(["shuddhi", "check", "input.txt"]);

        assert_eq!(args.verbosity(), 1);
        assert_eq!(args.output_format, OutputFormat::Human);

        match args.command {
            Command::Check(check) => {
                assert_eq!(check.input_file, PathBuf::from("input.txt"));
                assert_eq!(check.dictionary, PathBuf::from("hindi_corpus.txt"));
                assert_eq!(check.output, None);
                assert!(!check.parallel);
                assert_eq!(check.threads, 0);
            }
            _ => panic!("Expected check command"),
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = ShuddhiArgs::parse_from(["shuddhi", "-vv", "stats"]);
        assert_eq!(args.verbosity(), 2);

        let args = ShuddhiArgs::parse_from(["shuddhi", "-q", "-v", "stats"]);
        assert_eq!(args.verbosity(), 0); // quiet wins
    }

    #[test]
    fn test_check_args_full() {
        let args = ShuddhiArgs::parse_from([
            "shuddhi",
            "--format",
            "json",
            "--pretty",
            "check",
            "input.txt",
            "--dictionary",
            "corpus.txt",
            "--output",
            "out.txt",
            "--parallel",
            "--threads",
            "4",
        ]);

        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);

        match args.command {
            Command::Check(check) => {
                assert_eq!(check.dictionary, PathBuf::from("corpus.txt"));
                assert_eq!(check.output, Some(PathBuf::from("out.txt")));
                assert!(check.parallel);
                assert_eq!(check.threads, 4);
            }
            _ => panic!("Expected check command"),
        }
    }
}
