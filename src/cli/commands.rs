//! Command implementations for the Shuddhi CLI.

use std::fs;
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::corrector::{CheckerConfig, SpellChecker};
use crate::spelling::dictionary::cached_dictionary;

/// Execute a CLI command.
pub fn execute_command(args: ShuddhiArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_file(check_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Spell-check an input file against the corpus.
fn check_file(args: CheckArgs, cli_args: &ShuddhiArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading corpus from: {}", args.dictionary.display());
    }
    let dictionary = cached_dictionary(&args.dictionary)?;

    if cli_args.verbosity() > 1 {
        println!("Checking: {}", args.input_file.display());
    }
    let input = fs::read_to_string(&args.input_file)?;

    let config = CheckerConfig {
        parallel: args.parallel,
        threads: args.threads,
    };
    let checker = SpellChecker::with_config(dictionary, config)?;

    let start = Instant::now();
    let report = checker.check(&input);
    let duration_ms = start.elapsed().as_millis() as u64;

    let annotated = if let Some(output_path) = &args.output {
        fs::write(output_path, &report.annotated)?;
        if cli_args.verbosity() > 0 {
            println!("Wrote annotated text to: {}", output_path.display());
        }
        None
    } else {
        Some(report.annotated)
    };

    let result = CheckResult {
        input: args.input_file.display().to_string(),
        corpus: args.dictionary.display().to_string(),
        tokens: report.tokens,
        flagged: report.flagged,
        duration_ms,
        annotated,
        corrections: report.corrections,
    };

    output_result("Spell check complete", &result, cli_args)
}

/// Show statistics about the corpus.
fn show_stats(args: StatsArgs, cli_args: &ShuddhiArgs) -> Result<()> {
    let dictionary = cached_dictionary(&args.dictionary)?;

    let result = StatsResult {
        corpus: args.dictionary.display().to_string(),
        entries: dictionary.len(),
        distinct_entries: dictionary.distinct_count(),
        longest_entry_chars: dictionary.max_entry_len(),
    };

    output_result("Corpus statistics", &result, cli_args)
}
