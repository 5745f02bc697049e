//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, ShuddhiArgs};
use crate::error::Result;
use crate::spelling::corrector::Correction;

/// Result structure for spell checking.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub input: String,
    pub corpus: String,
    pub tokens: usize,
    pub flagged: usize,
    pub duration_ms: u64,
    /// Annotated text, absent when it was written to an output file instead.
    pub annotated: Option<String>,
    pub corrections: Vec<Correction>,
}

/// Result structure for corpus statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub corpus: String,
    pub entries: usize,
    pub distinct_entries: usize,
    pub longest_entry_chars: usize,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &ShuddhiArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &ShuddhiArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("CheckResult") => {
            output_check_result_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("StatsResult") => {
            output_stats_result_human(&value, args)
        }
        _ => {
            // Generic output for other types
            output_generic_human(&value, args)
        }
    }
}

/// Output spell check results in human format.
fn output_check_result_human(value: &serde_json::Value, args: &ShuddhiArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(annotated) = obj.get("annotated").and_then(|a| a.as_str()) {
            println!("{annotated}");
        }

        if args.verbosity() > 1 {
            println!();
            if let Some(tokens) = obj.get("tokens").and_then(|t| t.as_u64()) {
                println!("Tokens checked: {tokens}");
            }
            if let Some(flagged) = obj.get("flagged").and_then(|f| f.as_u64()) {
                println!("Tokens flagged: {flagged}");
            }
            if let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64()) {
                println!("Duration: {duration} ms");
            }
        }
    }

    Ok(())
}

/// Output corpus statistics in human format.
fn output_stats_result_human(value: &serde_json::Value, _args: &ShuddhiArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        println!("Corpus Statistics:");
        println!("══════════════════");

        if let Some(corpus) = obj.get("corpus").and_then(|c| c.as_str()) {
            println!("Corpus: {corpus}");
        }
        if let Some(entries) = obj.get("entries").and_then(|e| e.as_u64()) {
            println!("Entries: {entries}");
        }
        if let Some(distinct) = obj.get("distinct_entries").and_then(|d| d.as_u64()) {
            println!("Distinct entries: {distinct}");
        }
        if let Some(longest) = obj.get("longest_entry_chars").and_then(|l| l.as_u64()) {
            println!("Longest entry: {longest} chars");
        }
    }

    Ok(())
}

/// Generic human output for other types.
fn output_generic_human(value: &serde_json::Value, _args: &ShuddhiArgs) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ShuddhiArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
