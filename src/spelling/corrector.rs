//! Spell checking and annotation of out-of-vocabulary tokens.

use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShuddhiError};
use crate::spelling::dictionary::{Dictionary, cached_dictionary};
use crate::spelling::nearest::nearest_candidate;

/// Configuration for the spell checker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Whether to check tokens in parallel.
    pub parallel: bool,
    /// Number of worker threads (0 = rayon default).
    pub threads: usize,
}

impl CheckerConfig {
    /// Configuration for parallel checking with one thread per CPU.
    pub fn parallel() -> Self {
        CheckerConfig {
            parallel: true,
            threads: num_cpus::get(),
        }
    }
}

/// One record per input token, in input order.
///
/// `suggestion` is `None` for a token found verbatim in the dictionary, and
/// `Some(replacement)` for a flagged token. With an empty dictionary the
/// replacement is the empty string ("no correction available").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// 1-based line number.
    pub line: usize,
    /// 1-based word number within the line.
    pub word: usize,
    /// The token as it appeared in the input.
    pub original: String,
    /// Proposed replacement, or None if the token is in the dictionary.
    pub suggestion: Option<String>,
}

impl Correction {
    /// Whether this token was flagged as out-of-vocabulary.
    pub fn is_flagged(&self) -> bool {
        self.suggestion.is_some()
    }

    /// Render this record the way it appears in annotated output: the
    /// original token if correct, otherwise the fixed-format annotation.
    pub fn rendered(&self) -> String {
        match &self.suggestion {
            None => self.original.clone(),
            Some(suggestion) => format!(
                "At Line: {} Word No. {}: {} -> {}",
                self.line, self.word, self.original, suggestion
            ),
        }
    }
}

/// Result of checking a block of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// The input with out-of-vocabulary tokens replaced by annotations.
    ///
    /// Whitespace between words is normalized to single spaces; original
    /// inter-token spacing is not preserved.
    pub annotated: String,
    /// One record per input token, in input order.
    pub corrections: Vec<Correction>,
    /// Total number of tokens in the input.
    pub tokens: usize,
    /// Number of tokens that were flagged.
    pub flagged: usize,
}

impl CheckReport {
    /// Whether any token was flagged.
    pub fn has_flagged(&self) -> bool {
        self.flagged > 0
    }

    /// Iterate over the flagged records only.
    pub fn flagged_corrections(&self) -> impl Iterator<Item = &Correction> {
        self.corrections.iter().filter(|c| c.is_flagged())
    }
}

/// Spell checker over a fixed vocabulary.
///
/// The checker is a pure function of (input text, dictionary): it holds no
/// mutable state and can be shared freely across threads. The dictionary is
/// consulted in exactly two places, the membership test and the
/// nearest-candidate search. Repeated occurrences of the same unknown token
/// each rescan the corpus; no per-token memoization is performed.
pub struct SpellChecker {
    dictionary: Arc<Dictionary>,
    config: CheckerConfig,
    pool: Option<ThreadPool>,
}

impl SpellChecker {
    /// Create a spell checker with the default (sequential) configuration.
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        SpellChecker {
            dictionary,
            config: CheckerConfig::default(),
            pool: None,
        }
    }

    /// Create a spell checker with a custom configuration.
    pub fn with_config(dictionary: Arc<Dictionary>, config: CheckerConfig) -> Result<Self> {
        let pool = if config.parallel && config.threads > 0 {
            let pool = ThreadPoolBuilder::new()
                .num_threads(config.threads)
                .build()
                .map_err(|e| ShuddhiError::other(format!("failed to build thread pool: {e}")))?;
            Some(pool)
        } else {
            None
        };

        Ok(SpellChecker {
            dictionary,
            config,
            pool,
        })
    }

    /// Create a spell checker over the corpus at `path`, using the
    /// process-wide dictionary cache.
    pub fn from_corpus_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(SpellChecker::new(cached_dictionary(path)?))
    }

    /// Get the dictionary this checker consults.
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// Get the checker configuration.
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Check a block of text, producing one record per token plus the
    /// annotated output.
    ///
    /// The input is split into lines on line-feed and into tokens on
    /// whitespace; line and word numbers are 1-based. Empty input yields an
    /// empty report, not an error. The parallel path produces byte-identical
    /// output to the sequential one.
    pub fn check(&self, text: &str) -> CheckReport {
        let lines: Vec<&str> = text.split('\n').collect();

        // Tokens are independent of each other, so they parallelize at token
        // granularity with results combined back in input order.
        let tokens: Vec<(usize, usize, &str)> = lines
            .iter()
            .enumerate()
            .flat_map(|(line_idx, line)| {
                line.split_whitespace()
                    .enumerate()
                    .map(move |(word_idx, token)| (line_idx + 1, word_idx + 1, token))
            })
            .collect();

        let corrections: Vec<Correction> = if self.config.parallel {
            let scan = || {
                tokens
                    .par_iter()
                    .map(|&(line, word, token)| self.check_token(line, word, token))
                    .collect()
            };
            match &self.pool {
                Some(pool) => pool.install(scan),
                None => scan(),
            }
        } else {
            tokens
                .iter()
                .map(|&(line, word, token)| self.check_token(line, word, token))
                .collect()
        };

        let mut rendered: Vec<Vec<String>> = vec![Vec::new(); lines.len()];
        for correction in &corrections {
            rendered[correction.line - 1].push(correction.rendered());
        }
        let annotated = rendered
            .iter()
            .map(|words| words.join(" "))
            .collect::<Vec<String>>()
            .join("\n");

        let flagged = corrections.iter().filter(|c| c.is_flagged()).count();

        CheckReport {
            annotated,
            tokens: corrections.len(),
            flagged,
            corrections,
        }
    }

    /// Check a block of text and return only the annotated output.
    pub fn annotate(&self, text: &str) -> String {
        self.check(text).annotated
    }

    /// Check whether a single token is in the dictionary.
    pub fn is_correct(&self, token: &str) -> bool {
        self.dictionary.contains(token)
    }

    fn check_token(&self, line: usize, word: usize, token: &str) -> Correction {
        let suggestion = if self.dictionary.contains(token) {
            None
        } else {
            Some(
                nearest_candidate(token, &self.dictionary)
                    .map(|candidate| candidate.word)
                    .unwrap_or_default(),
            )
        };

        Correction {
            line,
            word,
            original: token.to_string(),
            suggestion,
        }
    }
}
