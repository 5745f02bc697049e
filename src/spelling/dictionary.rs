//! Dictionary loading and membership lookup.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ahash::AHashSet;
use lazy_static::lazy_static;
use parking_lot::RwLock;

use crate::error::{Result, ShuddhiError};

/// A fixed vocabulary loaded from a newline-delimited word list.
///
/// Entries are kept in load order because the nearest-candidate search breaks
/// distance ties in favor of the earliest entry. The corpus is taken as given:
/// duplicates and empty lines are preserved as-is, and no case normalization
/// is performed anywhere. Membership is exact, case-sensitive, whole-string.
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Entries in the order they appeared in the corpus.
    entries: Vec<String>,
    /// Set of all entries for fast membership lookup.
    word_set: AHashSet<String>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Dictionary {
            entries: Vec::new(),
            word_set: AHashSet::new(),
        }
    }

    /// Build a dictionary from an iterator of words, preserving order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dictionary = Dictionary::new();
        for word in words {
            dictionary.push(word.into());
        }
        dictionary
    }

    /// Read a dictionary from a buffered reader, one entry per line.
    ///
    /// Each line is stripped of leading and trailing whitespace (including the
    /// line terminator). Empty lines yield empty-string entries and are not
    /// filtered out. Read failures, including invalid UTF-8, surface as errors.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dictionary = Dictionary::new();
        for line in reader.lines() {
            let line = line?;
            dictionary.push(line.trim().to_string());
        }
        Ok(dictionary)
    }

    /// Load a dictionary from a newline-delimited UTF-8 text file.
    ///
    /// A missing or unreadable corpus is always an error, never an empty
    /// dictionary.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ShuddhiError::dictionary(format!("failed to open corpus {}: {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(file)).map_err(|e| {
            ShuddhiError::dictionary(format!("failed to read corpus {}: {e}", path.display()))
        })
    }

    /// Append an entry, keeping load order.
    pub fn push(&mut self, word: String) {
        self.word_set.insert(word.clone());
        self.entries.push(word);
    }

    /// Check whether a word exists verbatim in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.word_set.contains(word)
    }

    /// Get all entries in load order, duplicates included.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Get the number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the dictionary has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of distinct entries.
    pub fn distinct_count(&self) -> usize {
        self.word_set.len()
    }

    /// Get the character length of the longest entry.
    pub fn max_entry_len(&self) -> usize {
        self.entries
            .iter()
            .map(|word| word.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide cache of loaded dictionaries, keyed by canonical path.
///
/// The corpus is read-only and large relative to request frequency, so each
/// path is loaded once and shared by `Arc` across all subsequent requests.
pub struct DictionaryCache {
    loaded: RwLock<HashMap<PathBuf, Arc<Dictionary>>>,
}

lazy_static! {
    static ref GLOBAL_CACHE: DictionaryCache = DictionaryCache::new();
}

impl DictionaryCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        DictionaryCache {
            loaded: RwLock::new(HashMap::new()),
        }
    }

    /// Get the dictionary for a path, loading it on first use.
    ///
    /// Load failures are not cached; a later call retries the read.
    pub fn get<P: AsRef<Path>>(&self, path: P) -> Result<Arc<Dictionary>> {
        let key = std::fs::canonicalize(path.as_ref()).map_err(|e| {
            ShuddhiError::dictionary(format!(
                "failed to resolve corpus path {}: {e}",
                path.as_ref().display()
            ))
        })?;

        if let Some(dictionary) = self.loaded.read().get(&key) {
            return Ok(dictionary.clone());
        }

        let dictionary = Arc::new(Dictionary::load_from_file(&key)?);
        let mut loaded = self.loaded.write();
        // A concurrent loader may have won the race; keep the first insert.
        Ok(loaded.entry(key).or_insert(dictionary).clone())
    }

    /// Drop all cached dictionaries.
    pub fn clear(&self) {
        self.loaded.write().clear();
    }

    /// Get the number of cached dictionaries.
    pub fn len(&self) -> usize {
        self.loaded.read().len()
    }

    /// Check whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.loaded.read().is_empty()
    }
}

impl Default for DictionaryCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Get a dictionary from the process-wide cache, loading it on first use.
pub fn cached_dictionary<P: AsRef<Path>>(path: P) -> Result<Arc<Dictionary>> {
    GLOBAL_CACHE.get(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_dictionary_basic_operations() {
        let mut dict = Dictionary::new();

        assert!(!dict.contains("घर"));
        assert_eq!(dict.len(), 0);
        assert!(dict.is_empty());

        dict.push("घर".to_string());
        assert!(dict.contains("घर"));
        assert_eq!(dict.len(), 1);

        dict.push("पानी".to_string());
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.entries(), &["घर".to_string(), "पानी".to_string()]);
    }

    #[test]
    fn test_dictionary_case_sensitive() {
        let dict = Dictionary::from_words(["Hello"]);

        assert!(dict.contains("Hello"));
        assert!(!dict.contains("hello"));
        assert!(!dict.contains("HELLO"));
    }

    #[test]
    fn test_dictionary_keeps_duplicates() {
        let dict = Dictionary::from_words(["word", "word", "other"]);

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.distinct_count(), 2);
    }

    #[test]
    fn test_from_reader_trims_and_keeps_empty_lines() {
        let data = "  घर  \nपानी\n\nआम\n";
        let dict = Dictionary::from_reader(data.as_bytes()).unwrap();

        assert_eq!(
            dict.entries(),
            &[
                "घर".to_string(),
                "पानी".to_string(),
                String::new(),
                "आम".to_string()
            ]
        );
        assert!(dict.contains("घर"));
        assert!(dict.contains(""));
    }

    #[test]
    fn test_max_entry_len_counts_chars() {
        let dict = Dictionary::from_words(["घर", "पानी", "आम"]);
        // "पानी" is four chars but twelve bytes.
        assert_eq!(dict.max_entry_len(), 4);

        assert_eq!(Dictionary::new().max_entry_len(), 0);
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "घर").unwrap();
        writeln!(temp_file, "  पानी").unwrap();
        writeln!(temp_file, "आम").unwrap();
        temp_file.flush().unwrap();

        let dict = Dictionary::load_from_file(temp_file.path()).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("पानी"));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = Dictionary::load_from_file("/nonexistent/corpus.txt");
        match result {
            Err(ShuddhiError::Dictionary(msg)) => {
                assert!(msg.contains("corpus"));
            }
            other => panic!("Expected dictionary error, got {other:?}"),
        }
    }

    #[test]
    fn test_cache_returns_shared_instance() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "घर").unwrap();
        temp_file.flush().unwrap();

        let cache = DictionaryCache::new();
        let first = cache.get(temp_file.path()).unwrap();
        let second = cache.get(temp_file.path()).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_surfaces_load_failure() {
        let cache = DictionaryCache::new();
        assert!(cache.get("/nonexistent/corpus.txt").is_err());
        assert!(cache.is_empty());
    }
}
