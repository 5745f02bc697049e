//! Nearest-candidate search over the loaded dictionary.

use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::Dictionary;
use crate::spelling::levenshtein::{levenshtein_distance, levenshtein_distance_threshold};

/// A dictionary entry together with its edit distance to the looked-up word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The dictionary entry.
    pub word: String,
    /// Edit distance from the looked-up word to this entry.
    pub distance: usize,
}

/// Find the dictionary entry closest to `word` by Levenshtein distance.
///
/// Entries are scanned in load order and only a strictly smaller distance
/// replaces the current best, so the first-seen entry wins ties. An empty
/// dictionary yields `None` ("no correction available") rather than an error;
/// the caller decides how to render that.
///
/// Entries that provably cannot improve on the current best are skipped via
/// the thresholded distance. This is a pruning device only: the returned
/// candidate is identical to the one a full brute-force scan would pick.
pub fn nearest_candidate(word: &str, dictionary: &Dictionary) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for entry in dictionary.entries() {
        match &best {
            None => {
                let distance = levenshtein_distance(entry, word);
                best = Some(Candidate {
                    word: entry.clone(),
                    distance,
                });
            }
            Some(current) => {
                if current.distance == 0 {
                    // Nothing can be strictly closer than an exact match.
                    break;
                }
                if let Some(distance) =
                    levenshtein_distance_threshold(entry, word, current.distance - 1)
                {
                    best = Some(Candidate {
                        word: entry.clone(),
                        distance,
                    });
                }
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_candidate_picks_global_minimum() {
        let dict = Dictionary::from_words(["घर", "पानी", "आम"]);

        let candidate = nearest_candidate("पनी", &dict).unwrap();
        assert_eq!(candidate.word, "पानी");
        assert_eq!(candidate.distance, 1);
    }

    #[test]
    fn test_nearest_candidate_first_entry_wins_ties() {
        // "cat" and "bat" are both at distance 1 from "aat".
        let dict = Dictionary::from_words(["cat", "bat"]);
        let candidate = nearest_candidate("aat", &dict).unwrap();
        assert_eq!(candidate.word, "cat");
        assert_eq!(candidate.distance, 1);

        // Load order decides, not any property of the words.
        let dict = Dictionary::from_words(["bat", "cat"]);
        let candidate = nearest_candidate("aat", &dict).unwrap();
        assert_eq!(candidate.word, "bat");
    }

    #[test]
    fn test_nearest_candidate_empty_dictionary() {
        let dict = Dictionary::new();
        assert_eq!(nearest_candidate("कोई", &dict), None);
    }

    #[test]
    fn test_nearest_candidate_exact_entry() {
        // The checker excludes in-dictionary words before searching, but the
        // search itself does not rely on that.
        let dict = Dictionary::from_words(["word", "other"]);
        let candidate = nearest_candidate("word", &dict).unwrap();
        assert_eq!(candidate.word, "word");
        assert_eq!(candidate.distance, 0);
    }

    #[test]
    fn test_nearest_candidate_empty_entry_participates() {
        // An empty corpus line is a legal entry and competes like any other.
        let dict = Dictionary::from_words(["", "ab"]);
        let candidate = nearest_candidate("a", &dict).unwrap();
        assert_eq!(candidate.word, "");
        assert_eq!(candidate.distance, 1);
    }

    #[test]
    fn test_nearest_candidate_matches_brute_force() {
        let dict = Dictionary::from_words(["hello", "help", "helm", "world", "मकान", "पानी"]);

        for word in ["helo", "wrld", "पनी", "xyz", ""] {
            let candidate = nearest_candidate(word, &dict).unwrap();

            let mut best_distance = usize::MAX;
            let mut best_word = None;
            for entry in dict.entries() {
                let distance = levenshtein_distance(entry, word);
                if distance < best_distance {
                    best_distance = distance;
                    best_word = Some(entry.clone());
                }
            }

            assert_eq!(candidate.distance, best_distance);
            assert_eq!(Some(candidate.word), best_word);
        }
    }
}
