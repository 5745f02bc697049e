//! Spelling correction for a fixed vocabulary.
//!
//! This module provides the dictionary loader, the edit-distance
//! implementation, the nearest-candidate search over the loaded corpus, and
//! the checker that annotates out-of-vocabulary tokens with their closest
//! dictionary entry.

pub mod corrector;
pub mod dictionary;
pub mod levenshtein;
pub mod nearest;

// Re-export commonly used types
pub use corrector::*;
pub use dictionary::*;
pub use levenshtein::*;
pub use nearest::*;
