//! # Shuddhi
//!
//! A dictionary-based spelling corrector for fixed vocabularies.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Exact, case-sensitive dictionary membership
//! - Levenshtein-distance nearest-candidate search
//! - Line/word annotated output for out-of-vocabulary tokens
//! - Optional parallel checking with rayon

pub mod cli;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::error::{Result, ShuddhiError};
    pub use crate::spelling::corrector::{CheckReport, CheckerConfig, Correction, SpellChecker};
    pub use crate::spelling::dictionary::Dictionary;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
