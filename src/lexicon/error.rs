//! Error contracts for lexicon construction and loading.

use std::path::PathBuf;

/// Error raised when a lexicon cannot be built or loaded.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// The lexicon file could not be read.
    #[error("failed to read lexicon file {}: {source}", path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The lexicon document is not well-formed.
    #[error("malformed lexicon document: {0}")]
    Json(#[from] serde_json::Error),
    /// A table contains an empty string.
    #[error("empty entry in the {table} table")]
    EmptyEntry {
        /// Name of the offending table.
        table: &'static str,
    },
    /// Possessor suffixes are not index-aligned with pronouns.
    #[error(
        "possessor suffixes must align with pronouns: {pronouns} pronouns, {possessors} possessor suffixes"
    )]
    MisalignedPossessors {
        /// Number of pronouns.
        pronouns: usize,
        /// Number of possessor suffixes.
        possessors: usize,
    },
    /// The numeral root table does not hold one root per base-6 digit.
    #[error("expected {expected} numeral roots, found {found}")]
    NumeralRootCount {
        /// Required table size.
        expected: usize,
        /// Actual table size.
        found: usize,
    },
    /// The numeral suffix table does not hold one suffix per exponent bit.
    #[error("expected {expected} numeral suffixes, found {found}")]
    NumeralSuffixCount {
        /// Required table size.
        expected: usize,
        /// Actual table size.
        found: usize,
    },
    /// The repeatable compound link has no vowel to mutate.
    #[error("compound link {link:?} has no vowel")]
    CompoundLinkWithoutVowel {
        /// Offending link spelling.
        link: String,
    },
}
