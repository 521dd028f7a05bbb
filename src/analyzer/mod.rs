//! Morpheme analyzer.
//!
//! [`Analyzer::analyze`] returns every decomposition of a word into an
//! optional prefix, a root with its ablaut and suffixes, and an optional
//! trailing modifier. The analyzer only borrows its configuration, so one
//! lexicon and grammar can back many analyzers.
//!
//! The stages, leaves first:
//!
//! - [`Analyzer::root_analyses`]: bare, ablaut-marked, and compound roots;
//! - [`Analyzer::numeral_analyses`]: positional numerals and lateral suffixes;
//! - [`Analyzer::suffixed_root_analyses`]: roots and numerals with basic suffixes;
//! - [`Analyzer::modifier_analyses`]: trailing modifiers and possessors;
//! - [`Analyzer::segment`]: root and modifier splits with numeral agreement.

mod filler;
mod modifier;
mod numeral;
mod root;
mod segment;

use tracing::debug;

use crate::analysis::{Analysis, Morpheme};
use crate::grammar::{AffixGrammar, PosSet};
use crate::lexicon::Lexicon;
use crate::phonology::{FynotekPhonology, Phonology, VowelSplit};

/// Analyzer over a borrowed lexicon and affix grammar.
#[derive(Debug, Clone)]
pub struct Analyzer<'a, P = FynotekPhonology> {
    lexicon: &'a Lexicon,
    grammar: &'a AffixGrammar,
    phonology: P,
    compound_link: Option<VowelSplit>,
}

impl<'a, P: Phonology> Analyzer<'a, P> {
    /// Creates an analyzer.
    pub fn new(lexicon: &'a Lexicon, grammar: &'a AffixGrammar, phonology: P) -> Self {
        let compound_link = lexicon
            .compound()
            .map(|compound| phonology.separate_vowels(compound.link()));
        Self {
            lexicon,
            grammar,
            phonology,
            compound_link,
        }
    }

    /// Returns the lexicon.
    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Returns the affix grammar.
    pub fn grammar(&self) -> &'a AffixGrammar {
        self.grammar
    }

    /// Returns the phonology.
    pub fn phonology(&self) -> &P {
        &self.phonology
    }

    /// Returns every analysis of `word`.
    ///
    /// The word is trimmed and lowercased first. Words containing inner
    /// whitespace or failing the sequence validator have no analyses.
    /// Results are not deduplicated.
    pub fn analyze(&self, word: &str) -> Vec<Analysis> {
        let word = word.trim().to_lowercase();
        if word.chars().any(char::is_whitespace) || !self.phonology.is_valid_sequence(&word) {
            debug!(word = %word, "rejected by sequence validator");
            return Vec::new();
        }

        let mut analyses = self.segment(&word, PosSet::ALL);
        analyses.extend(self.prefixed_analyses(&word));
        debug!(word = %word, analyses = analyses.len(), "analyzed word");
        analyses
    }

    fn prefixed_analyses(&self, word: &str) -> Vec<Analysis> {
        let Some(letter) = word.chars().next() else {
            return Vec::new();
        };
        let Some(tag) = self.grammar.prefix_for(letter) else {
            return Vec::new();
        };

        let allowed = PosSet::single(tag);
        let prefix = Analysis::single(Morpheme::Prefix { letter, tag }, allowed);
        let rest = &word[letter.len_utf8()..];

        let mut analyses = Vec::new();
        for rest in std::iter::once(rest).chain(self.leading_filler_repair(letter, rest)) {
            for analysis in self.segment(rest, allowed) {
                analyses.extend(self.merge(&prefix, &analysis));
            }
        }
        analyses
    }
}
