//! Affix grammar: suffix tables, prefixes, and filler letters.

mod pos;
mod suffix;

pub use pos::{PartOfSpeech, PosSet};
pub use suffix::{BasicSuffix, LateralSuffix, Suffix};

use crate::numeral::NumeralPosition;
use suffix::{ATTACHED_LATERAL_SUFFIXES, BASIC_SUFFIXES, WHOLE_LATERAL_SUFFIXES};

/// Immutable affix configuration used by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixGrammar {
    basic_suffixes: Vec<BasicSuffix>,
    whole_laterals: Vec<LateralSuffix>,
    attached_laterals: Vec<LateralSuffix>,
    prefixes: Vec<(char, PartOfSpeech)>,
    filler_letters: Vec<char>,
}

impl AffixGrammar {
    /// Returns the affix grammar of modern Fynotek.
    pub fn fynotek() -> Self {
        Self {
            basic_suffixes: BASIC_SUFFIXES.to_vec(),
            whole_laterals: WHOLE_LATERAL_SUFFIXES.to_vec(),
            attached_laterals: ATTACHED_LATERAL_SUFFIXES.to_vec(),
            prefixes: vec![
                ('a', PartOfSpeech::Noun),
                ('i', PartOfSpeech::Verb),
                ('o', PartOfSpeech::Modifier),
            ],
            filler_letters: vec!['a', 'n'],
        }
    }

    /// Returns the basic suffixes tried under the governing set `allowed`, in order.
    pub fn basic_suffixes_for(&self, allowed: PosSet) -> impl Iterator<Item = &BasicSuffix> {
        self.basic_suffixes
            .iter()
            .filter(move |suffix| suffix.applies_under(allowed))
    }

    /// Returns the lateral suffixes tried for a numeral in `position`.
    pub fn lateral_suffixes(&self, position: NumeralPosition) -> &[LateralSuffix] {
        match position {
            NumeralPosition::Whole => &self.whole_laterals,
            NumeralPosition::Attached => &self.attached_laterals,
        }
    }

    /// Returns the constraint a lateral suffix places on a numeral in `position`.
    pub const fn lateral_constraint(&self, position: NumeralPosition) -> PosSet {
        match position {
            NumeralPosition::Whole => PosSet::ALL,
            NumeralPosition::Attached => PosSet::NOUN_OR_MODIFIER,
        }
    }

    /// Returns the constraint placed by a possessor suffix.
    pub const fn possessive_constraint(&self) -> PosSet {
        PosSet::NOUN_OR_MODIFIER
    }

    /// Returns the part of speech selected by a prefix letter.
    pub fn prefix_for(&self, letter: char) -> Option<PartOfSpeech> {
        self.prefixes
            .iter()
            .find(|(prefix, _)| *prefix == letter)
            .map(|&(_, tag)| tag)
    }

    /// Returns `true` when `letter` may be inserted at a morpheme boundary.
    pub fn is_filler(&self, letter: char) -> bool {
        self.filler_letters.contains(&letter)
    }
}

impl Default for AffixGrammar {
    fn default() -> Self {
        Self::fynotek()
    }
}
