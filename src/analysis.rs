//! Analysis values produced by the analyzer.

use std::fmt;

use crate::grammar::{PartOfSpeech, PosSet, Suffix};
use crate::numeral::NumeralValue;
use crate::phonology::AblautCategory;

/// One morpheme of an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Morpheme {
    /// Part-of-speech prefix.
    Prefix {
        /// Prefix spelling.
        letter: char,
        /// Part of speech the prefix selects.
        tag: PartOfSpeech,
    },
    /// Dictionary root or pronoun.
    Root(String),
    /// Numeral root.
    Numeral {
        /// Digit value of the root.
        index: usize,
        /// Root spelling.
        form: String,
    },
    /// The repeatable compound with `count` links.
    CompoundRepeat {
        /// Head word.
        base: String,
        /// Repeated link.
        link: String,
        /// Number of links.
        count: usize,
    },
    /// Ablaut applied to the preceding root.
    AblautMark(AblautCategory),
    /// Grammatical suffix.
    Suffix(Suffix),
    /// Positional numeral suffix.
    NumeralPlace {
        /// Exponent bit the suffix sets.
        slot: usize,
        /// Suffix spelling.
        form: String,
    },
    /// Possessor suffix.
    PossessiveMark {
        /// Index of the possessing pronoun.
        pronoun_index: usize,
        /// Possessing pronoun.
        pronoun: String,
    },
}

impl fmt::Display for Morpheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix { letter, .. } => write!(f, "{letter}"),
            Self::Root(root) => f.write_str(root),
            Self::Numeral { form, .. } | Self::NumeralPlace { form, .. } => f.write_str(form),
            Self::CompoundRepeat { base, link, count } => {
                write!(f, "({base}")?;
                for _ in 0..*count {
                    write!(f, " + {link}")?;
                }
                f.write_str(")")
            }
            Self::AblautMark(category) => write!(f, "{category} ablaut"),
            Self::Suffix(suffix) => f.write_str(suffix.as_str()),
            Self::PossessiveMark { pronoun, .. } => write!(f, "possessive form of \"{pronoun}\""),
        }
    }
}

/// An ordered morpheme sequence with the parts of speech it permits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Analysis {
    morphemes: Vec<Morpheme>,
    pos: PosSet,
}

impl Analysis {
    /// Creates an analysis.
    pub fn new(morphemes: Vec<Morpheme>, pos: PosSet) -> Self {
        Self { morphemes, pos }
    }

    /// Creates a one-morpheme analysis.
    pub fn single(morpheme: Morpheme, pos: PosSet) -> Self {
        Self::new(vec![morpheme], pos)
    }

    /// Returns the morphemes in surface order.
    pub fn morphemes(&self) -> &[Morpheme] {
        &self.morphemes
    }

    /// Returns the permitted parts of speech.
    pub fn pos(&self) -> PosSet {
        self.pos
    }

    /// Returns the first morpheme.
    pub fn leading(&self) -> Option<&Morpheme> {
        self.morphemes.first()
    }

    /// Concatenates two analyses and intersects their constraints.
    ///
    /// Returns `None` when no part of speech survives the intersection.
    pub fn combine(&self, other: &Self) -> Option<Self> {
        let pos = self.pos.intersect(other.pos)?;
        let mut morphemes = Vec::with_capacity(self.morphemes.len() + other.morphemes.len());
        morphemes.extend_from_slice(&self.morphemes);
        morphemes.extend_from_slice(&other.morphemes);
        Some(Self { morphemes, pos })
    }

    /// Returns a copy with unconstrained morphemes appended.
    pub fn extended(&self, tail: impl IntoIterator<Item = Morpheme>) -> Self {
        let mut morphemes = self.morphemes.clone();
        morphemes.extend(tail);
        Self {
            morphemes,
            pos: self.pos,
        }
    }

    /// Returns `true` when `suffix` appears as its own morpheme.
    pub fn has_suffix(&self, suffix: Suffix) -> bool {
        self.morphemes
            .iter()
            .any(|morpheme| *morpheme == Morpheme::Suffix(suffix))
    }

    /// Returns the value of the first numeral root and the positional
    /// suffixes in the analysis.
    pub fn numeral_value(&self) -> Option<NumeralValue> {
        let root_index = self.morphemes.iter().find_map(|morpheme| match morpheme {
            Morpheme::Numeral { index, .. } => Some(*index),
            _ => None,
        })?;
        let slots = self.morphemes.iter().filter_map(|morpheme| match morpheme {
            Morpheme::NumeralPlace { slot, .. } => Some(*slot),
            _ => None,
        });
        Some(NumeralValue::from_slots(root_index, slots))
    }

    /// Returns each morpheme's gloss in order.
    pub fn glosses(&self) -> Vec<String> {
        self.morphemes.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, morpheme) in self.morphemes.iter().enumerate() {
            if position > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{morpheme}")?;
        }
        Ok(())
    }
}
