//! Suffix glosses and the suffix tables of modern Fynotek.

use std::fmt;

use crate::grammar::{PartOfSpeech, PosSet};

/// A grammatical suffix, named after its spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suffix {
    /// `ak`, plural.
    Ak,
    /// `ñy`, negation.
    Ny,
    /// `a`, verbal suffix.
    A,
    /// `o`, verbal suffix.
    O,
    /// `yla`, distributive.
    Yla,
    /// `rea`, ordinal.
    Rea,
    /// `tfaa`
    Tfaa,
    /// `ejen`
    Ejen,
    /// `jeaj`, bounded to 8.
    Jeaj,
    /// `ñytuh`, bounded to 5.
    Nytuh,
    /// `ñytejen`, bounded to 12.
    Nytejen,
}

impl Suffix {
    /// The plurality marker.
    pub const PLURAL: Self = Self::Ak;
    /// The distributive marker on numerals.
    pub const DISTRIBUTIVE: Self = Self::Yla;
    /// The ordinal marker on numerals.
    pub const ORDINAL: Self = Self::Rea;

    /// Returns the suffix spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ak => "ak",
            Self::Ny => "ñy",
            Self::A => "a",
            Self::O => "o",
            Self::Yla => "yla",
            Self::Rea => "rea",
            Self::Tfaa => "tfaa",
            Self::Ejen => "ejen",
            Self::Jeaj => "jeaj",
            Self::Nytuh => "ñytuh",
            Self::Nytejen => "ñytejen",
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A suffix that may follow a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicSuffix {
    surface: &'static str,
    glosses: &'static [Suffix],
    applies_when: PosSet,
    constraint: PosSet,
}

impl BasicSuffix {
    /// Returns the full spelling removed from the end of a span.
    pub const fn surface(&self) -> &'static str {
        self.surface
    }

    /// Returns the glosses the spelling stands for, in surface order.
    pub const fn glosses(&self) -> &'static [Suffix] {
        self.glosses
    }

    /// Returns the constraint the suffix places on its word.
    pub const fn constraint(&self) -> PosSet {
        self.constraint
    }

    /// Returns `true` when the suffix is tried under the governing set `allowed`.
    pub const fn applies_under(&self, allowed: PosSet) -> bool {
        allowed.overlaps(self.applies_when)
    }
}

/// A suffix that may follow a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LateralSuffix {
    surface: &'static str,
    glosses: &'static [Suffix],
    bound: Option<u128>,
}

impl LateralSuffix {
    /// Returns the full spelling removed from the end of a span.
    pub const fn surface(&self) -> &'static str {
        self.surface
    }

    /// Returns the glosses the spelling stands for, in surface order.
    pub const fn glosses(&self) -> &'static [Suffix] {
        self.glosses
    }

    /// Returns the largest numeral value the suffix accepts, if bounded.
    pub const fn bound(&self) -> Option<u128> {
        self.bound
    }
}

const fn basic(
    surface: &'static str,
    glosses: &'static [Suffix],
    applies_when: PosSet,
    constraint: PosSet,
) -> BasicSuffix {
    BasicSuffix {
        surface,
        glosses,
        applies_when,
        constraint,
    }
}

const fn lateral(
    surface: &'static str,
    glosses: &'static [Suffix],
    bound: Option<u128>,
) -> LateralSuffix {
    LateralSuffix {
        surface,
        glosses,
        bound,
    }
}

const VERB: PosSet = PosSet::single(PartOfSpeech::Verb);

/// Suffixes tried after roots, in checking order.
pub(crate) const BASIC_SUFFIXES: [BasicSuffix; 7] = [
    basic("ñy", &[Suffix::Ny], PosSet::ALL, PosSet::ALL),
    basic("a", &[Suffix::A], VERB, PosSet::VERB_OR_MODIFIER),
    basic("o", &[Suffix::O], VERB, PosSet::VERB_OR_MODIFIER),
    basic(
        "ñya",
        &[Suffix::Ny, Suffix::A],
        VERB,
        PosSet::VERB_OR_MODIFIER,
    ),
    basic(
        "ñyo",
        &[Suffix::Ny, Suffix::O],
        VERB,
        PosSet::VERB_OR_MODIFIER,
    ),
    basic("ak", &[Suffix::Ak], PosSet::NOUN_OR_MODIFIER, PosSet::NOUN_OR_MODIFIER),
    basic(
        "akñy",
        &[Suffix::Ak, Suffix::Ny],
        PosSet::NOUN_OR_MODIFIER,
        PosSet::NOUN_OR_MODIFIER,
    ),
];

/// Suffixes tried after a numeral spanning a whole word or root.
pub(crate) const WHOLE_LATERAL_SUFFIXES: [LateralSuffix; 6] = [
    lateral("rea", &[Suffix::Rea], None),
    lateral("tfaa", &[Suffix::Tfaa], None),
    lateral("ejen", &[Suffix::Ejen], None),
    lateral("jeaj", &[Suffix::Jeaj], Some(8)),
    lateral("ñytuh", &[Suffix::Nytuh], Some(5)),
    lateral("ñytejen", &[Suffix::Nytejen], Some(12)),
];

/// Suffixes tried after a numeral attached to a root as a modifier.
pub(crate) const ATTACHED_LATERAL_SUFFIXES: [LateralSuffix; 3] = [
    lateral("yla", &[Suffix::Yla], None),
    lateral("ylarea", &[Suffix::Yla, Suffix::Rea], None),
    lateral("rea", &[Suffix::Rea], None),
];
