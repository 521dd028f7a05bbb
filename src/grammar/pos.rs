//! Parts of speech and the constraint sets built from them.

use std::fmt;

/// A Fynotek part of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartOfSpeech {
    /// Nouns and pronouns.
    Noun,
    /// Verbs.
    Verb,
    /// Modifiers of either.
    Modifier,
}

impl PartOfSpeech {
    /// All parts of speech in rendering order.
    pub const ALL: [Self; 3] = [Self::Noun, Self::Verb, Self::Modifier];

    /// Returns the lowercase name used in rendered constraint sets.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Modifier => "modifier",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Noun => 0b001,
            Self::Verb => 0b010,
            Self::Modifier => 0b100,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A non-empty set of permitted parts of speech.
///
/// Every constructor yields at least one member, and [`PosSet::intersect`]
/// returns `None` rather than an empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PosSet(u8);

impl PosSet {
    /// Any part of speech.
    pub const ALL: Self = Self(0b111);
    /// Nouns and modifiers.
    pub const NOUN_OR_MODIFIER: Self = Self(0b101);
    /// Verbs and modifiers.
    pub const VERB_OR_MODIFIER: Self = Self(0b110);

    /// Creates a set containing exactly `tag`.
    pub const fn single(tag: PartOfSpeech) -> Self {
        Self(tag.bit())
    }

    /// Returns `true` when `tag` is permitted.
    pub const fn contains(self, tag: PartOfSpeech) -> bool {
        self.0 & tag.bit() != 0
    }

    /// Returns `true` when `tag` is the only permitted part of speech.
    pub const fn is_only(self, tag: PartOfSpeech) -> bool {
        self.0 == tag.bit()
    }

    /// Returns `true` when the two sets share at least one member.
    pub const fn overlaps(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Intersects two sets, or returns `None` when they are disjoint.
    pub const fn intersect(self, other: Self) -> Option<Self> {
        match self.0 & other.0 {
            0 => None,
            bits => Some(Self(bits)),
        }
    }

    /// Iterates over the members in rendering order.
    pub fn iter(self) -> impl Iterator<Item = PartOfSpeech> {
        PartOfSpeech::ALL
            .into_iter()
            .filter(move |&tag| self.contains(tag))
    }
}

impl fmt::Display for PosSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (position, tag) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            f.write_str(tag.name())?;
        }
        f.write_str("}")
    }
}
