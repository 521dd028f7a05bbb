//! Phonology contracts consumed by the analyzer.
//!
//! The analyzer never inflects words on its own. It asks a
//! [`SequenceValidator`] whether a candidate spelling is legal and how it
//! splits around its final vowel group, and an [`AblautOracle`] what a root
//! looks like under a given ablaut. [`FynotekPhonology`] implements both for
//! modern Fynotek.

mod ablaut;
mod sequence;

pub use ablaut::AblautCategory;
pub use sequence::FynotekPhonology;

/// Letters treated as vowels by Fynotek orthography.
pub const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Returns `true` when `letter` is a Fynotek vowel.
pub fn is_vowel(letter: char) -> bool {
    VOWELS.contains(&letter)
}

/// A word split around its final vowel or diphthong.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct VowelSplit {
    /// Everything before the final vowel group.
    pub onset: String,
    /// The final vowel group: one or two vowels, or empty when the word has none.
    pub nucleus: String,
    /// Everything after the final vowel group.
    pub coda: String,
}

impl VowelSplit {
    /// Creates a split from its three parts.
    pub fn new(
        onset: impl Into<String>,
        nucleus: impl Into<String>,
        coda: impl Into<String>,
    ) -> Self {
        Self {
            onset: onset.into(),
            nucleus: nucleus.into(),
            coda: coda.into(),
        }
    }

    /// Reassembles the split into the original spelling.
    pub fn joined(&self) -> String {
        let mut word =
            String::with_capacity(self.onset.len() + self.nucleus.len() + self.coda.len());
        word.push_str(&self.onset);
        word.push_str(&self.nucleus);
        word.push_str(&self.coda);
        word
    }

    /// Returns `true` when the nucleus is one vowel written twice (`aa`, `ee`, ...).
    pub fn nucleus_is_doubled(&self) -> bool {
        let mut vowels = self.nucleus.chars();
        match (vowels.next(), vowels.next(), vowels.next()) {
            (Some(first), Some(second), None) => first == second,
            _ => false,
        }
    }

    /// Returns `true` when `word` has this split's onset and coda around a
    /// nucleus of one or two vowels.
    pub fn shares_skeleton_with(&self, word: &str) -> bool {
        word.strip_prefix(self.onset.as_str())
            .and_then(|rest| rest.strip_suffix(self.coda.as_str()))
            .is_some_and(|nucleus| {
                let length = nucleus.chars().count();
                (1..=2).contains(&length) && nucleus.chars().all(is_vowel)
            })
    }
}

/// Phonotactic legality checks and syllable splitting.
pub trait SequenceValidator {
    /// Returns `true` if `candidate` is phonotactically and orthographically legal.
    fn is_valid_sequence(&self, candidate: &str) -> bool;

    /// Splits `word` around its final vowel or diphthong.
    fn separate_vowels(&self, word: &str) -> VowelSplit;
}

/// Applies ablaut to dictionary roots.
pub trait AblautOracle {
    /// Returns the surface form of `root` marked with `category`.
    fn ablaut(&self, root: &str, category: AblautCategory) -> String;
}

/// Everything the analyzer needs from a phonology implementation.
pub trait Phonology: SequenceValidator + AblautOracle {}

impl<T: SequenceValidator + AblautOracle + ?Sized> Phonology for T {}

impl<T: SequenceValidator + ?Sized> SequenceValidator for &T {
    fn is_valid_sequence(&self, candidate: &str) -> bool {
        (**self).is_valid_sequence(candidate)
    }

    fn separate_vowels(&self, word: &str) -> VowelSplit {
        (**self).separate_vowels(word)
    }
}

impl<T: AblautOracle + ?Sized> AblautOracle for &T {
    fn ablaut(&self, root: &str, category: AblautCategory) -> String {
        (**self).ablaut(root, category)
    }
}
