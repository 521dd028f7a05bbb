//! Modern Fynotek phonotactics and ablaut.

use regex::Regex;

use crate::phonology::ablaut::mutate_nucleus;
use crate::phonology::{AblautCategory, AblautOracle, SequenceValidator, VowelSplit, is_vowel};

/// Consonant clusters of up to two letters at word edges and up to three
/// between vowel groups, vowel groups of one or two letters.
const WORD_SKELETON: &str =
    r"^[ptkmnñrfshjwl]{0,2}[aeiouy]{1,2}(?:[ptkmnñrfshjwl]{1,3}[aeiouy]{1,2})*[ptkmnñrfshjwl]{0,2}$";

/// Two adjacent stops.
const STOP_CLUSTER: &str = r"[ptk]{2}";

/// Default phonology for modern Fynotek common words.
#[derive(Debug, Clone)]
pub struct FynotekPhonology {
    skeleton: Regex,
    stop_cluster: Regex,
}

impl FynotekPhonology {
    /// Creates the phonology with its compiled spelling rules.
    pub fn new() -> Self {
        Self {
            skeleton: Regex::new(WORD_SKELETON).expect("word skeleton pattern is valid"),
            stop_cluster: Regex::new(STOP_CLUSTER).expect("stop cluster pattern is valid"),
        }
    }

    fn is_valid_word(&self, word: &str) -> bool {
        self.skeleton.is_match(word) && !self.stop_cluster.is_match(word)
    }
}

impl Default for FynotekPhonology {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceValidator for FynotekPhonology {
    /// Leading and trailing whitespace is ignored and case is folded. Several
    /// whitespace-separated words are valid only if each one is.
    fn is_valid_sequence(&self, candidate: &str) -> bool {
        let normalized = candidate.trim().to_lowercase();
        if normalized.is_empty() {
            return false;
        }
        normalized
            .split_whitespace()
            .all(|word| self.is_valid_word(word))
    }

    fn separate_vowels(&self, word: &str) -> VowelSplit {
        let letters: Vec<char> = word.chars().collect();
        let last_vowel = letters.iter().rposition(|&letter| is_vowel(letter));

        let (start, length) = match last_vowel {
            Some(index) if index > 0 && is_vowel(letters[index - 1]) => (index - 1, 2),
            Some(index) => (index, 1),
            None => (0, 0),
        };

        VowelSplit::new(
            letters[..start].iter().collect::<String>(),
            letters[start..start + length].iter().collect::<String>(),
            letters[start + length..].iter().collect::<String>(),
        )
    }
}

impl AblautOracle for FynotekPhonology {
    fn ablaut(&self, root: &str, category: AblautCategory) -> String {
        let split = self.separate_vowels(root);
        if category == AblautCategory::Default || split.nucleus.is_empty() {
            return split.joined();
        }
        VowelSplit {
            nucleus: mutate_nucleus(&split.nucleus, category),
            ..split
        }
        .joined()
    }
}
