//! The repeatable compound (`ñojera`, `ñojerajera`, ...).

use serde::Deserialize;

use crate::phonology::{VowelSplit, is_vowel};

/// A head word followed by one or more repetitions of a link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompoundPattern {
    head: String,
    link: String,
}

impl CompoundPattern {
    /// Creates a compound pattern.
    pub fn new(head: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            head: head.into(),
            link: link.into(),
        }
    }

    /// Returns the head word.
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Returns the repeated link.
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Spells the compound with `count` links.
    pub fn spell(&self, count: usize) -> String {
        let mut word = String::with_capacity(self.head.len() + self.link.len() * count);
        word.push_str(&self.head);
        for _ in 0..count {
            word.push_str(&self.link);
        }
        word
    }

    /// Returns the number of links when `span` is the head followed by at
    /// least one link.
    pub fn repeat_count(&self, span: &str) -> Option<usize> {
        let mut rest = span.strip_prefix(self.head.as_str())?;
        let mut count = 0;
        while let Some(next) = rest.strip_prefix(self.link.as_str()) {
            rest = next;
            count += 1;
        }
        (count > 0 && rest.is_empty()).then_some(count)
    }

    /// Returns the number of links when `span` is the head, zero or more
    /// links, and a final link whose vowel group may have changed.
    ///
    /// `link_split` is the link separated around its final vowel group.
    pub fn mutated_repeat_count(&self, span: &str, link_split: &VowelSplit) -> Option<usize> {
        let mut rest = span.strip_prefix(self.head.as_str())?;
        let mut full_links = 0;
        loop {
            if matches_mutated_link(rest, link_split) {
                return Some(full_links + 1);
            }
            rest = rest.strip_prefix(self.link.as_str())?;
            full_links += 1;
        }
    }
}

fn matches_mutated_link(rest: &str, link_split: &VowelSplit) -> bool {
    rest.strip_prefix(link_split.onset.as_str())
        .and_then(|tail| tail.strip_suffix(link_split.coda.as_str()))
        .is_some_and(|nucleus| {
            let length = nucleus.chars().count();
            (1..=2).contains(&length) && nucleus.chars().all(is_vowel)
        })
}
