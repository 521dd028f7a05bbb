//! Dictionary tables consumed by the analyzer.
//!
//! A [`Lexicon`] is immutable once built. [`Lexicon::fynotek`] returns the
//! built-in dictionary; [`Lexicon::from_json_file`] loads a substitute one.

mod compound;
mod error;
mod tables;

pub use compound::CompoundPattern;
pub use error::LexiconError;

use std::fs;
use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use tracing::debug;

use crate::numeral::{NUMERAL_BASE, NUMERAL_SLOTS};
use crate::phonology::is_vowel;

/// Raw lexicon tables, as read from a lexicon document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconData {
    /// Content roots, excluding pronouns.
    pub content_words: Vec<String>,
    /// Uninflectable words.
    #[serde(default)]
    pub standalone_words: Vec<StandaloneEntry>,
    /// Pronouns, index-aligned with `possessor_suffixes`.
    pub pronouns: Vec<String>,
    /// Possessor suffixes, index-aligned with `pronouns`.
    pub possessor_suffixes: Vec<String>,
    /// Numeral roots; the index is the digit value.
    pub numeral_roots: Vec<String>,
    /// Positional numeral suffixes in slot order.
    pub numeral_suffixes: Vec<String>,
    /// The repeatable compound, if the language has one.
    #[serde(default)]
    pub compound: Option<CompoundPattern>,
    /// Roots whose O ablaut is verbal.
    #[serde(default)]
    pub verbal_o_ablaut_roots: Vec<String>,
}

/// An uninflectable word and how it is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StandaloneEntry {
    /// Surface spelling.
    pub form: String,
    /// Canonical rendering; defaults to the form itself.
    #[serde(default)]
    pub rendering: Option<String>,
}

impl LexiconData {
    /// Returns the tables of the built-in Fynotek dictionary.
    pub fn fynotek() -> Self {
        let owned =
            |words: &[&str]| -> Vec<String> { words.iter().map(|word| word.to_string()).collect() };
        Self {
            content_words: owned(&tables::CONTENT_WORDS),
            standalone_words: tables::STANDALONE_WORDS
                .iter()
                .map(|&(form, rendering)| StandaloneEntry {
                    form: form.to_string(),
                    rendering: Some(rendering.to_string()),
                })
                .collect(),
            pronouns: owned(&tables::PRONOUNS),
            possessor_suffixes: owned(&tables::POSSESSOR_SUFFIXES),
            numeral_roots: owned(&tables::NUMERAL_ROOTS),
            numeral_suffixes: owned(&tables::NUMERAL_SUFFIXES),
            compound: Some(CompoundPattern::new(
                tables::COMPOUND_HEAD,
                tables::COMPOUND_LINK,
            )),
            verbal_o_ablaut_roots: owned(&tables::VERBAL_O_ABLAUT_ROOTS),
        }
    }

    fn validate(&self) -> Result<(), LexiconError> {
        let tables: [(&'static str, &[String]); 6] = [
            ("content word", &self.content_words),
            ("pronoun", &self.pronouns),
            ("possessor suffix", &self.possessor_suffixes),
            ("numeral root", &self.numeral_roots),
            ("numeral suffix", &self.numeral_suffixes),
            ("verbal O ablaut", &self.verbal_o_ablaut_roots),
        ];
        for (table, entries) in tables {
            if entries.iter().any(String::is_empty) {
                return Err(LexiconError::EmptyEntry { table });
            }
        }
        if self
            .standalone_words
            .iter()
            .any(|entry| entry.form.is_empty())
        {
            return Err(LexiconError::EmptyEntry { table: "standalone" });
        }

        if self.pronouns.len() != self.possessor_suffixes.len() {
            return Err(LexiconError::MisalignedPossessors {
                pronouns: self.pronouns.len(),
                possessors: self.possessor_suffixes.len(),
            });
        }
        if self.numeral_roots.len() != NUMERAL_BASE {
            return Err(LexiconError::NumeralRootCount {
                expected: NUMERAL_BASE,
                found: self.numeral_roots.len(),
            });
        }
        if self.numeral_suffixes.len() != NUMERAL_SLOTS {
            return Err(LexiconError::NumeralSuffixCount {
                expected: NUMERAL_SLOTS,
                found: self.numeral_suffixes.len(),
            });
        }

        if let Some(compound) = &self.compound {
            if compound.head().is_empty() {
                return Err(LexiconError::EmptyEntry {
                    table: "compound head",
                });
            }
            if !compound.link().chars().any(is_vowel) {
                return Err(LexiconError::CompoundLinkWithoutVowel {
                    link: compound.link().to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Immutable dictionary used by the analyzer.
#[derive(Debug, Clone)]
pub struct Lexicon {
    content_roots: Vec<String>,
    content_index: FxHashSet<String>,
    standalone: FxHashMap<String, String>,
    pronouns: Vec<String>,
    possessor_suffixes: Vec<String>,
    numeral_roots: Vec<String>,
    numeral_suffixes: Vec<String>,
    compound: Option<CompoundPattern>,
    verbal_o_ablaut_roots: FxHashSet<String>,
}

impl Lexicon {
    /// Returns the built-in Fynotek dictionary.
    pub fn fynotek() -> Self {
        Self::build(LexiconData::fynotek())
    }

    /// Builds a lexicon from raw tables after validating them.
    pub fn from_parts(data: LexiconData) -> Result<Self, LexiconError> {
        data.validate()?;
        Ok(Self::build(data))
    }

    /// Parses and validates a JSON lexicon document.
    pub fn from_json_str(document: &str) -> Result<Self, LexiconError> {
        let data: LexiconData = serde_json::from_str(document)?;
        Self::from_parts(data)
    }

    /// Reads, parses, and validates a JSON lexicon file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let document = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_json_str(&document)?;
        debug!(
            path = %path.display(),
            roots = lexicon.content_roots.len(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    fn build(data: LexiconData) -> Self {
        let mut content_index = FxHashSet::default();
        let mut content_roots = Vec::with_capacity(data.content_words.len() + data.pronouns.len());
        for root in data.content_words.iter().chain(&data.pronouns) {
            if content_index.insert(root.clone()) {
                content_roots.push(root.clone());
            }
        }

        let standalone = data
            .standalone_words
            .into_iter()
            .map(|entry| {
                let rendering = entry.rendering.unwrap_or_else(|| entry.form.clone());
                (entry.form, rendering)
            })
            .collect();

        Self {
            content_roots,
            content_index,
            standalone,
            pronouns: data.pronouns,
            possessor_suffixes: data.possessor_suffixes,
            numeral_roots: data.numeral_roots,
            numeral_suffixes: data.numeral_suffixes,
            compound: data.compound,
            verbal_o_ablaut_roots: data.verbal_o_ablaut_roots.into_iter().collect(),
        }
    }

    /// Returns content roots and pronouns in dictionary order, without duplicates.
    pub fn content_roots(&self) -> &[String] {
        &self.content_roots
    }

    /// Returns `true` when `word` is a content root or pronoun.
    pub fn is_content_root(&self, word: &str) -> bool {
        self.content_index.contains(word)
    }

    /// Returns the rendering of an uninflectable word.
    pub fn standalone_rendering(&self, word: &str) -> Option<&str> {
        self.standalone.get(word).map(String::as_str)
    }

    /// Returns the pronouns in table order.
    pub fn pronouns(&self) -> &[String] {
        &self.pronouns
    }

    /// Returns `true` when `word` is a pronoun.
    pub fn is_pronoun(&self, word: &str) -> bool {
        self.pronouns.iter().any(|pronoun| pronoun == word)
    }

    /// Returns the possessor suffixes in table order.
    pub fn possessor_suffixes(&self) -> &[String] {
        &self.possessor_suffixes
    }

    /// Returns the pronoun index of a possessor suffix.
    pub fn possessor_index(&self, suffix: &str) -> Option<usize> {
        self.possessor_suffixes
            .iter()
            .position(|candidate| candidate == suffix)
    }

    /// Returns the numeral roots in digit order.
    pub fn numeral_roots(&self) -> &[String] {
        &self.numeral_roots
    }

    /// Returns the digit value of a numeral root.
    pub fn numeral_root_index(&self, word: &str) -> Option<usize> {
        self.numeral_roots.iter().position(|root| root == word)
    }

    /// Returns the positional numeral suffixes in slot order.
    pub fn numeral_suffixes(&self) -> &[String] {
        &self.numeral_suffixes
    }

    /// Returns the repeatable compound, if any.
    pub fn compound(&self) -> Option<&CompoundPattern> {
        self.compound.as_ref()
    }

    /// Returns `true` when O ablaut on `root` is verbal.
    pub fn has_verbal_o_ablaut(&self, root: &str) -> bool {
        self.verbal_o_ablaut_roots.contains(root)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::fynotek()
    }
}
