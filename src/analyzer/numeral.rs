//! Numeral decoding.

use tracing::trace;

use crate::analysis::{Analysis, Morpheme};
use crate::analyzer::Analyzer;
use crate::grammar::PosSet;
use crate::numeral::NumeralPosition;
use crate::phonology::Phonology;

impl<P: Phonology> Analyzer<'_, P> {
    /// Returns the numeral analyses of `span`, with or without one lateral
    /// suffix.
    ///
    /// Whole numerals may carry ablaut on their root; attached numerals may not.
    pub fn numeral_analyses(&self, span: &str, position: NumeralPosition) -> Vec<Analysis> {
        let allow_ablaut = position == NumeralPosition::Whole;
        let mut analyses = self.decode_numeral(span, allow_ablaut);
        let constraint = self.grammar.lateral_constraint(position);

        for lateral in self.grammar.lateral_suffixes(position) {
            let Some(stem) = span.strip_suffix(lateral.surface()) else {
                continue;
            };
            let marker = Analysis::new(
                lateral
                    .glosses()
                    .iter()
                    .copied()
                    .map(Morpheme::Suffix)
                    .collect(),
                constraint,
            );
            for stem in self.left_variants(stem, lateral.surface()) {
                for base in self.decode_numeral(stem, allow_ablaut) {
                    let out_of_range = lateral.bound().is_some_and(|bound| {
                        base.numeral_value()
                            .is_none_or(|value| value.exceeds(bound))
                    });
                    if out_of_range {
                        trace!(
                            numeral = %base,
                            suffix = lateral.surface(),
                            "numeral out of range for suffix"
                        );
                        continue;
                    }
                    analyses.extend(self.merge(&base, &marker));
                }
            }
        }
        analyses
    }

    fn decode_numeral(&self, span: &str, allow_ablaut: bool) -> Vec<Analysis> {
        if span.chars().count() < 2 {
            return Vec::new();
        }
        if let Some(index) = self.lexicon.numeral_root_index(span) {
            return vec![Analysis::single(self.numeral_morpheme(index), PosSet::ALL)];
        }

        if allow_ablaut {
            let surface = self.phonology.separate_vowels(span);
            let ablaut_forms: Vec<Analysis> = self
                .lexicon
                .numeral_roots()
                .iter()
                .enumerate()
                .flat_map(|(index, root)| {
                    self.ablaut_matches(root, &surface)
                        .into_iter()
                        .map(move |(category, pos)| (index, category, pos))
                })
                .map(|(index, category, pos)| {
                    Analysis::new(
                        vec![
                            self.numeral_morpheme(index),
                            Morpheme::AblautMark(category),
                        ],
                        pos,
                    )
                })
                .collect();
            if !ablaut_forms.is_empty() {
                return ablaut_forms;
            }
        }

        let Some((heads, consumed)) = self.numeral_head(span, allow_ablaut) else {
            return Vec::new();
        };
        let Some(places) = self.numeral_places(&span[consumed..]) else {
            return Vec::new();
        };
        heads
            .iter()
            .map(|head| head.extended(places.iter().cloned()))
            .collect()
    }

    /// Finds the non-zero root at the start of `span`, returning its analyses
    /// and the number of bytes it spans.
    fn numeral_head(&self, span: &str, allow_ablaut: bool) -> Option<(Vec<Analysis>, usize)> {
        for (index, root) in self.lexicon.numeral_roots().iter().enumerate().skip(1) {
            if span.starts_with(root.as_str()) {
                return Some((
                    vec![Analysis::single(self.numeral_morpheme(index), PosSet::ALL)],
                    root.len(),
                ));
            }
            if !allow_ablaut {
                continue;
            }

            // An ablaut form is as long as its root or one vowel longer.
            let root_length = root.chars().count();
            for (length, end) in char_ends(span) {
                if length < root_length || length > root_length + 1 {
                    continue;
                }
                let prefix = &span[..end];
                let surface = self.phonology.separate_vowels(prefix);
                let heads: Vec<Analysis> = self
                    .ablaut_matches(root, &surface)
                    .into_iter()
                    .map(|(category, pos)| {
                        Analysis::new(
                            vec![
                                self.numeral_morpheme(index),
                                Morpheme::AblautMark(category),
                            ],
                            pos,
                        )
                    })
                    .collect();
                if !heads.is_empty() {
                    return Some((heads, end));
                }
            }
        }
        None
    }

    /// Reads positional suffixes in slot order; leftover text rejects the numeral.
    fn numeral_places(&self, mut rest: &str) -> Option<Vec<Morpheme>> {
        let suffixes = self.lexicon.numeral_suffixes();
        let mut places = Vec::new();
        for (slot, suffix) in suffixes.iter().enumerate() {
            if !rest.starts_with(suffix.as_str()) {
                continue;
            }
            let shadowed = suffixes.iter().any(|longer| {
                longer.len() > suffix.len()
                    && longer.starts_with(suffix.as_str())
                    && rest.starts_with(longer.as_str())
            });
            if shadowed {
                continue;
            }
            rest = &rest[suffix.len()..];
            places.push(Morpheme::NumeralPlace {
                slot,
                form: suffix.clone(),
            });
        }
        rest.is_empty().then_some(places)
    }

    fn numeral_morpheme(&self, index: usize) -> Morpheme {
        Morpheme::Numeral {
            index,
            form: self.lexicon.numeral_roots()[index].clone(),
        }
    }
}

/// Yields `(character count, byte offset)` for every non-empty prefix of `span`.
fn char_ends(span: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    span.char_indices()
        .map(|(offset, letter)| offset + letter.len_utf8())
        .enumerate()
        .map(|(position, end)| (position + 1, end))
}
