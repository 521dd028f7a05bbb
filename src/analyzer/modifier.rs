//! Trailing modifier analysis.

use crate::analysis::{Analysis, Morpheme};
use crate::analyzer::Analyzer;
use crate::grammar::{PartOfSpeech, PosSet};
use crate::numeral::NumeralPosition;
use crate::phonology::Phonology;

impl<P: Phonology> Analyzer<'_, P> {
    /// Returns the analyses of `span` as a modifier following a root.
    ///
    /// A modifier is a content root, the compound, or an attached numeral,
    /// optionally carrying a possessor suffix; a bare possessor suffix is a
    /// modifier too. Possessors never attach under a verb-only governing set.
    pub fn modifier_analyses(&self, span: &str, governing: PosSet) -> Vec<Analysis> {
        let mut analyses = self.modifier_stems(span);
        if governing.is_only(PartOfSpeech::Verb) {
            return analyses;
        }

        let possessive = self.grammar.possessive_constraint();
        if let Some(index) = self.lexicon.possessor_index(span) {
            analyses.push(Analysis::single(self.possessive_mark(index), possessive));
        }

        for (index, suffix) in self.lexicon.possessor_suffixes().iter().enumerate() {
            let Some(stem) = span.strip_suffix(suffix.as_str()) else {
                continue;
            };
            let mark = Analysis::single(self.possessive_mark(index), possessive);
            for stem in self.left_variants(stem, suffix) {
                for base in self.modifier_stems(stem) {
                    analyses.extend(self.merge(&base, &mark));
                }
            }
        }
        analyses
    }

    fn modifier_stems(&self, span: &str) -> Vec<Analysis> {
        let mut stems = Vec::new();
        if self.lexicon.is_content_root(span) {
            stems.push(Analysis::single(
                Morpheme::Root(span.to_string()),
                PosSet::ALL,
            ));
        }
        stems.extend(self.compound_analysis(span));
        stems.extend(self.numeral_analyses(span, NumeralPosition::Attached));
        stems
    }

    fn possessive_mark(&self, index: usize) -> Morpheme {
        Morpheme::PossessiveMark {
            pronoun_index: index,
            pronoun: self.lexicon.pronouns()[index].clone(),
        }
    }
}
