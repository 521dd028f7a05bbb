//! Root analysis: dictionary roots, ablaut forms, compounds, and basic suffixes.

use crate::analysis::{Analysis, Morpheme};
use crate::analyzer::Analyzer;
use crate::grammar::{PosSet, Suffix};
use crate::lexicon::CompoundPattern;
use crate::numeral::NumeralPosition;
use crate::phonology::{AblautCategory, Phonology, VowelSplit};

impl<P: Phonology> Analyzer<'_, P> {
    /// Returns the single-root analyses of `span`, without suffixes.
    ///
    /// An exact dictionary root or an unmutated compound is the only
    /// analysis. Otherwise every root and compound whose ablaut form spells
    /// `span` is returned with its ablaut mark.
    pub fn root_analyses(&self, span: &str) -> Vec<Analysis> {
        if span.is_empty() {
            return Vec::new();
        }
        if self.lexicon.is_content_root(span) {
            return vec![Analysis::single(
                Morpheme::Root(span.to_string()),
                PosSet::ALL,
            )];
        }
        if let Some(compound) = self.compound_analysis(span) {
            return vec![compound];
        }

        let surface = self.phonology.separate_vowels(span);
        let mut analyses = Vec::new();
        for root in self.lexicon.content_roots() {
            if !surface.shares_skeleton_with(root) {
                continue;
            }
            for (category, pos) in self.ablaut_matches(root, &surface) {
                analyses.push(Analysis::new(
                    vec![Morpheme::Root(root.clone()), Morpheme::AblautMark(category)],
                    pos,
                ));
            }
        }

        analyses.extend(self.mutated_compound_analyses(span, &surface));
        analyses
    }

    /// Returns the analyses of `span` as a root or whole numeral, optionally
    /// followed by one basic suffix tried under the governing set `allowed`.
    ///
    /// Analyses marking a pronoun as plural are dropped.
    pub fn suffixed_root_analyses(&self, span: &str, allowed: PosSet) -> Vec<Analysis> {
        let mut analyses = self.root_analyses(span);
        analyses.extend(self.numeral_analyses(span, NumeralPosition::Whole));

        for suffix in self.grammar.basic_suffixes_for(allowed) {
            let Some(stem) = span.strip_suffix(suffix.surface()) else {
                continue;
            };
            let marker = Analysis::new(
                suffix
                    .glosses()
                    .iter()
                    .copied()
                    .map(Morpheme::Suffix)
                    .collect(),
                suffix.constraint(),
            );
            for stem in self.left_variants(stem, suffix.surface()) {
                let bases = self
                    .root_analyses(stem)
                    .into_iter()
                    .chain(self.numeral_analyses(stem, NumeralPosition::Whole));
                for base in bases {
                    analyses.extend(self.merge(&base, &marker));
                }
            }
        }

        analyses.retain(|analysis| {
            !(analysis.has_suffix(Suffix::PLURAL) && self.leads_with_pronoun(analysis))
        });
        analyses
    }

    /// Returns the ablaut categories under which `root` spells `surface`,
    /// with the constraint each one places on the word.
    pub(crate) fn ablaut_matches(
        &self,
        root: &str,
        surface: &VowelSplit,
    ) -> Vec<(AblautCategory, PosSet)> {
        let spelled = surface.joined();
        let mut matches = Vec::new();
        for category in AblautCategory::LETTERS {
            if self.phonology.ablaut(root, category) == spelled {
                matches.push((category, self.ablaut_constraint(root, category)));
            }
        }
        if surface.nucleus_is_doubled()
            && self.phonology.ablaut(root, AblautCategory::Reduplication) == spelled
        {
            matches.push((
                AblautCategory::Reduplication,
                self.ablaut_constraint(root, AblautCategory::Reduplication),
            ));
        }
        matches
    }

    fn ablaut_constraint(&self, root: &str, category: AblautCategory) -> PosSet {
        match category {
            AblautCategory::A => PosSet::ALL,
            AblautCategory::I if self.lexicon.is_pronoun(root) => PosSet::VERB_OR_MODIFIER,
            AblautCategory::O if self.lexicon.has_verbal_o_ablaut(root) => {
                PosSet::VERB_OR_MODIFIER
            }
            AblautCategory::I | AblautCategory::O => PosSet::ALL,
            AblautCategory::E
            | AblautCategory::U
            | AblautCategory::Y
            | AblautCategory::Reduplication => PosSet::VERB_OR_MODIFIER,
            AblautCategory::Default => {
                unreachable!("default ablaut never differs from the root")
            }
        }
    }

    /// Returns the compound analysis of `span` when it is the head followed
    /// by unmutated links.
    pub(crate) fn compound_analysis(&self, span: &str) -> Option<Analysis> {
        let compound = self.lexicon.compound()?;
        let count = compound.repeat_count(span)?;
        Some(Analysis::single(repeat_morpheme(compound, count), PosSet::ALL))
    }

    fn mutated_compound_analyses(&self, span: &str, surface: &VowelSplit) -> Vec<Analysis> {
        let (Some(compound), Some(link)) = (self.lexicon.compound(), &self.compound_link) else {
            return Vec::new();
        };
        let Some(count) = compound.mutated_repeat_count(span, link) else {
            return Vec::new();
        };
        self.ablaut_matches(&compound.spell(count), surface)
            .into_iter()
            .map(|(category, pos)| {
                Analysis::new(
                    vec![
                        repeat_morpheme(compound, count),
                        Morpheme::AblautMark(category),
                    ],
                    pos,
                )
            })
            .collect()
    }

    pub(crate) fn leads_with_pronoun(&self, analysis: &Analysis) -> bool {
        matches!(
            analysis.leading(),
            Some(Morpheme::Root(root)) if self.lexicon.is_pronoun(root)
        )
    }
}

fn repeat_morpheme(compound: &CompoundPattern, count: usize) -> Morpheme {
    Morpheme::CompoundRepeat {
        base: compound.head().to_string(),
        link: compound.link().to_string(),
        count,
    }
}
