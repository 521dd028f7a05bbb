//! Root and modifier segmentation.

use tracing::trace;

use crate::analysis::{Analysis, Morpheme};
use crate::analyzer::Analyzer;
use crate::grammar::{PosSet, Suffix};
use crate::phonology::Phonology;

impl<P: Phonology> Analyzer<'_, P> {
    /// Returns every analysis of `span` without a prefix, under the governing
    /// set `allowed`.
    ///
    /// The span is analyzed whole, then split at every character boundary
    /// into a suffixed root and a trailing modifier.
    pub fn segment(&self, span: &str, allowed: PosSet) -> Vec<Analysis> {
        let mut analyses = self.suffixed_root_analyses(span, allowed);

        for (split, _) in span.char_indices().skip(1) {
            let (left, right) = span.split_at(split);
            let modifiers = self.modifier_analyses(right, allowed);
            if modifiers.is_empty() {
                continue;
            }
            for left in self.left_variants(left, right) {
                for root in self.suffixed_root_analyses(left, allowed) {
                    for modifier in &modifiers {
                        if !self.numerals_agree(&root, modifier) {
                            trace!(
                                root = %root,
                                modifier = %modifier,
                                "plurality disagrees with numeral"
                            );
                            continue;
                        }
                        analyses.extend(self.merge(&root, modifier));
                    }
                }
            }
        }
        analyses
    }

    /// Checks that a root is marked plural exactly when a following numeral
    /// counts more than one.
    fn numerals_agree(&self, root: &Analysis, modifier: &Analysis) -> bool {
        if !matches!(modifier.leading(), Some(Morpheme::Numeral { .. }))
            || self.leads_with_pronoun(root)
            || modifier.has_suffix(Suffix::ORDINAL)
        {
            return true;
        }
        let Some(value) = modifier.numeral_value() else {
            return true;
        };
        let plural = !modifier.has_suffix(Suffix::DISTRIBUTIVE) && value.exceeds(1);
        plural == root.has_suffix(Suffix::PLURAL)
    }

    /// Combines two analyses, logging when their constraints are disjoint.
    pub(crate) fn merge(&self, left: &Analysis, right: &Analysis) -> Option<Analysis> {
        let merged = left.combine(right);
        if merged.is_none() {
            trace!(left = %left, right = %right, "parts of speech do not intersect");
        }
        merged
    }
}
