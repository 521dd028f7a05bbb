//! Filler letters at morpheme boundaries.
//!
//! A filler letter may be inserted between two morphemes only when joining
//! them directly would be illegal. Each boundary is tried as written and,
//! when that condition holds, with the filler removed.

use tracing::trace;

use crate::analyzer::Analyzer;
use crate::phonology::Phonology;

impl<P: Phonology> Analyzer<'_, P> {
    /// Returns `left` as written, then `left` without a trailing filler letter
    /// when `left + right` would be illegal without it.
    pub(crate) fn left_variants<'s>(
        &self,
        left: &'s str,
        right: &str,
    ) -> impl Iterator<Item = &'s str> + use<'s, P> {
        std::iter::once(left).chain(self.trailing_filler_repair(left, right))
    }

    fn trailing_filler_repair<'s>(&self, left: &'s str, right: &str) -> Option<&'s str> {
        let filler = left.chars().next_back()?;
        if !self.grammar.is_filler(filler) {
            return None;
        }
        let stripped = &left[..left.len() - filler.len_utf8()];
        self.filler_required(stripped, right).then_some(stripped)
    }

    /// Returns `rest` without its leading filler letter when `prefix + rest`
    /// would be illegal without it.
    pub(crate) fn leading_filler_repair<'s>(&self, prefix: char, rest: &'s str) -> Option<&'s str> {
        let filler = rest.chars().next()?;
        if !self.grammar.is_filler(filler) {
            return None;
        }
        let stripped = &rest[filler.len_utf8()..];
        self.filler_required(prefix.encode_utf8(&mut [0; 4]), stripped)
            .then_some(stripped)
    }

    fn filler_required(&self, left: &str, right: &str) -> bool {
        let joined = format!("{left}{right}");
        let required = !self.phonology.is_valid_sequence(&joined);
        if !required {
            trace!(left, right, "filler letter not required");
        }
        required
    }
}
