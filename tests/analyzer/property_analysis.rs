//! Dictionary-wide and property-based checks for the analyzer.

use fynotek_morph::analysis::{Analysis, Morpheme};
use fynotek_morph::grammar::{PartOfSpeech, PosSet};
use fynotek_morph::lexicon::Lexicon;
use fynotek_morph::numeral::{self, NumeralPosition};
use fynotek_morph::phonology::{AblautCategory, AblautOracle, SequenceValidator};
use proptest::prelude::*;

use crate::support::with_analyzer;

// ---------------------------------------------------------------------------
// Dictionary sweeps
// ---------------------------------------------------------------------------

#[test]
fn every_root_analyzes_to_itself() {
    with_analyzer(|analyzer| {
        for root in analyzer.lexicon().content_roots() {
            let expected = Analysis::single(Morpheme::Root(root.clone()), PosSet::ALL);
            assert!(
                analyzer.analyze(root).contains(&expected),
                "{root} does not analyze to itself"
            );
        }
    });
}

#[test]
fn every_letter_ablaut_is_recognized() {
    with_analyzer(|analyzer| {
        let lexicon = analyzer.lexicon();
        for root in lexicon.content_roots() {
            for category in AblautCategory::LETTERS {
                let mutated = analyzer.phonology().ablaut(root, category);
                if lexicon.is_content_root(&mutated) {
                    continue;
                }
                let expected = format!("{root} + {category} ablaut");
                let rendered: Vec<String> = analyzer
                    .analyze(&mutated)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                assert!(
                    rendered.contains(&expected),
                    "{mutated} is missing {expected}: {rendered:?}"
                );
            }
        }
    });
}

#[test]
fn doubled_reduplication_is_recognized() {
    with_analyzer(|analyzer| {
        let lexicon = analyzer.lexicon();
        let phonology = analyzer.phonology();
        for root in lexicon.content_roots() {
            let mutated = phonology.ablaut(root, AblautCategory::Reduplication);
            if lexicon.is_content_root(&mutated)
                || !phonology.separate_vowels(&mutated).nucleus_is_doubled()
            {
                continue;
            }
            let expected = format!("{root} + reduplication ablaut");
            let found = analyzer
                .analyze(&mutated)
                .iter()
                .any(|analysis| analysis.to_string() == expected);
            assert!(found, "{mutated} is missing {expected}");
        }
    });
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_pos_set() -> impl Strategy<Value = PosSet> {
    prop_oneof![
        Just(PosSet::ALL),
        Just(PosSet::NOUN_OR_MODIFIER),
        Just(PosSet::VERB_OR_MODIFIER),
        Just(PosSet::single(PartOfSpeech::Noun)),
        Just(PosSet::single(PartOfSpeech::Verb)),
        Just(PosSet::single(PartOfSpeech::Modifier)),
    ]
}

fn numeral_word(lexicon: &Lexicon, root: usize, mask: u32) -> String {
    let mut word = lexicon.numeral_roots()[root].clone();
    for (slot, suffix) in lexicon.numeral_suffixes().iter().enumerate() {
        if mask & (1 << slot) != 0 {
            word.push_str(suffix);
        }
    }
    word
}

proptest! {
    #[test]
    fn numeral_words_decode_to_their_digit_and_places(root in 1usize..=5, mask in 0u32..64) {
        with_analyzer(|analyzer| {
            let word = numeral_word(analyzer.lexicon(), root, mask);
            let values: Vec<_> = analyzer
                .numeral_analyses(&word, NumeralPosition::Attached)
                .iter()
                .filter_map(Analysis::numeral_value)
                .collect();
            prop_assert!(
                values.iter().any(|value| value.root_index() == root && value.exponent() == mask),
                "{word} decoded to {values:?}"
            );
            Ok(())
        })?;
    }

    #[test]
    fn encoded_integers_decode_to_the_same_sum(value in 0i128..1_000_000_000) {
        with_analyzer(|analyzer| {
            let spelled = numeral::encode(analyzer.lexicon(), value);
            let mut total = 0u128;
            for word in spelled.split_whitespace() {
                let analyses = analyzer.numeral_analyses(word, NumeralPosition::Attached);
                let decoded = analyses.first().and_then(Analysis::numeral_value);
                prop_assert!(decoded.is_some(), "{word} from {spelled} did not decode");
                let decoded = decoded.and_then(|value| value.to_u128());
                prop_assert!(decoded.is_some(), "{word} does not fit");
                total += decoded.unwrap_or_default();
            }
            prop_assert_eq!(total, value.unsigned_abs());
            Ok(())
        })?;
    }

    #[test]
    fn disjoint_sets_never_combine(left in arb_pos_set(), right in arb_pos_set()) {
        let root = Analysis::single(Morpheme::Root("hyr".to_string()), left);
        let marker = Analysis::single(Morpheme::Root("pynsi".to_string()), right);
        match root.combine(&marker) {
            Some(combined) => {
                prop_assert!(left.overlaps(right));
                prop_assert_eq!(Some(combined.pos()), left.intersect(right));
                prop_assert_eq!(combined.morphemes().len(), 2);
            }
            None => prop_assert!(!left.overlaps(right)),
        }
    }

    #[test]
    fn validator_and_analyzer_accept_arbitrary_text(
        bytes in proptest::collection::vec(any::<u8>(), 0..=24)
    ) {
        let input = String::from_utf8_lossy(&bytes).into_owned();
        with_analyzer(|analyzer| {
            let valid = analyzer.phonology().is_valid_sequence(&input);
            let analyses = analyzer.analyze(&input);
            prop_assert!(valid || analyses.is_empty());
            Ok(())
        })?;
    }

    #[test]
    fn fynotek_letter_strings_never_panic(word in "[aeiouyptkmnñrfshjwl]{0,10}") {
        with_analyzer(|analyzer| {
            for analysis in analyzer.analyze(&word) {
                prop_assert!(!analysis.morphemes().is_empty());
            }
            Ok(())
        })?;
    }
}

#[test]
fn zero_root_has_value_zero() {
    with_analyzer(|analyzer| {
        let analyses = analyzer.numeral_analyses("fui", NumeralPosition::Attached);
        let value = analyses.first().and_then(Analysis::numeral_value);
        assert_eq!(value.and_then(|value| value.to_u128()), Some(0));
    });
}

#[test]
fn negative_numbers_are_marked() {
    let lexicon = Lexicon::fynotek();
    assert_eq!(numeral::encode(&lexicon, -1), "ñy ay");
    assert_eq!(numeral::encode(&lexicon, -13), "ñy fopo ay");
}
