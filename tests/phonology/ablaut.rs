use fynotek_morph::analyzer::Analyzer;
use fynotek_morph::grammar::AffixGrammar;
use fynotek_morph::lexicon::Lexicon;
use fynotek_morph::phonology::{
    AblautCategory, AblautOracle, FynotekPhonology, SequenceValidator, VowelSplit,
};

#[test]
fn letter_ablaut_on_single_vowels() {
    let phonology = FynotekPhonology::new();
    assert_eq!(phonology.ablaut("pynsi", AblautCategory::I), "pynsiy");
    assert_eq!(phonology.ablaut("pynsi", AblautCategory::Y), "pynsy");
    assert_eq!(phonology.ablaut("aakem", AblautCategory::A), "aakam");
    assert_eq!(phonology.ablaut("aakem", AblautCategory::E), "aakea");
}

#[test]
fn letter_ablaut_on_diphthongs_keeps_the_first_vowel() {
    let phonology = FynotekPhonology::new();
    assert_eq!(phonology.ablaut("asai", AblautCategory::O), "asao");
    assert_eq!(phonology.ablaut("asai", AblautCategory::I), "asiy");
}

#[test]
fn letter_ablaut_keeps_onset_and_coda() {
    let phonology = FynotekPhonology::new();
    assert_eq!(phonology.ablaut("hyr", AblautCategory::O), "hor");
    assert_eq!(phonology.ablaut("pynsi", AblautCategory::A), "pynsa");
    assert_eq!(phonology.ablaut("tao", AblautCategory::U), "tau");
    assert_eq!(phonology.ablaut("tao", AblautCategory::O), "tou");
    assert_eq!(phonology.ablaut("mees", AblautCategory::E), "meas");
}

#[test]
fn reduplication_toggles_length() {
    let phonology = FynotekPhonology::new();
    assert_eq!(phonology.ablaut("hyr", AblautCategory::Reduplication), "hyyr");
    assert_eq!(phonology.ablaut("hyyr", AblautCategory::Reduplication), "hyr");
    assert_eq!(phonology.ablaut("asai", AblautCategory::Reduplication), "asii");
    assert_eq!(phonology.ablaut("mees", AblautCategory::Reduplication), "mes");
}

#[test]
fn default_and_vowelless_words_are_unchanged() {
    let phonology = FynotekPhonology::new();
    assert_eq!(phonology.ablaut("pynsi", AblautCategory::Default), "pynsi");
    assert_eq!(phonology.ablaut("sk", AblautCategory::A), "sk");
    assert_eq!(phonology.ablaut("mees", AblautCategory::Default), "mees");
}

#[test]
fn categories_render_their_labels() {
    let labels: Vec<String> = AblautCategory::LETTERS
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(labels, ["A", "E", "I", "Y", "O", "U"]);
    assert_eq!(AblautCategory::Reduplication.to_string(), "reduplication");
    assert_eq!(AblautCategory::Reduplication.letter_pair(), None);
}

/// Rejects every spelling containing `h`, otherwise defers to Fynotek.
struct NoAspirates(FynotekPhonology);

impl SequenceValidator for NoAspirates {
    fn is_valid_sequence(&self, candidate: &str) -> bool {
        !candidate.contains('h') && self.0.is_valid_sequence(candidate)
    }

    fn separate_vowels(&self, word: &str) -> VowelSplit {
        self.0.separate_vowels(word)
    }
}

impl AblautOracle for NoAspirates {
    fn ablaut(&self, root: &str, category: AblautCategory) -> String {
        self.0.ablaut(root, category)
    }
}

#[test]
fn analyzer_defers_to_a_substitute_phonology() {
    let lexicon = Lexicon::fynotek();
    let grammar = AffixGrammar::fynotek();
    let analyzer = Analyzer::new(&lexicon, &grammar, NoAspirates(FynotekPhonology::new()));

    assert!(analyzer.analyze("hyr").is_empty());
    let rendered: Vec<String> = analyzer
        .analyze("pynsi")
        .iter()
        .map(ToString::to_string)
        .collect();
    assert!(rendered.contains(&"pynsi".to_string()));
}

#[test]
fn borrowed_phonology_is_a_phonology() {
    let lexicon = Lexicon::fynotek();
    let grammar = AffixGrammar::fynotek();
    let phonology = FynotekPhonology::new();
    let analyzer = Analyzer::new(&lexicon, &grammar, &phonology);

    assert!(!analyzer.analyze("hyr").is_empty());
}
