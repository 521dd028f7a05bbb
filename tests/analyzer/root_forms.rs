use fynotek_morph::grammar::{PartOfSpeech, PosSet};

use crate::support::{analyze, analyze_with_pos, has, rendered, with_analyzer};

#[test]
fn exact_root_is_the_only_root_analysis() {
    let analyses = with_analyzer(|analyzer| analyzer.root_analyses("pynsi"));
    assert_eq!(rendered(&analyses), ["pynsi"]);
    assert_eq!(analyses[0].pos(), PosSet::ALL);
}

#[test]
fn empty_span_has_no_root_analysis() {
    assert!(with_analyzer(|analyzer| analyzer.root_analyses("")).is_empty());
    assert!(analyze("").is_empty());
}

#[test]
fn plural_marks_nouns_and_modifiers() {
    let analyses = analyze_with_pos("pynsiak");
    assert!(has(&analyses, "pynsi + ak", PosSet::NOUN_OR_MODIFIER));
}

#[test]
fn o_ablaut_on_short_root() {
    assert_eq!(analyze("hor"), ["hyr + O ablaut"]);
}

#[test]
fn one_surface_can_carry_two_ablauts() {
    let analyses = analyze_with_pos("meas");
    assert!(has(&analyses, "mees + A ablaut", PosSet::ALL));
    assert!(has(&analyses, "mees + E ablaut", PosSet::VERB_OR_MODIFIER));
}

#[test]
fn verbal_o_ablaut_and_pronoun_i_ablaut_exclude_nouns() {
    let folou = analyze_with_pos("folou");
    assert!(has(&folou, "folo + O ablaut", PosSet::VERB_OR_MODIFIER));

    let yumiy = analyze_with_pos("yumiy");
    assert!(has(&yumiy, "yumi + I ablaut", PosSet::VERB_OR_MODIFIER));
}

#[test]
fn reduplication_lengthens_a_short_vowel() {
    let analyses = analyze_with_pos("hyyr");
    assert!(has(
        &analyses,
        "hyr + reduplication ablaut",
        PosSet::VERB_OR_MODIFIER
    ));
}

#[test]
fn reduplication_is_only_read_from_a_doubled_vowel() {
    assert!(analyze("mes").is_empty());
}

#[test]
fn compound_repeats_count_their_links() {
    let one = with_analyzer(|analyzer| rendered(&analyzer.root_analyses("ñojerajera")));
    assert_eq!(one, ["(ñojera + jera)"]);

    let two = with_analyzer(|analyzer| rendered(&analyzer.root_analyses("ñojerajerajera")));
    assert_eq!(two, ["(ñojera + jera + jera)"]);
}

#[test]
fn compound_with_mutated_final_link() {
    assert_eq!(analyze("ñojerajero"), ["(ñojera + jera) + O ablaut"]);

    let analyses = analyze_with_pos("ñojerajerajeru");
    assert!(has(
        &analyses,
        "(ñojera + jera + jera) + U ablaut",
        PosSet::VERB_OR_MODIFIER
    ));
}

#[test]
fn pronouns_never_take_the_plural() {
    let analyses = with_analyzer(|analyzer| {
        rendered(&analyzer.suffixed_root_analyses("yumiak", PosSet::ALL))
    });
    assert!(analyses.is_empty());
}

#[test]
fn verbal_suffixes_need_a_verb_reading() {
    let verb = with_analyzer(|analyzer| {
        rendered(&analyzer.suffixed_root_analyses("hyra", PosSet::ALL))
    });
    assert_eq!(verb, ["hyr + a"]);

    let noun = with_analyzer(|analyzer| {
        rendered(&analyzer.suffixed_root_analyses("hyra", PosSet::single(PartOfSpeech::Noun)))
    });
    assert!(noun.is_empty());
}

#[test]
fn negation_combines_with_plural() {
    let analyses = analyze_with_pos("pynsiakñy");
    assert!(has(&analyses, "pynsi + ak + ñy", PosSet::NOUN_OR_MODIFIER));
    assert_eq!(analyze("hyrñy"), ["hyr + ñy"]);
}
