use std::error::Error;

use fynotek_morph::lexicon::{CompoundPattern, Lexicon, LexiconData, LexiconError};

fn minimal() -> LexiconData {
    let owned =
        |words: &[&str]| -> Vec<String> { words.iter().map(|word| word.to_string()).collect() };
    LexiconData {
        content_words: owned(&["tata"]),
        standalone_words: Vec::new(),
        pronouns: owned(&["mi"]),
        possessor_suffixes: owned(&["mis"]),
        numeral_roots: owned(&["fui", "ay", "fo", "us", "nos", "pur"]),
        numeral_suffixes: owned(&["po", "pura", "poña", "sola", "manta", "tauwa"]),
        compound: None,
        verbal_o_ablaut_roots: Vec::new(),
    }
}

#[test]
fn minimal_tables_are_accepted() {
    assert!(Lexicon::from_parts(minimal()).is_ok());
}

#[test]
fn possessors_must_align_with_pronouns() {
    let mut data = minimal();
    data.possessor_suffixes.push("mas".to_string());

    match Lexicon::from_parts(data) {
        Err(LexiconError::MisalignedPossessors {
            pronouns,
            possessors,
        }) => {
            assert_eq!(pronouns, 1);
            assert_eq!(possessors, 2);
        }
        other => panic!("expected misaligned possessors, got {other:?}"),
    }
}

#[test]
fn empty_entries_name_their_table() {
    let mut data = minimal();
    data.content_words.push(String::new());

    match Lexicon::from_parts(data) {
        Err(LexiconError::EmptyEntry { table }) => assert_eq!(table, "content word"),
        other => panic!("expected empty entry, got {other:?}"),
    }
}

#[test]
fn numeral_tables_have_fixed_sizes() {
    let mut roots = minimal();
    roots.numeral_roots.pop();
    match Lexicon::from_parts(roots) {
        Err(LexiconError::NumeralRootCount { expected, found }) => {
            assert_eq!((expected, found), (6, 5));
        }
        other => panic!("expected numeral root count, got {other:?}"),
    }

    let mut suffixes = minimal();
    suffixes.numeral_suffixes.push("ku".to_string());
    match Lexicon::from_parts(suffixes) {
        Err(LexiconError::NumeralSuffixCount { expected, found }) => {
            assert_eq!((expected, found), (6, 7));
        }
        other => panic!("expected numeral suffix count, got {other:?}"),
    }
}

#[test]
fn compound_link_needs_a_vowel() {
    let mut data = minimal();
    data.compound = Some(CompoundPattern::new("ñojera", "jr"));

    let error = Lexicon::from_parts(data).expect_err("link without a vowel");
    assert!(matches!(
        error,
        LexiconError::CompoundLinkWithoutVowel { ref link } if link == "jr"
    ));
    assert_eq!(error.to_string(), "compound link \"jr\" has no vowel");
}

#[test]
fn missing_file_reports_path_and_source() {
    let error = Lexicon::from_json_file("tests/fixtures/lexicon/absent.json")
        .expect_err("file does not exist");

    assert!(matches!(error, LexiconError::Io { .. }));
    assert!(error.to_string().contains("absent.json"));
    assert!(error.source().is_some());
}

#[test]
fn malformed_and_unknown_fields_are_json_errors() {
    let malformed = Lexicon::from_json_str("{ \"content_words\": [").expect_err("truncated");
    assert!(matches!(malformed, LexiconError::Json(_)));

    let unknown = Lexicon::from_json_str(
        r#"{
            "content_words": [],
            "pronouns": [],
            "possessor_suffixes": [],
            "numeral_roots": [],
            "numeral_suffixes": [],
            "verbs": []
        }"#,
    )
    .expect_err("unknown field");
    assert!(matches!(unknown, LexiconError::Json(_)));
}
