use fynotek_morph::phonology::{FynotekPhonology, SequenceValidator, VowelSplit, is_vowel};

#[test]
fn splits_around_the_final_vowel_group() {
    let phonology = FynotekPhonology::new();
    assert_eq!(
        phonology.separate_vowels("pynsi"),
        VowelSplit::new("pyns", "i", "")
    );
    assert_eq!(
        phonology.separate_vowels("mees"),
        VowelSplit::new("m", "ee", "s")
    );
    assert_eq!(
        phonology.separate_vowels("ñojera"),
        VowelSplit::new("ñojer", "a", "")
    );
}

#[test]
fn words_without_vowels_are_all_coda() {
    let phonology = FynotekPhonology::new();
    assert_eq!(phonology.separate_vowels("k"), VowelSplit::new("", "", "k"));
    assert_eq!(phonology.separate_vowels("a"), VowelSplit::new("", "a", ""));
    assert_eq!(phonology.separate_vowels(""), VowelSplit::default());
}

#[test]
fn doubled_nucleus_requires_two_identical_vowels() {
    assert!(VowelSplit::new("m", "ee", "s").nucleus_is_doubled());
    assert!(!VowelSplit::new("m", "e", "s").nucleus_is_doubled());
    assert!(!VowelSplit::new("h", "ao", "").nucleus_is_doubled());
}

#[test]
fn skeleton_match_needs_one_or_two_vowels_between_onset_and_coda() {
    let split = VowelSplit::new("h", "o", "r");
    assert!(split.shares_skeleton_with("hyr"));
    assert!(split.shares_skeleton_with("haur"));
    assert!(!split.shares_skeleton_with("hr"));
    assert!(!split.shares_skeleton_with("hauer"));
    assert!(!split.shares_skeleton_with("hytr"));
}

#[test]
fn y_is_a_vowel() {
    assert!(is_vowel('y'));
    assert!(!is_vowel('ñ'));
}
