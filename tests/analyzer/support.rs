use fynotek_morph::analysis::Analysis;
use fynotek_morph::analyzer::Analyzer;
use fynotek_morph::grammar::{AffixGrammar, PosSet};
use fynotek_morph::lexicon::Lexicon;
use fynotek_morph::phonology::FynotekPhonology;

pub fn with_analyzer<R>(run: impl FnOnce(&Analyzer<'_>) -> R) -> R {
    let lexicon = Lexicon::fynotek();
    let grammar = AffixGrammar::fynotek();
    let analyzer = Analyzer::new(&lexicon, &grammar, FynotekPhonology::new());
    run(&analyzer)
}

pub fn rendered(analyses: &[Analysis]) -> Vec<String> {
    analyses.iter().map(ToString::to_string).collect()
}

pub fn analyze(word: &str) -> Vec<String> {
    with_analyzer(|analyzer| rendered(&analyzer.analyze(word)))
}

pub fn analyze_with_pos(word: &str) -> Vec<(String, PosSet)> {
    with_analyzer(|analyzer| {
        analyzer
            .analyze(word)
            .iter()
            .map(|analysis| (analysis.to_string(), analysis.pos()))
            .collect()
    })
}

pub fn has(analyses: &[(String, PosSet)], gloss: &str, pos: PosSet) -> bool {
    analyses
        .iter()
        .any(|(rendered, permitted)| rendered == gloss && *permitted == pos)
}
