//! Word-level front end over the analyzer.
//!
//! [`Driver::respond`] turns one input token into a [`Response`]: the `an`
//! shortcut, a rejection, the analyses, or a diagnostic explaining why none
//! were found.

mod diagnostics;

pub use diagnostics::{Diagnostic, DiagnosticCode};

use regex::Regex;
use tracing::debug;

use crate::analysis::Analysis;
use crate::analyzer::Analyzer;
use crate::phonology::{FynotekPhonology, Phonology};
use diagnostics::{
    INVALID_SEQUENCE_MESSAGE, NO_ANALYSIS_HINTS, NO_ANALYSIS_MESSAGE, NO_ANALYSIS_NOTE,
};

/// `an` repeated, or followed by extra `n`s.
const SHORTCUT_PATTERN: &str = r"^(?:an)+n*$";

/// Rendering of every shortcut input.
const SHORTCUT_RENDERING: &str = "an";

/// Driver outcome for one input word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The input is a spelling of `an`.
    Shortcut(String),
    /// The input is not a legal spelling.
    Rejected(Diagnostic),
    /// The input has at least one rendering.
    Analyzed {
        /// Rendering of the input as an uninflectable word.
        standalone: Option<String>,
        /// Analyses of the input.
        analyses: Vec<Analysis>,
    },
    /// The input is legal but nothing matched.
    Unanalyzable(Diagnostic),
}

impl Response {
    /// Renders the response as output lines.
    ///
    /// With `show_pos`, each analysis is followed by its permitted parts of speech.
    pub fn render(&self, show_pos: bool) -> Vec<String> {
        match self {
            Self::Shortcut(rendering) => vec![rendering.clone()],
            Self::Rejected(diagnostic) | Self::Unanalyzable(diagnostic) => diagnostic.lines(),
            Self::Analyzed {
                standalone,
                analyses,
            } => standalone
                .iter()
                .cloned()
                .chain(analyses.iter().map(|analysis| {
                    if show_pos {
                        format!("{analysis} {}", analysis.pos())
                    } else {
                        analysis.to_string()
                    }
                }))
                .collect(),
        }
    }

    /// Renders the response without parts of speech.
    pub fn lines(&self) -> Vec<String> {
        self.render(false)
    }
}

/// Word-level front end.
#[derive(Debug, Clone)]
pub struct Driver<'a, P = FynotekPhonology> {
    analyzer: Analyzer<'a, P>,
    shortcut: Regex,
}

impl<'a, P: Phonology> Driver<'a, P> {
    /// Creates a driver over `analyzer`.
    pub fn new(analyzer: Analyzer<'a, P>) -> Self {
        Self {
            analyzer,
            shortcut: Regex::new(SHORTCUT_PATTERN).expect("shortcut pattern is valid"),
        }
    }

    /// Returns the analyzer.
    pub fn analyzer(&self) -> &Analyzer<'a, P> {
        &self.analyzer
    }

    /// Responds to the first whitespace-separated token of `input`.
    pub fn respond(&self, input: &str) -> Response {
        let word = input
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase();

        if self.shortcut.is_match(&word) {
            return Response::Shortcut(SHORTCUT_RENDERING.to_string());
        }
        if !self.analyzer.phonology().is_valid_sequence(&word) {
            debug!(word = %word, "rejected input");
            return Response::Rejected(Diagnostic::new(
                DiagnosticCode::InvalidSequence,
                INVALID_SEQUENCE_MESSAGE,
            ));
        }

        let standalone = self
            .analyzer
            .lexicon()
            .standalone_rendering(&word)
            .map(str::to_string);
        let analyses = self.analyzer.analyze(&word);
        if standalone.is_none() && analyses.is_empty() {
            return Response::Unanalyzable(
                Diagnostic::new(DiagnosticCode::NoAnalysis, NO_ANALYSIS_MESSAGE)
                    .with_hints(NO_ANALYSIS_HINTS)
                    .with_note(NO_ANALYSIS_NOTE),
            );
        }
        Response::Analyzed {
            standalone,
            analyses,
        }
    }
}
