//! Diagnostic contracts for driver responses.

/// Stable diagnostic codes reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// The input is not a legal Fynotek spelling.
    InvalidSequence,
    /// The input is legal but has no analysis.
    NoAnalysis,
}

/// User-facing diagnostic payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Machine-readable diagnostic code.
    pub code: DiagnosticCode,
    /// Human-readable message text.
    pub message: String,
    /// Common causes, one per line.
    pub hints: Vec<String>,
    /// Closing remark printed after the hints.
    pub note: Option<String>,
}

impl Diagnostic {
    /// Creates a diagnostic without hints.
    pub fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            hints: Vec::new(),
            note: None,
        }
    }

    /// Adds hints.
    pub fn with_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hints.extend(hints.into_iter().map(Into::into));
        self
    }

    /// Sets the closing remark.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Renders the diagnostic as output lines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.hints.len() + 2);
        lines.push(self.message.clone());
        lines.extend(self.hints.iter().map(|hint| format!(" - {hint}")));
        lines.extend(self.note.clone());
        lines
    }
}

pub(crate) const INVALID_SEQUENCE_MESSAGE: &str =
    "This is not a valid Fynotek word. Please try again.";

pub(crate) const NO_ANALYSIS_MESSAGE: &str =
    "No valid analyses can be found. This may be because you have entered a proper noun (which is not supported), or because you have entered morphemes that cannot coexist in the same word.\nSome common occurrences of this are when you try to:";

pub(crate) const NO_ANALYSIS_HINTS: [&str; 6] = [
    "apply a possessor suffix to a verb",
    "apply \"ak\" to a verb, a pronoun, or a word with a number modifier less than equal to 1",
    "omit \"ak\" on a word with a number modifier greater than 1 (except for pronouns)",
    "apply ablaut other than A, I, or O ablaut to a noun",
    "mark a pronoun for the genitive case",
    "mark a number that is larger than a temporal field's range as that temporal field",
];

pub(crate) const NO_ANALYSIS_NOTE: &str =
    "If this is truly a valid Fynotek word, there may be an error in the analyzer or the dictionary it uses.";
