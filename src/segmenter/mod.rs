// WHY: one capability interface shared by the rule-based scanner, the punctuation fallback,
// and any external NLP-backed splitter, so the evaluator never knows which one it scores

pub mod abbreviations;
pub mod normalization;
pub mod punctuation;
pub mod rule_based;

pub use abbreviations::{AbbreviationLexicon, DEFAULT_ABBREVIATIONS, DEFAULT_MAX_ABBREVIATION_LEN};
pub use normalization::{is_blank, normalize_whitespace, normalize_whitespace_into};
pub use punctuation::PunctuationSegmenter;
pub use rule_based::RuleBasedSegmenter;

/// Characters that can terminate a sentence
pub const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// One or more terminators followed by whitespace
pub(crate) const TERMINATOR_RUN_PATTERN: &str = r"[.!?]+\s+";

/// Language hints accepted at the API surface
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "fr", "de", "es"];

/// Default language hint
pub const DEFAULT_LANGUAGE: &str = "en";

/// Anything that turns text into an ordered list of sentences.
///
/// Implementations must be infallible: for any string input they return a (possibly empty)
/// list of trimmed, non-empty sentences in text order.
pub trait Segmenter: Send + Sync {
    /// Short identifier used in logs and reports
    fn name(&self) -> &str;

    /// Split `text` into sentences. `language` is a hint such as `"en"`; implementations may ignore it.
    fn segment(&self, text: &str, language: &str) -> Vec<String>;
}

/// Configuration for the rule-based boundary heuristics
#[derive(Debug, Clone)]
pub struct SegmenterRules {
    /// Tokens (lowercase, without trailing terminators) that should not end a sentence
    pub abbreviations: Vec<String>,
    /// Listed tokens longer than this still end a sentence
    pub max_abbreviation_len: usize,
}

impl Default for SegmenterRules {
    fn default() -> Self {
        Self {
            abbreviations: DEFAULT_ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
            max_abbreviation_len: DEFAULT_MAX_ABBREVIATION_LEN,
        }
    }
}

/// Adapter that exposes an external splitter (e.g. a model-backed one) as a [`Segmenter`].
///
/// Output is cleaned the same way the API layer cleans it: every sentence is trimmed and
/// empty ones are dropped. Blank input never reaches the wrapped function.
pub struct FnSegmenter<F> {
    name: String,
    split_fn: F,
}

impl<F> FnSegmenter<F>
where
    F: Fn(&str, &str) -> Vec<String> + Send + Sync,
{
    pub fn new(name: impl Into<String>, split_fn: F) -> Self {
        Self {
            name: name.into(),
            split_fn,
        }
    }
}

impl<F> Segmenter for FnSegmenter<F>
where
    F: Fn(&str, &str) -> Vec<String> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn segment(&self, text: &str, language: &str) -> Vec<String> {
        if is_blank(text) {
            return Vec::new();
        }

        let mut sentences = Vec::new();
        for sentence in (self.split_fn)(text, language) {
            push_trimmed(&mut sentences, &sentence);
        }
        sentences
    }
}

/// Push the trimmed candidate unless it is empty
pub(crate) fn push_trimmed(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
