// WHY: pattern-only splitting on terminator runs, shared by the rule-based fallback and the
// model-free splitter an NLP collaborator degrades to when no language model is loaded

use anyhow::Result;
use regex_automata::meta::Regex;
use tracing::debug;

use super::{is_blank, push_trimmed, Segmenter, TERMINATOR_RUN_PATTERN};

/// Splits wherever one or more terminators are followed by whitespace.
///
/// Works on the raw text without normalizing it, so interior line breaks survive inside a
/// sentence. Terminators stay attached to the sentence they end.
pub struct PunctuationSegmenter {
    pattern: Regex,
}

impl PunctuationSegmenter {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(TERMINATOR_RUN_PATTERN)?;
        debug!("Compiled terminator pattern: {}", TERMINATOR_RUN_PATTERN);
        Ok(Self { pattern })
    }

    pub fn split(&self, text: &str) -> Vec<String> {
        if is_blank(text) {
            return Vec::new();
        }
        let sentences = split_on_terminator_runs(&self.pattern, text);
        debug!("Punctuation split produced {} sentences", sentences.len());
        sentences
    }
}

impl Segmenter for PunctuationSegmenter {
    fn name(&self) -> &str {
        "punctuation"
    }

    fn segment(&self, text: &str, _language: &str) -> Vec<String> {
        self.split(text)
    }
}

/// Cut `text` at every match of `pattern`, pairing the matched terminators back onto the
/// preceding fragment and dropping the whitespace. Fragments are trimmed; empty ones vanish.
pub(crate) fn split_on_terminator_runs(pattern: &Regex, text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut fragment_start = 0;
    let mut fragment = String::new();

    for mat in pattern.find_iter(text) {
        let terminators = text[mat.range()].trim_end();
        fragment.clear();
        fragment.push_str(&text[fragment_start..mat.start()]);
        fragment.push_str(terminators);
        push_trimmed(&mut sentences, &fragment);
        fragment_start = mat.end();
    }

    push_trimmed(&mut sentences, &text[fragment_start..]);
    sentences
}
