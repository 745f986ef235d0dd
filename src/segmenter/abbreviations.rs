// WHY: centralized abbreviation handling for the rule-based boundary check
// Lexicon entries are stored lowercase with trailing terminators already stripped

use std::collections::HashSet;

use super::TERMINATORS;

/// Honorifics, units, Latin abbreviations, and ordinal/volume markers that should not end a sentence
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "vs", "etc",
    "e.g", "i.e", "a.m", "p.m", "am", "pm", "inc", "ltd", "corp",
    "st", "ave", "blvd", "rd", "no", "vol", "pp", "fig", "ed",
];

/// Tokens longer than this many characters never block a boundary, even when listed
pub const DEFAULT_MAX_ABBREVIATION_LEN: usize = 3;

/// Immutable abbreviation lookup, built once per segmenter
#[derive(Debug, Clone)]
pub struct AbbreviationLexicon {
    entries: HashSet<String>,
    max_len: usize,
}

impl AbbreviationLexicon {
    /// Build a lexicon from arbitrary entries; entries are lowercased
    pub fn new<I, S>(entries: I, max_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| entry.as_ref().to_lowercase())
                .collect(),
            max_len,
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether the pending sentence buffer ends with a short, known abbreviation.
    ///
    /// The last whitespace-delimited token is stripped of trailing terminators and lowercased.
    /// It blocks the boundary only if it is listed AND no longer than the length limit, so
    /// listed entries like "prof" or "corp" still split.
    pub fn blocks_boundary(&self, pending: &str) -> bool {
        let Some(last_word) = pending.split_whitespace().next_back() else {
            return false;
        };
        let token = last_word
            .trim_end_matches(|c: char| TERMINATORS.contains(&c))
            .to_lowercase();

        self.contains(&token) && token.chars().count() <= self.max_len
    }
}

impl Default for AbbreviationLexicon {
    fn default() -> Self {
        Self::new(DEFAULT_ABBREVIATIONS.iter().copied(), DEFAULT_MAX_ABBREVIATION_LEN)
    }
}
