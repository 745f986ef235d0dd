// WHY: single forward pass with bounded lookahead; once a sentence is emitted it is never revisited

use anyhow::Result;
use regex_automata::meta::Regex;
use tracing::{debug, warn};

use super::normalization::normalize_whitespace;
use super::punctuation::split_on_terminator_runs;
use super::{
    push_trimmed, AbbreviationLexicon, Segmenter, SegmenterRules, DEFAULT_LANGUAGE, TERMINATORS,
    TERMINATOR_RUN_PATTERN,
};

/// Hand-written English sentence splitter.
///
/// A terminator (`.`, `!`, `?`) closes the pending sentence when it
/// - is the last character of the text, or
/// - is followed by spaces and then an uppercase character, and the last token of the
///   pending sentence is not a short known abbreviation.
///
/// A terminator glued to the next character (decimals like `3.14`, inner dots of `U.S.A.`,
/// a closing quote) never closes a sentence.
///
/// Known limitation: listed abbreviations longer than three characters (`prof`, `corp`)
/// still end a sentence.
pub struct RuleBasedSegmenter {
    lexicon: AbbreviationLexicon,
    fallback: Regex,
}

impl RuleBasedSegmenter {
    pub fn new(rules: SegmenterRules) -> Result<Self> {
        let lexicon = AbbreviationLexicon::new(&rules.abbreviations, rules.max_abbreviation_len);
        let fallback = Regex::new(TERMINATOR_RUN_PATTERN)?;
        debug!(
            "Built rule-based segmenter with {} abbreviations (max length {})",
            lexicon.len(),
            rules.max_abbreviation_len
        );
        Ok(Self { lexicon, fallback })
    }

    pub fn with_default_rules() -> Result<Self> {
        Self::new(SegmenterRules::default())
    }

    pub fn lexicon(&self) -> &AbbreviationLexicon {
        &self.lexicon
    }

    /// Split text into trimmed, non-empty sentences.
    ///
    /// Empty or whitespace-only input yields an empty list; anything else yields at least one
    /// sentence. Joining the result with single spaces reproduces the whitespace-normalized input.
    pub fn split(&self, text: &str) -> Vec<String> {
        let normalized = normalize_whitespace(text);
        if normalized.is_empty() {
            return Vec::new();
        }

        let mut sentences = self.scan(&normalized);

        // WHY: scan always flushes non-empty pending text, so this only guards future scan changes
        if sentences.is_empty() {
            warn!("Boundary scan produced no sentences, falling back to terminator split");
            sentences = split_on_terminator_runs(&self.fallback, &normalized);
            if sentences.is_empty() {
                sentences.push(normalized.clone());
            }
        }

        let mut cleaned = Vec::with_capacity(sentences.len());
        for sentence in &sentences {
            push_trimmed(&mut cleaned, sentence);
        }

        debug!("Split {} characters into {} sentences", normalized.len(), cleaned.len());
        cleaned
    }

    fn scan(&self, normalized: &str) -> Vec<String> {
        let chars: Vec<char> = normalized.chars().collect();
        let mut sentences = Vec::new();
        let mut pending = String::new();
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            pending.push(ch);

            if TERMINATORS.contains(&ch) {
                if let Some(next_start) = self.boundary_after(&chars, i, &pending) {
                    push_trimmed(&mut sentences, &pending);
                    pending.clear();
                    // terminator and the spaces after it are consumed here
                    i = next_start;
                    continue;
                }
            }

            i += 1;
        }

        push_trimmed(&mut sentences, &pending);
        sentences
    }

    /// Decide whether the terminator at `pos` closes `pending`.
    /// Returns the index where the next sentence starts.
    fn boundary_after(&self, chars: &[char], pos: usize, pending: &str) -> Option<usize> {
        let next = pos + 1;
        if next >= chars.len() {
            return Some(chars.len());
        }
        if chars[next] != ' ' {
            return None;
        }

        let mut lookahead = next;
        while lookahead < chars.len() && chars[lookahead] == ' ' {
            lookahead += 1;
        }

        match chars.get(lookahead) {
            None => Some(chars.len()),
            Some(c) if c.is_uppercase() && !self.lexicon.blocks_boundary(pending) => Some(lookahead),
            _ => None,
        }
    }
}

impl Segmenter for RuleBasedSegmenter {
    fn name(&self) -> &str {
        "rule-based"
    }

    fn segment(&self, text: &str, language: &str) -> Vec<String> {
        if language != DEFAULT_LANGUAGE {
            warn!(language, "Rule-based segmenter only implements English rules");
        }
        self.split(text)
    }
}
