use std::collections::BTreeSet;

use tracing::{debug, warn};

/// Character offset (in Unicode scalar values) where a sentence ends
pub type BoundaryPosition = usize;

/// Locate each sentence in `text` and collect the end offsets of all but the last one.
///
/// Sentences are searched in order from a moving cursor. A sentence whose trimmed content is
/// not found at or after the cursor (the segmenter rewrote the text) is assumed to start at
/// the cursor itself. Offsets are character positions in `text` as given, not in its
/// whitespace-normalized form. Two consequences:
/// - a normalized sentence that spans a collapsed whitespace run in `text` (a line break plus
///   indentation) is not found, so its start falls back to the cursor;
/// - on heavily indented input those approximated starts can drift past the match tolerance
///   relative to a segmenter that keeps raw whitespace, such as `PunctuationSegmenter`.
///
/// Runs in a single pass: a byte cursor travels with the character cursor, so each step only
/// counts characters over the slice it consumes.
pub fn boundaries<S: AsRef<str>>(text: &str, sentences: &[S]) -> BTreeSet<BoundaryPosition> {
    let mut result = BTreeSet::new();
    let mut char_cursor = 0usize;
    let mut byte_cursor = 0usize;
    let last_index = sentences.len().saturating_sub(1);

    for (index, sentence) in sentences.iter().enumerate() {
        let trimmed = sentence.as_ref().trim();
        let sentence_chars = trimmed.chars().count();
        let rest = &text[byte_cursor..];

        let start = match rest.find(trimmed) {
            Some(relative) => {
                let start = char_cursor + rest[..relative].chars().count();
                byte_cursor += relative + trimmed.len();
                start
            }
            None => {
                warn!(cursor = char_cursor, "Sentence not found in source text, approximating start at cursor");
                byte_cursor += byte_offset_of_char(rest, sentence_chars);
                char_cursor
            }
        };

        let end = start + sentence_chars;
        if index < last_index {
            result.insert(end);
        }
        char_cursor = end;
    }

    debug!("Extracted {} boundaries from {} sentences", result.len(), sentences.len());
    result
}

/// Byte offset of the `n`th character of `text`, or its length when it is shorter
fn byte_offset_of_char(text: &str, n: usize) -> usize {
    text.char_indices().nth(n).map_or(text.len(), |(byte, _)| byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_boundaries_only() {
        let text = "Hello world. This is a test. How are you?";
        let sentences = ["Hello world.", "This is a test.", "How are you?"];
        let result = boundaries(text, &sentences);
        assert_eq!(result.into_iter().collect::<Vec<_>>(), vec![12, 28]);
    }

    #[test]
    fn test_single_and_empty_lists() {
        assert!(boundaries("Just one.", &["Just one."]).is_empty());
        assert!(boundaries::<&str>("Anything.", &[]).is_empty());
    }

    #[test]
    fn test_offsets_measured_in_raw_text() {
        // leading indentation and a line break shift every offset
        let text = "\n    One here.\n    Two here.";
        let result = boundaries(text, &["One here.", "Two here."]);
        assert_eq!(result.into_iter().collect::<Vec<_>>(), vec![14]);
    }

    #[test]
    fn test_offsets_are_characters_not_bytes() {
        let text = "Ça va. Très bien.";
        let result = boundaries(text, &["Ça va.", "Très bien."]);
        assert_eq!(result.into_iter().collect::<Vec<_>>(), vec![6]);
    }

    #[test]
    fn test_repeated_sentences_advance_cursor() {
        let text = "Yes. Yes. Yes.";
        let result = boundaries(text, &["Yes.", "Yes.", "Yes."]);
        assert_eq!(result.into_iter().collect::<Vec<_>>(), vec![4, 9]);
    }

    #[test]
    fn test_missing_sentence_falls_back_to_cursor() {
        let text = "First part. Second part.";
        // the middle sentence does not occur in the text
        let sentences = ["First part.", "REWRITTEN", "Second part."];
        let result = boundaries(text, &sentences);
        // "REWRITTEN" is assumed to start at 11 and end at 20
        assert_eq!(result.into_iter().collect::<Vec<_>>(), vec![11, 20]);
    }

    #[test]
    fn test_cursor_past_end_does_not_panic() {
        let text = "Short.";
        let sentences = ["A much longer invented sentence", "Another one", "Short."];
        let result = boundaries(text, &sentences);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_sentences_are_trimmed_before_search() {
        let text = "Alpha. Beta.";
        let result = boundaries(text, &["  Alpha.  ", " Beta."]);
        assert_eq!(result.into_iter().collect::<Vec<_>>(), vec![6]);
    }

    #[test]
    fn test_missing_sentence_keeps_later_offsets_in_characters() {
        let text = "añb. Ça va. Très bien.";
        // the rewritten middle sentence spans " Ça va." by character count
        let sentences = ["añb.", "XXXXXXX", "Très bien.", "tail"];
        let result = boundaries(text, &sentences);
        assert_eq!(result.into_iter().collect::<Vec<_>>(), vec![4, 11, 22]);
    }

    #[test]
    fn test_normalized_sentence_across_line_break_falls_back() {
        // raw boundary is 10; the normalized first sentence is not in the text
        let text = "One\n  two. Three.";
        let result = boundaries(text, &["One two.", "Three."]);
        assert_eq!(result.into_iter().collect::<Vec<_>>(), vec![8]);
    }

    #[test]
    fn test_byte_offset_of_char() {
        assert_eq!(byte_offset_of_char("añb", 0), 0);
        assert_eq!(byte_offset_of_char("añb", 2), 3);
        assert_eq!(byte_offset_of_char("añb", 3), 4);
        assert_eq!(byte_offset_of_char("añb", 10), 4);
    }

    #[test]
    fn test_large_input_stays_linear() {
        let count = 30_000;
        let sentence = "Sentence number here is fine.";
        let text = format!("{sentence} ").repeat(count);
        let sentences = vec![sentence; count];

        let started = std::time::Instant::now();
        let result = boundaries(&text, &sentences);
        let elapsed = started.elapsed();

        assert_eq!(result.len(), count - 1);
        assert_eq!(result.last().copied(), Some((count - 1) * (sentence.len() + 1) - 1));
        assert!(elapsed.as_secs_f64() < 2.0, "boundaries took {elapsed:?}");
    }
}
