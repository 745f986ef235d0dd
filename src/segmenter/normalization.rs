// WHY: segmentation runs on whitespace-normalized text, so every sentence is a substring of
// the normalized form and output sentences never carry line breaks

/// Collapse every whitespace run (spaces, tabs, `\r\n`, `\n`, Unicode spaces) into a single
/// space and trim both ends. Line breaks are not recoverable afterwards.
pub fn normalize_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_whitespace_into(text, &mut result);
    result
}

/// Normalize into a caller-supplied buffer, clearing it first
pub fn normalize_whitespace_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let mut pending_space = false;
    for ch in text.trim().chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            buffer.push(' ');
            pending_space = false;
        }
        buffer.push(ch);
    }
}

/// True when the text has no non-whitespace content
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line_breaks() {
        let input = "This is a\nsentence with\r\nline breaks.";
        assert_eq!(normalize_whitespace(input), "This is a sentence with line breaks.");
    }

    #[test]
    fn test_normalize_into_buffer_reuse() {
        let mut buffer = String::new();

        normalize_whitespace_into("Line one.\nLine two.", &mut buffer);
        assert_eq!(buffer, "Line one. Line two.");

        normalize_whitespace_into("Different\r\ncontent.", &mut buffer);
        assert_eq!(buffer, "Different content.");
    }

    #[test]
    fn test_normalize_collapses_mixed_runs() {
        let input = "Mixed\t\n\twhitespace\r\n\r\n   here.";
        assert_eq!(normalize_whitespace(input), "Mixed whitespace here.");
    }

    #[test]
    fn test_normalize_trims_ends() {
        assert_eq!(normalize_whitespace("\n    Leading and trailing  \n"), "Leading and trailing");
    }

    #[test]
    fn test_normalize_empty_and_blank() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace("   \n\t "), "");
        assert!(is_blank(""));
        assert!(is_blank(" \r\n\t"));
        assert!(!is_blank("  a "));
    }

    #[test]
    fn test_normalize_unicode_whitespace() {
        // no-break space and em space are whitespace too
        let input = "Unicode\u{00A0}\u{2003}世界 with émojis 🦀.";
        assert_eq!(normalize_whitespace(input), "Unicode 世界 with émojis 🦀.");
    }
}
