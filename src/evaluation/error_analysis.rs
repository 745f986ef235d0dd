// WHY: heuristic error taxonomy; categories are substring checks over the predicted sentences, not a
// boundary-level diff, so one bad split can surface in several categories

use anyhow::Result;
use regex_automata::meta::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Abbreviation-bearing substrings checked in the source text
pub const DEFAULT_ABBREVIATION_PATTERNS: &[&str] =
    &["Dr.", "Mr.", "Mrs.", "Ms.", "Prof.", "U.S.A.", "N.Y.", "etc."];

/// Flagged sentences longer than this many characters are cut and suffixed with "..."
pub const DEFAULT_EXCERPT_LEN: usize = 50;

const DECIMAL_PATTERN: &str = r"\d+\.\d+";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbbreviationError {
    pub pattern: String,
    pub sentence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalError {
    pub decimal: String,
    pub sentence: String,
}

/// Sentence-count mismatch against gold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentationDelta {
    /// Absolute difference between predicted and gold sentence counts
    pub count: usize,
    /// predicted / gold (0 when gold is empty)
    pub ratio: f64,
}

/// Categorized segmentation errors for one system
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorReport {
    pub abbreviation_errors: Vec<AbbreviationError>,
    pub quotation_errors: Vec<String>,
    pub decimal_errors: Vec<DecimalError>,
    pub over_segmentation: Option<SegmentationDelta>,
    pub under_segmentation: Option<SegmentationDelta>,
    /// Abbreviation + quotation + decimal errors; count deltas are informational only
    pub total_errors: usize,
}

/// Runs the error checks. Built once, reused across evaluations.
pub struct ErrorAnalyzer {
    abbreviation_patterns: Vec<String>,
    excerpt_len: usize,
    decimal: Regex,
}

impl ErrorAnalyzer {
    pub fn new(abbreviation_patterns: Vec<String>, excerpt_len: usize) -> Result<Self> {
        let decimal = Regex::new(DECIMAL_PATTERN)?;
        Ok(Self {
            abbreviation_patterns,
            excerpt_len,
            decimal,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(
            DEFAULT_ABBREVIATION_PATTERNS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_EXCERPT_LEN,
        )
    }

    pub fn analyze<G, P>(&self, text: &str, gold: &[G], predicted: &[P]) -> ErrorReport
    where
        G: AsRef<str>,
        P: AsRef<str>,
    {
        let mut report = ErrorReport {
            abbreviation_errors: self.abbreviation_errors(text, gold, predicted),
            quotation_errors: self.quotation_errors(text, predicted),
            decimal_errors: self.decimal_errors(text, predicted),
            over_segmentation: None,
            under_segmentation: None,
            total_errors: 0,
        };

        let (gold_count, predicted_count) = (gold.len(), predicted.len());
        let delta = SegmentationDelta {
            count: gold_count.abs_diff(predicted_count),
            ratio: if gold_count > 0 {
                predicted_count as f64 / gold_count as f64
            } else {
                0.0
            },
        };
        if predicted_count > gold_count {
            report.over_segmentation = Some(delta);
        } else if predicted_count < gold_count {
            report.under_segmentation = Some(delta);
        }

        report.total_errors = report.abbreviation_errors.len()
            + report.quotation_errors.len()
            + report.decimal_errors.len();

        debug!(
            abbreviation = report.abbreviation_errors.len(),
            quotation = report.quotation_errors.len(),
            decimal = report.decimal_errors.len(),
            "Error analysis complete"
        );
        report
    }

    /// A predicted sentence carrying a pattern that no gold sentence carries means the two
    /// segmentations disagree around that abbreviation
    fn abbreviation_errors<G, P>(&self, text: &str, gold: &[G], predicted: &[P]) -> Vec<AbbreviationError>
    where
        G: AsRef<str>,
        P: AsRef<str>,
    {
        let mut errors = Vec::new();
        for pattern in self.abbreviation_patterns.iter().filter(|p| text.contains(p.as_str())) {
            let in_gold = gold.iter().any(|g| g.as_ref().contains(pattern.as_str()));
            if in_gold {
                continue;
            }
            for sentence in predicted.iter().map(|s| s.as_ref()) {
                if sentence.contains(pattern.as_str()) {
                    errors.push(AbbreviationError {
                        pattern: pattern.clone(),
                        sentence: self.excerpt(sentence),
                    });
                }
            }
        }
        errors
    }

    /// Odd quote parity hints at a boundary inside a quoted span
    fn quotation_errors<P: AsRef<str>>(&self, text: &str, predicted: &[P]) -> Vec<String> {
        if !text.contains('"') && !text.contains('\'') {
            return Vec::new();
        }
        predicted
            .iter()
            .map(|s| s.as_ref())
            .filter(|sentence| sentence.chars().filter(|&c| matches!(c, '"' | '\'')).count() % 2 == 1)
            .map(|sentence| self.excerpt(sentence))
            .collect()
    }

    /// A sentence holding the decimal but ending right after its first fractional digit was
    /// cut inside the number
    fn decimal_errors<P: AsRef<str>>(&self, text: &str, predicted: &[P]) -> Vec<DecimalError> {
        let mut errors = Vec::new();
        for mat in self.decimal.find_iter(text) {
            let decimal = &text[mat.range()];
            let Some(split_marker) = first_fractional_marker(decimal) else {
                continue;
            };
            for sentence in predicted.iter().map(|s| s.as_ref()) {
                if sentence.contains(decimal) && sentence.trim().ends_with(&split_marker) {
                    errors.push(DecimalError {
                        decimal: decimal.to_string(),
                        sentence: self.excerpt(sentence),
                    });
                }
            }
        }
        errors
    }

    fn excerpt(&self, sentence: &str) -> String {
        if sentence.chars().count() > self.excerpt_len {
            let mut cut: String = sentence.chars().take(self.excerpt_len).collect();
            cut.push_str("...");
            cut
        } else {
            sentence.to_string()
        }
    }
}

/// "." followed by the first digit after the decimal point, e.g. ".1" for "3.14"
fn first_fractional_marker(decimal: &str) -> Option<String> {
    let (_, fraction) = decimal.split_once('.')?;
    let digit = fraction.chars().next()?;
    Some(format!(".{digit}"))
}
