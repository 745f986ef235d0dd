use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::boundaries::BoundaryPosition;

/// Maximum offset difference for two boundaries to count as the same event
pub const DEFAULT_TOLERANCE: usize = 5;

/// Precision/recall/F1 plus the raw boundary counts they came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

/// Outcome of greedy tolerance matching between two boundary sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundaryMatch {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

/// Greedily pair gold boundaries with predicted ones.
///
/// Each gold boundary takes the first predicted boundary (ascending) within `tolerance`.
/// Predicted boundaries are not retired once used, so several gold boundaries can land on
/// the same prediction. Not a bipartite matching.
pub fn match_boundaries(
    gold: &BTreeSet<BoundaryPosition>,
    predicted: &BTreeSet<BoundaryPosition>,
    tolerance: usize,
) -> BoundaryMatch {
    let mut true_positives = 0;
    let mut matched_gold = BTreeSet::new();
    let mut matched_predicted = BTreeSet::new();

    for &gold_pos in gold {
        if let Some(&pred_pos) = predicted
            .iter()
            .find(|&&pred_pos| gold_pos.abs_diff(pred_pos) <= tolerance)
        {
            true_positives += 1;
            matched_gold.insert(gold_pos);
            matched_predicted.insert(pred_pos);
        }
    }

    BoundaryMatch {
        true_positives,
        false_positives: predicted.len() - matched_predicted.len(),
        false_negatives: gold.len() - matched_gold.len(),
    }
}

/// Match boundaries and score them against sentence counts
pub fn metrics(
    gold: &BTreeSet<BoundaryPosition>,
    predicted: &BTreeSet<BoundaryPosition>,
    gold_count: usize,
    predicted_count: usize,
    tolerance: usize,
) -> MetricResult {
    let matched = match_boundaries(gold, predicted, tolerance);
    score(matched, gold_count, predicted_count)
}

/// Turn boundary counts into precision/recall/F1.
///
/// Denominators are sentence counts, not boundary counts. The final sentence of each side
/// ends at the end of the text and has no internal boundary, so when both sides are
/// non-empty that shared end is credited as one extra match. Identical segmentations
/// therefore score 1.0 across the board.
pub fn score(matched: BoundaryMatch, gold_count: usize, predicted_count: usize) -> MetricResult {
    let credited = matched.true_positives + end_of_text_credit(gold_count, predicted_count);
    let precision = bounded_ratio(credited, predicted_count);
    let recall = bounded_ratio(credited, gold_count);

    MetricResult {
        precision: round4(precision),
        recall: round4(recall),
        f1_score: round4(harmonic_mean(precision, recall)),
        true_positives: matched.true_positives,
        false_positives: matched.false_positives,
        false_negatives: matched.false_negatives,
    }
}

/// Running totals across several evaluations of one system
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricTotals {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub predicted_sentences: usize,
    pub gold_sentences: usize,
    credited_ends: usize,
}

impl MetricTotals {
    pub fn add(&mut self, result: &MetricResult, gold_count: usize, predicted_count: usize) {
        self.true_positives += result.true_positives;
        self.false_positives += result.false_positives;
        self.false_negatives += result.false_negatives;
        self.predicted_sentences += predicted_count;
        self.gold_sentences += gold_count;
        self.credited_ends += end_of_text_credit(gold_count, predicted_count);
    }

    /// Recompute precision/recall/F1 from the summed counts
    pub fn to_metrics(&self) -> MetricResult {
        let credited = self.true_positives + self.credited_ends;
        let precision = bounded_ratio(credited, self.predicted_sentences);
        let recall = bounded_ratio(credited, self.gold_sentences);

        MetricResult {
            precision: round4(precision),
            recall: round4(recall),
            f1_score: round4(harmonic_mean(precision, recall)),
            true_positives: self.true_positives,
            false_positives: self.false_positives,
            false_negatives: self.false_negatives,
        }
    }
}

fn end_of_text_credit(gold_count: usize, predicted_count: usize) -> usize {
    usize::from(gold_count > 0 && predicted_count > 0)
}

/// Zero-guarded ratio, clamped to [0, 1] because greedy collisions can over-count
fn bounded_ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    (numerator as f64 / denominator as f64).min(1.0)
}

fn harmonic_mean(precision: f64, recall: f64) -> f64 {
    if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    }
}

/// Round to 4 decimal places for reporting
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
