// WHY: reports render to String so the CLI decides where they go and tests can inspect them

use std::fmt::Write;

use crate::evaluation::{AggregateReport, DatasetEvaluation, EvaluationResult, MetricResult, SystemEvaluation};

const RULE_WIDTH: usize = 80;

/// Full comparison: metrics, detailed counts, error analysis, and a one-line verdict
pub fn render_table(result: &EvaluationResult) -> String {
    let mut out = String::new();
    let (baseline, candidate) = (&result.baseline, &result.candidate);

    banner(&mut out, "EVALUATION RESULTS - SENTENCE SEGMENTATION SYSTEMS");

    out.push_str("\nTable 1: Performance Metrics Comparison\n");
    metric_comparison(&mut out, &baseline.system, &candidate.system, &baseline.metrics, &candidate.metrics);

    out.push_str("\nTable 2: Detailed Evaluation Metrics\n");
    rule(&mut out, '-');
    let _ = writeln!(
        out,
        "{:<20} {:<10} {:<8} {:<8} {:<8} {:<10} {:<10} {:<10}",
        "System", "Sentences", "TP", "FP", "FN", "Precision", "Recall", "F1-Score"
    );
    rule(&mut out, '-');
    let _ = writeln!(
        out,
        "{:<20} {:<10} {:<8} {:<8} {:<8} {:<10} {:<10} {:<10}",
        "Gold Standard", result.gold_standard.count, "-", "-", "-", "-", "-", "-"
    );
    detail_row(&mut out, baseline);
    detail_row(&mut out, candidate);
    rule(&mut out, '-');

    out.push_str("\nTable 3: Error Analysis\n");
    rule(&mut out, '-');
    let _ = writeln!(out, "{:<30} {:<25} {:<25}", "Error Type", baseline.system, candidate.system);
    rule(&mut out, '-');
    let (b, c) = (&baseline.errors, &candidate.errors);
    error_row(&mut out, "Abbreviation Errors", b.abbreviation_errors.len(), c.abbreviation_errors.len());
    error_row(&mut out, "Quotation Errors", b.quotation_errors.len(), c.quotation_errors.len());
    error_row(&mut out, "Decimal Number Errors", b.decimal_errors.len(), c.decimal_errors.len());
    error_row(
        &mut out,
        "Over-segmentation (count)",
        b.over_segmentation.map_or(0, |d| d.count),
        c.over_segmentation.map_or(0, |d| d.count),
    );
    error_row(
        &mut out,
        "Under-segmentation (count)",
        b.under_segmentation.map_or(0, |d| d.count),
        c.under_segmentation.map_or(0, |d| d.count),
    );
    error_row(&mut out, "Total Errors", b.total_errors, c.total_errors);
    rule(&mut out, '-');

    out.push('\n');
    banner(&mut out, "SUMMARY");
    summary(&mut out, &baseline.system, &candidate.system, &baseline.metrics, &candidate.metrics);
    rule(&mut out, '=');
    out
}

/// Header line for one dataset in a multi-dataset run
pub fn render_dataset_header(evaluation: &DatasetEvaluation) -> String {
    let mut out = String::new();
    rule(&mut out, '=');
    let _ = writeln!(out, "Dataset: {}", evaluation.dataset_id);
    if !evaluation.description.is_empty() {
        let _ = writeln!(out, "Description: {}", evaluation.description);
    }
    rule(&mut out, '=');
    out
}

/// Metrics recomputed over all datasets plus summed counts
pub fn render_aggregate(report: &AggregateReport) -> String {
    let mut out = String::new();
    banner(&mut out, "AGGREGATED RESULTS ACROSS ALL DATASETS");

    let _ = writeln!(out, "\nDatasets evaluated: {}", report.datasets);
    out.push_str("\nTable: Aggregated Performance Metrics\n");
    metric_comparison(
        &mut out,
        &report.baseline_system,
        &report.candidate_system,
        &report.baseline,
        &report.candidate,
    );

    let _ = writeln!(out, "\nTotal Gold Standard Sentences: {}", report.gold_sentences);
    for (name, totals) in [
        (&report.baseline_system, &report.baseline_totals),
        (&report.candidate_system, &report.candidate_totals),
    ] {
        let _ = writeln!(
            out,
            "{}: {} sentences (TP: {}, FP: {}, FN: {})",
            name, totals.predicted_sentences, totals.true_positives, totals.false_positives, totals.false_negatives
        );
    }
    rule(&mut out, '=');
    out
}

fn metric_comparison(out: &mut String, baseline_name: &str, candidate_name: &str, baseline: &MetricResult, candidate: &MetricResult) {
    rule(out, '-');
    let _ = writeln!(out, "{:<20} {:<20} {:<20} {:<15}", "Metric", baseline_name, candidate_name, "Improvement");
    rule(out, '-');
    for (label, b, c) in [
        ("Precision", baseline.precision, candidate.precision),
        ("Recall", baseline.recall, candidate.recall),
        ("F1-Score", baseline.f1_score, candidate.f1_score),
    ] {
        let delta = c - b;
        let _ = writeln!(out, "{:<20} {:<20.4} {:<20.4} {:+.4} ({:+.2}%)", label, b, c, delta, delta * 100.0);
    }
    rule(out, '-');
}

fn detail_row(out: &mut String, system: &SystemEvaluation) {
    let m = &system.metrics;
    let _ = writeln!(
        out,
        "{:<20} {:<10} {:<8} {:<8} {:<8} {:<10.4} {:<10.4} {:<10.4}",
        system.system, system.count, m.true_positives, m.false_positives, m.false_negatives, m.precision, m.recall, m.f1_score
    );
}

fn error_row(out: &mut String, label: &str, baseline: usize, candidate: usize) {
    let _ = writeln!(out, "{:<30} {:<25} {:<25}", label, baseline, candidate);
}

fn summary(out: &mut String, baseline_name: &str, candidate_name: &str, baseline: &MetricResult, candidate: &MetricResult) {
    let f1_delta = candidate.f1_score - baseline.f1_score;
    if f1_delta > 0.0 {
        let _ = writeln!(
            out,
            "{} outperforms {} by {:.2}% in F1-score.",
            candidate_name,
            baseline_name,
            f1_delta * 100.0
        );
        let _ = writeln!(out, "  - Precision improvement: {:+.2}%", (candidate.precision - baseline.precision) * 100.0);
        let _ = writeln!(out, "  - Recall improvement: {:+.2}%", (candidate.recall - baseline.recall) * 100.0);
    } else if f1_delta < 0.0 {
        let _ = writeln!(out, "{} performs better than {} by {:.2}% in F1-score.", baseline_name, candidate_name, -f1_delta * 100.0);
    } else {
        let _ = writeln!(out, "{} and {} tie on F1-score.", baseline_name, candidate_name);
    }
}

fn banner(out: &mut String, title: &str) {
    rule(out, '=');
    out.push_str(title);
    out.push('\n');
    rule(out, '=');
}

fn rule(out: &mut String, ch: char) {
    out.extend(std::iter::repeat(ch).take(RULE_WIDTH));
    out.push('\n');
}
