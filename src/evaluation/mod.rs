// WHY: scores any two segmenters against the same gold reference; every measurement is taken
// on the source text as given so every segmentation shares one offset space

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

pub mod boundaries;
pub mod error_analysis;
pub mod metrics;

pub use boundaries::{boundaries, BoundaryPosition};
pub use error_analysis::{
    AbbreviationError, DecimalError, ErrorAnalyzer, ErrorReport, SegmentationDelta,
    DEFAULT_ABBREVIATION_PATTERNS, DEFAULT_EXCERPT_LEN,
};
pub use metrics::{match_boundaries, metrics, score, BoundaryMatch, MetricResult, MetricTotals, DEFAULT_TOLERANCE};

use crate::gold::{self, Dataset};
use crate::segmenter::{PunctuationSegmenter, RuleBasedSegmenter, Segmenter};

/// Configuration for evaluation runs
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Maximum offset difference (characters) for a boundary match
    pub tolerance: usize,
    /// Substrings checked for abbreviation errors
    pub abbreviation_patterns: Vec<String>,
    /// Flagged sentences are cut to this many characters
    pub excerpt_len: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            abbreviation_patterns: DEFAULT_ABBREVIATION_PATTERNS.iter().map(|s| s.to_string()).collect(),
            excerpt_len: DEFAULT_EXCERPT_LEN,
        }
    }
}

/// Everything measured for one segmentation system on one text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemEvaluation {
    pub system: String,
    pub sentences: Vec<String>,
    pub count: usize,
    pub errors: ErrorReport,
    #[serde(flatten)]
    pub metrics: MetricResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoldSummary {
    pub sentences: Vec<String>,
    pub count: usize,
}

/// Baseline and candidate results side by side, with the gold data and source text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub baseline: SystemEvaluation,
    pub candidate: SystemEvaluation,
    pub gold_standard: GoldSummary,
    pub text: String,
}

/// Result for one named dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetEvaluation {
    pub dataset_id: String,
    pub description: String,
    pub result: EvaluationResult,
}

/// Summed counts and recomputed metrics across datasets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    pub datasets: usize,
    pub gold_sentences: usize,
    pub baseline_system: String,
    pub candidate_system: String,
    pub baseline_totals: MetricTotals,
    pub candidate_totals: MetricTotals,
    pub baseline: MetricResult,
    pub candidate: MetricResult,
}

impl AggregateReport {
    /// Sum per-dataset counts; `None` when there is nothing to aggregate
    pub fn from_evaluations(evaluations: &[DatasetEvaluation]) -> Option<Self> {
        let first = evaluations.first()?;
        let mut baseline_totals = MetricTotals::default();
        let mut candidate_totals = MetricTotals::default();
        let mut gold_sentences = 0;

        for evaluation in evaluations {
            let result = &evaluation.result;
            let gold_count = result.gold_standard.count;
            gold_sentences += gold_count;
            baseline_totals.add(&result.baseline.metrics, gold_count, result.baseline.count);
            candidate_totals.add(&result.candidate.metrics, gold_count, result.candidate.count);
        }

        Some(Self {
            datasets: evaluations.len(),
            gold_sentences,
            baseline_system: first.result.baseline.system.clone(),
            candidate_system: first.result.candidate.system.clone(),
            baseline: baseline_totals.to_metrics(),
            candidate: candidate_totals.to_metrics(),
            baseline_totals,
            candidate_totals,
        })
    }
}

/// Scores a baseline and a candidate segmenter against gold-standard sentences.
///
/// Holds no per-call state; `evaluate` can be called concurrently through a shared reference.
pub struct SegmentationEvaluator {
    baseline: Box<dyn Segmenter>,
    candidate: Box<dyn Segmenter>,
    analyzer: ErrorAnalyzer,
    config: EvaluatorConfig,
}

impl SegmentationEvaluator {
    pub fn new(
        baseline: Box<dyn Segmenter>,
        candidate: Box<dyn Segmenter>,
        config: EvaluatorConfig,
    ) -> Result<Self> {
        let analyzer = ErrorAnalyzer::new(config.abbreviation_patterns.clone(), config.excerpt_len)?;
        info!(
            baseline = baseline.name(),
            candidate = candidate.name(),
            tolerance = config.tolerance,
            "Created segmentation evaluator"
        );
        Ok(Self {
            baseline,
            candidate,
            analyzer,
            config,
        })
    }

    /// Rule-based baseline against the punctuation-only splitter
    pub fn with_default_systems() -> Result<Self> {
        Self::new(
            Box::new(RuleBasedSegmenter::with_default_rules()?),
            Box::new(PunctuationSegmenter::new()?),
            EvaluatorConfig::default(),
        )
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Run both systems on `text` and score them against `gold_sentences`
    pub fn evaluate<S: AsRef<str>>(&self, text: &str, gold_sentences: &[S], language: &str) -> EvaluationResult {
        let gold: Vec<String> = gold_sentences.iter().map(|s| s.as_ref().to_string()).collect();

        let baseline = self.evaluate_system(self.baseline.as_ref(), text, &gold, language);
        let candidate = self.evaluate_system(self.candidate.as_ref(), text, &gold, language);

        info!(
            gold = gold.len(),
            baseline_f1 = baseline.metrics.f1_score,
            candidate_f1 = candidate.metrics.f1_score,
            "Evaluation complete"
        );

        EvaluationResult {
            baseline,
            candidate,
            gold_standard: GoldSummary {
                count: gold.len(),
                sentences: gold,
            },
            text: text.to_string(),
        }
    }

    /// Score a single segmenter; the evaluator does not care which implementation it is
    pub fn evaluate_system<S: AsRef<str>>(
        &self,
        segmenter: &dyn Segmenter,
        text: &str,
        gold_sentences: &[S],
        language: &str,
    ) -> SystemEvaluation {
        let sentences = segmenter.segment(text, language);

        let gold_boundaries = boundaries(text, gold_sentences);
        let predicted_boundaries = boundaries(text, &sentences);
        let metrics = metrics::metrics(
            &gold_boundaries,
            &predicted_boundaries,
            gold_sentences.len(),
            sentences.len(),
            self.config.tolerance,
        );
        let errors = self.analyzer.analyze(text, gold_sentences, &sentences);

        debug!(
            system = segmenter.name(),
            predicted = sentences.len(),
            true_positives = metrics.true_positives,
            "Scored segmentation system"
        );

        SystemEvaluation {
            system: segmenter.name().to_string(),
            count: sentences.len(),
            sentences,
            errors,
            metrics,
        }
    }

    /// Evaluate every dataset in order
    pub fn evaluate_datasets(&self, datasets: &[Dataset], language: &str) -> Vec<DatasetEvaluation> {
        datasets
            .iter()
            .map(|dataset| self.evaluate_dataset(dataset, language))
            .collect()
    }

    pub fn evaluate_dataset(&self, dataset: &Dataset, language: &str) -> DatasetEvaluation {
        debug!(dataset = %dataset.id, "Evaluating dataset");
        DatasetEvaluation {
            dataset_id: dataset.id.clone(),
            description: dataset.description.clone(),
            result: self.evaluate(&dataset.text, &dataset.sentences, language),
        }
    }

    /// Read the input text and a gold file (flat list or `{"sentences": [...]}`) and evaluate
    pub async fn evaluate_files(
        &self,
        input_path: impl AsRef<Path>,
        gold_path: impl AsRef<Path>,
        language: &str,
    ) -> Result<EvaluationResult> {
        let input_path = input_path.as_ref();
        let text = tokio::fs::read_to_string(input_path)
            .await
            .with_context(|| format!("Failed to read input text {}", input_path.display()))?;
        let gold = gold::load_gold_file(gold_path.as_ref()).await?;
        let sentences = gold.sentences().with_context(|| {
            format!(
                "Gold file {} holds multiple datasets, expected a single sentence list",
                gold_path.as_ref().display()
            )
        })?;

        Ok(self.evaluate(&text, sentences, language))
    }
}
