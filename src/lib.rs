pub mod discovery;
pub mod evaluation;
pub mod gold;
pub mod report;
pub mod segmenter;

// Re-export main types for convenient access
pub use segmenter::{
    FnSegmenter, PunctuationSegmenter, RuleBasedSegmenter, Segmenter, SegmenterRules,
    DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES,
};

pub use evaluation::{
    AggregateReport, DatasetEvaluation, ErrorReport, EvaluationResult, EvaluatorConfig,
    MetricResult, SegmentationEvaluator, SystemEvaluation,
};

pub use discovery::{discover_gold_files, DiscoveryConfig};
pub use gold::{load_gold_file, Dataset, GoldData};
