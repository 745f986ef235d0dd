use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};

use segscore::evaluation::{AggregateReport, EvaluatorConfig, SegmentationEvaluator};
use segscore::{
    discover_gold_files, load_gold_file, report, Dataset, DiscoveryConfig, PunctuationSegmenter,
    RuleBasedSegmenter, Segmenter, DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES,
};

#[derive(Parser, Debug)]
#[command(name = "segscore")]
#[command(about = "Rule-based sentence segmentation and boundary-level evaluation against gold standards")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split text into sentences
    Segment(SegmentArgs),
    /// Score two segmenters against gold-standard sentences
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug)]
struct SegmentArgs {
    /// Text to split; use --file to read it from disk instead
    text: Option<String>,

    /// Read the text from this file
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = SegmenterKind::Rules)]
    segmenter: SegmenterKind,

    /// Language hint (en, fr, de, es)
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Print a JSON array instead of numbered lines
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Gold-standard JSON file, or a directory searched for **/*.json
    gold_path: PathBuf,

    /// Source text for gold files that do not embed one
    #[arg(long)]
    input: Option<PathBuf>,

    /// System compared against the rule-based baseline
    #[arg(long, value_enum, default_value_t = SegmenterKind::Punctuation)]
    candidate: SegmenterKind,

    /// Language hint (en, fr, de, es)
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Boundary match tolerance in characters
    #[arg(long, default_value_t = segscore::evaluation::DEFAULT_TOLERANCE)]
    tolerance: usize,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Suppress console progress bars
    #[arg(long)]
    no_progress: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SegmenterKind {
    /// Abbreviation-aware rule-based scanner
    Rules,
    /// Split on terminators followed by whitespace
    Punctuation,
}

impl SegmenterKind {
    fn build(self) -> Result<Box<dyn Segmenter>> {
        let segmenter: Box<dyn Segmenter> = match self {
            SegmenterKind::Rules => Box::new(RuleBasedSegmenter::with_default_rules()?),
            SegmenterKind::Punctuation => Box::new(PunctuationSegmenter::new()?),
        };
        Ok(segmenter)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    // stdout carries results; logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .json()
        .init();

    debug!(?cli, "Parsed CLI arguments");

    match cli.command {
        Command::Segment(args) => run_segment(args).await,
        Command::Evaluate(args) => run_evaluate(args).await,
    }
}

fn validate_language(language: &str) -> Result<()> {
    if !SUPPORTED_LANGUAGES.contains(&language) {
        anyhow::bail!(
            "Unsupported language '{}'. Supported: {}",
            language,
            SUPPORTED_LANGUAGES.join(", ")
        );
    }
    Ok(())
}

async fn read_text(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read input text {}", path.display()))
}

async fn run_segment(args: SegmentArgs) -> Result<()> {
    validate_language(&args.language)?;

    let text = match (args.text, &args.file) {
        (Some(text), _) => text,
        (None, Some(path)) => read_text(path).await?,
        (None, None) => anyhow::bail!("Provide TEXT or --file"),
    };

    let segmenter = args.segmenter.build()?;
    let sentences = segmenter.segment(&text, &args.language);
    info!(segmenter = segmenter.name(), sentences = sentences.len(), "Segmentation complete");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sentences)?);
    } else {
        for (index, sentence) in sentences.iter().enumerate() {
            println!("{}\t{}", index + 1, sentence);
        }
    }
    Ok(())
}

async fn run_evaluate(args: EvaluateArgs) -> Result<()> {
    validate_language(&args.language)?;

    let input_text = match &args.input {
        Some(path) => Some(read_text(path).await?),
        None => None,
    };

    let gold_files = discover_gold_files(&args.gold_path, &DiscoveryConfig::default())?;
    if gold_files.is_empty() {
        anyhow::bail!("No gold files found under {}", args.gold_path.display());
    }

    let mut datasets: Vec<Dataset> = Vec::new();
    for path in &gold_files {
        let gold = load_gold_file(path).await?;
        let default_id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown".to_string());
        let loaded = gold.into_datasets(&default_id, input_text.as_deref());
        if let Some(missing) = loaded.iter().find(|d| d.text.is_empty() && !d.sentences.is_empty()) {
            anyhow::bail!(
                "Dataset '{}' in {} has no text; pass --input",
                missing.id,
                path.display()
            );
        }
        datasets.extend(loaded);
    }
    info!("Loaded {} datasets from {} gold files", datasets.len(), gold_files.len());

    let config = EvaluatorConfig {
        tolerance: args.tolerance,
        ..EvaluatorConfig::default()
    };
    let evaluator = SegmentationEvaluator::new(
        SegmenterKind::Rules.build()?,
        args.candidate.build()?,
        config,
    )?;

    let progress = if args.no_progress || args.json {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(datasets.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} datasets {msg}")?
                .progress_chars("##-"),
        );
        bar
    };

    let mut evaluations = Vec::with_capacity(datasets.len());
    for dataset in &datasets {
        progress.set_message(dataset.id.clone());
        evaluations.push(evaluator.evaluate_dataset(dataset, &args.language));
        progress.inc(1);
    }
    progress.finish_and_clear();

    let aggregate = AggregateReport::from_evaluations(&evaluations);

    if args.json {
        let output = match evaluations.as_slice() {
            [single] => serde_json::to_value(&single.result)?,
            _ => json!({ "datasets": evaluations, "aggregate": aggregate }),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let multiple = evaluations.len() > 1;
    for evaluation in &evaluations {
        if multiple {
            print!("{}", report::render_dataset_header(evaluation));
        }
        print!("{}", report::render_table(&evaluation.result));
    }
    if let (true, Some(aggregate)) = (multiple, &aggregate) {
        print!("{}", report::render_aggregate(aggregate));
    }

    Ok(())
}
