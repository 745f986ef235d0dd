use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use segscore::evaluation::boundaries;
use segscore::{PunctuationSegmenter, RuleBasedSegmenter, SegmentationEvaluator};

const SIMPLE_TEXT: &str = "Hello world. This is a test. How are you?";
const SAMPLE_TEXT: &str = r#"Dr. Smith went to the U.S.A. in 2020. He visited New York, N.Y. and Los Angeles, Calif. The weather was great! He said, "This is amazing." Then he returned home."#;
const SAMPLE_GOLD: [&str; 5] = [
    "Dr. Smith went to the U.S.A. in 2020.",
    "He visited New York, N.Y. and Los Angeles, Calif.",
    "The weather was great!",
    r#"He said, "This is amazing.""#,
    "Then he returned home.",
];

fn long_text() -> String {
    let paragraph = "Mr. Lee paid $12.75 for the book. It was 3.5 inches thick! Was it worth it? \
                     She said, \"Absolutely.\" Dr. Park disagreed, etc. The U.S.A. edition is better. ";
    paragraph.repeat(200)
}

fn bench_segmentation(c: &mut Criterion) {
    let rules = RuleBasedSegmenter::with_default_rules().unwrap();
    let punctuation = PunctuationSegmenter::new().unwrap();
    let long = long_text();

    let mut group = c.benchmark_group("segmentation");

    group.bench_function("rule_based_simple", |b| {
        b.iter(|| rules.split(black_box(SIMPLE_TEXT)))
    });

    group.bench_function("punctuation_simple", |b| {
        b.iter(|| punctuation.split(black_box(SIMPLE_TEXT)))
    });

    group.throughput(Throughput::Bytes(long.len() as u64));

    group.bench_function("rule_based_long", |b| {
        b.iter(|| rules.split(black_box(&long)))
    });

    group.bench_function("punctuation_long", |b| {
        b.iter(|| punctuation.split(black_box(&long)))
    });

    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let evaluator = SegmentationEvaluator::with_default_systems().unwrap();
    let long = long_text();
    let long_gold = RuleBasedSegmenter::with_default_rules().unwrap().split(&long);

    let mut group = c.benchmark_group("evaluation");

    group.bench_function("boundaries_sample", |b| {
        b.iter(|| boundaries(black_box(SAMPLE_TEXT), black_box(&SAMPLE_GOLD)))
    });

    group.bench_function("evaluate_sample", |b| {
        b.iter(|| evaluator.evaluate(black_box(SAMPLE_TEXT), black_box(&SAMPLE_GOLD), "en"))
    });

    let repeated_sentence = "Sentence number here is fine.";
    let repeated_text = format!("{repeated_sentence} ").repeat(30_000);
    let repeated_sentences = vec![repeated_sentence; 30_000];
    group.throughput(Throughput::Bytes(repeated_text.len() as u64));
    group.bench_function("boundaries_30k", |b| {
        b.iter(|| boundaries(black_box(&repeated_text), black_box(&repeated_sentences)))
    });

    group.throughput(Throughput::Bytes(long.len() as u64));
    group.bench_function("evaluate_long", |b| {
        b.iter(|| evaluator.evaluate(black_box(&long), black_box(&long_gold), "en"))
    });

    group.finish();
}

criterion_group!(benches, bench_segmentation, bench_evaluation);
criterion_main!(benches);
