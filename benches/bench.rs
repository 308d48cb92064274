//! Criterion benchmarks for lexbayes.
//!
//! Covers the three hot paths of the classifier:
//! - Text analysis (tokenize and stem)
//! - Training over a document log
//! - Ranking classes for a document

use std::hint::black_box;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use lexbayes::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use lexbayes::classifier::BayesClassifier;

const LABELS: [&str; 4] = ["sports", "science", "politics", "cooking"];

/// Generate labeled test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<(String, &'static str)> {
    let words = [
        "running", "played", "match", "goals", "experiment", "measured", "theories", "particles",
        "election", "voters", "debates", "policies", "recipes", "baking", "flavours", "simmering",
        "season", "results", "national", "reported", "quickly", "carefully", "energy", "winning",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 8 + (i % 24);
        let doc_words: Vec<&str> = (0..doc_length)
            .map(|j| words[(i * 7 + j * 13) % words.len()]) // Pseudo-random distribution
            .collect();
        documents.push((doc_words.join(" "), LABELS[i % LABELS.len()]));
    }

    documents
}

fn untrained_classifier(documents: &[(String, &'static str)]) -> BayesClassifier {
    let mut classifier = BayesClassifier::new().unwrap();
    for (text, label) in documents {
        classifier.add_document(text.as_str(), label).unwrap();
    }
    classifier
}

/// Benchmark text analysis.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let analyzer = EnglishAnalyzer::new().unwrap();
    let documents = generate_test_documents(100);

    group.bench_function("tokenize_and_stem_single", |b| {
        b.iter(|| black_box(analyzer.tokenize_and_stem(black_box(&documents[0].0))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("tokenize_and_stem_batch", |b| {
        b.iter(|| {
            for (text, _) in &documents {
                let _ = black_box(analyzer.tokenize_and_stem(black_box(text)));
            }
        })
    });

    group.finish();
}

/// Benchmark training.
fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");
    let documents = generate_test_documents(1000);

    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("add_and_train_1000", |b| {
        b.iter(|| {
            let mut classifier = untrained_classifier(black_box(&documents));
            black_box(classifier.train())
        })
    });

    group.bench_function("train_only_1000", |b| {
        b.iter_batched(
            || untrained_classifier(&documents),
            |mut classifier| black_box(classifier.train()),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

/// Benchmark classification.
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    let documents = generate_test_documents(1000);
    let mut classifier = untrained_classifier(&documents);
    classifier.train();

    group.bench_function("classify", |b| {
        b.iter(|| black_box(classifier.classify(black_box("the voters reported winning goals"))))
    });

    group.bench_function("get_classifications", |b| {
        b.iter(|| {
            black_box(classifier.get_classifications(black_box("measured energy of particles")))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_text_analysis,
    bench_training,
    bench_classification
);
criterion_main!(benches);
