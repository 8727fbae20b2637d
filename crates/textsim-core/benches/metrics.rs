use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use textsim_core::{
    ScoreConfig, cosine_similarity, hamming_similarity, jaccard_similarity,
    levenshtein_similarity, score,
};

/// Input tiers: short title-like pairs up to paragraph-length text.
const TIERS: &[(&str, usize)] = &[("title", 4), ("sentence", 16), ("paragraph", 96)];

/// Deterministic word soup so runs are comparable.
fn sample_text(words: usize, phase: usize) -> String {
    const VOCAB: &[&str] = &[
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india",
        "juliet", "kilo", "lima",
    ];
    (0..words)
        .map(|i| VOCAB[(i * 7 + phase) % VOCAB.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics.tiered");

    for &(name, words) in TIERS {
        let a = sample_text(words, 0);
        let b = sample_text(words, 3);
        group.throughput(Throughput::Bytes((a.len() + b.len()) as u64));
        let pair = (a.as_str(), b.as_str());

        group.bench_with_input(BenchmarkId::new("hamming", name), &pair, |bch, &(a, b)| {
            bch.iter(|| black_box(hamming_similarity(a, b)))
        });
        group.bench_with_input(
            BenchmarkId::new("levenshtein", name),
            &pair,
            |bch, &(a, b)| bch.iter(|| black_box(levenshtein_similarity(a, b))),
        );
        group.bench_with_input(BenchmarkId::new("cosine", name), &pair, |bch, &(a, b)| {
            bch.iter(|| black_box(cosine_similarity(a, b)))
        });
        group.bench_with_input(BenchmarkId::new("jaccard", name), &pair, |bch, &(a, b)| {
            bch.iter(|| black_box(jaccard_similarity(a, b)))
        });
        group.bench_with_input(
            BenchmarkId::new("composite", name),
            &pair,
            |bch, &(a, b)| bch.iter(|| black_box(score(a, b, ScoreConfig::default()))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_metrics);
criterion_main!(benches);
