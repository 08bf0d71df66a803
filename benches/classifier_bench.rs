//! Classifier throughput
//!
//! Cost grows with text length times lexicon size; these cover short reviews
//! up to long forum posts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pulse_core::{analyze, demo::SAMPLE_FEEDBACK};

fn bench_sample_feedback(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_samples");
    group.throughput(Throughput::Elements(SAMPLE_FEEDBACK.len() as u64));

    group.bench_function("sample_feedback", |b| {
        b.iter(|| {
            for text in SAMPLE_FEEDBACK {
                black_box(analyze(black_box(text)));
            }
        });
    });

    group.finish();
}

fn bench_text_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_length");

    for repeats in [1usize, 10, 100] {
        let text = SAMPLE_FEEDBACK.join(" ").repeat(repeats);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(text.len()), &text, |b, text| {
            b.iter(|| analyze(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sample_feedback, bench_text_length);
criterion_main!(benches);
